// Server-rendered recommendation form

pub mod handlers;
