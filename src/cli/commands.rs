use crate::ranker::{Index, QueryResult};
use crate::{Error, Result};

/// Run a query against the local index and print the ranking
pub fn recommend(index: &Index, query: &str, top_k: usize, json: bool) -> Result<()> {
    if top_k == 0 {
        return Err(Error::Validation("--top-k must be at least 1".to_string()));
    }

    let results = index.recommend(query, top_k);

    if json {
        let output = serde_json::to_string_pretty(&results)
            .map_err(|e| Error::Internal(format!("Failed to serialize results: {e}")))?;
        println!("{output}");
    } else {
        print!("{}", format_results(&results));
    }

    Ok(())
}

/// Print every recipe in corpus order
pub fn list_corpus(index: &Index) {
    println!("\n{} recipes ({} terms):\n", index.len(), index.vocabulary_size());
    println!("{:<4} {:<30} {:<45}", "#", "Title", "Ingredients");
    println!("{}", "-".repeat(79));

    for (i, doc) in index.documents().iter().enumerate() {
        println!(
            "{:<4} {:<30} {:<45}",
            i + 1,
            truncate(&doc.title, 28),
            truncate(&doc.ingredients, 45)
        );
    }
}

fn format_results(results: &[QueryResult]) -> String {
    if results.iter().all(|r| r.score <= 0.0) {
        return "No strong matches\n".to_string();
    }

    let mut out = format!("\nTop {} recipes:\n\n", results.len());
    out.push_str(&format!(
        "{:<7} {:<30} {:<40}\n",
        "Score", "Title", "Ingredients"
    ));
    out.push_str(&format!("{}\n", "-".repeat(77)));

    for r in results {
        out.push_str(&format!(
            "{:<7.3} {:<30} {:<40}\n",
            r.score,
            truncate(&r.title, 28),
            truncate(&r.ingredients, 40)
        ));
    }

    out
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
