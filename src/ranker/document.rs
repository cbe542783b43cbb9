use serde::{Deserialize, Serialize};

/// A recipe in the searchable corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDocument {
    pub title: String,
    pub ingredients: String,
    #[serde(skip)]
    combined_text: String,
}

impl RecipeDocument {
    pub fn new(title: impl Into<String>, ingredients: impl Into<String>) -> Self {
        let title = title.into();
        let ingredients = ingredients.into();
        let combined_text = format!("{title} {ingredients}");
        Self {
            title,
            ingredients,
            combined_text,
        }
    }

    /// Title followed by the ingredient list; this is the text that gets indexed.
    pub fn combined_text(&self) -> &str {
        &self.combined_text
    }
}

/// A single ranked match returned by [`crate::ranker::Index::recommend`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub title: String,
    pub ingredients: String,
    pub score: f64,
}

/// The built-in seven recipe dataset.
pub fn reference_corpus() -> Vec<RecipeDocument> {
    [
        ("Garlic Butter Chicken", "chicken, garlic, butter, salt, pepper"),
        ("Creamy Chicken Pasta", "chicken, pasta, cream, garlic, cheese"),
        ("Egg Fried Rice", "rice, egg, spring onion, soy sauce, oil"),
        ("Tomato Basil Pasta", "pasta, tomato, basil, garlic, olive oil"),
        ("Veggie Salad", "lettuce, tomato, cucumber, olive oil, lemon"),
        ("Chocolate Mug Cake", "flour, cocoa, sugar, milk, chocolate"),
        ("Garlic Cheese Toast", "bread, garlic, cheese, butter"),
    ]
    .into_iter()
    .map(|(title, ingredients)| RecipeDocument::new(title, ingredients))
    .collect()
}
