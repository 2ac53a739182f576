use serde::Serialize;

use crate::config::Config;

/* ---------- App state ---------- */
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Config,
}

/* ---------- API models ---------- */

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image_url: String,
}

/// A search hit: the recipe plus how many query ingredients it contains.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub match_count: usize,
}
