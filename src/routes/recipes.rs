use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::dataset;
use crate::error::AppResult;
use crate::models::{Recipe, RecipeMatch};

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    pub ingredients: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResp {
    pub recipes: Vec<RecipeMatch>,
}

fn normalize_terms(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

fn match_recipes(terms: &[String]) -> Vec<RecipeMatch> {
    let mut matches: Vec<RecipeMatch> = dataset::SAMPLE_RECIPES
        .iter()
        .filter_map(|recipe| {
            let match_count = recipe
                .ingredients
                .iter()
                .filter(|ing| {
                    let normalized = ing.to_lowercase();
                    terms.iter().any(|t| t == normalized.trim())
                })
                .count();
            (match_count > 0).then(|| RecipeMatch {
                recipe: recipe.clone(),
                match_count,
            })
        })
        .collect();

    // Stable sort keeps dataset order on equal counts
    matches.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    matches
}

/// # Errors
///
/// 400 when the `ingredients` query parameter is missing or empty.
pub async fn search(Query(query): Query<SearchQuery>) -> AppResult<Json<SearchResp>> {
    let raw = query.ingredients.unwrap_or_default();
    if raw.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Please provide ingredients as a query parameter.".to_string(),
        )
            .into());
    }

    let terms = normalize_terms(&raw);
    Ok(Json(SearchResp {
        recipes: match_recipes(&terms),
    }))
}

/// # Errors
///
/// 404 when no built-in recipe has the requested id.
pub async fn get(Path(id): Path<String>) -> AppResult<Json<Recipe>> {
    let Some(recipe) = dataset::find_by_id(&id) else {
        return Err((StatusCode::NOT_FOUND, "Recipe not found".to_string()).into());
    };
    Ok(Json(recipe.clone()))
}
