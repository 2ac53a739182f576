use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::models::AppState;
use crate::openai::OpenAiClient;

const SYSTEM_PROMPT: &str = "You are a skilled chef and recipe generator.";
const CHAT_TEMPERATURE: f32 = 0.7;
const CHAT_MAX_TOKENS: u32 = 500;
const IMAGE_SIZE: &str = "512x512";
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeReq {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub dietary_preferences: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateRecipeResp {
    pub recipe: String,
}

#[derive(Deserialize, Debug)]
pub struct GenerateImageReq {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResp {
    pub image_url: String,
}

fn build_recipe_prompt(ingredients: &[String], dietary_preferences: Option<&str>) -> String {
    let mut prompt = format!(
        "Generate a detailed, creative, and easy-to-follow recipe using the following \
         ingredients: {}. Include a list of ingredients, step-by-step cooking instructions, \
         an estimated cooking time, and suggestions for ingredient substitutions if a key \
         ingredient is unavailable. ",
        ingredients.join(", ")
    );

    if let Some(prefs) = dietary_preferences
        && !prefs.trim().is_empty()
    {
        let _ = write!(
            prompt,
            "The recipe should comply with these dietary preferences: {prefs}."
        );
    }

    prompt
}

fn chat_client(state: &AppState) -> OpenAiClient {
    OpenAiClient::new(
        state.config.openai_api_url.clone(),
        state.config.openai_api_key.clone().unwrap_or_default(),
        state.config.chat_model.clone(),
    )
}

fn image_client(state: &AppState) -> OpenAiClient {
    OpenAiClient::new(
        state.config.openai_api_url.clone(),
        state.config.openai_api_key.clone().unwrap_or_default(),
        state.config.image_model.clone(),
    )
}

/// # Errors
///
/// 400 when no ingredients were sent; provider errors are relayed with
/// their status.
pub async fn recipe(
    State(state): State<AppState>,
    Json(req): Json<GenerateRecipeReq>,
) -> AppResult<Json<GenerateRecipeResp>> {
    if req.ingredients.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "No ingredients provided".to_string()).into());
    }

    let prompt = build_recipe_prompt(&req.ingredients, req.dietary_preferences.as_deref());

    let recipe = chat_client(&state)
        .chat_text(
            &state.http,
            SYSTEM_PROMPT,
            &prompt,
            CHAT_TEMPERATURE,
            CHAT_MAX_TOKENS,
            PROVIDER_TIMEOUT,
        )
        .await
        .map_err(|e| AppError::upstream(e, "Failed to generate recipe"))?;

    Ok(Json(GenerateRecipeResp { recipe }))
}

/// # Errors
///
/// 400 when the prompt is missing or blank; provider errors are relayed
/// with their status.
pub async fn image(
    State(state): State<AppState>,
    Json(req): Json<GenerateImageReq>,
) -> AppResult<Json<GenerateImageResp>> {
    if req.prompt.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Prompt is required".to_string()).into());
    }

    let image_url = image_client(&state)
        .generate_image(&state.http, &req.prompt, IMAGE_SIZE, PROVIDER_TIMEOUT)
        .await
        .map_err(|e| AppError::upstream(e, "Failed to generate image"))?;

    Ok(Json(GenerateImageResp { image_url }))
}
