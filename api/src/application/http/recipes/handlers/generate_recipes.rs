use axum::extract::State;

use crate::application::http::{
    recipes::validators::GenerateRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use fridgechef_core::domain::recipes::{
    entities::MealPlan, ports::RecipeService, value_objects::GenerateRecipesInput,
};

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipes",
    summary = "Generate recipes from fridge contents",
    description = "Builds a calorie target from the profile, asks the AI for meal suggestions sized to it, and illustrates each meal.",
    responses(
        (status = 200, body = MealPlan)
    ),
    request_body = GenerateRecipesRequest
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipesRequest>,
) -> Result<Response<MealPlan>, ApiError> {
    let profile = &payload.profile;
    if profile.weight_kg <= 0.0 || profile.height_cm <= 0.0 || profile.age == 0 {
        return Err(ApiError::ValidationError(
            "weightKg, heightCm and age must be positive".to_string(),
        ));
    }

    let plan = state
        .service
        .generate_recipes(GenerateRecipesInput {
            profile: payload.profile,
            ingredients: payload.ingredients,
            meals_count: payload.meals_count,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
