use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A meal suggestion after normalization. All numeric fields are
/// guaranteed present and non-negative regardless of what the model
/// returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    pub description: String,
    pub time_taken_minutes: f64,
    pub servings: f64,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub estimated_macros: EstimatedMacros,
}

/// `calories` is always derived from the macro grams, never taken from
/// the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EstimatedMacros {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub calories: f64,
}

/// A meal paired with the outcome of its illustration call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(flatten)]
    pub meal: Meal,
    pub image_url: Option<String>,
    pub image_error: Option<String>,
}

/// The full generation result returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub target_calories: i64,
    pub recipes: Vec<Recipe>,
    /// Original completion text when it could not be parsed as JSON,
    /// kept for diagnostics and manual recovery.
    pub raw: Option<String>,
}
