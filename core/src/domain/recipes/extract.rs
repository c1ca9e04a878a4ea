use serde_json::Value;

use crate::domain::recipes::normalize::strip_code_fences;

/// Pulls a displayable recipe list out of an arbitrary response payload.
///
/// Display clients may receive the current `{recipes: [...]}` shape, the
/// older `{meals: [...]}` shape, or a raw-text carrier under `meals.raw`.
/// Malformed input at any step degrades to an empty list, never an error.
pub fn extract_recipes(payload: &Value) -> Vec<Value> {
    if let Some(recipes) = payload.get("recipes").and_then(Value::as_array) {
        return recipes.clone();
    }
    if let Some(meals) = payload.get("meals").and_then(Value::as_array) {
        return meals.clone();
    }
    if let Some(raw) = payload
        .get("meals")
        .and_then(|meals| meals.get("raw"))
        .and_then(Value::as_str)
    {
        if let Ok(parsed) = serde_json::from_str::<Value>(&strip_code_fences(raw)) {
            if let Some(meals) = parsed.get("meals").and_then(Value::as_array) {
                return meals.clone();
            }
        }
    }
    Vec::new()
}
