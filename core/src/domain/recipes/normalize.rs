use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Value, json};

use crate::domain::recipes::entities::{EstimatedMacros, Meal};

/// Accepted key spellings for each numeric meal field, first parseable
/// match wins.
const TIME_TAKEN_KEYS: &[&str] = &[
    "timeTakenMinutes",
    "time_taken_minutes",
    "time_taken",
    "timeTaken",
    "time_minutes",
];
const SERVINGS_KEYS: &[&str] = &["servings", "servingSize", "serving_size", "servingsCount"];
const MACROS_KEYS: &[&str] = &["estimatedMacros", "estimated_macros"];

/// Trailing blank lines appended to each step for readable rendering.
const STEP_SUFFIX: &str = "\n\n\n\n\n";

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```json").expect("hardcoded regex"));

/// Removes Markdown code-fence markers the model sometimes wraps JSON in.
pub fn strip_code_fences(content: &str) -> String {
    JSON_FENCE
        .replace_all(content, "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parses completion text into JSON. On failure returns the sentinel
/// `{"raw": <original content>}` so the caller can surface the text
/// instead of erroring.
pub fn parse_completion(content: &str) -> Value {
    serde_json::from_str(&strip_code_fences(content)).unwrap_or_else(|_| json!({ "raw": content }))
}

/// Coerces a parsed completion payload into normalized meals. A missing
/// or non-array `meals` key yields an empty list, which is a valid
/// outcome rather than an error.
pub fn normalize_meals(payload: &Value) -> Vec<Meal> {
    let Some(meals) = payload.get("meals").and_then(Value::as_array) else {
        return Vec::new();
    };
    meals.iter().map(normalize_meal).collect()
}

fn normalize_meal(meal: &Value) -> Meal {
    let macros = first_present(meal, MACROS_KEYS).unwrap_or(&Value::Null);
    let protein_g = number_field(macros, &["protein_g"]);
    let carbs_g = number_field(macros, &["carbs_g"]);
    let fat_g = number_field(macros, &["fat_g"]);
    // Models get calorie arithmetic wrong; recompute and discard theirs.
    let calories = (protein_g * 4.0 + carbs_g * 4.0 + fat_g * 9.0).round();

    Meal {
        name: non_empty_string(meal.get("name")).unwrap_or_else(|| "Untitled meal".to_string()),
        description: non_empty_string(meal.get("description")).unwrap_or_default(),
        time_taken_minutes: number_field(meal, TIME_TAKEN_KEYS),
        servings: number_field(meal, SERVINGS_KEYS),
        ingredients: string_items(meal.get("ingredients")),
        steps: string_items(meal.get("steps"))
            .into_iter()
            .map(|step| format!("{step}{STEP_SUFFIX}"))
            .collect(),
        estimated_macros: EstimatedMacros {
            protein_g,
            carbs_g,
            fat_g,
            calories,
        },
    }
}

fn first_present<'a>(object: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| object.get(*key))
}

/// Resolves a numeric field through its alias table. Numbers may arrive
/// as JSON numbers or numeric strings; anything unparseable falls through
/// to the next alias and ultimately to 0. Negatives clamp to 0.
fn number_field(object: &Value, aliases: &[&str]) -> f64 {
    aliases
        .iter()
        .find_map(|key| object.get(*key).and_then(as_number))
        .map_or(0.0, |n| n.max(0.0))
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_items(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fences_case_insensitively() {
        let content = "```JSON\n{\"meals\": []}\n```";
        assert_eq!(strip_code_fences(content), "{\"meals\": []}");
    }

    #[test]
    fn parse_failure_yields_raw_sentinel() {
        let content = "Sorry, I cannot produce JSON today.";
        let parsed = parse_completion(content);
        assert_eq!(parsed["raw"], content);
        assert!(normalize_meals(&parsed).is_empty());
    }

    #[test]
    fn fenced_json_parses_cleanly() {
        let parsed = parse_completion("```json\n{\"meals\": [{\"name\": \"Toast\"}]}\n```");
        let meals = normalize_meals(&parsed);
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Toast");
    }

    #[test]
    fn tolerates_degenerate_payloads() {
        for payload in [
            Value::Null,
            json!({}),
            json!({"meals": "not an array"}),
            json!({"meals": [{}]}),
        ] {
            let meals = normalize_meals(&payload);
            for meal in &meals {
                assert_eq!(meal.name, "Untitled meal");
                assert_eq!(meal.estimated_macros.calories, 0.0);
            }
        }
    }

    #[test]
    fn calories_are_always_recomputed() {
        let payload = json!({"meals": [{
            "name": "Pasta",
            "estimatedMacros": {"protein_g": 30, "carbs_g": 50, "fat_g": 10, "calories": 9000}
        }]});
        let meals = normalize_meals(&payload);
        assert_eq!(meals[0].estimated_macros.calories, 30.0 * 4.0 + 50.0 * 4.0 + 10.0 * 9.0);
    }

    #[test]
    fn numeric_strings_and_alias_spellings_resolve() {
        let payload = json!({"meals": [{
            "name": "Fried rice",
            "time_taken_minutes": "25",
            "servingSize": 2,
            "estimated_macros": {"protein_g": "20.5", "carbs_g": 60, "fat_g": 15}
        }]});
        let meal = &normalize_meals(&payload)[0];
        assert_eq!(meal.time_taken_minutes, 25.0);
        assert_eq!(meal.servings, 2.0);
        assert_eq!(meal.estimated_macros.protein_g, 20.5);
    }

    #[test]
    fn alias_order_is_first_match_wins() {
        let payload = json!({"meals": [{
            "timeTakenMinutes": 15,
            "time_taken": 99
        }]});
        assert_eq!(normalize_meals(&payload)[0].time_taken_minutes, 15.0);
    }

    #[test]
    fn negative_macros_clamp_to_zero() {
        let payload = json!({"meals": [{
            "estimatedMacros": {"protein_g": -5, "carbs_g": 10, "fat_g": 0}
        }]});
        let macros = &normalize_meals(&payload)[0].estimated_macros;
        assert_eq!(macros.protein_g, 0.0);
        assert_eq!(macros.calories, 40.0);
    }

    #[test]
    fn steps_gain_rendering_suffix_and_non_arrays_coerce_empty() {
        let payload = json!({"meals": [{
            "steps": ["boil pasta 8-10 min"],
            "ingredients": "pasta"
        }]});
        let meal = &normalize_meals(&payload)[0];
        assert_eq!(meal.steps, vec!["boil pasta 8-10 min\n\n\n\n\n"]);
        assert!(meal.ingredients.is_empty());
    }

    #[test]
    fn normalization_is_idempotent_for_macros() {
        let payload = json!({"meals": [{
            "name": "Stir fry",
            "timeTakenMinutes": 20,
            "servings": 2,
            "ingredients": ["rice", "egg"],
            "steps": ["fry 3-4 min"],
            "estimatedMacros": {"protein_g": 25, "carbs_g": 70, "fat_g": 12}
        }]});
        let first = normalize_meals(&payload);
        let reserialized = json!({ "meals": first });
        let second = normalize_meals(&reserialized);
        assert_eq!(first[0].estimated_macros, second[0].estimated_macros);
        assert_eq!(first[0].time_taken_minutes, second[0].time_taken_minutes);
        assert_eq!(first[0].servings, second[0].servings);
    }
}
