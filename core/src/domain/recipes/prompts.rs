use crate::domain::{profile::entities::Profile, recipes::value_objects::Ingredient};

/// Builds the chat prompt asking for `meals_count` meals as JSON matching
/// the meal schema. Pure string template.
pub fn build_recipe_prompt(
    profile: &Profile,
    ingredients: &[Ingredient],
    meals_count: u32,
    target_calories: i64,
) -> String {
    let ingredient_list = ingredients
        .iter()
        .map(|item| {
            let unit = if item.unit.is_empty() { "g" } else { &item.unit };
            format!("{} {}{}", item.name, item.amount, unit)
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a nutrition-focused recipe planner for hall residents.
Create {meals_count} meal ideas using only the provided ingredients plus basic sauces and garnishes (chilli, pepper, soy sauce, salt, oil, vinegar).
Prioritize post-training recovery with higher protein and carbs.
User profile: {sex}, {age}y, {weight}kg, activity {activity} days/week, goal {goal}.
Target daily calories based on goal: ~{target_calories}.
Ingredients available: {ingredient_list}.
Give the time taken to cook this dish.
Give the serving size of the dish.
Do not put TBD or any empty placeholder.
Return JSON only with schema:
{{ "meals": [ {{ "name": string, "description": string, "timeTakenMinutes": number, "servings": number, "ingredients": [string], "steps": [string], "estimatedMacros": {{ "protein_g": number, "carbs_g": number, "fat_g": number, "calories": number }} }} ] }}
Steps must include cook times or visual cues (e.g., "boil pasta 8-10 min until al dente", "sear chicken 3-4 min per side until browned").
Estimated macros must include calories as a non-zero number.
timeTakenMinutes and servings must be non-zero numbers."#,
        sex = profile.sex.as_str(),
        age = profile.age,
        weight = profile.weight_kg,
        activity = profile.activity_frequency.as_str(),
        goal = profile.goal.as_str(),
    )
}

/// Builds the illustration prompt for a single meal. Pure string template.
pub fn build_image_prompt(name: &str, description: &str) -> String {
    let desc = if description.is_empty() {
        String::new()
    } else {
        format!(", {description}")
    };
    format!(
        "Top-down clipart illustration of {name}{desc}. Clean light background, vibrant colors, appetizing, no text, no people, no utensils, centered composition."
    )
}
