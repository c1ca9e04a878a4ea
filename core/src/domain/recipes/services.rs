use futures::future::join_all;
use serde_json::Value;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    profile::services::estimate_daily_calories,
    recipes::{
        entities::{Meal, MealPlan, Recipe},
        normalize::{normalize_meals, parse_completion},
        ports::{GeneratedImage, ImageClient, LlmClient, RecipeService},
        prompts::{build_image_prompt, build_recipe_prompt},
        value_objects::GenerateRecipesInput,
    },
};

impl<L, I> RecipeService for Service<L, I>
where
    L: LlmClient,
    I: ImageClient,
{
    async fn generate_recipes(&self, input: GenerateRecipesInput) -> Result<MealPlan, CoreError> {
        let target_calories = estimate_daily_calories(&input.profile);
        let prompt = build_recipe_prompt(
            &input.profile,
            &input.ingredients,
            input.meals_count,
            target_calories,
        );

        let content = self.llm_client.complete(prompt).await?;

        let parsed = parse_completion(&content);
        let raw = parsed.get("raw").and_then(Value::as_str).map(str::to_string);
        if raw.is_some() {
            tracing::warn!("completion was not valid JSON, surfacing raw text to the caller");
        }

        let meals = normalize_meals(&parsed);
        tracing::info!(meal_count = meals.len(), "normalized completion into meals");

        // One illustration call per meal, unordered fan-out; join_all
        // reassembles results in original meal order.
        let recipes = join_all(
            meals
                .into_iter()
                .map(|meal| illustrate_meal(&self.image_client, meal)),
        )
        .await;

        Ok(MealPlan {
            target_calories,
            recipes,
            raw,
        })
    }
}

/// Generates one meal's illustration. Failures are converted into the
/// recipe's `image_error` field so one bad image never aborts siblings.
async fn illustrate_meal<I: ImageClient>(image_client: &I, meal: Meal) -> Recipe {
    let prompt = build_image_prompt(&meal.name, &meal.description);
    match image_client.generate_image(prompt).await {
        Ok(image) => match displayable_reference(image) {
            Some(image_url) => Recipe {
                meal,
                image_url: Some(image_url),
                image_error: None,
            },
            None => Recipe {
                meal,
                image_url: None,
                image_error: Some("No image returned by model.".to_string()),
            },
        },
        Err(err) => {
            tracing::error!("Image generation failed: {}", err);
            Recipe {
                meal,
                image_url: None,
                image_error: Some(err.to_string()),
            }
        }
    }
}

/// Prefers a hosted URL, else wraps inline base64 data into a data URI.
fn displayable_reference(image: GeneratedImage) -> Option<String> {
    if let Some(url) = image.url.filter(|url| !url.is_empty()) {
        return Some(url);
    }
    image
        .b64_json
        .filter(|data| !data.is_empty())
        .map(|data| format!("data:image/png;base64,{data}"))
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use serde_json::json;

    use super::*;
    use crate::domain::{
        profile::entities::{ActivityFrequency, Goal, Profile, Sex},
        recipes::{
            ports::{MockImageClient, MockLlmClient},
            value_objects::Ingredient,
        },
    };

    fn sample_input(meals_count: u32) -> GenerateRecipesInput {
        GenerateRecipesInput {
            profile: Profile {
                weight_kg: 70.0,
                height_cm: 170.0,
                age: 28,
                sex: Sex::Female,
                activity_frequency: ActivityFrequency::ThreeToFour,
                goal: Goal::Recomp,
            },
            ingredients: vec![
                Ingredient {
                    name: "pasta".into(),
                    amount: 1.0,
                    unit: "item".into(),
                },
                Ingredient {
                    name: "egg".into(),
                    amount: 1.0,
                    unit: "item".into(),
                },
            ],
            meals_count,
        }
    }

    fn completion_with_meals(names: &[&str]) -> String {
        let meals: Vec<_> = names
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "description": format!("{name} bowl"),
                    "timeTakenMinutes": 20,
                    "servings": 2,
                    "ingredients": ["pasta", "egg"],
                    "steps": ["boil pasta 8-10 min until al dente"],
                    "estimatedMacros": {"protein_g": 30, "carbs_g": 60, "fat_g": 10, "calories": 1}
                })
            })
            .collect();
        format!("```json\n{}\n```", json!({ "meals": meals }))
    }

    fn url_image() -> GeneratedImage {
        GeneratedImage {
            url: Some("https://images.example/meal.png".to_string()),
            b64_json: None,
        }
    }

    #[tokio::test]
    async fn generates_full_plan_from_clean_completion() {
        let mut llm = MockLlmClient::new();
        let content = completion_with_meals(&["Pasta primavera", "Egg drop noodles"]);
        llm.expect_complete()
            .times(1)
            .returning(move |_| Box::pin(ready(Ok(content.clone()))));

        let mut images = MockImageClient::new();
        images
            .expect_generate_image()
            .times(2)
            .returning(|_| Box::pin(ready(Ok(url_image()))));

        let service = Service::new(llm, images);
        let plan = service.generate_recipes(sample_input(2)).await.unwrap();

        assert_eq!(plan.recipes.len(), 2);
        assert!(plan.raw.is_none());
        assert!(plan.target_calories >= 1200);
        for recipe in &plan.recipes {
            assert!(recipe.meal.time_taken_minutes > 0.0);
            assert!(recipe.meal.servings > 0.0);
            let macros = &recipe.meal.estimated_macros;
            let expected =
                (macros.protein_g * 4.0 + macros.carbs_g * 4.0 + macros.fat_g * 9.0).round();
            assert_eq!(macros.calories, expected);
            assert_eq!(
                recipe.image_url.as_deref(),
                Some("https://images.example/meal.png")
            );
            assert!(recipe.image_error.is_none());
        }
    }

    #[tokio::test]
    async fn one_failing_image_does_not_abort_siblings() {
        let mut llm = MockLlmClient::new();
        let content = completion_with_meals(&["Soup A", "Soup B", "Soup C"]);
        llm.expect_complete()
            .returning(move |_| Box::pin(ready(Ok(content.clone()))));

        let mut images = MockImageClient::new();
        images.expect_generate_image().times(3).returning(|prompt| {
            if prompt.contains("Soup B") {
                Box::pin(ready(Err(CoreError::ExternalServiceError(
                    "image model unavailable".to_string(),
                ))))
            } else {
                Box::pin(ready(Ok(url_image())))
            }
        });

        let service = Service::new(llm, images);
        let plan = service.generate_recipes(sample_input(3)).await.unwrap();

        assert_eq!(plan.recipes.len(), 3);
        let with_url = plan
            .recipes
            .iter()
            .filter(|r| r.image_url.is_some())
            .count();
        assert_eq!(with_url, 2);

        let failed = &plan.recipes[1];
        assert_eq!(failed.meal.name, "Soup B");
        assert!(failed.image_url.is_none());
        assert_eq!(
            failed.image_error.as_deref(),
            Some("image model unavailable")
        );
    }

    #[tokio::test]
    async fn parse_failure_surfaces_raw_with_zero_recipes() {
        let mut llm = MockLlmClient::new();
        llm.expect_complete()
            .returning(|_| Box::pin(ready(Ok("no JSON here, chef".to_string()))));

        // No image expectations: any illustration call would panic.
        let images = MockImageClient::new();

        let service = Service::new(llm, images);
        let plan = service.generate_recipes(sample_input(2)).await.unwrap();

        assert!(plan.recipes.is_empty());
        assert_eq!(plan.raw.as_deref(), Some("no JSON here, chef"));
        assert!(plan.target_calories >= 1200);
    }

    #[tokio::test]
    async fn inline_base64_becomes_data_reference() {
        let mut llm = MockLlmClient::new();
        let content = completion_with_meals(&["Omelette"]);
        llm.expect_complete()
            .returning(move |_| Box::pin(ready(Ok(content.clone()))));

        let mut images = MockImageClient::new();
        images.expect_generate_image().returning(|_| {
            Box::pin(ready(Ok(GeneratedImage {
                url: None,
                b64_json: Some("aGVsbG8=".to_string()),
            })))
        });

        let service = Service::new(llm, images);
        let plan = service.generate_recipes(sample_input(1)).await.unwrap();

        assert_eq!(
            plan.recipes[0].image_url.as_deref(),
            Some("data:image/png;base64,aGVsbG8=")
        );
    }

    #[tokio::test]
    async fn absent_image_payload_records_error() {
        let mut llm = MockLlmClient::new();
        let content = completion_with_meals(&["Omelette"]);
        llm.expect_complete()
            .returning(move |_| Box::pin(ready(Ok(content.clone()))));

        let mut images = MockImageClient::new();
        images
            .expect_generate_image()
            .returning(|_| Box::pin(ready(Ok(GeneratedImage::default()))));

        let service = Service::new(llm, images);
        let plan = service.generate_recipes(sample_input(1)).await.unwrap();

        let recipe = &plan.recipes[0];
        assert!(recipe.image_url.is_none());
        assert_eq!(
            recipe.image_error.as_deref(),
            Some("No image returned by model.")
        );
    }

    #[tokio::test]
    async fn upstream_completion_failure_propagates() {
        let mut llm = MockLlmClient::new();
        llm.expect_complete().returning(|_| {
            Box::pin(ready(Err(CoreError::ExternalServiceError(
                "LLM API returned error: 503".to_string(),
            ))))
        });

        let service = Service::new(llm, MockImageClient::new());
        let result = service.generate_recipes(sample_input(1)).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
