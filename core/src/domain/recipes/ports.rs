use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipes::{entities::MealPlan, value_objects::GenerateRecipesInput},
};

/// Raw image payload as returned by the generation endpoint. Providers
/// return either a hosted URL or inline base64 data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedImage {
    pub url: Option<String>,
    pub b64_json: Option<String>,
}

/// Chat-completion client for recipe text generation
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn complete(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Image-generation client for meal illustrations
#[cfg_attr(test, mockall::automock)]
pub trait ImageClient: Send + Sync {
    fn generate_image(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<GeneratedImage, CoreError>> + Send;
}

/// Service trait for recipe generation business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;
}
