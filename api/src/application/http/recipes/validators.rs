use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use fridgechef_core::domain::{profile::entities::Profile, recipes::value_objects::Ingredient};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipesRequest {
    pub profile: Profile,

    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    pub ingredients: Vec<Ingredient>,

    #[validate(range(min = 1, max = 5, message = "mealsCount must be between 1 and 5"))]
    pub meals_count: u32,
}
