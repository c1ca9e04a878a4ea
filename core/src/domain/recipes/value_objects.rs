use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::profile::entities::Profile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub profile: Profile,
    pub ingredients: Vec<Ingredient>,
    pub meals_count: u32,
}
