use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: Sex,
    pub activity_frequency: ActivityFrequency,
    pub goal: Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

/// Training sessions per week, as the UI collects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ActivityFrequency {
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "3-4")]
    ThreeToFour,
    #[serde(rename = "5-7")]
    FiveToSeven,
}

impl ActivityFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToTwo => "1-2",
            Self::ThreeToFour => "3-4",
            Self::FiveToSeven => "5-7",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cutting,
    Recomp,
    Bulking,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cutting => "cutting",
            Self::Recomp => "recomp",
            Self::Bulking => "bulking",
        }
    }
}
