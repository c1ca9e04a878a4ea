use crate::domain::profile::entities::{ActivityFrequency, Goal, Profile, Sex};

/// Lowest daily target we will ever hand to the prompt builder.
pub const CALORIE_FLOOR: i64 = 1200;

/// Estimates a daily calorie target from body metrics and training goal.
///
/// Mifflin-St Jeor basal rate, scaled by an activity multiplier and
/// shifted by the goal adjustment. Deterministic, no I/O.
pub fn estimate_daily_calories(profile: &Profile) -> i64 {
    let age = f64::from(profile.age);
    let basal = match profile.sex {
        Sex::Male => 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * age + 5.0,
        Sex::Female => 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * age - 161.0,
    };

    let multiplier = match profile.activity_frequency {
        ActivityFrequency::OneToTwo => 1.375,
        ActivityFrequency::ThreeToFour => 1.55,
        ActivityFrequency::FiveToSeven => 1.725,
    };

    let adjustment = match profile.goal {
        Goal::Cutting => -500.0,
        Goal::Recomp => 0.0,
        Goal::Bulking => 300.0,
    };

    let total = basal * multiplier + adjustment;
    if !total.is_finite() {
        return CALORIE_FLOOR;
    }

    (total.round() as i64).max(CALORIE_FLOOR)
}
