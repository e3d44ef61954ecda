// Explainer module: turns a shortlist into a short customer-facing explanation.

pub mod openai;

pub use openai::OpenAiExplainer;

use crate::model::{ExplainError, QuizAnswer, ScoredVehicle};

#[async_trait::async_trait]
pub trait Explainer: Send + Sync {
    async fn explain(&self, vehicles: &[ScoredVehicle], quiz: &QuizAnswer) -> Result<String, ExplainError>;
}

/// Deterministic sentence used when no generated explanation is available.
pub fn fallback_explanation(vehicles: &[ScoredVehicle], quiz: &QuizAnswer) -> String {
    let names: Vec<&str> = vehicles.iter().map(|s| s.vehicle.name.as_str()).collect();
    format!(
        "Based on your preferences for {} quality and {} fuel type, we've selected {} as excellent matches for your budget of {}. These vehicles offer great value, reliability, and will meet your specific needs perfectly!",
        quiz.vehicle_quality,
        quiz.fuel_preference,
        names.join(", "),
        quiz.budget_range
    )
}

pub(crate) fn build_prompt(vehicles: &[ScoredVehicle], quiz: &QuizAnswer) -> String {
    let car_details: Vec<String> = vehicles
        .iter()
        .map(|s| format!("{} by {} (Match: {}%)", s.vehicle.name, s.vehicle.brand, s.match_score))
        .collect();

    format!(
        "You are a friendly car expert helping customers understand their personalized car recommendations.

Customer Profile:
- Budget: {}
- Desired Quality: {}
- Fuel Preference: {}
- Seating Needs: {} seats
- Timeline: {}

Top Recommendations: {}

Write a friendly, conversational 2-3 sentence explanation that:
1. Acknowledges their specific needs
2. Explains why these cars are perfect matches
3. Highlights the key benefits for their lifestyle

Be enthusiastic but professional, like a knowledgeable friend giving advice.",
        quiz.budget_range,
        quiz.vehicle_quality,
        quiz.fuel_preference,
        quiz.seats_needed,
        quiz.timeframe,
        car_details.join(", ")
    )
}
