use crate::matcher::lookup::{
    budget_bucket, BrandClass, ELECTRIC_NAME_KEYWORDS, IMMEDIATE_TIMEFRAMES, IN_STOCK_LEVELS,
};
use crate::matcher::tiebreak::tie_break_nudge;
use crate::model::{QuizAnswer, Vehicle};
use tracing::trace;

pub const MAX_SCORE: u32 = 100;
const SUPERCAR_PENALTY: u32 = 60;
const LUXURY_IN_EVERYDAY_PENALTY: u32 = 20;

/// Quality tier requested by the quiz, compared case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QualityTier {
    Everyday,
    Premium,
    Luxury,
    Other,
}

impl QualityTier {
    fn parse(quality: &str) -> Self {
        match quality.to_lowercase().as_str() {
            "everyday" => QualityTier::Everyday,
            "premium" => QualityTier::Premium,
            "luxury" => QualityTier::Luxury,
            _ => QualityTier::Other,
        }
    }
}

/// Scores a vehicle against a quiz answer, 0..=100.
///
/// Six bonus categories are summed, then the two penalties are subtracted
/// (each floored at zero), then the stable tie-break nudge is added and the
/// total is capped at 100.
pub fn score_vehicle(vehicle: &Vehicle, quiz: &QuizAnswer) -> u8 {
    let tier = QualityTier::parse(&quiz.vehicle_quality);
    let brand = BrandClass::of(&vehicle.brand);

    let mut score = quality_points(tier, brand)
        + fuel_points(vehicle, &quiz.fuel_preference)
        + budget_points(vehicle, &quiz.budget_range)
        + seats_points(vehicle, &quiz.seats_needed)
        + body_type_points(vehicle, &quiz.body_type)
        + timeframe_points(vehicle, &quiz.timeframe);

    score = apply_penalties(score, tier, brand);
    score += u32::from(tie_break_nudge(
        &vehicle.id,
        &quiz.budget_range,
        &quiz.vehicle_quality,
    ));

    score.min(MAX_SCORE) as u8
}

fn quality_points(tier: QualityTier, brand: Option<BrandClass>) -> u32 {
    match (tier, brand) {
        (QualityTier::Everyday, Some(BrandClass::Reliable)) => 40,
        (QualityTier::Everyday, None) => 25,
        (QualityTier::Premium, Some(BrandClass::Luxury)) => 40,
        (QualityTier::Premium, Some(BrandClass::Reliable)) => 30,
        (QualityTier::Luxury, Some(BrandClass::Luxury | BrandClass::Supercar)) => 40,
        (QualityTier::Luxury, _) => 10,
        _ => 0,
    }
}

fn fuel_points(vehicle: &Vehicle, preference: &str) -> u32 {
    let name = vehicle.name.to_lowercase();
    let fuel = vehicle.fuel_type.to_lowercase();

    match preference.to_lowercase().as_str() {
        "hybrid" => {
            if name.contains("hybrid") || name.contains("prius") || fuel.contains("hybrid") {
                30
            } else if fuel.contains("petrol") {
                // Hybrid variants of petrol models are common.
                15
            } else {
                0
            }
        }
        "electric" => {
            if ELECTRIC_NAME_KEYWORDS.iter().any(|k| name.contains(k)) || fuel.contains("electric")
            {
                30
            } else {
                0
            }
        }
        "petrol" if fuel.contains("petrol") || fuel.contains("gasoline") => 30,
        "diesel" if fuel.contains("diesel") => 30,
        _ => 0,
    }
}

fn budget_points(vehicle: &Vehicle, budget_range: &str) -> u32 {
    let Some(bucket) = budget_bucket(&budget_range.to_lowercase()) else {
        return 0;
    };
    trace!("budget '{}' selects the {} bucket", budget_range, bucket.label);
    let name = vehicle.name.to_lowercase();
    if bucket.model_keywords.iter().any(|k| name.contains(k)) {
        20
    } else {
        0
    }
}

// Containment, not equality: quiz "5" matches vehicle seats "5-7".
fn seats_points(vehicle: &Vehicle, seats_needed: &str) -> u32 {
    if vehicle.seats.contains(seats_needed) { 10 } else { 0 }
}

fn body_type_points(vehicle: &Vehicle, body_type: &str) -> u32 {
    if vehicle.body_type.trim().to_lowercase() == body_type.trim().to_lowercase() {
        10
    } else {
        0
    }
}

fn timeframe_points(vehicle: &Vehicle, timeframe: &str) -> u32 {
    let timeframe = timeframe.to_lowercase();
    let stock = vehicle.stock_level.to_lowercase();
    if IMMEDIATE_TIMEFRAMES.contains(&timeframe.as_str()) && IN_STOCK_LEVELS.contains(&stock.as_str())
    {
        5
    } else {
        0
    }
}

fn apply_penalties(score: u32, tier: QualityTier, brand: Option<BrandClass>) -> u32 {
    match (brand, tier) {
        (Some(BrandClass::Supercar), t) if t != QualityTier::Luxury => {
            score.saturating_sub(SUPERCAR_PENALTY)
        }
        (Some(BrandClass::Luxury), QualityTier::Everyday) => {
            score.saturating_sub(LUXURY_IN_EVERYDAY_PENALTY)
        }
        _ => score,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn vehicle(id: &str, brand: &str, name: &str, fuel: &str, body: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            price_range: "Contact for pricing".to_string(),
            fuel_type: fuel.to_string(),
            body_type: body.to_string(),
            seats: "5".to_string(),
            vehicle_quality: "Everyday".to_string(),
            stock_level: "High".to_string(),
            image_url: String::new(),
            weekly_repayment: "Contact for quote".to_string(),
            variants_in_range: 1,
            popular: "No".to_string(),
        }
    }

    pub(crate) fn quiz(quality: &str, fuel: &str, budget: &str) -> QuizAnswer {
        QuizAnswer {
            body_type: "SUV".to_string(),
            budget_range: budget.to_string(),
            vehicle_quality: quality.to_string(),
            fuel_preference: fuel.to_string(),
            seats_needed: "5".to_string(),
            timeframe: "Ready Now".to_string(),
        }
    }

    fn without_nudge(v: &Vehicle, q: &QuizAnswer) -> u32 {
        u32::from(score_vehicle(v, q))
            - u32::from(tie_break_nudge(&v.id, &q.budget_range, &q.vehicle_quality))
    }

    #[test]
    fn categories_add_up() {
        let rav4 = vehicle("rec1", "Toyota", "RAV4 Hybrid", "Hybrid", "SUV");
        let q = quiz("Premium", "Hybrid", "$35k-$50k");
        // 30 quality + 30 fuel + 0 budget (entry bucket) + 10 seats + 10 body + 5 timeframe
        assert_eq!(without_nudge(&rav4, &q), 85);
        assert!(score_vehicle(&rav4, &q) >= 75);
    }

    #[test]
    fn score_is_deterministic() {
        let v = vehicle("recABC", "Mazda", "CX5", "Petrol", "SUV");
        let q = quiz("Everyday", "Petrol", "$50k-$70k family");
        assert_eq!(score_vehicle(&v, &q), score_vehicle(&v, &q));
    }

    #[test]
    fn quality_rules() {
        use BrandClass as B;
        use QualityTier as T;
        assert_eq!(quality_points(T::Everyday, Some(B::Reliable)), 40);
        assert_eq!(quality_points(T::Everyday, None), 25);
        assert_eq!(quality_points(T::Everyday, Some(B::Luxury)), 0);
        assert_eq!(quality_points(T::Everyday, Some(B::Supercar)), 0);
        assert_eq!(quality_points(T::Premium, Some(B::Luxury)), 40);
        assert_eq!(quality_points(T::Premium, Some(B::Reliable)), 30);
        assert_eq!(quality_points(T::Premium, None), 0);
        assert_eq!(quality_points(T::Luxury, Some(B::Supercar)), 40);
        assert_eq!(quality_points(T::Luxury, Some(B::Reliable)), 10);
        assert_eq!(quality_points(T::Luxury, None), 10);
        assert_eq!(quality_points(T::parse("PREMIUM"), Some(B::Luxury)), 40);
        assert_eq!(quality_points(T::parse("Budget"), Some(B::Reliable)), 0);
    }

    #[test]
    fn fuel_rules() {
        let petrol = vehicle("a", "Mazda", "Mazda3", "Petrol", "Sedan");
        let prius = vehicle("b", "Toyota", "Prius", "Petrol", "Hatch");
        let leaf = vehicle("c", "Nissan", "Leaf", "Battery", "Hatch");
        let diesel = vehicle("d", "Ford", "Ranger", "Diesel", "Ute");
        let gas = vehicle("e", "Ford", "Mustang", "Gasoline", "Coupe");

        assert_eq!(fuel_points(&prius, "hybrid"), 30);
        assert_eq!(fuel_points(&petrol, "Hybrid"), 15);
        assert_eq!(fuel_points(&diesel, "Hybrid"), 0);
        assert_eq!(fuel_points(&leaf, "Electric"), 30);
        assert_eq!(fuel_points(&diesel, "Electric"), 0);
        assert_eq!(fuel_points(&gas, "Petrol"), 30);
        assert_eq!(fuel_points(&diesel, "Petrol"), 0);
        assert_eq!(fuel_points(&diesel, "DIESEL"), 30);
        assert_eq!(fuel_points(&petrol, "Hydrogen"), 0);
    }

    #[test]
    fn electric_name_keywords_are_substrings() {
        // "ev" also hits names like "Chevrolet Trax".
        let trax = vehicle("x", "Chevrolet", "Chevrolet Trax", "Petrol", "SUV");
        assert_eq!(fuel_points(&trax, "Electric"), 30);
    }

    #[test]
    fn budget_uses_only_the_selected_bucket() {
        let corolla = vehicle("a", "Toyota", "Corolla Hybrid", "Hybrid", "Sedan");
        let camry = vehicle("b", "Toyota", "Camry", "Hybrid", "Sedan");
        assert_eq!(budget_points(&corolla, "$35k-$50k"), 20);
        assert_eq!(budget_points(&camry, "$35k-$50k"), 0);
        assert_eq!(budget_points(&camry, "Best value"), 20);
        assert_eq!(budget_points(&camry, "unsure"), 0);
    }

    #[test]
    fn seats_use_containment() {
        let mut v = vehicle("a", "Kia", "Carnival", "Diesel", "Van");
        v.seats = "5-7".to_string();
        assert_eq!(seats_points(&v, "5"), 10);
        assert_eq!(seats_points(&v, "7"), 10);
        assert_eq!(seats_points(&v, "8"), 0);
    }

    #[test]
    fn body_type_is_trimmed_and_case_insensitive() {
        let v = vehicle("a", "Kia", "Sportage", "Petrol", " suv ");
        assert_eq!(body_type_points(&v, "SUV"), 10);
        assert_eq!(body_type_points(&v, "Sedan"), 0);
    }

    #[test]
    fn timeframe_needs_both_urgency_and_stock() {
        let mut v = vehicle("a", "Kia", "Sportage", "Petrol", "SUV");
        assert_eq!(timeframe_points(&v, "ASAP"), 5);
        assert_eq!(timeframe_points(&v, "Within 3 months"), 0);
        v.stock_level = "Low".to_string();
        assert_eq!(timeframe_points(&v, "Immediately"), 0);
        v.stock_level = "In Stock".to_string();
        assert_eq!(timeframe_points(&v, "ready now"), 5);
    }

    #[test]
    fn supercar_penalty_floors_at_zero() {
        let mclaren = vehicle("rec9", "McLaren", "720S", "Petrol", "Coupe");
        let q = quiz("Everyday", "Petrol", "unsure");
        // 0 quality + 30 fuel + 10 seats + 5 timeframe = 45, minus 60 floors at 0
        assert_eq!(without_nudge(&mclaren, &q), 0);
        assert!(score_vehicle(&mclaren, &q) < 8);
    }

    #[test]
    fn supercar_is_not_penalised_for_luxury() {
        let ferrari = vehicle("rec8", "Ferrari", "Roma", "Petrol", "Coupe");
        let q = quiz("Luxury", "Petrol", "unsure");
        assert_eq!(without_nudge(&ferrari, &q), 40 + 30 + 10 + 5);
    }

    #[test]
    fn luxury_brand_penalised_for_everyday() {
        let bmw = vehicle("rec7", "BMW", "X5", "Petrol", "SUV");
        let q = quiz("Everyday", "Petrol", "unsure");
        // 0 + 30 + 10 + 10 + 5 = 55, minus 20
        assert_eq!(without_nudge(&bmw, &q), 35);
    }

    #[test]
    fn score_never_exceeds_cap() {
        let mut v = vehicle("rec1", "Toyota", "Corolla Hybrid", "Hybrid", "SUV");
        v.seats = "5".to_string();
        let q = quiz("Everyday", "Hybrid", "entry");
        // 40 + 30 + 20 + 10 + 10 + 5 = 115 before the cap
        assert_eq!(score_vehicle(&v, &q), 100);
    }
}
