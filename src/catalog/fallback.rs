// Hardcoded reference data used whenever the record store is unavailable.
use crate::model::{ScoredVehicle, Vehicle};

#[allow(clippy::too_many_arguments)]
fn reference_vehicle(
    id: &str,
    name: &str,
    brand: &str,
    price_range: &str,
    body_type: &str,
    vehicle_quality: &str,
    stock_level: &str,
    weekly_repayment: &str,
    variants_in_range: u32,
    popular: &str,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        price_range: price_range.to_string(),
        fuel_type: "Hybrid".to_string(),
        body_type: body_type.to_string(),
        seats: "5".to_string(),
        vehicle_quality: vehicle_quality.to_string(),
        stock_level: stock_level.to_string(),
        image_url: String::new(),
        weekly_repayment: weekly_repayment.to_string(),
        variants_in_range,
        popular: popular.to_string(),
    }
}

pub fn fallback_vehicles() -> Vec<Vehicle> {
    vec![
        reference_vehicle(
            "dummy1", "RAV4 Hybrid", "Toyota", "$45,000-$55,000", "SUV", "Premium", "High",
            "$280/week", 3, "Yes",
        ),
        reference_vehicle(
            "dummy2", "CR-V Hybrid", "Honda", "$48,000-$58,000", "SUV", "Premium", "Medium",
            "$290/week", 2, "Yes",
        ),
        reference_vehicle(
            "dummy3", "Corolla Hybrid", "Toyota", "$28,000-$35,000", "Sedan", "Everyday", "High",
            "$190/week", 4, "No",
        ),
    ]
}

/// Shortlist shown when the catalog is empty; the scores are fixed, not computed.
pub fn fallback_shortlist() -> Vec<ScoredVehicle> {
    fallback_vehicles()
        .into_iter()
        .zip([95u8, 88])
        .map(|(vehicle, match_score)| ScoredVehicle { vehicle, match_score })
        .collect()
}

pub fn fallback_makes() -> Vec<String> {
    [
        "Toyota", "BMW", "Mercedes-Benz", "Audi", "Nissan", "Hyundai", "Kia", "Honda", "Mazda",
        "Subaru",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn fallback_models(make: &str) -> Vec<String> {
    let models: &[&str] = match make {
        "Toyota" => &["Camry", "Corolla", "RAV4", "Prius", "Highlander"],
        "BMW" => &["3 Series", "5 Series", "X3", "X5", "i4"],
        "Mercedes-Benz" => &["C-Class", "E-Class", "GLC", "GLE", "EQA"],
        "Audi" => &["A3", "A4", "Q3", "Q5", "e-tron"],
        _ => &["Model 1", "Model 2", "Model 3"],
    };
    models.iter().map(|s| s.to_string()).collect()
}
