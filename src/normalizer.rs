use crate::model::{RawRecord, Vehicle};
use serde_json::Value;
use tracing::debug;

const DEFAULT_NAME: &str = "Unknown Model";
const DEFAULT_BRAND: &str = "Unknown Brand";
const DEFAULT_PRICE_RANGE: &str = "Contact for pricing";
const DEFAULT_FUEL_TYPE: &str = "Petrol";
const DEFAULT_BODY_TYPE: &str = "Car";
const DEFAULT_SEATS: &str = "5";
const DEFAULT_QUALITY: &str = "Everyday";
const DEFAULT_STOCK_LEVEL: &str = "Available";
const DEFAULT_REPAYMENT: &str = "Contact for quote";
const DEFAULT_VARIANTS: u32 = 1;
const DEFAULT_POPULAR: &str = "No";

pub fn normalize_all(records: &[RawRecord]) -> Vec<Vehicle> {
    records.iter().map(normalize_record).collect()
}

/// Maps one raw record onto a [`Vehicle`]. Absent or unusable fields resolve
/// to their defaults; this never fails.
pub fn normalize_record(record: &RawRecord) -> Vehicle {
    let fields = &record.fields;
    let text = |key: &str, default: &str| text_field(fields.get(key), default);

    let image_field = fields
        .get("Image Loading")
        .filter(|v| is_present(v))
        .or_else(|| fields.get("Image"));
    let image_url = extract_image_url(image_field);

    let vehicle = Vehicle {
        id: record.id.clone().unwrap_or_default(),
        name: text("Model", DEFAULT_NAME),
        brand: text("Brand", DEFAULT_BRAND),
        price_range: text("Price Range", DEFAULT_PRICE_RANGE),
        fuel_type: text("Fuel Type", DEFAULT_FUEL_TYPE),
        body_type: text("Body Type", DEFAULT_BODY_TYPE),
        seats: text("Seats", DEFAULT_SEATS),
        vehicle_quality: text("Vehicle Quality", DEFAULT_QUALITY),
        stock_level: text("Stock Level", DEFAULT_STOCK_LEVEL),
        image_url,
        weekly_repayment: text("Weekly Repayment Estimate", DEFAULT_REPAYMENT),
        variants_in_range: fields
            .get("Variants In Range")
            .and_then(variant_count)
            .unwrap_or(DEFAULT_VARIANTS),
        popular: text("Popular", DEFAULT_POPULAR),
    };

    debug!(
        "Normalized {}: {} {} (image: {})",
        vehicle.id,
        vehicle.brand,
        vehicle.name,
        !vehicle.image_url.is_empty()
    );
    vehicle
}

/// Resolves an attachment-style image field to a flat URL.
///
/// Accepts a direct URL string or a list of attachment objects (the first
/// object's `url` wins). Anything else, including an empty list, gives "".
pub fn extract_image_url(field: Option<&Value>) -> String {
    match field {
        Some(Value::String(url)) => url.clone(),
        Some(Value::Array(attachments)) => attachments
            .first()
            .and_then(|first| first.get("url"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn text_field(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

fn variant_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Bool(b) => *b,
    }
}
