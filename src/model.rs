// Core structs: QuizAnswer, Vehicle, ScoredVehicle, lead and search requests
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

fn default_body_type() -> String {
    "SUV".to_string()
}

fn default_contact_method() -> Option<String> {
    Some("Email".to_string())
}

/// Answers to the five quiz questions (plus body type).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizAnswer {
    #[serde(default = "default_body_type")]
    pub body_type: String,
    pub budget_range: String,
    pub vehicle_quality: String,
    pub fuel_preference: String,
    pub seats_needed: String,
    pub timeframe: String,
}

/// A record as returned by the record store: an id plus loosely typed fields.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// A catalog vehicle with every field resolved.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price_range: String,
    pub fuel_type: String,
    pub body_type: String,
    pub seats: String,
    pub vehicle_quality: String,
    pub stock_level: String,
    pub image_url: String,
    pub weekly_repayment: String,
    pub variants_in_range: u32,
    pub popular: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredVehicle {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub match_score: u8,
}

/// Vehicle as presented to the customer and echoed back on lead capture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarMatch {
    pub name: String,
    pub brand: String,
    pub price_range: String,
    pub match_percentage: u8,
    pub stock_level: String,
    pub fuel_type: String,
    pub body_type: String,
    pub seats: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub vehicle_quality: Option<String>,
    #[serde(default)]
    pub weekly_repayment: Option<String>,
}

impl From<&ScoredVehicle> for CarMatch {
    fn from(scored: &ScoredVehicle) -> Self {
        let v = &scored.vehicle;
        Self {
            name: v.name.clone(),
            brand: v.brand.clone(),
            price_range: v.price_range.clone(),
            match_percentage: scored.match_score,
            stock_level: v.stock_level.clone(),
            fuel_type: v.fuel_type.clone(),
            body_type: v.body_type.clone(),
            seats: v.seats.clone(),
            image_url: Some(v.image_url.clone()),
            vehicle_quality: Some(v.vehicle_quality.clone()),
            weekly_repayment: Some(v.weekly_repayment.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeadCapture {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(default)]
    pub broker_name: Option<String>,
    #[serde(default)]
    pub broker_email: Option<String>,
    pub selected_cars: Vec<CarMatch>,
    pub quiz_answers: QuizAnswer,
    #[serde(default = "default_contact_method")]
    pub preferred_contact_method: Option<String>,
    #[serde(default)]
    pub additional_comments: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    pub make: String,
    pub model: String,
    pub looking_for: String,
    #[serde(default)]
    pub additional_comments: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub broker_name: Option<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog source is not configured")]
    NotConfigured,
    #[error("catalog request failed: {0}")]
    Http(String),
    #[error("catalog request timed out")]
    Timeout,
    #[error("catalog responded with status {0}")]
    InvalidResponse(u16),
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CatalogError::Timeout
        } else if e.is_decode() {
            CatalogError::Decode(e.to_string())
        } else {
            CatalogError::Http(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("explanation generator is not configured")]
    NotConfigured,
    #[error("completion request failed: {0}")]
    Http(String),
    #[error("completion endpoint responded with status {0}")]
    InvalidResponse(u16),
    #[error("completion contained no text")]
    EmptyCompletion,
}

impl From<reqwest::Error> for ExplainError {
    fn from(e: reqwest::Error) -> Self {
        ExplainError::Http(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("mail relay is not configured")]
    NotConfigured,
    #[error("invalid mail address: {0}")]
    Address(String),
    #[error("message build failed: {0}")]
    Message(String),
    #[error("smtp send failed: {0}")]
    Smtp(String),
    #[error("mail task failed: {0}")]
    Join(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}
