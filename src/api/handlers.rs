use crate::api::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::model::{CarMatch, LeadCapture, QuizAnswer, SearchRequest, Vehicle};
use axum::extract::{Query, State};
use axum::Json;
use lettre::Address;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Exact make/model searches are shown as near-certain matches.
const SEARCH_MATCH_PERCENTAGE: u8 = 95;

pub async fn root(State(state): State<AppState>) -> Json<ApiResponse> {
    ApiResponse::ok(
        format!("🚗 {} is running!", state.app_name),
        json!({ "version": &*state.version }),
    )
}

pub async fn health() -> Json<ApiResponse> {
    ApiResponse::ok(
        "API is healthy",
        json!({ "status": "healthy", "services": ["airtable", "openai", "email"] }),
    )
}

pub async fn submit_quiz(
    State(state): State<AppState>,
    Json(quiz): Json<QuizAnswer>,
) -> Json<ApiResponse> {
    let outcome = state.service.submit_quiz(&quiz).await;
    let matches: Vec<CarMatch> = outcome.matches.iter().map(CarMatch::from).collect();
    info!("Successfully matched {} cars with explanation", matches.len());

    ApiResponse::ok(
        "Quiz processed successfully with real data",
        json!({
            "matches": matches,
            "explanation": outcome.explanation,
            "total_matches": matches.len(),
            "data_source": "airtable",
        }),
    )
}

pub async fn search_cars(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<ApiResponse> {
    let cars: Vec<CarMatch> = state
        .service
        .search(&request)
        .await
        .iter()
        .map(search_result)
        .collect();

    ApiResponse::ok(
        format!("Found {} results", cars.len()),
        json!({
            "total_results": cars.len(),
            "cars": cars,
            "search_terms": format!("{} {}", request.make, request.model),
            "looking_for": request.looking_for,
        }),
    )
}

fn search_result(vehicle: &Vehicle) -> CarMatch {
    CarMatch {
        name: format!("{} {}", vehicle.brand, vehicle.name).trim().to_string(),
        brand: vehicle.brand.clone(),
        price_range: vehicle.price_range.clone(),
        match_percentage: SEARCH_MATCH_PERCENTAGE,
        stock_level: vehicle.stock_level.clone(),
        fuel_type: vehicle.fuel_type.clone(),
        body_type: vehicle.body_type.clone(),
        seats: vehicle.seats.clone(),
        image_url: Some(vehicle.image_url.clone()),
        vehicle_quality: Some(vehicle.vehicle_quality.clone()),
        weekly_repayment: Some(vehicle.weekly_repayment.clone()),
    }
}

pub async fn capture_lead(
    State(state): State<AppState>,
    Json(lead): Json<LeadCapture>,
) -> Result<Json<ApiResponse>, ApiError> {
    validate_lead(&lead)?;

    if !state.service.capture_lead(&lead).await {
        return Err(ApiError::DeliveryFailed);
    }

    Ok(ApiResponse::ok(
        "Lead captured successfully",
        json!({
            "customer": lead.customer_name,
            "email_sent": true,
            "cars_selected": lead.selected_cars.len(),
        }),
    ))
}

fn validate_lead(lead: &LeadCapture) -> Result<(), ApiError> {
    lead.customer_email
        .parse::<Address>()
        .map_err(|e| ApiError::Unprocessable(format!("customer_email: {}", e)))?;
    if let Some(broker_email) = lead.broker_email.as_deref().filter(|e| !e.is_empty()) {
        broker_email
            .parse::<Address>()
            .map_err(|e| ApiError::Unprocessable(format!("broker_email: {}", e)))?;
    }
    Ok(())
}

pub async fn all_cars(State(state): State<AppState>) -> Json<ApiResponse> {
    let cars = state.service.all_vehicles().await;
    ApiResponse::ok(format!("Retrieved {} cars", cars.len()), json!({ "cars": cars }))
}

pub async fn makes(State(state): State<AppState>) -> Json<ApiResponse> {
    let makes = state.service.makes().await;
    ApiResponse::ok(format!("Found {} car makes", makes.len()), json!({ "makes": makes }))
}

#[derive(Debug, Deserialize)]
pub struct ModelsQuery {
    pub make: String,
}

pub async fn models(
    State(state): State<AppState>,
    Query(query): Query<ModelsQuery>,
) -> Json<ApiResponse> {
    let models = state.service.models_for_make(&query.make).await;
    ApiResponse::ok(
        format!("Found {} models for {}", models.len(), query.make),
        json!({ "models": models, "make": query.make }),
    )
}
