// Plain-text rendering of a lead e-mail
use crate::model::{CarMatch, LeadCapture};
use chrono::{DateTime, Utc};

pub fn lead_subject(lead: &LeadCapture) -> String {
    let car_info = lead
        .selected_cars
        .first()
        .map(|c| c.name.as_str())
        .unwrap_or("Car Quiz Lead");
    format!(
        "🚗 New Lead from {} – Interested in {}",
        broker_label(lead),
        car_info
    )
}

pub fn lead_body(lead: &LeadCapture, created_at: DateTime<Utc>) -> String {
    let quiz = &lead.quiz_answers;
    let cars: String = lead.selected_cars.iter().map(car_block).collect();

    format!(
        "
Hi BATD Sourcing Team,

You've received a new lead from {broker}. The client has completed their car quiz and is ready for vehicle sourcing support.

👤 Client Details
Full Name: {name}
Email: {email}
Phone: {phone}
Preferred Contact Method: {contact}
Submitted By Broker: {broker} ({broker_email})

🎯 Client Quiz Responses
Budget Range: {budget}
Seats Required: {seats}
Fuel Type Preference: {fuel}
Vehicle Quality Preference: {quality}
Purchase Timeframe: {timeframe}

🚘 Top Car Matches
{cars}
Additional Comments: {comments}

---
Generated by Car Quiz System
Time: {time}
",
        broker = broker_label(lead),
        name = lead.customer_name,
        email = lead.customer_email,
        phone = lead.customer_phone,
        contact = lead.preferred_contact_method.as_deref().unwrap_or("Email"),
        broker_email = lead.broker_email.as_deref().unwrap_or("N/A"),
        budget = quiz.budget_range,
        seats = quiz.seats_needed,
        fuel = quiz.fuel_preference,
        quality = quiz.vehicle_quality,
        timeframe = quiz.timeframe,
        cars = cars,
        comments = lead.additional_comments.as_deref().unwrap_or("None"),
        time = created_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

fn broker_label(lead: &LeadCapture) -> &str {
    lead.broker_name
        .as_deref()
        .filter(|b| !b.is_empty())
        .unwrap_or("Direct")
}

fn car_block(car: &CarMatch) -> String {
    format!(
        "
[Car Name]: {}
Price: {}
Fuel Type: {}
Seats: {}
Body: {}
Quality: {}
Stock Status: {}
Match Score: {}%
Image: {}
",
        car.name,
        car.price_range,
        car.fuel_type,
        car.seats,
        car.body_type,
        car.vehicle_quality.as_deref().filter(|q| !q.is_empty()).unwrap_or("Not specified"),
        car.stock_level,
        car.match_percentage,
        car.image_url.as_deref().filter(|u| !u.is_empty()).unwrap_or("No image"),
    )
}
