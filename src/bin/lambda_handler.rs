//! AWS Lambda handler for the hosted commission calculator
//!
//! Accepts the deal inputs as JSON and returns the base rate, duration
//! multiplier, commission, display strings and calculation breakdown.
//!
//! Supports Lambda Function URLs for direct HTTP access.
//! Set DURATION_MULTIPLIERS_PATH to load an alternate multiplier table at cold start.

use commission_calculator::{
    api::{handle_request, ApiReply},
    deal::SELECTABLE_DURATIONS,
    CommissionEngine, DurationMultipliers,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use std::path::Path;

fn reply_response(reply: ApiReply) -> Result<Response<Body>, Error> {
    let body = if reply.body.is_empty() {
        Body::Empty
    } else {
        Body::Text(reply.body)
    };
    Ok(Response::builder()
        .status(reply.status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(body)?)
}

/// Lambda handler function
async fn handler(engine: &CommissionEngine, event: Request) -> Result<Response<Body>, Error> {
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => String::new(),
    };

    let reply = handle_request(engine, event.method().as_str(), &body_str);
    if reply.status != 200 {
        log::info!("Rejected request ({}): {}", reply.status, reply.body);
    }
    reply_response(reply)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let multipliers = match std::env::var("DURATION_MULTIPLIERS_PATH") {
        Ok(path) => DurationMultipliers::from_csv_path(Path::new(&path))?,
        Err(_) => DurationMultipliers::default(),
    };
    multipliers.warn_unpaid(&SELECTABLE_DURATIONS);

    let engine = CommissionEngine::with_multipliers(multipliers);
    let engine = &engine;
    run(service_fn(move |event: Request| async move { handler(engine, event).await })).await
}
