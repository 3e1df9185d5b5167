//! JSON request/response handling for the hosted calculator
//!
//! Transport-agnostic: the Lambda binary feeds the request body in and
//! writes the returned status and body out.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::commission::{CommissionEngine, CommissionResult};
use crate::deal::{
    CommissionRequest, DEFAULT_DEAL_DURATION, DEFAULT_DEAL_SIZE, DEFAULT_YEARLY_BONUS,
    DEFAULT_YEARLY_TARGET,
};
use crate::error::{CommissionError, Result};

/// Default currency symbol (GBP)
pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// Input body. Missing fields take the form defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    #[serde(default = "default_deal_size")]
    pub deal_size: f64,

    #[serde(default = "default_deal_duration")]
    pub deal_duration: i64,

    #[serde(default = "default_yearly_target")]
    pub yearly_target: f64,

    #[serde(default = "default_yearly_bonus")]
    pub yearly_bonus: f64,

    /// Symbol used in the display strings (default: £)
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_deal_size() -> f64 { DEFAULT_DEAL_SIZE }
fn default_deal_duration() -> i64 { DEFAULT_DEAL_DURATION }
fn default_yearly_target() -> f64 { DEFAULT_YEARLY_TARGET }
fn default_yearly_bonus() -> f64 { DEFAULT_YEARLY_BONUS }
fn default_currency_symbol() -> String { DEFAULT_CURRENCY_SYMBOL.to_string() }

impl CalculateRequest {
    pub fn to_commission_request(&self) -> CommissionRequest {
        CommissionRequest::new(
            self.deal_size,
            self.deal_duration,
            self.yearly_target,
            self.yearly_bonus,
        )
    }
}

impl Default for CalculateRequest {
    fn default() -> Self {
        Self {
            deal_size: DEFAULT_DEAL_SIZE,
            deal_duration: DEFAULT_DEAL_DURATION,
            yearly_target: DEFAULT_YEARLY_TARGET,
            yearly_bonus: DEFAULT_YEARLY_BONUS,
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Formatted metrics as shown in the results panel
#[derive(Debug, Clone, Serialize)]
pub struct DisplayValues {
    pub base_rate: String,
    pub duration_multiplier: String,
    pub commission: String,
}

/// Output body for a successful calculation
#[derive(Debug, Clone, Serialize)]
pub struct CalculateResponse {
    pub base_rate: f64,
    pub duration_multiplier: f64,
    pub commission: f64,
    pub display: DisplayValues,
    pub breakdown: Vec<String>,
}

impl CalculateResponse {
    pub fn new(request: &CommissionRequest, result: &CommissionResult, currency_symbol: &str) -> Self {
        Self {
            base_rate: result.base_rate,
            duration_multiplier: result.duration_multiplier,
            commission: result.commission,
            display: DisplayValues {
                base_rate: result.base_rate_display(),
                duration_multiplier: result.duration_multiplier_display(),
                commission: result.commission_display(currency_symbol),
            },
            breakdown: result.breakdown(request, currency_symbol),
        }
    }
}

/// Status code and JSON body to send back
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }).to_string(),
        }
    }
}

/// Validate and run a parsed request
pub fn calculate(engine: &CommissionEngine, request: &CalculateRequest) -> Result<CalculateResponse> {
    let commission_request = request.to_commission_request();
    commission_request.validate()?;
    let result = engine.calculate(&commission_request)?.ensure_finite()?;
    Ok(CalculateResponse::new(&commission_request, &result, &request.currency_symbol))
}

/// Handle one HTTP request. `OPTIONS` is a CORS preflight and gets an
/// empty 200; every other method is treated as a calculation.
pub fn handle_request(engine: &CommissionEngine, method: &str, body: &str) -> ApiReply {
    if method.eq_ignore_ascii_case("OPTIONS") {
        return ApiReply {
            status: 200,
            body: String::new(),
        };
    }
    handle_body(engine, body)
}

/// Handle a raw JSON body. An empty body means "all defaults".
pub fn handle_body(engine: &CommissionEngine, body: &str) -> ApiReply {
    let body = if body.trim().is_empty() { "{}" } else { body };

    let request: CalculateRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return ApiReply::error(400, &CommissionError::from(e).to_string()),
    };

    let response = match calculate(engine, &request) {
        Ok(r) => r,
        Err(e) => return ApiReply::error(400, &e.to_string()),
    };

    match serde_json::to_string(&response) {
        Ok(body) => ApiReply { status: 200, body },
        Err(e) => ApiReply::error(500, &e.to_string()),
    }
}
