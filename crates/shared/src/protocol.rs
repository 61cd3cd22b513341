use serde::{Deserialize, Serialize};

use crate::domain::{parse_numeric_field, RawFieldValues};

/// Body POSTed to the prediction endpoint. Field names are the endpoint's
/// fixed schema. Non-finite values serialize as `null`, matching what the
/// endpoint already tolerates (or rejects) for unparseable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub med_inc: f64,
    pub house_age: f64,
    pub ave_rooms: f64,
    pub population: f64,
}

impl PredictRequest {
    pub fn from_raw(raw: &RawFieldValues) -> Self {
        Self {
            med_inc: parse_numeric_field(&raw.med_inc),
            house_age: parse_numeric_field(&raw.house_age),
            ave_rooms: parse_numeric_field(&raw.ave_rooms),
            population: parse_numeric_field(&raw.population),
        }
    }
}

/// Successful endpoint response. The shape is trusted; anything that fails
/// to decode into this is treated as a malformed response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub price: f64,
}
