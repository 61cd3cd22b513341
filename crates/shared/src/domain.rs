use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Correlation id minted once per submission cycle. Diagnostic only, never
/// sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Success,
    Error,
}

/// Lifecycle of one submission cycle. `Idle` and `Resolved` are equivalent
/// from the trigger's point of view: the control is enabled and a new cycle
/// may start, while the last resolved visual persists on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiState {
    Idle,
    Pending,
    Resolved(Resolution),
}

impl UiState {
    pub fn accepts_trigger(&self) -> bool {
        !matches!(self, UiState::Pending)
    }
}

/// Raw text values as collected from the form, prior to numeric parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawFieldValues {
    pub med_inc: String,
    pub house_age: String,
    pub ave_rooms: String,
    pub population: String,
}

/// Lenient float parse: trims the input and falls back to the longest
/// parseable prefix. Anything unparseable becomes NaN, which is forwarded
/// to the endpoint as-is rather than rejected here.
pub fn parse_numeric_field(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return value;
    }
    for end in (1..trimmed.len()).rev() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = trimmed[..end].parse::<f64>() {
            return value;
        }
    }
    f64::NAN
}
