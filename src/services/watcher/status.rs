use serde_json::Value;

use super::types::WatchError;

/// Review states the Practicum API is allowed to report.
///
/// The set is closed on purpose: a value outside it most likely means the
/// API contract changed, and that has to surface to an operator instead of
/// being skipped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Reviewing,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn from_raw(raw: &str) -> Result<Self, WatchError> {
        match raw {
            "reviewing" => Ok(Self::Reviewing),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(WatchError::UnknownStatus(other.to_string())),
        }
    }

    /// Fixed human-readable verdict for each known status.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Builds the notification sentence for one homework record.
pub fn parse_status(record: &Value) -> Result<String, WatchError> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(WatchError::MissingField("homework_name"))?;

    let raw_status = record
        .get("status")
        .and_then(Value::as_str)
        .ok_or(WatchError::MissingField("status"))?;

    let status = ReviewStatus::from_raw(raw_status)?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
