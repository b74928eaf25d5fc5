//! Lenient field deserializers. The EnvHealth API is trusted for shape but
//! not for every value: nulls, omissions, and the odd mistyped field must
//! degrade to "absent" instead of failing the whole payload.

use crate::RiskLevel;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts any JSON value; yields `Some` only for finite numbers.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()))
}

/// Accepts any JSON value; truncates floats, yields `None` for non-numbers.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_i64()
        .or_else(|| value.as_f64().filter(|v| v.is_finite()).map(|v| v as i64)))
}

/// Accepts any JSON value; non-strings and unrecognized strings collapse to
/// `RiskLevel::Unknown`.
pub(crate) fn lenient_risk<'de, D>(deserializer: D) -> Result<RiskLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value.as_str() {
        Some("Low") => RiskLevel::Low,
        Some("Medium") => RiskLevel::Medium,
        Some("High") => RiskLevel::High,
        _ => RiskLevel::Unknown,
    })
}
