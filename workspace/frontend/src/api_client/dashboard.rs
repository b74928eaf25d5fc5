//! Typed endpoints for the two dashboard payloads. Both take the monitored
//! city from settings so a fetch cycle always queries a consistent city.

use super::{get_raw, FetchError};
use crate::settings;
use serde_json::Value;

pub async fn get_summary() -> Result<Value, FetchError> {
    let city = settings::get_settings().city;
    log::trace!("Fetching summary for city: {}", city);

    let result = get_raw(&format!("/summary?city={}", city)).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch summary: {}", e);
    } else {
        log::info!("Successfully fetched summary for city: {}", city);
    }

    result
}

pub async fn get_forecast() -> Result<Value, FetchError> {
    let city = settings::get_settings().city;
    log::trace!("Fetching forecast for city: {}", city);

    let result = get_raw(&format!("/forecast?city={}", city)).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch forecast: {}", e);
    } else {
        log::info!("Successfully fetched forecast for city: {}", city);
    }

    result
}
