//! One fetch cycle's worth of display data.
//!
//! A `Snapshot` is built in full and applied in full: renderers receive it
//! as an immutable prop and never observe a half-updated cycle. On any
//! failure the previous snapshot stays on screen untouched, favoring a
//! stale-but-consistent display over partial data.

use crate::api_client::FetchError;
use crate::shape::{shape_forecast, shape_summary};
use common::{Forecast, Summary};
use serde_json::Value;
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub summary: Option<Summary>,
    pub forecast: Option<Forecast>,
}

/// Runs one fetch cycle: summary strictly first, then forecast. The UI
/// treats "summary arrived" as a coarser readiness signal than "forecast
/// arrived", so the forecast request is never started when the summary
/// request fails. Generic over the two fetchers so the sequencing contract
/// is testable without a browser.
pub async fn load_snapshot<S, SF, F, FF>(
    fetch_summary: S,
    fetch_forecast: F,
) -> Result<Snapshot, FetchError>
where
    S: FnOnce() -> SF,
    SF: Future<Output = Result<Value, FetchError>>,
    F: FnOnce() -> FF,
    FF: Future<Output = Result<Value, FetchError>>,
{
    let summary_raw = fetch_summary().await?;
    let forecast_raw = fetch_forecast().await?;

    Ok(Snapshot {
        summary: shape_summary(Some(summary_raw)),
        forecast: shape_forecast(Some(forecast_raw)),
    })
}
