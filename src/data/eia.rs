//! EIA API integration for the diesel fuel price series.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::Span;
use crate::error::EtlError;

/// One raw (period, value) pair as reported upstream. A missing price comes
/// through as `None` and is skipped later with a logged reason.
pub type RawPoint = (String, Option<Decimal>);

pub struct EiaClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl EiaClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the raw (period, value) sequence for one series.
    ///
    /// Tolerates both envelope shapes the API has served over time: the
    /// v1-compatible `series` array and the v2 `response.data` list. Both
    /// normalize into the same pair sequence. No retry/backoff here; any
    /// failure surfaces as a single `UpstreamFetch` for the series.
    pub async fn fetch_series(&self, span: Span, start: &str) -> Result<Vec<RawPoint>, EtlError> {
        let url = format!("{}/v2/seriesid/{}", self.base_url, span.series_id());

        let resp = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("start", start)])
            .send()
            .await
            .map_err(|e| fetch_error(span, format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(fetch_error(span, format!("request failed with status {status}")));
        }

        let payload: Envelope = resp
            .json()
            .await
            .map_err(|e| fetch_error(span, format!("failed to parse response: {e}")))?;

        Ok(payload.into_points())
    }
}

fn fetch_error(span: Span, reason: String) -> EtlError {
    EtlError::UpstreamFetch { span, reason }
}

/// The two response envelopes accepted from upstream.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope {
    /// v1-compatible: `{"series":[{"data":[[period, value], ...]}]}`
    V1 { series: Vec<V1Series> },
    /// v2: `{"response":{"data":[{"period": ..., "value": ...}, ...]}}`
    V2 { response: V2Response },
}

#[derive(Debug, Deserialize)]
struct V1Series {
    data: Vec<(String, Option<Decimal>)>,
}

#[derive(Debug, Deserialize)]
struct V2Response {
    #[serde(default)]
    data: Vec<V2Record>,
}

#[derive(Debug, Deserialize)]
struct V2Record {
    period: String,
    value: Option<Decimal>,
}

impl Envelope {
    fn into_points(self) -> Vec<RawPoint> {
        match self {
            Envelope::V1 { mut series } => {
                if series.is_empty() {
                    return Vec::new();
                }
                series.swap_remove(0).data
            }
            Envelope::V2 { response } => response
                .data
                .into_iter()
                .map(|rec| (rec.period, rec.value))
                .collect(),
        }
    }
}
