//! HTTP detection backend speaking to a model-serving endpoint.

use std::time::Duration;

use image::RgbaImage;
use serde::Deserialize;
use tracing::debug;

use occupancy_common::classify::{classify_occupancy, RawDetection};
use occupancy_common::provider::{DetectError, DetectOptions, DetectionProvider};
use occupancy_common::record::DetectionRecord;

const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Response envelope of the detection service. Raw per-class detections
/// come back here and are classified into occupancy records locally.
#[derive(Debug, Deserialize)]
struct DetectResponse {
    success: bool,
    #[serde(default)]
    predictions: Vec<RawDetection>,
    #[serde(default)]
    error: Option<String>,
}

/// Detection backend backed by a model-serving HTTP service.
///
/// Posts the PNG-encoded image to `{base}/detect` with both thresholds as
/// query parameters, then turns the returned raw detections into occupancy
/// records.
pub struct HttpProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProvider {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, base_url }
    }

    /// Probe the service's health endpoint.
    pub async fn check_health(&self) -> Result<bool, DetectError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DetectError::Unreachable(e.to_string()))?;

        Ok(response.status().is_success())
    }

    fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, DetectError> {
        let mut bytes = Vec::new();
        image
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .map_err(|e| DetectError::Encode(e.to_string()))?;
        Ok(bytes)
    }
}

impl DetectionProvider for HttpProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn detect(
        &self,
        image: &RgbaImage,
        opts: &DetectOptions,
    ) -> Result<Vec<DetectionRecord>, DetectError> {
        let url = format!("{}/detect", self.base_url);
        let body = Self::encode_png(image)?;

        let response = self
            .client
            .post(&url)
            .query(&[
                ("confidence", opts.confidence.to_string()),
                ("iou", opts.iou.to_string()),
            ])
            .body(body)
            .header("Content-Type", "image/png")
            .send()
            .await
            .map_err(|e| DetectError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(DetectError::Rejected(format!("{status}: {error_text}")));
        }

        let payload: DetectResponse = response
            .json()
            .await
            .map_err(|e| DetectError::MalformedPayload(e.to_string()))?;

        if !payload.success {
            return Err(DetectError::Rejected(
                payload.error.unwrap_or_else(|| "unspecified error".to_string()),
            ));
        }

        debug!(
            "service returned {} raw detection(s)",
            payload.predictions.len()
        );

        Ok(classify_occupancy(&payload.predictions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_payload() {
        let json = r#"{
            "success": true,
            "predictions": [
                {"x": 100, "y": 80, "width": 120, "height": 100, "confidence": 0.93, "class": "dining table", "class_id": 60},
                {"x": 130, "y": 40, "width": 40, "height": 90, "confidence": 0.88, "class": "person", "class_id": 0}
            ],
            "stats": {"total_tables": 1}
        }"#;

        let payload: DetectResponse = serde_json::from_str(json).unwrap();
        assert!(payload.success);
        assert_eq!(payload.predictions.len(), 2);

        let records = classify_occupancy(&payload.predictions);
        assert_eq!(records.len(), 1);
        assert!(records[0].occupied); // person center is on the table
        assert_eq!(records[0].table_number, "T1");
    }

    #[test]
    fn parses_error_payload() {
        let json = r#"{"success": false, "error": "model not loaded"}"#;
        let payload: DetectResponse = serde_json::from_str(json).unwrap();
        assert!(!payload.success);
        assert!(payload.predictions.is_empty());
        assert_eq!(payload.error.as_deref(), Some("model not loaded"));
    }
}
