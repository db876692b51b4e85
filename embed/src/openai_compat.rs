use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::EmbedConfig;
use crate::error::EmbedError;

/// OpenAI-compatible embedding request body.
#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a [&'a str],
    model: &'a str,
}

/// OpenAI-compatible embedding response.
#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Issues one embedding request against an OpenAI-compatible endpoint.
///
/// Every failure mode maps to an attempt-level error: network errors and
/// non-2xx statuses become [`EmbedError::Api`], a 2xx body with the wrong
/// shape or the wrong row count becomes [`EmbedError::MalformedResponse`].
/// Retry lives one layer up.
pub(crate) async fn call_embedding_api(
    client: &Client,
    cfg: &EmbedConfig,
    texts: &[&str],
) -> Result<Vec<Vec<f32>>, EmbedError> {
    let url = format!("{}/embeddings", cfg.base_url);
    let body = EmbeddingRequest {
        input: texts,
        model: &cfg.model,
    };

    let resp = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", cfg.api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| EmbedError::Api(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(EmbedError::Api(format!("HTTP {status}: {body}")));
    }

    let bytes = resp.bytes().await.map_err(|e| EmbedError::Api(e.to_string()))?;
    parse_response(&bytes, texts.len())
}

/// Extracts the embedding matrix from a 2xx response body.
///
/// Rows are taken in endpoint order, which is assumed to match request
/// order; no re-sorting. A row count that differs from the batch size
/// means no usable result at all (the matrix is all-or-nothing).
fn parse_response(body: &[u8], expected_rows: usize) -> Result<Vec<Vec<f32>>, EmbedError> {
    let resp: EmbeddingResponse =
        serde_json::from_slice(body).map_err(|e| EmbedError::MalformedResponse(e.to_string()))?;

    if resp.data.len() != expected_rows {
        return Err(EmbedError::MalformedResponse(format!(
            "expected {expected_rows} embeddings, endpoint returned {}",
            resp.data.len()
        )));
    }

    Ok(resp.data.into_iter().map(|d| d.embedding).collect())
}
