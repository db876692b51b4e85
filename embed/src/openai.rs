use std::sync::Arc;

use reqwest::Client;

use crate::config::EmbedConfig;
use crate::embed::Embedder;
use crate::error::EmbedError;
use crate::logger::{Logger, NoopLogger};
use crate::retry::RetryPolicy;

/// Embedding client for OpenAI-compatible endpoints.
///
/// Works with OpenAI itself and with any compatible provider via
/// `EmbedConfig::base_url`. Each call issues one request at a time and
/// retries transient failures with exponential backoff per the configured
/// [`RetryPolicy`].
pub struct OpenAI {
    client: Client,
    config: EmbedConfig,
    retry: RetryPolicy,
    logger: Arc<dyn Logger>,
}

impl OpenAI {
    pub fn new(config: EmbedConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            retry: RetryPolicy::default(),
            logger: Arc::new(NoopLogger),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Fetches embeddings for `chunks`, retrying failed attempts.
    ///
    /// Returns a matrix with exactly one row per chunk, in input order.
    /// An empty batch is sent as-is; whether that succeeds is up to the
    /// endpoint. Once the attempt ceiling is reached the terminal error
    /// carries the attempt count and the last attempt's error text;
    /// intermediate failures are logged, never surfaced.
    pub async fn get_embeddings(&self, chunks: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
        self.logger
            .info(&format!("getting embeddings for {} chunks", chunks.len()));

        let mut attempt = 0u32;
        loop {
            match crate::openai_compat::call_embedding_api(&self.client, &self.config, chunks).await
            {
                Ok(matrix) => return Ok(matrix),
                Err(err) => {
                    attempt += 1;

                    if !self.retry.is_retryable(&err) {
                        self.logger
                            .error(&format!("attempt {attempt} failed, not retryable: {err}"));
                        return Err(err);
                    }

                    if attempt >= self.retry.max_retries {
                        let terminal = EmbedError::RetriesExhausted {
                            attempts: attempt,
                            last: err.to_string(),
                        };
                        self.logger.error(&terminal.to_string());
                        return Err(terminal);
                    }

                    let delay = self.retry.delay_before(attempt - 1);
                    self.logger.warn(&format!(
                        "attempt {attempt}/{} failed: {err}. retrying in {delay:?}",
                        self.retry.max_retries
                    ));
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl Embedder for OpenAI {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let vecs = self.embed_batch(&[text]).await?;
        vecs.into_iter()
            .next()
            .ok_or_else(|| EmbedError::MalformedResponse("empty embedding matrix".to_string()))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
        self.get_embeddings(texts).await
    }
}
