use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    /// Network failure, timeout, or non-success HTTP status on one attempt.
    #[error("embed: API error: {0}")]
    Api(String),

    /// 2xx response whose body does not match the expected
    /// `data[*].embedding` shape, or whose row count differs from the
    /// request batch size.
    #[error("embed: malformed response: {0}")]
    MalformedResponse(String),

    /// All allowed attempts failed. Carries the attempt count and the
    /// last attempt's error text.
    #[error("embed: failed to get embeddings after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: String },
}
