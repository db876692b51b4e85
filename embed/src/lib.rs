pub mod config;
pub mod embed;
pub mod error;
pub mod logger;
pub mod openai;
pub(crate) mod openai_compat;
pub mod retry;
pub mod tokens;

pub use config::EmbedConfig;
pub use embed::Embedder;
pub use error::EmbedError;
pub use logger::{Logger, NoopLogger, TracingLogger};
pub use openai::OpenAI;
pub use retry::RetryPolicy;
pub use tokens::{CharRatioTokenCounter, TokenCounter};
