/// Connection settings for an OpenAI-compatible embedding endpoint.
///
/// Caller-supplied and already validated; the client never mutates it.
#[derive(Debug, Clone)]
pub struct EmbedConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl EmbedConfig {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }
}
