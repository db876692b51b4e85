/// Token counting for upstream chunking decisions.
///
/// Pure and side-effect free. The transport never calls this; it exists so
/// callers can size chunk batches against a model's context budget before
/// handing them to an [`crate::Embedder`].
pub trait TokenCounter: Send + Sync {
    fn count_tokens(&self, text: &str, model: &str) -> usize;
}

/// Character-ratio token estimate.
///
/// Subword tokenizers for common embedding models average roughly 3-4
/// characters per token on English text. Using 3 over-estimates slightly,
/// which errs toward smaller batches instead of blown context limits.
pub struct CharRatioTokenCounter;

const CHARS_PER_TOKEN: usize = 3;

impl TokenCounter for CharRatioTokenCounter {
    fn count_tokens(&self, text: &str, _model: &str) -> usize {
        (text.chars().count() + CHARS_PER_TOKEN - 1) / CHARS_PER_TOKEN
    }
}
