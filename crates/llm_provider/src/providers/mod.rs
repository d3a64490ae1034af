pub mod anthropic;
pub mod cohere;
pub mod googleai;
pub mod huggingface;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use cohere::CohereProvider;
pub use googleai::GoogleAiProvider;
pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAiProvider;
