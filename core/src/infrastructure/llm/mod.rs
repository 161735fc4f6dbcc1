pub mod chef;
pub mod gemini_client;

pub use chef::LlmChef;
pub use gemini_client::GeminiLLMClient;
