pub mod error;
pub mod openrouter;
pub mod traits;
pub mod types;

pub use error::{AiError, Result};
pub use openrouter::OpenRouter;
pub use traits::ChatModel;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role};
