//! Actions the host can invoke

pub mod ask_ai;

// Re-export the action for convenience
pub use ask_ai::{ASK_AI_DEFINITION, AskAiAction, CHAT_COMPLETION_FAILURE_MESSAGE};
