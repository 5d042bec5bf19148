//! All AI/LLM functionality

pub mod client;

// Re-export main types for convenience
pub use client::{ChatClient, ChatRequestBody, CompletionOutcome, estimate_tokens};
