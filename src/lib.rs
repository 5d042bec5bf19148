/// Ask AI - a bot-automation action that prompts a chat-completion endpoint
/// and stores the reply in a host-managed variable.
///
/// The crate provides one action plus the seams a host needs to drive it:
/// 1. A declarative field schema the host renders to collect configuration
/// 2. A `HostBridge` trait covering placeholder resolution and the variable store
///
/// # Architecture
///
/// The system uses:
/// - reqwest for the single chat-completion HTTP exchange
/// - serde for the wire body and captured configuration values
/// - thiserror for the unrecovered-fault taxonomy
/// - tracing for structured diagnostics
///
/// # Example
///
/// ```no_run
/// use askai_action::action::AskAiAction;
/// use askai_action::core::AskAiValues;
/// use askai_action::host::MemoryBridge;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     askai_action::setup_logging();
///
///     // A host bridge with one placeholder substitution
///     let bridge = MemoryBridge::new().substitute("question", "What is Rust?");
///
///     let values = AskAiValues {
///         url: "https://api.openai.com/v1/chat/completions".to_string(),
///         key: "sk-dummy".to_string(),
///         model: "gpt-4o-mini".to_string(),
///         prompt: "{question}".to_string(),
///         system_prompt: "Answer in one paragraph.".to_string(),
///         token_limit: "4096".to_string(),
///         exceeded_message: "That prompt is too long.".to_string(),
///         store: "answer".to_string(),
///     };
///
///     AskAiAction::new().run(&values, &bridge).await?;
///
///     println!("{:?}", bridge.stored("answer"));
///     Ok(())
/// }
/// ```
// Module declarations
pub mod action;
pub mod ai;
pub mod core;
pub mod errors;
pub mod host;

/// Configure structured logging with JSON format for host environments.
///
/// This function sets up tracing-subscriber with a JSON formatter and
/// should be called once by the embedding host before invoking actions.
///
/// # Example
///
/// ```
/// // Initialize structured logging before running actions
/// askai_action::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
