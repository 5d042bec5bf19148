use tracing::debug;

use crate::ai::client::{ChatClient, ChatRequestBody, CompletionOutcome, estimate_tokens};
use crate::core::fields::{ActionDefinition, ActionField, FieldKind};
use crate::core::values::AskAiValues;
use crate::errors::ActionError;
use crate::host::HostBridge;

/// Canonical message stored when the endpoint reports a failure. The real
/// cause is logged for the operator, never shown downstream.
pub const CHAT_COMPLETION_FAILURE_MESSAGE: &str =
    "Error with Chat Completion, please message the bot author!";

/// Field schema the host renders for this action, in capture order.
pub const ASK_AI_DEFINITION: ActionDefinition = ActionDefinition {
    name: "Ask AI",
    fields: &[
        ActionField {
            key: "url",
            label: "API URL",
            kind: FieldKind::Text,
        },
        ActionField {
            key: "key",
            label: "API Key",
            kind: FieldKind::Secret,
        },
        ActionField {
            key: "model",
            label: "Model",
            kind: FieldKind::Text,
        },
        ActionField {
            key: "prompt",
            label: "Prompt",
            kind: FieldKind::Text,
        },
        ActionField {
            key: "systemPrompt",
            label: "System Prompt",
            kind: FieldKind::Text,
        },
        ActionField {
            key: "tokenLimit",
            label: "Token Limit",
            kind: FieldKind::Text,
        },
        ActionField {
            key: "exceededMessage",
            label: "Message if Token Limit is exceeded",
            kind: FieldKind::Text,
        },
        ActionField {
            key: "store",
            label: "Store response",
            kind: FieldKind::Storage,
        },
    ],
};

/// Prompts a chat-completion endpoint once and stores the reply in a host
/// variable.
pub struct AskAiAction {
    client: ChatClient,
}

impl AskAiAction {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: ChatClient::new(),
        }
    }

    #[must_use]
    pub fn definition(&self) -> &'static ActionDefinition {
        &ASK_AI_DEFINITION
    }

    /// Runs one invocation against captured values.
    ///
    /// Every anticipated outcome ends in exactly one `bridge.store` call:
    /// the completion text, the configured overflow message when the token
    /// estimate reaches the limit (no request is made on that branch), or
    /// the canonical failure message on a non-success status.
    ///
    /// # Errors
    ///
    /// Faults the action does not absorb into a stored value propagate to
    /// the host wrapper: an unparsable token limit, a transport failure,
    /// a non-JSON body, or a success body without `choices[0]`. Nothing
    /// is stored on those paths.
    pub async fn run(
        &self,
        values: &AskAiValues,
        bridge: &dyn HostBridge,
    ) -> Result<(), ActionError> {
        let url = bridge.resolve(&values.url);
        let key = bridge.resolve(&values.key);
        let model = bridge.resolve(&values.model);
        let prompt = bridge.resolve(&values.prompt);
        let system_prompt = bridge.resolve(&values.system_prompt);
        let token_limit = bridge.resolve(&values.token_limit);
        let exceeded_message = bridge.resolve(&values.exceeded_message);

        let token_limit: f64 = token_limit
            .trim()
            .parse()
            .map_err(|_| ActionError::InvalidTokenLimit(token_limit.clone()))?;

        let estimated = estimate_tokens(&prompt);
        if estimated as f64 >= token_limit {
            debug!(
                estimated,
                token_limit, "token estimate at or over limit, skipping request"
            );
            bridge.store(&values.store, exceeded_message);
            return Ok(());
        }

        let body = ChatRequestBody::new(&model, &system_prompt, &prompt);
        match self.client.chat_completion(&url, &key, &body).await? {
            CompletionOutcome::Text(text) => bridge.store(&values.store, text),
            CompletionOutcome::ApiFailure { .. } => {
                bridge.store(&values.store, CHAT_COMPLETION_FAILURE_MESSAGE.to_string());
            }
        }

        Ok(())
    }
}

impl Default for AskAiAction {
    fn default() -> Self {
        Self::new()
    }
}
