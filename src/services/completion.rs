use async_trait::async_trait;

/// Seam between the chat route and whichever chat-completion API backs it.
///
/// Implementations must be thread-safe; the router shares one instance across
/// all in-flight requests. Tests substitute a scripted double here.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends a two-message prompt (system, then user) and returns the first
    /// choice's content.
    ///
    /// `Ok(None)` means the upstream answered but produced no usable text;
    /// `Err` covers transport failures, error statuses, and bodies that do
    /// not parse.
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> anyhow::Result<Option<String>>;
}
