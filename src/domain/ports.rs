use crate::domain::state::AppState;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of candidate images. One call is one attempt.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Returns the decoded response body. Transport and status failures are errors;
    /// the shape of the body is left to the caller.
    async fn search(&self) -> Result<serde_json::Value>;
}

/// Passive renderer bound to [`AppState`].
pub trait View {
    fn render(&mut self, state: &AppState) -> Result<()>;
    /// Blocking notice the user has to see, such as exhaustion.
    fn alert(&mut self, message: &str) -> Result<()>;
    fn info(&mut self, message: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn max_attempts(&self) -> usize;
    fn timeout_seconds(&self) -> Option<u64>;
    fn initial_ban_list(&self) -> &[String];
}
