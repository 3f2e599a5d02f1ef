use crate::core::evaluate::{evaluate, first_candidate, Verdict};
use crate::domain::ban_list::BanList;
use crate::domain::model::{Attribute, DogResult};
use crate::domain::ports::ImageProvider;
use crate::domain::state::{AppState, Generation};
use crate::utils::error::{DiscoveryError, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const DEFAULT_MAX_ATTEMPTS: usize = 10;
pub const EXHAUSTION_NOTICE: &str = "Could not find a dog with breed info not on the ban list.";

#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryOutcome {
    Accepted { result: DogResult, attempts: usize },
    Exhausted { attempts: usize },
    /// A newer discover() started before this one could finish.
    Superseded { attempts: usize },
}

impl DiscoveryOutcome {
    pub fn attempts(&self) -> usize {
        match self {
            DiscoveryOutcome::Accepted { attempts, .. }
            | DiscoveryOutcome::Exhausted { attempts }
            | DiscoveryOutcome::Superseded { attempts } => *attempts,
        }
    }

    /// Message the view must show for this outcome, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            DiscoveryOutcome::Exhausted { .. } => Some(EXHAUSTION_NOTICE),
            _ => None,
        }
    }
}

/// Owns the application state and runs the bounded discover loop against an
/// [`ImageProvider`].
pub struct DiscoveryController<P: ImageProvider> {
    provider: P,
    state: Arc<RwLock<AppState>>,
    max_attempts: usize,
}

impl<P: ImageProvider> DiscoveryController<P> {
    pub fn new(provider: P, ban_list: BanList) -> Self {
        Self::with_state(provider, Arc::new(RwLock::new(AppState::new(ban_list))))
    }

    pub fn with_state(provider: P, state: Arc<RwLock<AppState>>) -> Self {
        Self {
            provider,
            state,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    pub async fn current(&self) -> Option<DogResult> {
        self.state.read().await.current().cloned()
    }

    pub async fn ban(&self, value: &str) -> bool {
        let added = self.state.write().await.ban(value);
        if added {
            tracing::info!("🚫 Banned '{}'", value);
        } else {
            tracing::debug!("'{}' is already banned", value);
        }
        added
    }

    pub async fn unban(&self, value: &str) -> bool {
        let removed = self.state.write().await.unban(value);
        if removed {
            tracing::info!("♻️ Unbanned '{}'", value);
        } else {
            tracing::debug!("'{}' was not banned", value);
        }
        removed
    }

    /// Bans one attribute of the displayed result and returns the banned value.
    pub async fn ban_attribute(&self, attribute: Attribute) -> Result<String> {
        let mut state = self.state.write().await;
        let value = state
            .current()
            .map(|result| result.attribute(attribute).to_string())
            .ok_or_else(|| DiscoveryError::CommandError {
                message: format!("No dog is displayed yet, nothing to take the {} from", attribute),
            })?;
        if state.ban(value.clone()) {
            tracing::info!("🚫 Banned {} '{}'", attribute, value);
        }
        Ok(value)
    }

    /// Runs up to `max_attempts` sequential attempts and stops at the first
    /// acceptable candidate. Per-attempt failures are logged and consumed.
    pub async fn discover(&self) -> DiscoveryOutcome {
        let token = self.state.write().await.begin_discovery();
        tracing::info!("🔍 Fetching dog... (discovery #{})", token);

        for attempt in 1..=self.max_attempts {
            if !self.state.read().await.is_current(token) {
                tracing::info!("Discovery #{} superseded before attempt {}", token, attempt);
                return DiscoveryOutcome::Superseded {
                    attempts: attempt - 1,
                };
            }

            let body = match self.provider.search().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::error!("❌ Attempt {}/{}: fetch failed: {}", attempt, self.max_attempts, e);
                    continue;
                }
            };
            tracing::debug!("API response: {}", body);

            let candidate = match first_candidate(body) {
                Ok(Some(candidate)) => candidate,
                Ok(None) => {
                    tracing::warn!("⚠️ Attempt {}/{}: API returned empty array", attempt, self.max_attempts);
                    continue;
                }
                Err(e) => {
                    tracing::error!(
                        "❌ Attempt {}/{}: malformed candidate: {}",
                        attempt,
                        self.max_attempts,
                        e
                    );
                    continue;
                }
            };

            // Evaluation and acceptance share one write lock so a ban cannot slip in between.
            let mut state = self.state.write().await;
            let result = match evaluate(&candidate, state.ban_list()) {
                Verdict::NoBreedInfo(result) => {
                    tracing::warn!(
                        "⚠️ Dog has no breed info, using default values: {}",
                        candidate.url
                    );
                    result
                }
                Verdict::Rejected { result, matched } => {
                    tracing::warn!(
                        "⚠️ Attempt {}/{}: {} matches ban list ({}), skipping",
                        attempt,
                        self.max_attempts,
                        result.name,
                        matched.join(", ")
                    );
                    continue;
                }
                Verdict::Acceptable(result) => result,
            };

            return self.commit(&mut state, token, result, attempt);
        }

        if !self.state.read().await.is_current(token) {
            return DiscoveryOutcome::Superseded {
                attempts: self.max_attempts,
            };
        }
        tracing::warn!(
            "⚠️ Discovery #{} exhausted after {} attempts",
            token,
            self.max_attempts
        );
        DiscoveryOutcome::Exhausted {
            attempts: self.max_attempts,
        }
    }

    fn commit(
        &self,
        state: &mut AppState,
        token: Generation,
        result: DogResult,
        attempts: usize,
    ) -> DiscoveryOutcome {
        if !state.accept(token, result.clone()) {
            tracing::info!("Discovery #{} superseded, dropping {}", token, result.name);
            return DiscoveryOutcome::Superseded { attempts };
        }
        tracing::info!(
            "✅ Accepted {} ({}, {}) after {} attempt(s)",
            result.name,
            result.origin,
            result.weight,
            attempts
        );
        DiscoveryOutcome::Accepted { result, attempts }
    }
}
