use crate::domain::ban_list::BanList;
use crate::domain::model::DogResult;

/// Token identifying one discover() call. Only the newest token may write a result.
pub type Generation = u64;

/// Everything the view renders: the live result and the ban list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    current: Option<DogResult>,
    ban_list: BanList,
    generation: Generation,
}

impl AppState {
    pub fn new(ban_list: BanList) -> Self {
        Self {
            current: None,
            ban_list,
            generation: 0,
        }
    }

    pub fn current(&self) -> Option<&DogResult> {
        self.current.as_ref()
    }

    pub fn ban_list(&self) -> &BanList {
        &self.ban_list
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Starts a new discovery and invalidates any that is still in flight.
    pub fn begin_discovery(&mut self) -> Generation {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, token: Generation) -> bool {
        self.generation == token
    }

    /// Replaces the result if `token` is still the newest discovery.
    pub fn accept(&mut self, token: Generation, result: DogResult) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.current = Some(result);
        true
    }

    pub fn ban(&mut self, value: impl Into<String>) -> bool {
        self.ban_list.ban(value)
    }

    pub fn unban(&mut self, value: &str) -> bool {
        self.ban_list.unban(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poodle() -> DogResult {
        DogResult {
            image: "https://example.com/poodle.jpg".to_string(),
            name: "Poodle".to_string(),
            origin: "France".to_string(),
            weight: "29".to_string(),
        }
    }

    #[test]
    fn test_stale_token_cannot_accept() {
        let mut state = AppState::default();
        let first = state.begin_discovery();
        let second = state.begin_discovery();
        assert_eq!(state.generation(), second);

        assert!(!state.accept(first, poodle()));
        assert!(state.current().is_none());

        assert!(state.accept(second, poodle()));
        assert_eq!(state.current(), Some(&poodle()));
    }

    #[test]
    fn test_ban_does_not_clear_displayed_result() {
        let mut state = AppState::default();
        let token = state.begin_discovery();
        state.accept(token, poodle());

        state.ban("Poodle");
        assert_eq!(state.current().map(|r| r.name.as_str()), Some("Poodle"));
        assert!(state.ban_list().contains("Poodle"));
    }
}
