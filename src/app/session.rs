use crate::app::command::{Command, HELP};
use crate::core::discovery::{DiscoveryController, DiscoveryOutcome};
use crate::domain::ports::{ImageProvider, View};
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Binds user intents to the controller and keeps the view in sync with its state.
pub struct Session<P: ImageProvider, V: View> {
    controller: DiscoveryController<P>,
    view: V,
}

impl<P: ImageProvider, V: View> Session<P, V> {
    pub fn new(controller: DiscoveryController<P>, view: V) -> Self {
        Self { controller, view }
    }

    pub fn controller(&self) -> &DiscoveryController<P> {
        &self.controller
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub async fn render(&mut self) -> Result<()> {
        let state = self.controller.snapshot().await;
        self.view.render(&state)
    }

    pub async fn discover(&mut self) -> Result<DiscoveryOutcome> {
        let outcome = self.controller.discover().await;
        if let Some(notice) = outcome.notice() {
            self.view.alert(notice)?;
        }
        self.render().await?;
        Ok(outcome)
    }

    pub async fn handle(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Discover => {
                self.discover().await?;
            }
            Command::Ban(value) => {
                if !self.controller.ban(&value).await {
                    self.view.info(&format!("'{}' is already banned", value))?;
                }
                self.render().await?;
            }
            Command::Pick(attribute) => match self.controller.ban_attribute(attribute).await {
                Ok(_) => self.render().await?,
                Err(e) => self.view.alert(&e.user_friendly_message())?,
            },
            Command::Unban(value) => {
                if !self.controller.unban(&value).await {
                    self.view.info(&format!("'{}' is not on the ban list", value))?;
                }
                self.render().await?;
            }
            Command::Show => self.render().await?,
            Command::Help => self.view.info(HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands line by line until `quit` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        self.render().await?;
        self.view.info("Type 'help' for commands.")?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    tracing::debug!("Rejected input '{}': {}", line, e);
                    self.view.alert(&e.user_friendly_message())?;
                    continue;
                }
            };

            if self.handle(command).await? == Flow::Quit {
                break;
            }
        }

        tracing::info!("👋 Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::TerminalView;
    use crate::domain::ban_list::BanList;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::VecDeque;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct ScriptedProvider {
        responses: Arc<Mutex<VecDeque<Value>>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Value>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(responses.into())),
            }
        }
    }

    #[async_trait]
    impl ImageProvider for ScriptedProvider {
        async fn search(&self) -> Result<Value> {
            Ok(self.responses.lock().await.pop_front().unwrap_or_else(|| json!([])))
        }
    }

    fn dog(name: &str, origin: &str, metric: &str) -> Value {
        json!([{
            "url": format!("https://cdn.example.com/{}.jpg", name),
            "breeds": [{"name": name, "origin": origin, "weight": {"metric": metric}}]
        }])
    }

    async fn run_script(responses: Vec<Value>, input: &str) -> (String, Session<ScriptedProvider, TerminalView<Vec<u8>>>) {
        let controller = DiscoveryController::new(ScriptedProvider::new(responses), BanList::new())
            .with_max_attempts(3);
        let mut session = Session::new(controller, TerminalView::new(Vec::new()));
        session.run(input.as_bytes()).await.unwrap();
        let state = session.controller().snapshot().await;
        let mut output = TerminalView::new(Vec::new());
        output.render(&state).unwrap();
        (String::from_utf8(output.into_inner()).unwrap(), session)
    }

    #[tokio::test]
    async fn test_pick_bans_displayed_attribute() {
        let (final_view, session) = run_script(
            vec![dog("Poodle", "France", "29")],
            "discover\npick origin\n",
        )
        .await;

        assert!(final_view.contains("- France"));
        let state = session.controller().snapshot().await;
        assert_eq!(state.current().unwrap().name, "Poodle");
    }

    #[tokio::test]
    async fn test_exhaustion_alert_is_shown() {
        let controller = DiscoveryController::new(ScriptedProvider::new(vec![]), BanList::new())
            .with_max_attempts(2);
        let mut session = Session::new(controller, TerminalView::new(Vec::new()));

        session.run("d\nquit\ndiscover\n".as_bytes()).await.unwrap();

        let output = String::from_utf8(session.into_view().into_inner()).unwrap();
        assert_eq!(output.matches(crate::core::discovery::EXHAUSTION_NOTICE).count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_command_does_not_stop_session() {
        let (final_view, _) = run_script(vec![], "bogus\nban Labrador\nban Canada\nunban Labrador\n").await;
        assert!(final_view.contains("- Canada"));
        assert!(!final_view.contains("- Labrador"));
    }

    #[tokio::test]
    async fn test_pick_without_result_alerts() {
        let controller = DiscoveryController::new(ScriptedProvider::new(vec![]), BanList::new());
        let mut session = Session::new(controller, TerminalView::new(Vec::new()));

        let flow = session.handle(Command::Pick(crate::domain::model::Attribute::Name)).await.unwrap();

        assert_eq!(flow, Flow::Continue);
        let output = String::from_utf8(session.into_view().into_inner()).unwrap();
        assert!(output.contains("No dog is displayed yet"));
    }
}
