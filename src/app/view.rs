use crate::domain::ports::View;
use crate::domain::state::AppState;
use crate::utils::error::Result;
use std::io::Write;

pub const TITLE: &str = "Dog Discoverer 🐶";
pub const EMPTY_BAN_LIST: &str = "No banned attributes";

/// Plain-text [`View`] writing to any `Write` sink (stdout in the binary).
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for TerminalView<W> {
    fn render(&mut self, state: &AppState) -> Result<()> {
        writeln!(self.out, "{}", TITLE)?;
        writeln!(self.out)?;

        if let Some(dog) = state.current() {
            writeln!(self.out, "{}", dog.name)?;
            writeln!(
                self.out,
                "  [name] {}  [origin] {}  [weight] {} kg",
                dog.name, dog.origin, dog.weight
            )?;
            writeln!(self.out, "  {}", dog.image)?;
            writeln!(self.out)?;
        }

        writeln!(self.out, "Ban List")?;
        if state.ban_list().is_empty() {
            writeln!(self.out, "  {}", EMPTY_BAN_LIST)?;
        } else {
            for value in state.ban_list().iter() {
                writeln!(self.out, "  - {}", value)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "⚠️  {}", message)?;
        self.out.flush()?;
        Ok(())
    }

    fn info(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ban_list::BanList;
    use crate::domain::model::DogResult;

    fn rendered(state: &AppState) -> String {
        let mut view = TerminalView::new(Vec::new());
        view.render(state).unwrap();
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_render_empty_state() {
        let output = rendered(&AppState::default());
        assert!(output.starts_with(TITLE));
        assert!(output.contains("Ban List"));
        assert!(output.contains(EMPTY_BAN_LIST));
    }

    #[test]
    fn test_render_result_and_bans_in_order() {
        let mut state = AppState::new(["Labrador", "Canada"].into_iter().collect::<BanList>());
        let token = state.begin_discovery();
        state.accept(
            token,
            DogResult {
                image: "https://cdn.example.com/p.jpg".to_string(),
                name: "Poodle".to_string(),
                origin: "France".to_string(),
                weight: "29".to_string(),
            },
        );

        let output = rendered(&state);
        assert!(output.contains("[weight] 29 kg"));
        assert!(output.contains("https://cdn.example.com/p.jpg"));
        let labrador = output.find("- Labrador").unwrap();
        let canada = output.find("- Canada").unwrap();
        assert!(labrador < canada);
        assert!(!output.contains(EMPTY_BAN_LIST));
    }
}
