use crate::domain::model::Attribute;
use crate::utils::error::DiscoveryError;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  discover | d            fetch a dog that clears the ban list
  ban <value>             ban an exact breed name, origin or weight
  pick <name|origin|weight>
                          ban that attribute of the displayed dog
  unban <value>           remove a value from the ban list
  show                    redraw the current dog and ban list
  help                    show this text
  quit | exit             leave";

/// A user intent read from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Discover,
    Ban(String),
    Pick(Attribute),
    Unban(String),
    Show,
    Help,
    Quit,
}

fn required_argument(verb: &str, rest: &str) -> Result<String, DiscoveryError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(DiscoveryError::CommandError {
            message: format!("'{}' needs a value", verb),
        });
    }
    Ok(value.to_string())
}

impl FromStr for Command {
    type Err = DiscoveryError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match verb.to_ascii_lowercase().as_str() {
            "discover" | "d" => Ok(Command::Discover),
            "ban" => required_argument(verb, rest).map(Command::Ban),
            "unban" => required_argument(verb, rest).map(Command::Unban),
            "pick" => {
                let field = required_argument(verb, rest)?;
                Attribute::parse(&field).map(Command::Pick).ok_or_else(|| {
                    DiscoveryError::CommandError {
                        message: format!("'{}' is not one of name, origin, weight", field),
                    }
                })
            }
            "show" | "list" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err(DiscoveryError::CommandError {
                message: "Empty command".to_string(),
            }),
            other => Err(DiscoveryError::CommandError {
                message: format!("Unknown command '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("discover".parse::<Command>().unwrap(), Command::Discover);
        assert_eq!(" D ".parse::<Command>().unwrap(), Command::Discover);
        assert_eq!("show".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_ban_keeps_inner_spaces() {
        assert_eq!(
            "ban   Labrador Retriever ".parse::<Command>().unwrap(),
            Command::Ban("Labrador Retriever".to_string())
        );
        assert_eq!(
            "unban 18 - 32".parse::<Command>().unwrap(),
            Command::Unban("18 - 32".to_string())
        );
    }

    #[test]
    fn test_pick_attribute() {
        assert_eq!("pick origin".parse::<Command>().unwrap(), Command::Pick(Attribute::Origin));
        assert!("pick colour".parse::<Command>().is_err());
        assert!("pick".parse::<Command>().is_err());
    }

    #[test]
    fn test_rejects_missing_values_and_unknown_verbs() {
        assert!("ban".parse::<Command>().is_err());
        assert!("unban   ".parse::<Command>().is_err());
        assert!("fetch".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }
}
