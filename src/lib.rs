pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::DogApiProvider;
pub use app::{Session, TerminalView};
pub use config::TomlConfig;
pub use core::discovery::{DiscoveryController, DiscoveryOutcome, EXHAUSTION_NOTICE};
pub use domain::{ban_list::BanList, model::DogResult, state::AppState};
pub use utils::error::{DiscoveryError, Result};
