pub mod discovery;
pub mod evaluate;

pub use crate::domain::ban_list::BanList;
pub use crate::domain::model::{Attribute, Candidate, DogResult};
pub use crate::domain::ports::{ConfigProvider, ImageProvider, View};
pub use crate::domain::state::AppState;
pub use crate::utils::error::Result;
