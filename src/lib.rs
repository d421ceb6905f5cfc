pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::shell::DisplayShell;
pub use config::settings::ClientSettings;
pub use crate::core::{channel::HttpQueryChannel, film_list::FilmListView};
pub use utils::error::{FilmError, Result};
