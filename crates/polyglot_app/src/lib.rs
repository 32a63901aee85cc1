//! Terminal client: watches a source file and keeps its translations current.

pub mod app;
pub mod cli;
pub mod effects;
pub mod render;
pub mod snapshot;

pub use app::watch;
pub use cli::{Cli, Command, WatchArgs};
pub use effects::EffectRunner;
pub use render::render;
pub use snapshot::{FileChange, FileSnapshot};
