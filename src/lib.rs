//! bookcsv - in-memory CSV editor for book catalogs
//!
//! This crate provides the table engine (ingestion, editing, search, sort,
//! pagination, export) behind an Elm-style model/update loop, plus the small
//! text shell that drives it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod input;
pub mod messages;
pub mod model;
pub mod query;
pub mod render;
pub mod runtime;
pub mod sample;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Runtime;
