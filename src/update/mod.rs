//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod edit;
mod ingest;
mod view;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use edit::update_edit;
pub use ingest::update_ingest;
pub use view::update_view;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::LoadFile(_)
        | Msg::FileLoaded { .. }
        | Msg::GenerateSample { .. }
        | Msg::GenerateFixture { .. }
        | Msg::ResetAll
        | Msg::Export { .. }
        | Msg::ExportCompleted { .. } => update_ingest(model, msg),
        Msg::EditCell { .. } | Msg::EditSourceCell { .. } => update_edit(model, msg),
        Msg::SortBy(_)
        | Msg::SetSearch(_)
        | Msg::NextPage
        | Msg::PrevPage
        | Msg::GoToPage(_) => update_view(model, msg),
        Msg::Quit => Some(Cmd::Quit),
    }
}

/// Update with a debug span and a summary of what changed
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let rows_before = model.table.working.row_count();
    let page_before = model.page;

    debug!(target: "message", msg = %msg_name, "processing");
    let result = update_inner(model, msg);

    if rows_before != model.table.working.row_count() || page_before != model.page {
        debug!(
            target: "model",
            rows = model.table.working.row_count(),
            page = model.page,
            "state changed"
        );
    }

    result
}

/// Get a display name for a message (variant name only)
pub fn msg_type_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::LoadFile(_) => "LoadFile",
        Msg::FileLoaded { .. } => "FileLoaded",
        Msg::GenerateSample { .. } => "GenerateSample",
        Msg::GenerateFixture { .. } => "GenerateFixture",
        Msg::EditCell { .. } => "EditCell",
        Msg::EditSourceCell { .. } => "EditSourceCell",
        Msg::ResetAll => "ResetAll",
        Msg::SortBy(_) => "SortBy",
        Msg::SetSearch(_) => "SetSearch",
        Msg::NextPage => "NextPage",
        Msg::PrevPage => "PrevPage",
        Msg::GoToPage(_) => "GoToPage",
        Msg::Export { .. } => "Export",
        Msg::ExportCompleted { .. } => "ExportCompleted",
        Msg::Quit => "Quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_msg_type_name() {
        assert_eq!(msg_type_name(&Msg::NextPage), "NextPage");
        assert_eq!(msg_type_name(&Msg::SortBy("Title".into())), "SortBy");
        assert_eq!(
            msg_type_name(&Msg::Export {
                path: Some(PathBuf::from("x.csv"))
            }),
            "Export"
        );
    }

    #[test]
    fn test_quit_returns_quit_cmd() {
        let mut model = AppModel::default();
        assert_eq!(update(&mut model, Msg::Quit), Some(Cmd::Quit));
    }
}
