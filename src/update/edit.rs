//! Cell edit update functions
//!
//! Edits always land in the working table by absolute row index. Edits made
//! through the visible page are mapped back through the current filter and
//! page first, so a row on page 3 of a search result edits the right record.

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

/// Handle cell edit messages
pub fn update_edit(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::EditCell {
            display_row,
            column,
            value,
        } => edit_visible_cell(model, display_row, &column, &value),
        Msg::EditSourceCell { row, column, value } => edit_source_cell(model, row, &column, &value),
        _ => None,
    }
}

fn edit_visible_cell(
    model: &mut AppModel,
    display_row: usize,
    column: &str,
    value: &str,
) -> Option<Cmd> {
    match model.source_index(display_row) {
        Some(row) => edit_source_cell(model, row, column, value),
        None => {
            tracing::warn!(
                display_row,
                page = model.page,
                "Edit ignored: no such row on the current page"
            );
            model.status_message = Some(format!("Row {} is not on this page", display_row + 1));
            Some(Cmd::Redraw)
        }
    }
}

fn edit_source_cell(model: &mut AppModel, row: usize, column: &str, value: &str) -> Option<Cmd> {
    match model.table.edit(row, column, value) {
        Ok(()) => {
            tracing::debug!(row, column, "cell edited");
            // The edited value may no longer match the search term
            model.clamp_page();
            Some(Cmd::Redraw)
        }
        Err(e) => {
            tracing::warn!("Edit ignored: {}", e);
            model.status_message = Some(format!("Edit ignored: {}", e));
            Some(Cmd::Redraw)
        }
    }
}
