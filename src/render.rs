//! Plain-text rendering of the current page
//!
//! Renders:
//! - Status line with filtered row count and page position
//! - Column headers with a sort marker on the active column
//! - Cell grid for the visible page (row numbers are page-relative)
//! - Prev/Next hints reflecting the navigation predicates

use crate::model::{AppModel, PageView};

const MIN_WIDTH: usize = 4;
const MAX_WIDTH: usize = 40;
const COLUMN_GAP: &str = "  ";

/// Check if a string looks like a number (for right-alignment)
pub fn is_number(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.parse::<f64>().is_ok()
}

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let len = text.chars().count();
    let fill = " ".repeat(width.saturating_sub(len));
    if right_align {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}

/// Header labels, with the sort arrow appended to the sorted column
fn header_labels(view: &PageView<'_>) -> Vec<String> {
    view.columns
        .iter()
        .map(|name| match view.sort {
            Some(sort) if &sort.column == name => format!("{} {}", name, sort.direction.arrow()),
            _ => name.clone(),
        })
        .collect()
}

/// Widths fitted to the header and the visible cells
fn column_widths(view: &PageView<'_>, headers: &[String]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| h.chars().count().clamp(MIN_WIDTH, MAX_WIDTH))
        .collect();

    for row in &view.rows {
        for (col, cell) in row.record.cells().enumerate() {
            if let Some(width) = widths.get_mut(col) {
                *width = (*width).max(cell.chars().count()).min(MAX_WIDTH);
            }
        }
    }
    widths
}

/// Status line shown above the table
pub fn status_line(view: &PageView<'_>) -> String {
    format!(
        "Rows: {} | Page: {}/{}",
        view.total, view.page, view.page_count
    )
}

/// Render the grid for a page view
pub fn render_view(view: &PageView<'_>) -> String {
    let mut out = String::new();
    out.push_str(&status_line(view));
    out.push('\n');

    if view.columns.is_empty() {
        return out;
    }

    let headers = header_labels(view);
    let widths = column_widths(view, &headers);
    let number_width = view.rows.len().to_string().len().max(1);

    let mut line = pad("#", number_width, true);
    for (header, &width) in headers.iter().zip(&widths) {
        line.push_str(COLUMN_GAP);
        line.push_str(&pad(&truncate_text(header, width), width, false));
    }
    out.push_str(line.trim_end());
    out.push('\n');

    for (i, row) in view.rows.iter().enumerate() {
        let mut line = pad(&(i + 1).to_string(), number_width, true);
        for (cell, &width) in row.record.cells().zip(&widths) {
            line.push_str(COLUMN_GAP);
            line.push_str(&pad(&truncate_text(cell, width), width, is_number(cell)));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let mut nav = Vec::new();
    if view.has_prev {
        nav.push("< prev");
    }
    if view.has_next {
        nav.push("next >");
    }
    if !nav.is_empty() {
        out.push_str(&nav.join("  "));
        out.push('\n');
    }

    out
}

/// Render the whole screen for the model
pub fn render_page(model: &AppModel) -> String {
    let mut out = if model.is_loading() {
        "Loading...\n".to_string()
    } else {
        render_view(&model.current_page())
    };

    if let Some(message) = &model.status_message {
        out.push_str(message);
        out.push('\n');
    }
    out
}
