//! Sort, search and page update functions

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::query::{clamp_page, sort_rows, SortDirective};

/// Handle view messages
pub fn update_view(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::SortBy(column) => sort_by(model, &column),
        Msg::SetSearch(term) => set_search(model, term),
        Msg::NextPage => next_page(model),
        Msg::PrevPage => prev_page(model),
        Msg::GoToPage(page) => go_to_page(model, page),
        _ => None,
    }
}

/// Activate a column header: sort the working table and remember the directive
fn sort_by(model: &mut AppModel, column: &str) -> Option<Cmd> {
    if model.table.working.column_index(column).is_none() {
        tracing::warn!(column, "Sort ignored: unknown column");
        model.status_message = Some(format!("Unknown column '{}'", column));
        return Some(Cmd::Redraw);
    }

    let directive = SortDirective::activate(model.sort.as_ref(), column);
    sort_rows(&mut model.table.working, &directive, model.config.sort_mode);
    tracing::debug!(column, direction = ?directive.direction, "sorted");
    model.sort = Some(directive);
    model.clamp_page();
    Some(Cmd::Redraw)
}

fn set_search(model: &mut AppModel, term: String) -> Option<Cmd> {
    if model.search == term {
        return None;
    }
    model.search = term;
    model.clamp_page();
    Some(Cmd::Redraw)
}

fn next_page(model: &mut AppModel) -> Option<Cmd> {
    if !model.current_page().has_next {
        return None;
    }
    model.page += 1;
    Some(Cmd::Redraw)
}

fn prev_page(model: &mut AppModel) -> Option<Cmd> {
    if model.page <= 1 {
        return None;
    }
    model.page -= 1;
    model.clamp_page();
    Some(Cmd::Redraw)
}

fn go_to_page(model: &mut AppModel, page: usize) -> Option<Cmd> {
    let total = model.filtered_indices().len();
    let page = clamp_page(page, total, model.page_size());
    if page == model.page {
        return None;
    }
    model.page = page;
    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::csv::IngestReport;
    use crate::model::{DataSource, Table};
    use crate::query::{SortDirection, SortMode};
    use crate::sample::fixture_books;

    fn model_from(table: Table) -> AppModel {
        let mut model = AppModel::new(AppConfig::default());
        let rows = table.row_count();
        model.ingest(table, DataSource::Fixture { rows }, IngestReport::default());
        model
    }

    fn years(model: &AppModel) -> Vec<String> {
        (0..model.table.working.row_count())
            .map(|r| model.table.working.get(r, "Year").unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_sort_toggles_direction() {
        let mut model = model_from(fixture_books(5));
        update_view(&mut model, Msg::SortBy("Title".into()));
        assert_eq!(model.sort.as_ref().unwrap().direction, SortDirection::Ascending);

        update_view(&mut model, Msg::SortBy("Title".into()));
        assert_eq!(model.sort.as_ref().unwrap().direction, SortDirection::Descending);
        assert_eq!(model.table.working.get(0, "Title"), Some("Book Title 5"));
    }

    #[test]
    fn test_sort_does_not_touch_original() {
        let mut model = model_from(fixture_books(5));
        update_view(&mut model, Msg::SortBy("Title".into()));
        update_view(&mut model, Msg::SortBy("Title".into()));
        assert_eq!(model.table.original().get(0, "Title"), Some("Book Title 1"));
    }

    #[test]
    fn test_sort_unknown_column_is_ignored() {
        let mut model = model_from(fixture_books(3));
        update_view(&mut model, Msg::SortBy("Pages".into()));
        assert!(model.sort.is_none());
        assert!(!model.table.is_modified());
    }

    #[test]
    fn test_sort_mode_from_config() {
        let table = Table::from_rows(
            vec!["Year".to_string()],
            vec![vec!["10".into()], vec!["9".into()], vec!["100".into()]],
        );

        let mut natural = model_from(table.clone());
        update_view(&mut natural, Msg::SortBy("Year".into()));
        assert_eq!(years(&natural), vec!["9", "10", "100"]);

        let mut lexical = model_from(table);
        lexical.config.sort_mode = SortMode::Lexical;
        update_view(&mut lexical, Msg::SortBy("Year".into()));
        assert_eq!(years(&lexical), vec!["10", "100", "9"]);
    }

    #[test]
    fn test_next_page_stops_at_last() {
        let mut model = model_from(fixture_books(25));
        assert!(update_view(&mut model, Msg::NextPage).is_some());
        assert_eq!(model.page, 2);
        assert!(update_view(&mut model, Msg::NextPage).is_none());
        assert_eq!(model.page, 2);
    }

    #[test]
    fn test_prev_page_stops_at_first() {
        let mut model = model_from(fixture_books(25));
        assert!(update_view(&mut model, Msg::PrevPage).is_none());
        assert_eq!(model.page, 1);
    }

    #[test]
    fn test_go_to_page_is_clamped() {
        let mut model = model_from(fixture_books(45));
        update_view(&mut model, Msg::GoToPage(99));
        assert_eq!(model.page, 3);
        update_view(&mut model, Msg::GoToPage(0));
        assert_eq!(model.page, 1);
    }

    #[test]
    fn test_search_clamps_page() {
        let mut model = model_from(fixture_books(100));
        update_view(&mut model, Msg::GoToPage(5));
        update_view(&mut model, Msg::SetSearch("Title 9".into()));

        assert_eq!(model.page, 1);
        assert_eq!(model.current_page().total, 11);
    }

    #[test]
    fn test_same_search_is_noop() {
        let mut model = model_from(fixture_books(3));
        update_view(&mut model, Msg::SetSearch("Book".into()));
        assert!(update_view(&mut model, Msg::SetSearch("Book".into())).is_none());
    }
}
