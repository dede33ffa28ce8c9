//! Pagination tests
//!
//! Page boundaries, navigation limits, and the row-mapping between the
//! visible page and the working table.

mod common;

use bookcsv::config::AppConfig;
use bookcsv::model::AppModel;
use bookcsv::query::{paginate, DEFAULT_PAGE_SIZE};
use bookcsv::render::render_page;
use bookcsv::sample::fixture_books;
use bookcsv::Msg;
use common::{apply, test_model, visible};

#[test]
fn test_default_page_size_is_twenty() {
    assert_eq!(DEFAULT_PAGE_SIZE, 20);
    assert_eq!(AppConfig::default().page_size, 20);
}

#[test]
fn test_twenty_five_rows_split_into_two_pages() {
    let mut model = test_model(fixture_books(25));

    let first = model.current_page();
    assert_eq!(first.rows.len(), 20);
    assert_eq!(first.page_count, 2);
    assert!(!first.has_prev);
    assert!(first.has_next);

    apply(&mut model, [Msg::NextPage]);
    let second = model.current_page();
    assert_eq!(second.rows.len(), 5);
    assert_eq!(second.start_index, 20);
    assert!(second.has_prev);
    assert!(!second.has_next);
    assert_eq!(visible(&model, "Title")[0], "Book Title 21");
}

#[test]
fn test_navigation_is_idempotent_at_the_ends() {
    let mut model = test_model(fixture_books(25));

    apply(&mut model, [Msg::PrevPage, Msg::PrevPage]);
    assert_eq!(model.page, 1);

    apply(&mut model, [Msg::NextPage, Msg::NextPage, Msg::NextPage]);
    assert_eq!(model.page, 2);
}

#[test]
fn test_exact_multiple_has_no_trailing_empty_page() {
    let mut model = test_model(fixture_books(40));
    assert_eq!(model.current_page().page_count, 2);

    apply(&mut model, [Msg::NextPage, Msg::NextPage]);
    assert_eq!(model.page, 2);
    assert_eq!(model.current_page().rows.len(), 20);
}

#[test]
fn test_empty_result_is_single_empty_page() {
    let mut model = test_model(fixture_books(25));
    apply(&mut model, [Msg::NextPage, Msg::SetSearch("no such book".into())]);

    let view = model.current_page();
    assert_eq!(model.page, 1);
    assert_eq!(view.page_count, 1);
    assert!(view.rows.is_empty());
    assert!(!view.has_prev);
    assert!(!view.has_next);
}

#[test]
fn test_pages_cover_every_row_exactly_once() {
    let indices: Vec<usize> = (0..57).collect();
    let mut seen = Vec::new();
    for page in 1..=3 {
        seen.extend_from_slice(paginate(&indices, page, 20).rows);
    }
    assert_eq!(seen, indices);
}

#[test]
fn test_configured_page_size() {
    let mut config = AppConfig::default();
    config.page_size = 7;
    let mut model = AppModel::new(config);
    apply(&mut model, [Msg::GenerateFixture { rows: Some(15) }]);

    let view = model.current_page();
    assert_eq!(view.rows.len(), 7);
    assert_eq!(view.page_count, 3);
}

#[test]
fn test_status_line_reports_filtered_rows() {
    let mut model = test_model(fixture_books(100));
    apply(&mut model, [Msg::SetSearch("Title 1".into())]);

    let rendered = render_page(&model);
    assert!(rendered.contains("Rows: 12 | Page: 1/1"), "{}", rendered);
}
