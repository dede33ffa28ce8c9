//! Ingestion, reset and export update functions

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::Cmd;
use crate::csv::{export_csv, IngestReport, EXPORT_MIME_TYPE};
use crate::messages::Msg;
use crate::model::{AppModel, DataSource, LoadStatus};
use crate::sample::{current_year, fixture_books, generate_books};

/// Handle ingestion and export messages
pub fn update_ingest(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::LoadFile(path) => load_file(model, path),
        Msg::FileLoaded { path, result } => file_loaded(model, path, result),
        Msg::GenerateSample { rows, seed } => generate_sample(model, rows, seed),
        Msg::GenerateFixture { rows } => generate_fixture(model, rows),
        Msg::ResetAll => reset_all(model),
        Msg::Export { path } => export(model, path),
        Msg::ExportCompleted { path, result } => export_completed(model, path, result),
        _ => None,
    }
}

fn load_file(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    if path.as_os_str().is_empty() {
        tracing::debug!("No file selected, ignoring load");
        return None;
    }

    if let LoadStatus::Loading { path: pending } = &model.status {
        tracing::warn!(
            "Ignoring load of {} while {} is still loading",
            path.display(),
            pending.display()
        );
        return None;
    }

    tracing::info!("Loading {}", path.display());
    model.status = LoadStatus::Loading { path: path.clone() };
    model.status_message = None;
    Some(Cmd::LoadFile {
        path,
        delimiter: model.config.delimiter,
    })
}

fn file_loaded(
    model: &mut AppModel,
    path: PathBuf,
    result: Result<crate::csv::ParsedTable, String>,
) -> Option<Cmd> {
    match result {
        Ok(parsed) => {
            let report = parsed.report;
            let message = load_summary(&path, &report);
            tracing::info!("{}", message);
            model.ingest(parsed.table, DataSource::File(path), report);
            model.status_message = Some(message);
        }
        Err(e) => {
            tracing::error!("Failed to load {}: {}", path.display(), e);
            model.status = model.settled_status();
            model.status_message = Some(format!("Failed to load {}: {}", path.display(), e));
        }
    }
    Some(Cmd::Redraw)
}

fn load_summary(path: &std::path::Path, report: &IngestReport) -> String {
    let mut message = format!("Loaded {} rows from {}", report.rows_read, path.display());
    if !report.skipped.is_empty() {
        message.push_str(&format!(", skipped {} malformed", report.skipped.len()));
    }
    if report.padded > 0 {
        message.push_str(&format!(", padded {} short", report.padded));
    }
    if report.truncated > 0 {
        message.push_str(&format!(", truncated {} long", report.truncated));
    }
    message
}

fn generate_sample(model: &mut AppModel, rows: Option<usize>, seed: Option<u64>) -> Option<Cmd> {
    let rows = rows.unwrap_or(model.config.sample_rows);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let table = generate_books(&mut rng, rows, current_year());
    let report = IngestReport {
        rows_read: table.row_count(),
        ..Default::default()
    };
    model.ingest(table, DataSource::Sample { rows, seed }, report);
    model.status_message = Some(format!("Generated {} sample rows", rows));
    Some(Cmd::Redraw)
}

fn generate_fixture(model: &mut AppModel, rows: Option<usize>) -> Option<Cmd> {
    let rows = rows.unwrap_or(model.config.fixture_rows);
    let table = fixture_books(rows);
    let report = IngestReport {
        rows_read: table.row_count(),
        ..Default::default()
    };
    model.ingest(table, DataSource::Fixture { rows }, report);
    model.status_message = Some(format!("Generated {} fixture rows", rows));
    Some(Cmd::Redraw)
}

fn reset_all(model: &mut AppModel) -> Option<Cmd> {
    model.table.reset();
    model.clear_view();
    model.status_message = Some("All edits reset".to_string());
    Some(Cmd::Redraw)
}

fn export(model: &mut AppModel, path: Option<PathBuf>) -> Option<Cmd> {
    let path = path.unwrap_or_else(|| PathBuf::from(&model.config.export_file_name));

    match export_csv(&model.table.working) {
        Ok(content) => {
            tracing::info!(
                mime = EXPORT_MIME_TYPE,
                "Exporting {} rows to {}",
                model.table.working.row_count(),
                path.display()
            );
            Some(Cmd::WriteFile { path, content })
        }
        Err(e) => {
            tracing::error!("{}", e);
            model.status_message = Some(e.to_string());
            Some(Cmd::Redraw)
        }
    }
}

fn export_completed(
    model: &mut AppModel,
    path: PathBuf,
    result: Result<usize, String>,
) -> Option<Cmd> {
    model.status_message = Some(match result {
        Ok(bytes) => format!("Exported {} bytes to {}", bytes, path.display()),
        Err(e) => {
            tracing::error!("Failed to export to {}: {}", path.display(), e);
            format!("Failed to export to {}: {}", path.display(), e)
        }
    });
    Some(Cmd::Redraw)
}
