use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::builder::KnowledgeBaseBuilder;
use super::error::{LoadError, Result};
use super::literal::{normalize_name, parse_list};
use super::KnowledgeBase;

const NAME_COLUMN: &str = "name";

/// One row of the source table.
///
/// Only `name` is required; either list column may be absent or blank.
#[derive(Debug, Deserialize)]
struct Row {
    name: String,
    #[serde(default)]
    symptoms: Option<String>,
    #[serde(default)]
    treatments: Option<String>,
}

pub(super) fn load_path(path: &Path) -> Result<KnowledgeBase> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;
    tracing::debug!("Loading knowledge base from {}", path.display());
    load_reader(file)
}

pub(super) fn load_reader<R: Read>(mut reader: R) -> Result<KnowledgeBase> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut table = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    if !table.headers()?.iter().any(|h| h == NAME_COLUMN) {
        return Err(LoadError::MissingColumn(NAME_COLUMN));
    }

    let mut builder = KnowledgeBaseBuilder::default();
    for row in table.deserialize::<Row>() {
        apply_row(&mut builder, row?);
    }

    Ok(builder.build())
}

fn apply_row(builder: &mut KnowledgeBaseBuilder, row: Row) {
    let disease = normalize_name(&row.name);
    if disease.is_empty() {
        tracing::debug!("Skipping row with empty disease name");
        return;
    }
    builder.add_disease(disease);

    for symptom in list_cell(builder, disease, "symptoms", row.symptoms.as_deref()) {
        builder.add_symptom(disease, &symptom);
    }
    for treatment in list_cell(builder, disease, "treatments", row.treatments.as_deref()) {
        builder.add_treatment(&treatment, disease);
    }
}

/// Parse a list cell, recording it as skipped when it is malformed.
fn list_cell(
    builder: &mut KnowledgeBaseBuilder,
    disease: &str,
    column: &str,
    cell: Option<&str>,
) -> Vec<String> {
    let Some(cell) = cell.filter(|c| !c.trim().is_empty()) else {
        return Vec::new();
    };

    match parse_list(cell) {
        Some(items) => items,
        None => {
            tracing::debug!(disease, column, cell, "Ignoring malformed list cell");
            builder.skip_cell();
            Vec::new()
        }
    }
}
