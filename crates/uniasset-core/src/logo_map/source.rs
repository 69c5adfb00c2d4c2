//! CSV input: one row per university.

use std::path::Path;

use super::error::MapError;

pub const NAME_COLUMN: &str = "university_name";
pub const URL_COLUMN: &str = "logo_url";

/// One CSV record, both cells whitespace-trimmed. Missing cells read as "".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub university_name: String,
    pub logo_url: String,
}

/// Reads every data row of `path`.
///
/// The header row must contain `university_name` and `logo_url`; extra
/// columns are ignored and column order is free. Short rows are accepted.
pub fn read_rows(path: &Path) -> Result<Vec<SourceRow>, MapError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| MapError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = rdr.headers().map_err(|source| MapError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| MapError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    };
    let name_idx = column(NAME_COLUMN)?;
    let url_idx = column(URL_COLUMN)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|source| MapError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        rows.push(SourceRow {
            university_name: cell(name_idx),
            logo_url: cell(url_idx),
        });
    }
    tracing::debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
