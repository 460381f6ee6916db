use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Row {row} of '{path}': label must be exactly one character, got '{label}'")]
    InvalidLabel {
        path: String,
        row: usize,
        label: String,
    },
    #[error("Column 'x' of '{path}' is set on some rows but missing on row {row}")]
    PartialPositions { path: String, row: usize },
}

#[derive(Debug, Deserialize)]
struct TrackRecord {
    label: String,
    #[serde(default)]
    x: Option<f64>,
}

/// A per-residue label track read from CSV, with optional explicit x positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelTrack {
    pub labels: String,
    pub positions: Option<Vec<f64>>,
}

impl LabelTrack {
    pub fn len(&self) -> usize {
        self.labels.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self, TrackError> {
        let origin = path.to_string_lossy().to_string();
        let reader = csv::Reader::from_path(path).map_err(|source| TrackError::Csv {
            path: origin.clone(),
            source,
        })?;
        Self::from_csv_reader(reader, &origin)
    }

    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, TrackError> {
        Self::from_csv_reader(csv::Reader::from_reader(reader), origin)
    }

    fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>, origin: &str) -> Result<Self, TrackError> {
        let mut labels = String::new();
        let mut positions: Vec<f64> = Vec::new();
        let mut with_x: Option<bool> = None;

        for (index, result) in reader.deserialize::<TrackRecord>().enumerate() {
            let row = index + 1;
            let record = result.map_err(|source| TrackError::Csv {
                path: origin.to_string(),
                source,
            })?;

            let mut chars = record.label.chars();
            let code = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(TrackError::InvalidLabel {
                        path: origin.to_string(),
                        row,
                        label: record.label,
                    });
                }
            };
            labels.push(code);

            let has_x = record.x.is_some();
            if *with_x.get_or_insert(has_x) != has_x {
                return Err(TrackError::PartialPositions {
                    path: origin.to_string(),
                    row,
                });
            }
            if let Some(x) = record.x {
                positions.push(x);
            }
        }

        debug!("Read {} residues from label track '{}'", labels.chars().count(), origin);
        Ok(Self {
            labels,
            positions: with_x.unwrap_or(false).then_some(positions),
        })
    }
}
