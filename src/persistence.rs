//! Model snapshots.
//!
//! A model can be written in two self-describing, versioned formats:
//!
//! - [`SnapshotFormat::Binary`]: compact, checksummed (see [`binary`])
//! - [`SnapshotFormat::Json`]: readable and diffable (see [`json`])
//!
//! Loading detects the format from the leading bytes. Input that is damaged
//! or was never a snapshot fails with [`FalcataError::Corrupt`]; a model is
//! only ever returned once all of its invariants hold.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::classifier::model::BayesModel;
use crate::error::{FalcataError, Result};

pub mod binary;
pub mod json;
pub mod structured;

/// On-disk representation of a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotFormat {
    #[default]
    Binary,
    Json,
}

impl SnapshotFormat {
    /// Guess the format of a snapshot from its first bytes.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(binary::MAGIC) {
            return Some(SnapshotFormat::Binary);
        }
        match bytes.iter().find(|byte| !byte.is_ascii_whitespace()) {
            Some(b'{') => Some(SnapshotFormat::Json),
            _ => None,
        }
    }
}

/// Write `model` to `writer` in the given format.
pub fn write_model<W: Write>(model: &BayesModel, writer: W, format: SnapshotFormat) -> Result<()> {
    match format {
        SnapshotFormat::Binary => binary::encode(model, writer),
        SnapshotFormat::Json => json::encode(model, writer),
    }
}

/// Read a model in either format from `reader`.
pub fn read_model<R: Read>(mut reader: R) -> Result<BayesModel> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_bytes(&bytes)
}

/// Encode `model` into memory.
pub fn to_bytes(model: &BayesModel, format: SnapshotFormat) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_model(model, &mut bytes, format)?;
    Ok(bytes)
}

/// Decode a model in either format from memory.
pub fn from_bytes(bytes: &[u8]) -> Result<BayesModel> {
    match SnapshotFormat::detect(bytes) {
        Some(SnapshotFormat::Binary) => binary::decode(bytes),
        Some(SnapshotFormat::Json) => json::decode(bytes),
        None => Err(FalcataError::corrupt("unrecognized snapshot format")),
    }
}

/// Write `model` to `path` atomically.
///
/// The snapshot goes to a temporary file in the destination directory which
/// is then renamed over `path`, so readers never observe a partial file.
pub fn save_model_to_path(model: &BayesModel, path: &Path, format: SnapshotFormat) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let temp_file = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        write_model(model, &mut writer, format)?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| FalcataError::Io(e.error))?;

    debug!(path = %path.display(), ?format, "wrote snapshot");
    Ok(())
}

/// Load a model from a snapshot file in either format.
pub fn load_model_from_path(path: &Path) -> Result<BayesModel> {
    let file = File::open(path)?;
    read_model(BufReader::new(file))
}
