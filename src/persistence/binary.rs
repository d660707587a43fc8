//! Compact binary snapshot format.
//!
//! ```text
//! "FLCT" | version: u16 LE | category count: varint
//! per category:
//!     name: string | documents: varint | word mass: varint
//!     feature count: varint | (feature: string, count: varint)*
//! total word mass: varint | crc32 of all preceding bytes: u32 LE
//! ```
//!
//! Strings are varint length-prefixed UTF-8. Features are written in sorted
//! order, so equal models encode to identical bytes.

use std::io::{Read, Write};

use ahash::AHashMap;

use crate::classifier::category::CategoryStats;
use crate::classifier::model::BayesModel;
use crate::error::{FalcataError, Result};
use crate::persistence::structured::{StructReader, StructWriter};

/// Leading bytes of every binary snapshot.
pub const MAGIC: &[u8; 4] = b"FLCT";

/// Current binary format version.
pub const FORMAT_VERSION: u16 = 1;

/// Write `model` in the binary format.
pub fn encode<W: Write>(model: &BayesModel, writer: W) -> Result<()> {
    let mut writer = StructWriter::new(writer);
    writer.write_raw(MAGIC)?;
    writer.write_u16(FORMAT_VERSION)?;

    writer.write_varint(model.len() as u64)?;
    for stats in model.categories() {
        writer.write_string(stats.name())?;
        writer.write_varint(stats.documents())?;
        writer.write_varint(stats.word_mass())?;

        let features = stats.sorted_features();
        writer.write_varint(features.len() as u64)?;
        for (feature, count) in features {
            writer.write_string(feature)?;
            writer.write_varint(count)?;
        }
    }

    writer.write_varint(model.total_word_mass())?;
    writer.finish()?;
    Ok(())
}

/// Read a binary snapshot, checking its framing and the model invariants.
pub fn decode<R: Read>(reader: R) -> Result<BayesModel> {
    let mut reader = StructReader::new(reader);

    if reader.read_raw(MAGIC.len() as u64)? != MAGIC {
        return Err(FalcataError::corrupt("not a binary snapshot (bad magic)"));
    }
    let version = reader.read_u16()?;
    if version != FORMAT_VERSION {
        return Err(FalcataError::corrupt(format!(
            "unsupported binary snapshot version {version}"
        )));
    }

    let category_count = reader.read_varint()?;
    let mut categories = Vec::new();
    for _ in 0..category_count {
        let name = reader.read_string()?;
        let documents = reader.read_varint()?;
        let word_mass = reader.read_varint()?;

        let feature_count = reader.read_varint()?;
        let mut features = AHashMap::new();
        for _ in 0..feature_count {
            let feature = reader.read_string()?;
            let count = reader.read_varint()?;
            if features.insert(feature, count).is_some() {
                return Err(FalcataError::corrupt(format!(
                    "duplicate feature in category {name:?}"
                )));
            }
        }

        categories.push(CategoryStats::from_parts(name, features, documents, word_mass)?);
    }

    let total_word_mass = reader.read_varint()?;
    reader.verify_checksum()?;

    BayesModel::from_parts(categories, total_word_mass)
}
