//! Human-readable JSON snapshot format.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{Read, Write};

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::classifier::category::CategoryStats;
use crate::classifier::model::BayesModel;
use crate::error::{FalcataError, Result};

/// Value of the `format` field identifying a JSON snapshot.
pub const FORMAT_NAME: &str = "falcata-model";

/// Current JSON format version.
pub const FORMAT_VERSION: u32 = 1;

/// Serialized form of a whole model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelSnapshot {
    pub format: String,
    pub version: u32,
    pub categories: Vec<CategorySnapshot>,
    pub total_word_mass: u64,
}

/// Serialized form of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategorySnapshot {
    pub name: String,
    pub documents: u64,
    pub word_mass: u64,
    #[serde(deserialize_with = "deserialize_unique_features")]
    pub features: BTreeMap<String, u64>,
}

/// Reject a feature that appears twice in one category, matching the binary
/// decoder instead of letting the last value win.
fn deserialize_unique_features<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FeaturesVisitor;

    impl<'de> Visitor<'de> for FeaturesVisitor {
        type Value = BTreeMap<String, u64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of feature counts")
        }

        fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut features = BTreeMap::new();
            while let Some((feature, count)) = access.next_entry::<String, u64>()? {
                if features.contains_key(&feature) {
                    return Err(de::Error::custom(format!(
                        "duplicate feature {feature:?} in category"
                    )));
                }
                features.insert(feature, count);
            }
            Ok(features)
        }
    }

    deserializer.deserialize_map(FeaturesVisitor)
}

impl From<&BayesModel> for ModelSnapshot {
    fn from(model: &BayesModel) -> Self {
        ModelSnapshot {
            format: FORMAT_NAME.to_string(),
            version: FORMAT_VERSION,
            categories: model
                .categories()
                .iter()
                .map(|stats| CategorySnapshot {
                    name: stats.name().to_string(),
                    documents: stats.documents(),
                    word_mass: stats.word_mass(),
                    features: stats
                        .features()
                        .map(|(feature, count)| (feature.to_string(), count))
                        .collect(),
                })
                .collect(),
            total_word_mass: model.total_word_mass(),
        }
    }
}

impl TryFrom<ModelSnapshot> for BayesModel {
    type Error = FalcataError;

    fn try_from(snapshot: ModelSnapshot) -> Result<Self> {
        if snapshot.format != FORMAT_NAME {
            return Err(FalcataError::corrupt(format!(
                "unknown snapshot format {:?}",
                snapshot.format
            )));
        }
        if snapshot.version != FORMAT_VERSION {
            return Err(FalcataError::corrupt(format!(
                "unsupported JSON snapshot version {}",
                snapshot.version
            )));
        }

        let categories = snapshot
            .categories
            .into_iter()
            .map(|category| {
                CategoryStats::from_parts(
                    category.name,
                    category.features.into_iter().collect(),
                    category.documents,
                    category.word_mass,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        BayesModel::from_parts(categories, snapshot.total_word_mass)
    }
}

/// Write `model` as pretty-printed JSON.
pub fn encode<W: Write>(model: &BayesModel, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &ModelSnapshot::from(model))?;
    writer.flush()?;
    Ok(())
}

/// Read a JSON snapshot. Malformed JSON is reported as corrupt.
pub fn decode<R: Read>(reader: R) -> Result<BayesModel> {
    let snapshot: ModelSnapshot = serde_json::from_reader(reader)
        .map_err(|e| FalcataError::corrupt(format!("invalid JSON snapshot: {e}")))?;
    BayesModel::try_from(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::features::FeatureCounts;

    fn model() -> BayesModel {
        let mut model = BayesModel::new(["x", "y"]).unwrap();
        let features: FeatureCounts = [("appl", 2), ("banana", 1)].into_iter().collect();
        model.train("x", &features).unwrap();
        model
    }

    #[test]
    fn test_snapshot_shape() {
        let mut buffer = Vec::new();
        encode(&model(), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["format"], "falcata-model");
        assert_eq!(value["version"], 1);
        assert_eq!(value["total_word_mass"], 3);
        assert_eq!(value["categories"][0]["name"], "x");
        assert_eq!(value["categories"][0]["documents"], 1);
        assert_eq!(value["categories"][0]["features"]["appl"], 2);
        assert_eq!(value["categories"][1]["word_mass"], 0);
    }

    #[test]
    fn test_decode_restores_model() {
        let model = model();
        let mut buffer = Vec::new();
        encode(&model, &mut buffer).unwrap();

        assert_eq!(decode(buffer.as_slice()).unwrap(), model);
    }

    #[test]
    fn test_rejects_foreign_documents() {
        let cases = [
            r#"{"format":"other","version":1,"categories":[{"name":"x","documents":0,"word_mass":0,"features":{}}],"total_word_mass":0}"#,
            r#"{"format":"falcata-model","version":2,"categories":[{"name":"x","documents":0,"word_mass":0,"features":{}}],"total_word_mass":0}"#,
            r#"{"format":"falcata-model","version":1,"categories":[],"total_word_mass":0}"#,
            r#"{"format":"falcata-model","version":1,"categories":[{"name":"x","documents":0,"word_mass":1,"features":{"a":0}}],"total_word_mass":1}"#,
            r#"{"format":"falcata-model","version":1,"categories":[{"name":"x","documents":0,"word_mass":0,"features":{}},{"name":"x","documents":0,"word_mass":0,"features":{}}],"total_word_mass":0}"#,
            r#"{"format":"falcata-model","version":1,"categories":[{"name":"x","documents":-1,"word_mass":0,"features":{}}],"total_word_mass":0}"#,
            r#"{"format":"falcata-model""#,
        ];

        for case in cases {
            assert!(
                matches!(decode(case.as_bytes()), Err(FalcataError::Corrupt(_))),
                "accepted {case}"
            );
        }
    }

    #[test]
    fn test_duplicate_feature_keys_are_corrupt() {
        // Keeping the last value would give a consistent model.
        let duplicated = r#"{"format":"falcata-model","version":1,"categories":[{"name":"x","documents":1,"word_mass":2,"features":{"a":1,"a":2}}],"total_word_mass":2}"#;
        match decode(duplicated.as_bytes()) {
            Err(FalcataError::Corrupt(message)) => assert!(message.contains("duplicate feature")),
            other => panic!("expected corrupt snapshot, got {other:?}"),
        }

        let unique = r#"{"format":"falcata-model","version":1,"categories":[{"name":"x","documents":1,"word_mass":2,"features":{"a":1,"b":1}}],"total_word_mass":2}"#;
        let model = decode(unique.as_bytes()).unwrap();
        assert_eq!(model.total_word_mass(), 2);
    }
}
