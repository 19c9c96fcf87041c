//! Storage policy and erasure-coding policy records.

use serde::{Deserialize, Serialize};

/// A block storage policy (hot/warm/cold tiering).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoragePolicy {
    pub id: u32,
    pub name: String,
    pub storage_types: Vec<String>,
    pub creation_fallbacks: Vec<String>,
    pub replication_fallbacks: Vec<String>,
    pub copy_on_create_file: bool,
}

/// An erasure-coding policy attached to a directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EcPolicy {
    pub name: String,
    pub id: u32,
    pub cell_size: u64,
    pub codec_name: String,
    pub num_data_units: u32,
    pub num_parity_units: u32,
}
