//! Block location and checksum records.

use serde::{Deserialize, Serialize};

/// Location of one block of a file, from GETFILEBLOCKLOCATIONS.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockLocation {
    pub offset: u64,
    pub length: u64,
    pub hosts: Vec<String>,
    pub names: Vec<String>,
    pub topology_paths: Vec<String>,
    pub cached_hosts: Vec<String>,
    pub storage_types: Vec<String>,
    pub corrupt: bool,
}

/// File checksum from GETFILECHECKSUM.
///
/// `bytes` is the hex-encoded checksum as transmitted; it is not decoded
/// locally because the algorithm string governs its interpretation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileChecksum {
    pub algorithm: String,
    pub bytes: String,
    pub length: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_block_location() {
        let raw = r#"{
            "cachedHosts": [],
            "corrupt": false,
            "hosts": ["host1", "host2"],
            "length": 134217728,
            "names": ["host1:9866", "host2:9866"],
            "offset": 0,
            "storageTypes": ["DISK", "DISK"],
            "topologyPaths": ["/default/rack0/host1:9866", "/default/rack0/host2:9866"]
        }"#;
        let loc: BlockLocation = serde_json::from_str(raw).unwrap();
        assert_eq!(loc.hosts.len(), 2);
        assert_eq!(loc.length, 134217728);
        assert!(!loc.corrupt);
    }

    #[test]
    fn test_decode_file_checksum() {
        let raw = r#"{
            "algorithm": "MD5-of-1MD5-of-512CRC32",
            "bytes": "eadb10de24aa315748930df6e185c0d8",
            "length": 28
        }"#;
        let sum: FileChecksum = serde_json::from_str(raw).unwrap();
        assert_eq!(sum.algorithm, "MD5-of-1MD5-of-512CRC32");
        assert_eq!(sum.length, 28);
    }
}
