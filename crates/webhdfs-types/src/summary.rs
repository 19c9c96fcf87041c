//! Space accounting records: GETCONTENTSUMMARY and GETQUOTAUSAGE.

use serde::{Deserialize, Serialize};

/// Recursive content summary of a directory tree.
///
/// Quota fields are `-1` when no quota is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentSummary {
    pub directory_count: u64,
    pub file_count: u64,
    pub length: u64,
    pub quota: i64,
    pub space_consumed: u64,
    pub space_quota: i64,
}

/// Quota and usage for a directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuotaUsage {
    pub file_and_directory_count: u64,
    pub quota: i64,
    pub space_consumed: u64,
    pub space_quota: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_content_summary() {
        let raw = r#"{
            "directoryCount": 2,
            "fileCount": 1,
            "length": 24930,
            "quota": -1,
            "spaceConsumed": 24930,
            "spaceQuota": -1
        }"#;
        let summary: ContentSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.directory_count, 2);
        assert_eq!(summary.quota, -1);
        assert_eq!(summary.space_consumed, 24930);
    }

    #[test]
    fn test_decode_quota_usage() {
        let raw = r#"{
            "fileAndDirectoryCount": 1,
            "quota": 100,
            "spaceConsumed": 1024,
            "spaceQuota": 1048576
        }"#;
        let usage: QuotaUsage = serde_json::from_str(raw).unwrap();
        assert_eq!(usage.quota, 100);
        assert_eq!(usage.space_quota, 1048576);
    }
}
