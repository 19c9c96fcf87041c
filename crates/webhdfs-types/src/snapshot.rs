//! Snapshot records: diff reports and snapshottable directory listings.

use serde::{Deserialize, Serialize};

use crate::status::FileStatus;

/// One entry in a snapshot diff: a path that was created, modified, renamed
/// or deleted between two snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiffReportEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub source_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_path: Option<String>,
}

/// Difference between two snapshots of a directory, from GETSNAPSHOTDIFF.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotDiffReport {
    pub snapshot_root: String,
    pub from_snapshot: String,
    pub to_snapshot: String,
    pub diff_list: Vec<DiffReportEntry>,
}

/// One snapshottable directory, from GETSNAPSHOTTABLEDIRECTORYLIST.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshottableDirectory {
    pub dir_status: FileStatus,
    pub parent_full_path: String,
    pub snapshot_number: u32,
    pub snapshot_quota: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_diff_report() {
        let raw = r#"{
            "diffList": [
                {"sourcePath": "nested", "type": "CREATE"},
                {"sourcePath": "a.txt", "targetPath": "b.txt", "type": "RENAME"}
            ],
            "fromSnapshot": "s1",
            "snapshotRoot": "/data",
            "toSnapshot": "s2"
        }"#;
        let report: SnapshotDiffReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.diff_list.len(), 2);
        assert_eq!(report.diff_list[1].entry_type, "RENAME");
        assert_eq!(report.diff_list[1].target_path.as_deref(), Some("b.txt"));
    }

    #[test]
    fn test_decode_snapshottable_directory() {
        let raw = r#"{
            "dirStatus": {"pathSuffix": "data", "type": "DIRECTORY", "permission": "755"},
            "parentFullPath": "/",
            "snapshotNumber": 1,
            "snapshotQuota": 65536
        }"#;
        let dir: SnapshottableDirectory = serde_json::from_str(raw).unwrap();
        assert_eq!(dir.parent_full_path, "/");
        assert!(dir.dir_status.is_directory());
    }
}
