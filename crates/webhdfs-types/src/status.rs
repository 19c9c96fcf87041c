//! File status records returned by GETFILESTATUS and LISTSTATUS.

use serde::{Deserialize, Serialize};

use crate::permission;

/// Kind of filesystem object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

impl Default for FileType {
    fn default() -> Self {
        FileType::File
    }
}

/// Status of a single filesystem path.
///
/// `length` is 0 for directories and symlinks by convention of the remote
/// system; that convention is not enforced locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileStatus {
    pub path_suffix: String,
    pub length: u64,
    pub owner: String,
    pub group: String,
    #[serde(with = "permission::octal")]
    pub permission: u32,
    pub replication: u32,
    pub block_size: u64,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub access_time: i64,
    pub modification_time: i64,
    #[serde(rename = "symlink", skip_serializing_if = "Option::is_none")]
    pub symlink_target: Option<String>,
    pub children_num: i64,
    pub file_id: i64,
    pub storage_policy: i32,
}

impl Default for FileStatus {
    fn default() -> Self {
        Self {
            path_suffix: String::new(),
            length: 0,
            owner: String::new(),
            group: String::new(),
            permission: 0,
            replication: 0,
            block_size: 0,
            file_type: FileType::File,
            access_time: 0,
            modification_time: 0,
            symlink_target: None,
            children_num: 0,
            file_id: 0,
            storage_policy: 0,
        }
    }
}

impl FileStatus {
    /// Returns true if this status describes a directory.
    pub fn is_directory(&self) -> bool {
        self.file_type == FileType::Directory
    }

    /// Display name for this entry: the path suffix when the server supplied
    /// one (listings), otherwise the base name of the requested path.
    pub fn display_name(&self, request_path: &str) -> String {
        if !self.path_suffix.is_empty() {
            return self.path_suffix.clone();
        }
        request_path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_file_status() {
        let raw = r#"{
            "accessTime": 1320171722771,
            "blockSize": 33554432,
            "childrenNum": 0,
            "fileId": 16388,
            "group": "supergroup",
            "length": 24930,
            "modificationTime": 1320171722771,
            "owner": "webuser",
            "pathSuffix": "a.patch",
            "permission": "644",
            "replication": 1,
            "storagePolicy": 0,
            "type": "FILE"
        }"#;
        let status: FileStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.path_suffix, "a.patch");
        assert_eq!(status.permission, 0o644);
        assert_eq!(status.file_type, FileType::File);
        assert_eq!(status.length, 24930);
        assert!(!status.is_directory());
    }

    #[test]
    fn test_decode_directory_ignores_unknown_fields() {
        let raw = r#"{
            "pathSuffix": "",
            "type": "DIRECTORY",
            "permission": "755",
            "aclBit": true
        }"#;
        let status: FileStatus = serde_json::from_str(raw).unwrap();
        assert!(status.is_directory());
        assert_eq!(status.permission, 0o755);
    }

    #[test]
    fn test_display_name_prefers_suffix() {
        let mut status = FileStatus::default();
        status.path_suffix = "child.txt".to_string();
        assert_eq!(status.display_name("/a/b"), "child.txt");
    }

    #[test]
    fn test_display_name_falls_back_to_base_name() {
        let status = FileStatus::default();
        assert_eq!(status.display_name("/a/b/c.txt"), "c.txt");
        assert_eq!(status.display_name("/a/b/"), "b");
    }
}
