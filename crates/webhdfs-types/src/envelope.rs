//! JSON response envelopes.
//!
//! Every successful JSON response wraps its payload in an object keyed by a
//! capitalized field name matching the operation, e.g. `{"FileStatus": {...}}`
//! or `{"boolean": true}`. The envelopes here are the decode targets for each
//! operation's success shape.

use serde::{Deserialize, Serialize};

use crate::block::{BlockLocation, FileChecksum};
use crate::policy::{EcPolicy, StoragePolicy};
use crate::snapshot::{SnapshotDiffReport, SnapshottableDirectory};
use crate::status::FileStatus;
use crate::summary::{ContentSummary, QuotaUsage};
use crate::token::DelegationToken;
use crate::xattr::XAttr;

/// `{"boolean": true}` — DELETE, MKDIRS, RENAME, SETREPLICATION, ...
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BooleanResponse {
    pub boolean: bool,
}

/// `{"long": 1320962673997}` — RENEWDELEGATIONTOKEN.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LongResponse {
    #[serde(rename = "long")]
    pub value: i64,
}

/// `{"Path": "/user/alice"}` — GETHOMEDIRECTORY, GETTRASHROOT, CREATESNAPSHOT.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathResponse {
    #[serde(rename = "Path")]
    pub path: String,
}

/// `{"Location": "http://datanode:9864/..."}` — redirect-capable operations in
/// no-redirect mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationResponse {
    #[serde(rename = "Location")]
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileStatusResponse {
    #[serde(rename = "FileStatus")]
    pub file_status: FileStatus,
}

/// Inner wrapper of LISTSTATUS: `{"FileStatuses": {"FileStatus": [...]}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileStatuses {
    #[serde(rename = "FileStatus")]
    pub file_status: Vec<FileStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListStatusResponse {
    #[serde(rename = "FileStatuses")]
    pub file_statuses: FileStatuses,
}

/// Inner wrapper of LISTSTATUS_BATCH.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryListing {
    pub partial_listing: ListStatusResponse,
    pub remaining_entries: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryListingResponse {
    #[serde(rename = "DirectoryListing")]
    pub directory_listing: DirectoryListing,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSummaryResponse {
    #[serde(rename = "ContentSummary")]
    pub content_summary: ContentSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuotaUsageResponse {
    #[serde(rename = "QuotaUsage")]
    pub quota_usage: QuotaUsage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileChecksumResponse {
    #[serde(rename = "FileChecksum")]
    pub file_checksum: FileChecksum,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(rename = "Token")]
    pub token: DelegationToken,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XAttrsResponse {
    #[serde(rename = "XAttrs")]
    pub xattrs: Vec<XAttr>,
}

/// LISTXATTRS transmits the name list as a JSON-encoded string within the
/// JSON document; [`XAttrNamesResponse::names`] decodes the inner layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XAttrNamesResponse {
    #[serde(rename = "XAttrNames")]
    pub xattr_names: String,
}

impl XAttrNamesResponse {
    /// Decodes the doubly encoded name list.
    pub fn names(&self) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(&self.xattr_names)
    }
}

/// Inner wrapper of GETALLSTORAGEPOLICY.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockStoragePolicies {
    #[serde(rename = "BlockStoragePolicy")]
    pub block_storage_policy: Vec<StoragePolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoragePoliciesResponse {
    #[serde(rename = "BlockStoragePolicies")]
    pub block_storage_policies: BlockStoragePolicies,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoragePolicyResponse {
    #[serde(rename = "BlockStoragePolicy")]
    pub block_storage_policy: StoragePolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EcPolicyResponse {
    #[serde(rename = "ECPolicy")]
    pub ec_policy: EcPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDiffResponse {
    #[serde(rename = "SnapshotDiffReport")]
    pub snapshot_diff_report: SnapshotDiffReport,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshottableDirectoryListResponse {
    #[serde(rename = "SnapshottableDirectoryList")]
    pub snapshottable_directory_list: Vec<SnapshottableDirectory>,
}

/// Inner wrapper of GETFILEBLOCKLOCATIONS.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockLocationList {
    #[serde(rename = "BlockLocation")]
    pub block_location: Vec<BlockLocation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockLocationsResponse {
    #[serde(rename = "BlockLocations")]
    pub block_locations: BlockLocationList,
}
