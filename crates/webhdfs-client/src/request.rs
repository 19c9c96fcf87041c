//! Per-operation request descriptors.
//!
//! Each descriptor is a plain value type exposing the filesystem path under
//! operation and the query parameters for one call. Required fields are
//! checked in [`RestRequest::params`], so a malformed request fails before
//! any network attempt and never leaks a partially built HTTP request.
//!
//! The path is returned verbatim: a trailing separator the caller supplied is
//! preserved, because the server treats `/a/b/` and `/a/b` as different
//! targets.

use webhdfs_types::XAttrFlag;

use crate::error::{ClientError, Result};
use crate::op::Operation;
use crate::param::{CallContext, ParamList};

/// A typed filesystem operation ready to be marshalled into an HTTP request.
pub trait RestRequest: Send + Sync {
    fn operation(&self) -> Operation;

    /// The filesystem path under operation, verbatim. Empty for non-path
    /// operations such as delegation-token calls.
    fn path(&self) -> &str {
        ""
    }

    /// Builds the query parameters, validating required fields first.
    fn params(&self, ctx: &CallContext) -> Result<ParamList>;
}

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        Err(ClientError::MissingRequiredField { field })
    } else {
        Ok(value)
    }
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct OpenRequest {
    pub path: String,
    pub offset: Option<u64>,
    pub length: Option<u64>,
    pub buffer_size: Option<u32>,
}

impl RestRequest for OpenRequest {
    fn operation(&self) -> Operation {
        Operation::Open
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt_u64("offset", self.offset);
        p.push_opt_u64("length", self.length);
        p.push_opt_u64("buffersize", self.buffer_size.map(u64::from));
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetFileStatusRequest {
    pub path: String,
}

impl RestRequest for GetFileStatusRequest {
    fn operation(&self) -> Operation {
        Operation::GetFileStatus
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListStatusRequest {
    pub path: String,
}

impl RestRequest for ListStatusRequest {
    fn operation(&self) -> Operation {
        Operation::ListStatus
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListStatusBatchRequest {
    pub path: String,
    /// Entry name to resume after, from the previous page.
    pub start_after: Option<String>,
}

impl RestRequest for ListStatusBatchRequest {
    fn operation(&self) -> Operation {
        Operation::ListStatusBatch
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt("startAfter", self.start_after.as_deref());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetContentSummaryRequest {
    pub path: String,
}

impl RestRequest for GetContentSummaryRequest {
    fn operation(&self) -> Operation {
        Operation::GetContentSummary
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetQuotaUsageRequest {
    pub path: String,
}

impl RestRequest for GetQuotaUsageRequest {
    fn operation(&self) -> Operation {
        Operation::GetQuotaUsage
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetFileChecksumRequest {
    pub path: String,
}

impl RestRequest for GetFileChecksumRequest {
    fn operation(&self) -> Operation {
        Operation::GetFileChecksum
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

/// GETHOMEDIRECTORY is a non-path operation.
#[derive(Debug, Clone, Default)]
pub struct GetHomeDirectoryRequest;

impl RestRequest for GetHomeDirectoryRequest {
    fn operation(&self) -> Operation {
        Operation::GetHomeDirectory
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetTrashRootRequest {
    pub path: String,
}

impl RestRequest for GetTrashRootRequest {
    fn operation(&self) -> Operation {
        Operation::GetTrashRoot
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetDelegationTokenRequest {
    pub renewer: Option<String>,
    pub service: Option<String>,
    pub kind: Option<String>,
}

impl RestRequest for GetDelegationTokenRequest {
    fn operation(&self) -> Operation {
        Operation::GetDelegationToken
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt("renewer", self.renewer.as_deref());
        p.push_opt("service", self.service.as_deref());
        p.push_opt("kind", self.kind.as_deref());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetXAttrsRequest {
    pub path: String,
    /// Names to fetch; empty fetches all attributes.
    pub names: Vec<String>,
    pub encoding: Option<String>,
}

impl RestRequest for GetXAttrsRequest {
    fn operation(&self) -> Operation {
        Operation::GetXAttrs
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        for name in &self.names {
            p.push("xattr.name", name);
        }
        p.push_opt("encoding", self.encoding.as_deref());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListXAttrsRequest {
    pub path: String,
}

impl RestRequest for ListXAttrsRequest {
    fn operation(&self) -> Operation {
        Operation::ListXAttrs
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckAccessRequest {
    pub path: String,
    /// Filesystem action to probe, e.g. `rw-`.
    pub fs_action: String,
}

impl RestRequest for CheckAccessRequest {
    fn operation(&self) -> Operation {
        Operation::CheckAccess
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        require("fsaction", &self.fs_action)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("fsaction", &self.fs_action);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetAllStoragePolicyRequest;

impl RestRequest for GetAllStoragePolicyRequest {
    fn operation(&self) -> Operation {
        Operation::GetAllStoragePolicy
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetStoragePolicyRequest {
    pub path: String,
}

impl RestRequest for GetStoragePolicyRequest {
    fn operation(&self) -> Operation {
        Operation::GetStoragePolicy
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetSnapshotDiffRequest {
    pub path: String,
    pub old_snapshot_name: String,
    pub snapshot_name: String,
}

impl RestRequest for GetSnapshotDiffRequest {
    fn operation(&self) -> Operation {
        Operation::GetSnapshotDiff
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        require("oldsnapshotname", &self.old_snapshot_name)?;
        require("snapshotname", &self.snapshot_name)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("oldsnapshotname", &self.old_snapshot_name);
        p.push("snapshotname", &self.snapshot_name);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetSnapshottableDirectoryListRequest;

impl RestRequest for GetSnapshottableDirectoryListRequest {
    fn operation(&self) -> Operation {
        Operation::GetSnapshottableDirectoryList
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetFileBlockLocationsRequest {
    pub path: String,
    pub offset: Option<u64>,
    pub length: Option<u64>,
}

impl RestRequest for GetFileBlockLocationsRequest {
    fn operation(&self) -> Operation {
        Operation::GetFileBlockLocations
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt_u64("offset", self.offset);
        p.push_opt_u64("length", self.length);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetEcPolicyRequest {
    pub path: String,
}

impl RestRequest for GetEcPolicyRequest {
    fn operation(&self) -> Operation {
        Operation::GetEcPolicy
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetLinkTargetRequest {
    pub path: String,
}

impl RestRequest for GetLinkTargetRequest {
    fn operation(&self) -> Operation {
        Operation::GetLinkTarget
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    pub path: String,
    pub overwrite: Option<bool>,
    pub block_size: Option<u64>,
    pub replication: Option<u16>,
    pub permission: Option<u32>,
    pub buffer_size: Option<u32>,
}

impl RestRequest for CreateRequest {
    fn operation(&self) -> Operation {
        Operation::Create
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt_bool("overwrite", self.overwrite);
        p.push_opt_u64("blocksize", self.block_size);
        p.push_opt_u64("replication", self.replication.map(u64::from));
        p.push_opt_permission("permission", self.permission);
        p.push_opt_u64("buffersize", self.buffer_size.map(u64::from));
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MkdirsRequest {
    pub path: String,
    pub permission: Option<u32>,
}

impl RestRequest for MkdirsRequest {
    fn operation(&self) -> Operation {
        Operation::Mkdirs
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt_permission("permission", self.permission);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateSymlinkRequest {
    /// The symlink path to create.
    pub path: String,
    /// What the symlink points at.
    pub destination: String,
    pub create_parent: Option<bool>,
}

impl RestRequest for CreateSymlinkRequest {
    fn operation(&self) -> Operation {
        Operation::CreateSymlink
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        require("destination", &self.destination)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("destination", &self.destination);
        p.push_opt_bool("createParent", self.create_parent);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenameRequest {
    pub path: String,
    pub destination: String,
}

impl RestRequest for RenameRequest {
    fn operation(&self) -> Operation {
        Operation::Rename
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        require("destination", &self.destination)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("destination", &self.destination);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetReplicationRequest {
    pub path: String,
    pub replication: Option<u16>,
}

impl RestRequest for SetReplicationRequest {
    fn operation(&self) -> Operation {
        Operation::SetReplication
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt_u64("replication", self.replication.map(u64::from));
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetOwnerRequest {
    pub path: String,
    pub owner: Option<String>,
    pub group: Option<String>,
}

impl RestRequest for SetOwnerRequest {
    fn operation(&self) -> Operation {
        Operation::SetOwner
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        if self.owner.is_none() && self.group.is_none() {
            return Err(ClientError::MissingRequiredField {
                field: "owner or group",
            });
        }
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt("owner", self.owner.as_deref());
        p.push_opt("group", self.group.as_deref());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetPermissionRequest {
    pub path: String,
    pub permission: Option<u32>,
}

impl RestRequest for SetPermissionRequest {
    fn operation(&self) -> Operation {
        Operation::SetPermission
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt_permission("permission", self.permission);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetTimesRequest {
    pub path: String,
    /// Milliseconds since epoch; `-1` keeps the current value.
    pub modification_time: Option<i64>,
    pub access_time: Option<i64>,
}

impl RestRequest for SetTimesRequest {
    fn operation(&self) -> Operation {
        Operation::SetTimes
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt_i64("modificationtime", self.modification_time);
        p.push_opt_i64("accesstime", self.access_time);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenewDelegationTokenRequest {
    pub token: String,
}

impl RestRequest for RenewDelegationTokenRequest {
    fn operation(&self) -> Operation {
        Operation::RenewDelegationToken
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("token", &self.token)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("token", &self.token);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CancelDelegationTokenRequest {
    pub token: String,
}

impl RestRequest for CancelDelegationTokenRequest {
    fn operation(&self) -> Operation {
        Operation::CancelDelegationToken
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("token", &self.token)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("token", &self.token);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AllowSnapshotRequest {
    pub path: String,
}

impl RestRequest for AllowSnapshotRequest {
    fn operation(&self) -> Operation {
        Operation::AllowSnapshot
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct DisallowSnapshotRequest {
    pub path: String,
}

impl RestRequest for DisallowSnapshotRequest {
    fn operation(&self) -> Operation {
        Operation::DisallowSnapshot
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateSnapshotRequest {
    pub path: String,
    /// Absent lets the server pick a generated name.
    pub snapshot_name: Option<String>,
}

impl RestRequest for CreateSnapshotRequest {
    fn operation(&self) -> Operation {
        Operation::CreateSnapshot
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt("snapshotname", self.snapshot_name.as_deref());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenameSnapshotRequest {
    pub path: String,
    pub old_snapshot_name: String,
    pub snapshot_name: String,
}

impl RestRequest for RenameSnapshotRequest {
    fn operation(&self) -> Operation {
        Operation::RenameSnapshot
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        require("oldsnapshotname", &self.old_snapshot_name)?;
        require("snapshotname", &self.snapshot_name)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("oldsnapshotname", &self.old_snapshot_name);
        p.push("snapshotname", &self.snapshot_name);
        Ok(p)
    }
}

#[derive(Debug, Clone)]
pub struct SetXAttrRequest {
    pub path: String,
    pub name: String,
    pub value: Option<String>,
    pub flag: XAttrFlag,
}

impl Default for SetXAttrRequest {
    fn default() -> Self {
        Self {
            path: String::new(),
            name: String::new(),
            value: None,
            flag: XAttrFlag::Create,
        }
    }
}

impl RestRequest for SetXAttrRequest {
    fn operation(&self) -> Operation {
        Operation::SetXAttr
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        require("xattr.name", &self.name)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("xattr.name", &self.name);
        p.push_opt("xattr.value", self.value.as_deref());
        p.push("flag", self.flag.as_str());
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RemoveXAttrRequest {
    pub path: String,
    pub name: String,
}

impl RestRequest for RemoveXAttrRequest {
    fn operation(&self) -> Operation {
        Operation::RemoveXAttr
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        require("xattr.name", &self.name)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("xattr.name", &self.name);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetStoragePolicyRequest {
    pub path: String,
    pub policy: String,
}

impl RestRequest for SetStoragePolicyRequest {
    fn operation(&self) -> Operation {
        Operation::SetStoragePolicy
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        require("storagepolicy", &self.policy)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("storagepolicy", &self.policy);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnsetStoragePolicyRequest {
    pub path: String,
}

impl RestRequest for UnsetStoragePolicyRequest {
    fn operation(&self) -> Operation {
        Operation::UnsetStoragePolicy
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetQuotaRequest {
    pub path: String,
    pub namespace_quota: Option<u64>,
    pub storage_space_quota: Option<u64>,
}

impl RestRequest for SetQuotaRequest {
    fn operation(&self) -> Operation {
        Operation::SetQuota
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        if self.namespace_quota.is_none() && self.storage_space_quota.is_none() {
            return Err(ClientError::MissingRequiredField {
                field: "namespacequota or storagespacequota",
            });
        }
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt_u64("namespacequota", self.namespace_quota);
        p.push_opt_u64("storagespacequota", self.storage_space_quota);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetQuotaByStorageTypeRequest {
    pub path: String,
    pub storage_type: String,
    pub storage_space_quota: u64,
}

impl RestRequest for SetQuotaByStorageTypeRequest {
    fn operation(&self) -> Operation {
        Operation::SetQuotaByStorageType
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        require("storagetype", &self.storage_type)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("storagetype", &self.storage_type);
        p.push_u64("storagespacequota", self.storage_space_quota);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetEcPolicyRequest {
    pub path: String,
    pub policy: String,
}

impl RestRequest for SetEcPolicyRequest {
    fn operation(&self) -> Operation {
        Operation::SetEcPolicy
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        require("ecpolicy", &self.policy)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("ecpolicy", &self.policy);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnsetEcPolicyRequest {
    pub path: String,
}

impl RestRequest for UnsetEcPolicyRequest {
    fn operation(&self) -> Operation {
        Operation::UnsetEcPolicy
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        Ok(ParamList::new(self.operation(), ctx))
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppendRequest {
    pub path: String,
    pub buffer_size: Option<u32>,
}

impl RestRequest for AppendRequest {
    fn operation(&self) -> Operation {
        Operation::Append
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt_u64("buffersize", self.buffer_size.map(u64::from));
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConcatRequest {
    /// Target file that absorbs the sources.
    pub path: String,
    /// Source paths, joined comma-separated on the wire.
    pub sources: Vec<String>,
}

impl RestRequest for ConcatRequest {
    fn operation(&self) -> Operation {
        Operation::Concat
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        if self.sources.is_empty() {
            return Err(ClientError::MissingRequiredField { field: "sources" });
        }
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("sources", self.sources.join(","));
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TruncateRequest {
    pub path: String,
    pub new_length: u64,
}

impl RestRequest for TruncateRequest {
    fn operation(&self) -> Operation {
        Operation::Truncate
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_u64("newlength", self.new_length);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteRequest {
    pub path: String,
    pub recursive: Option<bool>,
}

impl RestRequest for DeleteRequest {
    fn operation(&self) -> Operation {
        Operation::Delete
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push_opt_bool("recursive", self.recursive);
        Ok(p)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteSnapshotRequest {
    pub path: String,
    pub snapshot_name: String,
}

impl RestRequest for DeleteSnapshotRequest {
    fn operation(&self) -> Operation {
        Operation::DeleteSnapshot
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self, ctx: &CallContext) -> Result<ParamList> {
        require("path", &self.path)?;
        require("snapshotname", &self.snapshot_name)?;
        let mut p = ParamList::new(self.operation(), ctx);
        p.push("snapshotname", &self.snapshot_name);
        Ok(p)
    }
}
