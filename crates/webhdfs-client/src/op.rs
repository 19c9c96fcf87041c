//! The closed set of protocol operations.
//!
//! Every call carries exactly one operation as the mandatory `op` query
//! parameter. Modeling the set as an enum (rather than string constants) lets
//! match exhaustiveness catch a missing per-operation rule at compile time.

use http::Method;

use crate::config::ProtocolVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Reads.
    Open,
    GetFileStatus,
    ListStatus,
    ListStatusBatch,
    GetContentSummary,
    GetQuotaUsage,
    GetFileChecksum,
    GetHomeDirectory,
    GetTrashRoot,
    GetDelegationToken,
    GetXAttrs,
    ListXAttrs,
    CheckAccess,
    GetAllStoragePolicy,
    GetStoragePolicy,
    GetSnapshotDiff,
    GetSnapshottableDirectoryList,
    GetFileBlockLocations,
    GetEcPolicy,
    GetLinkTarget,
    // Mutations.
    Create,
    Mkdirs,
    CreateSymlink,
    Rename,
    SetReplication,
    SetOwner,
    SetPermission,
    SetTimes,
    RenewDelegationToken,
    CancelDelegationToken,
    AllowSnapshot,
    DisallowSnapshot,
    CreateSnapshot,
    RenameSnapshot,
    SetXAttr,
    RemoveXAttr,
    SetStoragePolicy,
    UnsetStoragePolicy,
    SetQuota,
    SetQuotaByStorageType,
    SetEcPolicy,
    UnsetEcPolicy,
    Append,
    Concat,
    Truncate,
    Delete,
    DeleteSnapshot,
}

impl Operation {
    /// The `op=` query parameter value.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Operation::Open => "OPEN",
            Operation::GetFileStatus => "GETFILESTATUS",
            Operation::ListStatus => "LISTSTATUS",
            Operation::ListStatusBatch => "LISTSTATUS_BATCH",
            Operation::GetContentSummary => "GETCONTENTSUMMARY",
            Operation::GetQuotaUsage => "GETQUOTAUSAGE",
            Operation::GetFileChecksum => "GETFILECHECKSUM",
            Operation::GetHomeDirectory => "GETHOMEDIRECTORY",
            Operation::GetTrashRoot => "GETTRASHROOT",
            Operation::GetDelegationToken => "GETDELEGATIONTOKEN",
            Operation::GetXAttrs => "GETXATTRS",
            Operation::ListXAttrs => "LISTXATTRS",
            Operation::CheckAccess => "CHECKACCESS",
            Operation::GetAllStoragePolicy => "GETALLSTORAGEPOLICY",
            Operation::GetStoragePolicy => "GETSTORAGEPOLICY",
            Operation::GetSnapshotDiff => "GETSNAPSHOTDIFF",
            Operation::GetSnapshottableDirectoryList => "GETSNAPSHOTTABLEDIRECTORYLIST",
            Operation::GetFileBlockLocations => "GETFILEBLOCKLOCATIONS",
            Operation::GetEcPolicy => "GETECPOLICY",
            Operation::GetLinkTarget => "GETLINKTARGET",
            Operation::Create => "CREATE",
            Operation::Mkdirs => "MKDIRS",
            Operation::CreateSymlink => "CREATESYMLINK",
            Operation::Rename => "RENAME",
            Operation::SetReplication => "SETREPLICATION",
            Operation::SetOwner => "SETOWNER",
            Operation::SetPermission => "SETPERMISSION",
            Operation::SetTimes => "SETTIMES",
            Operation::RenewDelegationToken => "RENEWDELEGATIONTOKEN",
            Operation::CancelDelegationToken => "CANCELDELEGATIONTOKEN",
            Operation::AllowSnapshot => "ALLOWSNAPSHOT",
            Operation::DisallowSnapshot => "DISALLOWSNAPSHOT",
            Operation::CreateSnapshot => "CREATESNAPSHOT",
            Operation::RenameSnapshot => "RENAMESNAPSHOT",
            Operation::SetXAttr => "SETXATTR",
            Operation::RemoveXAttr => "REMOVEXATTR",
            Operation::SetStoragePolicy => "SETSTORAGEPOLICY",
            Operation::UnsetStoragePolicy => "UNSETSTORAGEPOLICY",
            Operation::SetQuota => "SETQUOTA",
            Operation::SetQuotaByStorageType => "SETQUOTABYSTORAGETYPE",
            Operation::SetEcPolicy => "SETECPOLICY",
            Operation::UnsetEcPolicy => "UNSETECPOLICY",
            Operation::Append => "APPEND",
            Operation::Concat => "CONCAT",
            Operation::Truncate => "TRUNCATE",
            Operation::Delete => "DELETE",
            Operation::DeleteSnapshot => "DELETESNAPSHOT",
        }
    }

    /// HTTP method for this operation under the given protocol variant.
    ///
    /// The two variants disagree only on TRUNCATE: the namenode-redirect
    /// protocol posts it alongside APPEND/CONCAT, the single-hop service
    /// treats it as an idempotent PUT.
    pub fn method(&self, variant: ProtocolVariant) -> Method {
        match self {
            Operation::Open
            | Operation::GetFileStatus
            | Operation::ListStatus
            | Operation::ListStatusBatch
            | Operation::GetContentSummary
            | Operation::GetQuotaUsage
            | Operation::GetFileChecksum
            | Operation::GetHomeDirectory
            | Operation::GetTrashRoot
            | Operation::GetDelegationToken
            | Operation::GetXAttrs
            | Operation::ListXAttrs
            | Operation::CheckAccess
            | Operation::GetAllStoragePolicy
            | Operation::GetStoragePolicy
            | Operation::GetSnapshotDiff
            | Operation::GetSnapshottableDirectoryList
            | Operation::GetFileBlockLocations
            | Operation::GetEcPolicy
            | Operation::GetLinkTarget => Method::GET,

            Operation::Create
            | Operation::Mkdirs
            | Operation::CreateSymlink
            | Operation::Rename
            | Operation::SetReplication
            | Operation::SetOwner
            | Operation::SetPermission
            | Operation::SetTimes
            | Operation::RenewDelegationToken
            | Operation::CancelDelegationToken
            | Operation::AllowSnapshot
            | Operation::DisallowSnapshot
            | Operation::CreateSnapshot
            | Operation::RenameSnapshot
            | Operation::SetXAttr
            | Operation::RemoveXAttr
            | Operation::SetStoragePolicy
            | Operation::UnsetStoragePolicy
            | Operation::SetQuota
            | Operation::SetQuotaByStorageType
            | Operation::SetEcPolicy
            | Operation::UnsetEcPolicy => Method::PUT,

            Operation::Append | Operation::Concat => Method::POST,

            Operation::Truncate => match variant {
                ProtocolVariant::WebHdfs => Method::POST,
                ProtocolVariant::HttpFs => Method::PUT,
            },

            Operation::Delete | Operation::DeleteSnapshot => Method::DELETE,
        }
    }

    /// Whether the canonical response is a redirect to a second server for
    /// the actual data transfer.
    pub fn redirect_capable(&self) -> bool {
        matches!(
            self,
            Operation::Open | Operation::Create | Operation::Append | Operation::GetFileChecksum
        )
    }

    /// Whether this operation carries a request body on the data hop.
    pub fn has_upload_body(&self) -> bool {
        matches!(self, Operation::Create | Operation::Append)
    }
}
