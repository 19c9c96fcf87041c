//! The client facade: one typed async method per protocol operation.
//!
//! A `WebHdfsClient` is cheap to clone and holds no mutable state; the
//! configuration and transport handle are read-only after construction, so
//! concurrent calls need no synchronization. Each call runs its own failover
//! loop.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures::stream::BoxStream;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use webhdfs_types::envelope::{
    BlockLocationsResponse, BooleanResponse, ContentSummaryResponse, DirectoryListing,
    DirectoryListingResponse, EcPolicyResponse, FileChecksumResponse, FileStatusResponse,
    ListStatusResponse, LongResponse, PathResponse, QuotaUsageResponse, SnapshotDiffResponse,
    SnapshottableDirectoryListResponse, StoragePoliciesResponse, StoragePolicyResponse,
    TokenResponse, XAttrNamesResponse, XAttrsResponse,
};
use webhdfs_types::{
    BlockLocation, ContentSummary, DelegationToken, EcPolicy, FileChecksum, FileStatus,
    QuotaUsage, SnapshotDiffReport, SnapshottableDirectory, StoragePolicy, XAttr, XAttrFlag,
};

use crate::config::ClientConfig;
use crate::decode;
use crate::error::{ClientError, Result};
use crate::failover::{FailoverExecutor, PreSendHook};
use crate::request::*;
use crate::transfer;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};

#[derive(Clone)]
pub struct WebHdfsClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    hook: Option<Arc<PreSendHook>>,
    cancel: Option<CancellationToken>,
}

impl WebHdfsClient {
    /// Builds a client over the production HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
            hook: None,
            cancel: None,
        })
    }

    /// Builds a client over a caller-supplied transport (tests, custom
    /// authentication stacks).
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config,
            transport,
            hook: None,
            cancel: None,
        }
    }

    /// Installs a pre-send hook that may rewrite each outgoing request.
    pub fn with_pre_send_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut HttpRequest) -> std::result::Result<(), String> + Send + Sync + 'static,
    {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Attaches a cancellation token applied uniformly to every attempt.
    /// Cancellation is terminal: it never advances to the next endpoint.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn executor(&self) -> FailoverExecutor<'_> {
        FailoverExecutor {
            config: &self.config,
            transport: self.transport.as_ref(),
            hook: self.hook.as_deref(),
            cancel: self.cancel.as_ref(),
        }
    }

    async fn call_json<T: DeserializeOwned>(&self, request: &dyn RestRequest) -> Result<T> {
        self.executor()
            .execute(request, None, &[], decode::decode_json)
            .await
    }

    async fn call_boolean(&self, request: &dyn RestRequest) -> Result<bool> {
        let response: BooleanResponse = self
            .executor()
            .execute(request, None, &[], decode::decode_json_or_default)
            .await?;
        Ok(response.boolean)
    }

    async fn call_unit(&self, request: &dyn RestRequest) -> Result<()> {
        self.executor()
            .execute(request, None, &[], decode::decode_unit)
            .await
    }

    // -- Reads --------------------------------------------------------------

    /// Opens a file and returns its content as a byte stream. The caller
    /// owns the stream and is responsible for draining it.
    pub async fn open(&self, request: OpenRequest) -> Result<BoxStream<'static, io::Result<Bytes>>> {
        let response = transfer::read(&self.executor(), &request).await?;
        Ok(response.body.into_stream())
    }

    /// Opens a file and drains it into a single buffer.
    pub async fn read_all(&self, path: &str) -> Result<Bytes> {
        let request = OpenRequest {
            path: path.to_string(),
            ..Default::default()
        };
        let response = transfer::read(&self.executor(), &request).await?;
        response.body.collect().await.map_err(|e| ClientError::Decode {
            msg: format!("failed to read file body: {}", e),
            excerpt: String::new(),
        })
    }

    pub async fn get_file_status(&self, path: &str) -> Result<FileStatus> {
        let request = GetFileStatusRequest {
            path: path.to_string(),
        };
        let response: FileStatusResponse = self.call_json(&request).await?;
        Ok(response.file_status)
    }

    /// True if the path exists; a remote not-found is mapped to `false`
    /// rather than an error.
    pub async fn exists(&self, path: &str) -> Result<bool> {
        match self.get_file_status(path).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn list_status(&self, path: &str) -> Result<Vec<FileStatus>> {
        let request = ListStatusRequest {
            path: path.to_string(),
        };
        let response: ListStatusResponse = self.call_json(&request).await?;
        Ok(response.file_statuses.file_status)
    }

    /// One page of a large directory listing.
    pub async fn list_status_batch(
        &self,
        path: &str,
        start_after: Option<&str>,
    ) -> Result<DirectoryListing> {
        let request = ListStatusBatchRequest {
            path: path.to_string(),
            start_after: start_after.map(String::from),
        };
        let response: DirectoryListingResponse = self.call_json(&request).await?;
        Ok(response.directory_listing)
    }

    /// Full directory listing via LISTSTATUS_BATCH paging.
    pub async fn list_status_all(&self, path: &str) -> Result<Vec<FileStatus>> {
        let mut entries = Vec::new();
        let mut start_after: Option<String> = None;
        loop {
            let listing = self.list_status_batch(path, start_after.as_deref()).await?;
            let batch = listing.partial_listing.file_statuses.file_status;
            start_after = batch.last().map(|s| s.path_suffix.clone());
            entries.extend(batch);
            if listing.remaining_entries == 0 || start_after.is_none() {
                break;
            }
        }
        Ok(entries)
    }

    pub async fn get_content_summary(&self, path: &str) -> Result<ContentSummary> {
        let request = GetContentSummaryRequest {
            path: path.to_string(),
        };
        let response: ContentSummaryResponse = self.call_json(&request).await?;
        Ok(response.content_summary)
    }

    pub async fn get_quota_usage(&self, path: &str) -> Result<QuotaUsage> {
        let request = GetQuotaUsageRequest {
            path: path.to_string(),
        };
        let response: QuotaUsageResponse = self.call_json(&request).await?;
        Ok(response.quota_usage)
    }

    /// Redirect-capable like OPEN: the checksum is computed by a datanode.
    pub async fn get_file_checksum(&self, path: &str) -> Result<FileChecksum> {
        let request = GetFileChecksumRequest {
            path: path.to_string(),
        };
        let response = transfer::read(&self.executor(), &request).await?;
        let envelope: FileChecksumResponse = decode::decode_json(response).await?;
        Ok(envelope.file_checksum)
    }

    pub async fn get_home_directory(&self) -> Result<String> {
        let response: PathResponse = self.call_json(&GetHomeDirectoryRequest).await?;
        Ok(response.path)
    }

    pub async fn get_trash_root(&self, path: &str) -> Result<String> {
        let request = GetTrashRootRequest {
            path: path.to_string(),
        };
        let response: PathResponse = self.call_json(&request).await?;
        Ok(response.path)
    }

    pub async fn get_link_target(&self, path: &str) -> Result<String> {
        let request = GetLinkTargetRequest {
            path: path.to_string(),
        };
        let response: PathResponse = self.call_json(&request).await?;
        Ok(response.path)
    }

    /// Probes access rights; a permission failure surfaces as a
    /// `PermissionDenied` remote error.
    pub async fn check_access(&self, path: &str, fs_action: &str) -> Result<()> {
        let request = CheckAccessRequest {
            path: path.to_string(),
            fs_action: fs_action.to_string(),
        };
        self.call_unit(&request).await
    }

    pub async fn get_file_block_locations(
        &self,
        path: &str,
        offset: Option<u64>,
        length: Option<u64>,
    ) -> Result<Vec<BlockLocation>> {
        let request = GetFileBlockLocationsRequest {
            path: path.to_string(),
            offset,
            length,
        };
        let response: BlockLocationsResponse = self.call_json(&request).await?;
        Ok(response.block_locations.block_location)
    }

    // -- Mutations ----------------------------------------------------------

    /// Creates a file with the given content. A trailing slash on the path
    /// is preserved and changes the server-side target.
    pub async fn create(&self, request: CreateRequest, data: Bytes) -> Result<()> {
        transfer::write(&self.executor(), &request, data).await
    }

    pub async fn append(&self, request: AppendRequest, data: Bytes) -> Result<()> {
        transfer::write(&self.executor(), &request, data).await
    }

    pub async fn mkdirs(&self, path: &str, permission: Option<u32>) -> Result<bool> {
        let request = MkdirsRequest {
            path: path.to_string(),
            permission,
        };
        self.call_boolean(&request).await
    }

    pub async fn rename(&self, path: &str, destination: &str) -> Result<bool> {
        let request = RenameRequest {
            path: path.to_string(),
            destination: destination.to_string(),
        };
        self.call_boolean(&request).await
    }

    /// Deletes a path. Deleting a nonexistent path reports `false`, not an
    /// error; that is the protocol's contract.
    pub async fn delete(&self, path: &str, recursive: Option<bool>) -> Result<bool> {
        let request = DeleteRequest {
            path: path.to_string(),
            recursive,
        };
        self.call_boolean(&request).await
    }

    pub async fn truncate(&self, path: &str, new_length: u64) -> Result<bool> {
        let request = TruncateRequest {
            path: path.to_string(),
            new_length,
        };
        self.call_boolean(&request).await
    }

    pub async fn concat(&self, path: &str, sources: Vec<String>) -> Result<()> {
        let request = ConcatRequest {
            path: path.to_string(),
            sources,
        };
        self.call_unit(&request).await
    }

    pub async fn create_symlink(&self, request: CreateSymlinkRequest) -> Result<()> {
        self.call_unit(&request).await
    }

    pub async fn set_replication(&self, path: &str, replication: u16) -> Result<bool> {
        let request = SetReplicationRequest {
            path: path.to_string(),
            replication: Some(replication),
        };
        self.call_boolean(&request).await
    }

    pub async fn set_owner(
        &self,
        path: &str,
        owner: Option<&str>,
        group: Option<&str>,
    ) -> Result<()> {
        let request = SetOwnerRequest {
            path: path.to_string(),
            owner: owner.map(String::from),
            group: group.map(String::from),
        };
        self.call_unit(&request).await
    }

    pub async fn set_permission(&self, path: &str, permission: u32) -> Result<()> {
        let request = SetPermissionRequest {
            path: path.to_string(),
            permission: Some(permission),
        };
        self.call_unit(&request).await
    }

    pub async fn set_times(
        &self,
        path: &str,
        modification_time: Option<i64>,
        access_time: Option<i64>,
    ) -> Result<()> {
        let request = SetTimesRequest {
            path: path.to_string(),
            modification_time,
            access_time,
        };
        self.call_unit(&request).await
    }

    // -- Extended attributes ------------------------------------------------

    pub async fn get_xattrs(&self, path: &str, names: &[&str]) -> Result<Vec<XAttr>> {
        let request = GetXAttrsRequest {
            path: path.to_string(),
            names: names.iter().map(|s| s.to_string()).collect(),
            encoding: None,
        };
        let response: XAttrsResponse = self.call_json(&request).await?;
        Ok(response.xattrs)
    }

    pub async fn list_xattrs(&self, path: &str) -> Result<Vec<String>> {
        let request = ListXAttrsRequest {
            path: path.to_string(),
        };
        let response: XAttrNamesResponse = self.call_json(&request).await?;
        response.names().map_err(|e| ClientError::Decode {
            msg: format!("malformed XAttrNames list: {}", e),
            excerpt: response.xattr_names.clone(),
        })
    }

    pub async fn set_xattr(
        &self,
        path: &str,
        name: &str,
        value: Option<&str>,
        flag: XAttrFlag,
    ) -> Result<()> {
        let request = SetXAttrRequest {
            path: path.to_string(),
            name: name.to_string(),
            value: value.map(String::from),
            flag,
        };
        self.call_unit(&request).await
    }

    pub async fn remove_xattr(&self, path: &str, name: &str) -> Result<()> {
        let request = RemoveXAttrRequest {
            path: path.to_string(),
            name: name.to_string(),
        };
        self.call_unit(&request).await
    }

    // -- Snapshots ----------------------------------------------------------

    pub async fn allow_snapshot(&self, path: &str) -> Result<()> {
        let request = AllowSnapshotRequest {
            path: path.to_string(),
        };
        self.call_unit(&request).await
    }

    pub async fn disallow_snapshot(&self, path: &str) -> Result<()> {
        let request = DisallowSnapshotRequest {
            path: path.to_string(),
        };
        self.call_unit(&request).await
    }

    /// Returns the full path of the created snapshot.
    pub async fn create_snapshot(&self, path: &str, snapshot_name: Option<&str>) -> Result<String> {
        let request = CreateSnapshotRequest {
            path: path.to_string(),
            snapshot_name: snapshot_name.map(String::from),
        };
        let response: PathResponse = self.call_json(&request).await?;
        Ok(response.path)
    }

    pub async fn delete_snapshot(&self, path: &str, snapshot_name: &str) -> Result<()> {
        let request = DeleteSnapshotRequest {
            path: path.to_string(),
            snapshot_name: snapshot_name.to_string(),
        };
        self.call_unit(&request).await
    }

    pub async fn rename_snapshot(
        &self,
        path: &str,
        old_snapshot_name: &str,
        snapshot_name: &str,
    ) -> Result<()> {
        let request = RenameSnapshotRequest {
            path: path.to_string(),
            old_snapshot_name: old_snapshot_name.to_string(),
            snapshot_name: snapshot_name.to_string(),
        };
        self.call_unit(&request).await
    }

    pub async fn get_snapshot_diff(
        &self,
        path: &str,
        old_snapshot_name: &str,
        snapshot_name: &str,
    ) -> Result<SnapshotDiffReport> {
        let request = GetSnapshotDiffRequest {
            path: path.to_string(),
            old_snapshot_name: old_snapshot_name.to_string(),
            snapshot_name: snapshot_name.to_string(),
        };
        let response: SnapshotDiffResponse = self.call_json(&request).await?;
        Ok(response.snapshot_diff_report)
    }

    pub async fn get_snapshottable_directory_list(&self) -> Result<Vec<SnapshottableDirectory>> {
        let response: SnapshottableDirectoryListResponse = self
            .call_json(&GetSnapshottableDirectoryListRequest)
            .await?;
        Ok(response.snapshottable_directory_list)
    }

    // -- Storage and EC policies --------------------------------------------

    pub async fn get_all_storage_policies(&self) -> Result<Vec<StoragePolicy>> {
        let response: StoragePoliciesResponse =
            self.call_json(&GetAllStoragePolicyRequest).await?;
        Ok(response.block_storage_policies.block_storage_policy)
    }

    pub async fn get_storage_policy(&self, path: &str) -> Result<StoragePolicy> {
        let request = GetStoragePolicyRequest {
            path: path.to_string(),
        };
        let response: StoragePolicyResponse = self.call_json(&request).await?;
        Ok(response.block_storage_policy)
    }

    pub async fn set_storage_policy(&self, path: &str, policy: &str) -> Result<()> {
        let request = SetStoragePolicyRequest {
            path: path.to_string(),
            policy: policy.to_string(),
        };
        self.call_unit(&request).await
    }

    pub async fn unset_storage_policy(&self, path: &str) -> Result<()> {
        let request = UnsetStoragePolicyRequest {
            path: path.to_string(),
        };
        self.call_unit(&request).await
    }

    pub async fn get_ec_policy(&self, path: &str) -> Result<EcPolicy> {
        let request = GetEcPolicyRequest {
            path: path.to_string(),
        };
        let response: EcPolicyResponse = self.call_json(&request).await?;
        Ok(response.ec_policy)
    }

    pub async fn set_ec_policy(&self, path: &str, policy: &str) -> Result<()> {
        let request = SetEcPolicyRequest {
            path: path.to_string(),
            policy: policy.to_string(),
        };
        self.call_unit(&request).await
    }

    pub async fn unset_ec_policy(&self, path: &str) -> Result<()> {
        let request = UnsetEcPolicyRequest {
            path: path.to_string(),
        };
        self.call_unit(&request).await
    }

    // -- Quotas -------------------------------------------------------------

    pub async fn set_quota(
        &self,
        path: &str,
        namespace_quota: Option<u64>,
        storage_space_quota: Option<u64>,
    ) -> Result<()> {
        let request = SetQuotaRequest {
            path: path.to_string(),
            namespace_quota,
            storage_space_quota,
        };
        self.call_unit(&request).await
    }

    pub async fn set_quota_by_storage_type(
        &self,
        path: &str,
        storage_type: &str,
        storage_space_quota: u64,
    ) -> Result<()> {
        let request = SetQuotaByStorageTypeRequest {
            path: path.to_string(),
            storage_type: storage_type.to_string(),
            storage_space_quota,
        };
        self.call_unit(&request).await
    }

    // -- Delegation tokens --------------------------------------------------

    pub async fn get_delegation_token(&self, renewer: Option<&str>) -> Result<DelegationToken> {
        let request = GetDelegationTokenRequest {
            renewer: renewer.map(String::from),
            service: None,
            kind: None,
        };
        let response: TokenResponse = self.call_json(&request).await?;
        Ok(response.token)
    }

    /// Returns the new expiration time in milliseconds since the epoch.
    pub async fn renew_delegation_token(&self, token: &str) -> Result<i64> {
        let request = RenewDelegationTokenRequest {
            token: token.to_string(),
        };
        let response: LongResponse = self.call_json(&request).await?;
        Ok(response.value)
    }

    pub async fn cancel_delegation_token(&self, token: &str) -> Result<()> {
        let request = CancelDelegationTokenRequest {
            token: token.to_string(),
        };
        self.call_unit(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpResponse, ResponseBody};
    use async_trait::async_trait;
    use http::StatusCode;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedTransport {
        responses: Mutex<VecDeque<HttpResponse>>,
        urls: Mutex<Vec<String>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<HttpResponse>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                urls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for ScriptedTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.urls.lock().unwrap().push(request.url.clone());
            Ok(self.responses.lock().unwrap().pop_front().expect("script"))
        }
    }

    fn json(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status: StatusCode::from_u16(status).unwrap(),
            content_length: Some(body.len() as u64),
            content_type: Some("application/json".to_string()),
            location: None,
            body: ResponseBody::Buffered(Bytes::from(body.to_string())),
        }
    }

    fn client(responses: Vec<HttpResponse>) -> (WebHdfsClient, Arc<ScriptedTransport>) {
        let transport = Arc::new(ScriptedTransport::new(responses));
        let config = ClientConfig::new(vec!["nn1:9870".to_string()]);
        (
            WebHdfsClient::with_transport(config, transport.clone()),
            transport,
        )
    }

    #[tokio::test]
    async fn test_get_file_status() {
        let (client, transport) = client(vec![json(
            200,
            r#"{"FileStatus": {"pathSuffix": "", "type": "FILE", "permission": "644", "length": 10}}"#,
        )]);
        let status = client.get_file_status("/a/b").await.unwrap();
        assert_eq!(status.length, 10);
        assert_eq!(status.display_name("/a/b"), "b");

        let urls = transport.urls.lock().unwrap();
        assert_eq!(
            urls[0],
            "https://nn1:9870/webhdfs/v1/a/b?op=GETFILESTATUS"
        );
    }

    #[tokio::test]
    async fn test_exists_maps_not_found_to_false() {
        let not_found = r#"{"RemoteException":{"exception":"FileNotFoundException","javaClassName":"java.io.FileNotFoundException","message":"x"}}"#;
        let (client, _) = client(vec![json(404, not_found)]);
        assert!(!client.exists("/gone").await.unwrap());
    }

    #[tokio::test]
    async fn test_mkdirs_returns_boolean() {
        let (client, transport) = client(vec![json(200, r#"{"boolean": true}"#)]);
        assert!(client.mkdirs("/d", Some(0o755)).await.unwrap());
        let urls = transport.urls.lock().unwrap();
        assert!(urls[0].contains("op=MKDIRS"));
        assert!(urls[0].contains("permission=0755"));
    }

    #[tokio::test]
    async fn test_delete_of_missing_path_reports_false() {
        let (client, _) = client(vec![json(200, r#"{"boolean": false}"#)]);
        assert!(!client.delete("/missing", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_status() {
        let body = r#"{"FileStatuses": {"FileStatus": [
            {"pathSuffix": "a", "type": "FILE", "permission": "644"},
            {"pathSuffix": "b", "type": "DIRECTORY", "permission": "755"}
        ]}}"#;
        let (client, _) = client(vec![json(200, body)]);
        let entries = client.list_status("/dir").await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].path_suffix, "b");
    }

    #[tokio::test]
    async fn test_list_status_all_pages_until_exhausted() {
        let page1 = r#"{"DirectoryListing": {
            "partialListing": {"FileStatuses": {"FileStatus": [
                {"pathSuffix": "a", "type": "FILE", "permission": "644"}
            ]}},
            "remainingEntries": 1
        }}"#;
        let page2 = r#"{"DirectoryListing": {
            "partialListing": {"FileStatuses": {"FileStatus": [
                {"pathSuffix": "b", "type": "FILE", "permission": "644"}
            ]}},
            "remainingEntries": 0
        }}"#;
        let (client, transport) = client(vec![json(200, page1), json(200, page2)]);
        let entries = client.list_status_all("/big").await.unwrap();
        assert_eq!(entries.len(), 2);

        let urls = transport.urls.lock().unwrap();
        assert_eq!(urls.len(), 2);
        assert!(!urls[0].contains("startAfter"));
        assert!(urls[1].contains("startAfter=a"));
    }

    #[tokio::test]
    async fn test_home_directory() {
        let (client, transport) = client(vec![json(200, r#"{"Path": "/user/alice"}"#)]);
        assert_eq!(client.get_home_directory().await.unwrap(), "/user/alice");
        let urls = transport.urls.lock().unwrap();
        assert_eq!(
            urls[0],
            "https://nn1:9870/webhdfs/v1?op=GETHOMEDIRECTORY"
        );
    }

    #[tokio::test]
    async fn test_list_xattrs_decodes_inner_layer() {
        let (client, _) = client(vec![json(
            200,
            r#"{"XAttrNames": "[\"user.a1\",\"user.a2\"]"}"#,
        )]);
        let names = client.list_xattrs("/f").await.unwrap();
        assert_eq!(names, vec!["user.a1", "user.a2"]);
    }

    #[tokio::test]
    async fn test_renew_delegation_token() {
        let (client, _) = client(vec![json(200, r#"{"long": 1320962673997}"#)]);
        let expiry = client.renew_delegation_token("tok").await.unwrap();
        assert_eq!(expiry, 1320962673997);
    }

    #[tokio::test]
    async fn test_csrf_header_attached() {
        struct HeaderCheck;

        #[async_trait]
        impl HttpTransport for HeaderCheck {
            async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
                assert!(request
                    .headers
                    .iter()
                    .any(|(k, v)| k == "X-XSRF-HEADER" && v == "\"\""));
                Ok(HttpResponse {
                    status: StatusCode::OK,
                    content_length: Some(16),
                    content_type: Some("application/json".to_string()),
                    location: None,
                    body: ResponseBody::Buffered(Bytes::from_static(b"{\"boolean\":true}")),
                })
            }
        }

        let config = ClientConfig::new(vec!["nn1:9870".to_string()])
            .with_csrf(crate::config::CsrfConfig::default());
        let client = WebHdfsClient::with_transport(config, Arc::new(HeaderCheck));
        assert!(client.mkdirs("/d", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_user_name_in_query() {
        let transport = Arc::new(ScriptedTransport::new(vec![json(
            200,
            r#"{"boolean": true}"#,
        )]));
        let config = ClientConfig::new(vec!["nn1:9870".to_string()]).with_user("alice");
        let client = WebHdfsClient::with_transport(config, transport.clone());
        client.delete("/f", Some(true)).await.unwrap();
        let urls = transport.urls.lock().unwrap();
        assert_eq!(
            urls[0],
            "https://nn1:9870/webhdfs/v1/f?op=DELETE&user.name=alice&recursive=true"
        );
    }
}
