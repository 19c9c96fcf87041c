//! Test harness: an in-memory mock server behind the transport seam.
//!
//! `MockFs` speaks just enough of the REST protocol to exercise full client
//! scenarios without a network: a flat path table, JSON envelopes, remote
//! exceptions and two-hop redirects for data operations. `FlakyTransport`
//! layers transport failures for selected hosts on top of any inner
//! transport.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;

use webhdfs_client::{
    ClientConfig, ClientError, HttpRequest, HttpResponse, HttpTransport, ResponseBody, Result,
    WebHdfsClient,
};

pub const NAMENODE: &str = "nn1:9870";
pub const DATANODE: &str = "dn1:9864";

#[derive(Debug, Clone)]
enum Entry {
    File(Vec<u8>),
    Dir,
}

/// In-memory filesystem reachable through [`HttpTransport`].
pub struct MockFs {
    entries: Mutex<BTreeMap<String, Entry>>,
    /// Host that serves data-operation redirects.
    datanode: String,
    /// Every URL received, in order.
    pub log: Mutex<Vec<String>>,
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFs {
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("/".to_string(), Entry::Dir);
        Self {
            entries: Mutex::new(entries),
            datanode: DATANODE.to_string(),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn with_file(self, path: &str, data: &[u8]) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(path.to_string(), Entry::File(data.to_vec()));
        self
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(path.to_string(), Entry::Dir);
        self
    }

    pub fn file_contents(&self, path: &str) -> Option<Vec<u8>> {
        match self.entries.lock().unwrap().get(path) {
            Some(Entry::File(data)) => Some(data.clone()),
            _ => None,
        }
    }

    pub fn requests_seen(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn dispatch(&self, request: &HttpRequest) -> HttpResponse {
        let (host, path, params) = match parse_url(&request.url) {
            Some(parts) => parts,
            None => return text_response(StatusCode::BAD_REQUEST, "unparseable url"),
        };
        let op = params.get("op").cloned().unwrap_or_default();
        let at_datanode = host == self.datanode;
        // HttpFs-style single-hop writes carry the payload directly.
        let inline_data = params.get("data").map(|v| v == "true").unwrap_or(false);

        match op.as_str() {
            "GETFILESTATUS" => self.get_file_status(&path),
            "LISTSTATUS" => self.list_status(&path),
            "GETHOMEDIRECTORY" => {
                let user = params.get("user.name").cloned().unwrap_or_else(|| "hdfs".to_string());
                json_response(StatusCode::OK, format!("{{\"Path\": \"/user/{}\"}}", user))
            }
            "MKDIRS" => {
                self.entries
                    .lock()
                    .unwrap()
                    .insert(path.clone(), Entry::Dir);
                boolean_response(true)
            }
            "DELETE" => self.delete(&path, &params),
            "RENAME" => self.rename(&path, &params),
            "CREATE" => {
                if at_datanode || inline_data {
                    self.write_file(&path, &params, request.body.as_deref().unwrap_or_default())
                } else {
                    self.redirect(&request.url)
                }
            }
            "APPEND" => {
                if at_datanode || inline_data {
                    self.append_file(&path, request.body.as_deref().unwrap_or_default())
                } else {
                    self.redirect(&request.url)
                }
            }
            "OPEN" => {
                if at_datanode {
                    self.open(&path, &params)
                } else {
                    self.redirect(&request.url)
                }
            }
            other => text_response(
                StatusCode::BAD_REQUEST,
                &format!("unsupported op {}", other),
            ),
        }
    }

    fn redirect(&self, original_url: &str) -> HttpResponse {
        // Same path and query, datanode host.
        let tail = original_url
            .split_once("://")
            .and_then(|(_, rest)| rest.split_once('/'))
            .map(|(_, tail)| tail.to_string())
            .unwrap_or_default();
        let location = format!("http://{}/{}", self.datanode, tail);
        HttpResponse {
            status: StatusCode::TEMPORARY_REDIRECT,
            content_length: Some(0),
            content_type: None,
            location: Some(location),
            body: ResponseBody::Empty,
        }
    }

    fn get_file_status(&self, path: &str) -> HttpResponse {
        match self.entries.lock().unwrap().get(path) {
            Some(entry) => json_response(
                StatusCode::OK,
                format!("{{\"FileStatus\": {}}}", status_json(path, entry, false)),
            ),
            None => not_found(path),
        }
    }

    fn list_status(&self, path: &str) -> HttpResponse {
        let entries = self.entries.lock().unwrap();
        if !entries.contains_key(path) {
            return not_found(path);
        }
        let prefix = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{}/", path)
        };
        let children: Vec<String> = entries
            .iter()
            .filter(|(p, _)| {
                p.starts_with(&prefix) && !p[prefix.len()..].is_empty() && !p[prefix.len()..].contains('/')
            })
            .map(|(p, entry)| status_json(p, entry, true))
            .collect();
        json_response(
            StatusCode::OK,
            format!(
                "{{\"FileStatuses\": {{\"FileStatus\": [{}]}}}}",
                children.join(",")
            ),
        )
    }

    fn delete(&self, path: &str, params: &HashMap<String, String>) -> HttpResponse {
        let recursive = params.get("recursive").map(|v| v == "true").unwrap_or(false);
        let mut entries = self.entries.lock().unwrap();
        match entries.get(path) {
            None => boolean_response(false),
            Some(Entry::Dir) => {
                let prefix = format!("{}/", path);
                let has_children = entries.keys().any(|p| p.starts_with(&prefix));
                if has_children && !recursive {
                    return remote_exception(
                        StatusCode::FORBIDDEN,
                        "PathIsNotEmptyDirectoryException",
                        "org.apache.hadoop.fs.PathIsNotEmptyDirectoryException",
                        &format!("`{}' is non empty", path),
                    );
                }
                entries.retain(|p, _| p != path && !p.starts_with(&prefix));
                boolean_response(true)
            }
            Some(Entry::File(_)) => {
                entries.remove(path);
                boolean_response(true)
            }
        }
    }

    fn rename(&self, path: &str, params: &HashMap<String, String>) -> HttpResponse {
        let destination = match params.get("destination") {
            Some(d) => d.clone(),
            None => return text_response(StatusCode::BAD_REQUEST, "missing destination"),
        };
        let mut entries = self.entries.lock().unwrap();
        match entries.remove(path) {
            Some(entry) => {
                entries.insert(destination, entry);
                boolean_response(true)
            }
            None => boolean_response(false),
        }
    }

    fn write_file(
        &self,
        path: &str,
        params: &HashMap<String, String>,
        body: &[u8],
    ) -> HttpResponse {
        let overwrite = params.get("overwrite").map(|v| v == "true").unwrap_or(false);
        let mut entries = self.entries.lock().unwrap();
        if entries.contains_key(path) && !overwrite {
            return remote_exception(
                StatusCode::FORBIDDEN,
                "FileAlreadyExistsException",
                "org.apache.hadoop.fs.FileAlreadyExistsException",
                &format!("{} already exists", path),
            );
        }
        entries.insert(path.to_string(), Entry::File(body.to_vec()));
        HttpResponse {
            status: StatusCode::CREATED,
            content_length: Some(0),
            content_type: None,
            location: None,
            body: ResponseBody::Empty,
        }
    }

    fn append_file(&self, path: &str, body: &[u8]) -> HttpResponse {
        let mut entries = self.entries.lock().unwrap();
        match entries.get_mut(path) {
            Some(Entry::File(data)) => {
                data.extend_from_slice(body);
                HttpResponse {
                    status: StatusCode::OK,
                    content_length: Some(0),
                    content_type: None,
                    location: None,
                    body: ResponseBody::Empty,
                }
            }
            _ => not_found(path),
        }
    }

    fn open(&self, path: &str, params: &HashMap<String, String>) -> HttpResponse {
        let entries = self.entries.lock().unwrap();
        let data = match entries.get(path) {
            Some(Entry::File(data)) => data.clone(),
            _ => return not_found(path),
        };
        let offset: usize = params
            .get("offset")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let start = offset.min(data.len());
        let end = params
            .get("length")
            .and_then(|v| v.parse::<usize>().ok())
            .map(|len| (start + len).min(data.len()))
            .unwrap_or(data.len());
        let slice = data[start..end].to_vec();
        HttpResponse {
            status: StatusCode::OK,
            content_length: Some(slice.len() as u64),
            content_type: Some("application/octet-stream".to_string()),
            location: None,
            body: ResponseBody::Buffered(Bytes::from(slice)),
        }
    }
}

#[async_trait]
impl HttpTransport for MockFs {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.log.lock().unwrap().push(request.url.clone());
        Ok(self.dispatch(&request))
    }
}

/// Fails every request aimed at one of the dead hosts; everything else is
/// forwarded to the inner transport.
pub struct FlakyTransport {
    inner: Arc<dyn HttpTransport>,
    dead_hosts: Vec<String>,
}

impl FlakyTransport {
    pub fn new(inner: Arc<dyn HttpTransport>, dead_hosts: Vec<String>) -> Self {
        Self { inner, dead_hosts }
    }
}

#[async_trait]
impl HttpTransport for FlakyTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        for host in &self.dead_hosts {
            if request.url.contains(host.as_str()) {
                return Err(ClientError::Transport {
                    url: request.url.clone(),
                    msg: "connection refused".to_string(),
                });
            }
        }
        self.inner.execute(request).await
    }
}

/// Client over a mock transport with a single namenode address.
pub fn client(transport: Arc<dyn HttpTransport>) -> WebHdfsClient {
    WebHdfsClient::with_transport(ClientConfig::new(vec![NAMENODE.to_string()]), transport)
}

/// Client with an explicit address list, for failover scenarios.
pub fn client_with_addresses(
    transport: Arc<dyn HttpTransport>,
    addresses: Vec<String>,
) -> WebHdfsClient {
    WebHdfsClient::with_transport(ClientConfig::new(addresses), transport)
}

fn parse_url(url: &str) -> Option<(String, String, HashMap<String, String>)> {
    let rest = url.split_once("://")?.1;
    let (host, tail) = rest.split_once('/')?;
    let tail = tail.strip_prefix("webhdfs/v1")?;
    let (raw_path, raw_query) = match tail.split_once('?') {
        Some((p, q)) => (p, q),
        None => (tail, ""),
    };
    let path = urlencoding::decode(raw_path).ok()?.into_owned();
    let path = if path.is_empty() { "/".to_string() } else { path };
    let mut params = HashMap::new();
    for pair in raw_query.split('&').filter(|p| !p.is_empty()) {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(
            urlencoding::decode(k).ok()?.into_owned(),
            urlencoding::decode(v).ok()?.into_owned(),
        );
    }
    Some((host.to_string(), path, params))
}

fn status_json(path: &str, entry: &Entry, listed: bool) -> String {
    let suffix = if listed {
        path.rsplit('/').next().unwrap_or_default()
    } else {
        ""
    };
    match entry {
        Entry::File(data) => format!(
            "{{\"pathSuffix\": \"{}\", \"type\": \"FILE\", \"permission\": \"644\", \"length\": {}, \"owner\": \"hdfs\", \"group\": \"supergroup\"}}",
            suffix,
            data.len()
        ),
        Entry::Dir => format!(
            "{{\"pathSuffix\": \"{}\", \"type\": \"DIRECTORY\", \"permission\": \"755\", \"owner\": \"hdfs\", \"group\": \"supergroup\"}}",
            suffix
        ),
    }
}

fn json_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse {
        status,
        content_length: Some(body.len() as u64),
        content_type: Some("application/json".to_string()),
        location: None,
        body: ResponseBody::Buffered(Bytes::from(body)),
    }
}

fn boolean_response(value: bool) -> HttpResponse {
    json_response(StatusCode::OK, format!("{{\"boolean\": {}}}", value))
}

fn remote_exception(
    status: StatusCode,
    exception: &str,
    java_class: &str,
    message: &str,
) -> HttpResponse {
    json_response(
        status,
        format!(
            "{{\"RemoteException\": {{\"exception\": \"{}\", \"javaClassName\": \"{}\", \"message\": \"{}\"}}}}",
            exception, java_class, message
        ),
    )
}

fn not_found(path: &str) -> HttpResponse {
    remote_exception(
        StatusCode::NOT_FOUND,
        "FileNotFoundException",
        "java.io.FileNotFoundException",
        &format!("File does not exist: {}", path),
    )
}

fn text_response(status: StatusCode, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        content_length: Some(body.len() as u64),
        content_type: Some("text/plain".to_string()),
        location: None,
        body: ResponseBody::Buffered(Bytes::from(body.to_string())),
    }
}
