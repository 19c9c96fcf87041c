#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytes::Bytes;
    use webhdfs_client::request::CreateRequest;
    use webhdfs_client::{ClientConfig, ProtocolVariant, WebHdfsClient};

    use crate::harness::{client, MockFs, DATANODE, NAMENODE};

    #[tokio::test]
    async fn test_create_takes_two_hops() {
        let fs = Arc::new(MockFs::new());
        let client = client(fs.clone());
        let request = CreateRequest {
            path: "/f".to_string(),
            overwrite: Some(true),
            ..Default::default()
        };
        client.create(request, Bytes::from_static(b"x")).await.unwrap();

        let urls = fs.requests_seen();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].contains(NAMENODE));
        assert!(urls[1].contains(DATANODE));
        assert_eq!(fs.file_contents("/f").unwrap(), b"x");
    }

    #[tokio::test]
    async fn test_open_takes_two_hops() {
        let fs = Arc::new(MockFs::new().with_file("/f", b"abc"));
        let client = client(fs.clone());
        assert_eq!(client.read_all("/f").await.unwrap().as_ref(), b"abc");

        let urls = fs.requests_seen();
        assert_eq!(urls.len(), 2);
        assert!(urls[1].contains(DATANODE));
    }

    #[tokio::test]
    async fn test_httpfs_variant_writes_in_one_hop() {
        let fs = Arc::new(MockFs::new());
        let config = ClientConfig::new(vec![NAMENODE.to_string()])
            .with_variant(ProtocolVariant::HttpFs);
        let client = WebHdfsClient::with_transport(config, fs.clone());

        let request = CreateRequest {
            path: "/f".to_string(),
            overwrite: Some(true),
            ..Default::default()
        };
        client.create(request, Bytes::from_static(b"inline")).await.unwrap();

        let urls = fs.requests_seen();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains("data=true"));
        assert_eq!(fs.file_contents("/f").unwrap(), b"inline");
    }

    #[tokio::test]
    async fn test_metadata_ops_never_leave_the_namenode() {
        let fs = Arc::new(MockFs::new().with_file("/f", b"abc"));
        let client = client(fs.clone());
        client.get_file_status("/f").await.unwrap();
        client.mkdirs("/d", None).await.unwrap();

        for url in fs.requests_seen() {
            assert!(url.contains(NAMENODE), "unexpected hop in {}", url);
        }
    }
}
