#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytes::Bytes;
    use webhdfs_client::request::{AppendRequest, CreateRequest, OpenRequest};
    use webhdfs_types::FileType;

    use crate::harness::{client, MockFs};
    use crate::init_tracing;

    #[tokio::test]
    async fn test_create_then_read_back() {
        init_tracing();
        let fs = Arc::new(MockFs::new());
        let client = client(fs.clone());

        let request = CreateRequest {
            path: "/data/report.csv".to_string(),
            overwrite: Some(true),
            ..Default::default()
        };
        client
            .create(request, Bytes::from_static(b"a,b,c\n1,2,3\n"))
            .await
            .unwrap();

        let contents = client.read_all("/data/report.csv").await.unwrap();
        assert_eq!(contents.as_ref(), b"a,b,c\n1,2,3\n");
    }

    #[tokio::test]
    async fn test_exists() {
        let fs = Arc::new(MockFs::new().with_file("/present", b"x"));
        let client = client(fs);
        assert!(client.exists("/present").await.unwrap());
        assert!(!client.exists("/absent").await.unwrap());
    }

    #[tokio::test]
    async fn test_open_missing_file_is_not_found() {
        let fs = Arc::new(MockFs::new());
        let client = client(fs);
        let err = client.read_all("/no/such/file").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_mkdirs_then_list() {
        let fs = Arc::new(MockFs::new());
        let client = client(fs);

        assert!(client.mkdirs("/work", Some(0o755)).await.unwrap());
        let create = CreateRequest {
            path: "/work/one".to_string(),
            overwrite: Some(true),
            ..Default::default()
        };
        client.create(create, Bytes::from_static(b"1")).await.unwrap();

        let entries = client.list_status("/work").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path_suffix, "one");
        assert_eq!(entries[0].file_type, FileType::File);
        assert_eq!(entries[0].permission, 0o644);
    }

    #[tokio::test]
    async fn test_list_missing_directory_is_not_found() {
        let fs = Arc::new(MockFs::new());
        let client = client(fs);
        let err = client.list_status("/nowhere").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_path_reports_false() {
        let fs = Arc::new(MockFs::new());
        let client = client(fs);
        assert!(!client.delete("/ghost", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_nonempty_directory_requires_recursive() {
        let fs = Arc::new(
            MockFs::new()
                .with_dir("/full")
                .with_file("/full/child", b"x"),
        );
        let client = client(fs);

        let err = client.delete("/full", None).await.unwrap_err();
        assert!(err.is_directory_not_empty());
        // Distinct kind from a create-collision error.
        assert!(!err.is_already_exists());

        assert!(client.delete("/full", Some(true)).await.unwrap());
        assert!(!client.exists("/full/child").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_without_overwrite_collides() {
        let fs = Arc::new(MockFs::new().with_file("/taken", b"old"));
        let client = client(fs);
        let request = CreateRequest {
            path: "/taken".to_string(),
            ..Default::default()
        };
        let err = client
            .create(request, Bytes::from_static(b"new"))
            .await
            .unwrap_err();
        assert!(err.is_already_exists());
        assert!(!err.is_directory_not_empty());
    }

    #[tokio::test]
    async fn test_rename() {
        let fs = Arc::new(MockFs::new().with_file("/old-name", b"payload"));
        let client = client(fs);
        assert!(client.rename("/old-name", "/new-name").await.unwrap());
        assert!(!client.exists("/old-name").await.unwrap());
        assert_eq!(client.read_all("/new-name").await.unwrap().as_ref(), b"payload");
    }

    #[tokio::test]
    async fn test_rename_missing_source_reports_false() {
        let fs = Arc::new(MockFs::new());
        let client = client(fs);
        assert!(!client.rename("/ghost", "/anywhere").await.unwrap());
    }

    #[tokio::test]
    async fn test_append_extends_file() {
        let fs = Arc::new(MockFs::new().with_file("/log", b"line1\n"));
        let client = client(fs);
        let request = AppendRequest {
            path: "/log".to_string(),
            buffer_size: None,
        };
        client
            .append(request, Bytes::from_static(b"line2\n"))
            .await
            .unwrap();
        assert_eq!(client.read_all("/log").await.unwrap().as_ref(), b"line1\nline2\n");
    }

    #[tokio::test]
    async fn test_open_honors_offset_and_length() {
        let fs = Arc::new(MockFs::new().with_file("/f", b"0123456789"));
        let client = client(fs);
        let request = OpenRequest {
            path: "/f".to_string(),
            offset: Some(2),
            length: Some(4),
            buffer_size: None,
        };
        let mut stream = client.open(request).await.unwrap();
        use futures::StreamExt;
        let chunk = stream.next().await.unwrap().unwrap();
        assert_eq!(chunk.as_ref(), b"2345");
    }

    #[tokio::test]
    async fn test_home_directory_reflects_user() {
        let fs = Arc::new(MockFs::new());
        let config = webhdfs_client::ClientConfig::new(vec![crate::NAMENODE.to_string()])
            .with_user("alice");
        let client = webhdfs_client::WebHdfsClient::with_transport(config, fs);
        assert_eq!(client.get_home_directory().await.unwrap(), "/user/alice");
    }
}
