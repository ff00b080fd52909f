use reqwest::{Client, Response, StatusCode};
use store::repo::{decode_collection, decode_created_id};
use store::{BoardConfig, FeedbackCollection, FeedbackEntry, FeedbackId, FeedbackStore, StoreError};

/// FeedbackStore backed by the hosted database's REST endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct RemoteStore {
    http: Client,
    config: BoardConfig,
}

impl RemoteStore {
    pub fn new(config: BoardConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: BoardConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

/// Map a non-2xx status to an error; 2xx passes through.
pub fn check_status(status: StatusCode) -> Result<(), StoreError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(StoreError::Status(status.as_u16()))
    }
}

fn successful(response: Response) -> Result<Response, StoreError> {
    check_status(response.status())?;
    Ok(response)
}

impl FeedbackStore for RemoteStore {
    async fn create_entry(&self, entry: &FeedbackEntry) -> Result<Option<FeedbackId>, StoreError> {
        let url = self.config.collection_url();
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(entry)
            .send()
            .await
            .map_err(transport)?;
        let response = successful(response).inspect_err(|e| {
            tracing::warn!("Create rejected by {}: {}", url, e);
        })?;

        // The entry exists once the status is 2xx; an unreadable body only loses the id.
        let id = match response.text().await {
            Ok(body) => decode_created_id(&body),
            Err(e) => {
                tracing::warn!("Could not read create response body: {}", e);
                None
            }
        };
        tracing::info!("Created feedback entry {:?}", id.as_ref().map(FeedbackId::as_str));
        Ok(id)
    }

    async fn list_entries(&self) -> Result<FeedbackCollection, StoreError> {
        let url = self.config.collection_url();
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(transport)?;
        let response = successful(response)?;
        let body = response.text().await.map_err(transport)?;

        let collection = decode_collection(&body).inspect_err(|e| {
            tracing::error!("Unreadable listing from {}: {}", url, e);
        })?;
        tracing::debug!("Listed {} feedback entries", collection.len());
        Ok(collection)
    }

    async fn delete_entry(&self, id: &FeedbackId) -> Result<(), StoreError> {
        let url = self.config.entry_url(id);
        tracing::debug!("DELETE {}", url);

        let response = self.http.delete(&url).send().await.map_err(transport)?;
        successful(response).inspect_err(|e| {
            tracing::warn!("Delete of {} failed: {}", id, e);
        })?;
        tracing::info!("Deleted feedback entry {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Read one HTTP request: headers, then `Content-Length` bytes of body.
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serve every connection with the same canned response.
    async fn canned_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                read_request(&mut socket).await;
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn entry() -> FeedbackEntry {
        FeedbackEntry {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            comment: "Great!".to_string(),
            timestamp: "2024-05-01T09:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(StatusCode::OK), Ok(()));
        assert_eq!(check_status(StatusCode::NO_CONTENT), Ok(()));
        assert_eq!(
            check_status(StatusCode::UNAUTHORIZED),
            Err(StoreError::Status(401))
        );
        assert_eq!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(StoreError::Status(500))
        );
    }

    #[test]
    fn test_remote_store_uses_config_endpoints() {
        let store = RemoteStore::new(BoardConfig::default().with_base_url("http://localhost:9000"));
        assert_eq!(
            store.config().collection_url(),
            "http://localhost:9000/feedbacks.json"
        );
    }

    #[tokio::test]
    async fn test_unreachable_store_is_transport_error() {
        // Port 1 on loopback refuses connections.
        let store = RemoteStore::new(BoardConfig::default().with_base_url("http://127.0.0.1:1"));

        assert!(matches!(
            store.list_entries().await,
            Err(StoreError::Transport(_))
        ));
        assert!(matches!(
            store.delete_entry(&FeedbackId::from("id123")).await,
            Err(StoreError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_server_error_on_create_and_delete() {
        let base = canned_server("500 Internal Server Error", "oops").await;
        let store = RemoteStore::new(BoardConfig::default().with_base_url(base));

        assert_eq!(
            store.create_entry(&entry()).await,
            Err(StoreError::Status(500))
        );
        assert_eq!(
            store.delete_entry(&FeedbackId::from("id123")).await,
            Err(StoreError::Status(500))
        );
    }

    #[tokio::test]
    async fn test_html_listing_is_malformed() {
        let base = canned_server("200 OK", "<html>gateway timeout</html>").await;
        let store = RemoteStore::new(BoardConfig::default().with_base_url(base));

        assert!(matches!(
            store.list_entries().await,
            Err(StoreError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_null_listing_is_empty() {
        let base = canned_server("200 OK", "null").await;
        let store = RemoteStore::new(BoardConfig::default().with_base_url(base));

        assert_eq!(store.list_entries().await, Ok(FeedbackCollection::new()));
    }
}
