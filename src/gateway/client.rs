//! REST client for the ZONALIBROS backend
//!
//! JSON over HTTP via reqwest. Every non-2xx answer becomes
//! [`GatewayError::Status`] carrying the response body text.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{GatewayError, RemoteGateway};
use crate::config::ClientConfig;
use crate::state::{Book, Credentials, Session, UserRecord};

/// Gateway talking to the real backend
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: Client,
    base_url: String,
}

impl HttpGateway {
    /// Build a gateway from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(http, config.base_url()))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .ok()
            .filter(|text| !text.trim().is_empty());
        tracing::debug!("Backend answered {status}");
        Err(GatewayError::Status {
            code: status.as_u16(),
            body,
        })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        decode_body(&bytes)
    }
}

fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GatewayError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(GatewayError::EmptyBody);
    }
    Ok(serde_json::from_slice(bytes)?)
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn login(&self, credentials: &Credentials) -> Result<Session, GatewayError> {
        let request = self.http.post(self.url("usuarios/login")).json(credentials);
        self.send_json(request).await
    }

    async fn register(&self, user: &UserRecord) -> Result<UserRecord, GatewayError> {
        let request = self.http.post(self.url("usuarios")).json(user);
        self.send_json(request).await
    }

    async fn list_books(&self) -> Result<Vec<Book>, GatewayError> {
        let request = self.http.get(self.url("libros"));
        match self.send_json(request).await {
            // A 2xx without body means an empty catalog
            Err(GatewayError::EmptyBody) => Ok(Vec::new()),
            other => other,
        }
    }

    async fn create_book(&self, book: &Book) -> Result<Book, GatewayError> {
        let request = self.http.post(self.url("libros")).json(book);
        self.send_json(request).await
    }

    async fn update_book(&self, id: i64, book: &Book) -> Result<Book, GatewayError> {
        let request = self.http.put(self.url(&format!("libros/{id}"))).json(book);
        self.send_json(request).await
    }

    async fn delete_book(&self, id: i64) -> Result<(), GatewayError> {
        let request = self.http.delete(self.url(&format!("libros/{id}")));
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base: &str) -> HttpGateway {
        HttpGateway::with_client(Client::new(), base)
    }

    #[test]
    fn test_url_joins_paths() {
        let gw = gateway("http://10.0.2.2:8080/api/");
        assert_eq!(gw.base_url(), "http://10.0.2.2:8080/api");
        assert_eq!(gw.url("libros"), "http://10.0.2.2:8080/api/libros");
        assert_eq!(gw.url("/libros/4"), "http://10.0.2.2:8080/api/libros/4");
    }

    #[test]
    fn test_new_uses_config() {
        let config = ClientConfig {
            api_base_url: Some("http://localhost:9000/api".to_string()),
            request_timeout_secs: Some(2),
        };
        let gw = HttpGateway::new(&config).unwrap();
        assert_eq!(gw.url("usuarios"), "http://localhost:9000/api/usuarios");
    }

    #[test]
    fn test_decode_empty_body() {
        let result: Result<Vec<Book>, _> = decode_body(b"  \n");
        assert_eq!(result, Err(GatewayError::EmptyBody));
    }

    #[test]
    fn test_decode_garbage_body() {
        let result: Result<Vec<Book>, _> = decode_body(b"<html>oops</html>");
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }

    #[test]
    fn test_decode_book() {
        let body = r#"{"id": 9, "titulo": "Rayuela", "autor": "Julio Cortazar", "idioma": "Español", "paginas": 600, "categoria": "Ficción"}"#;
        let book: Book = decode_body(body.as_bytes()).unwrap();
        assert_eq!(book.id, Some(9));
        assert_eq!(book.pages, 600);
    }

    mod http {
        use super::*;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::{TcpListener, TcpStream};
        use tokio::task::JoinHandle;

        /// Answer exactly one request with `status` and `body`; yields the raw request
        async fn serve_once(status: &'static str, body: &'static str) -> (HttpGateway, JoinHandle<String>) {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let base = format!("http://{}/api/", listener.local_addr().unwrap());
            let handle = tokio::spawn(async move {
                let (mut socket, _) = listener.accept().await.unwrap();
                let request = read_request(&mut socket).await;
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
                request
            });
            (gateway(&base), handle)
        }

        async fn read_request(socket: &mut TcpStream) -> String {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                    continue;
                };
                let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
            String::from_utf8_lossy(&buf).into_owned()
        }

        #[tokio::test]
        async fn test_error_status_keeps_body_text() {
            let (gw, server) = serve_once("409 Conflict", "El correo ya está registrado").await;
            let user = UserRecord {
                full_name: "Ana Perez".to_string(),
                email: "ana@duoc.cl".to_string(),
                password: "Password123@".to_string(),
                phone: None,
                favorite_genres: vec![crate::state::Genre::Terror],
                profile_photo_uri: None,
            };

            let result = gw.register(&user).await;

            assert_eq!(
                result,
                Err(GatewayError::Status {
                    code: 409,
                    body: Some("El correo ya está registrado".to_string()),
                })
            );
            let request = server.await.unwrap();
            assert!(request.starts_with("POST /api/usuarios "), "{request}");
            assert!(request.contains(r#""nombreCompleto":"Ana Perez""#), "{request}");
        }

        #[tokio::test]
        async fn test_blank_error_body_is_dropped() {
            let (gw, server) = serve_once("500 Internal Server Error", "  \n").await;

            let result = gw.list_books().await;

            assert_eq!(
                result,
                Err(GatewayError::Status {
                    code: 500,
                    body: None,
                })
            );
            let request = server.await.unwrap();
            assert!(request.starts_with("GET /api/libros "), "{request}");
        }

        #[tokio::test]
        async fn test_empty_catalog_body_is_empty_list() {
            let (gw, server) = serve_once("200 OK", "").await;

            assert_eq!(gw.list_books().await, Ok(Vec::new()));
            server.await.unwrap();
        }

        #[tokio::test]
        async fn test_delete_ignores_response_body() {
            let (gw, server) = serve_once("200 OK", "eliminado, sin JSON").await;

            assert_eq!(gw.delete_book(4).await, Ok(()));
            let request = server.await.unwrap();
            assert!(request.starts_with("DELETE /api/libros/4 "), "{request}");
        }

        #[tokio::test]
        async fn test_login_decodes_session() {
            let (gw, server) = serve_once(
                "200 OK",
                r#"{"token":"abc123","user":{"nombreCompleto":"Ana Perez","correo":"ana@duoc.cl","contrasena":"","generosFavoritos":["TERROR"]}}"#,
            )
            .await;

            let session = gw
                .login(&Credentials::new("ana@duoc.cl", "Password123@"))
                .await
                .unwrap();

            assert_eq!(session.token, "abc123");
            assert_eq!(session.user.email, "ana@duoc.cl");
            let request = server.await.unwrap();
            assert!(request.starts_with("POST /api/usuarios/login "), "{request}");
            assert!(request.contains(r#""correo":"ana@duoc.cl""#), "{request}");
        }

        #[tokio::test]
        async fn test_login_empty_body() {
            let (gw, server) = serve_once("200 OK", "").await;

            let result = gw.login(&Credentials::new("ana@duoc.cl", "x")).await;

            assert_eq!(result.map(|s| s.token), Err(GatewayError::EmptyBody));
            server.await.unwrap();
        }
    }
}
