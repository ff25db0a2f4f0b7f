/// 记录表 API 客户端
///
/// 封装单条记录的 PATCH 请求，所有传输层错误统一折叠为 `None`
use crate::config::Config;
use crate::error::{AppResult, ConfigError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, COOKIE};
use serde_json::json;
use tracing::debug;

/// 远端返回的原始响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResponse {
    pub status: u16,
    pub body: String,
}

/// 记录表 API 客户端
pub struct RecordClient {
    client: reqwest::Client,
    config: Config,
}

impl RecordClient {
    /// 创建新的客户端
    ///
    /// 请求头与超时在构建时固定；请求头的值不合法时返回配置错误。
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, header_value("Authorization", &config.auth_token)?);
        headers.insert(COOKIE, header_value("Cookie", &config.cookie)?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|source| ConfigError::ClientBuildFailed { source })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// 更新单条记录的 u_label
    ///
    /// # 参数
    /// - `sys_id`: 远端资源标识
    /// - `u_label`: 已规范化的标签
    ///
    /// # 返回
    /// 收到响应时返回状态码和响应体；超时、连接失败等返回 `None`。
    /// 每条记录只尝试一次。
    pub async fn send_update(&self, sys_id: &str, u_label: &str) -> Option<UpdateResponse> {
        let url = self.config.record_url(sys_id);
        let payload = json!({ "u_label": u_label });

        let response = match self.client.patch(&url).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("PATCH {} 失败: {}", url, e);
                return None;
            }
        };

        let status = response.status().as_u16();
        // 响应体未完整读取同样视为传输失败
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("读取 {} 的响应体失败: {}", url, e);
                return None;
            }
        };

        debug!("PATCH {} -> {}", url, status);

        Some(UpdateResponse { status, body })
    }
}

fn header_value(header: &'static str, value: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|source| ConfigError::InvalidHeader { header, source }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_invalid_header_value_is_rejected() {
        let mut config = Config::default();
        config.cookie = "session=abc\nX-Injected: 1".to_string();

        match RecordClient::new(&config) {
            Err(AppError::Config(ConfigError::InvalidHeader { header, .. })) => {
                assert_eq!(header, "Cookie");
            }
            other => panic!("expected invalid header error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_sends_patch_with_configured_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/table/abc123")
            .match_header("content-type", "application/json")
            .match_header("authorization", "Basic dGVzdDp0ZXN0")
            .match_header("cookie", "JSESSIONID=xyz")
            .match_body(mockito::Matcher::Json(json!({ "u_label": "Billing" })))
            .with_status(204)
            .create_async()
            .await;

        let config = Config {
            base_url: format!("{}/table", server.url()),
            auth_token: "Basic dGVzdDp0ZXN0".to_string(),
            cookie: "JSESSIONID=xyz".to_string(),
            ..Config::default()
        };
        let client = RecordClient::new(&config).unwrap();

        let response = client.send_update("abc123", "Billing").await.unwrap();
        assert_eq!(response.status, 204);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_truncated_body_is_none() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // 声明 500 字节却只发送 10 字节后断开
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 500\r\n\r\n{\"result\":")
                .await
                .unwrap();
            let _ = socket.shutdown().await;
        });

        let config = Config {
            base_url: format!("http://{}/table", addr),
            ..Config::default()
        };
        let client = RecordClient::new(&config).unwrap();

        assert!(client.send_update("abc123", "Billing").await.is_none());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_none() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = Config {
            base_url: format!("http://{}/table", addr),
            ..Config::default()
        };
        let client = RecordClient::new(&config).unwrap();

        assert!(client.send_update("abc123", "Billing").await.is_none());
    }
}
