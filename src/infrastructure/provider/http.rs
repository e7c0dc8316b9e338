//! HTTP RoomProvider 実装
//!
//! バックエンドの読み取りエンドポイントから部屋コレクションを取得する
//! reqwest ベースの実装。エラーペイロード（`{"message": ...}` JSON
//! またはプレーンテキスト）をベストエフォートで 1 つのユーザー向け
//! メッセージに写像します。

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::{ProviderError, Room, RoomProvider};
use crate::infrastructure::dto::RoomDto;

/// Read endpoint serving the full room collection.
pub const ROOMS_PATH: &str = "/api/rooms";

/// reqwest-backed room provider.
pub struct HttpRoomProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRoomProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn rooms_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ROOMS_PATH)
    }
}

#[async_trait]
impl RoomProvider for HttpRoomProvider {
    async fn fetch_rooms(&self) -> Result<Vec<Room>, ProviderError> {
        let url = self.rooms_url();
        tracing::debug!(%url, "fetching room collection");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| ProviderError::Transport {
                    message: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        // 204/no-body is a "null result", not an error
        if status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        let body = response.text().await.map_err(|e| ProviderError::Transport {
            message: e.to_string(),
        })?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let dtos: Vec<RoomDto> =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode {
                message: e.to_string(),
            })?;

        Ok(dtos.into_iter().map(RoomDto::into_domain).collect())
    }
}

/// Best-effort mapping of an error response body to one message:
/// JSON `message` field, then the plain text body, then a generic
/// status line.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    format!("room provider returned HTTP {status}")
}
