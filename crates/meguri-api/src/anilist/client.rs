use meguri_core::models::MediaListStatus;
use meguri_core::payload::RawListPayload;
use meguri_core::source::{ListSource, TransportError};
use reqwest::{Client, StatusCode};

use super::error::AniListError;

const API_URL: &str = "https://graphql.anilist.co";

const USER_LIST_QUERY: &str = r#"
query ($userName: String, $status: MediaListStatus) {
    MediaListCollection(userName: $userName, type: ANIME, status: $status) {
        hasNextChunk
        lists {
            entries {
                mediaId
                media {
                    id
                    title { english romaji }
                    coverImage { extraLarge medium }
                    averageScore
                    episodes
                    genres
                    status
                    season
                    seasonYear
                }
            }
        }
    }
}
"#;

/// AniList GraphQL client for public user lists. No token is needed.
pub struct AniListClient {
    endpoint: String,
    http: Client,
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AniListClient {
    pub fn new() -> Self {
        Self::with_endpoint(API_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    async fn graphql_request<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AniListError> {
        tracing::debug!(operation, "AniList GraphQL request");

        let resp = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(operation, "AniList returned 404");
            return Err(AniListError::NotFound);
        }
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(operation, status = status_code, "AniList API error");
            return Err(AniListError::Api {
                status: status_code,
                message: body,
            });
        }

        tracing::debug!(operation, status = %status, "AniList response received");
        resp.json::<T>()
            .await
            .map_err(|e| AniListError::Parse(e.to_string()))
    }

    /// Fetch `username`'s anime list entries with the given watch status.
    pub async fn user_list(
        &self,
        username: &str,
        status: MediaListStatus,
    ) -> Result<RawListPayload, AniListError> {
        self.graphql_request("UserList", USER_LIST_QUERY, list_variables(username, status))
            .await
    }
}

fn list_variables(username: &str, status: MediaListStatus) -> serde_json::Value {
    serde_json::json!({
        "userName": username.trim(),
        "status": status.to_anilist_str(),
    })
}

impl ListSource for AniListClient {
    async fn fetch_list(
        &self,
        username: &str,
        status: MediaListStatus,
    ) -> Result<RawListPayload, TransportError> {
        self.user_list(username, status).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;

    #[test]
    fn test_list_variables() {
        let vars = list_variables(" alice ", MediaListStatus::Planning);
        assert_eq!(vars["userName"], "alice");
        assert_eq!(vars["status"], "PLANNING");
    }

    #[test]
    fn test_query_filters_by_user_and_status() {
        assert!(USER_LIST_QUERY.contains("userName: $userName"));
        assert!(USER_LIST_QUERY.contains("status: $status"));
        assert!(USER_LIST_QUERY.contains("type: ANIME"));
    }

    #[tokio::test]
    async fn test_fetch_list_success() {
        let body = r#"{"data":{"MediaListCollection":{"hasNextChunk":false,"lists":[{"entries":[{"mediaId":21,"media":{"id":21,"title":{"english":"One Piece","romaji":"One Piece"}}}]}]}}}"#;
        let (url, request) = serve_once(200, body).await;

        let client = AniListClient::with_endpoint(url);
        let payload = client
            .fetch_list("alice", MediaListStatus::Current)
            .await
            .unwrap();
        assert_eq!(payload.entries().count(), 1);

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /"));
        assert!(request.contains(r#""userName":"alice""#));
        assert!(request.contains(r#""status":"CURRENT""#));
    }

    #[tokio::test]
    async fn test_fetch_list_not_found() {
        let body = r#"{"errors":[{"message":"User not found","status":404}],"data":{"MediaListCollection":null}}"#;
        let (url, _request) = serve_once(404, body).await;

        let client = AniListClient::with_endpoint(url);
        let err = client
            .fetch_list("ghost", MediaListStatus::Current)
            .await
            .unwrap_err();
        assert_eq!(err, TransportError::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_list_server_error() {
        let (url, _request) = serve_once(500, "oops").await;

        let client = AniListClient::with_endpoint(url);
        let err = client
            .fetch_list("alice", MediaListStatus::Current)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            TransportError::Status {
                status: 500,
                message: "oops".into()
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_list_malformed_body() {
        let (url, _request) = serve_once(200, "not json").await;

        let client = AniListClient::with_endpoint(url);
        let err = client
            .fetch_list("alice", MediaListStatus::Current)
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Malformed(_)));
    }
}
