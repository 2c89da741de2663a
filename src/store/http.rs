//! store::http
//!
//! HTTP implementation of the document store using the store's REST API.
//!
//! # Design
//!
//! All endpoints are workspace-scoped under `/v1/workspaces/{ws}/docs`.
//! Requests carry a bearer token; responses are JSON. Error responses are
//! mapped onto [`StoreError`] by status code.
//!
//! # Rate Limiting
//!
//! The store rate-limits aggressive clients. This implementation returns
//! `StoreError::RateLimited` when limits are hit and does not retry
//! automatically (caller's responsibility).
//!
//! # Example
//!
//! ```ignore
//! use quire::store::http::HttpDocumentStore;
//! use quire::store::{DocumentStore, ListDocsOpts};
//!
//! let store = HttpDocumentStore::new("tok_xxx", "acme");
//! let page = store
//!     .list_docs(ListDocsOpts { page: 1, per_page: 100, ..Default::default() })
//!     .await?;
//! println!("{} documents", page.total_count);
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::traits::{
    CreateDocRequest, DocumentPage, DocumentStore, ListDocsOpts, RemoteDocument, StoreError,
    UpdateDocRequest, UpdatedDocument,
};

/// Default API base URL.
const DEFAULT_API_BASE: &str = "https://api.quire.dev";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "quire-cli";

/// HTTP document store client.
///
/// Holds a bearer token and a workspace name; the API base is
/// configurable for self-hosted stores.
pub struct HttpDocumentStore {
    /// HTTP client for making requests
    client: Client,
    /// Bearer token
    token: String,
    /// Workspace name
    workspace: String,
    /// API base URL (configurable for self-hosted stores)
    api_base: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for HttpDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDocumentStore")
            .field("workspace", &self.workspace)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl HttpDocumentStore {
    /// Create a new client for the default API base.
    pub fn new(token: impl Into<String>, workspace: impl Into<String>) -> Self {
        Self::with_api_base(token, workspace, DEFAULT_API_BASE)
    }

    /// Create a client with a custom API base URL.
    ///
    /// Use this for self-hosted store installations.
    pub fn with_api_base(
        token: impl Into<String>,
        workspace: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            workspace: workspace.into(),
            api_base: api_base.into(),
        }
    }

    /// Get the workspace name.
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// Build common headers for API requests.
    fn headers(&self) -> Result<HeaderMap, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|_| StoreError::AuthFailed("token contains invalid characters".into()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        Ok(headers)
    }

    /// Build URL for a docs endpoint.
    fn docs_url(&self, path: &str) -> String {
        let base = format!("{}/v1/workspaces/{}/docs", self.api_base, self.workspace);
        if path.is_empty() {
            base
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, StoreError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| StoreError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            self.handle_error_response(response, status).await
        }
    }

    /// Handle an error response from the API.
    async fn handle_error_response<T>(
        &self,
        response: Response,
        status: StatusCode,
    ) -> Result<T, StoreError> {
        // Try to get an error message from the body
        let message = match response.json::<StoreErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "Unknown error".to_string(),
        };

        Err(match status {
            StatusCode::UNAUTHORIZED => StoreError::AuthFailed("Invalid or expired token".into()),
            StatusCode::FORBIDDEN => StoreError::AuthFailed(format!("Permission denied: {}", message)),
            StatusCode::NOT_FOUND => StoreError::NotFound(message),
            StatusCode::UNPROCESSABLE_ENTITY => StoreError::ApiError {
                status: status.as_u16(),
                message,
            },
            StatusCode::TOO_MANY_REQUESTS => StoreError::RateLimited,
            _ if status.is_server_error() => StoreError::ApiError {
                status: status.as_u16(),
                message: format!("store server error: {}", message),
            },
            _ => StoreError::ApiError {
                status: status.as_u16(),
                message,
            },
        })
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn list_docs(&self, opts: ListDocsOpts) -> Result<DocumentPage, StoreError> {
        let url = self.docs_url("");

        let mut params: Vec<(&str, String)> = vec![
            ("page", opts.page.max(1).to_string()),
            ("per_page", opts.per_page.to_string()),
        ];
        if let Some(query) = &opts.query {
            if !query.is_empty() {
                params.push(("q", query.clone()));
            }
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }

    async fn get_doc(&self, number: u64) -> Result<RemoteDocument, StoreError> {
        let url = self.docs_url(&number.to_string());

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }

    async fn create_doc(&self, request: CreateDocRequest) -> Result<RemoteDocument, StoreError> {
        let url = self.docs_url("");

        let body = DocEnvelope {
            doc: DocBody {
                name: Some(&request.name),
                body_md: request.body_md.as_deref(),
                tags: request.tags.as_deref(),
                category: request.category.as_deref(),
                wip: request.wip,
            },
        };

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }

    async fn update_doc(
        &self,
        number: u64,
        request: UpdateDocRequest,
    ) -> Result<UpdatedDocument, StoreError> {
        let url = self.docs_url(&number.to_string());

        let body = DocEnvelope {
            doc: DocBody {
                name: request.name.as_deref(),
                body_md: request.body_md.as_deref(),
                tags: request.tags.as_deref(),
                category: request.category.as_deref(),
                wip: request.wip,
            },
        };

        let response = self
            .client
            .patch(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        let updated: UpdateDocResponse = self.handle_response(response).await?;
        Ok(UpdatedDocument {
            doc: updated.doc,
            overlapped: updated.overlapped,
        })
    }
}

// --------------------------------------------------------------------------
// API Request/Response Types
// --------------------------------------------------------------------------

/// Request envelope; the API nests the document under a `doc` key.
#[derive(Serialize)]
struct DocEnvelope<'a> {
    doc: DocBody<'a>,
}

/// Partial document payload for create and update.
#[derive(Serialize)]
struct DocBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body_md: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wip: Option<bool>,
}

/// Update response: the stored document plus the overlap flag.
#[derive(Deserialize)]
struct UpdateDocResponse {
    #[serde(flatten)]
    doc: RemoteDocument,
    #[serde(default)]
    overlapped: bool,
}

/// Error response body.
#[derive(Deserialize)]
struct StoreErrorResponse {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docs_url_is_workspace_scoped() {
        let store = HttpDocumentStore::with_api_base("tok", "acme", "https://example.com");
        assert_eq!(
            store.docs_url(""),
            "https://example.com/v1/workspaces/acme/docs"
        );
        assert_eq!(
            store.docs_url("42"),
            "https://example.com/v1/workspaces/acme/docs/42"
        );
    }

    #[test]
    fn debug_hides_token() {
        let store = HttpDocumentStore::new("sekrit", "acme");
        let rendered = format!("{:?}", store);
        assert!(!rendered.contains("sekrit"));
    }

    #[test]
    fn doc_body_skips_absent_fields() {
        let body = DocEnvelope {
            doc: DocBody {
                name: Some("title"),
                body_md: None,
                tags: None,
                category: None,
                wip: None,
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"doc":{"name":"title"}}"#);
    }
}
