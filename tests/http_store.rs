//! Integration tests for the HTTP store client against a mock server.
//!
//! These verify request shapes (paths, auth header, JSON envelopes),
//! response parsing, pagination wiring, and status-code error mapping.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quire::store::http::HttpDocumentStore;
use quire::store::{
    CreateDocRequest, DocumentStore, ListDocsOpts, StoreError, UpdateDocRequest,
};

fn doc_json(number: u64, name: &str) -> serde_json::Value {
    json!({
        "number": number,
        "name": name,
        "full_name": name,
        "tags": [],
        "category": null,
        "wip": false,
        "body_md": "body",
        "revision_number": 1,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    })
}

fn store_for(server: &MockServer) -> HttpDocumentStore {
    HttpDocumentStore::with_api_base("tok_test123", "acme", server.uri())
}

#[tokio::test]
async fn list_docs_sends_auth_and_paging_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces/acme/docs"))
        .and(header("authorization", "Bearer tok_test123"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .and(query_param("q", "category:ops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [doc_json(1, "oncall")],
            "next_page": 2,
            "total_count": 150
        })))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let page = store
        .list_docs(ListDocsOpts {
            query: Some("category:ops".to_string()),
            page: 1,
            per_page: 100,
        })
        .await
        .unwrap();

    assert_eq!(page.docs.len(), 1);
    assert_eq!(page.docs[0].name, "oncall");
    assert_eq!(page.next_page, Some(2));
    assert_eq!(page.total_count, 150);
}

#[tokio::test]
async fn list_docs_last_page_has_no_next() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces/acme/docs"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [],
            "next_page": null,
            "total_count": 150
        })))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let page = store
        .list_docs(ListDocsOpts {
            page: 2,
            per_page: 100,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.next_page, None);
}

#[tokio::test]
async fn get_doc_hits_numbered_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces/acme/docs/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(doc_json(42, "oncall")))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let doc = store.get_doc(42).await.unwrap();
    assert_eq!(doc.number, 42);
    assert!(doc.created_at.is_some());
}

#[tokio::test]
async fn create_doc_posts_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/workspaces/acme/docs"))
        .and(body_json(json!({
            "doc": {
                "name": "oncall",
                "body_md": "# Oncall",
                "tags": ["infra"],
                "category": "ops",
                "wip": false
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(doc_json(7, "oncall")))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let doc = store
        .create_doc(CreateDocRequest {
            name: "oncall".to_string(),
            body_md: Some("# Oncall".to_string()),
            tags: Some(vec!["infra".to_string()]),
            category: Some("ops".to_string()),
            wip: Some(false),
        })
        .await
        .unwrap();

    assert_eq!(doc.number, 7);
}

#[tokio::test]
async fn update_doc_patches_and_reads_overlap() {
    let server = MockServer::start().await;
    let mut body = doc_json(7, "oncall");
    body["revision_number"] = json!(2);
    body["overlapped"] = json!(true);

    Mock::given(method("PATCH"))
        .and(path("/v1/workspaces/acme/docs/7"))
        .and(body_json(json!({
            "doc": { "body_md": "new body" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let updated = store
        .update_doc(
            7,
            UpdateDocRequest {
                body_md: Some("new body".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.doc.revision_number, 2);
    assert!(updated.overlapped);
}

#[tokio::test]
async fn error_statuses_are_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces/acme/docs/1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces/acme/docs/2"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "doc 2 not found" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces/acme/docs/3"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces/acme/docs/4"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "name taken" })),
        )
        .mount(&server)
        .await;

    let store = store_for(&server);

    assert!(matches!(
        store.get_doc(1).await,
        Err(StoreError::AuthFailed(_))
    ));
    match store.get_doc(2).await {
        Err(StoreError::NotFound(message)) => assert_eq!(message, "doc 2 not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(matches!(
        store.get_doc(3).await,
        Err(StoreError::RateLimited)
    ));
    match store.get_doc(4).await {
        Err(StoreError::ApiError { status: 422, message }) => assert_eq!(message, "name taken"),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn network_failure_is_a_network_error() {
    // Point at a server that was started and then dropped.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let store = HttpDocumentStore::with_api_base("tok_test123", "acme", uri);
    assert!(matches!(
        store.get_doc(1).await,
        Err(StoreError::NetworkError(_))
    ));
}
