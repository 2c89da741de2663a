//! End-to-end tests for the pull and push workflows against the mock
//! store and a temporary file tree.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use quire::files::FileTree;
use quire::store::mock::MockStore;
use quire::store::{CreateDocRequest, DocumentStore};
use quire::sync::{pull, push, PullOptions};
use quire::ui::Verbosity;

async fn seed(store: &MockStore, name: &str, category: Option<&str>, body: &str) {
    store
        .create_doc(CreateDocRequest {
            name: name.to_string(),
            body_md: Some(body.to_string()),
            category: category.map(str::to_string),
            ..Default::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn pull_edit_push_round_trip() {
    let store = MockStore::new();
    seed(&store, "oncall", Some("ops"), "# Oncall\n").await;

    let temp = TempDir::new().unwrap();
    let tree = FileTree::new(temp.path());

    // Pull writes the encoded title as the file name.
    let summary = pull(&store, &tree, &PullOptions::default(), Verbosity::Quiet)
        .await
        .unwrap();
    assert_eq!(summary.written, 1);

    let pulled = Path::new("ops/oncall [id:1] [rev:1].md");
    assert_eq!(tree.read(pulled).unwrap(), "# Oncall\n");

    // Edit the body locally and push it back.
    tree.write(pulled, "# Oncall\n\nUpdated.\n").unwrap();
    let summary = push(&store, &tree, &[pulled.to_path_buf()], Verbosity::Quiet)
        .await
        .unwrap();
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.renamed, 1);

    // The store has the new body and the file moved to the new revision.
    assert_eq!(store.peek_doc(1).unwrap().body_md, "# Oncall\n\nUpdated.\n");
    assert!(tree.exists(Path::new("ops/oncall [id:1] [rev:2].md")));
    assert!(!tree.exists(pulled));
}

#[tokio::test]
async fn push_new_file_then_pull_elsewhere() {
    let store = MockStore::new();

    let local = TempDir::new().unwrap();
    let tree = FileTree::new(local.path());
    tree.write(Path::new("drafts/postmortem #infra [WIP].md"), "# TBD\n")
        .unwrap();

    let summary = push(
        &store,
        &tree,
        &[PathBuf::from("drafts/postmortem #infra [WIP].md")],
        Verbosity::Quiet,
    )
    .await
    .unwrap();
    assert_eq!(summary.created, 1);

    // The local file picked up its assigned id.
    assert!(tree.exists(Path::new(
        "drafts/postmortem #infra [id:1] [rev:1] [WIP].md"
    )));

    // A fresh pull into another directory produces the same file name.
    let elsewhere = TempDir::new().unwrap();
    let other_tree = FileTree::new(elsewhere.path());
    pull(&store, &other_tree, &PullOptions::default(), Verbosity::Quiet)
        .await
        .unwrap();
    assert_eq!(
        other_tree
            .read(Path::new(
                "drafts/postmortem #infra [id:1] [rev:1] [WIP].md"
            ))
            .unwrap(),
        "# TBD\n"
    );
}

#[tokio::test]
async fn repull_overwrites_stale_bodies() {
    let store = MockStore::new();
    seed(&store, "readme", None, "v1").await;

    let temp = TempDir::new().unwrap();
    let tree = FileTree::new(temp.path());

    pull(&store, &tree, &PullOptions::default(), Verbosity::Quiet)
        .await
        .unwrap();
    let rel = Path::new("readme [id:1] [rev:1].md");
    tree.write(rel, "local scribbles").unwrap();

    // The remote store is the source of truth on pull.
    pull(&store, &tree, &PullOptions::default(), Verbosity::Quiet)
        .await
        .unwrap();
    assert_eq!(tree.read(rel).unwrap(), "v1");
}

#[tokio::test]
async fn push_reports_each_failing_file_but_finishes() {
    let store = MockStore::new();
    let temp = TempDir::new().unwrap();
    let tree = FileTree::new(temp.path());

    tree.write(Path::new("broken [rev:x].md"), "a").unwrap();
    tree.write(Path::new("first.md"), "b").unwrap();
    tree.write(Path::new("second.md"), "c").unwrap();

    let err = push(
        &store,
        &tree,
        &[
            PathBuf::from("broken [rev:x].md"),
            PathBuf::from("first.md"),
            PathBuf::from("missing.md"),
            PathBuf::from("second.md"),
        ],
        Verbosity::Quiet,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("2 of 4"));
    // Both healthy files made it regardless of their neighbors.
    assert_eq!(store.doc_count(), 2);
    assert!(tree.exists(Path::new("first [id:1] [rev:1].md")));
    assert!(tree.exists(Path::new("second [id:2] [rev:1].md")));
}
