//! End-to-end run against the on-disk engine used in deployments

use restaurant_server::db::{DocumentStore, Filter, SurrealStore};
use restaurant_server::{Config, CurrentUser, ServerState};
use serde_json::json;
use shared::models::{NoteCreate, NoteUpdate};
use std::time::Duration;

#[tokio::test]
async fn test_rocksdb_backed_state() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        store_url: format!("rocksdb://{}", tmp.path().join("restaurant").display()),
        ..Config::in_memory("rocksdb-test-secret")
    };
    let state = ServerState::initialize(&config).await.unwrap();
    let actor = CurrentUser {
        uid: "chef".into(),
        email: "chef@example.com".into(),
        first_name: "Head".into(),
        last_name: "Chef".into(),
    };

    let note = state
        .notes
        .create(
            NoteCreate {
                title: Some("Inventory".into()),
                text: Some("Count the flour".into()),
            },
            &actor,
        )
        .await
        .unwrap();

    let updated = state
        .notes
        .update(
            &note.note_id,
            NoteUpdate {
                text: Some("Count the flour and sugar".into()),
                ..Default::default()
            },
            &actor,
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Inventory");
    assert_eq!(updated.text, "Count the flour and sugar");
    assert_eq!(updated.created_at, note.created_at);
}

#[tokio::test]
async fn test_rocksdb_store_documents() {
    let tmp = tempfile::tempdir().unwrap();
    let url = format!("rocksdb://{}", tmp.path().join("store").display());
    let store = SurrealStore::connect(&url, "test", "test", Duration::from_secs(10))
        .await
        .unwrap();

    for (key, order) in [("a1", "o1"), ("a2", "o2"), ("a3", "o1")] {
        let doc = json!({"_id": key, "order_item_id": key, "order_id": order});
        store
            .insert_one("order_items", doc.as_object().unwrap().clone())
            .await
            .unwrap();
    }

    let items = store
        .find_many("order_items", &Filter::eq("order_id", "o1"), None)
        .await
        .unwrap();
    let keys: Vec<&str> = items.iter().map(|d| d["_id"].as_str().unwrap()).collect();
    assert_eq!(keys, vec!["a1", "a3"]);
    assert_eq!(store.count("order_items", &Filter::all()).await.unwrap(), 3);
}
