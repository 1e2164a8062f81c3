
use chrono::Local;
use recallbot::store::HistoryDoc;
use tempfile::TempDir;
use test_utils::{backdated_doc, temp_store};

#[tokio::test]
async fn save_then_load_round_trips_in_order() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    let doc = backdated_doc(&[("first", 30), ("second", 20), ("third", 5)]);
    store.save(&doc).await.unwrap();

    let loaded = store.load().await;
    assert_eq!(loaded, doc);

    let queries: Vec<_> = loaded
        .interactions
        .iter()
        .map(|item| item.query.as_str())
        .collect();
    assert_eq!(queries, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn load_on_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    let doc = store.load().await;
    assert!(doc.interactions.is_empty());
}

#[tokio::test]
async fn load_on_empty_or_corrupt_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    tokio::fs::write(store.path(), "").await.unwrap();
    assert!(store.load().await.interactions.is_empty());

    tokio::fs::write(store.path(), "not json {{{").await.unwrap();
    assert!(store.load().await.interactions.is_empty());
}

#[tokio::test]
async fn first_append_creates_the_file_with_one_record() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    store
        .append("What is entropy?".to_string(), None)
        .await
        .unwrap();

    let doc = store.load().await;
    assert_eq!(doc.interactions.len(), 1);

    let record = &doc.interactions[0];
    assert_eq!(record.query, "What is entropy?");
    assert_eq!(record.response, None);
    assert!(!record.quizzed);

    // The timestamp is current local wall-clock time.
    let age = Local::now()
        .naive_local()
        .signed_duration_since(record.time);
    assert!(age.num_seconds() >= 0 && age.num_seconds() < 60);
}

#[tokio::test]
async fn file_is_pretty_printed_with_four_space_indent() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    store
        .append("What is entropy?".to_string(), Some("A measure of disorder.".to_string()))
        .await
        .unwrap();

    let raw = tokio::fs::read_to_string(store.path()).await.unwrap();
    assert!(raw.contains("\n    \"interactions\""));
    assert!(raw.contains("\n        {"));
    assert!(raw.contains("\"quizzed\": false"));
    assert!(raw.contains("\"response\": \"A measure of disorder.\""));
}

#[tokio::test]
async fn append_preserves_existing_records() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    store.append("one".to_string(), None).await.unwrap();
    store
        .append("two".to_string(), Some("answer two".to_string()))
        .await
        .unwrap();

    let doc = store.load().await;
    assert_eq!(doc.interactions.len(), 2);
    assert_eq!(doc.interactions[0].query, "one");
    assert_eq!(doc.interactions[1].query, "two");
    assert_eq!(doc.interactions[1].response.as_deref(), Some("answer two"));
}

#[tokio::test]
async fn chat_documents_without_quizzed_flag_load() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    // Shape written by older chat sessions: response present, no quizzed key.
    let raw = "{\n    \"interactions\": [\n        {\n            \"query\": \"What is entropy?\",\n            \"response\": \"A measure of disorder.\",\n            \"time\": \"2026-08-21T10:15:30.123456\"\n        }\n    ]\n}";
    tokio::fs::write(store.path(), raw).await.unwrap();

    let doc = store.load().await;
    assert_eq!(doc.interactions.len(), 1);
    assert!(!doc.interactions[0].quizzed);
    assert_eq!(
        doc.interactions[0].response.as_deref(),
        Some("A measure of disorder.")
    );
}

#[tokio::test]
async fn save_overwrites_the_whole_file() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    store.save(&backdated_doc(&[("a", 30), ("b", 20)])).await.unwrap();
    store.save(&backdated_doc(&[("only", 5)])).await.unwrap();

    let doc = store.load().await;
    assert_eq!(doc.interactions.len(), 1);
    assert_eq!(doc.interactions[0].query, "only");
}

#[tokio::test]
async fn save_empty_document_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    store.save(&HistoryDoc::default()).await.unwrap();
    assert!(store.load().await.interactions.is_empty());
}
