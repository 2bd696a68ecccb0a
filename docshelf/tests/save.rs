use chrono::{DateTime, Duration, TimeZone, Utc};
use docshelf::{memory::InMemoryStore, prelude::*};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> DocumentStore<InMemoryStore> {
    DocumentStore::new(InMemoryStore::new())
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap()
}

fn document(id: Option<&str>, title: &str, content: &str, author_id: &str, name: &str) -> Document {
    Document {
        id: id.map(str::to_string),
        title: title.to_string(),
        content: content.to_string(),
        author: Author::new(author_id, name),
        created: t0(),
    }
}

#[rstest]
#[case::absent_id(None)]
#[case::empty_id(Some(""))]
fn generates_id_for_new_documents(store: DocumentStore<InMemoryStore>, #[case] id: Option<&'static str>) {
    let saved = store
        .save(document(id, "Title 1", "Content 1", "author1", "John Doe"))
        .unwrap();

    let id = saved.id().expect("generated id");
    assert!(!id.is_empty());
    assert_eq!(store.find_by_id(id).unwrap(), Some(saved.clone()));
}

#[rstest]
fn generated_ids_are_unique(store: DocumentStore<InMemoryStore>) {
    let first = store.save(document(None, "A", "c", "a1", "")).unwrap();
    let second = store.save(document(None, "A", "c", "a1", "")).unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(store.len().unwrap(), 2);
}

#[rstest]
fn update_replaces_mutable_fields(store: DocumentStore<InMemoryStore>) {
    store
        .save(document(Some("doc"), "Create Title", "Create Content", "author1", "John Doe"))
        .unwrap();

    let result = store
        .save(document(Some("doc"), "Update Title", "Update Content", "author2", "Bob"))
        .unwrap();

    assert_eq!(result.id(), Some("doc"));
    assert_eq!(result.title, "Update Title");
    assert_eq!(result.content, "Update Content");
    assert_eq!(result.author, Author::new("author2", "Bob"));
}

#[rstest]
fn update_never_overrides_created(store: DocumentStore<InMemoryStore>) {
    let t1 = t0();
    let t2 = t1 + Duration::days(30);

    let mut original = document(Some("x"), "A", "c", "a1", "");
    original.created = t1;
    store.save(original).unwrap();

    let mut updated = document(Some("x"), "B", "d", "a2", "");
    updated.created = t2;
    let result = store.save(updated).unwrap();

    assert_eq!(result.created, t1);
    assert_eq!(result.title, "B");
    assert_eq!(store.find_by_id("x").unwrap().unwrap().created, t1);
}

#[rstest]
fn update_is_in_place(store: DocumentStore<InMemoryStore>) {
    store.save(document(Some("x"), "A", "c", "a1", "")).unwrap();
    store.save(document(Some("y"), "Other", "c", "a1", "")).unwrap();
    assert_eq!(store.len().unwrap(), 2);

    store.save(document(Some("x"), "B", "d", "a2", "")).unwrap();

    let all = store.documents().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all.iter().filter(|doc| doc.id() == Some("x")).count(), 1);
}

#[rstest]
fn find_by_id_returns_none_for_unknown_ids(store: DocumentStore<InMemoryStore>) {
    store.save(document(Some("x"), "Title", "Content", "a1", "")).unwrap();

    assert_eq!(store.find_by_id("x").unwrap().map(|doc| doc.title), Some("Title".to_string()));
    assert_eq!(store.find_by_id("missing").unwrap(), None);
    assert!(store.contains("x").unwrap());
    assert!(!store.contains("missing").unwrap());
}

#[test]
fn stores_are_independent() {
    let first = DocumentStore::new(InMemoryStore::new());
    let second = DocumentStore::new(InMemoryStore::new());

    first.save(document(Some("x"), "A", "c", "a1", "")).unwrap();

    assert_eq!(first.len().unwrap(), 1);
    assert!(second.is_empty().unwrap());
    assert_eq!(second.find_by_id("x").unwrap(), None);
}

#[test]
fn custom_id_generator_is_used() {
    fn constant_id() -> String {
        "generated-1".to_string()
    }

    let store = DocumentStore::new(
        InMemoryStore::builder()
            .with_id_generator(constant_id)
            .build()
            .unwrap(),
    );

    let saved = store.save(document(None, "A", "c", "a1", "")).unwrap();

    assert_eq!(saved.id(), Some("generated-1"));
}

#[test]
fn saved_documents_round_trip_through_json() {
    let store = DocumentStore::new(InMemoryStore::new());
    let saved = store.save(document(None, "A", "c", "a1", "Alice")).unwrap();

    let json = saved.to_json().unwrap();

    assert_eq!(json["id"], serde_json::Value::String(saved.id().unwrap().to_string()));
    assert_eq!(json["author"]["name"], "Alice");
    assert_eq!(Document::from_json(json).unwrap(), saved);
}
