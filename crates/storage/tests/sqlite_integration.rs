use nura_core::model::{AnswerSheet, ChoiceKey, QuestionId};
use storage::repository::{ANSWERS_KEY, INTERACTIONS_KEY, LocalStore, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_round_trips_persisted_answers() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_answers?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let sheet: AnswerSheet = [
        (QuestionId::new(3), ChoiceKey::new("b")),
        (QuestionId::new(7), ChoiceKey::new("d")),
    ]
    .into_iter()
    .collect();
    let json = serde_json::to_string(&sheet).unwrap();
    repo.set(ANSWERS_KEY, &json).await.unwrap();

    let stored = repo.get(ANSWERS_KEY).await.unwrap().expect("stored value");
    let restored: AnswerSheet = serde_json::from_str(&stored).unwrap();
    assert_eq!(restored, sheet);
}

#[tokio::test]
async fn sqlite_set_overwrites_and_remove_clears() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.set(INTERACTIONS_KEY, "[]").await.unwrap();
    repo.set(INTERACTIONS_KEY, r#"[{"action":"navigate"}]"#)
        .await
        .unwrap();
    assert_eq!(
        repo.get(INTERACTIONS_KEY).await.unwrap().as_deref(),
        Some(r#"[{"action":"navigate"}]"#)
    );

    repo.remove(INTERACTIONS_KEY).await.unwrap();
    assert_eq!(repo.get(INTERACTIONS_KEY).await.unwrap(), None);
    repo.remove(INTERACTIONS_KEY).await.unwrap();
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(applied, 1);
}

#[tokio::test]
async fn storage_sqlite_exposes_local_store() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.local.set(ANSWERS_KEY, "{}").await.unwrap();
    assert_eq!(
        storage.local.get(ANSWERS_KEY).await.unwrap().as_deref(),
        Some("{}")
    );
}

#[tokio::test]
async fn sqlite_missing_key_reads_as_none() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_missing?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get(ANSWERS_KEY).await.unwrap(), None);
    repo.remove(ANSWERS_KEY).await.unwrap();
}
