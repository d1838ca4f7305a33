//! Tests for the store (in-memory database).

use crate::extract::Favorite;
use crate::store::{ItemStage, Store, EXPORT_COLUMNS};

fn favs() -> Vec<Favorite> {
    vec![
        Favorite::new("/view/1/", "First", "alice"),
        Favorite::new("/view/2/", "Second", "bob"),
        Favorite::new("/view/3/", "Third", "carol"),
    ]
}

/// `resolved_at` is set exactly when `download_link` is.
async fn assert_link_invariant(store: &Store) {
    for item in store.list_items().await.unwrap() {
        assert_eq!(
            item.download_link.is_some(),
            item.resolved_at.is_some(),
            "link/timestamp mismatch for {}",
            item.view_reference
        );
        if item.local_filename.is_some() {
            assert!(item.download_link.is_some());
        }
    }
}

#[tokio::test]
async fn insert_is_idempotent() {
    let store = Store::open_memory().await.unwrap();
    assert_eq!(store.insert_favorites(&favs()).await.unwrap(), 3);
    assert_eq!(store.row_count().await.unwrap(), 3);

    assert_eq!(store.insert_favorites(&favs()).await.unwrap(), 0);
    assert_eq!(store.row_count().await.unwrap(), 3);
}

#[tokio::test]
async fn rediscovery_does_not_overwrite_progress() {
    let store = Store::open_memory().await.unwrap();
    store.insert_favorites(&favs()).await.unwrap();
    store
        .record_resolution("/view/1/", "https://cdn.example/1.png")
        .await
        .unwrap();
    store.set_local_filename("/view/1/", "alice-first.png").await.unwrap();
    let before = store.get_item("/view/1/").await.unwrap().unwrap();

    let renamed = vec![Favorite::new("/view/1/", "Renamed", "someone-else")];
    assert_eq!(store.insert_favorites(&renamed).await.unwrap(), 0);

    let after = store.get_item("/view/1/").await.unwrap().unwrap();
    assert_eq!(before, after);
    assert_eq!(after.title.as_deref(), Some("First"));
    assert_eq!(after.local_filename.as_deref(), Some("alice-first.png"));
}

#[tokio::test]
async fn resolution_and_download_queues() {
    let store = Store::open_memory().await.unwrap();
    store.insert_favorites(&favs()).await.unwrap();

    let pending = store.pending_resolution(3).await.unwrap();
    let refs: Vec<_> = pending.iter().map(|p| p.view_reference.as_str()).collect();
    assert_eq!(refs, ["/view/1/", "/view/2/", "/view/3/"]);
    assert!(store.pending_downloads().await.unwrap().is_empty());

    store
        .record_resolution("/view/2/", "https://cdn.example/2.gif")
        .await
        .unwrap();
    assert_link_invariant(&store).await;

    let pending = store.pending_resolution(3).await.unwrap();
    assert_eq!(pending.len(), 2);
    let downloads = store.pending_downloads().await.unwrap();
    assert_eq!(downloads.len(), 1);
    assert_eq!(downloads[0].view_reference, "/view/2/");
    assert_eq!(downloads[0].author.as_deref(), Some("bob"));
    assert_eq!(downloads[0].download_link, "https://cdn.example/2.gif");

    store.set_local_filename("/view/2/", "bob-second.gif").await.unwrap();
    assert!(store.pending_downloads().await.unwrap().is_empty());
    let item = store.get_item("/view/2/").await.unwrap().unwrap();
    assert_eq!(item.stage(), ItemStage::Downloaded);
}

#[tokio::test]
async fn failed_attempts_are_capped() {
    let store = Store::open_memory().await.unwrap();
    store.insert_favorites(&favs()).await.unwrap();

    assert_eq!(store.record_failed_resolution("/view/1/").await.unwrap(), 1);
    assert_eq!(store.record_failed_resolution("/view/1/").await.unwrap(), 2);
    assert_link_invariant(&store).await;

    let item = store.get_item("/view/1/").await.unwrap().unwrap();
    assert_eq!(item.download_link, None);
    assert_eq!(item.resolved_at, None);
    assert!(item.last_attempt_at.is_some());

    assert_eq!(store.pending_resolution(3).await.unwrap().len(), 3);
    assert_eq!(store.pending_resolution(2).await.unwrap().len(), 2);

    let stats = store.stats(2).await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.awaiting_resolution, 2);
    assert_eq!(stats.unresolvable, 1);
    assert_eq!(stats.resolved, 0);
}

#[tokio::test]
async fn failed_attempt_on_resolved_item_is_noop() {
    let store = Store::open_memory().await.unwrap();
    store.insert_favorites(&favs()).await.unwrap();
    store
        .record_resolution("/view/3/", "https://cdn.example/3.jpg")
        .await
        .unwrap();
    assert_eq!(store.record_failed_resolution("/view/3/").await.unwrap(), 0);
    let item = store.get_item("/view/3/").await.unwrap().unwrap();
    assert_eq!(item.resolve_attempts, 0);
}

#[tokio::test]
async fn schema_rejects_filename_without_link() {
    let store = Store::open_memory().await.unwrap();
    store.insert_favorites(&favs()).await.unwrap();
    assert!(store.set_local_filename("/view/1/", "orphan.png").await.is_err());
    let item = store.get_item("/view/1/").await.unwrap().unwrap();
    assert_eq!(item.local_filename, None);
}

#[tokio::test]
async fn rename_local_filename_matches_old_name() {
    let store = Store::open_memory().await.unwrap();
    store.insert_favorites(&favs()).await.unwrap();
    store
        .record_resolution("/view/1/", "https://cdn.example/1.jpg")
        .await
        .unwrap();
    store.set_local_filename("/view/1/", "alice-first.jpg").await.unwrap();

    assert_eq!(
        store
            .rename_local_filename("alice-first.jpg", "alice-first.png")
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        store.rename_local_filename("untracked.jpg", "untracked.png").await.unwrap(),
        0
    );
    assert_eq!(store.local_filenames().await.unwrap(), ["alice-first.png"]);
}

#[tokio::test]
async fn export_has_header_and_rows() {
    let store = Store::open_memory().await.unwrap();
    store.insert_favorites(&favs()).await.unwrap();
    store
        .record_resolution("/view/1/", "https://cdn.example/1.jpg")
        .await
        .unwrap();

    let mut buf = Vec::new();
    assert_eq!(store.export_csv_to(&mut buf).await.unwrap(), 3);
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), EXPORT_COLUMNS.join(","));
    let first = lines.next().unwrap();
    assert!(first.starts_with("/view/1/,First,alice,"));
    assert!(first.contains("https://cdn.example/1.jpg"));
    assert_eq!(lines.count(), 2);
}

#[tokio::test]
async fn open_on_disk_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("fa_download.db");
    {
        let store = Store::open(&path).await.unwrap();
        store.insert_favorites(&favs()).await.unwrap();
        store.pool.close().await;
    }
    let store = Store::open(&path).await.unwrap();
    assert_eq!(store.row_count().await.unwrap(), 3);
}
