use domain::{SessionContext, Tower};
use rms_storage::{FileSnapshotStore, Snapshot, SnapshotStore};

fn admin_ctx() -> SessionContext {
    SessionContext::new("user-admin", "Administrador", true)
}

fn temp_snapshot_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("rms-snapshot-{}-{}.json", name, uuid::Uuid::new_v4()))
}

#[tokio::test]
async fn save_then_load_roundtrip() {
    let path = temp_snapshot_path("roundtrip");
    let store = FileSnapshotStore::new(&path);
    let ctx = admin_ctx();

    let mut tower = Tower::new("tower-1", "Torre A");
    tower.add_floor(1);
    let snapshot = Snapshot {
        imported_at_ms: 1_700_000_000_000,
        imported_by: "user-admin".to_string(),
        towers: vec![tower],
        rooms: Vec::new(),
    };

    store.save(&ctx, &snapshot).await.expect("save");
    let loaded = store.load(&ctx).await.expect("load").expect("snapshot");
    assert_eq!(loaded.towers.len(), 1);
    assert_eq!(loaded.towers[0].tower_id, "tower-1");
    assert_eq!(loaded.imported_by, "user-admin");

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn missing_file_is_none() {
    let store = FileSnapshotStore::new(temp_snapshot_path("missing"));
    let loaded = store.load(&admin_ctx()).await.expect("load");
    assert!(loaded.is_none());
    assert!(store.load_at_startup().expect("startup").is_none());
}

#[tokio::test]
async fn save_requires_admin() {
    let store = FileSnapshotStore::new(temp_snapshot_path("gate"));
    let ctx = SessionContext::new("user-1", "Inspetor Um", false);
    let snapshot = Snapshot {
        imported_at_ms: 0,
        imported_by: "user-1".to_string(),
        towers: Vec::new(),
        rooms: Vec::new(),
    };
    let err = store.save(&ctx, &snapshot).await.expect_err("admin gate");
    assert_eq!(err.to_string(), "admin required");
}

#[tokio::test]
async fn corrupt_file_is_an_error() {
    let path = temp_snapshot_path("corrupt");
    std::fs::write(&path, "not json").expect("write");
    let store = FileSnapshotStore::new(&path);
    let err = store.load(&admin_ctx()).await.expect_err("parse error");
    assert!(!err.to_string().is_empty());
    let _ = std::fs::remove_file(&path);
}
