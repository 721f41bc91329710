use domain::{
    Equipment, EquipmentKind, EquipmentStatus, Inspection, InspectionStatus, Photo, PhotoKind,
    Room, RoomStatus, SessionContext, Tower, Wing,
};
use rms_storage::{
    InMemoryInspectionStore, InMemoryRoomStore, InMemoryTowerStore, InMemoryUserStore,
    InspectionStore, RoomStore, TowerStore, UserRecord, UserStore,
};

fn admin_ctx() -> SessionContext {
    SessionContext::new("user-admin", "Administrador", true)
}

fn inspector_ctx() -> SessionContext {
    SessionContext::new("user-1", "Inspetor Um", false)
}

fn sample_tower() -> Tower {
    let mut tower = Tower::new("tower-1", "Torre A");
    tower.add_floor(1);
    tower.wings.push(Wing {
        wing_id: "wing-1".to_string(),
        name: "Norte".to_string(),
        tower_id: "tower-1".to_string(),
        floor_number: 1,
    });
    tower
}

fn sample_room(room_id: &str, floor: i32, wing: &str, number: i32) -> Room {
    Room {
        room_id: room_id.to_string(),
        name: format!("Sala {number}"),
        number,
        tower_id: "tower-1".to_string(),
        floor_number: floor,
        wing_id: wing.to_string(),
        capacity: 8,
        equipments: vec![Equipment::with_kind("eq-1", EquipmentKind::HdmiCable)],
        status: RoomStatus::Available,
        last_inspection_ms: None,
        image_url: None,
    }
}

#[tokio::test]
async fn find_seeded_user() {
    let store = InMemoryUserStore::with_users(vec![UserRecord {
        user_id: "user-admin".to_string(),
        username: "admin".to_string(),
        display_name: "Administrador".to_string(),
        password: "admin123".to_string(),
        is_admin: true,
    }]);
    let ctx = SessionContext::default();
    let user = store
        .find_by_username(&ctx, "admin")
        .await
        .expect("query")
        .expect("admin");
    assert_eq!(user.username, "admin");
    assert!(user.is_admin);
}

#[tokio::test]
async fn replace_all_requires_admin() {
    let store = InMemoryTowerStore::new();
    let err = store
        .replace_all(&inspector_ctx(), vec![sample_tower()])
        .await
        .expect_err("admin gate");
    assert_eq!(err.to_string(), "admin required");

    let count = store
        .replace_all(&admin_ctx(), vec![sample_tower()])
        .await
        .expect("replace");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn replace_all_swaps_previous_set() {
    let store = InMemoryTowerStore::with_towers(vec![sample_tower()]);
    let mut other = Tower::new("tower-2", "Torre B");
    other.add_floor(1);

    let count = store
        .replace_all(&admin_ctx(), vec![other])
        .await
        .expect("replace");
    assert_eq!(count, 1);

    let towers = store.list_towers(&inspector_ctx()).await.expect("list");
    assert_eq!(towers.len(), 1);
    assert_eq!(towers[0].tower_id, "tower-2");
}

#[tokio::test]
async fn list_rooms_filters_by_floor_and_wing() {
    let store = InMemoryRoomStore::with_rooms(vec![
        sample_room("room-1", 1, "wing-n1", 101),
        sample_room("room-2", 1, "wing-s1", 102),
        sample_room("room-3", 2, "wing-n2", 201),
    ]);
    let ctx = inspector_ctx();

    let all = store
        .list_rooms(&ctx, "tower-1", None, None)
        .await
        .expect("list");
    assert_eq!(all.len(), 3);

    let floor_one = store
        .list_rooms(&ctx, "tower-1", Some(1), None)
        .await
        .expect("list");
    assert_eq!(floor_one.len(), 2);

    let north = store
        .list_rooms(&ctx, "tower-1", Some(1), Some("wing-n1"))
        .await
        .expect("list");
    assert_eq!(north.len(), 1);
    assert_eq!(north[0].room_id, "room-1");
}

#[tokio::test]
async fn update_equipment_status_touches_timestamp() {
    let store = InMemoryRoomStore::with_rooms(vec![sample_room("room-1", 1, "wing-n1", 101)]);
    let ctx = inspector_ctx();

    let room = store
        .update_equipment_status(&ctx, "room-1", "eq-1", EquipmentStatus::Damaged, 1_700_000_000_000)
        .await
        .expect("update")
        .expect("room");
    let equipment = &room.equipments[0];
    assert_eq!(equipment.status, EquipmentStatus::Damaged);
    assert_eq!(equipment.last_checked_ms, Some(1_700_000_000_000));

    let missing = store
        .update_equipment_status(&ctx, "room-1", "eq-x", EquipmentStatus::Working, 1)
        .await
        .expect("update");
    assert!(missing.is_none());
}

#[tokio::test]
async fn anonymous_context_is_rejected() {
    let store = InMemoryRoomStore::new();
    let err = store
        .list_rooms(&SessionContext::default(), "tower-1", None, None)
        .await
        .expect_err("no session");
    assert_eq!(err.to_string(), "user_id required");
}

fn sample_inspection(inspection_id: &str, room_id: &str, date_ms: i64) -> Inspection {
    Inspection {
        inspection_id: inspection_id.to_string(),
        room_id: room_id.to_string(),
        inspector_id: "user-1".to_string(),
        date_ms,
        notes: String::new(),
        photos: Vec::new(),
        status: InspectionStatus::Pending,
    }
}

#[tokio::test]
async fn inspections_list_newest_first() {
    let store = InMemoryInspectionStore::new();
    let ctx = inspector_ctx();
    for (id, date_ms) in [("insp-1", 100), ("insp-2", 300), ("insp-3", 200)] {
        store
            .create_inspection(&ctx, sample_inspection(id, "room-1", date_ms))
            .await
            .expect("create");
    }
    store
        .create_inspection(&ctx, sample_inspection("insp-4", "room-2", 400))
        .await
        .expect("create");

    let items = store.list_inspections(&ctx, "room-1").await.expect("list");
    let ids: Vec<&str> = items.iter().map(|i| i.inspection_id.as_str()).collect();
    assert_eq!(ids, vec!["insp-2", "insp-3", "insp-1"]);
}

#[tokio::test]
async fn duplicate_inspection_id_is_rejected() {
    let store = InMemoryInspectionStore::new();
    let ctx = inspector_ctx();
    store
        .create_inspection(&ctx, sample_inspection("insp-1", "room-1", 100))
        .await
        .expect("create");
    let err = store
        .create_inspection(&ctx, sample_inspection("insp-1", "room-1", 200))
        .await
        .expect_err("duplicate");
    assert_eq!(err.to_string(), "inspection exists");
}

#[tokio::test]
async fn photo_append_and_status_update() {
    let store = InMemoryInspectionStore::new();
    let ctx = inspector_ctx();
    store
        .create_inspection(&ctx, sample_inspection("insp-1", "room-1", 100))
        .await
        .expect("create");

    let photo = Photo {
        photo_id: "photo-1".to_string(),
        url: "https://cdn.example.com/photo-1.jpg".to_string(),
        caption: None,
        equipment_id: None,
        taken_at_ms: 150,
        kind: Some(PhotoKind::DoorPlate),
        equipment_working: None,
    };
    let updated = store
        .add_photo(&ctx, "insp-1", photo)
        .await
        .expect("append")
        .expect("inspection");
    assert_eq!(updated.photos.len(), 1);

    let updated = store
        .update_status(&ctx, "insp-1", InspectionStatus::Completed)
        .await
        .expect("update")
        .expect("inspection");
    assert_eq!(updated.status, InspectionStatus::Completed);

    let found = store
        .find_inspection(&ctx, "insp-1")
        .await
        .expect("find")
        .expect("inspection");
    assert_eq!(found.photos.len(), 1);
    assert!(store
        .find_inspection(&ctx, "insp-x")
        .await
        .expect("find")
        .is_none());
}
