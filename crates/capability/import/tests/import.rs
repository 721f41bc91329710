//! 导入规范化的行为验证（以 CSV 端到端驱动统一缺省策略）。

use domain::EquipmentKind;
use rms_import::{import_csv, import_file, ImportError};
use std::collections::HashSet;

const HEADER: &str = "towerId,towerName,floorNumber,roomId,roomNumber,roomName,wingId,capacity,hasTV,hasRemote,image";

fn csv(rows: &[&str]) -> Vec<u8> {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.into_bytes()
}

#[test]
fn same_tower_name_resolves_to_one_synthesized_id() {
    let bytes = csv(&[
        ",Torre A,1,,,,,,,,",
        ",torre a,2,,,,,,,,",
        ",Torre A,1,,,,,,,,",
    ]);
    let outcome = import_csv(&bytes).expect("outcome");

    assert_eq!(outcome.towers.len(), 1);
    let tower = &outcome.towers[0];
    assert_eq!(tower.name, "Torre A");
    assert!(outcome.rooms.iter().all(|room| room.room_id != tower.tower_id));
    assert!(outcome.rooms.iter().all(|room| room.tower_id == tower.tower_id));
}

#[test]
fn every_tower_floor_pair_gets_exactly_two_wings() {
    let bytes = csv(&[
        ",Torre A,1,,,,,,,,",
        ",Torre A,1,,,,,,,,",
        ",Torre A,2,,,,,,,,",
        ",Torre B,5,,,,,,,,",
    ]);
    let outcome = import_csv(&bytes).expect("outcome");

    assert_eq!(outcome.summary.wings, 6);
    for tower in &outcome.towers {
        for floor in &tower.floors {
            let names: Vec<&str> = tower
                .wings
                .iter()
                .filter(|wing| wing.floor_number == *floor)
                .map(|wing| wing.name.as_str())
                .collect();
            assert_eq!(names.len(), 2, "floor {floor}");
            assert!(names.contains(&"Norte"));
            assert!(names.contains(&"Sul"));
        }
    }
}

#[test]
fn baseline_equipment_always_present_and_flags_add_tv_remote() {
    let bytes = csv(&[
        ",Torre A,1,,101,,,6,true,1,",
        ",Torre A,1,,102,,,6,false,no,",
        ",Torre A,1,,103,,,6,,,",
    ]);
    let outcome = import_csv(&bytes).expect("outcome");

    let has_kind = |room: &domain::Room, kind: EquipmentKind| {
        room.equipments.iter().any(|eq| eq.kind == kind)
    };

    for room in &outcome.rooms {
        assert!(has_kind(room, EquipmentKind::HdmiCable), "room {}", room.number);
        assert!(has_kind(room, EquipmentKind::Outlets), "room {}", room.number);
    }

    let with_tv = &outcome.rooms[0];
    assert!(has_kind(with_tv, EquipmentKind::Tv));
    assert!(has_kind(with_tv, EquipmentKind::Remote));
    for room in &outcome.rooms[1..] {
        assert!(!has_kind(room, EquipmentKind::Tv));
        assert!(!has_kind(room, EquipmentKind::Remote));
        assert_eq!(room.equipments.len(), 2);
    }
}

#[test]
fn empty_file_is_a_single_error_with_no_output() {
    let bytes = csv(&[]);
    match import_csv(&bytes) {
        Err(ImportError::Empty) => {}
        other => panic!("expected Empty, got {other:?}"),
    }
}

#[test]
fn repeated_runs_yield_independent_room_ids() {
    let bytes = csv(&[",Torre A,1,,101,,,6,,,", ",Torre A,1,,102,,,6,,,"]);
    let first = import_csv(&bytes).expect("first run");
    let second = import_csv(&bytes).expect("second run");

    let first_ids: HashSet<String> = first.rooms.iter().map(|r| r.room_id.clone()).collect();
    let second_ids: HashSet<String> = second.rooms.iter().map(|r| r.room_id.clone()).collect();
    assert!(first_ids.is_disjoint(&second_ids));
}

#[test]
fn generated_ids_are_nonempty_and_collision_free() {
    let rows: Vec<String> = (0..40).map(|_| ",,,,,,,,,,".to_string()).collect();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let outcome = import_csv(&csv(&refs)).expect("outcome");

    let mut seen = HashSet::new();
    for tower in &outcome.towers {
        assert!(!tower.tower_id.is_empty());
        assert!(seen.insert(tower.tower_id.clone()));
        for wing in &tower.wings {
            assert!(!wing.wing_id.is_empty());
            assert!(seen.insert(wing.wing_id.clone()));
        }
    }
    for room in &outcome.rooms {
        assert!(!room.room_id.is_empty());
        assert!(seen.insert(room.room_id.clone()));
        for equipment in &room.equipments {
            assert!(!equipment.equipment_id.is_empty());
            assert!(seen.insert(equipment.equipment_id.clone()));
        }
    }
}

#[test]
fn explicit_wing_id_is_preserved_even_when_dangling() {
    let bytes = csv(&[",Torre A,1,,101,,wing-legacy-42,6,,,"]);
    let outcome = import_csv(&bytes).expect("outcome");

    assert_eq!(outcome.rooms[0].wing_id, "wing-legacy-42");
    // 合成的两个侧翼照常存在，但没有房间指向它们
    assert_eq!(outcome.towers[0].wings.len(), 2);
}

#[test]
fn missing_fields_default_deterministically() {
    let bytes = csv(&[",,3,,,,,,,,", ",,3,,,,,,,,"]);
    let outcome = import_csv(&bytes).expect("outcome");

    assert_eq!(outcome.towers[0].name, "Torre Importada");
    assert_eq!(outcome.rooms[0].number, 301);
    assert_eq!(outcome.rooms[1].number, 302);
    assert_eq!(outcome.rooms[0].name, "Sala 301");
    assert_eq!(outcome.rooms[0].capacity, 4);
    assert_eq!(outcome.rooms[1].capacity, 5);
}

#[test]
fn extreme_floor_value_defaults_without_panicking() {
    let bytes = csv(&[",Torre A,30000000,,,,,,,,", ",Torre B,-30000000,,,,,,,,"]);
    let outcome = import_csv(&bytes).expect("outcome");

    // 房间号缺省 = 楼层*100 + 序号，对极端楼层值饱和而不回绕
    assert_eq!(outcome.rooms[0].number, i32::MAX);
    assert_eq!(outcome.rooms[1].number, i32::MIN + 1);
}

#[test]
fn dispatch_rejects_unknown_extension() {
    match import_file("plan.pdf", b"whatever") {
        Err(ImportError::UnsupportedFormat(name)) => assert_eq!(name, "plan.pdf"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn summary_counts_rows_towers_wings_rooms() {
    let bytes = csv(&[
        ",Torre A,1,,,,,,,,",
        ",Torre A,2,,,,,,,,",
        ",Torre B,1,,,,,,,,",
    ]);
    let outcome = import_csv(&bytes).expect("outcome");

    assert_eq!(outcome.summary.rows, 3);
    assert_eq!(outcome.summary.towers, 2);
    assert_eq!(outcome.summary.wings, 6);
    assert_eq!(outcome.summary.rooms, 3);
}
