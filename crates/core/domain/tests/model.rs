use domain::{Equipment, EquipmentKind, EquipmentStatus, Tower, Wing};

#[test]
fn tower_floors_deduplicate_and_sort() {
    let mut tower = Tower::new("tower-1", "Torre A");
    tower.add_floor(3);
    tower.add_floor(1);
    tower.add_floor(3);
    tower.add_floor(2);

    assert_eq!(tower.floors, vec![1, 2, 3]);
}

#[test]
fn find_wing_matches_floor_and_name() {
    let mut tower = Tower::new("tower-1", "Torre A");
    tower.wings.push(Wing {
        wing_id: "wing-1".to_string(),
        name: "Norte".to_string(),
        tower_id: "tower-1".to_string(),
        floor_number: 2,
    });

    assert!(tower.find_wing(2, "Norte").is_some());
    assert!(tower.find_wing(2, "Sul").is_none());
    assert!(tower.find_wing(3, "Norte").is_none());
}

#[test]
fn equipment_with_kind_starts_unknown() {
    let equipment = Equipment::with_kind("eq-1", EquipmentKind::HdmiCable);

    assert_eq!(equipment.status, EquipmentStatus::Unknown);
    assert_eq!(equipment.name, "Cabo HDMI");
    assert!(equipment.last_checked_ms.is_none());
}

#[test]
fn legacy_hdmi_label_maps_to_hdmi_cable() {
    let kind: EquipmentKind = serde_json::from_str("\"hdmi\"").expect("decode");
    assert_eq!(kind, EquipmentKind::HdmiCable);

    let encoded = serde_json::to_string(&EquipmentKind::HdmiCable).expect("encode");
    assert_eq!(encoded, "\"hdmi-cable\"");
}

#[test]
fn legacy_kinds_still_decode() {
    for label in ["\"ac\"", "\"door\"", "\"window\"", "\"light\""] {
        let _: EquipmentKind = serde_json::from_str(label).expect("legacy label");
    }
}
