//! 演示数据生成能力
//!
//! 在没有导入数据、也没有远端后端时为内存存储生成一套演示数据：
//!
//! - 两座楼塔：Torre A（1..=8 层）、Torre B（1..=5 层）
//! - 每层固定两个侧翼 Norte/Sul，每个侧翼随机 2..=4 间房
//! - 设备状态与最近巡检时间随机化（巡检时间落在最近 30 天内）
//! - 两个演示账号：管理员 + 巡检员（明文口令，首次登录时升级散列）
//!
//! 随机源为 `StdRng`：给定种子时整套数据可复现。

use domain::{
    Equipment, EquipmentKind, EquipmentStatus, Room, RoomStatus, Tower, Wing,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rms_storage::models::UserRecord;
use std::time::{SystemTime, UNIX_EPOCH};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// 生成参数。
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureConfig {
    /// 随机种子；缺省时走系统熵源。
    pub seed: Option<u64>,
}

/// 生成产出：直接灌入各内存存储。
#[derive(Debug)]
pub struct FixtureSet {
    pub towers: Vec<Tower>,
    pub rooms: Vec<Room>,
    pub users: Vec<UserRecord>,
}

pub fn generate(config: FixtureConfig) -> FixtureSet {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let now_ms = now_epoch_ms();
    let mut towers = Vec::new();
    let mut rooms = Vec::new();

    for (name, floor_count) in [("Torre A", 8), ("Torre B", 5)] {
        let tower_id = new_id();
        let mut tower = Tower::new(tower_id.clone(), name);

        for floor_number in 1..=floor_count {
            tower.add_floor(floor_number);
            let mut floor_seq = 0;
            for wing_name in ["Norte", "Sul"] {
                let wing_id = new_id();
                tower.wings.push(Wing {
                    wing_id: wing_id.clone(),
                    name: wing_name.to_string(),
                    tower_id: tower_id.clone(),
                    floor_number,
                });

                let room_count = rng.gen_range(2..=4);
                for _ in 0..room_count {
                    floor_seq += 1;
                    let number = floor_number * 100 + floor_seq;
                    rooms.push(Room {
                        room_id: new_id(),
                        name: format!("Sala {number}"),
                        number,
                        tower_id: tower_id.clone(),
                        floor_number,
                        wing_id: wing_id.clone(),
                        capacity: rng.gen_range(4..=12),
                        equipments: random_equipments(&mut rng),
                        status: random_room_status(&mut rng),
                        last_inspection_ms: random_last_inspection(&mut rng, now_ms),
                        image_url: None,
                    });
                }
            }
        }

        towers.push(tower);
    }

    FixtureSet {
        towers,
        rooms,
        users: demo_users(),
    }
}

/// 演示账号：口令为明文种子，登录链路负责升级为 argon2 散列。
fn demo_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            user_id: new_id(),
            username: "admin".to_string(),
            display_name: "Administrador".to_string(),
            password: "admin123".to_string(),
            is_admin: true,
        },
        UserRecord {
            user_id: new_id(),
            username: "inspetor".to_string(),
            display_name: "Inspetor de Salas".to_string(),
            password: "inspetor123".to_string(),
            is_admin: false,
        },
    ]
}

/// 基础设备固定存在，其余按概率附加；状态随机。
fn random_equipments(rng: &mut StdRng) -> Vec<Equipment> {
    let mut equipments = vec![
        equipment_with_status(rng, EquipmentKind::HdmiCable),
        equipment_with_status(rng, EquipmentKind::Outlets),
    ];
    for (kind, chance) in [
        (EquipmentKind::Tv, 0.8),
        (EquipmentKind::Remote, 0.7),
        (EquipmentKind::Mtr, 0.4),
        (EquipmentKind::TouchController, 0.4),
        (EquipmentKind::Microphone, 0.5),
        (EquipmentKind::Speaker, 0.5),
        (EquipmentKind::Ac, 0.6),
    ] {
        if rng.gen_bool(chance) {
            equipments.push(equipment_with_status(rng, kind));
        }
    }
    equipments
}

fn equipment_with_status(rng: &mut StdRng, kind: EquipmentKind) -> Equipment {
    let mut equipment = Equipment::with_kind(new_id(), kind);
    equipment.status = match rng.gen_range(0..10) {
        0 => EquipmentStatus::Damaged,
        1 => EquipmentStatus::Maintenance,
        _ => EquipmentStatus::Working,
    };
    equipment
}

fn random_room_status(rng: &mut StdRng) -> RoomStatus {
    match rng.gen_range(0..10) {
        0 => RoomStatus::Maintenance,
        1 | 2 => RoomStatus::Occupied,
        _ => RoomStatus::Available,
    }
}

/// 最近 30 天内的随机时间点；一成左右的房间从未巡检。
fn random_last_inspection(rng: &mut StdRng, now_ms: i64) -> Option<i64> {
    if rng.gen_bool(0.1) {
        return None;
    }
    Some(now_ms - rng.gen_range(0..30 * DAY_MS))
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
