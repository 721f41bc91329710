//! 行映射器：RowFields 规范形 + ImportBuilder 缺省策略
//!
//! 两种适配器把各自的表头 schema 压平成 `RowFields`，再交给同一个
//! `ImportBuilder` 应用统一的确定性缺省策略：
//!
//! - 楼塔按标识去重：首次出现确定名称；同键的后续行只补充楼层
//! - 每个新出现的 (楼塔, 楼层) 无条件合成两个侧翼 Norte/Sul（固定策略，不从数据推断）
//! - 房间固定携带 HDMI 线 + 插座；TV/遥控器只在源标志为真值（"true"/"1"）时附加
//! - 行内显式给出的 wing_id 原样保留，不做引用校验（可能悬空）
//! - 缺失字段按顺序缺省补齐：房间号 = 楼层*100 + 序号，容量 = 4..=12 有界循环
//!
//! 生成的标识一律为 UUID v4：单次运行内不碰撞，跨运行不复用
//! （同一文件重复导入会得到两套独立的房间 ID）。

use crate::{ImportError, ImportOutcome, ImportSummary};
use domain::{Equipment, EquipmentKind, Room, RoomStatus, Tower, Wing};
use std::collections::HashMap;

const WING_NORTH: &str = "Norte";
const WING_SOUTH: &str = "Sul";

/// 一行导入数据的规范形（均为可缺省的字符串字段）。
#[derive(Debug, Clone, Default)]
pub struct RowFields {
    pub tower_id: Option<String>,
    pub tower_name: Option<String>,
    pub floor_number: Option<String>,
    pub room_id: Option<String>,
    pub room_number: Option<String>,
    pub room_name: Option<String>,
    pub wing_id: Option<String>,
    pub wing_name: Option<String>,
    pub capacity: Option<String>,
    pub has_tv: Option<String>,
    pub has_remote: Option<String>,
    pub image_url: Option<String>,
}

/// 真值标志解析：仅 "true" 与 "1"（忽略大小写与首尾空白）为真。
fn parse_truthy(value: Option<&str>) -> bool {
    match value {
        Some(value) => {
            let trimmed = value.trim();
            trimmed.eq_ignore_ascii_case("true") || trimmed == "1"
        }
        None => false,
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn parse_i32(value: Option<&str>) -> Option<i32> {
    let value = value?.trim();
    if let Ok(parsed) = value.parse::<i32>() {
        return Some(parsed);
    }
    // XLSX 数字单元格可能带 ".0" 浮点尾巴
    value
        .parse::<f64>()
        .ok()
        .filter(|f| f.fract() == 0.0)
        .map(|f| f as i32)
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 单次导入的累积状态。
#[derive(Default)]
pub struct ImportBuilder {
    towers: Vec<Tower>,
    tower_slots: HashMap<String, usize>,
    name_keys: HashMap<String, String>,
    wing_pairs: HashMap<(String, i32), (String, String)>,
    room_seq: HashMap<(String, i32), i32>,
    rooms: Vec<Room>,
    row_count: usize,
    wing_count: usize,
}

impl ImportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一行；残缺字段按缺省策略静默补齐，从不拒绝。
    pub fn push_row(&mut self, row: RowFields) {
        self.row_count += 1;

        let (tower_id, tower_slot) = self.resolve_tower(&row);
        let floor_number = parse_i32(non_empty(row.floor_number.as_ref())).unwrap_or(1);

        let (north_id, south_id) = self.ensure_wings(&tower_id, tower_slot, floor_number);

        let seq = self
            .room_seq
            .entry((tower_id.clone(), floor_number))
            .or_insert(0);
        *seq += 1;
        let seq = *seq;

        // 楼层值来自外部文件，缺省运算必须饱和而非溢出
        let number = parse_i32(non_empty(row.room_number.as_ref()))
            .unwrap_or_else(|| floor_number.saturating_mul(100).saturating_add(seq));
        let name = non_empty(row.room_name.as_ref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Sala {number}"));
        let capacity =
            parse_i32(non_empty(row.capacity.as_ref())).unwrap_or(4 + (seq - 1) % 9);
        let room_id = non_empty(row.room_id.as_ref())
            .map(str::to_string)
            .unwrap_or_else(new_id);

        // 行内显式 wing_id 原样保留（可能悬空）；否则按 Ala 名称挑合成侧翼
        let wing_id = match non_empty(row.wing_id.as_ref()) {
            Some(explicit) => explicit.to_string(),
            None => {
                let wants_south = non_empty(row.wing_name.as_ref())
                    .map(|name| name.eq_ignore_ascii_case(WING_SOUTH))
                    .unwrap_or(false);
                if wants_south { south_id } else { north_id }
            }
        };

        let mut equipments = vec![
            Equipment::with_kind(new_id(), EquipmentKind::HdmiCable),
            Equipment::with_kind(new_id(), EquipmentKind::Outlets),
        ];
        if parse_truthy(row.has_tv.as_deref()) {
            equipments.push(Equipment::with_kind(new_id(), EquipmentKind::Tv));
        }
        if parse_truthy(row.has_remote.as_deref()) {
            equipments.push(Equipment::with_kind(new_id(), EquipmentKind::Remote));
        }

        self.rooms.push(Room {
            room_id,
            name,
            number,
            tower_id,
            floor_number,
            wing_id,
            capacity,
            equipments,
            status: RoomStatus::Available,
            last_inspection_ms: None,
            image_url: non_empty(row.image_url.as_ref()).map(str::to_string),
        });
    }

    /// 结束并产出：没有任何数据行时报单条 Empty 错误。
    pub fn finish(self) -> Result<ImportOutcome, ImportError> {
        if self.row_count == 0 {
            return Err(ImportError::Empty);
        }
        let summary = ImportSummary {
            rows: self.row_count,
            towers: self.towers.len(),
            wings: self.wing_count,
            rooms: self.rooms.len(),
        };
        Ok(ImportOutcome {
            towers: self.towers,
            rooms: self.rooms,
            summary,
        })
    }

    /// 楼塔去重：显式 ID 优先，其次名称键；两者皆缺用合成名称。
    /// 同名行在一次运行内得到同一个合成标识（首次出现确定名称）。
    fn resolve_tower(&mut self, row: &RowFields) -> (String, usize) {
        if let Some(explicit) = non_empty(row.tower_id.as_ref()) {
            let explicit = explicit.to_string();
            if let Some(slot) = self.tower_slots.get(&explicit) {
                return (explicit, *slot);
            }
            let name = non_empty(row.tower_name.as_ref())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Torre {explicit}"));
            return self.insert_tower(explicit, name);
        }

        let name = non_empty(row.tower_name.as_ref())
            .map(str::to_string)
            .unwrap_or_else(|| "Torre Importada".to_string());
        let name_key = name.to_lowercase();
        if let Some(tower_id) = self.name_keys.get(&name_key) {
            let tower_id = tower_id.clone();
            let slot = self.tower_slots[&tower_id];
            return (tower_id, slot);
        }
        let tower_id = new_id();
        self.name_keys.insert(name_key, tower_id.clone());
        self.insert_tower(tower_id, name)
    }

    fn insert_tower(&mut self, tower_id: String, name: String) -> (String, usize) {
        let slot = self.towers.len();
        self.towers.push(Tower::new(tower_id.clone(), name));
        self.tower_slots.insert(tower_id.clone(), slot);
        (tower_id, slot)
    }

    /// 为新出现的 (楼塔, 楼层) 合成 Norte/Sul 两个侧翼并登记楼层。
    fn ensure_wings(&mut self, tower_id: &str, tower_slot: usize, floor_number: i32) -> (String, String) {
        let key = (tower_id.to_string(), floor_number);
        if let Some((north, south)) = self.wing_pairs.get(&key) {
            return (north.clone(), south.clone());
        }

        let tower = &mut self.towers[tower_slot];
        tower.add_floor(floor_number);

        let north_id = new_id();
        let south_id = new_id();
        tower.wings.push(Wing {
            wing_id: north_id.clone(),
            name: WING_NORTH.to_string(),
            tower_id: tower_id.to_string(),
            floor_number,
        });
        tower.wings.push(Wing {
            wing_id: south_id.clone(),
            name: WING_SOUTH.to_string(),
            tower_id: tower_id.to_string(),
            floor_number,
        });
        self.wing_count += 2;

        self.wing_pairs
            .insert(key, (north_id.clone(), south_id.clone()));
        (north_id, south_id)
    }
}
