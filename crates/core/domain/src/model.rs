//! 领域模型
//!
//! 定义楼宇巡检的核心数据记录：
//! - 楼宇层级：Tower（楼塔）→ Wing（侧翼）→ Room（房间）
//! - 房间内设备：Equipment（含状态枚举）
//! - 巡检记录：Inspection + Photo
//!
//! 所有时间戳均为 epoch 毫秒（i64）。
//! 记录均可 JSON 序列化（本地快照文件、DTO 转换均依赖此）。

use serde::{Deserialize, Serialize};

/// 楼塔记录。
///
/// 约束：wings 的 tower_id 必须引用本楼塔；floors 去重且升序。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub tower_id: String,
    pub name: String,
    pub floors: Vec<i32>,
    pub wings: Vec<Wing>,
}

impl Tower {
    /// 创建无楼层的空楼塔。
    pub fn new(tower_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tower_id: tower_id.into(),
            name: name.into(),
            floors: Vec::new(),
            wings: Vec::new(),
        }
    }

    /// 登记楼层（去重并保持升序）。
    pub fn add_floor(&mut self, floor_number: i32) {
        if !self.floors.contains(&floor_number) {
            self.floors.push(floor_number);
            self.floors.sort_unstable();
        }
    }

    /// 查找指定楼层上名称匹配的侧翼。
    pub fn find_wing(&self, floor_number: i32, name: &str) -> Option<&Wing> {
        self.wings
            .iter()
            .find(|wing| wing.floor_number == floor_number && wing.name == name)
    }
}

/// 侧翼记录：一个楼塔某一层的子区域。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wing {
    pub wing_id: String,
    pub name: String,
    pub tower_id: String,
    pub floor_number: i32,
}

/// 房间状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Inactive,
}

/// 房间记录：归属一个楼塔/楼层/侧翼的可巡检单元。
///
/// wing_id 不做引用校验：导入行显式指定的 wing_id 原样保留，可能悬空。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub room_id: String,
    pub name: String,
    pub number: i32,
    pub tower_id: String,
    pub floor_number: i32,
    pub wing_id: String,
    pub capacity: i32,
    pub equipments: Vec<Equipment>,
    pub status: RoomStatus,
    pub last_inspection_ms: Option<i64>,
    pub image_url: Option<String>,
}

/// 设备类型。
///
/// 旧快照中存在的历史类型（ac/door/window/light）保留为独立变体；
/// 历史标签 "hdmi" 在反序列化时归并到 HdmiCable。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentKind {
    Tv,
    Remote,
    Batteries,
    #[serde(alias = "hdmi")]
    HdmiCable,
    Mtr,
    Hub,
    TouchController,
    Outlets,
    Filter,
    Microphone,
    Speaker,
    Ac,
    Door,
    Window,
    Light,
}

impl EquipmentKind {
    /// 默认展示名（导入时无名称列可用）。
    pub fn default_name(&self) -> &'static str {
        match self {
            EquipmentKind::Tv => "TV",
            EquipmentKind::Remote => "Controle remoto",
            EquipmentKind::Batteries => "Pilhas",
            EquipmentKind::HdmiCable => "Cabo HDMI",
            EquipmentKind::Mtr => "MTR",
            EquipmentKind::Hub => "Hub",
            EquipmentKind::TouchController => "Touch controller",
            EquipmentKind::Outlets => "Tomadas",
            EquipmentKind::Filter => "Filtro de linha",
            EquipmentKind::Microphone => "Microfone",
            EquipmentKind::Speaker => "Caixa de som",
            EquipmentKind::Ac => "Ar condicionado",
            EquipmentKind::Door => "Porta",
            EquipmentKind::Window => "Janela",
            EquipmentKind::Light => "Iluminação",
        }
    }
}

/// 设备状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentStatus {
    Working,
    Damaged,
    Maintenance,
    Unknown,
}

/// 设备记录：房间内可追踪的器材。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub equipment_id: String,
    pub kind: EquipmentKind,
    pub name: String,
    pub status: EquipmentStatus,
    pub last_checked_ms: Option<i64>,
}

impl Equipment {
    /// 以默认名称与未知状态创建设备。
    pub fn with_kind(equipment_id: impl Into<String>, kind: EquipmentKind) -> Self {
        Self {
            equipment_id: equipment_id.into(),
            kind,
            name: kind.default_name().to_string(),
            status: EquipmentStatus::Unknown,
            last_checked_ms: None,
        }
    }
}

/// 巡检状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InspectionStatus {
    Pending,
    InProgress,
    Completed,
    IssuesFound,
}

/// 巡检记录：针对一个房间的带照片/备注的巡检。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspection {
    pub inspection_id: String,
    pub room_id: String,
    pub inspector_id: String,
    pub date_ms: i64,
    pub notes: String,
    pub photos: Vec<Photo>,
    pub status: InspectionStatus,
}

/// 照片分类标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhotoKind {
    DoorPlate,
    Environment,
    EquipmentDetail,
}

/// 巡检照片：data URL 或远端 URL。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub photo_id: String,
    pub url: String,
    pub caption: Option<String>,
    pub equipment_id: Option<String>,
    pub taken_at_ms: i64,
    pub kind: Option<PhotoKind>,
    pub equipment_working: Option<bool>,
}
