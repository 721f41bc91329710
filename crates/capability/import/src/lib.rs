//! 导入规范化能力
//!
//! 将半结构化的表格文件（CSV / XLSX）单趟映射为领域模型：
//! 楼塔（含侧翼）集合 + 房间（含设备）集合。
//!
//! 两种适配器共享同一套确定性缺省策略（见 `mapper`）：
//! 历史实现中 CSV 用顺序缺省、XLSX 用随机缺省，导致同样残缺的
//! 输入按文件格式产生不同形状的数据，此处统一为顺序缺省。
//!
//! 错误模型刻意扁平：空文件/无法解析的文件返回单条用户可见错误；
//! 残缺的行不报错，静默按缺省策略补齐。无流式处理，整文件驻留内存。

mod csv_adapter;
mod mapper;
mod xlsx_adapter;

pub use mapper::{ImportBuilder, RowFields};

use domain::{Room, Tower};

/// 导入错误。
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("empty import: no data rows")]
    Empty,
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// 单次导入的产出摘要。
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportSummary {
    pub rows: usize,
    pub towers: usize,
    pub wings: usize,
    pub rooms: usize,
}

/// 单次导入的完整产出（原子返回，无部分结果）。
#[derive(Debug)]
pub struct ImportOutcome {
    pub towers: Vec<Tower>,
    pub rooms: Vec<Room>,
    pub summary: ImportSummary,
}

/// 解析 CSV 文件（英文表头 towerId/roomNumber/hasTV 等）。
pub fn import_csv(bytes: &[u8]) -> Result<ImportOutcome, ImportError> {
    csv_adapter::parse(bytes)
}

/// 解析 XLSX 文件（葡语表头 Torre/Ala/Andar 等，取第一个工作表）。
pub fn import_xlsx(bytes: &[u8]) -> Result<ImportOutcome, ImportError> {
    xlsx_adapter::parse(bytes)
}

/// 按文件扩展名分发适配器。
pub fn import_file(file_name: &str, bytes: &[u8]) -> Result<ImportOutcome, ImportError> {
    let extension = file_name
        .rsplit('.')
        .next()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => import_csv(bytes),
        "xlsx" => import_xlsx(bytes),
        _ => Err(ImportError::UnsupportedFormat(file_name.to_string())),
    }
}
