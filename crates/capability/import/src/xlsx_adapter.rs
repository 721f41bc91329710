//! XLSX 导入适配器
//!
//! 第一个工作表，葡语表头：Torre, Ala, Andar, Numero, Nome, Capacidade。
//! 单元格类型（文本/整数/浮点/布尔/公式结果）统一压成字符串后
//! 走与 CSV 相同的缺省策略。

use crate::mapper::{ImportBuilder, RowFields};
use crate::{ImportError, ImportOutcome};
use calamine::{Data, Reader, Xlsx};
use std::collections::HashMap;
use std::io::Cursor;

pub(crate) fn parse(bytes: &[u8]) -> Result<ImportOutcome, ImportError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))
        .map_err(|err| ImportError::Parse(err.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::Empty)?
        .map_err(|err| ImportError::Parse(err.to_string()))?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(headers) => build_header_map(headers),
        None => return Err(ImportError::Empty),
    };

    let mut builder = ImportBuilder::new();
    for row in rows {
        builder.push_row(row_fields(&headers, row));
    }
    builder.finish()
}

fn build_header_map(headers: &[Data]) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| {
            cell_to_string(cell).map(|name| (name.trim().to_lowercase(), index))
        })
        .collect()
}

fn row_fields(headers: &HashMap<String, usize>, row: &[Data]) -> RowFields {
    RowFields {
        tower_id: None,
        tower_name: get_cell(headers, row, "torre"),
        floor_number: get_cell(headers, row, "andar"),
        room_id: None,
        room_number: get_cell(headers, row, "numero"),
        room_name: get_cell(headers, row, "nome"),
        wing_id: None,
        wing_name: get_cell(headers, row, "ala"),
        capacity: get_cell(headers, row, "capacidade"),
        has_tv: None,
        has_remote: None,
        image_url: None,
    }
}

fn get_cell(headers: &HashMap<String, usize>, row: &[Data], name: &str) -> Option<String> {
    let index = *headers.get(name)?;
    row.get(index).and_then(cell_to_string)
}

/// 单元格 → 字符串：整数不带小数尾巴，空单元格视为缺失。
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) => {
            if value.fract() == 0.0 {
                Some(format!("{}", *value as i64))
            } else {
                Some(value.to_string())
            }
        }
        Data::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}
