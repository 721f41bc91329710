//! CSV 导入适配器
//!
//! 表头行 + 数据行；列名：towerId, towerName, floorNumber, roomId,
//! roomNumber, roomName, wingId, capacity, hasTV, hasRemote, image。
//! 表头按小写建索引，未知列忽略，缺失列走缺省策略。

use crate::mapper::{ImportBuilder, RowFields};
use crate::{ImportError, ImportOutcome};
use csv::ReaderBuilder;
use std::collections::HashMap;

pub(crate) fn parse(bytes: &[u8]) -> Result<ImportOutcome, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|err| ImportError::Parse(err.to_string()))?
        .clone();
    let header_map = build_header_map(&headers);

    let mut builder = ImportBuilder::new();
    for result in reader.records() {
        let row = match result {
            Ok(record) => RowFields {
                tower_id: get_field(&record, &header_map, "towerid"),
                tower_name: get_field(&record, &header_map, "towername"),
                floor_number: get_field(&record, &header_map, "floornumber"),
                room_id: get_field(&record, &header_map, "roomid"),
                room_number: get_field(&record, &header_map, "roomnumber"),
                room_name: get_field(&record, &header_map, "roomname"),
                wing_id: get_field(&record, &header_map, "wingid"),
                wing_name: None,
                capacity: get_field(&record, &header_map, "capacity"),
                has_tv: get_field(&record, &header_map, "hastv"),
                has_remote: get_field(&record, &header_map, "hasremote"),
                image_url: get_field(&record, &header_map, "image"),
            },
            // 畸形行不拒绝：全缺省补齐
            Err(err) => {
                tracing::warn!("csv row skipped to defaults: {err}");
                RowFields::default()
            }
        };
        builder.push_row(row);
    }

    builder.finish()
}

fn build_header_map(headers: &csv::StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.trim().to_lowercase(), index))
        .collect()
}

fn get_field(
    record: &csv::StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Option<String> {
    let index = *header_map.get(name)?;
    record
        .get(index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
