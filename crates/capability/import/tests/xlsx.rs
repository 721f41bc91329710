//! XLSX 端到端验证：真实 workbook 字节经 calamine 解析后走统一缺省策略。

use rms_import::{ImportError, import_file, import_xlsx};

const SALAS: &[u8] = include_bytes!("data/salas.xlsx");
const SALAS_VAZIO: &[u8] = include_bytes!("data/salas_vazio.xlsx");

#[test]
fn workbook_rows_map_to_towers_and_rooms() {
    let outcome = import_xlsx(SALAS).expect("outcome");

    assert_eq!(outcome.summary.rows, 3);
    assert_eq!(outcome.towers.len(), 2);
    assert_eq!(outcome.rooms.len(), 3);

    let torre_a = outcome
        .towers
        .iter()
        .find(|tower| tower.name == "Torre A")
        .expect("Torre A");
    assert_eq!(torre_a.floors, vec![1]);
    assert_eq!(torre_a.wings.len(), 2);

    let grande = &outcome.rooms[0];
    assert_eq!(grande.number, 101);
    assert_eq!(grande.name, "Sala Grande");
    assert_eq!(grande.capacity, 10);
    let norte = &torre_a.find_wing(1, "Norte").expect("norte").wing_id;
    assert_eq!(&grande.wing_id, norte);

    // 第二数据行缺房间号与名称：顺序缺省补齐，Ala = Sul 落在合成的 Sul 侧翼
    let defaulted = &outcome.rooms[1];
    assert_eq!(defaulted.number, 102);
    assert_eq!(defaulted.name, "Sala 102");
    assert_eq!(defaulted.capacity, 8);
    let sul = &torre_a.find_wing(1, "Sul").expect("sul").wing_id;
    assert_eq!(&defaulted.wing_id, sul);

    let auditorio = &outcome.rooms[2];
    assert_eq!(auditorio.number, 201);
    assert_eq!(auditorio.floor_number, 2);
}

#[test]
fn headers_only_workbook_is_empty() {
    match import_xlsx(SALAS_VAZIO) {
        Err(ImportError::Empty) => {}
        other => panic!("expected Empty, got {other:?}"),
    }
}

#[test]
fn garbage_bytes_are_a_parse_error() {
    match import_xlsx(b"not a workbook") {
        Err(ImportError::Parse(_)) => {}
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn dispatch_accepts_xlsx_extension() {
    let outcome = import_file("salas.xlsx", SALAS).expect("outcome");
    assert_eq!(outcome.summary.rooms, 3);
}
