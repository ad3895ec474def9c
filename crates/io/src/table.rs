use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use stagger_runtime::Registry;
use stagger_types::{DIM2, DIM3, FieldKindId, OffsetVector};

use crate::error::IoError;

/// 1 つの `(cell, field, dim)` の位置テーブル。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub cell: String,
    pub field: String,
    pub dim: usize,
    /// 成分ごとのセル内オフセット。
    pub offsets: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionTable {
    pub records: Vec<PositionRecord>,
}

impl PositionTable {
    pub fn find(&self, cell: &str, field: FieldKindId, dim: usize) -> Option<&PositionRecord> {
        self.records
            .iter()
            .find(|r| r.cell == cell && r.field == field.name() && r.dim == dim)
    }

    /// 各レコードの種別・次元・成分数・値域を検証する。
    pub fn validate(&self) -> Result<(), IoError> {
        for (index, record) in self.records.iter().enumerate() {
            let kind: FieldKindId = record
                .field
                .parse()
                .map_err(|source| IoError::Field { index, source })?;

            if record.dim != DIM2 && record.dim != DIM3 {
                return Err(IoError::UnsupportedDim {
                    index,
                    dim: record.dim,
                });
            }

            if record.offsets.len() != kind.components() {
                return Err(IoError::ComponentCount {
                    index,
                    field: record.field.clone(),
                    expected: kind.components(),
                    got: record.offsets.len(),
                });
            }

            for (component, row) in record.offsets.iter().enumerate() {
                if row.len() != record.dim {
                    return Err(IoError::AxisCount {
                        index,
                        component,
                        dim: record.dim,
                        got: row.len(),
                    });
                }
                check_in_cell(row).map_err(|source| IoError::Field { index, source })?;
            }
        }
        Ok(())
    }
}

fn check_in_cell(row: &[f64]) -> Result<(), stagger_types::TypesError> {
    match *row {
        [x, y] => OffsetVector::try_new([x, y]).map(|_| ()),
        [x, y, z] => OffsetVector::try_new([x, y, z]).map(|_| ()),
        // 軸数は呼び出し側で検証済み
        _ => Ok(()),
    }
}

/// レジストリの内容を `(cell, kind, dim)` 順のテーブルにする。
pub fn collect_table(registry: &Registry) -> PositionTable {
    let records: Vec<PositionRecord> = registry
        .sorted()
        .into_iter()
        .map(|d| PositionRecord {
            cell: d.cell.to_string(),
            field: d.kind.name().to_string(),
            dim: d.dim,
            offsets: (d.offsets)(),
        })
        .collect();
    debug!(records = records.len(), "collected position table");
    PositionTable { records }
}

pub fn to_json(table: &PositionTable) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// JSON からテーブルを読み込み、検証する。
pub fn from_json(json: &str) -> Result<PositionTable, IoError> {
    let table: PositionTable = serde_json::from_str(json)?;
    table.validate()?;
    Ok(table)
}

pub fn write_table(path: impl AsRef<Path>, table: &PositionTable) -> Result<(), IoError> {
    let path = path.as_ref();
    let json = to_json(table)?;
    fs::write(path, json).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), records = table.records.len(), "wrote position table");
    Ok(())
}

pub fn read_table(path: impl AsRef<Path>) -> Result<PositionTable, IoError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table = from_json(&json)?;
    debug!(path = %path.display(), records = table.records.len(), "read position table");
    Ok(table)
}
