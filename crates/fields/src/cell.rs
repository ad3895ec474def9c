//! 数値セル型（格子スタガリング方式）の差し替え点。
//!
//! フィールド位置の問い合わせはセル型 `C` を経由し、`C: CellFieldPosition<K, D>` の
//! 関連型 `Table` が実際の位置テーブルを与える。既定の [`YeeCell`] は
//! [`FieldPosition`] の特殊化テーブルをそのまま使う。
use std::fmt::Debug;

use crate::position::{FieldPosition, Position};

/// 格子スタガリング方式を表すマーカー型が実装する trait。
pub trait NumericalCellType: Copy + Default + Debug + 'static {
    const NAME: &'static str;
}

/// セル型 `Self` におけるフィールド種別 `K`・次元 `D` の位置テーブル。
pub trait CellFieldPosition<K, D>: NumericalCellType {
    type Table: Position;
}

/// Yee セル。E は辺中心、B は面中心に配置する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct YeeCell;

impl NumericalCellType for YeeCell {
    const NAME: &'static str = "YeeCell";
}

impl<K, D> CellFieldPosition<K, D> for YeeCell
where
    FieldPosition<K, D>: Position,
{
    type Table = FieldPosition<K, D>;
}

stagger_meta::plain_pair!(YeeCell);

stagger_meta::alias!(
    /// 数値セル型を束縛するエイリアス名。
    pub CellScheme
);

/// セル型 `C` における `(K, D)` の位置テーブル型。
pub type CellPosition<C, K, D> = <C as CellFieldPosition<K, D>>::Table;

/// セル型 `C` を経由した位置テーブルの値。
#[inline]
pub const fn cell_field_position<C, K, D>() -> <CellPosition<C, K, D> as Position>::Output
where
    C: CellFieldPosition<K, D>,
{
    <CellPosition<C, K, D> as Position>::POSITIONS
}
