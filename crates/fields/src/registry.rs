//! 位置テーブル記述の提出。
//!
//! 各セル型は [`register_position!`](crate::register_position!) で `(cell, kind, dim)` ごとの
//! 記述を提出し、[`registry`] がリンクされた全記述を集める。下流クレートのセル型も同じ方法で
//! レジストリ・JSON 出力に現れる。
use stagger_runtime::{Registry, RegistryError};
use stagger_types::{Dim2, Dim3};

use crate::cell::YeeCell;
use crate::kind::{FieldB, FieldE, FieldJ, FieldTmp};

#[doc(hidden)]
pub mod __private {
    pub use stagger_runtime::{PositionDescriptor, inventory};
    pub use typenum::Unsigned;
}

/// セル型 `$cell` におけるフィールド種別 `$kind`・次元 `$dim` の記述を提出する。
///
/// `$cell: CellFieldPosition<$kind, $dim>` でなければコンパイルエラーになる。
#[macro_export]
macro_rules! register_position {
    ($cell:ty, $kind:ty, $dim:ty) => {
        $crate::registry::__private::inventory::submit! {
            $crate::registry::__private::PositionDescriptor {
                cell: <$cell as $crate::NumericalCellType>::NAME,
                kind: <$kind as $crate::FieldKind>::ID,
                dim: <$dim as $crate::registry::__private::Unsigned>::USIZE,
                offsets: $crate::offset_rows::<$crate::CellPosition<$cell, $kind, $dim>>,
            }
        }
    };
}

crate::register_position!(YeeCell, FieldE, Dim2);
crate::register_position!(YeeCell, FieldE, Dim3);
crate::register_position!(YeeCell, FieldB, Dim2);
crate::register_position!(YeeCell, FieldB, Dim3);
crate::register_position!(YeeCell, FieldJ, Dim2);
crate::register_position!(YeeCell, FieldJ, Dim3);
crate::register_position!(YeeCell, FieldTmp, Dim2);
crate::register_position!(YeeCell, FieldTmp, Dim3);

/// リンクされた全セル型の記述を集めたレジストリ。
pub fn registry() -> Result<Registry, RegistryError> {
    Registry::collect()
}
