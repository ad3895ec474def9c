/// セル内オフセットベクトルと成分オフセット集合。
///
/// - [`OffsetVector`][]: 単位セル内の位置（各軸 `[0.0, 1.0)`）
/// - [`VectorOffsets`][]: ベクトル場 (E/B/J) の x, y, z 成分ごとの位置
/// - [`ScalarOffsets`][]: スカラー場の位置（1 要素）
mod ops;
mod types;

pub use types::{OffsetVector, float2, float3};

/// ベクトル場の成分オフセット。シミュレーション次元に関わらず常に 3 成分。
pub type VectorOffsets<D> = [<D as crate::dim::SimDim>::Offset; 3];

/// スカラー場のオフセット。1 要素のコレクションで包む。
pub type ScalarOffsets<D> = [<D as crate::dim::SimDim>::Offset; 1];
