//! Yee セルにおけるフィールド成分のセル内位置。
//!
//! `FieldPosition<K, D>` はフィールド種別 `K` と次元 `D` の組ごとに特殊化された
//! ゼロサイズの関数オブジェクトで、[`Position::POSITIONS`] が成分オフセットの定数を与える。
//! 特殊化の選択はすべて単相化で解決され、カーネルには定数として畳み込まれる。
//!
//! | 種別  | 次元   | 成分オフセット                                            |
//! |-------|--------|----------------------------------------------------------|
//! | E     | 2      | x:(0.5,0.0) y:(0.0,0.5) z:(0.0,0.0)                      |
//! | E     | 3      | x:(0.5,0.0,0.0) y:(0.0,0.5,0.0) z:(0.0,0.0,0.5)          |
//! | B     | 2      | x:(0.0,0.5) y:(0.5,0.0) z:(0.5,0.5)                      |
//! | B     | 3      | x:(0.0,0.5,0.5) y:(0.5,0.0,0.5) z:(0.5,0.5,0.0)          |
//! | J     | 2 / 3  | 同次元の E に委譲                                         |
//! | Tmp   | 2 / 3  | 原点 1 つ                                                 |
//!
//! # compile_fail 例
//!
//! 特殊化の存在しない次元はコンパイルエラーになる:
//!
//! ```compile_fail
//! use stagger_fields::{FieldE, field_position};
//! let _ = field_position::<FieldE, typenum::U4>();
//! ```
//!
//! ```compile_fail
//! use stagger_fields::{FieldTmp, field_position};
//! let _ = field_position::<FieldTmp, typenum::U1>();
//! ```
use std::fmt;
use std::marker::PhantomData;

use stagger_types::{
    Dim2, Dim3, OffsetVector, ScalarOffsets, SimDim, VectorOffsets, float2, float3,
};
use typenum::Unsigned;

use crate::kind::{FieldB, FieldE, FieldJ, FieldKind, FieldTmp};

/// フィールド種別 `K`・次元 `D` の位置テーブルを返す関数オブジェクト。
///
/// 次元に既定値はない。シミュレーション設定の次元を使う場合は
/// [`ConfigFieldPosition<C, K>`](crate::ConfigFieldPosition) を使う。
pub struct FieldPosition<K, D>(PhantomData<fn() -> (K, D)>);

impl<K, D> FieldPosition<K, D> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K, D> Default for FieldPosition<K, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, D> Clone for FieldPosition<K, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, D> Copy for FieldPosition<K, D> {}

impl<K: FieldKind, D: Unsigned> fmt::Debug for FieldPosition<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldPosition<{}, {}>", K::NAME, D::USIZE)
    }
}

/// 成分オフセットをコンパイル時定数として与える trait。
pub trait Position: Copy + Default {
    /// オフセットベクトルの次元。
    type Dim: SimDim;

    /// 成分オフセットの固定長コレクション。ベクトル場は 3 要素、スカラー場は 1 要素。
    type Output: Copy + fmt::Debug + AsRef<[<Self::Dim as SimDim>::Offset]>;

    const POSITIONS: Self::Output;

    #[inline]
    fn call(&self) -> Self::Output {
        Self::POSITIONS
    }
}

/// 位置 (2D) の E_x, E_y, E_z
impl Position for FieldPosition<FieldE, Dim2> {
    type Dim = Dim2;
    type Output = VectorOffsets<Dim2>;

    const POSITIONS: Self::Output = [float2(0.5, 0.0), float2(0.0, 0.5), float2(0.0, 0.0)];
}

/// 位置 (3D) の E_x, E_y, E_z
impl Position for FieldPosition<FieldE, Dim3> {
    type Dim = Dim3;
    type Output = VectorOffsets<Dim3>;

    const POSITIONS: Self::Output = [
        float3(0.5, 0.0, 0.0),
        float3(0.0, 0.5, 0.0),
        float3(0.0, 0.0, 0.5),
    ];
}

/// 位置 (2D) の B_x, B_y, B_z
impl Position for FieldPosition<FieldB, Dim2> {
    type Dim = Dim2;
    type Output = VectorOffsets<Dim2>;

    const POSITIONS: Self::Output = [float2(0.0, 0.5), float2(0.5, 0.0), float2(0.5, 0.5)];
}

/// 位置 (3D) の B_x, B_y, B_z
impl Position for FieldPosition<FieldB, Dim3> {
    type Dim = Dim3;
    type Output = VectorOffsets<Dim3>;

    const POSITIONS: Self::Output = [
        float3(0.0, 0.5, 0.5),
        float3(0.5, 0.0, 0.5),
        float3(0.5, 0.5, 0.0),
    ];
}

/// J は E と同じ辺上に配置されるため、同次元の E のテーブルをそのまま返す。
impl<D: SimDim> Position for FieldPosition<FieldJ, D>
where
    FieldPosition<FieldE, D>: Position,
{
    type Dim = <FieldPosition<FieldE, D> as Position>::Dim;
    type Output = <FieldPosition<FieldE, D> as Position>::Output;

    const POSITIONS: Self::Output = <FieldPosition<FieldE, D> as Position>::POSITIONS;
}

/// スカラー場 Tmp はセル原点 1 点。1 要素のコレクションで包む。
impl<D: SimDim> Position for FieldPosition<FieldTmp, D> {
    type Dim = D;
    type Output = ScalarOffsets<D>;

    const POSITIONS: Self::Output = [D::ORIGIN];
}

/// `FieldPosition<K, D>` を呼び出した結果。`const` 文脈で評価可能。
#[inline]
pub const fn field_position<K, D>() -> <FieldPosition<K, D> as Position>::Output
where
    FieldPosition<K, D>: Position,
{
    <FieldPosition<K, D> as Position>::POSITIONS
}

/// 位置テーブル `P` を成分ごとの `Vec<f64>` に展開する。
pub fn offset_rows<P: Position>() -> Vec<Vec<f64>> {
    P::POSITIONS
        .as_ref()
        .iter()
        .map(|offset| offset.as_ref().to_vec())
        .collect()
}

const fn all_in_unit_cell<const N: usize>(offsets: &[OffsetVector<N>]) -> bool {
    let mut i = 0;
    while i < offsets.len() {
        if !offsets[i].is_in_unit_cell() {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    assert!(all_in_unit_cell(&field_position::<FieldE, Dim2>()));
    assert!(all_in_unit_cell(&field_position::<FieldE, Dim3>()));
    assert!(all_in_unit_cell(&field_position::<FieldB, Dim2>()));
    assert!(all_in_unit_cell(&field_position::<FieldB, Dim3>()));
    assert!(all_in_unit_cell(&field_position::<FieldJ, Dim2>()));
    assert!(all_in_unit_cell(&field_position::<FieldJ, Dim3>()));
    assert!(all_in_unit_cell(&field_position::<FieldTmp, Dim2>()));
    assert!(all_in_unit_cell(&field_position::<FieldTmp, Dim3>()));
};
