use std::fmt::Debug;

use typenum::{U2, U3, Unsigned};

use crate::offset::OffsetVector;

/// 2 次元シミュレーションの次元マーカー。
pub type Dim2 = U2;
/// 3 次元シミュレーションの次元マーカー。
pub type Dim3 = U3;

pub const DIM2: usize = 2;
pub const DIM3: usize = 3;

mod sealed {
    pub trait Sealed {}

    impl Sealed for typenum::U2 {}
    impl Sealed for typenum::U3 {}
}

/// シミュレーション次元をコンパイル時に表す trait。
///
/// `typenum` の型レベル整数 `U2` / `U3` のみが実装する（sealed）。
/// 関連型 `Offset` はその次元のセル内オフセットベクトル型を与える。
///
/// # compile_fail 例
///
/// 1 次元はサポートしないため、以下はコンパイルエラーになる:
///
/// ```compile_fail
/// use stagger_types::SimDim;
/// fn check<D: SimDim>() {}
/// check::<typenum::U1>();
/// ```
pub trait SimDim: sealed::Sealed + Unsigned + Debug {
    /// セル内の位置を表すベクトル型。成分数は次元数に一致する。
    type Offset: Copy + Debug + PartialEq + AsRef<[f64]> + 'static;

    /// セル原点（全成分 0.0）。
    const ORIGIN: Self::Offset;
}

impl SimDim for U2 {
    type Offset = OffsetVector<DIM2>;

    const ORIGIN: Self::Offset = OffsetVector::ZERO;
}

impl SimDim for U3 {
    type Offset = OffsetVector<DIM3>;

    const ORIGIN: Self::Offset = OffsetVector::ZERO;
}
