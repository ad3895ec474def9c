use std::ops::Index;

use crate::error::TypesError;

/// 単位セル内の位置を表す `N` 次元ベクトル。
///
/// 各成分はセル幅を 1 とした相対座標で、妥当な値は `[0.0, 1.0)` に収まる。
/// `new` は `const` 文脈でのテーブル定義用に検証を行わない。
/// 外部入力からの構築には `try_new` を使う。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetVector<const N: usize>([f64; N]);

impl<const N: usize> OffsetVector<N> {
    /// セル原点。
    pub const ZERO: Self = Self([0.0; N]);

    #[inline]
    pub const fn new(components: [f64; N]) -> Self {
        Self(components)
    }

    /// 各成分が有限かつ `[0.0, 1.0)` に収まる場合のみ構築する。
    pub fn try_new(components: [f64; N]) -> Result<Self, TypesError> {
        for (axis, &value) in components.iter().enumerate() {
            if !value.is_finite() {
                return Err(TypesError::NonFinite { axis });
            }
            if !(0.0..1.0).contains(&value) {
                return Err(TypesError::OutOfCell { axis, value });
            }
        }
        Ok(Self(components))
    }

    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }

    #[inline]
    pub const fn get(&self, axis: usize) -> f64 {
        self.0[axis]
    }

    #[inline]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.0
    }

    /// 全成分が `[0.0, 1.0)` に収まるかを判定する。`const` 文脈で評価可能。
    pub const fn is_in_unit_cell(&self) -> bool {
        let mut axis = 0;
        while axis < N {
            let c = self.0[axis];
            if !(c >= 0.0 && c < 1.0) {
                return false;
            }
            axis += 1;
        }
        true
    }
}

impl<const N: usize> Default for OffsetVector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> AsRef<[f64]> for OffsetVector<N> {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl<const N: usize> Index<usize> for OffsetVector<N> {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.0[axis]
    }
}

/// 2 次元オフセット `(x, y)`。
#[inline]
pub const fn float2(x: f64, y: f64) -> OffsetVector<2> {
    OffsetVector::new([x, y])
}

/// 3 次元オフセット `(x, y, z)`。
#[inline]
pub const fn float3(x: f64, y: f64, z: f64) -> OffsetVector<3> {
    OffsetVector::new([x, y, z])
}
