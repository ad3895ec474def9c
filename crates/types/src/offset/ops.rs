/// オフセットベクトル間の基本算術演算を提供する。
///
/// 補間カーネルで格子点位置をずらす用途を想定しており、結果は単位セル内に収まるとは限らない。
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use super::types::OffsetVector;

impl<const N: usize> Add for OffsetVector<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let a = self.as_array();
        let b = rhs.as_array();
        OffsetVector::new(std::array::from_fn(|i| a[i] + b[i]))
    }
}

impl<const N: usize> Sub for OffsetVector<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let a = self.as_array();
        let b = rhs.as_array();
        OffsetVector::new(std::array::from_fn(|i| a[i] - b[i]))
    }
}

impl<const N: usize> Mul<f64> for OffsetVector<N> {
    type Output = Self;

    /// スカラー倍（右）: `v * s`。全成分に `s` を乗じる。
    #[inline]
    fn mul(self, s: f64) -> Self {
        let a = self.as_array();
        OffsetVector::new(std::array::from_fn(|i| a[i] * s))
    }
}

impl<const N: usize> Mul<OffsetVector<N>> for f64 {
    type Output = OffsetVector<N>;

    /// スカラー倍（左）: `s * v`。`v * s` に委譲する。
    #[inline]
    fn mul(self, v: OffsetVector<N>) -> OffsetVector<N> {
        v * self
    }
}

impl<const N: usize> AddAssign for OffsetVector<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize> SubAssign for OffsetVector<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
