//! シミュレーション単位のコンパイル時設定。
//!
//! 設定型は次元とセル型を関連型として持ち、セル型は [`CellScheme`] エイリアス経由で束縛する。
//! 下流の設定は別のセル型を束縛するだけで、カーネルに埋め込まれる位置テーブルを差し替えられる。
use std::marker::PhantomData;

use stagger_meta::{Alias, AliasMap, AliasTarget, Bound, TypeToAliasPair};
use stagger_types::SimDim;

use crate::cell::{CellFieldPosition, CellScheme, YeeCell};
use crate::position::Position;

pub trait SimulationConfig {
    type Dim: SimDim;

    /// `Alias<C, CellScheme>` の形で束縛したセル型。
    type Cell: AliasTarget<Name = CellScheme> + TypeToAliasPair;
}

/// 設定 `C` に束縛されたセル型。
pub type ConfigCell<C> = Bound<<C as SimulationConfig>::Cell>;

/// 設定 `C` におけるフィールド種別 `K` の位置テーブル型。
pub type ConfigFieldPosition<C, K> =
    <ConfigCell<C> as CellFieldPosition<K, <C as SimulationConfig>::Dim>>::Table;

/// 設定 `C` の束縛から作ったオーバーライド表。
pub type ConfigOverrides<C> = AliasMap<stagger_meta::type_list![<C as SimulationConfig>::Cell]>;

/// 設定 `C` を経由した位置テーブルの値。
#[inline]
pub fn config_field_position<C, K>() -> <ConfigFieldPosition<C, K> as Position>::Output
where
    C: SimulationConfig,
    ConfigCell<C>: CellFieldPosition<K, C::Dim>,
{
    <ConfigFieldPosition<C, K> as Position>::POSITIONS
}

/// Yee セルを使う既定の設定。
#[derive(Debug, Clone, Copy, Default)]
pub struct YeeConfig<D>(PhantomData<D>);

impl<D: SimDim> SimulationConfig for YeeConfig<D> {
    type Dim = D;
    type Cell = Alias<YeeCell, CellScheme>;
}
