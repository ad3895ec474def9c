//! 型リストとオーバーライド表の構築。
//!
//! `type_list![A, B, C]` で型の列を作り、[`ToAliasMap`] で各要素を
//! [`TypeToAliasPair`] によるキー・値ペアへ写す。結果は型レベルのペア列で、
//! [`PairList::entries`] によって実行時に内容を確認できる。
use std::any::TypeId;
use std::marker::PhantomData;

use crate::alias::{PairOf, TypeToAliasPair};
use crate::pair::Pair;

/// 空の型リスト。
#[derive(Debug, Clone, Copy, Default)]
pub struct Nil;

/// 先頭 `H` と残り `T` からなる型リスト。
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

/// 型リストを構築する。`type_list![A, B]` は `Cons<A, Cons<B, Nil>>` になる。
#[macro_export]
macro_rules! type_list {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::type_list!($($tail),*)>
    };
}

pub trait TypeList {
    const LEN: usize;
}

impl TypeList for Nil {
    const LEN: usize = 0;
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// 型リストの各要素をエイリアスペアへ写す。
pub trait ToAliasMap {
    type Output: PairList;
}

impl ToAliasMap for Nil {
    type Output = Nil;
}

impl<H, T> ToAliasMap for Cons<H, T>
where
    H: TypeToAliasPair,
    H::Key: 'static,
    H::Value: 'static,
    T: ToAliasMap,
{
    type Output = Cons<PairOf<H>, T::Output>;
}

/// ペア列の 1 要素の実行時表現。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairEntry {
    pub key: TypeId,
    pub value: TypeId,
    pub key_name: &'static str,
    pub value_name: &'static str,
}

impl PairEntry {
    pub fn of<K: 'static, V: 'static>() -> Self {
        Self {
            key: TypeId::of::<K>(),
            value: TypeId::of::<V>(),
            key_name: std::any::type_name::<K>(),
            value_name: std::any::type_name::<V>(),
        }
    }

    pub fn key_is<K: 'static>(&self) -> bool {
        self.key == TypeId::of::<K>()
    }

    pub fn value_is<V: 'static>(&self) -> bool {
        self.value == TypeId::of::<V>()
    }
}

/// キー・値ペアの型レベル列。
pub trait PairList {
    /// 重複キーを含む要素数。
    const LEN: usize;

    fn push_entries(out: &mut Vec<PairEntry>);

    /// 挿入順を保ったエントリ列。
    ///
    /// 同じキーが再び現れた場合は先に挿入されたものを残し、後のものは捨てる。
    fn entries() -> Vec<PairEntry> {
        let mut all = Vec::with_capacity(Self::LEN);
        Self::push_entries(&mut all);

        let mut out: Vec<PairEntry> = Vec::with_capacity(all.len());
        for entry in all {
            if !out.iter().any(|e| e.key == entry.key) {
                out.push(entry);
            }
        }
        out
    }

    /// キー `K` に対応する値の `TypeId`。
    fn value_of<K: 'static>() -> Option<TypeId> {
        Self::entries()
            .into_iter()
            .find(|e| e.key_is::<K>())
            .map(|e| e.value)
    }
}

impl PairList for Nil {
    const LEN: usize = 0;

    fn push_entries(_out: &mut Vec<PairEntry>) {}
}

impl<K: 'static, V: 'static, T: PairList> PairList for Cons<Pair<K, V>, T> {
    const LEN: usize = 1 + T::LEN;

    fn push_entries(out: &mut Vec<PairEntry>) {
        out.push(PairEntry::of::<K, V>());
        T::push_entries(out);
    }
}

/// 型リスト `L` から作ったオーバーライド表。
pub type AliasMap<L> = <L as ToAliasMap>::Output;
