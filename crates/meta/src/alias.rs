//! 型レベルエイリアスとエイリアスペア生成。
//!
//! エイリアスは「名前付きの差し替え点」で、`Alias<T, N>` は名前 `N` に具体型 `T` を束縛した状態を表す。
//! オーバーライド表ではキーを束縛前の形 `Alias<Unbound, N>` に正規化するため、
//! 束縛先の型に依らず同じ名前のエイリアス同士が同じキーに対応する。
use std::fmt;
use std::marker::PhantomData;

use crate::pair::Pair;

/// エイリアス名マーカーが実装する trait。通常は [`alias!`](crate::alias!) で宣言する。
pub trait AliasName: 'static {
    const NAME: &'static str;
}

/// 未束縛のエイリアスを表すプレースホルダー型。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unbound;

/// 名前 `N` に型 `T` を束縛したエイリアス。ゼロサイズ型。
///
/// 型引数は常に 2 つで、欠けているとコンパイルエラーになる:
///
/// ```compile_fail
/// use stagger_meta::{Alias, PairOf};
/// type Broken = PairOf<Alias<f64>>;
/// ```
pub struct Alias<T, N>(PhantomData<fn() -> (T, N)>);

impl<T, N> Alias<T, N> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T, N> Default for Alias<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, N> Clone for Alias<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, N> Copy for Alias<T, N> {}

impl<T, N: AliasName> fmt::Debug for Alias<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", N::NAME, std::any::type_name::<T>())
    }
}

/// エイリアスの束縛先と名前を取り出す。
pub trait AliasTarget {
    type Target;
    type Name: AliasName;
}

impl<T, N: AliasName> AliasTarget for Alias<T, N> {
    type Target = T;
    type Name = N;
}

/// エイリアス `A` の束縛先の型。
pub type Bound<A> = <A as AliasTarget>::Target;

/// オーバーライド表に登録するキー・値ペアをコンパイル時に決定する trait。
///
/// # 実装テーブル
///
/// | 入力型         | `Key`               | `Value`        |
/// |---------------|---------------------|----------------|
/// | `Alias<T, N>` | `Alias<Unbound, N>` | `Alias<T, N>`  |
/// | その他の型     | `T`                 | `T`            |
///
/// その他の型は [`plain_pair!`](crate::plain_pair!) で恒等ペアを宣言する。
///
/// # compile_fail 例
///
/// 恒等ペアを宣言していない型はペアを作れない:
///
/// ```compile_fail
/// use stagger_meta::TypeToAliasPair;
/// struct Undeclared;
/// fn check<T: TypeToAliasPair>() {}
/// check::<Undeclared>();
/// ```
pub trait TypeToAliasPair {
    type Key;
    type Value;
}

impl<T, N: AliasName> TypeToAliasPair for Alias<T, N> {
    type Key = Alias<Unbound, N>;
    type Value = Alias<T, N>;
}

/// 型 `T` のエイリアスペア。
pub type PairOf<T> = Pair<<T as TypeToAliasPair>::Key, <T as TypeToAliasPair>::Value>;

/// エイリアスでない型に恒等ペア `(T, T)` を宣言する。
#[macro_export]
macro_rules! plain_pair {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::TypeToAliasPair for $t {
                type Key = <$t as $crate::TypeToPair>::Key;
                type Value = <$t as $crate::TypeToPair>::Value;
            }
        )*
    };
}

/// エイリアス名マーカーを宣言する。
///
/// ```
/// stagger_meta::alias!(pub Interpolation);
/// type Bound = stagger_meta::Alias<f64, Interpolation>;
/// assert_eq!(<Interpolation as stagger_meta::AliasName>::NAME, "Interpolation");
/// ```
#[macro_export]
macro_rules! alias {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::AliasName for $name {
            const NAME: &'static str = stringify!($name);
        }

        $crate::plain_pair!($name);
    };
}

plain_pair!(
    (),
    bool,
    f32,
    f64,
    i32,
    i64,
    u32,
    u64,
    usize,
    &'static str,
    String
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    crate::alias!(Interpolation);
    crate::alias!(pub(crate) Shape);

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn test_plain_type_maps_to_itself() {
        assert!(same::<<f64 as TypeToAliasPair>::Key, f64>());
        assert!(same::<<f64 as TypeToAliasPair>::Value, f64>());
        assert!(same::<PairOf<u32>, Pair<u32, u32>>());
    }

    #[test]
    fn test_alias_key_is_unbound() {
        type A = Alias<f32, Interpolation>;
        assert!(same::<<A as TypeToAliasPair>::Key, Alias<Unbound, Interpolation>>());
        assert!(same::<<A as TypeToAliasPair>::Value, A>());
    }

    #[test]
    fn test_alias_keys_match_across_bindings() {
        type K1 = <Alias<f32, Shape> as TypeToAliasPair>::Key;
        type K2 = <Alias<f64, Shape> as TypeToAliasPair>::Key;
        assert!(same::<K1, K2>());
    }

    #[test]
    fn test_alias_keys_differ_by_name() {
        type K1 = <Alias<f64, Shape> as TypeToAliasPair>::Key;
        type K2 = <Alias<f64, Interpolation> as TypeToAliasPair>::Key;
        assert!(!same::<K1, K2>());
    }

    #[test]
    fn test_alias_target_extracts_binding() {
        let _: Bound<Alias<f64, Shape>> = 0.0_f64;
        assert_eq!(<<Alias<f64, Shape> as AliasTarget>::Name as AliasName>::NAME, "Shape");
    }

    #[test]
    fn test_alias_name_is_plain() {
        assert!(same::<PairOf<Shape>, Pair<Shape, Shape>>());
    }

    #[test]
    fn test_alias_debug() {
        let s = format!("{:?}", Alias::<u32, Interpolation>::new());
        assert_eq!(s, "Interpolation<u32>");
    }
}
