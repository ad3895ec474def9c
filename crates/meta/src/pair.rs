use std::fmt;
use std::marker::PhantomData;

/// 型レベルのキー・値ペア。実行時表現を持たないゼロサイズ型。
pub struct Pair<K, V>(PhantomData<fn() -> (K, V)>);

impl<K, V> Pair<K, V> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K, V> Default for Pair<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for Pair<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Pair<K, V> {}

impl<K, V> fmt::Debug for Pair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pair<{}, {}>",
            std::any::type_name::<K>(),
            std::any::type_name::<V>()
        )
    }
}

/// 任意の型から恒等ペア `(T, T)` を作る。
///
/// エイリアスでない型がオーバーライド表で自分自身に対応付けられる際の既定値。
pub trait TypeToPair {
    type Key;
    type Value;
}

impl<T> TypeToPair for T {
    type Key = T;
    type Value = T;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    #[test]
    fn test_identity_pair_key_is_self() {
        assert_eq!(
            TypeId::of::<<f64 as TypeToPair>::Key>(),
            TypeId::of::<f64>()
        );
        assert_eq!(
            TypeId::of::<<f64 as TypeToPair>::Value>(),
            TypeId::of::<f64>()
        );
    }

    #[test]
    fn test_pair_is_zero_sized() {
        assert_eq!(std::mem::size_of::<Pair<String, Vec<u8>>>(), 0);
    }

    #[test]
    fn test_pair_debug_names_both_types() {
        let s = format!("{:?}", Pair::<u32, f64>::new());
        assert_eq!(s, "Pair<u32, f64>");
    }
}
