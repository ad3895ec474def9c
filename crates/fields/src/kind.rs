use std::fmt::Debug;

use stagger_types::FieldKindId;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::FieldE {}
    impl Sealed for super::FieldB {}
    impl Sealed for super::FieldJ {}
    impl Sealed for super::FieldTmp {}
}

/// フィールド種別のコンパイル時マーカーが実装する trait。
///
/// 種別は E/B/J/Tmp の閉じた集合で、外部クレートからは追加できない（sealed）。
pub trait FieldKind: sealed::Sealed + Copy + Default + Debug + 'static {
    /// 実行時タグ。レジストリや入出力の境界でのみ使用する。
    const ID: FieldKindId;

    const NAME: &'static str = Self::ID.name();

    /// 成分数。E/B/J は 3、Tmp は 1。
    const COMPONENTS: usize = Self::ID.components();
}

/// 電場 E
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldE;

/// 磁場 B
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldB;

/// 電流密度 J
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldJ;

/// 汎用スカラー一時フィールド
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldTmp;

impl FieldKind for FieldE {
    const ID: FieldKindId = FieldKindId::E;
}

impl FieldKind for FieldB {
    const ID: FieldKindId = FieldKindId::B;
}

impl FieldKind for FieldJ {
    const ID: FieldKindId = FieldKindId::J;
}

impl FieldKind for FieldTmp {
    const ID: FieldKindId = FieldKindId::Tmp;
}

stagger_meta::plain_pair!(FieldE, FieldB, FieldJ, FieldTmp);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_ids() {
        assert_eq!(FieldE::ID, FieldKindId::E);
        assert_eq!(FieldB::ID, FieldKindId::B);
        assert_eq!(FieldJ::ID, FieldKindId::J);
        assert_eq!(FieldTmp::ID, FieldKindId::Tmp);
    }

    #[test]
    fn test_marker_names() {
        assert_eq!(FieldE::NAME, "E");
        assert_eq!(FieldTmp::NAME, "Tmp");
    }

    #[test]
    fn test_component_counts() {
        assert_eq!(FieldE::COMPONENTS, 3);
        assert_eq!(FieldB::COMPONENTS, 3);
        assert_eq!(FieldJ::COMPONENTS, 3);
        assert_eq!(FieldTmp::COMPONENTS, 1);
    }

    #[test]
    fn test_markers_are_zero_sized() {
        assert_eq!(std::mem::size_of::<FieldE>(), 0);
        assert_eq!(std::mem::size_of::<FieldTmp>(), 0);
    }
}
