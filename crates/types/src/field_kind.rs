use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// フィールド種別の実行時タグ。
///
/// コンパイル時ディスパッチ自体は `stagger-fields` のマーカー型で行い、
/// このタグはレジストリ・入出力など型情報が失われる境界でのみ使用する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKindId {
    /// 電場
    E,
    /// 磁場
    B,
    /// 電流密度
    J,
    /// 汎用スカラー一時フィールド
    Tmp,
}

impl FieldKindId {
    pub const ALL: [FieldKindId; 4] = [Self::E, Self::B, Self::J, Self::Tmp];

    pub const fn name(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::B => "B",
            Self::J => "J",
            Self::Tmp => "Tmp",
        }
    }

    /// 成分数。E/B/J は 2D シミュレーションでも常に 3 成分、`Tmp` はスカラーなので 1。
    pub const fn components(self) -> usize {
        match self {
            Self::E | Self::B | Self::J => 3,
            Self::Tmp => 1,
        }
    }
}

impl fmt::Display for FieldKindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKindId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypesError::UnknownFieldKind(s.to_string()))
    }
}
