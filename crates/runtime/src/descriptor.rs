use stagger_types::FieldKindId;

use crate::error::RegistryError;

/// コンパイル済みの位置テーブル 1 件の記述。
///
/// `offsets` は単相化済みのテーブルを成分ごとの `Vec<f64>` へ展開する関数で、
/// `const` 文脈（`static` 配列）で構築できるよう関数ポインタで保持する。
#[derive(Debug, Clone, Copy)]
pub struct PositionDescriptor {
    pub cell: &'static str,
    pub kind: FieldKindId,
    pub dim: usize,
    pub offsets: fn() -> Vec<Vec<f64>>,
}

impl PositionDescriptor {
    pub fn matches(&self, cell: &str, kind: FieldKindId, dim: usize) -> bool {
        self.cell == cell && self.kind == kind && self.dim == dim
    }

    /// 成分数と各オフセットの長さを検証する。
    pub fn validate(&self) -> Result<(), RegistryError> {
        let rows = (self.offsets)();
        let expected = self.kind.components();
        if rows.len() != expected {
            return Err(RegistryError::ComponentCount {
                kind: self.kind,
                dim: self.dim,
                expected,
                got: rows.len(),
            });
        }
        for (component, row) in rows.iter().enumerate() {
            if row.len() != self.dim {
                return Err(RegistryError::OffsetLength {
                    kind: self.kind,
                    component,
                    dim: self.dim,
                    got: row.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar_origin_2d() -> Vec<Vec<f64>> {
        vec![vec![0.0, 0.0]]
    }

    fn too_short() -> Vec<Vec<f64>> {
        vec![vec![0.0]; 3]
    }

    #[test]
    fn test_validate_accepts_scalar() {
        let d = PositionDescriptor {
            cell: "Test",
            kind: FieldKindId::Tmp,
            dim: 2,
            offsets: scalar_origin_2d,
        };
        assert_eq!(d.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_component_count() {
        let d = PositionDescriptor {
            cell: "Test",
            kind: FieldKindId::E,
            dim: 2,
            offsets: scalar_origin_2d,
        };
        assert_eq!(
            d.validate(),
            Err(RegistryError::ComponentCount {
                kind: FieldKindId::E,
                dim: 2,
                expected: 3,
                got: 1,
            })
        );
    }

    #[test]
    fn test_validate_rejects_offset_length() {
        let d = PositionDescriptor {
            cell: "Test",
            kind: FieldKindId::B,
            dim: 2,
            offsets: too_short,
        };
        assert!(matches!(
            d.validate(),
            Err(RegistryError::OffsetLength { component: 0, got: 1, .. })
        ));
    }

    #[test]
    fn test_matches() {
        let d = PositionDescriptor {
            cell: "Test",
            kind: FieldKindId::Tmp,
            dim: 2,
            offsets: scalar_origin_2d,
        };
        assert!(d.matches("Test", FieldKindId::Tmp, 2));
        assert!(!d.matches("Test", FieldKindId::Tmp, 3));
        assert!(!d.matches("Other", FieldKindId::Tmp, 2));
    }
}
