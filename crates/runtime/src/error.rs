use stagger_types::FieldKindId;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("no field position registered: cell {cell}, field {kind}, dim {dim}")]
    NotRegistered {
        cell: String,
        kind: FieldKindId,
        dim: usize,
    },
    #[error("duplicate field position: cell {cell}, field {kind}, dim {dim}")]
    Duplicate {
        cell: &'static str,
        kind: FieldKindId,
        dim: usize,
    },
    #[error("component count mismatch for {kind} (dim {dim}): expected {expected}, got {got}")]
    ComponentCount {
        kind: FieldKindId,
        dim: usize,
        expected: usize,
        got: usize,
    },
    #[error("offset length mismatch for {kind} component {component}: expected {dim}, got {got}")]
    OffsetLength {
        kind: FieldKindId,
        component: usize,
        dim: usize,
        got: usize,
    },
}
