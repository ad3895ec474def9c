#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TypesError {
    #[error("offset component out of unit cell: axis {axis}, value {value}")]
    OutOfCell { axis: usize, value: f64 },
    #[error("offset component is not finite: axis {axis}")]
    NonFinite { axis: usize },
    #[error("unknown field kind: {0}")]
    UnknownFieldKind(String),
}
