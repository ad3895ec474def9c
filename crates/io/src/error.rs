use std::path::PathBuf;

use stagger_types::TypesError;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record {index}: {source}")]
    Field { index: usize, source: TypesError },
    #[error("record {index}: unsupported dimension {dim}")]
    UnsupportedDim { index: usize, dim: usize },
    #[error("record {index}: expected {expected} components for {field}, got {got}")]
    ComponentCount {
        index: usize,
        field: String,
        expected: usize,
        got: usize,
    },
    #[error("record {index} component {component}: expected {dim} axes, got {got}")]
    AxisCount {
        index: usize,
        component: usize,
        dim: usize,
        got: usize,
    },
}
