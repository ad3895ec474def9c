//! Fundamental type system for the Stagger field-position tables
//!
//! Provides compile-time dimension markers, in-cell offset vectors, and field kind tags.

pub mod dim;
pub mod error;
pub mod field_kind;
pub mod offset;

pub use dim::{DIM2, DIM3, Dim2, Dim3, SimDim};
pub use error::TypesError;
pub use field_kind::FieldKindId;
pub use offset::{OffsetVector, ScalarOffsets, VectorOffsets, float2, float3};
