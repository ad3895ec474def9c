//! Registry of compiled field-position specializations
//!
//! Field positions are resolved at compile time; each cell-type crate also
//! submits a read-only description of every specialization it provides, so a
//! build can list, look up and export them.

mod descriptor;
mod error;
mod registry;

pub use descriptor::PositionDescriptor;
pub use error::RegistryError;
pub use inventory;
pub use registry::Registry;

inventory::collect!(PositionDescriptor);
