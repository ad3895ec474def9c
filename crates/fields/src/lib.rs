//! Field kinds and staggered-grid field positions
//!
//! Maps a field kind (E, B, J, Tmp) and a simulation dimension to the in-cell
//! offsets of its components, resolved entirely at compile time.

pub mod cell;
pub mod config;
pub mod kind;
pub mod position;
pub mod registry;

pub use cell::{
    CellFieldPosition, CellPosition, CellScheme, NumericalCellType, YeeCell, cell_field_position,
};
pub use config::{
    ConfigCell, ConfigFieldPosition, ConfigOverrides, SimulationConfig, YeeConfig,
    config_field_position,
};
pub use kind::{FieldB, FieldE, FieldJ, FieldKind, FieldTmp};
pub use position::{FieldPosition, Position, field_position, offset_rows};
pub use registry::registry;
