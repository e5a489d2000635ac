pub mod api;
pub mod core;
pub mod error;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{CadenceConfig, TiltConfig, TypeConfig};
pub use api::session::{InputOutcome, Session};
pub use crate::core::axes::{remap_clamped, AxisValues};
pub use crate::core::cadence::{width_from_interval, CadenceTracker};
pub use crate::core::permission::{GateAction, GateState, PermissionGate, PermissionResponse};
pub use crate::core::tilt::{italic_from_gamma, TiltTracker};
pub use error::{ConfigError, PermissionError};
pub use input::event::{BeforeInput, InputKind};
pub use systems::glyphs::{apply_glyphs, build_glyphs, CaretSurface, StyledGlyph};
pub use systems::readout::{fixed1, Readout};
pub use systems::surface::{BufferNode, BufferSurface};
