pub mod axes;
pub mod cadence;
pub mod permission;
pub mod tilt;
