pub mod glyphs;
pub mod readout;
pub mod surface;
