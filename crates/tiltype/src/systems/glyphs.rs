//! Glyph styling.
//!
//! Every inserted character becomes its own inline node carrying the axis
//! snapshot of the insertion pass. Nodes are placed at the caret one after
//! another and the caret ends up collapsed behind the last one.
//!
//! The algorithm is written against [`CaretSurface`] so it runs the same on
//! the DOM (see `tiltype-web`) and on the in-memory
//! [`BufferSurface`](crate::systems::surface::BufferSurface).

use crate::core::axes::AxisValues;

/// A single styled character. Immutable once built: later changes to the
/// session state never reach glyphs that were already inserted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledGlyph {
    pub ch: char,
    pub axes: AxisValues,
}

impl StyledGlyph {
    pub fn new(ch: char, axes: AxisValues) -> Self {
        Self { ch, axes }
    }

    /// CSS `font-variation-settings` value for this glyph.
    pub fn font_variation_settings(&self) -> String {
        self.axes.font_variation_settings()
    }
}

/// Build one glyph per `char` of `text`, in order, all sharing `axes`.
pub fn build_glyphs(text: &str, axes: AxisValues) -> Vec<StyledGlyph> {
    text.chars().map(|ch| StyledGlyph::new(ch, axes)).collect()
}

/// An editable surface with a selection range and a caret.
///
/// Mirrors the subset of the DOM Selection/Range API the styler needs.
pub trait CaretSurface {
    /// Handle to an inserted node.
    type Node;
    type Error;

    /// Whether a selection range exists. Without one, styling is a no-op.
    fn has_range(&self) -> bool;

    /// Remove whatever the range currently covers.
    fn delete_selection(&mut self) -> Result<(), Self::Error>;

    /// Create a detached node holding `glyph`.
    fn create_node(&mut self, glyph: &StyledGlyph) -> Result<Self::Node, Self::Error>;

    /// Insert `node` at the start of the range.
    fn insert_at_caret(&mut self, node: &Self::Node) -> Result<(), Self::Error>;

    /// Move both range boundaries to just after `node`.
    fn place_caret_after(&mut self, node: &Self::Node) -> Result<(), Self::Error>;

    /// Collapse the range to its start and make it the sole selection range.
    fn commit_caret(&mut self) -> Result<(), Self::Error>;
}

/// Insert `glyphs` at the caret of `surface`.
///
/// Returns the number of nodes inserted (0 when the surface has no range).
pub fn apply_glyphs<S: CaretSurface>(
    surface: &mut S,
    glyphs: &[StyledGlyph],
) -> Result<usize, S::Error> {
    if !surface.has_range() {
        return Ok(0);
    }

    surface.delete_selection()?;

    for glyph in glyphs {
        let node = surface.create_node(glyph)?;
        surface.insert_at_caret(&node)?;
        surface.place_caret_after(&node)?;
    }

    surface.commit_caret()?;
    Ok(glyphs.len())
}
