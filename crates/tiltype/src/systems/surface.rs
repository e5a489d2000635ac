//! In-memory [`CaretSurface`] for hosts without a DOM.

use std::convert::Infallible;
use std::ops::Range;

use crate::core::axes::AxisValues;
use crate::systems::glyphs::{CaretSurface, StyledGlyph};

/// Handle returned by [`BufferSurface::create_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferNode {
    id: u32,
}

#[derive(Debug, Clone)]
struct Slot {
    id: u32,
    glyph: StyledGlyph,
}

/// A flat run of styled glyphs with an optional selection range.
///
/// Positions are glyph indices; a collapsed range is a caret.
#[derive(Debug, Clone)]
pub struct BufferSurface {
    slots: Vec<Slot>,
    detached: Vec<Slot>,
    range: Option<Range<usize>>,
    next_id: u32,
}

impl BufferSurface {
    /// An empty surface with the caret at position 0.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            detached: Vec::new(),
            range: Some(0..0),
            next_id: 1,
        }
    }

    /// A surface pre-filled with `text`, caret at the end.
    pub fn from_text(text: &str, axes: AxisValues) -> Self {
        let mut surface = Self::new();
        for ch in text.chars() {
            let id = surface.next_id();
            surface.slots.push(Slot {
                id,
                glyph: StyledGlyph::new(ch, axes),
            });
        }
        surface.set_caret(surface.slots.len());
        surface
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Collapse the selection to a caret at `pos` (clamped to the content).
    pub fn set_caret(&mut self, pos: usize) {
        let pos = pos.min(self.slots.len());
        self.range = Some(pos..pos);
    }

    /// Select `[start, end)` (clamped and ordered).
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.slots.len();
        let (start, end) = (start.min(end).min(len), start.max(end).min(len));
        self.range = Some(start..end);
    }

    /// Drop the selection entirely, like a page where focus left the editor.
    pub fn clear_selection(&mut self) {
        self.range = None;
    }

    /// Caret position when the selection is collapsed.
    pub fn caret(&self) -> Option<usize> {
        self.range
            .as_ref()
            .filter(|range| range.is_empty())
            .map(|range| range.start)
    }

    pub fn glyphs(&self) -> Vec<StyledGlyph> {
        self.slots.iter().map(|slot| slot.glyph).collect()
    }

    pub fn text(&self) -> String {
        self.slots.iter().map(|slot| slot.glyph.ch).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn position_of(&self, node: &BufferNode) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id == node.id)
    }
}

impl Default for BufferSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl CaretSurface for BufferSurface {
    type Node = BufferNode;
    type Error = Infallible;

    fn has_range(&self) -> bool {
        self.range.is_some()
    }

    fn delete_selection(&mut self) -> Result<(), Infallible> {
        if let Some(range) = self.range.clone() {
            self.slots.drain(range.clone());
            self.range = Some(range.start..range.start);
        }
        Ok(())
    }

    fn create_node(&mut self, glyph: &StyledGlyph) -> Result<BufferNode, Infallible> {
        let id = self.next_id();
        self.detached.push(Slot { id, glyph: *glyph });
        Ok(BufferNode { id })
    }

    fn insert_at_caret(&mut self, node: &BufferNode) -> Result<(), Infallible> {
        let Some(range) = self.range.clone() else {
            return Ok(());
        };
        if let Some(index) = self.detached.iter().position(|slot| slot.id == node.id) {
            let slot = self.detached.swap_remove(index);
            self.slots.insert(range.start, slot);
            self.range = Some(range.start..range.end + 1);
        }
        Ok(())
    }

    fn place_caret_after(&mut self, node: &BufferNode) -> Result<(), Infallible> {
        if let Some(pos) = self.position_of(node) {
            self.range = Some(pos + 1..pos + 1);
        }
        Ok(())
    }

    fn commit_caret(&mut self) -> Result<(), Infallible> {
        if let Some(range) = self.range.clone() {
            self.range = Some(range.start..range.start);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axes() -> AxisValues {
        AxisValues::new(90.0, 100.0, 50.0)
    }

    #[test]
    fn from_text_puts_caret_at_end() {
        let surface = BufferSurface::from_text("abc", axes());
        assert_eq!(surface.len(), 3);
        assert_eq!(surface.caret(), Some(3));
    }

    #[test]
    fn select_is_ordered_and_clamped() {
        let mut surface = BufferSurface::from_text("abc", axes());
        surface.select(9, 1);
        assert_eq!(surface.caret(), None);
        surface.delete_selection().unwrap();
        assert_eq!(surface.text(), "a");
        assert_eq!(surface.caret(), Some(1));
    }

    #[test]
    fn detached_node_is_not_visible_until_inserted() {
        let mut surface = BufferSurface::new();
        let node = surface
            .create_node(&StyledGlyph::new('z', axes()))
            .unwrap();
        assert!(surface.is_empty());
        surface.insert_at_caret(&node).unwrap();
        assert_eq!(surface.text(), "z");
    }
}
