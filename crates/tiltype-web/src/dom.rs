//! DOM side of the demo: element lookup and the Selection/Range-backed
//! [`CaretSurface`].

use tiltype::{CaretSurface, StyledGlyph};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Range, Selection};

pub const OVERLAY_ID: &str = "permission-overlay";
pub const GRANT_ID: &str = "grant-permission";
pub const TEXT_INPUT_ID: &str = "text-input";
pub const READOUT_ID: &str = "debug-info";

/// Class that hides the permission overlay.
pub const HIDDEN_CLASS: &str = "hidden";

/// The page elements the demo reads and mutates.
pub struct Ui {
    pub document: Document,
    pub overlay: HtmlElement,
    pub grant: HtmlElement,
    pub text_input: HtmlElement,
    pub readout: HtmlElement,
}

impl Ui {
    /// Look up every element by ID. Fails on the first missing one.
    pub fn lookup(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            overlay: element(document, OVERLAY_ID)?,
            grant: element(document, GRANT_ID)?,
            text_input: element(document, TEXT_INPUT_ID)?,
            readout: element(document, READOUT_ID)?,
        })
    }

    pub fn hide_overlay(&self) -> Result<(), JsValue> {
        self.overlay.class_list().add_1(HIDDEN_CLASS)
    }

    /// Replace the debug readout text.
    pub fn set_readout(&self, text: &str) {
        self.readout.set_text_content(Some(text));
    }
}

fn element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))
}

/// The document selection, captured once per insertion pass.
///
/// Each glyph becomes a `<span>` whose inline `font-variation-settings`
/// carries the glyph's axis snapshot.
pub struct DomSurface {
    document: Document,
    selection: Option<Selection>,
    range: Option<Range>,
}

impl DomSurface {
    /// Capture the document's current selection and its first range.
    pub fn capture(document: &Document) -> Result<Self, JsValue> {
        let selection = document.get_selection()?;
        let range = match &selection {
            Some(selection) if selection.range_count() > 0 => Some(selection.get_range_at(0)?),
            _ => None,
        };
        Ok(Self {
            document: document.clone(),
            selection,
            range,
        })
    }

    fn range(&self) -> Result<&Range, JsValue> {
        self.range
            .as_ref()
            .ok_or_else(|| JsValue::from_str("no selection range"))
    }
}

impl CaretSurface for DomSurface {
    type Node = HtmlElement;
    type Error = JsValue;

    fn has_range(&self) -> bool {
        self.range.is_some()
    }

    fn delete_selection(&mut self) -> Result<(), JsValue> {
        self.range()?.delete_contents()
    }

    fn create_node(&mut self, glyph: &StyledGlyph) -> Result<HtmlElement, JsValue> {
        let span = self
            .document
            .create_element("span")?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)?;
        span.set_text_content(Some(&glyph.ch.to_string()));
        span.style()
            .set_property("font-variation-settings", &glyph.font_variation_settings())?;
        Ok(span)
    }

    fn insert_at_caret(&mut self, node: &HtmlElement) -> Result<(), JsValue> {
        self.range()?.insert_node(node)
    }

    fn place_caret_after(&mut self, node: &HtmlElement) -> Result<(), JsValue> {
        let range = self.range()?;
        range.set_start_after(node)?;
        range.set_end_after(node)
    }

    fn commit_caret(&mut self) -> Result<(), JsValue> {
        let range = self.range()?;
        range.collapse_with_to_start(true);
        if let Some(selection) = &self.selection {
            selection.remove_all_ranges()?;
            selection.add_range(range)?;
        }
        Ok(())
    }
}
