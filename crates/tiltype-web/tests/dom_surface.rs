#![cfg(target_arch = "wasm32")]

use tiltype::{apply_glyphs, build_glyphs, AxisValues, BeforeInput, BufferSurface, Session};
use tiltype_web::DomSurface;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A fresh contenteditable host with the caret collapsed inside it.
fn editor(document: &Document) -> HtmlElement {
    let editor = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    editor.set_content_editable("true");
    document.body().unwrap().append_child(&editor).unwrap();

    let range = document.create_range().unwrap();
    range.select_node_contents(&editor).unwrap();
    range.collapse_with_to_start(true);
    let selection = document.get_selection().unwrap().unwrap();
    selection.remove_all_ranges().unwrap();
    selection.add_range(&range).unwrap();
    editor
}

#[wasm_bindgen_test]
fn inserts_one_span_per_char_with_shared_settings() {
    let document = document();
    let editor = editor(&document);

    let mut surface = DomSurface::capture(&document).unwrap();
    let glyphs = build_glyphs("ab", AxisValues::new(90.0, 50.0, 30.0));
    assert_eq!(apply_glyphs(&mut surface, &glyphs).unwrap(), 2);

    let spans = editor.children();
    assert_eq!(spans.length(), 2);
    for (index, expected) in ["a", "b"].iter().enumerate() {
        let span = spans
            .item(index as u32)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        assert_eq!(span.text_content().as_deref(), Some(*expected));
        // Browsers serialize the axis tags with double quotes.
        let settings = span
            .style()
            .get_property_value("font-variation-settings")
            .unwrap()
            .replace('"', "'");
        assert_eq!(settings, glyphs[index].font_variation_settings());
    }

    let range = document.get_selection().unwrap().unwrap().get_range_at(0).unwrap();
    assert!(range.collapsed());
    let after_last = document.create_range().unwrap();
    after_last.set_start_after(&spans.item(1).unwrap()).unwrap();
    assert_eq!(
        range.compare_boundary_points(web_sys::Range::START_TO_START, &after_last).unwrap(),
        0
    );

    editor.remove();
}

#[wasm_bindgen_test]
fn no_range_is_a_no_op() {
    let document = document();
    let editor = editor(&document);
    document.get_selection().unwrap().unwrap().remove_all_ranges().unwrap();

    let mut surface = DomSurface::capture(&document).unwrap();
    let glyphs = build_glyphs("ab", AxisValues::new(90.0, 50.0, 30.0));
    assert_eq!(apply_glyphs(&mut surface, &glyphs).unwrap(), 0);
    assert_eq!(editor.children().length(), 0);

    editor.remove();
}

#[wasm_bindgen_test]
fn dom_and_buffer_agree_on_text() {
    let document = document();
    let editor = editor(&document);
    let mut dom_session = Session::default();
    let mut buffer_session = Session::default();
    let mut buffer = BufferSurface::new();

    for (data, at) in [("h", 0.0), ("i", 120.0), ("!", 900.0)] {
        let event = BeforeInput::new("insertText", Some(data.to_string()));
        let mut dom = DomSurface::capture(&document).unwrap();
        dom_session.type_into(&mut dom, &event, at).unwrap();
        buffer_session.type_into(&mut buffer, &event, at).unwrap();
    }

    assert_eq!(editor.text_content().as_deref(), Some(buffer.text().as_str()));
    editor.remove();
}
