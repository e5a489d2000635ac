use tiltype::{
    apply_glyphs, BeforeInput, GateAction, InputOutcome, PermissionError, PermissionResponse,
    Session, TypeConfig,
};
use wasm_bindgen::JsValue;
use web_sys::InputEvent;

use crate::dom::{DomSurface, Ui};
use crate::permission::js_err;

/// Owns the session and the page elements for the lifetime of the page.
///
/// Stored in a `thread_local!` by the crate root; every browser callback
/// borrows it for exactly one event.
pub struct TypeRunner {
    session: Session,
    ui: Ui,
}

impl TypeRunner {
    pub fn new(session: Session, ui: Ui) -> Self {
        Self { session, ui }
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replace the session tuning from a JSON document.
    pub fn load_config(&mut self, json: &str) -> Result<(), JsValue> {
        let config = TypeConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.session
            .set_config(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The grant trigger was clicked.
    pub fn activate(&mut self, requires_prompt: bool) -> GateAction {
        self.session.activate(requires_prompt)
    }

    pub fn resolve_permission(
        &mut self,
        result: Result<PermissionResponse, PermissionError>,
    ) -> Result<GateAction, PermissionError> {
        self.session.resolve_permission(result)
    }

    /// The gate opened and the orientation listener is attached.
    pub fn tracking_started(&mut self) {
        if let Err(err) = self.ui.hide_overlay() {
            log::warn!("could not hide permission overlay: {}", js_err(err));
        }
        log::info!("tilt tracking started");
    }

    /// One `deviceorientation` reading.
    pub fn on_orientation(&mut self, gamma: Option<f64>) {
        if let Some(readout) = self.session.on_orientation(gamma) {
            self.ui.set_readout(&readout.to_string());
        }
    }

    /// One `beforeinput` event on the text surface.
    pub fn on_before_input(&mut self, event: &InputEvent) {
        let input = BeforeInput::new(&event.input_type(), event.data());
        let glyphs = match self.session.on_before_input(&input, js_sys::Date::now()) {
            InputOutcome::PassThrough => return,
            InputOutcome::Insert(glyphs) => glyphs,
        };

        event.prevent_default();

        let inserted = DomSurface::capture(&self.ui.document)
            .and_then(|mut surface| apply_glyphs(&mut surface, &glyphs));
        if let Err(err) = inserted {
            log::warn!("glyph insertion failed: {}", js_err(err));
        }
    }
}
