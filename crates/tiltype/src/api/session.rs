use crate::api::config::TypeConfig;
use crate::core::axes::AxisValues;
use crate::core::cadence::CadenceTracker;
use crate::core::permission::{GateAction, PermissionGate, PermissionResponse};
use crate::core::tilt::TiltTracker;
use crate::error::{ConfigError, PermissionError};
use crate::input::event::BeforeInput;
use crate::systems::glyphs::{apply_glyphs, build_glyphs, CaretSurface, StyledGlyph};
use crate::systems::readout::Readout;

/// What the host should do with a `beforeinput` event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    /// Not ours: let the browser handle it, state untouched.
    PassThrough,
    /// Suppress the default insertion and insert these glyphs instead.
    Insert(Vec<StyledGlyph>),
}

/// All mutable state of one page session.
///
/// Each field has a single writer: orientation readings write the italic
/// value, accepted insertions write the width and the last-input timestamp,
/// and the grant trigger writes the gate.
pub struct Session {
    config: TypeConfig,
    gate: PermissionGate,
    tilt: TiltTracker,
    cadence: CadenceTracker,
}

impl Session {
    pub fn new(config: TypeConfig) -> Self {
        Self {
            tilt: TiltTracker::new(config.tilt.clone()),
            cadence: CadenceTracker::new(config.cadence.clone()),
            gate: PermissionGate::new(),
            config,
        }
    }

    pub fn config(&self) -> &TypeConfig {
        &self.config
    }

    /// Replace the tuning. Current axis values are kept, re-clamped to the new ranges.
    pub fn set_config(&mut self, config: TypeConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.tilt.set_config(config.tilt.clone());
        self.cadence.set_config(config.cadence.clone());
        self.config = config;
        Ok(())
    }

    /// Whether the gate is open and orientation readings are applied.
    pub fn is_tracking(&self) -> bool {
        self.gate.is_granted()
    }

    pub fn gate(&self) -> &PermissionGate {
        &self.gate
    }

    /// User activated the grant trigger.
    pub fn activate(&mut self, requires_prompt: bool) -> GateAction {
        self.gate.activate(requires_prompt)
    }

    /// Outcome of the permission prompt started after [`GateAction::Prompt`].
    pub fn resolve_permission(
        &mut self,
        result: Result<PermissionResponse, PermissionError>,
    ) -> Result<GateAction, PermissionError> {
        self.gate.resolve(result)
    }

    /// Apply one orientation reading.
    ///
    /// Returns the readout to display, or `None` when the reading was ignored
    /// (gate closed or no angle).
    pub fn on_orientation(&mut self, gamma: Option<f64>) -> Option<Readout> {
        if !self.is_tracking() {
            return None;
        }
        let italic = self.tilt.observe(gamma)?;
        Some(Readout {
            gamma: gamma?,
            italic,
            width: self.cadence.width(),
        })
    }

    /// Handle a pre-insertion event received at `now_ms`.
    ///
    /// Accepted events update the cadence state and return the glyphs to
    /// insert, all styled with one snapshot taken after the width update.
    pub fn on_before_input(&mut self, event: &BeforeInput, now_ms: f64) -> InputOutcome {
        if !event.kind.is_handled() {
            return InputOutcome::PassThrough;
        }

        let width = self.cadence.record(now_ms);
        let axes = self.snapshot();
        let glyphs = build_glyphs(event.payload(), axes);
        log::debug!(
            "{:?}: {} glyph(s), width {:.1}, italic {:.1}",
            event.kind,
            glyphs.len(),
            width,
            axes.italic
        );
        InputOutcome::Insert(glyphs)
    }

    /// [`on_before_input`](Self::on_before_input) followed by insertion into `surface`.
    ///
    /// Returns `None` for pass-through events, otherwise the number of nodes
    /// inserted (0 when the surface had no range).
    pub fn type_into<S: CaretSurface>(
        &mut self,
        surface: &mut S,
        event: &BeforeInput,
        now_ms: f64,
    ) -> Result<Option<usize>, S::Error> {
        match self.on_before_input(event, now_ms) {
            InputOutcome::PassThrough => Ok(None),
            InputOutcome::Insert(glyphs) => apply_glyphs(surface, &glyphs).map(Some),
        }
    }

    /// Current axis values.
    pub fn snapshot(&self) -> AxisValues {
        AxisValues::new(self.config.weight, self.cadence.width(), self.tilt.italic())
    }

    pub fn italic(&self) -> f64 {
        self.tilt.italic()
    }

    pub fn width(&self) -> f64 {
        self.cadence.width()
    }

    pub fn last_input_ms(&self) -> Option<f64> {
        self.cadence.last_input_ms()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TypeConfig::default())
    }
}
