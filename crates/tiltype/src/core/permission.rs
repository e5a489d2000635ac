use crate::error::PermissionError;

/// The platform's answer to a motion-sensor permission prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionResponse {
    Granted,
    /// Any other state string the platform returned (e.g. "denied").
    Denied(String),
}

impl PermissionResponse {
    pub fn parse(state: &str) -> Self {
        if state == "granted" {
            Self::Granted
        } else {
            Self::Denied(state.to_string())
        }
    }
}

/// Gate state. There is no sub-state for "request in flight": a pending
/// prompt leaves the gate `Ungranted` until it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Ungranted,
    Granted,
}

/// What the caller should do after a user activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// The platform needs an explicit prompt; request it, then call
    /// [`PermissionGate::resolve`].
    Prompt,
    /// The gate just opened without a prompt; start tracking.
    Open,
    /// Tracking is already running; nothing to do.
    AlreadyGranted,
}

/// One-shot ungranted → granted gate for motion-sensor access.
#[derive(Debug, Clone, Default)]
pub struct PermissionGate {
    state: GateState,
}

impl PermissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_granted(&self) -> bool {
        self.state == GateState::Granted
    }

    /// Handle a user activation of the grant trigger.
    pub fn activate(&mut self, requires_prompt: bool) -> GateAction {
        if self.is_granted() {
            return GateAction::AlreadyGranted;
        }
        if requires_prompt {
            return GateAction::Prompt;
        }
        self.state = GateState::Granted;
        GateAction::Open
    }

    /// Apply the outcome of a prompt.
    ///
    /// Opens the gate only on an explicit grant. Any other outcome leaves it
    /// closed; the user may retry by activating again. A prompt that resolves
    /// after the gate already opened (double activation) is reported as
    /// [`GateAction::AlreadyGranted`] so tracking never starts twice.
    pub fn resolve(
        &mut self,
        result: Result<PermissionResponse, PermissionError>,
    ) -> Result<GateAction, PermissionError> {
        if self.is_granted() {
            return Ok(GateAction::AlreadyGranted);
        }
        match result? {
            PermissionResponse::Granted => {
                self.state = GateState::Granted;
                Ok(GateAction::Open)
            }
            PermissionResponse::Denied(state) => Err(PermissionError::Denied(state)),
        }
    }
}
