/// Classification of a `beforeinput` event's `inputType`.
/// Only plain text and line-break insertions are styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// `insertText`
    InsertText,
    /// `insertLineBreak`
    InsertLineBreak,
    /// Anything else (deletion, paste, composition, formatting…). Passed through.
    Other,
}

impl InputKind {
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type {
            "insertText" => Self::InsertText,
            "insertLineBreak" => Self::InsertLineBreak,
            _ => Self::Other,
        }
    }

    /// Whether the session takes over insertion for this kind.
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// A pre-insertion text event as seen by the session.
#[derive(Debug, Clone, PartialEq)]
pub struct BeforeInput {
    pub kind: InputKind,
    /// The text about to be inserted, if the browser supplied any.
    pub data: Option<String>,
}

impl BeforeInput {
    pub fn new(input_type: &str, data: Option<String>) -> Self {
        Self {
            kind: InputKind::from_input_type(input_type),
            data,
        }
    }

    /// Text to insert. Falls back to a line break when the event carries
    /// no text (the `insertLineBreak` case).
    pub fn payload(&self) -> &str {
        match self.data.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => "\n",
        }
    }
}
