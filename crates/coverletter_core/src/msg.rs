#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Replace the form wholesale with inputs loaded from storage.
    InputsRestored(crate::FormInputs),
    /// User edited one field (raw, untrimmed text).
    FieldEdited {
        field: crate::FormField,
        value: String,
    },
    /// User asked for a cover letter.
    GenerateClicked,
    /// The generation service returned a letter.
    GenerationSucceeded { cover_letter: String },
    /// The request failed; `message` is the raw upstream or transport text.
    GenerationFailed { message: String },
    /// User clicked Copy.
    CopyClicked,
    /// Host clipboard finished the copy.
    CopyFinished { copied: bool },
    /// The acknowledgment timer for `seq` elapsed.
    CopyAckExpired { seq: u64 },
    /// Fallback for placeholder wiring.
    NoOp,
}
