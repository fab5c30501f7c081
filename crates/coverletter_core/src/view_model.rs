use crate::FormInputs;

/// Everything the shell needs to draw the form and its output panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub inputs: FormInputs,
    pub loading: bool,
    /// Generate is offered only when a submission could pass validation.
    pub can_generate: bool,
    pub generate_label: &'static str,
    /// Nothing generated, nothing failed, nothing in flight.
    pub show_placeholder: bool,
    pub cover_letter: Option<String>,
    pub error: Option<String>,
    pub copy_ack: Option<&'static str>,
}
