use crate::app::state::WordState;

pub const PLACEHOLDER_WORD: &str = "___";
pub const BUTTON_IDLE: &str = "Generate New Word";
pub const BUTTON_LOADING: &str = "Generating...";

/// Render state for UI components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub word: String,
    pub loading: bool,
    pub animating: bool,
    pub error: Option<String>,
    pub gift_open: bool,
}

impl RenderState {
    pub fn from_word_state(state: &WordState) -> Self {
        let word = if state.word().is_empty() {
            PLACEHOLDER_WORD.to_string()
        } else {
            state.word().to_string()
        };
        let error = (!state.error().is_empty()).then(|| state.error().to_string());

        Self {
            word,
            loading: state.is_loading(),
            animating: state.is_animating(),
            error,
            gift_open: state.is_gift_open(),
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            BUTTON_LOADING
        } else {
            BUTTON_IDLE
        }
    }

    pub fn button_enabled(&self) -> bool {
        !self.loading
    }
}
