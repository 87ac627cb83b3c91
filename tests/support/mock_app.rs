use cursor_mini::traits::CursorContext;
use cursor_mini::types::{EditingMode, InputMode};

/// Minimal host application state for tests.
#[derive(Debug, Clone)]
pub struct MockApp {
    pub editing_mode: EditingMode,
    pub input_mode: InputMode,
}

impl MockApp {
    pub fn emacs() -> Self {
        Self {
            editing_mode: EditingMode::Emacs,
            input_mode: InputMode::Navigation,
        }
    }

    pub fn vi(input_mode: InputMode) -> Self {
        Self {
            editing_mode: EditingMode::Vi,
            input_mode,
        }
    }
}

impl CursorContext for MockApp {
    fn editing_mode(&self) -> EditingMode {
        self.editing_mode
    }

    fn input_mode(&self) -> InputMode {
        self.input_mode
    }
}
