use crate::types::{EditingMode, InputMode};

/// Read-only view of the host application state a resolver may consult.
///
/// Hosts implement this on whatever owns their editing state (an app
/// struct, an engine snapshot, ...). The crate only ever reads through
/// it; it never mutates host state.
pub trait CursorContext {
    /// The current top-level input discipline.
    fn editing_mode(&self) -> EditingMode;

    /// The current sub-mode. Only meaningful under a modal discipline;
    /// non-modal hosts can return `InputMode::default()`.
    fn input_mode(&self) -> InputMode;
}
