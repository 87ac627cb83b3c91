/// The visual style a terminal should use when drawing the text cursor.
///
/// These are symbolic values only. Mapping them to terminal escape
/// sequences (DECSCUSR and friends) is the host's job, not this crate's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CursorShape {
    /// A solid block covering the whole cell. The default.
    #[default]
    Block,
    /// A thin vertical bar at the left edge of the cell.
    Beam,
    /// A thin horizontal bar at the bottom of the cell.
    Underline,
    /// Blinking variant of [`CursorShape::Block`].
    BlinkingBlock,
    /// Blinking variant of [`CursorShape::Beam`].
    BlinkingBeam,
    /// Blinking variant of [`CursorShape::Underline`].
    BlinkingUnderline,
}

/// The host application's top-level input discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EditingMode {
    /// Non-modal editing; keystrokes always insert. The default.
    #[default]
    Emacs,
    /// Modal editing; keystroke interpretation depends on [`InputMode`].
    Vi,
}

/// The sub-mode within a modal editing discipline.
///
/// Hosts running in [`EditingMode::Emacs`] may report any value here;
/// it is only consulted while the editing mode is modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputMode {
    /// Normal/command mode. The default.
    #[default]
    Navigation,
    /// Typed characters are inserted at the cursor.
    Insert,
    /// Typed characters overwrite the character under the cursor.
    Replace,
}
