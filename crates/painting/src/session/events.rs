//! Events emitted by an ink session.

use quill_config::InputKind;

/// Session lifecycle events.
///
/// These let outer layers (autosave, UI state, sync) react to changes
/// without reaching into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A stroke began drawing.
    StrokeStarted { seed: u64, input_kind: InputKind },
    /// A stroke finished and was added to the collection at `index`.
    StrokeFinished { index: usize, point_count: usize },
    /// The in-progress stroke was discarded.
    StrokeCancelled { point_count: usize },
    /// The last finished stroke was removed.
    Undone { remaining: usize },
    /// The most recently undone stroke was restored.
    Redone { count: usize },
    /// Every stroke was erased.
    Cleared,
    /// Brush or settings changed.
    Restyled { rerendered: bool },
}
