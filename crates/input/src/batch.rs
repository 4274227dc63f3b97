//! Per-frame action batch.
//!
//! The main loop drains every ready terminal event into an [`ActionBatch`] and
//! then applies the collected actions in order. The batch is stack-only; key
//! presses beyond [`BATCH_CAPACITY`] within a single frame are dropped.

use arrayvec::ArrayVec;
use crossterm::event::{Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::QuizAction;

/// Maximum number of actions collected per frame.
pub const BATCH_CAPACITY: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct ActionBatch {
    actions: ArrayVec<QuizAction, BATCH_CAPACITY>,
    quit: bool,
    resized: Option<(u16, u16)>,
    dropped: u32,
}

impl ActionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for the next frame.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.quit = false;
        self.resized = None;
        self.dropped = 0;
    }

    /// Feed one terminal event.
    ///
    /// Only key presses are mapped; auto-repeat and release events are ignored
    /// so holding a key cannot judge several rounds at once.
    pub fn push_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return;
                }
                if should_quit(*key) {
                    self.quit = true;
                    return;
                }
                if let Some(action) = handle_key_event(*key) {
                    self.push(action);
                }
            }
            Event::Resize(w, h) => {
                self.resized = Some((*w, *h));
            }
            _ => {}
        }
    }

    pub fn push(&mut self, action: QuizAction) {
        if self.actions.try_push(action).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }

    pub fn actions(&self) -> &[QuizAction] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Latest terminal size reported during this frame.
    pub fn resized(&self) -> Option<(u16, u16)> {
        self.resized
    }

    /// Actions discarded because the batch was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
