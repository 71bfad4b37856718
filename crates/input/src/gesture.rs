//! Swipe and tap gestures.
//!
//! A gesture is the displacement between a press and its release:
//!
//! - mostly horizontal and longer than the threshold: move one column that way
//! - mostly vertical, downward and longer than the threshold: hard drop
//! - mostly vertical and upward: ignored
//! - mostly vertical (or no motion) within the threshold: a tap, which rotates
//! - mostly horizontal within the threshold: ignored
//!
//! In the terminal, mouse press/release pairs stand in for touches; the
//! displacement is measured in terminal cells.

use crate::types::GameAction;

/// Default swipe threshold in terminal cells.
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 2;

/// Classify a press-to-release displacement.
pub fn classify_swipe(dx: i32, dy: i32, threshold: u16) -> Option<GameAction> {
    let threshold = threshold as i32;
    if dx.abs() > dy.abs() {
        if dx.abs() > threshold {
            Some(if dx > 0 {
                GameAction::MoveRight
            } else {
                GameAction::MoveLeft
            })
        } else {
            None
        }
    } else if dy.abs() > threshold {
        (dy > 0).then_some(GameAction::HardDrop)
    } else {
        Some(GameAction::Rotate)
    }
}

/// Turns press/release pairs into gesture actions.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    threshold: u16,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    /// Record where a press started.
    pub fn press(&mut self, column: u16, row: u16) {
        self.start = Some((column, row));
    }

    /// Finish a gesture. Returns nothing for a release without a press.
    pub fn release(&mut self, column: u16, row: u16) -> Option<GameAction> {
        let (x0, y0) = self.start.take()?;
        let dx = column as i32 - x0 as i32;
        let dy = row as i32 - y0 as i32;
        classify_swipe(dx, dy, self.threshold)
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}
