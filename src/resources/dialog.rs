//! Dialog queue with a typewriter reveal.
//!
//! Lines are shown strictly in FIFO order. The front line is revealed a few
//! characters at a time by [`DialogQueue::tick`]; a click either finishes the
//! reveal instantly or, once the line is complete, dismisses it. See
//! [`DialogQueue::advance`].

use std::collections::VecDeque;

/// Characters revealed per second of simulation time.
pub const REVEAL_RATE: f32 = 20.0;

/// Observable state of the dialog box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    /// Nothing queued.
    Idle,
    /// Front line is partially visible.
    Revealing,
    /// Front line is fully visible and waits for a click.
    Complete,
}

/// What a click did to the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAdvance {
    /// The reveal of the front line was completed instantly.
    Revealed,
    /// The front line was removed from the queue.
    Dismissed,
    /// The queue was empty; nothing happened.
    Idle,
}

/// Pending dialog lines plus the reveal counter of the front one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogQueue {
    lines: VecDeque<String>,
    reveal: f32,
}

impl DialogQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append lines to the back of the queue, even while a line is revealing.
    pub fn push_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// The line currently on screen, if any.
    pub fn current(&self) -> Option<&str> {
        self.lines.front().map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn is_active(&self) -> bool {
        !self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current reveal counter, in characters.
    pub fn reveal(&self) -> f32 {
        self.reveal
    }

    fn current_len(&self) -> usize {
        self.lines.front().map_or(0, |l| l.chars().count())
    }

    pub fn phase(&self) -> DialogPhase {
        if self.lines.is_empty() {
            DialogPhase::Idle
        } else if self.reveal < self.current_len() as f32 {
            DialogPhase::Revealing
        } else {
            DialogPhase::Complete
        }
    }

    /// Advance the reveal counter by `elapsed` seconds.
    ///
    /// The counter is reset to zero whenever the queue is empty.
    pub fn tick(&mut self, elapsed: f32) {
        if self.lines.is_empty() {
            self.reveal = 0.0;
        } else {
            self.reveal += elapsed * REVEAL_RATE;
        }
    }

    /// Handle a click on the dialog box.
    pub fn advance(&mut self) -> DialogAdvance {
        let len = self.current_len() as f32;
        if self.lines.is_empty() {
            DialogAdvance::Idle
        } else if self.reveal < len {
            self.reveal = len;
            DialogAdvance::Revealed
        } else {
            self.lines.pop_front();
            self.reveal = 0.0;
            DialogAdvance::Dismissed
        }
    }

    /// Number of leading characters of the front line to draw.
    ///
    /// Character `i` is drawn while `i <= reveal`, so the first character is
    /// visible as soon as a line reaches the front.
    pub fn visible_chars(&self) -> usize {
        let len = self.current_len();
        if len == 0 {
            return 0;
        }
        let shown = self.reveal.max(0.0).floor() as usize + 1;
        shown.min(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn queue(lines: &[&str]) -> DialogQueue {
        let mut q = DialogQueue::new();
        q.push_lines(lines.iter().copied());
        q
    }

    #[test]
    fn empty_queue_is_idle() {
        let mut q = DialogQueue::new();
        assert_eq!(q.phase(), DialogPhase::Idle);
        assert_eq!(q.advance(), DialogAdvance::Idle);
        assert_eq!(q.current(), None);
        assert_eq!(q.visible_chars(), 0);
    }

    #[test]
    fn lines_are_shown_in_fifo_order() {
        let mut q = queue(&["A", "B"]);
        assert_eq!(q.current(), Some("A"));
        q.tick(1.0);
        assert_eq!(q.advance(), DialogAdvance::Dismissed);
        assert_eq!(q.current(), Some("B"));
    }

    #[test]
    fn tick_reveals_twenty_chars_per_second() {
        let mut q = queue(&["Hello, world"]);
        q.tick(0.1);
        assert!((q.reveal() - 2.0).abs() < EPSILON);
        q.tick(0.25);
        assert!((q.reveal() - 7.0).abs() < EPSILON);
    }

    #[test]
    fn tick_keeps_counting_past_line_length() {
        let mut q = queue(&["Hi"]);
        q.tick(1.0);
        assert!((q.reveal() - 20.0).abs() < EPSILON);
        assert_eq!(q.phase(), DialogPhase::Complete);
        assert_eq!(q.visible_chars(), 2);
    }

    #[test]
    fn tick_on_empty_queue_resets_counter() {
        let mut q = queue(&["Hi"]);
        q.tick(0.05);
        q.lines.clear();
        q.tick(0.5);
        assert_eq!(q.reveal(), 0.0);
    }

    #[test]
    fn click_mid_reveal_snaps_then_dismisses() {
        let mut q = queue(&["Hello"]);
        q.tick(0.1);
        assert_eq!(q.phase(), DialogPhase::Revealing);

        assert_eq!(q.advance(), DialogAdvance::Revealed);
        assert_eq!(q.reveal(), 5.0);
        assert_eq!(q.current(), Some("Hello"));
        assert_eq!(q.phase(), DialogPhase::Complete);

        assert_eq!(q.advance(), DialogAdvance::Dismissed);
        assert!(q.is_empty());
        assert_eq!(q.reveal(), 0.0);
    }

    #[test]
    fn dismiss_resets_counter_for_next_line() {
        let mut q = queue(&["ab", "cdef"]);
        q.tick(1.0);
        q.advance();
        assert_eq!(q.reveal(), 0.0);
        assert_eq!(q.phase(), DialogPhase::Revealing);
        assert_eq!(q.visible_chars(), 1);
    }

    #[test]
    fn push_during_reveal_appends_to_back() {
        let mut q = queue(&["first"]);
        q.tick(0.1);
        q.push_lines(["second"]);
        assert_eq!(q.current(), Some("first"));
        assert!((q.reveal() - 2.0).abs() < EPSILON);
        assert_eq!(q.lines().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn visible_chars_uses_inclusive_threshold() {
        let mut q = queue(&["Hello"]);
        assert_eq!(q.visible_chars(), 1);
        q.tick(0.1); // reveal = 2
        assert_eq!(q.visible_chars(), 3);
        q.tick(0.025); // reveal = 2.5
        assert_eq!(q.visible_chars(), 3);
    }

    #[test]
    fn empty_line_is_complete_immediately() {
        let mut q = queue(&[""]);
        assert_eq!(q.phase(), DialogPhase::Complete);
        assert_eq!(q.advance(), DialogAdvance::Dismissed);
        assert!(q.is_empty());
    }
}
