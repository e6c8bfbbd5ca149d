//! The rotation state machine.
//!
//! Pure and clock-free: inputs arrive as method calls, outputs tell the
//! event loop what to do next. All timing (rotation timer, fade deadline)
//! lives in the runner so every property here is testable directly.

use crate::events::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No timer and none coming; the state before `start`, and forever for
    /// a single-slide widget.
    Idle,
    /// Rotation timer armed for the next auto-advance.
    Waiting,
    /// A cross-fade is in flight; no timer armed.
    Transitioning,
    /// Pointer is over the container; no timer armed.
    Paused,
}

/// What the event loop must do after feeding an input to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Arm the rotation timer for the configured wait time.
    ArmTimer,
    /// Cancel any pending rotation timer and start a cross-fade.
    BeginTransition { from: usize, to: usize },
    /// Nothing to do.
    Hold,
}

#[derive(Debug, Clone)]
pub struct SlideshowSm {
    count: usize,
    index_on: usize,
    index_to: Option<usize>,
    hovering: bool,
    phase: Phase,
}

impl SlideshowSm {
    /// A machine over `count` slides (>= 1) starting on `first_index`
    /// (already reduced modulo the count by the registry).
    pub fn new(count: usize, first_index: usize) -> Self {
        debug_assert!(count >= 1);
        Self {
            count,
            index_on: first_index % count.max(1),
            index_to: None,
            hovering: false,
            phase: Phase::Idle,
        }
    }

    /// Index of the currently fully-visible slide. Always in range.
    pub fn index_on(&self) -> usize {
        self.index_on
    }

    /// The transition target, `None` except mid-transition.
    pub fn index_to(&self) -> Option<usize> {
        self.index_to
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Arm the first auto-advance. A single slide never rotates.
    pub fn start(&mut self) -> Step {
        if self.count < 2 {
            return Step::Hold;
        }
        self.phase = Phase::Waiting;
        Step::ArmTimer
    }

    /// The rotation timer elapsed: advance to the next slide.
    pub fn timer_fired(&mut self) -> Step {
        if self.phase != Phase::Waiting {
            return Step::Hold;
        }
        self.begin(self.wrap(self.index_on as isize + 1))
    }

    /// A navigation control was activated. Accepted only while no
    /// transition is in flight; concurrent requests are dropped, not
    /// queued.
    pub fn navigate(&mut self, direction: Direction) -> Step {
        if self.index_to.is_some() || self.count < 2 {
            return Step::Hold;
        }
        let target = match direction {
            Direction::Next => self.wrap(self.index_on as isize + 1),
            Direction::Prev => self.wrap(self.index_on as isize - 1),
        };
        self.begin(target)
    }

    /// Pointer entered the container. Returns true when a pending rotation
    /// timer must be cancelled.
    pub fn hover_enter(&mut self) -> bool {
        self.hovering = true;
        if self.phase == Phase::Waiting {
            self.phase = Phase::Paused;
            true
        } else {
            false
        }
    }

    /// Pointer left the container. Returns true when the rotation timer
    /// must be re-armed (never mid-transition; completion re-arms then).
    pub fn hover_exit(&mut self) -> bool {
        self.hovering = false;
        if self.phase == Phase::Paused {
            self.phase = Phase::Waiting;
            true
        } else {
            false
        }
    }

    /// A cross-fade finished. Commits the landing index only when `target`
    /// is still the pending one; a stale completion is ignored outright.
    /// Returns true when the rotation timer must be re-armed.
    pub fn fade_complete(&mut self, target: usize) -> bool {
        if self.index_to != Some(target) {
            return false;
        }
        self.index_on = target;
        self.index_to = None;
        if self.hovering {
            self.phase = Phase::Paused;
            false
        } else {
            self.phase = Phase::Waiting;
            true
        }
    }

    fn begin(&mut self, target: usize) -> Step {
        let from = self.index_on;
        self.index_to = Some(target);
        self.phase = Phase::Transitioning;
        Step::BeginTransition { from, to: target }
    }

    /// Circular index arithmetic: one step past either end wraps.
    fn wrap(&self, index: isize) -> usize {
        if index < 0 {
            self.count - 1
        } else if index as usize >= self.count {
            0
        } else {
            index as usize
        }
    }
}
