use std::{rc::Rc, time::Duration};

use super::schedule::{Lifecycle, Scheduler, TaskSlot};

pub const TYPE_SPEED: Duration = Duration::from_millis(80);
pub const COMPLETION_PAUSE: Duration = Duration::from_millis(2_000);
pub const HOLD_BEFORE_CLEAR: Duration = Duration::from_millis(1_500);
pub const RESTART_DELAY: Duration = Duration::from_millis(500);

/// Anything whose text content the typewriter may replace.
pub trait TextTarget {
    fn set_text(&self, text: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay before each character appears.
    pub speed: Duration,
    /// Pause between the last character and the continuation.
    pub completion_pause: Duration,
    /// Looping only: how long the finished phrase stays before it is cleared.
    pub hold_before_clear: Duration,
    /// Looping only: blank gap before the phrase is typed again.
    pub restart_delay: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            speed: TYPE_SPEED,
            completion_pause: COMPLETION_PAUSE,
            hold_before_clear: HOLD_BEFORE_CLEAR,
            restart_delay: RESTART_DELAY,
        }
    }
}

/// Types text into one target through a chain of cancellable timers.
pub struct Typewriter<S: Scheduler, T> {
    scheduler: S,
    target: Rc<T>,
    slot: TaskSlot<S::Handle>,
    lifecycle: Lifecycle,
    timing: TypewriterTiming,
}

impl<S: Scheduler, T> Clone for Typewriter<S, T> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            target: Rc::clone(&self.target),
            slot: self.slot.clone(),
            lifecycle: self.lifecycle.clone(),
            timing: self.timing,
        }
    }
}

impl<S: Scheduler, T: TextTarget + 'static> Typewriter<S, T> {
    pub fn new(scheduler: S, target: T, lifecycle: Lifecycle, timing: TypewriterTiming) -> Self {
        Self {
            scheduler,
            target: Rc::new(target),
            slot: TaskSlot::default(),
            lifecycle,
            timing,
        }
    }

    /// Clears the target, then reveals `text` one character per `speed`.
    ///
    /// Once the last character is shown, `continuation` runs after the
    /// completion pause.
    pub fn type_text(&self, text: impl Into<Rc<str>>, continuation: Option<Box<dyn FnOnce()>>) {
        if !self.lifecycle.is_attached() {
            return;
        }

        self.target.set_text("");
        self.next_character(text.into(), 0, continuation);
    }

    /// Types `phrase`, holds it, clears it and starts over until stopped.
    pub fn run_loop(&self, phrase: impl Into<Rc<str>>) {
        let phrase = phrase.into();
        tracing::debug!(phrase = %phrase, "typewriter loop started");
        self.cycle(phrase);
    }

    /// Cancels the pending timer; the target keeps whatever it last showed.
    pub fn stop(&self) {
        self.slot.cancel();
    }

    fn cycle(&self, phrase: Rc<str>) {
        let this = self.clone();
        let again = Rc::clone(&phrase);

        self.type_text(
            phrase,
            Some(Box::new(move || {
                let hold = this.clone();
                this.defer(this.timing.hold_before_clear, move || {
                    hold.target.set_text("");
                    let restart = hold.clone();
                    hold.defer(hold.timing.restart_delay, move || restart.cycle(again));
                });
            })),
        );
    }

    fn next_character(&self, text: Rc<str>, shown: usize, continuation: Option<Box<dyn FnOnce()>>) {
        if shown < text.chars().count() {
            let this = self.clone();
            self.defer(self.timing.speed, move || {
                let shown = shown + 1;
                this.target.set_text(char_prefix(&text, shown));
                this.next_character(text, shown, continuation);
            });
        } else if let Some(continuation) = continuation {
            self.defer(self.timing.completion_pause, continuation);
        }
    }

    fn defer(&self, delay: Duration, task: impl FnOnce() + 'static) {
        let lifecycle = self.lifecycle.clone();
        let handle = self.scheduler.schedule(
            delay,
            Box::new(move || {
                if lifecycle.is_attached() {
                    task();
                }
            }),
        );
        self.slot.set(handle);
    }
}

/// First `count` characters of `text`, respecting UTF-8 boundaries.
pub fn char_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
