use std::{cell::RefCell, fmt, rc::Rc, time::Duration};

use super::{
    observe::{ObserverOptions, Observation},
    schedule::{Lifecycle, Scheduler, TaskSet},
};

/// Bars start once half of the element is visible.
pub const SKILL_BAR_OBSERVER: ObserverOptions = ObserverOptions::new(0.5);
pub const SKILL_BAR_START_DELAY: Duration = Duration::from_millis(200);
pub const SKILL_BAR_FILL_DURATION: Duration = Duration::from_millis(1_000);

/// Inline style surface of one progress element.
pub trait BarTarget {
    fn set_transition(&self, value: &str);
    fn set_width(&self, value: &str);
}

/// A fill level such as `90%` or `87.5%`, applied exactly as configured.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Percent(f64);

impl Percent {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Reads a configured width; absent or malformed values fall back to `0%`.
    pub fn from_config(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or(Self::ZERO)
    }

    pub fn parse(value: &str) -> Option<Self> {
        let number = value.trim().strip_suffix('%')?.trim();
        let parsed = number.parse::<f64>().ok().filter(|parsed| parsed.is_finite())?;

        Some(Self::new(parsed))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarPhase {
    Pending,
    Animating,
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillBarTiming {
    pub start_delay: Duration,
    pub fill_duration: Duration,
}

impl Default for SkillBarTiming {
    fn default() -> Self {
        Self {
            start_delay: SKILL_BAR_START_DELAY,
            fill_duration: SKILL_BAR_FILL_DURATION,
        }
    }
}

impl SkillBarTiming {
    pub fn transition(&self) -> String {
        format!("width {}s ease", self.fill_duration.as_secs_f64())
    }
}

struct Bar<T> {
    element: Rc<T>,
    target: Percent,
    phase: BarPhase,
}

/// Drives each bar through a single `0% -> target` fill.
pub struct SkillBarAnimator<S: Scheduler, T> {
    scheduler: S,
    lifecycle: Lifecycle,
    timing: SkillBarTiming,
    bars: Rc<RefCell<Vec<Bar<T>>>>,
    tasks: Rc<RefCell<TaskSet<S::Handle>>>,
}

impl<S: Scheduler, T: BarTarget + 'static> SkillBarAnimator<S, T> {
    pub fn new(
        scheduler: S,
        lifecycle: Lifecycle,
        timing: SkillBarTiming,
        bars: impl IntoIterator<Item = (T, Percent)>,
    ) -> Self {
        let bars = bars
            .into_iter()
            .map(|(element, target)| Bar {
                element: Rc::new(element),
                target,
                phase: BarPhase::Pending,
            })
            .collect();

        Self {
            scheduler,
            lifecycle,
            timing,
            bars: Rc::new(RefCell::new(bars)),
            tasks: Rc::new(RefCell::new(TaskSet::default())),
        }
    }

    pub fn observe(&self, index: usize, observation: Observation, options: &ObserverOptions) -> bool {
        observation.triggers(options) && self.trigger(index)
    }

    /// Starts the fill for a pending bar. Returns false if the bar already ran.
    pub fn trigger(&self, index: usize) -> bool {
        if !self.lifecycle.is_attached() {
            return false;
        }

        let (element, target) = {
            let mut bars = self.bars.borrow_mut();
            let Some(bar) = bars.get_mut(index) else {
                return false;
            };
            if bar.phase != BarPhase::Pending {
                return false;
            }
            bar.phase = BarPhase::Animating;
            (Rc::clone(&bar.element), bar.target)
        };

        element.set_transition("none");
        element.set_width(&Percent::ZERO.to_string());
        tracing::debug!(index, %target, "skill bar fill scheduled");

        let fill = {
            let lifecycle = self.lifecycle.clone();
            let transition = self.timing.transition();
            let settle = self.settle_task(index);
            let scheduler = self.scheduler.clone();
            let tasks = Rc::clone(&self.tasks);
            let fill_duration = self.timing.fill_duration;

            move || {
                if !lifecycle.is_attached() {
                    return;
                }
                element.set_transition(&transition);
                element.set_width(&target.to_string());

                let handle = scheduler.schedule(fill_duration, settle);
                tasks.borrow_mut().push(handle);
            }
        };

        let handle = self.scheduler.schedule(self.timing.start_delay, Box::new(fill));
        self.tasks.borrow_mut().push(handle);
        true
    }

    fn settle_task(&self, index: usize) -> Box<dyn FnOnce()> {
        let bars = Rc::clone(&self.bars);
        let lifecycle = self.lifecycle.clone();

        Box::new(move || {
            if !lifecycle.is_attached() {
                return;
            }
            if let Some(bar) = bars.borrow_mut().get_mut(index) {
                bar.phase = BarPhase::Settled;
                tracing::debug!(index, target = %bar.target, "skill bar settled");
            }
        })
    }

    #[cfg(test)]
    pub fn phase(&self, index: usize) -> Option<BarPhase> {
        self.bars.borrow().get(index).map(|bar| bar.phase)
    }

    pub fn len(&self) -> usize {
        self.bars.borrow().len()
    }

    /// Cancels every pending delay; used on detach.
    pub fn cancel_all(&self) -> usize {
        self.tasks.borrow_mut().cancel_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::schedule::virtual_time::VirtualScheduler;

    type StyleLog = Rc<RefCell<Vec<(u64, &'static str, String)>>>;

    struct RecordingBar {
        clock: VirtualScheduler,
        log: StyleLog,
    }

    impl RecordingBar {
        fn record(&self, property: &'static str, value: &str) {
            let at = self.clock.now().as_millis() as u64;
            self.log.borrow_mut().push((at, property, value.to_string()));
        }
    }

    impl BarTarget for RecordingBar {
        fn set_transition(&self, value: &str) {
            self.record("transition", value);
        }

        fn set_width(&self, value: &str) {
            self.record("width", value);
        }
    }

    fn animator(
        targets: &[&str],
    ) -> (VirtualScheduler, Lifecycle, StyleLog, SkillBarAnimator<VirtualScheduler, RecordingBar>) {
        let clock = VirtualScheduler::default();
        let lifecycle = Lifecycle::default();
        lifecycle.attach();
        let log = StyleLog::default();

        let bars = targets.iter().map(|target| {
            (
                RecordingBar {
                    clock: clock.clone(),
                    log: Rc::clone(&log),
                },
                Percent::from_config(Some(*target)),
            )
        });
        let animator = SkillBarAnimator::new(clock.clone(), lifecycle.clone(), SkillBarTiming::default(), bars);

        (clock, lifecycle, log, animator)
    }

    fn widths(log: &StyleLog) -> Vec<(u64, String)> {
        log.borrow()
            .iter()
            .filter(|(_, property, _)| *property == "width")
            .map(|(at, _, value)| (*at, value.clone()))
            .collect()
    }

    #[test]
    fn percent_parsing_defaults_to_zero() {
        assert_eq!(Percent::from_config(Some("90%")), Percent::new(90.0));
        assert_eq!(Percent::from_config(Some("140%")), Percent::new(100.0));
        assert_eq!(Percent::from_config(Some("-5%")), Percent::ZERO);
        assert_eq!(Percent::from_config(Some("90")), Percent::ZERO);
        assert_eq!(Percent::from_config(Some("wide%")), Percent::ZERO);
        assert_eq!(Percent::from_config(None), Percent::ZERO);
        assert_eq!(Percent::new(75.0).to_string(), "75%");
    }

    #[test]
    fn fractional_widths_are_applied_as_written() {
        assert_eq!(Percent::from_config(Some("87.5%")).to_string(), "87.5%");
        assert_eq!(Percent::from_config(Some(" 62.25% ")).to_string(), "62.25%");
    }

    #[test]
    fn fractional_target_reaches_the_page_unrounded() {
        let (clock, _lifecycle, log, animator) = animator(&["87.5%"]);

        assert!(animator.trigger(0));
        clock.advance_ms(200);
        assert_eq!(widths(&log), vec![(0, "0%".to_string()), (200, "87.5%".to_string())]);
    }

    #[test]
    fn bar_fills_to_target_after_start_delay() {
        let (clock, _lifecycle, log, animator) = animator(&["75%"]);
        let visible = Observation {
            is_intersecting: true,
            ratio: 0.6,
        };

        assert!(animator.observe(0, visible, &SKILL_BAR_OBSERVER));
        assert_eq!(widths(&log), vec![(0, "0%".to_string())]);
        assert_eq!(animator.phase(0), Some(BarPhase::Animating));

        clock.advance_ms(199);
        assert_eq!(widths(&log).len(), 1);

        clock.advance_ms(1);
        assert_eq!(widths(&log), vec![(0, "0%".to_string()), (200, "75%".to_string())]);
        assert!(log
            .borrow()
            .contains(&(200, "transition", "width 1s ease".to_string())));

        clock.advance_ms(999);
        assert_eq!(animator.phase(0), Some(BarPhase::Animating));
        clock.advance_ms(1);
        assert_eq!(animator.phase(0), Some(BarPhase::Settled));
    }

    #[test]
    fn repeated_intersections_never_restart_a_bar() {
        let (clock, _lifecycle, log, animator) = animator(&["90%", "85%"]);

        assert!(animator.trigger(0));
        clock.advance_ms(100);
        assert!(!animator.trigger(0));
        clock.advance_ms(2_000);
        assert!(!animator.trigger(0));

        assert_eq!(widths(&log), vec![(0, "0%".to_string()), (200, "90%".to_string())]);
        assert_eq!(animator.phase(1), Some(BarPhase::Pending));
        assert!(!animator.trigger(5));
    }

    #[test]
    fn half_hidden_bar_stays_pending() {
        let (_clock, _lifecycle, log, animator) = animator(&["80%"]);
        let glimpse = Observation {
            is_intersecting: true,
            ratio: 0.3,
        };

        assert!(!animator.observe(0, glimpse, &SKILL_BAR_OBSERVER));
        assert!(log.borrow().is_empty());
        assert_eq!(animator.phase(0), Some(BarPhase::Pending));
    }

    #[test]
    fn detach_cancels_pending_fill() {
        let (clock, lifecycle, log, animator) = animator(&["95%"]);

        assert!(animator.trigger(0));
        lifecycle.detach();
        assert_eq!(animator.cancel_all(), 1);

        clock.advance_ms(5_000);
        assert_eq!(widths(&log), vec![(0, "0%".to_string())]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn detached_animator_ignores_triggers() {
        let (_clock, lifecycle, log, animator) = animator(&["95%"]);
        lifecycle.detach();

        assert!(!animator.trigger(0));
        assert!(log.borrow().is_empty());
    }
}
