//! Client-side interaction engine for the portfolio page.
//!
//! Everything here is plain Rust so it runs (and is tested) on any target.
//! The browser bindings in `frontend` feed it DOM handles, observer records
//! and `setTimeout`-backed timers:
//!
//! - scroll spy + smooth-scroll navigation (`scroll_spy`, `navigation`)
//! - one-shot reveal on intersection (`reveal`)
//! - skill bar fill animation (`skill_bar`)
//! - timed and looping typewriter (`typewriter`)
//! - glass card hover transforms (`hover`)
//!
//! All timers are cancellable handles and every callback checks the shared
//! [`Lifecycle`] before it touches the page.

pub mod hover;
pub mod navigation;
pub mod observe;
pub mod registry;
pub mod reveal;
pub mod schedule;
pub mod scroll_spy;
pub mod skill_bar;
pub mod typewriter;

pub use schedule::Lifecycle;

use observe::ObserverOptions;
use skill_bar::SkillBarTiming;
use typewriter::TypewriterTiming;

#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    #[error("browser window is unavailable")]
    MissingWindow,
    #[error("page root has not been rendered")]
    MissingRoot,
    #[error("{observer} observer could not be created: {reason}")]
    Observer { observer: &'static str, reason: String },
}

/// Tunables of the engine; `Default` carries the page's fixed values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    pub scroll_spy_lookahead: f64,
    pub reveal: ObserverOptions,
    pub skill_bars: ObserverOptions,
    pub skill_bar_timing: SkillBarTiming,
    pub typewriter: TypewriterTiming,
    pub typed_phrase: &'static str,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            scroll_spy_lookahead: scroll_spy::SCROLL_SPY_LOOKAHEAD,
            reveal: reveal::REVEAL_OBSERVER,
            skill_bars: skill_bar::SKILL_BAR_OBSERVER,
            skill_bar_timing: SkillBarTiming::default(),
            typewriter: TypewriterTiming::default(),
            typed_phrase: crate::content::TYPED_PHRASE,
        }
    }
}
