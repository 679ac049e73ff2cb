use super::observe::{ObserverOptions, Observation};

pub const VISIBLE_CLASS: &str = "visible";

/// Reveal fires once a tenth of the element is on screen, 50px above the viewport bottom.
pub const REVEAL_OBSERVER: ObserverOptions =
    ObserverOptions::new(0.1).with_root_margin("0px 0px -50px 0px");

/// One-way visibility flags for the registered fade targets.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Returns true only for the transition into the revealed state.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                tracing::debug!(index, "fade target revealed");
                true
            }
            _ => false,
        }
    }

    /// Applies one observer record; true when the element should get its marker now.
    pub fn observe(&mut self, index: usize, observation: Observation, options: &ObserverOptions) -> bool {
        observation.triggers(options) && self.reveal(index)
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.revealed.iter().filter(|flag| !**flag).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTERING: Observation = Observation {
        is_intersecting: true,
        ratio: 0.12,
    };
    const LEAVING: Observation = Observation {
        is_intersecting: false,
        ratio: 0.0,
    };

    #[test]
    fn reveal_happens_once_and_never_reverts() {
        let mut tracker = RevealTracker::new(3);

        assert!(tracker.observe(1, ENTERING, &REVEAL_OBSERVER));
        assert!(!tracker.observe(1, ENTERING, &REVEAL_OBSERVER));
        assert!(!tracker.observe(1, LEAVING, &REVEAL_OBSERVER));

        assert!(tracker.is_revealed(1));
        assert!(!tracker.is_revealed(0));
        assert_eq!(tracker.remaining(), 2);
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut tracker = RevealTracker::new(1);
        let edge = Observation {
            is_intersecting: true,
            ratio: 0.05,
        };

        assert!(!tracker.observe(0, edge, &REVEAL_OBSERVER));
        assert!(!tracker.is_revealed(0));
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut tracker = RevealTracker::new(2);

        assert!(!tracker.reveal(7));
        assert!(!tracker.is_revealed(7));
        assert_eq!(tracker.remaining(), 2);
    }
}
