/// Browsers report crossing ratios with a little float noise (0.0999… for 0.1).
const RATIO_TOLERANCE: f64 = 1e-4;

/// Settings for one shared intersection observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserverOptions {
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px",
        }
    }

    pub const fn with_root_margin(self, root_margin: &'static str) -> Self {
        Self {
            root_margin,
            ..self
        }
    }
}

/// One intersection record as delivered to an observer callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Observation {
    pub fn triggers(self, options: &ObserverOptions) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= options.threshold
    }
}
