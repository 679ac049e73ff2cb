pub const ACTIVE_CLASS: &str = "active";
pub const MENU_OPEN_CLASS: &str = "nav-menu-open";

/// Navigation view state: which entry is highlighted and whether the narrow-layout menu is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    active: Option<usize>,
    menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    ToggleMenu,
    /// Scroll spy result, already mapped to an entry index.
    Activate(Option<usize>),
    /// A navigation click that resolved to a section.
    Navigated(usize),
}

impl NavState {
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            NavAction::Activate(active) => Self { active, ..self },
            NavAction::Navigated(index) => Self {
                active: Some(index),
                menu_open: false,
            },
        }
    }

    #[cfg(test)]
    pub fn active(self) -> Option<usize> {
        self.active
    }

    pub fn is_active(self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn menu_open(self) -> bool {
        self.menu_open
    }
}

/// Maps the scroll spy's section id onto the first entry that targets it.
pub fn entry_for_section<'a, I>(targets: I, section: Option<&str>) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let section = section?;
    targets.into_iter().position(|target| target == section)
}

/// Extracts the section id from an in-page link such as `#about`.
///
/// Anything else (empty, a bare `#`, external URLs, ids with whitespace) is
/// treated as malformed and the click handler bails out.
pub fn parse_anchor(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;

    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return None;
    }

    Some(id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    /// Let the browser jump without easing.
    Auto,
}

impl ScrollMode {
    pub fn for_motion_preference(reduced_motion: bool) -> Self {
        if reduced_motion {
            Self::Auto
        } else {
            Self::Smooth
        }
    }
}
