use super::{
    navigation::{parse_anchor, NavAction},
    skill_bar::Percent,
};

/// Page elements the engine works with, collected once at attach.
///
/// `E` is the element handle: `HtmlElement` in the browser, anything
/// comparable in tests.
#[derive(Clone, Debug)]
pub struct ElementRegistry<E> {
    nav_targets: Vec<Option<String>>,
    sections: Vec<(String, E)>,
    fade_targets: Vec<E>,
    skill_bars: Vec<(E, Percent)>,
    typed_text: Option<E>,
}

impl<E> Default for ElementRegistry<E> {
    fn default() -> Self {
        Self {
            nav_targets: Vec::new(),
            sections: Vec::new(),
            fade_targets: Vec::new(),
            skill_bars: Vec::new(),
            typed_text: None,
        }
    }
}

impl<E> ElementRegistry<E> {
    /// Registers a navigation entry by its `href`; malformed links keep their slot but never match.
    pub fn nav_link(&mut self, href: &str) -> &mut Self {
        self.nav_targets.push(parse_anchor(href).map(str::to_string));
        self
    }

    /// Sections without an id cannot be navigated to or spied on.
    pub fn section(&mut self, id: Option<String>, element: E) -> &mut Self {
        if let Some(id) = id.filter(|id| !id.trim().is_empty()) {
            self.sections.push((id, element));
        }
        self
    }

    pub fn fade_target(&mut self, element: E) -> &mut Self {
        self.fade_targets.push(element);
        self
    }

    pub fn skill_bar(&mut self, element: E, width: Option<&str>) -> &mut Self {
        self.skill_bars.push((element, Percent::from_config(width)));
        self
    }

    pub fn typed_text(&mut self, element: E) -> &mut Self {
        self.typed_text = Some(element);
        self
    }

    pub fn nav_targets(&self) -> impl Iterator<Item = &str> + '_ {
        self.nav_targets
            .iter()
            .map(|target| target.as_deref().unwrap_or_default())
    }

    /// Resolves a click on navigation entry `index` to the section to scroll
    /// to and the state change to apply. `None` for malformed or dangling
    /// links; such a click changes nothing.
    pub fn navigation_target(&self, index: usize, href: &str) -> Option<(&E, NavAction)> {
        let section = self.section_element(parse_anchor(href)?)?;
        Some((section, NavAction::Navigated(index)))
    }

    pub fn section_element(&self, id: &str) -> Option<&E> {
        self.sections
            .iter()
            .find(|(section_id, _)| section_id == id)
            .map(|(_, element)| element)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// `(id, top)` pairs in document order for the scroll spy.
    pub fn section_offsets<'a>(&'a self, top: impl Fn(&E) -> f64 + 'a) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.sections
            .iter()
            .map(move |(id, element)| (id.as_str(), top(element)))
    }

    pub fn fade_targets(&self) -> &[E] {
        &self.fade_targets
    }

    pub fn fade_index(&self, matches: impl Fn(&E) -> bool) -> Option<usize> {
        self.fade_targets.iter().position(matches)
    }

    pub fn skill_bars(&self) -> &[(E, Percent)] {
        &self.skill_bars
    }

    pub fn skill_bar_index(&self, matches: impl Fn(&E) -> bool) -> Option<usize> {
        self.skill_bars.iter().position(|(element, _)| matches(element))
    }

    pub fn typed_text_element(&self) -> Option<&E> {
        self.typed_text.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{
        navigation::{entry_for_section, NavState},
        scroll_spy,
    };

    fn page() -> ElementRegistry<&'static str> {
        let mut registry = ElementRegistry::default();
        registry
            .nav_link("#about")
            .nav_link("not-an-anchor")
            .nav_link("#contact")
            .section(Some("home".to_string()), "hero")
            .section(Some("about".to_string()), "about-section")
            .section(None, "anonymous")
            .section(Some("contact".to_string()), "contact-section")
            .fade_target("about-title")
            .fade_target("about-card")
            .skill_bar("python", Some("90%"))
            .skill_bar("broken", None)
            .typed_text("headline");
        registry
    }

    #[test]
    fn sections_resolve_by_id() {
        let registry = page();

        assert_eq!(registry.section_element("about"), Some(&"about-section"));
        assert_eq!(registry.section_element("projects"), None);
        assert_eq!(registry.section_count(), 3);
    }

    #[test]
    fn malformed_nav_links_never_match() {
        let registry = page();

        let targets: Vec<&str> = registry.nav_targets().collect();
        assert_eq!(targets, vec!["about", "", "contact"]);
        assert_eq!(entry_for_section(registry.nav_targets(), Some("contact")), Some(2));
    }

    #[test]
    fn observed_elements_map_back_to_indices() {
        let registry = page();

        assert_eq!(registry.fade_index(|element| *element == "about-card"), Some(1));
        assert_eq!(registry.fade_index(|element| *element == "python"), None);
        assert_eq!(registry.skill_bar_index(|element| *element == "broken"), Some(1));
        assert_eq!(registry.skill_bars()[0].1, Percent::new(90.0));
        assert_eq!(registry.skill_bars()[1].1, Percent::ZERO);
        assert_eq!(registry.typed_text_element(), Some(&"headline"));
    }

    #[test]
    fn spy_over_registry_offsets_selects_entry() {
        let registry = page();
        let tops = |element: &&str| match *element {
            "hero" => 0.0,
            "about-section" => 800.0,
            _ => 2_400.0,
        };

        let current = scroll_spy::current_section(
            registry.section_offsets(tops),
            650.0,
            scroll_spy::SCROLL_SPY_LOOKAHEAD,
        );
        assert_eq!(current, Some("about"));
        assert_eq!(entry_for_section(registry.nav_targets(), current), Some(0));
    }

    #[test]
    fn click_on_resolvable_link_scrolls_and_becomes_sole_active_entry() {
        let registry = page();
        let before = NavState::default()
            .apply(NavAction::Activate(Some(0)))
            .apply(NavAction::ToggleMenu);

        let (section, action) = registry
            .navigation_target(2, "#contact")
            .expect("contact section is registered");
        assert_eq!(*section, "contact-section");

        let after = before.apply(action);
        assert!(after.is_active(2));
        assert!(!after.is_active(0));
        assert!(!after.menu_open());
    }

    #[test]
    fn malformed_or_dangling_clicks_change_nothing() {
        let registry = page();

        for href in ["", "#", "not-an-anchor", "https://example.com/#about", "#projects"] {
            assert!(registry.navigation_target(1, href).is_none(), "href = {href:?}");
        }
    }
}
