use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use js_sys::Array;
use std::{cell::RefCell, io, rc::Rc, time::Duration};
use tracing::{level_filters::LevelFilter, Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    console, window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::content::{
    ContactIcon, ProjectIcon, SocialIcon, ABOUT_PARAGRAPHS, COLLABORATION_TEXT, CONTACT_ITEMS,
    FOOTER_TEXT, HERO_DESCRIPTION, MAILTO_HREF, NAV_ITEMS, OWNER_NAME, PROFILE_IMAGE, PROJECTS,
    SECTION_IDS, SKILL_CATEGORIES, SOCIAL_LINKS, STATS, TYPED_PHRASE,
};
use crate::interaction::{
    hover::CardHover,
    navigation::{entry_for_section, NavAction, NavState, ScrollMode, ACTIVE_CLASS, MENU_OPEN_CLASS},
    observe::{Observation, ObserverOptions},
    registry::ElementRegistry,
    reveal::{RevealTracker, VISIBLE_CLASS},
    schedule::{Scheduler, TaskHandle},
    scroll_spy::current_section,
    skill_bar::{BarTarget, SkillBarAnimator},
    typewriter::{TextTarget, Typewriter},
    AttachError, InteractionConfig, Lifecycle,
};

const NAV_LINK_SELECTOR: &str = ".nav-link";
const SECTION_SELECTOR: &str = "section[id]";
const FADE_SELECTOR: &str = ".fade-in";
const SKILL_BAR_SELECTOR: &str = ".skill-progress";
const TYPED_TEXT_SELECTOR: &str = ".animated-text";
const SKILL_WIDTH_ATTRIBUTE: &str = "data-width";

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Hands each formatted `tracing` event to the console method matching its level.
struct ConsoleWriter;

struct ConsoleLine {
    level: Level,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }

        let line = JsValue::from_str(text);
        if self.level == Level::ERROR {
            console::error_1(&line);
        } else if self.level == Level::WARN {
            console::warn_1(&line);
        } else if self.level == Level::INFO {
            console::info_1(&line);
        } else {
            console::debug_1(&line);
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> ConsoleLine {
        ConsoleLine {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> ConsoleLine {
        ConsoleLine {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

fn init_logging() {
    let max_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // No clock on wasm32-unknown-unknown; the console stamps entries itself.
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter)
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .try_init();
}

#[derive(Clone, Copy)]
struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

impl TaskHandle for Timeout {
    fn cancel(self) {
        // Dropping a pending Timeout clears it.
        drop(self);
    }
}

impl TextTarget for HtmlElement {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

impl BarTarget for HtmlElement {
    fn set_transition(&self, value: &str) {
        let _ = self.style().set_property("transition", value);
    }

    fn set_width(&self, value: &str) {
        let _ = self.style().set_property("width", value);
    }
}

fn same_node(registered: &HtmlElement, observed: &Element) -> bool {
    let registered: &JsValue = registered.as_ref();
    let observed: &JsValue = observed.as_ref();
    registered == observed
}

fn observation(entry: &IntersectionObserverEntry) -> Observation {
    Observation {
        is_intersecting: entry.is_intersecting(),
        ratio: entry.intersection_ratio(),
    }
}

fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn collect_registry(root: &Element) -> ElementRegistry<HtmlElement> {
    let mut registry = ElementRegistry::default();

    for link in query_all(root, NAV_LINK_SELECTOR) {
        registry.nav_link(&link.get_attribute("href").unwrap_or_default());
    }
    for section in query_all(root, SECTION_SELECTOR) {
        registry.section(section.get_attribute("id"), section);
    }
    for target in query_all(root, FADE_SELECTOR) {
        registry.fade_target(target);
    }
    for bar in query_all(root, SKILL_BAR_SELECTOR) {
        let width = bar.get_attribute(SKILL_WIDTH_ATTRIBUTE);
        registry.skill_bar(bar, width.as_deref());
    }
    if let Some(heading) = query_all(root, TYPED_TEXT_SELECTOR).into_iter().next() {
        registry.typed_text(heading);
    }

    registry
}

/// One intersection observer shared by every element of a role.
struct ObserverBinding {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObserverBinding {
    fn new<'a>(
        name: &'static str,
        options: &ObserverOptions,
        targets: impl IntoIterator<Item = &'a HtmlElement>,
        mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self, AttachError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_entry(&entry, &observer);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|error| AttachError::Observer {
                observer: name,
                reason: format!("{error:?}"),
            })?;

        for target in targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observer setup is optional: without it the page just skips the reveal and
/// skill-bar animations while navigation and the scroll spy keep working.
fn optional_observer(binding: Result<ObserverBinding, AttachError>) -> Option<ObserverBinding> {
    match binding {
        Ok(binding) => Some(binding),
        Err(error) => {
            tracing::warn!(%error, "page animations disabled");
            None
        }
    }
}

/// Everything wired at attach; dropping it unwires the page again.
struct InteractionEngine {
    lifecycle: Lifecycle,
    registry: Rc<ElementRegistry<HtmlElement>>,
    scroll_mode: ScrollMode,
    _scroll_listener: EventListener,
    _reveal_observer: Option<ObserverBinding>,
    _skill_observer: Option<ObserverBinding>,
    skill_bars: Rc<SkillBarAnimator<BrowserScheduler, HtmlElement>>,
    typewriter: Option<Typewriter<BrowserScheduler, HtmlElement>>,
}

impl InteractionEngine {
    fn attach(
        root: &Element,
        config: InteractionConfig,
        on_spy: Callback<Option<usize>>,
    ) -> Result<Self, AttachError> {
        let window = window().ok_or(AttachError::MissingWindow)?;
        let registry = Rc::new(collect_registry(root));
        let lifecycle = Lifecycle::default();
        lifecycle.attach();

        let spy = {
            let registry = Rc::clone(&registry);
            let lifecycle = lifecycle.clone();
            let window = window.clone();
            let lookahead = config.scroll_spy_lookahead;

            Rc::new(move || {
                if !lifecycle.is_attached() {
                    return;
                }
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let offsets = registry.section_offsets(|section| f64::from(section.offset_top()));
                let current = current_section(offsets, scroll_y, lookahead);
                on_spy.emit(entry_for_section(registry.nav_targets(), current));
            })
        };
        let scroll_listener = {
            let spy = Rc::clone(&spy);
            EventListener::new(&window, "scroll", move |_| spy())
        };

        let reveal_observer = optional_observer({
            let fade_targets = Rc::clone(&registry);
            let lifecycle = lifecycle.clone();
            let tracker = RefCell::new(RevealTracker::new(registry.fade_targets().len()));
            let options = config.reveal;

            ObserverBinding::new("reveal", &options, registry.fade_targets(), move |entry, observer| {
                if !lifecycle.is_attached() {
                    return;
                }
                let target = entry.target();
                let Some(index) = fade_targets.fade_index(|element| same_node(element, &target)) else {
                    return;
                };
                if tracker.borrow_mut().observe(index, observation(entry), &options) {
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            })
        });

        let skill_bars = Rc::new(SkillBarAnimator::new(
            BrowserScheduler,
            lifecycle.clone(),
            config.skill_bar_timing,
            registry
                .skill_bars()
                .iter()
                .map(|(element, target)| (element.clone(), *target)),
        ));

        let skill_observer = optional_observer({
            let bar_elements = Rc::clone(&registry);
            let lifecycle = lifecycle.clone();
            let skill_bars = Rc::clone(&skill_bars);
            let options = config.skill_bars;
            let targets = registry.skill_bars().iter().map(|(element, _)| element);

            ObserverBinding::new("skill bar", &options, targets, move |entry, observer| {
                if !lifecycle.is_attached() {
                    return;
                }
                let target = entry.target();
                let Some(index) = bar_elements.skill_bar_index(|element| same_node(element, &target)) else {
                    return;
                };
                if skill_bars.observe(index, observation(entry), &options) {
                    observer.unobserve(&target);
                }
            })
        });

        let typewriter = registry.typed_text_element().cloned().map(|heading| {
            let typewriter = Typewriter::new(BrowserScheduler, heading, lifecycle.clone(), config.typewriter);
            typewriter.run_loop(config.typed_phrase);
            typewriter
        });

        spy();

        tracing::info!(
            sections = registry.section_count(),
            fade_targets = registry.fade_targets().len(),
            skill_bars = skill_bars.len(),
            observers = reveal_observer.is_some() && skill_observer.is_some(),
            "interaction engine attached"
        );

        Ok(Self {
            lifecycle,
            registry,
            scroll_mode: ScrollMode::for_motion_preference(prefers_reduced_motion()),
            _scroll_listener: scroll_listener,
            _reveal_observer: reveal_observer,
            _skill_observer: skill_observer,
            skill_bars,
            typewriter,
        })
    }

    /// Scrolls to the section behind a navigation click. `None` when the
    /// link is malformed or dangling; nothing moves in that case.
    fn navigate(&self, index: usize, href: &str) -> Option<NavAction> {
        let Some((section, action)) = self.registry.navigation_target(index, href) else {
            tracing::debug!(index, href, "navigation target not found");
            return None;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match self.scroll_mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Auto => ScrollBehavior::Auto,
        });
        section.scroll_into_view_with_scroll_into_view_options(&options);
        Some(action)
    }
}

impl Drop for InteractionEngine {
    fn drop(&mut self) {
        self.lifecycle.detach();
        if let Some(typewriter) = self.typewriter.as_ref() {
            typewriter.stop();
        }
        let cancelled = self.skill_bars.cancel_all();
        tracing::info!(cancelled, "interaction engine detached");
    }
}

/// Whether the engine took the click. Without one the browser keeps its
/// default anchor jump.
fn navigate_click(
    engine: Option<&InteractionEngine>,
    index: usize,
    href: &str,
    dispatch: impl FnOnce(NavAction),
) -> bool {
    let Some(engine) = engine else {
        return false;
    };
    if let Some(action) = engine.navigate(index, href) {
        dispatch(action);
    }
    true
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    index: usize,
    label: AttrValue,
    href: AttrValue,
    active: bool,
    #[prop_or_default]
    call_to_action: bool,
    /// Returns false when no engine is attached, leaving the browser's own anchor jump.
    on_navigate: Callback<(usize, AttrValue), bool>,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let index = props.index;
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            if on_navigate.emit((index, href.clone())) {
                event.prevent_default();
            }
        })
    };

    html! {
        <li>
            <a
                href={props.href.clone()}
                class={classes!(
                    "nav-link",
                    props.call_to_action.then_some("contact-btn"),
                    props.active.then_some(ACTIVE_CLASS),
                )}
                onclick={onclick}
            >
                {props.label.clone()}
            </a>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct GlassCardProps {
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Children,
}

#[function_component(GlassCard)]
fn glass_card(props: &GlassCardProps) -> Html {
    let hover = use_state(CardHover::default);

    let onmouseenter = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(hover.entered()))
    };
    let onmouseleave = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(hover.left()))
    };

    html! {
        <div
            class={classes!("glass-card", props.class.clone())}
            style={hover.style()}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}

fn social_icon(icon: SocialIcon) -> Html {
    match icon {
        SocialIcon::GitHub => html! {
            <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
                <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z" />
            </svg>
        },
        SocialIcon::LinkedIn => html! {
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z" />
            </svg>
        },
    }
}

fn project_icon(icon: ProjectIcon) -> Html {
    let shapes = match icon {
        ProjectIcon::LineChart => html! {
            <>
                <path d="M3 3v18h18" />
                <path d="M18.7 8l-5.1 5.2-2.8-2.7L7 14.3" />
            </>
        },
        ProjectIcon::Monitor => html! {
            <>
                <rect x="2" y="3" width="20" height="14" rx="2" ry="2" />
                <line x1="8" y1="21" x2="16" y2="21" />
                <line x1="12" y1="17" x2="12" y2="21" />
            </>
        },
        ProjectIcon::BarChart => html! {
            <>
                <line x1="12" y1="20" x2="12" y2="10" />
                <line x1="18" y1="20" x2="18" y2="4" />
                <line x1="6" y1="20" x2="6" y2="16" />
            </>
        },
    };

    html! {
        <svg width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            {shapes}
        </svg>
    }
}

fn contact_icon(icon: ContactIcon) -> Html {
    let shapes = match icon {
        ContactIcon::Mail => html! {
            <>
                <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" />
                <polyline points="22,6 12,13 2,6" />
            </>
        },
        ContactIcon::Phone => html! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        },
        ContactIcon::Chat => html! {
            <path d="M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z" />
        },
        ContactIcon::Person => html! {
            <>
                <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" />
                <circle cx="12" cy="7" r="4" />
            </>
        },
    };

    html! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            {shapes}
        </svg>
    }
}

#[function_component(App)]
fn app() -> Html {
    let [home, about, projects, skills, contact] = SECTION_IDS;
    let nav = use_reducer_eq(NavState::default);
    let root = use_node_ref();
    let engine = use_mut_ref(|| None::<InteractionEngine>);

    {
        let root = root.clone();
        let engine = engine.clone();
        let dispatcher = nav.dispatcher();
        use_effect_with((), move |_| {
            let on_spy = Callback::from(move |entry: Option<usize>| {
                dispatcher.dispatch(NavAction::Activate(entry));
            });

            let attached = root
                .cast::<Element>()
                .ok_or(AttachError::MissingRoot)
                .and_then(|root| InteractionEngine::attach(&root, InteractionConfig::default(), on_spy));

            match attached {
                Ok(attached) => *engine.borrow_mut() = Some(attached),
                Err(error) => tracing::warn!(%error, "interaction engine not attached"),
            }

            move || {
                // Dropping the engine detaches it.
                let attached = engine.borrow_mut().take();
                drop(attached);
            }
        });
    }

    let on_toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    let on_navigate = {
        let engine = engine.clone();
        let dispatcher = nav.dispatcher();
        Callback::from(move |(index, href): (usize, AttrValue)| {
            navigate_click(engine.borrow().as_ref(), index, &href, |action| {
                dispatcher.dispatch(action)
            })
        })
    };

    html! {
        <div class="portfolio-container" ref={root}>
            <nav class="main-nav">
                <button class="menu-toggle" type="button" onclick={on_toggle_menu} aria-label="Toggle menu" aria-expanded={nav.menu_open().to_string()}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={classes!("nav-menu", nav.menu_open().then_some(MENU_OPEN_CLASS))}>
                    { for NAV_ITEMS.iter().enumerate().map(|(index, item)| html! {
                        <NavLink
                            index={index}
                            label={item.label}
                            href={item.href}
                            active={nav.is_active(index)}
                            call_to_action={item.call_to_action}
                            on_navigate={on_navigate.clone()}
                        />
                    }) }
                </ul>
            </nav>

            <section id={home} class="hero">
                <div class="hero-container">
                    <div class="hero-content">
                        <div class="hero-text">
                            <div class="animated-text-container">
                                <h1 class="animated-text" aria-label={TYPED_PHRASE}></h1>
                            </div>
                            <p class="hero-description">{HERO_DESCRIPTION}</p>
                            <div class="cta-buttons">
                                <a href="#projects" class="btn btn-primary">{"View My Work"}</a>
                                <a href="#contact" class="btn btn-secondary">{"Get In Touch"}</a>
                            </div>
                            <div class="social-links">
                                { for SOCIAL_LINKS.iter().map(|link| html! {
                                    <a
                                        href={link.href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="social-link"
                                        aria-label={link.label}
                                    >
                                        {social_icon(link.icon)}
                                    </a>
                                }) }
                            </div>
                        </div>
                    </div>
                    <div class="hero-image">
                        <div class="profile-image-container">
                            <div class="geometric-decoration"></div>
                            <img src={PROFILE_IMAGE} alt={OWNER_NAME} class="profile-image" />
                            <div class="geometric-decoration-2"></div>
                        </div>
                        <h4 class="profile-name">{OWNER_NAME}</h4>
                    </div>
                </div>
            </section>

            <section id={about}>
                <div class="container">
                    <h2 class="section-title fade-in">{"About Me"}</h2>
                    <div class="about-grid">
                        <GlassCard class="fade-in">
                            <h3>{"Professional Background"}</h3>
                            { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                                <p class="about-info">{*paragraph}</p>
                            }) }
                        </GlassCard>
                        <div class="stats-grid fade-in">
                            { for STATS.iter().map(|stat| html! {
                                <div class="stat-item">
                                    <div class="stat-number">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section id={projects}>
                <div class="container">
                    <h2 class="section-title">{"Featured Projects"}</h2>
                    <div class="projects-grid">
                        { for PROJECTS.iter().map(|project| html! {
                            <div class="project-card">
                                <div class="project-content">
                                    <div class="project-icon">{project_icon(project.icon)}</div>
                                    <h3 class="project-title">{project.title}</h3>
                                    <p class="project-description">{project.description}</p>
                                    <div class="tech-tags">
                                        { for project.tags.iter().map(|tag| html! {
                                            <span class="tech-tag">{*tag}</span>
                                        }) }
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={skills}>
                <div class="container">
                    <h2 class="section-title fade-in">{"Technical Expertise"}</h2>
                    <div class="skills-grid">
                        { for SKILL_CATEGORIES.iter().map(|category| html! {
                            <GlassCard class={classes!("skill-category", "fade-in")}>
                                <h3>{category.title}</h3>
                                { for category.skills.iter().map(|skill| html! {
                                    <div class="skill-item">
                                        <span>{skill.name}</span>
                                        <div class="skill-bar">
                                            <div class="skill-progress" data-width={skill.width}></div>
                                        </div>
                                    </div>
                                }) }
                            </GlassCard>
                        }) }
                    </div>
                </div>
            </section>

            <section id={contact}>
                <div class="container">
                    <h2 class="section-title fade-in">{"Professional Contact"}</h2>
                    <div class="contact-grid">
                        <div class="contact-info fade-in">
                            { for CONTACT_ITEMS.iter().map(|item| html! {
                                <div class="contact-item">
                                    <div class="contact-icon">{contact_icon(item.icon)}</div>
                                    <div>
                                        <h4>{item.label}</h4>
                                        <p>{item.value}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <GlassCard class="fade-in">
                            <h3>{"Let's Collaborate"}</h3>
                            <p class="collaboration-text">{COLLABORATION_TEXT}</p>
                            <div class="cta-buttons">
                                <a href={MAILTO_HREF} class="btn btn-primary">{"Send Message"}</a>
                            </div>
                        </GlassCard>
                    </div>
                </div>
            </section>

            <footer>
                <p>{FOOTER_TEXT}</p>
            </footer>
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    init_logging();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
