use std::fmt;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};
use yew::prelude::*;

use crate::config::{HOME_FALLBACK_PX, SCROLLED_THRESHOLD_PX, SECTION_LOOKAHEAD_PX};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Achievements,
    Projects,
    Contact,
}

impl SectionId {
    /// Sections matched against the scroll position, top to bottom. `Home` is never
    /// matched, it is only the fallback.
    pub const TRACKED: [SectionId; 5] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Achievements,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The element id of the section in the page markup.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Achievements => "achievements",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn scroll_target(self) -> ScrollTarget {
        match self {
            SectionId::Home => ScrollTarget::Origin,
            other => ScrollTarget::Element(other.as_str()),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Origin,
    Element(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { id: SectionId::Home, label: "Home", icon: "⌂" },
    NavItem { id: SectionId::About, label: "About", icon: "👤" },
    NavItem { id: SectionId::Skills, label: "Skills", icon: "</>" },
    NavItem { id: SectionId::Achievements, label: "Awards", icon: "🏆" },
    NavItem { id: SectionId::Projects, label: "Work", icon: "📁" },
    NavItem { id: SectionId::Contact, label: "Contact", icon: "✉" },
];

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Looks up where a section currently sits on the page.
pub trait SectionGeometry {
    fn span(&self, id: SectionId) -> Option<SectionSpan>;
}

/// Section geometry read from the live DOM by element id.
pub struct DocumentGeometry {
    document: Document,
}

impl DocumentGeometry {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl SectionGeometry for DocumentGeometry {
    fn span(&self, id: SectionId) -> Option<SectionSpan> {
        let element = self
            .document
            .get_element_by_id(id.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionSpan::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// First tracked section containing `scroll_y` plus the look-ahead wins. With no
/// match the page falls back to `Home` near the top and otherwise keeps `previous`.
pub fn resolve_active_section<G>(scroll_y: f64, geometry: &G, previous: SectionId) -> SectionId
where
    G: SectionGeometry + ?Sized,
{
    let probe = scroll_y + SECTION_LOOKAHEAD_PX;
    SectionId::TRACKED
        .iter()
        .copied()
        .find(|&id| geometry.span(id).is_some_and(|span| span.contains(probe)))
        .unwrap_or(if scroll_y < HOME_FALLBACK_PX {
            SectionId::Home
        } else {
            previous
        })
}

/// Page-wide scroll state. Only the scroll controller writes it; everything else
/// gets a copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    scrolled: bool,
    active: SectionId,
}

impl ScrollState {
    pub fn scrolled_past_threshold(&self) -> bool {
        self.scrolled
    }

    pub fn active_section(&self) -> SectionId {
        self.active
    }

    /// Recomputes both flags for a new scroll offset. Returns whether anything
    /// changed.
    pub fn sample<G>(&mut self, scroll_y: f64, geometry: &G) -> bool
    where
        G: SectionGeometry + ?Sized,
    {
        let next = ScrollState {
            scrolled: is_scrolled(scroll_y),
            active: resolve_active_section(scroll_y, geometry, self.active),
        };
        let changed = next != *self;
        *self = next;
        changed
    }
}

/// Window scroll subscription. Dropping it removes the listener.
struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    fn attach(window: Window, state: UseStateHandle<ScrollState>) -> Option<Self> {
        let geometry = DocumentGeometry::new(window.document()?);
        let mut current = ScrollState::default();
        if current.sample(window.scroll_y().unwrap_or(0.0), &geometry) {
            state.set(current);
        }

        let window_clone = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
            let previous = current.active_section();
            if current.sample(scroll_y, &geometry) {
                if current.active_section() != previous {
                    debug!("Active section {} -> {}", previous, current.active_section());
                }
                state.set(current);
            }
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

/// Subscribes to window scrolling for the lifetime of the calling component and
/// returns the latest [`ScrollState`].
#[hook]
pub fn use_scroll_tracking() -> ScrollState {
    let state = use_state(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| ScrollListener::attach(window, state));
                move || drop(listener)
            },
            (),
        );
    }

    *state
}

/// Smooth-scrolls to a section. Sections missing from the document are ignored.
pub fn scroll_to_section(id: SectionId) {
    let Some(window) = web_sys::window() else {
        return;
    };

    match id.scroll_target() {
        ScrollTarget::Origin => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        ScrollTarget::Element(element_id) => {
            let Some(element) = window
                .document()
                .and_then(|document| document.get_element_by_id(element_id))
            else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    struct Spans(HashMap<SectionId, SectionSpan>);

    impl SectionGeometry for Spans {
        fn span(&self, id: SectionId) -> Option<SectionSpan> {
            self.0.get(&id).copied()
        }
    }

    fn spans(entries: &[(SectionId, f64, f64)]) -> Spans {
        Spans(
            entries
                .iter()
                .map(|&(id, top, height)| (id, SectionSpan::new(top, height)))
                .collect(),
        )
    }

    fn page() -> Spans {
        spans(&[
            (SectionId::About, 300.0, 400.0),
            (SectionId::Skills, 700.0, 500.0),
            (SectionId::Achievements, 1200.0, 400.0),
            (SectionId::Projects, 1600.0, 800.0),
            (SectionId::Contact, 2400.0, 600.0),
        ])
    }

    #[test]
    fn top_of_page_is_home_and_not_scrolled() {
        let mut state = ScrollState::default();
        state.sample(0.0, &page());
        assert!(!state.scrolled_past_threshold());
        assert_eq!(state.active_section(), SectionId::Home);
    }

    #[test]
    fn just_past_threshold_compacts_nav() {
        let mut state = ScrollState::default();
        assert!(state.sample(25.0, &page()));
        assert!(state.scrolled_past_threshold());
    }

    #[test]
    fn probe_inside_about_selects_about() {
        let geometry = spans(&[(SectionId::About, 300.0, 400.0)]);
        let mut state = ScrollState::default();
        state.sample(200.0, &geometry);
        assert_eq!(state.active_section(), SectionId::About);
    }

    #[test]
    fn span_end_is_exclusive() {
        let geometry = page();
        // probe = 700 sits on the about/skills boundary
        assert_eq!(resolve_active_section(550.0, &geometry, SectionId::Home), SectionId::Skills);
        assert_eq!(resolve_active_section(549.0, &geometry, SectionId::Home), SectionId::About);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let geometry = spans(&[
            (SectionId::Skills, 0.0, 1000.0),
            (SectionId::Projects, 0.0, 1000.0),
        ]);
        assert_eq!(resolve_active_section(300.0, &geometry, SectionId::Home), SectionId::Skills);
    }

    #[test]
    fn gap_below_fallback_goes_home() {
        let geometry = spans(&[(SectionId::About, 500.0, 400.0)]);
        assert_eq!(resolve_active_section(99.0, &geometry, SectionId::Contact), SectionId::Home);
    }

    #[test]
    fn gap_past_fallback_keeps_previous() {
        let geometry = spans(&[(SectionId::About, 500.0, 400.0)]);
        assert_eq!(resolve_active_section(100.0, &geometry, SectionId::Contact), SectionId::Contact);
        assert_eq!(resolve_active_section(2000.0, &geometry, SectionId::Skills), SectionId::Skills);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let geometry = spans(&[(SectionId::Contact, 0.0, 5000.0)]);
        assert_eq!(resolve_active_section(1000.0, &geometry, SectionId::Home), SectionId::Contact);
    }

    #[test]
    fn sample_reports_no_change_when_nothing_moves() {
        let geometry = page();
        let mut state = ScrollState::default();
        state.sample(400.0, &geometry);
        assert!(!state.sample(410.0, &geometry));
    }

    #[test]
    fn home_scrolls_to_origin_and_others_to_their_element() {
        assert_eq!(SectionId::Home.scroll_target(), ScrollTarget::Origin);
        assert_eq!(SectionId::Projects.scroll_target(), ScrollTarget::Element("projects"));
    }

    #[test]
    fn nav_items_cover_every_section_once() {
        let ids: Vec<_> = NAV_ITEMS.iter().map(|item| item.id).collect();
        let mut expected = vec![SectionId::Home];
        expected.extend(SectionId::TRACKED);
        assert_eq!(ids, expected);
    }

    fn any_section() -> impl Strategy<Value = SectionId> {
        prop_oneof![
            Just(SectionId::Home),
            Just(SectionId::About),
            Just(SectionId::Skills),
            Just(SectionId::Achievements),
            Just(SectionId::Projects),
            Just(SectionId::Contact),
        ]
    }

    proptest! {
        #[test]
        fn scrolled_flag_is_strict_threshold(scroll_y in -100.0f64..10_000.0) {
            let mut state = ScrollState::default();
            state.sample(scroll_y, &page());
            prop_assert_eq!(state.scrolled_past_threshold(), scroll_y > 20.0);
        }

        #[test]
        fn active_section_matches_reference_scan(
            scroll_y in 0.0f64..4_000.0,
            previous in any_section(),
        ) {
            let geometry = page();
            let probe = scroll_y + 150.0;
            let expected = SectionId::TRACKED
                .iter()
                .copied()
                .find(|&id| {
                    let span = geometry.span(id).unwrap();
                    probe >= span.top && probe < span.top + span.height
                })
                .unwrap_or(if scroll_y < 100.0 { SectionId::Home } else { previous });
            prop_assert_eq!(resolve_active_section(scroll_y, &geometry, previous), expected);
        }
    }
}
