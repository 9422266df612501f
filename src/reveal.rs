use log::debug;
use stylist::css;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

/// One-shot visibility latch: hidden until the first intersecting entry, then
/// visible for good.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
}

impl RevealState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` exactly once, on the entry that reveals the element. The
    /// caller stops observing at that point.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns the observer for one element. Dropping it disconnects.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    fn attach(element: &Element, state: UseStateHandle<RevealState>) -> Option<Self> {
        let mut latch = RevealState::default();
        let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if latch.observe(entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                    observer.disconnect();
                    debug!("Revealed <{}>", entry.target().tag_name().to_lowercase());
                    state.set(latch);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Attach the returned ref to an element; the flag turns `true` the first time at
/// least 10% of it is on screen. If the ref is never mounted the flag stays `false`.
#[hook]
pub fn use_scroll_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let state = use_state(RevealState::default);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| RevealObserver::attach(&element, state));
                move || drop(observer)
            },
            (),
        );
    }

    (node, state.is_visible())
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(1000)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let (node, visible) = use_scroll_reveal();

    let transition = css!(
        r#"
            transition-property: opacity, transform;
            transition-timing-function: ease-out;
            transition-duration: ${duration}ms;
            transition-delay: ${delay}ms;
            &.reveal-hidden {
                opacity: 0;
                transform: translateY(2.5rem);
            }
            &.reveal-shown {
                opacity: 1;
                transform: translateY(0);
            }
        "#,
        duration = props.duration_ms,
        delay = props.delay_ms
    );

    html! {
        <div
            ref={node}
            class={classes!(
                transition,
                if visible { "reveal-shown" } else { "reveal-hidden" },
                props.class.clone(),
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!RevealState::default().is_visible());
    }

    #[test]
    fn non_intersecting_entries_do_nothing() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.is_visible());
    }

    #[test]
    fn reveals_once_and_never_reverts() {
        let mut state = RevealState::default();
        assert!(state.observe(true));
        assert!(state.is_visible());

        // scrolling away and back again
        assert!(!state.observe(false));
        assert!(state.is_visible());
        assert!(!state.observe(true));
        assert!(state.is_visible());
    }

    #[test]
    fn transitions_at_most_once_over_any_sequence() {
        let entries = [false, true, false, true, true, false];
        let mut state = RevealState::default();
        let transitions = entries.iter().filter(|&&hit| state.observe(hit)).count();
        assert_eq!(transitions, 1);
        assert!(state.is_visible());
    }
}
