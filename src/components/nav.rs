use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::RESUME_URL;
use crate::content::OWNER_INITIALS;
use crate::navigation::{NavItem, ScrollState, SectionId, NAV_ITEMS};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scroll: ScrollState,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { scroll, menu_open, on_toggle_menu, on_navigate } = props;
    let active = scroll.active_section();

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let nav_button = |item: &NavItem, mobile: bool| {
        let id = item.id;
        let onclick = {
            let on_navigate = on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(id))
        };
        let is_active = id == active;
        if mobile {
            html! {
                <button key={id.as_str()} class={classes!("mobile-nav-item", is_active.then_some("active"))} {onclick}>
                    <span class="mobile-nav-icon">{item.icon}</span>
                    <span class="mobile-nav-label">{item.label}</span>
                </button>
            }
        } else {
            html! {
                <button key={id.as_str()} class={classes!("nav-icon", is_active.then_some("active"))} {onclick}>
                    {item.icon}
                    <span class="nav-tooltip">{item.label}</span>
                </button>
            }
        }
    };

    html! {
        <div class="nav-wrapper">
            <div class="nav-anchor">
                <nav class={classes!("nav-pill", scroll.scrolled_past_threshold().then_some("compact"))}>
                    <div class="nav-logo" onclick={toggle_menu}>
                        <div class="nav-badge">{OWNER_INITIALS}</div>
                        <span class="nav-title">{"Portfolio"}</span>
                        <span class="nav-burger">{ if *menu_open { "✕" } else { "☰" } }</span>
                    </div>

                    <div class="nav-icons">
                        { for NAV_ITEMS.iter().map(|item| nav_button(item, false)) }
                    </div>

                    <div class="nav-resume">
                        <a href={RESUME_URL} target="_blank" rel="noopener noreferrer">{"Resume"}</a>
                    </div>
                </nav>

                if *menu_open {
                    <div class="mobile-menu">
                        { for NAV_ITEMS.iter().map(|item| nav_button(item, true)) }
                    </div>
                }
            </div>
        </div>
    }
}
