//! Theme Controls Component
//!
//! Theme toggle and style switcher buttons for the header. Every click is
//! routed through the core `ThemeController`.

use leptos::*;
use wasm_bindgen::JsCast;

use sitenav::theme::{ControlId, DropdownEvent, Theme};

use crate::state::ThemeState;

/// Header theme controls
#[component]
pub fn ThemeControls() -> impl IntoView {
    let state = use_context::<ThemeState>().expect("ThemeState not found");
    let switcher_ref = create_node_ref::<html::Button>();

    // Controls must exist in the DOM before the controller looks for them
    let init_state = state.clone();
    request_animation_frame(move || init_state.init());

    // Close the dropdown on clicks outside the switcher's subtree
    let outside_state = state.clone();
    let _ = window_event_listener(ev::click, move |ev| {
        if !outside_state.is_dropdown_open() {
            return;
        }
        let Some(button) = switcher_ref.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !button.contains(target.as_ref()) {
            outside_state.dropdown_event(DropdownEvent::OutsideClick);
        }
    });

    let toggle_state = state.clone();
    let theme = state.theme;
    let button_state = state.clone();
    let items_state = state.clone();

    view! {
        <button
            id=ControlId::ThemeToggle.element_id()
            type="button"
            class="theme-toggle"
            aria-pressed=move || (theme.get() == Theme::Dark).to_string()
            title=move || format!("Theme: {}", theme.get())
            on:click=move |_| toggle_state.toggle_theme()
        >
            {ControlId::ThemeToggle.glyph()}
        </button>
        <button
            id=ControlId::StyleSwitcher.element_id()
            type="button"
            class="theme-toggle style-switcher"
            node_ref=switcher_ref
            on:click:undelegated=move |ev: ev::MouseEvent| {
                // Clicks bubbling up from dropdown items are not button clicks
                if ev.target() == ev.current_target() {
                    button_state.dropdown_event(DropdownEvent::ButtonClick);
                }
            }
        >
            {ControlId::StyleSwitcher.glyph()}
            <div
                class="theme-dropdown"
                class:show=move || state.dropdown.with(|d| d.as_ref().is_some_and(|d| d.is_open()))
            >
                {move || {
                    let items_state = items_state.clone();
                    items_state.dropdown.get().map(|dropdown| {
                        dropdown
                            .items()
                            .iter()
                            .map(|item| {
                                let key = item.key.clone();
                                let item_state = items_state.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="theme-dropdown-item"
                                        class:active=item.active
                                        data-value=item.key.clone()
                                        on:click:undelegated=move |ev: ev::MouseEvent| {
                                            ev.stop_propagation();
                                            let event = DropdownEvent::ItemClick(key.clone());
                                            item_state.dropdown_event(event);
                                        }
                                    >
                                        {item.label.clone()}
                                    </button>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </button>
    }
}
