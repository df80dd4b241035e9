//! One render function per tab.

pub mod dashboard;
pub mod event_form;
pub mod event_list;
pub mod recipes;

use yew::prelude::*;

/// Search box shared by the events and recipes pages.
pub(super) fn search_box(value: &str, placeholder: &'static str, oninput: Callback<InputEvent>) -> Html {
    html! {
        <div class="search-box">
            <i class="material-icons">{ "search" }</i>
            <input type="search" placeholder={placeholder} value={value.to_string()} {oninput} />
        </div>
    }
}

pub(super) fn empty_state(message: &'static str) -> Html {
    html! { <p class="empty-state">{ message }</p> }
}
