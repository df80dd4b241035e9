use common::model::Event;
use common::views::filter_by_search;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::{empty_state, search_box};
use crate::components::manager::helpers::{format_count, format_date};
use crate::components::manager::messages::Msg;
use crate::components::manager::state::SabhaManager;

pub fn event_list_page(component: &SabhaManager, link: &Scope<SabhaManager>) -> Html {
    let events = component.store.events();
    let visible = filter_by_search(events, &component.search_term);

    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetSearch(input.value())
    });

    html! {
        <section class="event-list">
            { search_box(&component.search_term, "Search events...", oninput) }
            {
                if events.is_empty() {
                    empty_state("No events recorded yet. Add your first sabha from the Add Event tab.")
                } else if visible.is_empty() {
                    empty_state("No events match your search.")
                } else {
                    // Newest first, as the list is read top-down.
                    html! { for visible.into_iter().rev().map(|event| event_card(event, link)) }
                }
            }
        </section>
    }
}

fn event_card(event: &Event, link: &Scope<SabhaManager>) -> Html {
    let edit_id = event.id.clone();
    let delete_id = event.id.clone();

    html! {
        <article class="card record-card" key={event.id.clone()}>
            <header class="record-header">
                <div>
                    <h3>{ event.event_name.clone() }</h3>
                    <span class="record-meta">{ format_date(event.date) }</span>
                </div>
                <div class="record-actions">
                    <button class="icon-btn" title="Edit" onclick={link.callback(move |_| Msg::EditEvent(edit_id.clone()))}>
                        <i class="material-icons">{ "edit" }</i>
                    </button>
                    <button class="icon-btn danger" title="Delete" onclick={link.callback(move |_| Msg::DeleteEvent(delete_id.clone()))}>
                        <i class="material-icons">{ "delete" }</i>
                    </button>
                </div>
            </header>

            if !event.pujya_santo.is_empty() {
                <p><strong>{ "Pujya Santo: " }</strong>{ event.pujya_santo.clone() }</p>
            }
            <p class="record-meta">
                { format!(
                    "{} bhaktas ({} gents, {} ladies), cooked for {}",
                    format_count(event.total_bhaktas.into()),
                    format_count(event.gents.into()),
                    format_count(event.ladies.into()),
                    format_count(event.people_count.into()),
                ) }
            </p>
            { multiline("Menu", &event.menu) }
            { multiline("Ingredients", &event.ingredients) }
            { multiline("Leftover Food", &event.leftover_food) }
            { multiline("Remade Items", &event.remade_items) }
            { multiline("Notes", &event.notes) }
        </article>
    }
}

/// Labelled block that keeps the user's line breaks; nothing for empty text.
pub(super) fn multiline(label: &'static str, text: &str) -> Html {
    if text.trim().is_empty() {
        return html! {};
    }
    html! {
        <div class="record-block">
            <strong>{ label }</strong>
            <p class="pre-wrap">{ text.to_string() }</p>
        </div>
    }
}
