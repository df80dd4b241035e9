//! Add/Edit Event page. The form is always shown; while editing, the title
//! changes and a cancel button returns to a blank form.

use common::forms::EventField;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::manager::messages::Msg;
use crate::components::manager::state::SabhaManager;

pub fn event_form_page(component: &SabhaManager, link: &Scope<SabhaManager>) -> Html {
    let form = &component.event_form;
    let draft = form.draft();
    let editing = form.editing_id().is_some();
    let title = if editing { "Edit Event" } else { "Add New Event" };
    let submit_label = if editing { "Update Event" } else { "Save Event" };

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitEvent
    });

    html! {
        <section class="card form-card">
            <h2>{ title }</h2>
            <form {onsubmit}>
                <div class="form-row">
                    { input_field(link, "Date", EventField::Date, "date", &draft.date) }
                    { input_field(link, "Event Name", EventField::EventName, "text", &draft.event_name) }
                </div>
                { input_field(link, "Pujya Santo", EventField::PujyaSanto, "text", &draft.pujya_santo) }
                <div class="form-row">
                    { input_field(link, "Total Bhaktas", EventField::TotalBhaktas, "number", &draft.total_bhaktas) }
                    { input_field(link, "Gents", EventField::Gents, "number", &draft.gents) }
                    { input_field(link, "Ladies", EventField::Ladies, "number", &draft.ladies) }
                </div>
                { text_area(link, "Menu (one item per line)", EventField::Menu, &draft.menu) }
                { text_area(link, "Ingredients Used", EventField::Ingredients, &draft.ingredients) }
                { input_field(link, "Cooked For (people)", EventField::PeopleCount, "number", &draft.people_count) }
                { text_area(link, "Leftover Food", EventField::LeftoverFood, &draft.leftover_food) }
                { text_area(link, "Remade Items", EventField::RemadeItems, &draft.remade_items) }
                { text_area(link, "Notes", EventField::Notes, &draft.notes) }

                <div class="form-actions">
                    <button type="submit" class="primary-btn">{ submit_label }</button>
                    if editing {
                        <button type="button" class="secondary-btn" onclick={link.callback(|_| Msg::CancelEvent)}>
                            { "Cancel" }
                        </button>
                    }
                </div>
            </form>
        </section>
    }
}

fn input_field(
    link: &Scope<SabhaManager>,
    label: &'static str,
    field: EventField,
    kind: &'static str,
    value: &str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetEventField(field, input.value())
    });
    let required = field.is_required();
    let min = (kind == "number").then_some("0");

    html! {
        <label class="field">
            <span>{ label }</span>
            <input type={kind} value={value.to_string()} {min} {required} {oninput} />
        </label>
    }
}

fn text_area(link: &Scope<SabhaManager>, label: &'static str, field: EventField, value: &str) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetEventField(field, input.value())
    });

    html! {
        <label class="field">
            <span>{ label }</span>
            <textarea rows="3" required={field.is_required()} value={value.to_string()} {oninput} />
        </label>
    }
}
