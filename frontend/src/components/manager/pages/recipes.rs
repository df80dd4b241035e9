//! Recipe book: search, an inline add/edit form, the recipe cards and the
//! entry point to the AI generator sheet.

use common::forms::RecipeField;
use common::model::{Recipe, RecipeCategory};
use common::views::filter_by_search;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::event_list::multiline;
use super::{empty_state, search_box};
use crate::components::manager::messages::Msg;
use crate::components::manager::state::SabhaManager;

pub fn recipes_page(component: &SabhaManager, link: &Scope<SabhaManager>) -> Html {
    let recipes = component.store.recipes();
    let visible = filter_by_search(recipes, &component.search_term);

    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetSearch(input.value())
    });

    html! {
        <section class="recipes">
            <div class="toolbar">
                { search_box(&component.search_term, "Search recipes...", oninput) }
                if !component.recipe_form.is_open() {
                    <button class="primary-btn" onclick={link.callback(|_| Msg::ShowRecipeForm)}>
                        <i class="material-icons">{ "add" }</i>{ " Add Recipe" }
                    </button>
                }
                <button class="secondary-btn" onclick={link.callback(|_| Msg::OpenGenerator)}>
                    <i class="material-icons">{ "auto_awesome" }</i>{ " Generate with AI" }
                </button>
            </div>

            if component.recipe_form.is_open() {
                { recipe_form(component, link) }
            }

            {
                if recipes.is_empty() {
                    empty_state("No recipes saved yet.")
                } else if visible.is_empty() {
                    empty_state("No recipes match your search.")
                } else {
                    html! { for visible.into_iter().map(|recipe| recipe_card(recipe, link)) }
                }
            }
        </section>
    }
}

fn recipe_form(component: &SabhaManager, link: &Scope<SabhaManager>) -> Html {
    let form = &component.recipe_form;
    let draft = form.draft();
    let editing = form.editing_id().is_some();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitRecipe
    });
    let on_name = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetRecipeField(RecipeField::Name, input.value())
    });
    let on_category = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetRecipeField(RecipeField::Category, select.value())
    });

    html! {
        <section class="card form-card">
            <h2>{ if editing { "Edit Recipe" } else { "Add Recipe" } }</h2>
            <form {onsubmit}>
                <label class="field">
                    <span>{ "Recipe Name" }</span>
                    <input type="text" required={RecipeField::Name.is_required()} value={draft.name.clone()} oninput={on_name} />
                </label>
                <label class="field">
                    <span>{ "Category" }</span>
                    <select onchange={on_category}>
                        {
                            for RecipeCategory::ALL.iter().map(|category| {
                                let name = category.as_str();
                                html! {
                                    <option value={name} selected={draft.category == name}>{ name }</option>
                                }
                            })
                        }
                    </select>
                </label>
                { text_area(link, "Ingredients", RecipeField::Ingredients, &draft.ingredients, 5) }
                { text_area(link, "Process", RecipeField::Process, &draft.process, 8) }

                <div class="form-actions">
                    <button type="submit" class="primary-btn">
                        { if editing { "Update Recipe" } else { "Save Recipe" } }
                    </button>
                    <button type="button" class="secondary-btn" onclick={link.callback(|_| Msg::CancelRecipe)}>
                        { "Cancel" }
                    </button>
                </div>
            </form>
        </section>
    }
}

fn text_area(
    link: &Scope<SabhaManager>,
    label: &'static str,
    field: RecipeField,
    value: &str,
    rows: u32,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetRecipeField(field, input.value())
    });

    html! {
        <label class="field">
            <span>{ label }</span>
            <textarea rows={rows.to_string()} required={field.is_required()} value={value.to_string()} {oninput} />
        </label>
    }
}

fn recipe_card(recipe: &Recipe, link: &Scope<SabhaManager>) -> Html {
    let edit_id = recipe.id.clone();
    let delete_id = recipe.id.clone();

    html! {
        <article class="card record-card" key={recipe.id.clone()}>
            <header class="record-header">
                <div>
                    <h3>{ recipe.name.clone() }</h3>
                    <span class="chip">{ recipe.category.as_str() }</span>
                </div>
                <div class="record-actions">
                    <button class="icon-btn" title="Edit" onclick={link.callback(move |_| Msg::EditRecipe(edit_id.clone()))}>
                        <i class="material-icons">{ "edit" }</i>
                    </button>
                    <button class="icon-btn danger" title="Delete" onclick={link.callback(move |_| Msg::DeleteRecipe(delete_id.clone()))}>
                        <i class="material-icons">{ "delete" }</i>
                    </button>
                </div>
            </header>
            { multiline("Ingredients", &recipe.ingredients) }
            { multiline("Process", &recipe.process) }
        </article>
    }
}
