//! Update function for the manager component.
//!
//! Elm-style: receives the current `SabhaManager`, the `Context` and a `Msg`,
//! mutates the state and returns whether the view should re-render. Every
//! store mutation goes through the two `FormController`s or the store's own
//! `remove`, and each reports its outcome through the toast slot.

use common::export::{export_file_name, export_snapshot};
use common::forms::{coerce_count, Draft, FormController, RecipeField};
use common::model::{Event, Recipe, Record, SyncKind};
use common::requests::{GenerateRecipeRequest, SyncRequest};
use common::store::{KeyValueStorage, RecordStore};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::api::{generate_recipe, sync_records, sync_request_for};
use super::helpers::{apply_theme, download_json, now, today};
use super::messages::Msg;
use super::state::{GeneratorField, SabhaManager, Tab, Toast, ToastKind};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

/// How long a toast stays up unless a newer one replaces it.
const TOAST_MILLIS: u32 = 3000;

pub fn update(component: &mut SabhaManager, ctx: &Context<SabhaManager>, msg: Msg) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            if tab == Tab::AddEvent && !component.event_form.is_open() {
                component.event_form.start_create_on(today());
            }
            component.active_tab = tab;
            true
        }
        Msg::ToggleDarkMode => {
            let dark_mode = !component.store.dark_mode();
            if let Err(e) = component.store.set_dark_mode(dark_mode) {
                gloo_console::warn!(format!("Theme preference not saved: {}", e));
            }
            apply_theme(dark_mode);
            true
        }
        Msg::SetSearch(term) => {
            component.search_term = term;
            true
        }

        Msg::SetEventField(field, value) => {
            component.event_form.set(field, value);
            true
        }
        Msg::SubmitEvent => {
            component.event_form.set_today(today());
            submit(&mut component.event_form, &mut component.store, ctx);
            true
        }
        Msg::CancelEvent => {
            component.event_form.cancel();
            component.event_form.start_create_on(today());
            true
        }
        Msg::EditEvent(id) => {
            if component.event_form.start_edit(&component.store, &id) {
                component.active_tab = Tab::AddEvent;
            }
            true
        }
        Msg::DeleteEvent(id) => {
            remove::<Event, _>(&mut component.store, &id, ctx);
            if component.event_form.editing_id() == Some(id.as_str()) {
                component.event_form.start_create_on(today());
            }
            true
        }

        Msg::ShowRecipeForm => {
            component.recipe_form.start_create_on(today());
            true
        }
        Msg::SetRecipeField(field, value) => {
            component.recipe_form.set(field, value);
            true
        }
        Msg::SubmitRecipe => {
            submit(&mut component.recipe_form, &mut component.store, ctx);
            true
        }
        Msg::CancelRecipe => {
            component.recipe_form.cancel();
            true
        }
        Msg::EditRecipe(id) => {
            component.recipe_form.start_edit(&component.store, &id);
            true
        }
        Msg::DeleteRecipe(id) => {
            remove::<Recipe, _>(&mut component.store, &id, ctx);
            if component.recipe_form.editing_id() == Some(id.as_str()) {
                component.recipe_form.cancel();
            }
            true
        }

        Msg::OpenGenerator => {
            open_top_sheet(&component.generator.sheet_ref);
            false
        }
        Msg::CloseGenerator => {
            close_top_sheet(&component.generator.sheet_ref);
            false
        }
        Msg::SetGeneratorField(field, value) => {
            let generator = &mut component.generator;
            match field {
                GeneratorField::ItemName => generator.item_name = value,
                GeneratorField::Servings => generator.servings = value,
                GeneratorField::Preferences => generator.preferences = value,
            }
            true
        }
        Msg::Generate => {
            let generator = &mut component.generator;
            if generator.loading {
                return false;
            }
            let item_name = generator.item_name.trim().to_string();
            if item_name.is_empty() {
                ctx.link().send_message(Msg::ShowToast(
                    "Enter a dish to generate a recipe for.".to_string(),
                    ToastKind::Error,
                ));
                return false;
            }

            let preferences = generator.preferences.trim();
            let request = GenerateRecipeRequest {
                item_name,
                servings: coerce_count(&generator.servings),
                preferences: (!preferences.is_empty()).then(|| preferences.to_string()),
            };
            generator.loading = true;
            generator.result = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = generate_recipe(request).await;
                link.send_message(Msg::GenerationFinished(result));
            });
            true
        }
        Msg::GenerationFinished(result) => {
            component.generator.loading = false;
            match result {
                Ok(recipe) => component.generator.result = Some(recipe),
                Err(e) => {
                    gloo_console::error!(format!("Error generating recipe: {}", e));
                    ctx.link().send_message(Msg::ShowToast(
                        "Failed to generate recipe".to_string(),
                        ToastKind::Error,
                    ));
                }
            }
            true
        }
        Msg::UseGeneratedRecipe => {
            let Some(text) = component.generator.result.clone() else {
                return false;
            };
            let form = &mut component.recipe_form;
            form.start_create_on(today());
            form.set(RecipeField::Name, component.generator.item_name.trim().to_string());
            form.set(RecipeField::Process, text);
            close_top_sheet(&component.generator.sheet_ref);
            component.active_tab = Tab::Recipes;
            true
        }

        Msg::Export => {
            let snapshot = export_snapshot(&component.store, now());
            let outcome = snapshot
                .to_json_pretty()
                .map_err(|e| e.to_string())
                .and_then(|json| {
                    download_json(&export_file_name(today()), &json)
                        .map_err(|e| format!("{:?}", e))
                });

            let toast = match outcome {
                Ok(()) => ("Data exported successfully!".to_string(), ToastKind::Success),
                Err(e) => {
                    gloo_console::error!(format!("Export failed: {}", e));
                    ("Failed to export data.".to_string(), ToastKind::Error)
                }
            };
            ctx.link().send_message(Msg::ShowToast(toast.0, toast.1));
            false
        }
        Msg::Sync(kind) => {
            if component.syncing.contains(&kind) {
                return false;
            }
            let request = match kind {
                SyncKind::Sabha => sync_request_for(component.store.events()),
                SyncKind::Recipe => sync_request_for(component.store.recipes()),
            };
            let request = match request {
                Ok(request) if request.data.is_empty() => {
                    ctx.link().send_message(Msg::ShowToast(
                        SyncRequest::empty_message(kind),
                        ToastKind::Error,
                    ));
                    return false;
                }
                Ok(request) => request,
                Err(e) => {
                    ctx.link().send_message(Msg::SyncFinished(kind, Err(e)));
                    return false;
                }
            };

            component.syncing.push(kind);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = sync_records(request).await;
                link.send_message(Msg::SyncFinished(kind, result));
            });
            true
        }
        Msg::SyncFinished(kind, result) => {
            component.syncing.retain(|k| *k != kind);
            let label = kind.label();
            let toast = match result {
                Ok(text) => {
                    gloo_console::log!(format!("{} Sync Result: {}", label, text));
                    (format!("{} data synced to Google Sheets!", label), ToastKind::Success)
                }
                Err(e) => {
                    gloo_console::error!(format!("{} Sync Error: {}", label, e));
                    (format!("Failed to sync {} data.", label), ToastKind::Error)
                }
            };
            ctx.link().send_message(Msg::ShowToast(toast.0, toast.1));
            true
        }

        Msg::ShowToast(message, kind) => {
            let seq = component.next_toast_seq;
            component.next_toast_seq = seq.wrapping_add(1);
            component.toast = Some(Toast { message, kind, seq });

            let link = ctx.link().clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
                link.send_message(Msg::DismissToast(seq));
            });
            true
        }
        Msg::DismissToast(seq) => match &component.toast {
            Some(toast) if toast.seq == seq => {
                component.toast = None;
                true
            }
            _ => false,
        },
    }
}

/// Submits a form and reports the outcome as a toast.
fn submit<D, S>(
    form: &mut FormController<D>,
    store: &mut RecordStore<S>,
    ctx: &Context<SabhaManager>,
) where
    D: Draft,
    S: KeyValueStorage,
{
    let label = <D::Record as Record>::LABEL;
    let toast = match form.submit(store) {
        Ok(outcome) => (outcome.message(label), ToastKind::Success),
        Err(e) => {
            gloo_console::error!(format!("{} not saved: {}", label, e));
            (format!("{} could not be saved: {}", label, e), ToastKind::Error)
        }
    };
    ctx.link().send_message(Msg::ShowToast(toast.0, toast.1));
}

fn remove<R, S>(store: &mut RecordStore<S>, id: &str, ctx: &Context<SabhaManager>)
where
    R: Record,
    S: KeyValueStorage,
{
    let toast = match store.remove::<R>(id) {
        Ok(_) => (format!("{} deleted successfully!", R::LABEL), ToastKind::Success),
        Err(e) => (format!("{} could not be deleted: {}", R::LABEL, e), ToastKind::Error),
    };
    ctx.link().send_message(Msg::ShowToast(toast.0, toast.1));
}
