//! View rendering for the manager: header, tab bar, the active page, the
//! footer actions and the toast.

use common::model::SyncKind;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::generate::generate_dialog;
use super::messages::Msg;
use super::pages;
use super::state::{SabhaManager, Tab, ToastKind};

pub fn view(component: &SabhaManager, ctx: &Context<SabhaManager>) -> Html {
    let link = ctx.link();

    html! {
        <div class="app">
            { build_header(component, link) }
            { build_tab_bar(component, link) }

            <main class="app-content">
                {
                    match component.active_tab {
                        Tab::Dashboard => pages::dashboard::dashboard_page(component),
                        Tab::AddEvent => pages::event_form::event_form_page(component, link),
                        Tab::Events => pages::event_list::event_list_page(component, link),
                        Tab::Recipes => pages::recipes::recipes_page(component, link),
                    }
                }
            </main>

            { build_footer(component, link) }
            { generate_dialog(component, link) }
            { build_toast(component, link) }
        </div>
    }
}

fn build_header(component: &SabhaManager, link: &Scope<SabhaManager>) -> Html {
    let (icon, title) = if component.store.dark_mode() {
        ("light_mode", "Switch to light mode")
    } else {
        ("dark_mode", "Switch to dark mode")
    };

    html! {
        <header class="app-header">
            <h1>{ "Sabha Manager" }</h1>
            <button class="icon-btn" title={title} onclick={link.callback(|_| Msg::ToggleDarkMode)}>
                <i class="material-icons">{ icon }</i>
            </button>
        </header>
    }
}

fn build_tab_bar(component: &SabhaManager, link: &Scope<SabhaManager>) -> Html {
    html! {
        <nav class="tab-bar">
            {
                for Tab::ALL.iter().map(|&tab| {
                    let class = if component.active_tab == tab { "tab active" } else { "tab" };
                    html! {
                        <button class={class} onclick={link.callback(move |_| Msg::SetTab(tab))}>
                            <i class="material-icons">{ tab.icon() }</i>
                            <span class="icon-label">{ tab.label() }</span>
                        </button>
                    }
                })
            }
        </nav>
    }
}

fn build_footer(component: &SabhaManager, link: &Scope<SabhaManager>) -> Html {
    html! {
        <footer class="app-footer">
            { icon_button("download", "Export Data", link.callback(|_| Msg::Export), false) }
            { sync_button(component, link, SyncKind::Sabha, "Sync Events") }
            { sync_button(component, link, SyncKind::Recipe, "Sync Recipes") }
        </footer>
    }
}

fn sync_button(
    component: &SabhaManager,
    link: &Scope<SabhaManager>,
    kind: SyncKind,
    label: &str,
) -> Html {
    let busy = component.syncing.contains(&kind);
    let label = if busy { "Syncing..." } else { label };
    icon_button("cloud_upload", label, link.callback(move |_| Msg::Sync(kind)), busy)
}

fn build_toast(component: &SabhaManager, link: &Scope<SabhaManager>) -> Html {
    let Some(toast) = &component.toast else {
        return html! {};
    };
    let class = match toast.kind {
        ToastKind::Success => "toast success",
        ToastKind::Error => "toast error",
    };
    let seq = toast.seq;

    html! {
        <div class={class} role="status" onclick={link.callback(move |_| Msg::DismissToast(seq))}>
            { toast.message.clone() }
        </div>
    }
}

pub(super) fn icon_button(
    icon_name: &str,
    label: &str,
    on_click: Callback<MouseEvent>,
    disabled: bool,
) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click} disabled={disabled}>
            <i class="material-icons">{ icon_name.to_string() }</i>
            <span class="icon-label">{ label.to_string() }</span>
        </button>
    }
}
