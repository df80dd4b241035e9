//! Sabha Manager: the single-page application shell.
//!
//! Wires the Yew `Component` implementation to submodules for state, update
//! logic and view rendering. All records live in the `RecordStore` owned by
//! the component state; pages and dialogs only read it and send `Msg`s.

use yew::prelude::*;

mod api;
mod dialogs;
mod helpers;
mod messages;
mod pages;
mod state;
mod update;
mod view;

use helpers::apply_theme;
pub use messages::Msg;
pub use state::SabhaManager;

impl Component for SabhaManager {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        SabhaManager::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            apply_theme(self.store.dark_mode());
        }
    }
}
