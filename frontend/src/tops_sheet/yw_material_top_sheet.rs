//! Slide-down sheet used for dialogs that overlay the current tab.
//!
//! The sheet is always mounted; `open_top_sheet` / `close_top_sheet` toggle the
//! `show` class that the stylesheet animates.

use web_sys::HtmlElement;
use yew::prelude::*;

pub struct YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    pub title: AttrValue,
    /// Fired by the close button; the parent decides whether to close.
    pub on_close: Callback<MouseEvent>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="top-sheet" ref={props.node_ref.clone()}>
                <div class="top-sheet-header">
                    <h2>{ props.title.clone() }</h2>
                    <button class="icon-btn" title="Close" onclick={props.on_close.clone()}>{ "✕" }</button>
                </div>
                <div class="top-sheet-body">
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
        top_sheet.class_list().add_1("show").ok();
    }
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
        top_sheet.class_list().remove_1("show").ok();
    }
}
