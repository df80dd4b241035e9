use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::manager::messages::Msg;
use crate::components::manager::state::{GeneratorField, SabhaManager};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

/// "Generate with AI" sheet. Always mounted; `Msg::OpenGenerator` slides it in.
pub fn generate_dialog(component: &SabhaManager, link: &Scope<SabhaManager>) -> Html {
    let generator = &component.generator;

    let on_item = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetGeneratorField(GeneratorField::ItemName, input.value())
    });
    let on_servings = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetGeneratorField(GeneratorField::Servings, input.value())
    });
    let on_preferences = link.callback(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetGeneratorField(GeneratorField::Preferences, input.value())
    });
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Generate
    });

    html! {
        <YwMaterialTopSheet
            node_ref={generator.sheet_ref.clone()}
            title="Generate Recipe with AI"
            on_close={link.callback(|_| Msg::CloseGenerator)}
        >
            <form {onsubmit}>
                <label class="field">
                    <span>{ "Dish Name" }</span>
                    <input type="text" placeholder="e.g. Dal Bhaat" value={generator.item_name.clone()} oninput={on_item} />
                </label>
                <label class="field">
                    <span>{ "Servings" }</span>
                    <input type="number" min="1" value={generator.servings.clone()} oninput={on_servings} />
                </label>
                <label class="field">
                    <span>{ "Preferences (optional)" }</span>
                    <textarea rows="2" placeholder="No onion or garlic, less spicy..." value={generator.preferences.clone()} oninput={on_preferences} />
                </label>
                <div class="form-actions">
                    <button type="submit" class="primary-btn" disabled={generator.loading}>
                        { if generator.loading { "Generating..." } else { "Generate" } }
                    </button>
                </div>
            </form>

            if let Some(text) = &generator.result {
                <div class="generated-recipe">
                    <pre class="pre-wrap">{ text.clone() }</pre>
                    <button class="secondary-btn" onclick={link.callback(|_| Msg::UseGeneratedRecipe)}>
                        { "Save as Recipe" }
                    </button>
                </div>
            }
        </YwMaterialTopSheet>
    }
}
