//! Labeled input with an inline validation message.

use leptos::prelude::*;

/// Text input bound to `value`. Editing calls `on_edit` so the owning form
/// can clear this field's error and the banner.
#[component]
pub fn FormField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] autocomplete: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    on_edit: Callback<()>,
) -> impl IntoView {
    let input_id = format!("field-{name}");

    view! {
        <div class="form-field" class:form-field--invalid=move || error.get().is_some()>
            <label class="form-field__label" for=input_id.clone()>{label}</label>
            <input
                id=input_id
                class="form-field__input"
                type=input_type
                name=name
                autocomplete=autocomplete
                required=true
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    on_edit.run(());
                }
            />
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
