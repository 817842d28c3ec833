//! Form rendered from an entity's static `FormSection` table

use crate::shared::icons::icon;
use contracts::shared::metadata::{EditableForm, FieldDescriptor};
use leptos::prelude::*;

/// Renders every section of `T` and writes input text back into `form`.
///
/// Each input keeps its own text so partially typed numbers survive; mount a
/// fresh instance (e.g. inside a keyed `move ||` block) when the edited entity
/// changes.
#[component]
pub fn DescriptorForm<T>(form: RwSignal<T>) -> impl IntoView
where
    T: EditableForm + Clone + Send + Sync + 'static,
{
    T::sections()
        .iter()
        .map(|section| {
            let fields = section
                .fields
                .iter()
                .map(|field| descriptor_input(form, field))
                .collect_view();
            view! {
                <div class="form-section">
                    <div class="form-section__header">
                        {icon(section.icon)}
                        <h3 class="form-section__title">{section.title}</h3>
                    </div>
                    <div class="form-section__body">{fields}</div>
                </div>
            }
        })
        .collect_view()
}

fn descriptor_input<T>(form: RwSignal<T>, field: &'static FieldDescriptor) -> impl IntoView
where
    T: EditableForm + Clone + Send + Sync + 'static,
{
    let text = RwSignal::new(form.with_untracked(|f| f.field_value(field.name)));
    let error = Signal::derive(move || {
        let raw = text.get();
        if raw.is_empty() {
            return None;
        }
        field.validate(&raw).err().map(|e| e.to_string())
    });
    let input_id = format!("field-{}", field.name);
    let required = field.validation.is_required();

    view! {
        <div class="form-group">
            <label for=input_id.clone()>
                {field.label}
                {required.then(|| view! { <span class="form-group__required">" *"</span> })}
            </label>
            <input
                id=input_id
                type=field.kind.input_type()
                step=field.kind.is_numeric().then_some("any")
                placeholder=field.placeholder.unwrap_or_default()
                readonly=field.read_only
                prop:value=move || text.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_field_value(field.name, &value));
                    text.set(value);
                }
            />
            {move || error.get().map(|e| view! { <div class="form-group__error">{e}</div> })}
        </div>
    }
}
