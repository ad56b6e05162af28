//! Edit Dialog Component
//!
//! Add/edit form rendered from an entity's field schema.

use leptos::*;

use dinedash::{Editable, FieldKind, FieldSpec, FormController};

/// Snapshot of an open form, detached from the dashboard signal
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub title: String,
    pub submit_label: &'static str,
    pub fields: Vec<(FieldSpec, String)>,
    pub missing: Vec<&'static str>,
}

impl FormView {
    /// `None` while the form is closed
    pub fn of<T: Editable>(form: &FormController<T>) -> Option<Self> {
        if !form.is_open() {
            return None;
        }
        Some(Self {
            title: form.title(),
            submit_label: form.submit_label(),
            fields: form
                .values()
                .into_iter()
                .map(|(spec, value)| (*spec, value))
                .collect(),
            missing: form.missing_required(),
        })
    }
}

/// Modal form; edits go through `on_change` field by field
#[component]
pub fn EditDialog(
    #[prop(into)]
    form: Signal<Option<FormView>>,
    #[prop(into)]
    on_change: Callback<(&'static str, String)>,
    #[prop(into)]
    on_save: Callback<()>,
    #[prop(into)]
    on_cancel: Callback<()>,
) -> impl IntoView {
    // Re-render only on open/close, so inputs keep focus while typing
    let shape = create_memo(move |_| form.with(|f| f.as_ref().map(|f| (f.title.clone(), f.submit_label))));

    move || {
        let (title, submit_label) = shape.get()?;
        let fields = form.with_untracked(|f| f.as_ref().map(|f| f.fields.clone()).unwrap_or_default());

        Some(view! {
            <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center">
                <form
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        on_save.call(());
                    }
                    class="bg-[var(--paper)] rounded-xl shadow-xl w-full max-w-2xl p-6 space-y-6"
                >
                    <h2 class="text-xl font-semibold">{title}</h2>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {fields
                            .into_iter()
                            .map(|(spec, value)| view! { <FieldInput spec=spec value=value on_change=on_change /> })
                            .collect_view()}
                    </div>

                    {move || {
                        let missing = form.with(|f| f.as_ref().map(|f| f.missing.clone()).unwrap_or_default());
                        (!missing.is_empty()).then(|| view! {
                            <p class="text-xs text-[var(--muted-foreground)]">
                                {format!("Required: {}", missing.join(", "))}
                            </p>
                        })
                    }}

                    <div class="flex justify-end space-x-3">
                        <button
                            type="button"
                            on:click=move |_| on_cancel.call(())
                            class="px-4 py-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 rounded-lg bg-[var(--primary)] text-white font-medium"
                        >
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        })
    }
}

/// Input type attribute for a text-like field
pub fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Phone => "tel",
        _ => "text",
    }
}

/// Label with the required marker
pub fn field_label(spec: &FieldSpec) -> String {
    if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    }
}

/// Index of the option matching `value`, if any
pub fn selected_option(options: &[&str], value: &str) -> Option<usize> {
    options.iter().position(|option| *option == value)
}

#[component]
fn FieldInput(
    spec: FieldSpec,
    value: String,
    on_change: Callback<(&'static str, String)>,
) -> impl IntoView {
    let key = spec.key;
    let input_class = "w-full bg-transparent rounded-lg px-3 py-2 border border-gray-300 \
                       dark:border-gray-700 focus:border-[var(--primary)] focus:outline-none";

    let control = match spec.kind {
        FieldKind::Select(options) => {
            let selected = selected_option(options, &value);
            view! {
                <select
                    on:change=move |ev| on_change.call((key, event_target_value(&ev)))
                    class=input_class
                >
                    // Without a match the browser would show the first option
                    // while the buffer stays empty
                    {selected.is_none().then(|| view! {
                        <option value="" disabled=true selected=true>
                            {format!("Select {}", spec.label.to_lowercase())}
                        </option>
                    })}
                    {options
                        .iter()
                        .enumerate()
                        .map(|(i, option)| {
                            view! { <option value=*option selected=selected == Some(i)>{*option}</option> }
                        })
                        .collect_view()}
                </select>
            }
            .into_view()
        }
        FieldKind::Multiline => view! {
            <textarea
                rows="3"
                on:input=move |ev| on_change.call((key, event_target_value(&ev)))
                class=input_class
            >
                {value}
            </textarea>
        }
        .into_view(),
        kind => view! {
            <input
                type=input_type(kind)
                value=value
                required=spec.required
                on:input=move |ev| on_change.call((key, event_target_value(&ev)))
                class=input_class
            />
        }
        .into_view(),
    };

    let span = if spec.kind == FieldKind::Multiline { "md:col-span-2" } else { "" };

    view! {
        <label class=format!("block space-y-1 {}", span)>
            <span class="text-sm text-[var(--muted-foreground)]">{field_label(&spec)}</span>
            {control}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinedash::provider::{DataProvider, SeedProvider};
    use dinedash::Restaurant;

    #[test]
    fn test_form_view_closed_and_open() {
        let mut form: FormController<Restaurant> = FormController::new();
        assert!(FormView::of(&form).is_none());

        form.open_for_create();
        let view = FormView::of(&form).unwrap();
        assert_eq!(view.title, "Add New Restaurant");
        assert_eq!(view.submit_label, "Add");
        assert_eq!(view.fields[0].0.key, "name");
        assert!(view.missing.contains(&"name"));
    }

    #[test]
    fn test_form_view_edit() {
        let restaurants = SeedProvider.restaurants();
        let mut form: FormController<Restaurant> = FormController::new();
        form.open_for_edit(&restaurants[0]);

        let view = FormView::of(&form).unwrap();
        assert_eq!(view.title, "Edit Restaurant");
        assert_eq!(view.fields[0].1, "Mario's Italian Bistro");
        assert!(view.missing.is_empty());
    }

    #[test]
    fn test_input_helpers() {
        assert_eq!(input_type(FieldKind::Email), "email");
        assert_eq!(input_type(FieldKind::Text), "text");

        let name = Restaurant::schema()[0];
        assert_eq!(field_label(&name), "Restaurant Name *");
    }

    #[test]
    fn test_blank_select_has_no_selected_option() {
        let partner = Restaurant::schema()
            .iter()
            .find(|field| field.key == "partner")
            .unwrap();
        let FieldKind::Select(options) = partner.kind else {
            panic!("partner should be a select");
        };

        let mut form: FormController<Restaurant> = FormController::new();
        form.open_for_create();
        assert_eq!(selected_option(options, form.value("partner")), None);

        form.update_field("partner", options[1]).unwrap();
        assert_eq!(selected_option(options, form.value("partner")), Some(1));
    }
}
