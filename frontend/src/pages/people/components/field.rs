use crate::pages::people::utils::{PersonField, GENDER_OPTIONS};
use leptos::*;

pub const INPUT_CLASS: &str =
    "mt-1 w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

/// One labelled input for a person field. Gender renders as a select.
#[component]
pub fn PersonFieldInput(
    field: PersonField,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let label = field.label();
    let control = if field.is_choice() {
        view! {
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| on_input.call(event_target_value(&ev))
            >
                <option value="">"Select"</option>
                {GENDER_OPTIONS
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        }
        .into_view()
    } else {
        view! {
            <input
                type=field.input_type()
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        }
        .into_view()
    };
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            {control}
        </label>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn gender_renders_as_select_with_options() {
        let html = render_to_string(move || {
            view! {
                <PersonFieldInput
                    field=PersonField::Gender
                    value=Signal::derive(String::new)
                    on_input=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("<select"));
        assert!(html.contains("Female"));
    }

    #[test]
    fn password_uses_password_input() {
        let html = render_to_string(move || {
            view! {
                <PersonFieldInput
                    field=PersonField::Password
                    value=Signal::derive(String::new)
                    on_input=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Password *"));
    }
}
