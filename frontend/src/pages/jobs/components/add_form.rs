use crate::{
    components::layout::MessageBanner,
    pages::{
        jobs::{utils::AddJobFormState, view_model::use_add_job_view_model},
        people::components::field::INPUT_CLASS,
    },
    state::message::MessageState,
};
use leptos::{ev::SubmitEvent, *};

type FieldSetter = fn(&mut AddJobFormState, String);
type FieldGetter = fn(&AddJobFormState) -> String;

const TEXT_FIELDS: [(&str, &str, FieldGetter, FieldSetter); 6] = [
    ("Job Title *", "text", |f| f.job_title.clone(), |f, v| f.job_title = v),
    ("Domain", "text", |f| f.domain.clone(), |f, v| f.domain = v),
    ("Experience Level", "text", |f| f.experience_level.clone(), |f, v| f.experience_level = v),
    ("Job Type", "text", |f| f.job_type.clone(), |f, v| f.job_type = v),
    ("Salary Range", "text", |f| f.salary_range.clone(), |f, v| f.salary_range = v),
    ("Closing Date", "date", |f| f.closing_date.clone(), |f, v| f.closing_date = v),
];

const AREA_FIELDS: [(&str, FieldGetter, FieldSetter); 3] = [
    ("Description", |f| f.description.clone(), |f, v| f.description = v),
    ("Requirements", |f| f.requirements.clone(), |f, v| f.requirements = v),
    ("Responsibilities", |f| f.responsibilities.clone(), |f, v| f.responsibilities = v),
];

#[component]
pub fn AddJobForm(on_added: Callback<()>) -> impl IntoView {
    let vm = use_add_job_view_model(on_added);
    let pending = vm.submit_action.pending();
    let form = vm.form;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="space-y-4">
            <MessageBanner
                success=Signal::derive(move || vm.messages.with(|m| m.success.clone()))
                error=Signal::derive(move || vm.messages.with(|m| m.error.clone()))
                on_dismiss=Callback::new(move |_| vm.messages.update(MessageState::clear))
            />
            <form class="space-y-4" novalidate on:submit=on_submit>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {TEXT_FIELDS
                        .iter()
                        .map(|(label, kind, get, set)| {
                            let (get, set) = (*get, *set);
                            view! {
                                <label class="block text-sm font-medium text-fg">
                                    {*label}
                                    <input
                                        type=*kind
                                        class=INPUT_CLASS
                                        prop:value=move || form.with(get)
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| set(f, value));
                                        }
                                    />
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
                {AREA_FIELDS
                    .iter()
                    .map(|(label, get, set)| {
                        let (get, set) = (*get, *set);
                        view! {
                            <label class="block text-sm font-medium text-fg">
                                {*label}
                                <textarea
                                    rows="3"
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(get)
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| set(f, value));
                                    }
                                ></textarea>
                            </label>
                        }
                    })
                    .collect_view()}
                <label class="flex items-center gap-2 text-sm text-fg">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_active)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.is_active = checked);
                        }
                    />
                    "Active"
                </label>
                <div class="flex justify-end">
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Posting..." } else { "Post Job" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
