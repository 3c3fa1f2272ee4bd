use super::{
    utils::{profile_rows, ProfileState},
    view_model::{use_profile, ProfileViewModel},
};
use crate::{
    api::PersonRecord,
    components::{
        layout::{ErrorMessage, LoadingSpinner},
        modal::Modal,
    },
    pages::people::{
        components::edit_form::{EditPersonForm, EditTarget},
        utils::person_avatar,
    },
    state::session::Role,
    utils::{file::selected_file, format::display_or_dash},
};
use leptos::*;

/// Signed-in actor's own profile with picture upload and edit.
#[component]
pub fn ProfileCard(role: Role) -> impl IntoView {
    let vm = use_profile(role);
    view! { <ProfileView vm=vm/> }
}

#[component]
pub fn ProfileView(vm: ProfileViewModel) -> impl IntoView {
    let uploading = vm.upload_action.pending();
    let on_picture = move |ev: web_sys::Event| {
        if let Some(file) = selected_file(&ev) {
            vm.upload_action.dispatch(file);
        }
    };

    let details = move |person: PersonRecord| {
        let name = display_or_dash(Some(&person.full_name()));
        let avatar = person_avatar(&person);
        view! {
            <div class="flex flex-col md:flex-row gap-6 items-start">
                <div class="flex flex-col items-center gap-2">
                    <img src=avatar alt=name.clone() class="h-24 w-24 rounded-full object-cover border border-border"/>
                    <label class="text-xs text-action-primary-bg cursor-pointer">
                        {move || if uploading.get() { "Uploading..." } else { "Change photo" }}
                        <input type="file" accept="image/*" class="hidden" on:change=on_picture/>
                    </label>
                </div>
                <div class="flex-1 min-w-0">
                    <div class="flex items-center justify-between gap-2">
                        <h2 class="text-xl font-semibold text-fg">{name}</h2>
                        <button
                            type="button"
                            class="px-3 py-1 rounded-md bg-action-primary-bg text-action-primary-text text-sm hover:bg-action-primary-bg-hover"
                            on:click=move |_| vm.editing.set(true)
                        >
                            "Edit Profile"
                        </button>
                    </div>
                    <dl class="mt-3 grid grid-cols-1 sm:grid-cols-2 gap-x-6 gap-y-2">
                        {profile_rows(&person)
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div>
                                    <dt class="text-xs text-fg-muted">{label}</dt>
                                    <dd class="text-sm text-fg">{value}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        }
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6">
            {move || match vm.state.get() {
                ProfileState::Loading => view! { <LoadingSpinner/> }.into_view(),
                ProfileState::Failed(message) => view! { <ErrorMessage message=message/> }.into_view(),
                ProfileState::Ready(person) => details(person).into_view(),
            }}
        </section>
        {move || {
            let editing = vm.editing.get();
            vm.state.with(|state| match state {
                ProfileState::Ready(person) if editing => Some(person.clone()),
                _ => None,
            })
            .map(|person| {
                let close = Callback::new(move |_| vm.editing.set(false));
                view! {
                    <Modal title="Edit Profile".to_string() on_close=close wide=true>
                        <EditPersonForm
                            person=person
                            target=EditTarget::OwnProfile(vm.role)
                            on_saved=Callback::new(move |updated: PersonRecord| {
                                vm.apply_update(updated);
                                vm.editing.set(false);
                            })
                            on_cancel=close
                        />
                    </Modal>
                }
            })
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::person, ssr::render_to_string};

    fn render_state(state: ProfileState) -> String {
        render_to_string(move || {
            let vm = use_profile(Role::Hr);
            vm.state.set(state);
            view! { <ProfileView vm=vm/> }
        })
    }

    #[test]
    fn ready_profile_shows_fields() {
        let html = render_state(ProfileState::Ready(person("3", "Meera", "HR")));
        assert!(html.contains("Meera Example"));
        assert!(html.contains("meera@example.com"));
        assert!(html.contains("Joining Date"));
        assert!(html.contains("Change photo"));
        assert!(!html.contains("First Name *"));
    }

    #[test]
    fn failure_shows_message() {
        let html = render_state(ProfileState::Failed("No auth token found.".into()));
        assert!(html.contains("No auth token found."));
    }
}
