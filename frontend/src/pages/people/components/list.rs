use super::card::PersonCard;
use crate::{
    api::{PeopleSource, PersonRecord},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    state::collection::{CollectionViewModel, ListPhase, ListState},
};
use leptos::*;

use super::field::INPUT_CLASS;

/// Searchable people list. Card actions that change data refresh `vm`.
#[component]
pub fn PeopleList(source: PeopleSource, vm: CollectionViewModel<PersonRecord>) -> impl IntoView {
    let on_changed = vm.on_changed();
    let categories = source.category_options();

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
                <h3 class="text-lg font-semibold text-fg">{source.title()}</h3>
                <div class="flex gap-2">
                    <input
                        type="search"
                        class=INPUT_CLASS
                        placeholder="Search by name, email or card number"
                        prop:value=move || vm.search.get()
                        on:input=move |ev| vm.search.set(event_target_value(&ev))
                    />
                    {(!categories.is_empty()).then(|| view! {
                        <select
                            class=INPUT_CLASS
                            aria-label="Filter by role"
                            prop:value=move || vm.category.get()
                            on:change=move |ev| vm.category.set(event_target_value(&ev))
                        >
                            {categories
                                .iter()
                                .map(|option| view! { <option value=*option>{*option}</option> })
                                .collect_view()}
                        </select>
                    })}
                </div>
            </div>
            {move || match vm.phase.get() {
                ListPhase::Loading => view! { <LoadingSpinner/> }.into_view(),
                ListPhase::Failed(message) => view! { <ErrorMessage message=message/> }.into_view(),
                ListPhase::Empty => view! {
                    <EmptyState
                        title=format!("No {} found", source.kind().label())
                        description="Try a different search or filter.".to_string()
                    />
                }
                .into_view(),
                ListPhase::Populated => view! {
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                        <For
                            each=move || vm.filtered.get()
                            key=|person: &PersonRecord| person.key()
                            children=move |person: PersonRecord| {
                                let key = person.key();
                                let fresh = Signal::derive(move || {
                                    vm.state.with(|state| match state {
                                        ListState::Ready(items) => {
                                            items.iter().find(|p| p.key() == key).cloned()
                                        }
                                        _ => None,
                                    })
                                });
                                view! {
                                    <PersonCard
                                        person=person
                                        source=source
                                        on_changed=on_changed
                                        fresh=fresh
                                    />
                                }
                            }
                        />
                    </div>
                }
                .into_view(),
            }}
        </section>
    }
}
