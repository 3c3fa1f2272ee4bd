use super::card::PayslipCard;
use crate::{
    api::{Payslip, PersonRecord},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
        modal::Modal,
    },
    pages::payslips::{repository::PayslipRepository, utils::payslip_id},
    state::collection::{CollectionViewModel, Fetcher, ListPhase},
};
use futures::FutureExt;
use leptos::*;
use std::rc::Rc;

pub fn use_payslip_list(employee_id: String) -> CollectionViewModel<Payslip> {
    let repository = PayslipRepository::from_context();
    let fetcher: Fetcher<Payslip> = Rc::new(move || {
        let repo = repository.clone();
        let employee_id = employee_id.clone();
        async move { repo.fetch_payslips(employee_id).await }.boxed_local()
    });
    CollectionViewModel::new(fetcher)
}

#[component]
pub fn PayslipList(#[prop(into)] employee_id: String, can_delete: bool) -> impl IntoView {
    let vm = use_payslip_list(employee_id);
    view! { <PayslipItems vm=vm can_delete=can_delete/> }
}

#[component]
fn PayslipItems(vm: CollectionViewModel<Payslip>, can_delete: bool) -> impl IntoView {
    let on_deleted = vm.on_changed();
    view! {
        {move || match vm.phase.get() {
            ListPhase::Loading => view! { <LoadingSpinner/> }.into_view(),
            ListPhase::Failed(message) => view! { <ErrorMessage message=message/> }.into_view(),
            ListPhase::Empty => {
                view! { <EmptyState title="No payslips found"/> }.into_view()
            }
            ListPhase::Populated => view! {
                <div class="space-y-3">
                    <For
                        each=move || vm.filtered.get()
                        key=payslip_id
                        children=move |payslip: Payslip| {
                            view! { <PayslipCard payslip=payslip can_delete=can_delete on_deleted=on_deleted/> }
                        }
                    />
                </div>
            }
            .into_view(),
        }}
    }
}

#[component]
pub fn PayslipListModal(
    employee: PersonRecord,
    can_delete: bool,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = format!("Payslips: {}", employee.full_name());
    view! {
        <Modal title=title on_close=on_close wide=true>
            <PayslipList employee_id=employee.key() can_delete=can_delete/>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::state::collection::ListState;
    use crate::test_support::{helpers::payslip, ssr::render_to_string};

    fn render_state(state: ListState<Payslip>) -> String {
        render_to_string(move || {
            let fetcher: Fetcher<Payslip> =
                Rc::new(|| async { Ok::<_, ApiError>(Vec::new()) }.boxed_local());
            let vm = CollectionViewModel::new(fetcher);
            vm.state.set(state);
            view! { <PayslipItems vm=vm can_delete=true/> }
        })
    }

    #[test]
    fn empty_list_is_explicit() {
        assert!(render_state(ListState::Ready(Vec::new())).contains("No payslips found"));
    }

    #[test]
    fn ready_list_renders_cards() {
        let html = render_state(ListState::Ready(vec![payslip("1"), payslip("2")]));
        assert!(html.contains("payslip-1.pdf"));
        assert!(html.contains("payslip-2.pdf"));
    }
}
