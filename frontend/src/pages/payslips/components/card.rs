use crate::{
    api::Payslip,
    components::confirm_dialog::ConfirmDialog,
    pages::payslips::{
        repository::PayslipRepository,
        utils::{
            display_email, display_generated, display_month, download_name, payslip_id,
            payslip_title, DELETE_FAILED, DELETE_PROMPT, DOWNLOAD_FAILED, VIEW_FAILED,
        },
    },
    state::delete_flow::{confirm_delete, DeleteFlow},
    utils::{
        dialog::alert,
        download::{open_in_new_tab, trigger_blob_download},
    },
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentUse {
    View,
    Download,
}

/// One payslip. HR gets a delete action; everyone can view and download.
#[component]
pub fn PayslipCard(
    payslip: Payslip,
    can_delete: bool,
    on_deleted: Callback<()>,
) -> impl IntoView {
    let repository = PayslipRepository::from_context();
    let id = payslip_id(&payslip);
    let filename = download_name(&payslip);
    let flow = create_rw_signal(DeleteFlow::Idle);

    let repo_for_docs = repository.clone();
    let id_for_docs = id.clone();
    let document_action = create_action(move |usage: &DocumentUse| {
        let repo = repo_for_docs.clone();
        let id = id_for_docs.clone();
        let filename = filename.clone();
        let usage = *usage;
        async move {
            let outcome = match repo.fetch_document(id).await {
                Ok(doc) => match usage {
                    DocumentUse::View => open_in_new_tab(&doc.bytes, "application/pdf"),
                    DocumentUse::Download => {
                        trigger_blob_download(&filename, &doc.bytes, &doc.content_type)
                    }
                },
                Err(err) => Err(err.error),
            };
            if let Err(err) = outcome {
                log::error!("payslip document failed: {}", err);
                alert(match usage {
                    DocumentUse::View => VIEW_FAILED,
                    DocumentUse::Download => DOWNLOAD_FAILED,
                });
            }
        }
    });
    let busy = document_action.pending();

    let on_confirm_delete = Callback::new(move |_| {
        let repo = repository.clone();
        let id = id.clone();
        confirm_delete(
            flow,
            move || async move { repo.remove_payslip(id).await },
            DELETE_FAILED,
            on_deleted,
        );
    });

    view! {
        <div class="border border-border rounded-lg p-4 flex items-center justify-between gap-4">
            <div class="min-w-0">
                <p class="text-sm font-semibold text-fg truncate">{payslip_title(&payslip)}</p>
                <p class="text-xs text-fg-muted">{display_email(&payslip)}</p>
                <p class="text-xs text-fg-muted">{format!("Month: {}", display_month(&payslip))}</p>
                <p class="text-xs text-fg-muted">
                    {format!("Generated: {}", display_generated(&payslip))}
                </p>
            </div>
            <div class="flex gap-2">
                <button
                    type="button"
                    class="px-3 py-1 text-sm rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
                    disabled=move || busy.get()
                    on:click=move |_| document_action.dispatch(DocumentUse::View)
                >
                    "View"
                </button>
                <button
                    type="button"
                    class="px-3 py-1 text-sm rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || busy.get()
                    on:click=move |_| document_action.dispatch(DocumentUse::Download)
                >
                    "Download"
                </button>
                {can_delete.then(|| view! {
                    <button
                        type="button"
                        class="px-3 py-1 text-sm rounded-md bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                        disabled=move || flow.get().is_deleting()
                        on:click=move |_| flow.update(|f| *f = f.request())
                    >
                        {move || if flow.get().is_deleting() { "Deleting..." } else { "Delete" }}
                    </button>
                })}
            </div>
        </div>
        <ConfirmDialog
            is_open=Signal::derive(move || flow.get().is_confirming())
            title="Delete Payslip".to_string()
            message=DELETE_PROMPT.to_string()
            confirm_label="Delete".to_string()
            destructive=true
            on_confirm=on_confirm_delete
            on_cancel=Callback::new(move |_| flow.update(|f| *f = f.cancel()))
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::payslip, ssr::render_to_string};

    #[test]
    fn employee_variant_has_no_delete() {
        let html = render_to_string(move || {
            view! { <PayslipCard payslip=payslip("2") can_delete=false on_deleted=Callback::new(|_| {})/> }
        });
        assert!(html.contains("payslip-2.pdf"));
        assert!(html.contains("Month: 2025-01"));
        assert!(html.contains("Download"));
        assert!(!html.contains("Delete"));
    }

    #[test]
    fn hr_variant_offers_delete() {
        let html = render_to_string(move || {
            view! { <PayslipCard payslip=payslip("2") can_delete=true on_deleted=Callback::new(|_| {})/> }
        });
        assert!(html.contains("Delete"));
        assert!(!html.contains(DELETE_PROMPT));
    }
}
