use super::{
    repository::ReportsRepository,
    utils::{settle_document, settle_path, ReportState, NO_DAILY_REPORT, NO_REPORT, REPORT_FILE_NAME},
};
use crate::{
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    config::await_asset_base_url,
    utils::{download::ObjectUrl, navigation::go_back},
};
use leptos::*;
use std::{cell::RefCell, rc::Rc};

/// Embedded PDF with a download link, or the loading / empty / error rendering.
#[component]
pub fn ReportFrame(
    state: Signal<ReportState>,
    #[prop(into)] title: String,
    missing_text: &'static str,
    download_name: &'static str,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-fg">{title}</h2>
                <button
                    type="button"
                    class="px-3 py-1 rounded-md border border-border text-sm text-fg hover:bg-action-ghost-bg-hover"
                    on:click=move |_| go_back()
                >
                    "Back"
                </button>
            </div>
            {move || match state.get() {
                ReportState::Loading => view! {
                    <div class="flex flex-col items-center gap-2 py-12">
                        <LoadingSpinner/>
                        <p class="text-fg-muted">"Loading report..."</p>
                    </div>
                }
                .into_view(),
                ReportState::Missing => view! { <EmptyState title=missing_text/> }.into_view(),
                ReportState::Failed(message) => view! { <ErrorMessage message=message/> }.into_view(),
                ReportState::Ready(source) => {
                    let href = source.href();
                    view! {
                        <iframe
                            src=href.clone()
                            title="Daily report"
                            class="w-full h-[75vh] rounded-md border border-border"
                        ></iframe>
                        <a
                            href=href
                            download=download_name
                            class="inline-block px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        >
                            "Download"
                        </a>
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

/// `/view-daily-report`: server-hosted report path resolved against the asset base.
#[component]
pub fn DailyReportPage() -> impl IntoView {
    let repository = ReportsRepository::from_context();
    let state = create_rw_signal(ReportState::Loading);

    create_effect(move |_| {
        let repo = repository.clone();
        spawn_local(async move {
            let result = repo.daily_report_path().await;
            let asset_base = await_asset_base_url().await;
            state.try_set(settle_path(result, &asset_base));
        });
    });

    view! {
        <Layout>
            <ReportFrame
                state=state.into()
                title="Daily Report"
                missing_text=NO_DAILY_REPORT
                download_name=REPORT_FILE_NAME
            />
        </Layout>
    }
}

/// `/admin/view-report`: the PDF bytes become an object URL owned by this page.
#[component]
pub fn ReportViewerPage() -> impl IntoView {
    let repository = ReportsRepository::from_context();
    let state = create_rw_signal(ReportState::Loading);
    let held: Rc<RefCell<Option<Rc<ObjectUrl>>>> = Rc::default();

    let slot = held.clone();
    create_effect(move |_| {
        let repo = repository.clone();
        let slot = slot.clone();
        spawn_local(async move {
            let result = repo.daily_report_pdf().await;
            let next = settle_document(result, |doc| {
                ObjectUrl::from_bytes(&doc.bytes, &doc.content_type)
            });
            *slot.borrow_mut() = next.object_url();
            state.try_set(next);
        });
    });

    on_cleanup(move || {
        if held.borrow_mut().take().is_some() {
            log::debug!("released report object url");
        }
    });

    view! {
        <Layout>
            <ReportFrame
                state=state.into()
                title="Daily Report"
                missing_text=NO_REPORT
                download_name=REPORT_FILE_NAME
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use super::super::utils::ReportSource;

    fn render_state(state: ReportState) -> String {
        render_to_string(move || {
            view! {
                <ReportFrame
                    state=Signal::derive(move || state.clone())
                    title="Daily Report"
                    missing_text=NO_DAILY_REPORT
                    download_name=REPORT_FILE_NAME
                />
            }
        })
    }

    #[test]
    fn missing_report_is_an_empty_state() {
        let html = render_state(ReportState::Missing);
        assert!(html.contains(NO_DAILY_REPORT));
        assert!(!html.contains("animate-spin"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn pending_report_spins() {
        let html = render_state(ReportState::Loading);
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Loading report..."));
    }

    #[test]
    fn ready_report_embeds_and_offers_download() {
        let html = render_state(ReportState::Ready(ReportSource::Remote(
            "https://portal.example.com/files/daily.pdf".into(),
        )));
        assert!(html.contains("https://portal.example.com/files/daily.pdf"));
        assert!(html.contains("DailyReport.pdf"));
        assert!(html.contains("Download"));
    }
}
