use crate::{
    pages::reports::{
        utils::{admin_generate_message, hr_generate_message},
        ReportsRepository,
    },
    state::session::{use_session, Role},
    utils::{dialog::alert, navigation::redirect},
};
use leptos::*;

/// "Generate" from the Daily Report menu. The outcome is shown as a blocking alert.
pub fn use_report_generation(role: Role) -> Callback<()> {
    let repository = ReportsRepository::from_context();
    let generate = create_action(move |_: &()| {
        let repo = repository.clone();
        async move {
            match role {
                Role::Hr => hr_generate_message(repo.generate_hr_report().await),
                _ => admin_generate_message(repo.generate_admin_report().await),
            }
        }
    });

    create_effect(move |_| {
        if let Some(message) = generate.value().get() {
            alert(&message);
        }
    });

    let pending = generate.pending();
    Callback::new(move |_| {
        if !pending.get_untracked() {
            generate.dispatch(());
        }
    })
}

pub fn use_logout() -> Callback<()> {
    let session = use_session();
    Callback::new(move |_| {
        session.sign_out();
        redirect("/");
    })
}
