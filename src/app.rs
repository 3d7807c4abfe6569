use dioxus::prelude::*;

use crate::{
    domain::Customer,
    infra::customers::load_customers,
    ui::{
        components::toast::{Toast, ToastKind, ToastMessage},
        pages::GalleryPage,
    },
    util::{assets, config::AppConfig},
};

/// Customers to show plus anything worth telling the user about how they were loaded.
#[derive(Clone, Debug, Default)]
struct Roster {
    customers: Vec<Customer>,
    notices: Vec<ToastMessage>,
}

#[component]
pub fn App() -> Element {
    let roster = use_hook(load_roster);

    let toasts = use_signal({
        let notices = roster.notices.clone();
        move || notices
    });
    use_context_provider(|| toasts);

    rsx! {
        document::Style { "{assets::main_css()}" }
        GalleryPage { customers: roster.customers.clone() }
        Toast {}
    }
}

fn load_roster() -> Roster {
    let config = AppConfig::from_env().unwrap_or_default();
    let mut roster = Roster::default();

    match load_customers(config.data_path.as_deref()) {
        Ok(loaded) => {
            if let Some(reason) = loaded.fallback_reason {
                roster.notices.push(ToastMessage::new(
                    ToastKind::Warning,
                    format!("Showing built-in customers: {reason}"),
                ));
            }
            if loaded.customers.is_empty() {
                tracing::warn!("Customer data set is empty");
                roster
                    .notices
                    .push(ToastMessage::new(ToastKind::Warning, "No customers to show."));
            }
            roster.customers = loaded.customers;
        }
        Err(err) => {
            tracing::error!("Failed to load customers: {err}");
            roster.notices.push(ToastMessage::new(
                ToastKind::Error,
                format!("Failed to load customers: {err}"),
            ));
        }
    }

    roster
}
