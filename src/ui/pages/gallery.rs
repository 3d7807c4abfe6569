use dioxus::prelude::*;

use crate::{
    domain::{filter_customers, tier_counts, Customer, SeverityTier, TierFilter},
    ui::{
        components::{
            customer_card::CustomerCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::version::{version_label, APP_NAME},
};

const FILTERS: [TierFilter; 4] = [
    TierFilter::All,
    TierFilter::Only(SeverityTier::Poor),
    TierFilter::Only(SeverityTier::Moderate),
    TierFilter::Only(SeverityTier::Good),
];

#[component]
pub fn GalleryPage(customers: Vec<Customer>) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut filter = use_signal(TierFilter::default);
    let mut selected = use_signal(|| None::<Customer>);

    let active = filter();
    let counts = tier_counts(&customers);
    let visible = filter_customers(&customers, active);

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            main { class: "mx-auto max-w-5xl px-6 py-10",
                header { class: "flex items-center justify-between gap-4",
                    h1 { class: "text-xl font-semibold text-gray-900", "{APP_NAME}" }
                    span { class: "text-xs text-gray-400", "{version_label()}" }
                }

                section { class: "mt-6 grid grid-cols-3 gap-4",
                    for tier in SeverityTier::ALL {
                        TierStat { tier: tier, count: counts.get(tier), total: counts.total() }
                    }
                }

                nav { class: "mt-6 flex gap-2",
                    for option in FILTERS {
                        FilterButton {
                            active: active == option,
                            onclick: move |_| filter.set(option),
                            label: option.label(),
                        }
                    }
                }

                div { class: "mt-6 grid grid-cols-[2fr_1fr] gap-6",
                    if visible.is_empty() {
                        p { class: "text-sm text-gray-500", "No customers in this tier." }
                    } else {
                        div { class: "grid grid-cols-3 gap-4",
                            for (idx, customer) in visible.into_iter().enumerate() {
                                CustomerCard {
                                    key: "{idx}-{customer.name}",
                                    customer: customer.clone(),
                                    on_activate: Some(EventHandler::new(move |picked: Customer| {
                                        tracing::info!("Selected customer {}", picked.name);
                                        push_toast(toasts, ToastKind::Info, format!("Selected {}", picked.name));
                                        selected.set(Some(picked));
                                    })),
                                }
                            }
                        }
                    }
                    aside {
                        h3 { class: "text-xs font-semibold uppercase text-gray-500", "Selected" }
                        match selected() {
                            Some(customer) => rsx! {
                                CustomerCard { customer: customer, class: Some("mt-3 shadow-lg".to_string()) }
                            },
                            None => rsx! {
                                p { class: "mt-3 text-sm text-gray-400", "Pick a card to pin it here." }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TierStat(tier: SeverityTier, count: usize, total: usize) -> Element {
    rsx! {
        div {
            class: "{theme::tier_stat(tier)}",
            h3 { class: "text-xs font-semibold uppercase", "{tier.label()}" }
            p { class: "mt-1 text-xl font-semibold", "{count}" }
            p { class: "mt-1 text-xs", "of {total} customers" }
        }
    }
}

#[component]
fn FilterButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::filter_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
