use dioxus::prelude::*;

use crate::domain::{
    accessible_label, classify, dispatch, format_score, summarize, CardInput, CardMode, Customer,
};
use crate::ui::theme;

/// Summary card for one customer.
///
/// With `on_activate` the card behaves like a button: it is focusable and fires
/// on click, Enter or Space. Without it the card is purely informational.
/// `class` is appended to the default container classes.
#[component]
pub fn CustomerCard(
    customer: Customer,
    on_activate: Option<EventHandler<Customer>>,
    class: Option<String>,
) -> Element {
    let mode = CardMode::from_handler(on_activate.as_ref());
    let container_class = theme::card_class(mode, class.as_deref());
    let badge = classify(customer.health_score);
    let badge_class = theme::badge_class(badge.background);
    let score = format_score(customer.health_score);
    let aria = accessible_label(customer.health_score);
    let summary = summarize(Some(customer.domain_list()));

    let body = rsx! {
        div { class: "flex items-start justify-between gap-3",
            div { class: "min-w-0 flex-1",
                h3 { class: "truncate text-base font-semibold text-gray-900", "{customer.name}" }
                p { class: "truncate text-sm text-gray-600", "{customer.company}" }
            }
            div { class: "{badge_class}", "aria-label": "{aria}",
                span { class: "text-sm font-medium {badge.text}", "{score}" }
            }
        }
        if !summary.is_empty() {
            div { class: "mt-3 border-t border-gray-100 pt-3",
                p { class: "text-xs text-gray-500",
                    for domain in summary.displayed.iter() {
                        span { key: "{domain}", class: "font-mono", "{domain}" }
                    }
                    if let Some(more) = summary.overflow_label() {
                        span { class: "ml-1 text-gray-400", "{more}" }
                    }
                }
            }
        }
    };

    let Some(handler) = on_activate else {
        return rsx! {
            div { class: "{container_class}", {body} }
        };
    };

    let clicked = customer.clone();
    let pressed = customer;
    rsx! {
        div {
            class: "{container_class}",
            role: "button",
            tabindex: "0",
            onclick: move |_| {
                if dispatch(mode, &clicked, CardInput::Pointer, |c| handler.call(c)).is_some() {
                    tracing::debug!("Customer card activated by pointer: {}", clicked.name);
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                let key = evt.key().to_string();
                let Some(activation) = dispatch(mode, &pressed, CardInput::Key(&key), |c| handler.call(c)) else {
                    return;
                };
                if activation.suppress_default {
                    evt.prevent_default();
                }
                tracing::debug!("Customer card activated by key {key:?}: {}", pressed.name);
            },
            {body}
        }
    }
}
