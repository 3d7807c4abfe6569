use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }

    fn tone(&self) -> &'static str {
        match self.kind {
            ToastKind::Info => "border-gray-200 bg-white text-gray-900",
            ToastKind::Warning => "border-gray-200 bg-yellow-100 text-yellow-700",
            ToastKind::Error => "border-gray-200 bg-red-100 text-red-700",
        }
    }
}

/// Appends a message, dropping the oldest once more than a few are queued.
pub fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= TOAST_LIMIT {
        entries.remove(0);
    }
    entries.push(message);
}

pub fn push_toast(mut toasts: Signal<Vec<ToastMessage>>, kind: ToastKind, message: impl Into<String>) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| enqueue(entries, message));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "list-none space-y-3",
                for message in messages {
                    ToastCard { key: "{message.id}", message: message.clone(), toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let tone = message.tone();
    let ToastMessage { id, text, .. } = message;
    rsx! {
        li {
            class: "pointer-events-auto flex items-center gap-3 rounded-lg border px-3 py-1.5 shadow-lg {tone}",
            p { class: "text-sm font-medium", "{text}" }
            button {
                class: "ml-1 text-xs uppercase text-gray-500",
                onclick: move |_| {
                    let mut toasts = toasts;
                    toasts.with_mut(|items| items.retain(|toast| toast.id != id));
                },
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_drops_oldest_message() {
        let mut entries = Vec::new();
        for n in 0..5 {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Info, format!("message {n}")));
        }

        let texts: Vec<_> = entries.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["message 2", "message 3", "message 4"]);
    }

    #[test]
    fn messages_get_unique_ids() {
        let a = ToastMessage::new(ToastKind::Warning, "a");
        let b = ToastMessage::new(ToastKind::Warning, "a");
        assert_ne!(a.id, b.id);
    }
}
