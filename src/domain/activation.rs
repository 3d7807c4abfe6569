//! Interaction rules for the two card variants.

use super::customer::Customer;

/// Key names (as reported by the renderer) that activate an interactive card.
pub const SELECT_KEYS: [&str; 2] = ["Enter", " "];

/// Presentation variant, fixed when the card is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardMode {
    Interactive,
    Static,
}

impl CardMode {
    pub fn from_handler<T>(handler: Option<&T>) -> Self {
        if handler.is_some() {
            CardMode::Interactive
        } else {
            CardMode::Static
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, CardMode::Interactive)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardInput<'a> {
    Pointer,
    Key(&'a str),
}

/// Outcome of an input that activates the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation {
    /// Set for key activations so Space does not scroll the page.
    pub suppress_default: bool,
}

pub fn is_select_key(key: &str) -> bool {
    SELECT_KEYS.contains(&key)
}

pub fn resolve_input(mode: CardMode, input: CardInput<'_>) -> Option<Activation> {
    if !mode.is_interactive() {
        return None;
    }
    match input {
        CardInput::Pointer => Some(Activation {
            suppress_default: false,
        }),
        CardInput::Key(key) if is_select_key(key) => Some(Activation {
            suppress_default: true,
        }),
        CardInput::Key(_) => None,
    }
}

/// Resolves one input and, if it activates the card, hands a copy of the
/// customer to `on_activate` exactly once.
pub fn dispatch<F>(
    mode: CardMode,
    customer: &Customer,
    input: CardInput<'_>,
    on_activate: F,
) -> Option<Activation>
where
    F: FnOnce(Customer),
{
    let activation = resolve_input(mode, input)?;
    on_activate(customer.clone());
    Some(activation)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn jane() -> Customer {
        Customer::new("Jane Doe", "Acme", 25.0).with_domains(["acme.com"])
    }

    #[test]
    fn mode_follows_handler_presence() {
        let handler = |_: Customer| {};
        assert_eq!(CardMode::from_handler(Some(&handler)), CardMode::Interactive);
        assert_eq!(CardMode::from_handler::<()>(None), CardMode::Static);
    }

    #[test]
    fn static_cards_ignore_every_input() {
        let calls = RefCell::new(0);
        for input in [CardInput::Pointer, CardInput::Key("Enter"), CardInput::Key(" ")] {
            let outcome = dispatch(CardMode::Static, &jane(), input, |_| *calls.borrow_mut() += 1);
            assert_eq!(outcome, None);
        }
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn click_invokes_once_with_unchanged_customer() {
        let received = RefCell::new(Vec::new());
        let customer = jane();

        let outcome = dispatch(CardMode::Interactive, &customer, CardInput::Pointer, |c| {
            received.borrow_mut().push(c)
        });

        assert_eq!(outcome, Some(Activation { suppress_default: false }));
        assert_eq!(*received.borrow(), vec![customer]);
    }

    #[test]
    fn select_keys_invoke_once_and_suppress_default() {
        for key in ["Enter", " "] {
            let calls = RefCell::new(0);
            let outcome = dispatch(CardMode::Interactive, &jane(), CardInput::Key(key), |_| {
                *calls.borrow_mut() += 1
            });

            assert_eq!(outcome, Some(Activation { suppress_default: true }), "key {key:?}");
            assert_eq!(*calls.borrow(), 1, "key {key:?}");
        }
    }

    #[test]
    fn other_keys_do_nothing() {
        let calls = RefCell::new(0);
        for key in ["a", "Tab", "Escape", "Spacebar", "ArrowDown", "enter"] {
            let outcome = dispatch(CardMode::Interactive, &jane(), CardInput::Key(key), |_| {
                *calls.borrow_mut() += 1
            });
            assert_eq!(outcome, None, "key {key:?}");
        }
        assert_eq!(*calls.borrow(), 0);
    }
}
