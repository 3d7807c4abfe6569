pub mod customer_card;
pub mod toast;

#[allow(unused_imports)]
pub use customer_card::CustomerCard;
