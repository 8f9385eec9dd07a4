//! `coursecart-storefront`
//!
//! **Responsibility:** the course catalog page with its shopping-cart panel.
//!
//! This crate provides:
//! - View model: display strings and hover state derived from the cart
//! - Receipt printing behind the `ReceiptPrinter` seam
//! - Inline styles for every rendered element
//! - The Leptos frontend (wasm32 only)

pub mod print;
pub mod styles;
pub mod view_model;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use print::{print_receipt, PrintError, ReceiptPrinter};
pub use view_model::{
    cart_rows, catalog_cards, format_price, total_label, CartRow, CatalogCard, HoverState,
};
