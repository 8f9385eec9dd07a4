//! Shopping cart domain module.
//!
//! The cart is a small aggregate: commands are decided by `handle` into
//! events, and events are folded into state by `apply`. All of it is
//! deterministic domain logic (no IO, no rendering, no storage).

pub mod cart;
pub mod line;

pub use cart::{
    AddToCart, Cart, CartCommand, CartEvent, LineAdded, LineRemoved, QuantityIncremented,
    RemoveFromCart,
};
pub use line::CartLine;
