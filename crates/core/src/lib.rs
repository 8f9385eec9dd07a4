//! `coursecart-core` — domain building blocks shared by the storefront crates.
//!
//! This crate contains **pure domain** primitives (no browser or host concerns).

pub mod aggregate;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use error::{DomainError, DomainResult};
pub use id::CartId;
pub use money::Money;
pub use value_object::ValueObject;
