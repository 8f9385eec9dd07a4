//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two `Money`
/// amounts of 200.00 are the same amount, while two carts are distinct even
/// when they hold the same lines.
///
/// To "modify" a value object, build a new one (`Money::times`,
/// `Money + Money`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
