//! Cart line: one course with its quantity.

use serde::{Deserialize, Serialize};

use coursecart_catalog::{Course, CourseId};
use coursecart_core::{DomainError, DomainResult, Money};

/// One course in the cart. Quantity is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    course: Course,
    quantity: u32,
}

impl CartLine {
    pub fn new(course: Course, quantity: u32) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(Self { course, quantity })
    }

    pub(crate) fn first(course: Course) -> Self {
        Self {
            course,
            quantity: 1,
        }
    }

    /// Returns false (and keeps the old quantity) for zero.
    pub(crate) fn set_quantity(&mut self, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        self.quantity = quantity;
        true
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn course_id(&self) -> CourseId {
        self.course.id()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.course.price()
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.course.price().times(self.quantity)
    }
}
