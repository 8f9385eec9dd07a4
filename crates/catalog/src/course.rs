use serde::{Deserialize, Serialize};

use coursecart_core::{DomainError, DomainResult, Money};

/// Course identifier (unique and stable within a catalog).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u32);

impl CourseId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for CourseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A purchasable course.
///
/// Deserialization goes through `Course::new`, so a decoded course is always
/// valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord")]
pub struct Course {
    pub(crate) id: CourseId,
    pub(crate) title: String,
    pub(crate) price: Money,
}

impl Course {
    pub fn new(id: CourseId, title: impl Into<String>, price: Money) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation(format!("course {id}: title cannot be empty")));
        }
        Ok(Self { id, title, price })
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

/// Unvalidated wire shape of a `Course`.
#[derive(Deserialize)]
struct CourseRecord {
    id: CourseId,
    title: String,
    price: Money,
}

impl TryFrom<CourseRecord> for Course {
    type Error = DomainError;

    fn try_from(record: CourseRecord) -> DomainResult<Self> {
        Course::new(record.id, record.title, record.price)
    }
}
