use std::collections::HashSet;

use coursecart_core::{DomainError, DomainResult, Money};

use crate::course::{Course, CourseId};

/// Built-in courses: `(id, title, price in centavos)`.
const BUILTIN_COURSES: &[(u32, &str, u64)] = &[
    (1, "Maquiagem - Basica", 20_000),
    (2, "Maquiagem Dia - Dia", 25_000),
    (3, "Maquiagem Profissional", 50_000),
    (4, "Maquiagem Casamento", 65_000),
];

/// Ordered, immutable list of courses with unique identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    pub fn new(courses: Vec<Course>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(courses.len());
        for course in &courses {
            if !seen.insert(course.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate course id {}",
                    course.id()
                )));
            }
        }
        Ok(Self { courses })
    }

    /// The compiled-in course list shown by the storefront.
    pub fn builtin() -> Self {
        let courses = BUILTIN_COURSES
            .iter()
            .map(|&(id, title, price)| Course {
                id: CourseId::new(id),
                title: title.to_string(),
                price: Money::from_minor(price),
            })
            .collect();
        Self { courses }
    }

    /// Look up a course by id.
    pub fn find(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
