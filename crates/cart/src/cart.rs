use serde::{Deserialize, Serialize};
use tracing::debug;

use coursecart_catalog::{Catalog, Course, CourseId};
use coursecart_core::{Aggregate, AggregateRoot, CartId, DomainError, Money};

use crate::line::CartLine;

/// Aggregate root: Cart.
///
/// Lines are kept in first-add order; at most one line exists per course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    catalog: Catalog,
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    /// Empty cart over the given catalog.
    pub fn new(id: CartId, catalog: Catalog) -> Self {
        Self {
            id,
            catalog,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, course_id: CourseId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.course_id() == course_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Sum of unit price times quantity over every line; zero when empty.
    ///
    /// Recomputed on each call.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add one unit of a course. Unknown ids are ignored.
    pub fn add_to_cart(&mut self, course_id: CourseId) -> Vec<CartEvent> {
        let events = self.decide_add(course_id);
        self.apply_all(&events);
        events
    }

    /// Drop the line for a course. Absent ids are ignored.
    pub fn remove_from_cart(&mut self, course_id: CourseId) -> Vec<CartEvent> {
        let events = self.decide_remove(course_id);
        self.apply_all(&events);
        events
    }

    fn apply_all(&mut self, events: &[CartEvent]) {
        for event in events {
            self.apply(event);
        }
    }

    fn decide_add(&self, course_id: CourseId) -> Vec<CartEvent> {
        let Some(course) = self.catalog.find(course_id) else {
            debug!(cart_id = %self.id, %course_id, "add ignored: unknown course");
            return Vec::new();
        };

        match self.line(course_id) {
            Some(line) => vec![CartEvent::QuantityIncremented(QuantityIncremented {
                cart_id: self.id,
                course_id,
                quantity: line.quantity().saturating_add(1),
            })],
            None => vec![CartEvent::LineAdded(LineAdded {
                cart_id: self.id,
                course: course.clone(),
            })],
        }
    }

    fn decide_remove(&self, course_id: CourseId) -> Vec<CartEvent> {
        if self.line(course_id).is_none() {
            debug!(cart_id = %self.id, %course_id, "remove ignored: course not in cart");
            return Vec::new();
        }
        vec![CartEvent::LineRemoved(LineRemoved {
            cart_id: self.id,
            course_id,
        })]
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddToCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCart {
    pub course_id: CourseId,
}

/// Command: RemoveFromCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFromCart {
    pub course_id: CourseId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddToCart(AddToCart),
    RemoveFromCart(RemoveFromCart),
}

/// Event: LineAdded (first add of a course).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAdded {
    pub cart_id: CartId,
    pub course: Course,
}

/// Event: QuantityIncremented (repeat add). Carries the new quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityIncremented {
    pub cart_id: CartId,
    pub course_id: CourseId,
    pub quantity: u32,
}

/// Event: LineRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRemoved {
    pub cart_id: CartId,
    pub course_id: CourseId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    LineAdded(LineAdded),
    QuantityIncremented(QuantityIncremented),
    LineRemoved(LineRemoved),
}

impl CartEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            CartEvent::LineAdded(_) => "cart.line.added",
            CartEvent::QuantityIncremented(_) => "cart.line.quantity_incremented",
            CartEvent::LineRemoved(_) => "cart.line.removed",
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    /// Events that would break a cart invariant (a second line for one
    /// course, a zero quantity, a line that isn't there) are skipped and do
    /// not bump the version.
    fn apply(&mut self, event: &Self::Event) {
        let applied = match event {
            CartEvent::LineAdded(e) => {
                if self.line(e.course.id()).is_some() {
                    false
                } else {
                    self.lines.push(CartLine::first(e.course.clone()));
                    true
                }
            }
            CartEvent::QuantityIncremented(e) => self
                .lines
                .iter_mut()
                .find(|line| line.course_id() == e.course_id)
                .is_some_and(|line| line.set_quantity(e.quantity)),
            CartEvent::LineRemoved(e) => {
                let before = self.lines.len();
                self.lines.retain(|line| line.course_id() != e.course_id);
                self.lines.len() != before
            }
        };

        if applied {
            self.version += 1;
        } else {
            debug!(cart_id = %self.id, event_type = event.event_type(), "event skipped");
        }
    }

    /// Never fails: unknown or absent course ids produce no events.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        Ok(match command {
            CartCommand::AddToCart(cmd) => self.decide_add(cmd.course_id),
            CartCommand::RemoveFromCart(cmd) => self.decide_remove(cmd.course_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cart() -> Cart {
        Cart::new(CartId::new(), Catalog::builtin())
    }

    fn id(n: u32) -> CourseId {
        CourseId::new(n)
    }

    #[test]
    fn first_add_appends_line_with_quantity_one() {
        let mut cart = test_cart();
        let events = cart.add_to_cart(id(2));

        assert_eq!(events.len(), 1);
        match &events[0] {
            CartEvent::LineAdded(e) => {
                assert_eq!(e.cart_id, *cart.id());
                assert_eq!(e.course.title(), "Maquiagem Dia - Dia");
            }
            _ => panic!("Expected LineAdded event"),
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(id(2)).unwrap().quantity(), 1);
    }

    #[test]
    fn adding_same_course_twice_increments_quantity() {
        let mut cart = test_cart();
        cart.add_to_cart(id(1));
        let events = cart.add_to_cart(id(1));

        match &events[0] {
            CartEvent::QuantityIncremented(e) => {
                assert_eq!(e.course_id, id(1));
                assert_eq!(e.quantity, 2);
            }
            _ => panic!("Expected QuantityIncremented event"),
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity(), 2);
        assert_eq!(cart.total(), Money::from_major(400));
    }

    #[test]
    fn add_then_remove_leaves_other_course() {
        let mut cart = test_cart();
        cart.add_to_cart(id(1));
        cart.add_to_cart(id(3));
        cart.remove_from_cart(id(1));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].course_id(), id(3));
        assert_eq!(cart.lines()[0].quantity(), 1);
        assert_eq!(cart.total(), Money::from_major(500));
    }

    #[test]
    fn unknown_course_is_ignored() {
        let mut cart = test_cart();
        cart.add_to_cart(id(4));
        let before = cart.clone();

        assert!(cart.add_to_cart(id(42)).is_empty());
        assert_eq!(cart, before);
    }

    #[test]
    fn removing_absent_course_is_ignored() {
        let mut cart = test_cart();
        cart.add_to_cart(id(1));
        let before = cart.clone();

        assert!(cart.remove_from_cart(id(2)).is_empty());
        assert_eq!(cart, before);
    }

    #[test]
    fn empty_cart_total_is_zero() {
        let cart = test_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn repeat_add_keeps_line_position() {
        let mut cart = test_cart();
        cart.add_to_cart(id(3));
        cart.add_to_cart(id(1));
        cart.add_to_cart(id(4));
        cart.add_to_cart(id(3));

        let order: Vec<_> = cart.lines().iter().map(|l| l.course_id().get()).collect();
        assert_eq!(order, [3, 1, 4]);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn re_adding_removed_course_appends_at_end() {
        let mut cart = test_cart();
        cart.add_to_cart(id(1));
        cart.add_to_cart(id(2));
        cart.remove_from_cart(id(1));
        cart.add_to_cart(id(1));

        let order: Vec<_> = cart.lines().iter().map(|l| l.course_id().get()).collect();
        assert_eq!(order, [2, 1]);
        assert_eq!(cart.line(id(1)).unwrap().quantity(), 1);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let mut cart = test_cart();
        cart.add_to_cart(id(1));
        let before = cart.clone();

        let events = cart
            .handle(&CartCommand::AddToCart(AddToCart { course_id: id(1) }))
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(cart, before);
    }

    #[test]
    fn execute_applies_handled_events() {
        let mut cart = test_cart();
        let add = CartCommand::AddToCart(AddToCart { course_id: id(2) });
        let remove = CartCommand::RemoveFromCart(RemoveFromCart { course_id: id(9) });
        cart.execute(&add).unwrap();
        cart.execute(&add).unwrap();
        cart.execute(&remove).unwrap();

        assert_eq!(cart.line(id(2)).unwrap().quantity(), 2);
        assert_eq!(cart.total(), Money::from_major(500));
    }

    #[test]
    fn version_counts_applied_events_only() {
        let mut cart = test_cart();
        cart.add_to_cart(id(1));
        cart.add_to_cart(id(1));
        cart.add_to_cart(id(77));
        cart.remove_from_cart(id(2));
        assert_eq!(cart.version(), 2);

        cart.remove_from_cart(id(1));
        assert_eq!(cart.version(), 3);
    }

    #[test]
    fn apply_is_deterministic() {
        let event = CartEvent::LineAdded(LineAdded {
            cart_id: CartId::new(),
            course: Catalog::builtin().find(id(4)).unwrap().clone(),
        });

        let mut a = test_cart();
        let mut b = Cart::new(*a.id(), Catalog::builtin());
        a.apply(&event);
        b.apply(&event);
        assert_eq!(a, b);
    }

    #[test]
    fn line_added_for_course_already_in_cart_is_skipped() {
        let mut cart = test_cart();
        cart.add_to_cart(id(1));
        let before = cart.clone();

        let json = serde_json::json!({
            "LineAdded": {
                "cart_id": cart.id(),
                "course": { "id": 1, "title": "Maquiagem - Basica", "price": 20000 }
            }
        });
        let event: CartEvent = serde_json::from_value(json).unwrap();
        cart.apply(&event);

        assert_eq!(cart, before);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn zero_quantity_event_is_skipped() {
        let mut cart = test_cart();
        cart.add_to_cart(id(3));
        let before = cart.clone();

        cart.apply(&CartEvent::QuantityIncremented(QuantityIncremented {
            cart_id: *cart.id(),
            course_id: id(3),
            quantity: 0,
        }));

        assert_eq!(cart, before);
        assert_eq!(cart.line(id(3)).unwrap().quantity(), 1);
    }

    #[test]
    fn events_for_absent_lines_are_skipped() {
        let mut cart = test_cart();
        cart.apply(&CartEvent::QuantityIncremented(QuantityIncremented {
            cart_id: *cart.id(),
            course_id: id(2),
            quantity: 5,
        }));
        cart.apply(&CartEvent::LineRemoved(LineRemoved {
            cart_id: *cart.id(),
            course_id: id(2),
        }));

        assert!(cart.is_empty());
        assert_eq!(cart.version(), 0);
    }

    #[test]
    fn event_types_are_namespaced() {
        let mut cart = test_cart();
        let mut events = cart.add_to_cart(id(1));
        events.extend(cart.add_to_cart(id(1)));
        events.extend(cart.remove_from_cart(id(1)));

        let types: Vec<_> = events.iter().map(CartEvent::event_type).collect();
        assert_eq!(
            types,
            [
                "cart.line.added",
                "cart.line.quantity_incremented",
                "cart.line.removed"
            ]
        );
    }

    #[test]
    fn events_serialize_as_tagged_json() {
        let event = CartEvent::QuantityIncremented(QuantityIncremented {
            cart_id: CartId::new(),
            course_id: id(3),
            quantity: 2,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["QuantityIncremented"]["course_id"], 3);
        assert_eq!(json["QuantityIncremented"]["quantity"], 2);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u32),
            Remove(u32),
        }

        fn op() -> impl Strategy<Value = Op> {
            // Ids 0 and 5..=6 are outside the built-in catalog.
            prop_oneof![
                (0u32..=6).prop_map(Op::Add),
                (0u32..=6).prop_map(Op::Remove),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: n adds of one course give a single line with quantity n.
            #[test]
            fn repeated_adds_count_up(course in 1u32..=4, n in 1u32..50) {
                let mut cart = test_cart();
                for _ in 0..n {
                    cart.add_to_cart(id(course));
                }
                prop_assert_eq!(cart.lines().len(), 1);
                prop_assert_eq!(cart.line(id(course)).unwrap().quantity(), n);
            }

            /// Property: lines stay unique with positive quantities, and the
            /// total always equals the sum of line totals.
            #[test]
            fn invariants_hold_for_any_sequence(ops in proptest::collection::vec(op(), 0..60)) {
                let mut cart = test_cart();
                for op in ops {
                    match op {
                        Op::Add(n) => { cart.add_to_cart(id(n)); }
                        Op::Remove(n) => { cart.remove_from_cart(id(n)); }
                    }

                    let mut ids: Vec<_> = cart.lines().iter().map(CartLine::course_id).collect();
                    let len = ids.len();
                    ids.sort();
                    ids.dedup();
                    prop_assert_eq!(ids.len(), len);
                    prop_assert!(cart.lines().iter().all(|l| l.quantity() >= 1));

                    let expected = cart
                        .lines()
                        .iter()
                        .map(|l| l.unit_price().minor_units() * u64::from(l.quantity()))
                        .sum::<u64>();
                    prop_assert_eq!(cart.total().minor_units(), expected);
                }
            }

            /// Property: commands on ids outside the catalog or cart change nothing.
            #[test]
            fn no_op_commands_leave_cart_unchanged(
                seed in proptest::collection::vec(1u32..=4, 0..10),
                unknown in 5u32..1000,
            ) {
                let mut cart = test_cart();
                for n in seed {
                    cart.add_to_cart(id(n));
                }
                let before = cart.clone();

                prop_assert!(cart.add_to_cart(id(unknown)).is_empty());
                prop_assert!(cart.remove_from_cart(id(unknown)).is_empty());
                prop_assert_eq!(cart, before);
            }
        }
    }
}
