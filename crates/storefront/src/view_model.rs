//! Display strings and pointer-hover state for the storefront page.
//!
//! Everything here is plain data so the page's text can be checked without a
//! browser.

use coursecart_cart::{Cart, CartLine};
use coursecart_catalog::{Catalog, Course, CourseId};
use coursecart_core::Money;

pub const PAGE_TITLE: &str = "Cursos de Maquiagem";
pub const CART_TITLE: &str = "Carrinho de Compras";
pub const ADD_LABEL: &str = "Adicionar";
pub const REMOVE_LABEL: &str = "Remover";
pub const PRINT_LABEL: &str = "Imprimir Nota Fiscal";

const CURRENCY_PREFIX: &str = "R$";

/// `R$ 200.00`
pub fn format_price(amount: Money) -> String {
    format!("{CURRENCY_PREFIX} {amount}")
}

/// One catalog entry as shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCard {
    pub course_id: CourseId,
    pub title: String,
    pub price_label: String,
}

impl From<&Course> for CatalogCard {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.id(),
            title: course.title().to_string(),
            price_label: format_price(course.price()),
        }
    }
}

pub fn catalog_cards(catalog: &Catalog) -> Vec<CatalogCard> {
    catalog.iter().map(CatalogCard::from).collect()
}

/// One cart line as shown in the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub course_id: CourseId,
    pub title: String,
    pub unit_price_label: String,
    pub quantity: u32,
    pub quantity_label: String,
    pub line_total_label: String,
}

impl From<&CartLine> for CartRow {
    fn from(line: &CartLine) -> Self {
        Self {
            course_id: line.course_id(),
            title: line.course().title().to_string(),
            unit_price_label: format_price(line.unit_price()),
            quantity: line.quantity(),
            quantity_label: format!("Quantidade: {}", line.quantity()),
            line_total_label: format!("Total: {}", format_price(line.line_total())),
        }
    }
}

/// Rows in cart order.
pub fn cart_rows(cart: &Cart) -> Vec<CartRow> {
    cart.lines().iter().map(CartRow::from).collect()
}

/// `Total do Carrinho: R$ 400.00`
pub fn total_label(cart: &Cart) -> String {
    format!("Total do Carrinho: {}", format_price(cart.total()))
}

/// Which element the pointer is currently over.
///
/// `leave_*` only clears state recorded for the same target, so a late
/// leave from one card never un-hovers another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered_card: Option<CourseId>,
    hovered_add: Option<CourseId>,
    print_hovered: bool,
}

impl HoverState {
    pub fn enter_card(&mut self, id: CourseId) {
        self.hovered_card = Some(id);
    }

    pub fn leave_card(&mut self, id: CourseId) {
        if self.hovered_card == Some(id) {
            self.hovered_card = None;
        }
    }

    pub fn enter_add(&mut self, id: CourseId) {
        self.hovered_add = Some(id);
    }

    pub fn leave_add(&mut self, id: CourseId) {
        if self.hovered_add == Some(id) {
            self.hovered_add = None;
        }
    }

    pub fn enter_print(&mut self) {
        self.print_hovered = true;
    }

    pub fn leave_print(&mut self) {
        self.print_hovered = false;
    }

    pub fn is_card_hovered(&self, id: CourseId) -> bool {
        self.hovered_card == Some(id)
    }

    pub fn is_add_hovered(&self, id: CourseId) -> bool {
        self.hovered_add == Some(id)
    }

    pub fn is_print_hovered(&self) -> bool {
        self.print_hovered
    }
}
