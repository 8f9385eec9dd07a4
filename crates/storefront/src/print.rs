//! Receipt printing through the host's print facility.

use thiserror::Error;
use tracing::{info, warn};

use coursecart_cart::Cart;
use coursecart_core::AggregateRoot;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrintError {
    #[error("print facility unavailable: {0}")]
    Unavailable(String),
    #[error("print failed: {0}")]
    Failed(String),
}

/// Host capability that prints the current page.
pub trait ReceiptPrinter {
    fn print(&self) -> Result<(), PrintError>;
}

/// Ask the host to print the page showing `cart`.
///
/// The rendered cart panel is the receipt; nothing is formatted here. Host
/// failures are logged and otherwise left to the host.
pub fn print_receipt<P: ReceiptPrinter + ?Sized>(printer: &P, cart: &Cart) {
    info!(
        cart_id = %cart.id(),
        lines = cart.lines().len(),
        total = %cart.total(),
        "printing receipt"
    );
    if let Err(e) = printer.print() {
        warn!(cart_id = %cart.id(), error = %e, "receipt print failed");
    }
}

/// `window.print()` in the browser.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserPrinter;

#[cfg(target_arch = "wasm32")]
impl ReceiptPrinter for BrowserPrinter {
    fn print(&self) -> Result<(), PrintError> {
        let window = web_sys::window()
            .ok_or_else(|| PrintError::Unavailable("no window object".to_string()))?;
        window
            .print()
            .map_err(|e| PrintError::Failed(format!("{:?}", e)))
    }
}
