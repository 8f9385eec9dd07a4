//! Inline styles, one per rendered element.

pub const ACCENT: &str = "#add8e6";
pub const ACCENT_HOVER: &str = "#87ceeb";

pub const CONTAINER: &str = "font-family: 'Georgia', serif; color: #333; margin: 20px auto; \
    background-color: #e6e6fa; padding: 30px; border-radius: 12px; max-width: 1100px; \
    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);";

pub const HEADER: &str =
    "text-align: center; color: #000; font-size: 32px; font-weight: bold; margin-bottom: 25px;";

pub const COURSE_LIST: &str = "list-style-type: none; padding: 0; display: grid; \
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 20px;";

const COURSE_ITEM: &str = "background: #fff; padding: 20px; border-radius: 12px; \
    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.15); transition: transform 0.3s ease-in-out; \
    cursor: pointer; text-align: center;";

pub const COURSE_TITLE: &str =
    "font-size: 22px; font-weight: bold; margin-bottom: 10px; color: #212121;";

pub const COURSE_PRICE: &str = "font-size: 20px; color: #757575; margin-bottom: 15px;";

const ADD_BUTTON: &str = "color: #fff; padding: 14px 28px; border: none; border-radius: 6px; \
    margin-top: 12px; width: 100%; text-align: center; \
    transition: background-color 0.3s ease, transform 0.3s ease; font-size: 16px; cursor: pointer;";

pub const CART_WRAPPER: &str = "display: flex; justify-content: center; margin-top: 50px;";

pub const CART: &str = "width: 400px; background: #fff; border: 1px solid #ddd; padding: 25px; \
    border-radius: 12px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.15);";

pub const CART_HEADER: &str =
    "color: #333; margin-bottom: 20px; font-size: 24px; text-align: center; font-weight: bold;";

pub const CART_LIST: &str = "list-style-type: none; padding: 0;";

pub const CART_ITEM: &str = "margin-bottom: 15px; color: #333;";

pub const CART_TITLE: &str = "font-size: 18px; font-weight: bold;";

pub const CART_PRICE: &str = "font-size: 18px; color: #757575;";

pub const CART_QUANTITY: &str = "font-size: 18px; color: #757575;";

pub const CART_LINE_TOTAL: &str = "font-size: 18px; color: #333; font-weight: bold;";

pub const REMOVE_BUTTON: &str = "background: #f44336; color: #fff; padding: 8px 16px; \
    border: none; border-radius: 6px; cursor: pointer; margin-top: 10px; font-size: 16px; \
    transition: background-color 0.3s ease;";

pub const TOTAL: &str = "color: #4caf50; font-size: 20px; margin-top: 25px; text-align: center;";

const PRINT_BUTTON: &str = "color: #fff; padding: 14px 28px; border: none; border-radius: 6px; \
    cursor: pointer; width: 100%; margin-top: 25px; font-size: 18px; \
    transition: background-color 0.3s ease;";

fn accent(hovered: bool) -> &'static str {
    if hovered { ACCENT_HOVER } else { ACCENT }
}

/// Course card; grows slightly while pointed at.
pub fn course_item(hovered: bool) -> String {
    let scale = if hovered { "1.05" } else { "1" };
    format!("{COURSE_ITEM} transform: scale({scale});")
}

pub fn add_button(hovered: bool) -> String {
    format!("{ADD_BUTTON} background-color: {};", accent(hovered))
}

pub fn print_button(hovered: bool) -> String {
    format!("{PRINT_BUTTON} background-color: {};", accent(hovered))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_switch_accent_on_hover() {
        assert!(add_button(false).ends_with("background-color: #add8e6;"));
        assert!(add_button(true).ends_with("background-color: #87ceeb;"));
        assert!(print_button(true).ends_with("background-color: #87ceeb;"));
    }

    #[test]
    fn hovered_card_scales_up() {
        assert!(course_item(true).ends_with("transform: scale(1.05);"));
        assert!(course_item(false).ends_with("transform: scale(1);"));
    }
}
