//! Storefront page: course catalog plus cart panel.

use leptos::*;
use tracing::info;

use coursecart_cart::Cart;
use coursecart_catalog::{Catalog, CourseId};
use coursecart_core::{AggregateRoot, CartId};

use crate::print::{print_receipt, BrowserPrinter};
use crate::styles;
use crate::view_model::{self, CartRow, CatalogCard, HoverState};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let catalog = Catalog::builtin();
    let cards = view_model::catalog_cards(&catalog);
    let cart = create_rw_signal(Cart::new(CartId::new(), catalog));
    let hover = create_rw_signal(HoverState::default());

    view! {
        <div style=styles::CONTAINER>
            <h1 style=styles::HEADER>{view_model::PAGE_TITLE}</h1>
            <ul style=styles::COURSE_LIST>
                {cards
                    .into_iter()
                    .map(|card| view! { <CourseCard card=card cart=cart hover=hover/> })
                    .collect_view()}
            </ul>
            <CartPanel cart=cart hover=hover/>
        </div>
    }
}

/// One catalog entry with its add button.
#[component]
fn CourseCard(
    card: CatalogCard,
    cart: RwSignal<Cart>,
    hover: RwSignal<HoverState>,
) -> impl IntoView {
    let id: CourseId = card.course_id;

    let add = move |_: ev::MouseEvent| {
        cart.update(|cart| {
            let events = cart.add_to_cart(id);
            if !events.is_empty() {
                info!(
                    cart_id = %cart.id(),
                    course_id = %id,
                    total = %cart.total(),
                    "course added"
                );
            }
        });
    };

    view! {
        <li
            style=move || styles::course_item(hover.with(|h| h.is_card_hovered(id)))
            on:mouseenter=move |_| hover.update(|h| h.enter_card(id))
            on:mouseleave=move |_| hover.update(|h| h.leave_card(id))
        >
            <p style=styles::COURSE_TITLE>{card.title}</p>
            <p style=styles::COURSE_PRICE>{card.price_label}</p>
            <button
                style=move || styles::add_button(hover.with(|h| h.is_add_hovered(id)))
                on:click=add
                on:mouseenter=move |_| hover.update(|h| h.enter_add(id))
                on:mouseleave=move |_| hover.update(|h| h.leave_add(id))
            >
                {view_model::ADD_LABEL}
            </button>
        </li>
    }
}

/// Cart lines, running total and the print button.
#[component]
fn CartPanel(cart: RwSignal<Cart>, hover: RwSignal<HoverState>) -> impl IntoView {
    let print = move |_: ev::MouseEvent| {
        cart.with_untracked(|cart| print_receipt(&BrowserPrinter, cart));
    };

    view! {
        <div style=styles::CART_WRAPPER>
            <div style=styles::CART>
                <h2 style=styles::CART_HEADER>{view_model::CART_TITLE}</h2>
                <ul style=styles::CART_LIST>
                    {move || {
                        cart.with(view_model::cart_rows)
                            .into_iter()
                            .map(|row| view! { <CartRowItem row=row cart=cart/> })
                            .collect_view()
                    }}
                </ul>
                <h2 style=styles::TOTAL>{move || cart.with(view_model::total_label)}</h2>
                <button
                    style=move || styles::print_button(hover.with(HoverState::is_print_hovered))
                    on:click=print
                    on:mouseenter=move |_| hover.update(HoverState::enter_print)
                    on:mouseleave=move |_| hover.update(HoverState::leave_print)
                >
                    {view_model::PRINT_LABEL}
                </button>
            </div>
        </div>
    }
}

#[component]
fn CartRowItem(row: CartRow, cart: RwSignal<Cart>) -> impl IntoView {
    let id = row.course_id;

    let remove = move |_: ev::MouseEvent| {
        cart.update(|cart| {
            if !cart.remove_from_cart(id).is_empty() {
                info!(
                    cart_id = %cart.id(),
                    course_id = %id,
                    total = %cart.total(),
                    "course removed"
                );
            }
        });
    };

    view! {
        <li style=styles::CART_ITEM>
            <p style=styles::CART_TITLE>{row.title}</p>
            <p style=styles::CART_PRICE>{row.unit_price_label}</p>
            <p style=styles::CART_QUANTITY>{row.quantity_label}</p>
            <p style=styles::CART_LINE_TOTAL>{row.line_total_label}</p>
            <button style=styles::REMOVE_BUTTON on:click=remove>
                {view_model::REMOVE_LABEL}
            </button>
        </li>
    }
}
