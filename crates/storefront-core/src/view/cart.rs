//! Cart badge and drawer views.

use serde::Serialize;

use crate::state::{CartLine, LineKey, StoreState};
use storefront_model::Universe;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub count: u32,
    /// Hidden when the cart is empty.
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerView {
    pub open: bool,
    pub content: DrawerContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawerContent {
    Empty {
        message: String,
    },
    Lines {
        lines: Vec<DrawerLineView>,
        subtotal: String,
        checkout_label: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerLineView {
    /// Removal target of the line's remove control.
    pub key: LineKey,
    pub name: String,
    pub image_seed: u32,
    /// "Tam: M · Qtd: 3"
    pub variant: String,
    pub price: String,
}

pub fn view_cart_badge(state: &StoreState) -> BadgeView {
    let count = state.cart.total_items();
    BadgeView {
        count,
        visible: count > 0,
    }
}

pub fn view_cart_drawer(state: &StoreState, universe: Universe) -> DrawerView {
    let content = if state.cart.is_empty() {
        DrawerContent::Empty {
            message: "Seu carrinho está vazio.".to_string(),
        }
    } else {
        DrawerContent::Lines {
            lines: state.cart.lines().iter().map(drawer_line).collect(),
            subtotal: state.cart.total_price().to_string(),
            checkout_label: "Finalizar Compra".to_string(),
        }
    };
    DrawerView {
        open: state.drawer == Some(universe),
        content,
    }
}

fn drawer_line(line: &CartLine) -> DrawerLineView {
    DrawerLineView {
        key: line.key(),
        name: line.product.name.clone(),
        image_seed: line.product.img_seed,
        variant: format!("Tam: {} · Qtd: {}", line.size, line.qty),
        price: line.subtotal().to_string(),
    }
}
