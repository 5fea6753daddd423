#![allow(dead_code)]

use std::sync::Arc;

use storefront_core::{MemoryViewPort, Message, NavigationMessage, Notice, Settings, Storefront};
use storefront_model::{Catalog, Page, ProductId};

pub const CATALOG: &str = r##"{
    "products": {
        "geek": [
            {
                "id": "P1", "universe": "geek", "name": "Camiseta Pixel",
                "price": 100, "priceOld": 129.9,
                "sizes": ["P", "M", "G"], "sizesOff": ["P"],
                "colors": ["black", "white"], "badge": "NOVO",
                "imgSeed": 10, "category": "Camisetas",
                "meta": "100% algodão", "desc": "Estampa pixel art."
            },
            {
                "id": "g2", "universe": "geek", "name": "Caneca Dado",
                "price": 45, "sizes": ["Único"], "colors": ["white"],
                "imgSeed": 11, "category": "Acessórios", "meta": "", "desc": ""
            },
            {
                "id": "g3", "universe": "geek", "name": "Moletom Portal",
                "price": 189.9, "sizes": ["M", "G"], "sizesOff": ["M", "G"],
                "colors": ["#222"], "imgSeed": 12, "category": "Moletons",
                "meta": "Flanelado", "desc": ""
            }
        ],
        "esporte": [
            {
                "id": "e1", "universe": "esporte", "name": "Regata Dry",
                "price": 79.9, "sizes": ["P", "M"], "colors": ["#0af", "#fff"],
                "imgSeed": 20, "category": "Regatas", "meta": "Dry fit", "desc": ""
            },
            {
                "id": "e2", "universe": "esporte", "name": "Shorts Run",
                "price": 99, "sizes": ["M"], "colors": ["#000"],
                "imgSeed": 21, "category": "Shorts", "meta": "", "desc": ""
            }
        ],
        "street": [
            {
                "id": "s1", "universe": "street", "name": "Boné Tag",
                "price": 1299, "sizes": ["U"], "colors": ["#f00"],
                "imgSeed": 30, "category": "Bonés", "meta": "", "desc": ""
            }
        ]
    },
    "copy": {
        "geek": {
            "displayName": "MATHEORY GEEK",
            "nav": ["Todos", "Camisetas", "Acessórios", "Moletons"]
        },
        "esporte": {
            "displayName": "MATHEORY ESPORTE",
            "nav": ["Todos", "Regatas", "Shorts", "Tênis"]
        }
    }
}"##;

pub type TestStore = Storefront<MemoryViewPort, Vec<Notice>>;

pub fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_json_str(CATALOG).expect("test catalog is valid"))
}

pub fn store_with(settings: Settings) -> TestStore {
    let mut store = Storefront::new(
        catalog(),
        settings,
        MemoryViewPort::with_all_surfaces(),
        Vec::new(),
    );
    store.mount();
    store
}

pub fn store() -> TestStore {
    store_with(Settings::default())
}

pub fn id(value: &str) -> ProductId {
    ProductId::new(value).expect("valid id")
}

/// Navigate to `page` and let the transition settle.
pub fn visit(store: &mut TestStore, page: Page) {
    store.update(Message::Navigation(NavigationMessage::Enter(page)));
    store.settle();
}
