//! Replays the bundled demo session against the bundled catalog.

use std::sync::Arc;

use storefront_cli::script::{RunReport, Step, parse_script, run_script};
use storefront_cli::summary::{cart_table, catalog_table, run_overview};
use storefront_core::{NoticeKind, Settings};
use storefront_model::{Catalog, Page, Universe};

const CATALOG: &str = include_str!("../fixtures/catalog.json");
const DEMO: &str = include_str!("../fixtures/demo-script.json");

fn catalog() -> Catalog {
    Catalog::from_json_str(CATALOG).expect("fixture catalog is valid")
}

fn replay(steps: Vec<Step>) -> RunReport {
    run_script(Arc::new(catalog()), Settings::default(), steps)
}

#[test]
fn demo_session_summary() {
    let steps = parse_script(DEMO).expect("demo script parses");
    let report = replay(steps);

    insta::assert_snapshot!(run_overview(&report), @r"
    Steps: 14 (11 accepted, 1 rejected)
    Page: street
    Drawer: street
    Cart: 4 items, 2 lines, R$ 239,6
    Wishlist: s1
    Rejected: step 9 (cart)
    Elapsed: 1500 ms
    ");
}

#[test]
fn demo_session_cart_and_notices() {
    let report = replay(parse_script(DEMO).unwrap());

    let lines: Vec<(&str, &str, u32)> = report
        .cart
        .iter()
        .map(|row| (row.product_id.as_str(), row.size.as_str(), row.qty))
        .collect();
    assert_eq!(lines, vec![("g1", "M", 1), ("g2", "Único", 3)]);

    let kinds: Vec<NoticeKind> = report.notices.iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NoticeKind::Success,
            NoticeKind::Warning,
            NoticeKind::Success,
            NoticeKind::Success,
        ]
    );
    assert_eq!(
        report.notices[2].message,
        "Caneca Dado 20 Lados adicionado ao carrinho 🛒"
    );

    let table = cart_table(&report).to_string();
    assert!(table.contains("Camiseta Pixel Art"));
    assert!(table.contains("TOTAL"));
}

#[test]
fn empty_script_only_mounts() {
    let report = replay(Vec::new());
    assert_eq!(report.steps, 0);
    assert_eq!(report.page, Page::Home);
    assert_eq!(report.drawer, None);
    assert!(report.cart.is_empty());
    assert!(report.notices.is_empty());
    assert_eq!(report.elapsed_ms, 0);
    assert!(report.presents > 0);
}

#[test]
fn waits_without_transitions_still_advance_the_clock() {
    let report = replay(vec![Step::WaitMs(250), Step::Settle, Step::WaitMs(50)]);
    assert_eq!(report.elapsed_ms, 300);
    assert_eq!(report.page, Page::Home);
}

#[test]
fn remount_presents_again() {
    let once = replay(Vec::new());
    let twice = replay(vec![Step::Mount]);
    assert!(twice.presents > once.presents);
}

#[test]
fn report_serializes_as_json() {
    let report = replay(parse_script(DEMO).unwrap());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["page"], "street");
    assert_eq!(json["drawer"], "street");
    assert_eq!(json["rejected"][0]["feature"], "cart");
    assert_eq!(json["notices"][0]["duration_ms"], 2800);
}

#[test]
fn catalog_table_lists_every_product() {
    let catalog = catalog();
    let table = catalog_table(&catalog).to_string();
    for product in catalog.iter() {
        assert!(table.contains(product.id.as_str()), "missing {}", product.id);
    }
    assert_eq!(catalog.len(), 8);
    assert_eq!(
        catalog.iter().filter(|p| p.universe == Universe::Street).count(),
        2
    );
}
