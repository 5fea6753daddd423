//! End-to-end behavior of the storefront against a recording view port.

mod common;

use std::time::Duration;

use common::{id, store, store_with, visit};
use storefront_core::view::DrawerContent;
use storefront_core::{
    BusyPolicy, CardMessage, CartMessage, CategoryFilter, DetailMessage, DismissReason,
    FilterMessage, Message, NavigationMessage, NoticeKind, PageStatus, ScrollRequest, Settings,
    SurfaceId,
};
use storefront_model::{Page, Price, Universe};

const GEEK: Page = Page::Store(Universe::Geek);
const ESPORTE: Page = Page::Store(Universe::Esporte);
const STREET: Page = Page::Store(Universe::Street);

fn add_item(product: &str, size: &str, color: &str, qty: u32) -> Message {
    Message::Cart(CartMessage::AddItem {
        product_id: id(product),
        size: size.to_string(),
        color: color.to_string(),
        qty,
    })
}

fn enter(page: Page) -> Message {
    Message::Navigation(NavigationMessage::Enter(page))
}

fn apply_filter(universe: Universe, filter: CategoryFilter) -> Message {
    Message::Filter(FilterMessage::Apply { universe, filter })
}

fn active_pages(store: &common::TestStore) -> Vec<Page> {
    Page::ALL
        .into_iter()
        .filter(|page| store.port().page(*page).map(|v| v.status) == Some(PageStatus::Active))
        .collect()
}

// =============================================================================
// CART
// =============================================================================

#[test]
fn geek_scenario_merges_lines_and_totals() {
    let mut store = store();
    visit(&mut store, GEEK);

    assert!(store.update(Message::Detail(DetailMessage::Open(id("P1")))));
    let session = store.state().selection.session().expect("detail open");
    assert_eq!(session.selected_size(), "M");

    assert!(store.update(add_item("P1", "M", "black", 2)));
    assert!(store.update(add_item("P1", "M", "black", 1)));

    let cart = &store.state().cart;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].qty, 3);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), Price::from_reais(300));

    for universe in Universe::ALL {
        let badge = store.port().badge(universe).expect("badge rendered");
        assert_eq!(badge.count, 3);
        assert!(badge.visible);
    }

    let notices = store.notifier();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].message, "Camiseta Pixel adicionado ao carrinho 🛒");
    assert_eq!(notices[0].kind, NoticeKind::Success);
    assert_eq!(notices[0].duration, Duration::from_millis(2800));
}

#[test]
fn add_item_rejects_unavailable_size_and_unknown_product() {
    let mut store = store();
    assert!(!store.update(add_item("P1", "P", "black", 1)));
    assert!(!store.update(add_item("P1", "M", "purple", 1)));
    assert!(!store.update(add_item("missing", "M", "black", 1)));
    assert!(store.state().cart.is_empty());
    assert!(store.notifier().is_empty());
}

#[test]
fn drawer_lists_lines_and_removes_by_key() {
    let mut store = store();
    let drawer = store.port().drawer(Universe::Geek).expect("drawer rendered");
    assert_eq!(
        drawer.content,
        DrawerContent::Empty {
            message: "Seu carrinho está vazio.".to_string()
        }
    );

    store.update(add_item("P1", "M", "black", 3));
    store.update(add_item("s1", "U", "#f00", 1));

    let drawer = store.port().drawer(Universe::Street).expect("drawer rendered");
    let DrawerContent::Lines {
        lines,
        subtotal,
        checkout_label,
    } = &drawer.content
    else {
        panic!("expected cart lines, got {:?}", drawer.content);
    };
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].variant, "Tam: M · Qtd: 3");
    assert_eq!(lines[0].price, "R$ 300");
    assert_eq!(lines[1].price, "R$ 1.299");
    assert_eq!(subtotal, "R$ 1.599");
    assert_eq!(checkout_label, "Finalizar Compra");

    let key = lines[0].key.clone();
    assert!(store.update(Message::Cart(CartMessage::RemoveLine(key.clone()))));
    assert!(!store.update(Message::Cart(CartMessage::RemoveLine(key))));
    assert_eq!(store.state().cart.len(), 1);
    assert_eq!(store.port().badge(Universe::Geek).map(|b| b.count), Some(1));
}

#[test]
fn remove_out_of_range_is_a_no_op() {
    let mut store = store();
    store.update(add_item("g2", "Único", "white", 1));
    let presents = store.port().present_count();
    assert!(!store.update(Message::Cart(CartMessage::RemoveAt(4))));
    assert_eq!(store.state().cart.len(), 1);
    assert_eq!(store.port().present_count(), presents);
}

#[test]
fn only_one_drawer_is_open() {
    let mut store = store();
    store.update(Message::Cart(CartMessage::OpenDrawer(Universe::Geek)));
    assert!(store.port().drawer(Universe::Geek).unwrap().open);

    store.update(Message::Cart(CartMessage::OpenDrawer(Universe::Street)));
    assert!(!store.port().drawer(Universe::Geek).unwrap().open);
    assert!(store.port().drawer(Universe::Street).unwrap().open);

    store.update(Message::Cart(CartMessage::CloseDrawer));
    assert!(Universe::ALL
        .into_iter()
        .all(|u| !store.port().drawer(u).unwrap().open));
}

#[test]
fn checkout_needs_a_non_empty_cart() {
    let mut store = store();
    assert!(!store.update(Message::Cart(CartMessage::Checkout)));
    assert!(store.notifier().is_empty());

    store.update(add_item("e2", "M", "#000", 1));
    assert!(store.update(Message::Cart(CartMessage::Checkout)));
    let last = store.notifier().last().unwrap();
    assert_eq!(last.kind, NoticeKind::Info);
    assert_eq!(last.message, "Redirecionando para o checkout...");
}

// =============================================================================
// FILTERS
// =============================================================================

#[test]
fn empty_category_shows_empty_state_until_reset() {
    let mut store = store();

    store.update(apply_filter(Universe::Esporte, CategoryFilter::category("Tênis")));
    let grid = store.port().grid(Universe::Esporte).unwrap();
    assert_eq!(grid.visible_count, 0);
    let empty = grid.empty_state.as_ref().expect("empty state shown");
    assert_eq!(empty.message, "Nenhum produto em Tênis no momento.");
    assert_eq!(empty.reset_label, "Ver todos os produtos");

    let nav = store.port().nav(Universe::Esporte).unwrap();
    assert!(nav.links[3].active);
    assert!(!nav.links[0].active);
    assert!(store.port().scrolls().contains(&(
        SurfaceId::ProductGrid(Universe::Esporte),
        ScrollRequest::IntoView
    )));

    store.update(apply_filter(Universe::Esporte, CategoryFilter::All));
    let grid = store.port().grid(Universe::Esporte).unwrap();
    assert_eq!(grid.visible_count, 2);
    assert!(grid.empty_state.is_none());
    assert!(grid.cards.iter().all(|card| card.visible));
    assert!(store.port().nav(Universe::Esporte).unwrap().links[0].active);
}

#[test]
fn category_filter_ignores_case_and_stays_per_universe() {
    let mut store = store();
    store.update(apply_filter(Universe::Geek, CategoryFilter::category("camisetas")));

    let grid = store.port().grid(Universe::Geek).unwrap();
    assert_eq!(grid.visible_count, 1);
    assert!(grid.cards[0].visible);
    assert!(!grid.cards[1].visible);
    assert!(grid.empty_state.is_none());

    assert_eq!(store.port().grid(Universe::Esporte).unwrap().visible_count, 2);

    store.update(Message::Filter(FilterMessage::Reset(Universe::Geek)));
    assert_eq!(store.port().grid(Universe::Geek).unwrap().visible_count, 3);
}

// =============================================================================
// DETAIL
// =============================================================================

#[test]
fn detail_renders_full_product_description() {
    let mut store = store();
    visit(&mut store, GEEK);
    store.update(Message::Detail(DetailMessage::Open(id("P1"))));

    let detail = store.port().detail(Universe::Geek).unwrap();
    assert!(detail.open);
    let content = detail.content.as_ref().unwrap();
    assert_eq!(content.price, "R$ 100");
    assert_eq!(content.price_old.as_deref(), Some("R$ 129,9"));
    assert_eq!(content.installments, "ou 12× de R$ 9 sem juros");
    assert_eq!(content.category_tag, "✦ Camisetas");
    assert_eq!(content.badge.as_deref(), Some("NOVO"));
    assert_eq!(content.qty, 1);

    let seeds: Vec<u32> = content.gallery.thumbnails.iter().map(|t| t.seed).collect();
    assert_eq!(seeds, vec![10, 110, 210, 310, 410]);
    assert_eq!(content.gallery.main_seed, 10);

    let features: Vec<&str> = content.features.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(
        features,
        vec![
            "100% algodão",
            "Tamanhos: M, G",
            "2 opções de cor",
            "Garantia de qualidade MATHEORY",
            "Frete grátis acima de R$ 299",
        ]
    );

    assert!(content.sizes[0].disabled);
    assert!(content.sizes[1].selected);
    assert!(content.colors[0].selected);

    let related: Vec<&str> = content.related.iter().map(|r| r.product_id.as_str()).collect();
    assert_eq!(related, vec!["g2", "g3"]);

    assert!(store.port().body().unwrap().scroll_locked);
    assert!(!store.port().detail(Universe::Esporte).unwrap().open);
}

#[test]
fn unavailable_size_never_becomes_selected() {
    let mut store = store();
    visit(&mut store, GEEK);
    store.update(Message::Detail(DetailMessage::Open(id("P1"))));
    let presents = store.port().present_count();

    assert!(!store.update(Message::Detail(DetailMessage::SelectSize("P".into()))));
    assert!(!store.update(Message::Detail(DetailMessage::SelectSize("XG".into()))));
    assert_eq!(
        store.state().selection.session().unwrap().selected_size(),
        "M"
    );
    assert_eq!(store.port().present_count(), presents);
}

#[test]
fn all_sizes_unavailable_falls_back_to_first_listed() {
    let mut store = store();
    visit(&mut store, GEEK);
    store.update(Message::Detail(DetailMessage::Open(id("g3"))));
    let session = store.state().selection.session().unwrap();
    assert_eq!(session.selected_size(), "M");
}

#[test]
fn detail_add_to_cart_uses_selection_and_closes() {
    let mut store = store();
    visit(&mut store, GEEK);
    store.update(Message::Detail(DetailMessage::Open(id("P1"))));
    store.update(Message::Detail(DetailMessage::ChangeQty(2)));
    store.update(Message::Detail(DetailMessage::ChangeQty(-10)));
    store.update(Message::Detail(DetailMessage::ChangeQty(1)));
    store.update(Message::Detail(DetailMessage::SelectColor("white".into())));
    store.update(Message::Detail(DetailMessage::SelectSize("G".into())));
    store.update(Message::Detail(DetailMessage::SwitchImage(3)));
    assert_eq!(
        store
            .port()
            .detail(Universe::Geek)
            .and_then(|d| d.content.as_ref())
            .map(|c| c.gallery.main_seed),
        Some(310)
    );

    assert!(store.update(Message::Detail(DetailMessage::AddToCart)));
    let line = &store.state().cart.lines()[0];
    assert_eq!((line.size.as_str(), line.color.as_str(), line.qty), ("G", "white", 2));

    assert!(!store.state().selection.is_open());
    assert!(!store.port().detail(Universe::Geek).unwrap().open);
    assert!(!store.port().body().unwrap().scroll_locked);

    assert!(!store.update(Message::Detail(DetailMessage::AddToCart)));
    assert_eq!(store.state().cart.total_items(), 2);
}

#[test]
fn close_converges_and_is_idempotent() {
    let mut store = store();
    visit(&mut store, ESPORTE);
    for reason in [
        DismissReason::Explicit,
        DismissReason::Backdrop,
        DismissReason::CancelKey,
    ] {
        store.update(Message::Detail(DetailMessage::Open(id("e1"))));
        assert!(store.port().detail(Universe::Esporte).unwrap().open);
        assert!(store.update(Message::Detail(DetailMessage::Close(reason))));
        assert!(!store.port().detail(Universe::Esporte).unwrap().open);
    }

    let presents = store.port().present_count();
    assert!(store.update(Message::Detail(DetailMessage::Close(DismissReason::Explicit))));
    assert_eq!(store.port().present_count(), presents);
}

#[test]
fn unknown_product_leaves_state_untouched() {
    let mut store = store();
    assert!(!store.update(Message::Detail(DetailMessage::Open(id("ghost")))));
    assert!(!store.state().selection.is_open());
    assert!(!store.update(Message::Card(CardMessage::ToggleWishlist(id("ghost")))));
}

#[test]
fn detail_opens_only_on_its_settled_universe_page() {
    let mut store = store();
    assert!(!store.update(Message::Detail(DetailMessage::Open(id("P1")))));
    assert!(!store.update(Message::Card(CardMessage::Open(id("P1")))));
    assert!(!store.state().selection.is_open());
    assert!(!store.port().body().unwrap().scroll_locked);
    assert!(!store.port().detail(Universe::Geek).unwrap().open);

    store.update(enter(GEEK));
    assert!(!store.update(Message::Detail(DetailMessage::Open(id("P1")))));
    store.settle();
    assert!(!store.update(Message::Detail(DetailMessage::Open(id("e1")))));
    assert!(store.update(Message::Detail(DetailMessage::Open(id("P1")))));
    assert!(store.port().body().unwrap().scroll_locked);
}

#[test]
fn navigation_closes_open_detail_and_drawer() {
    let mut store = store();
    visit(&mut store, GEEK);
    store.update(Message::Detail(DetailMessage::Open(id("P1"))));
    store.update(Message::Cart(CartMessage::OpenDrawer(Universe::Geek)));
    assert!(store.port().drawer(Universe::Geek).unwrap().open);

    assert!(store.update(enter(STREET)));
    assert!(!store.state().selection.is_open());
    assert_eq!(store.state().drawer, None);
    assert!(!store.port().detail(Universe::Geek).unwrap().open);
    assert!(!store.port().drawer(Universe::Geek).unwrap().open);
    assert!(!store.port().body().unwrap().scroll_locked);

    store.settle();
    assert_eq!(store.current_page(), STREET);
    assert!(!store.port().body().unwrap().scroll_locked);
}

// =============================================================================
// CARDS
// =============================================================================

#[test]
fn quick_add_without_size_warns_once() {
    let mut store = store();
    assert!(store.update(Message::Card(CardMessage::QuickAdd(id("g2")))));

    assert!(store.state().cart.is_empty());
    let notices = store.notifier();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Warning);
    assert_eq!(notices[0].message, "⚠ Selecione um tamanho primeiro");
}

#[test]
fn quick_add_uses_card_size_then_resets_it() {
    let mut store = store();
    let card_size = |store: &common::TestStore| {
        store.port().grid(Universe::Geek).unwrap().cards[0].clone()
    };

    assert!(!store.update(Message::Card(CardMessage::SelectSize {
        product_id: id("P1"),
        size: "P".into(),
    })));
    assert!(!card_size(&store).quick_add_enabled);

    store.update(Message::Card(CardMessage::SelectSize {
        product_id: id("P1"),
        size: "G".into(),
    }));
    let card = card_size(&store);
    assert!(card.quick_add_enabled);
    assert!(card.sizes.iter().any(|s| s.label == "G" && s.selected));
    assert!(card.sizes.iter().all(|s| s.label != "P"));

    assert!(store.update(Message::Card(CardMessage::QuickAdd(id("P1")))));
    let line = &store.state().cart.lines()[0];
    assert_eq!((line.size.as_str(), line.color.as_str(), line.qty), ("G", "black", 1));
    assert!(!card_size(&store).quick_add_enabled);
}

#[test]
fn wishlist_toggles_with_notices() {
    let mut store = store();
    store.update(Message::Card(CardMessage::ToggleWishlist(id("e1"))));
    assert!(store.port().grid(Universe::Esporte).unwrap().cards[0].wishlisted);
    store.update(Message::Card(CardMessage::ToggleWishlist(id("e1"))));
    assert!(!store.port().grid(Universe::Esporte).unwrap().cards[0].wishlisted);

    let messages: Vec<&str> = store.notifier().iter().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["♥ Adicionado aos favoritos", "♡ Removido dos favoritos"]
    );
}

#[test]
fn card_click_opens_detail() {
    let mut store = store();
    visit(&mut store, STREET);
    assert!(store.update(Message::Card(CardMessage::Open(id("s1")))));
    assert!(store.port().detail(Universe::Street).unwrap().open);
}

// =============================================================================
// NAVIGATION
// =============================================================================

#[test]
fn transition_steps_drive_page_surfaces() {
    let mut store = store();
    assert_eq!(active_pages(&store), vec![Page::Home]);

    store.update(enter(GEEK));
    assert!(store.is_transitioning());
    assert_eq!(store.next_deadline(), Some(Duration::from_millis(600)));
    assert_eq!(
        store.port().page(Page::Home).unwrap().status,
        PageStatus::Exiting
    );
    let overlay = store.port().overlay().unwrap();
    assert!(overlay.visible);
    assert_eq!(overlay.label, "MATHEORY GEEK");

    store.advance(Duration::from_millis(600));
    assert_eq!(store.current_page(), GEEK);
    assert_eq!(active_pages(&store), vec![GEEK]);
    assert!(!store.port().page(GEEK).unwrap().interactive);
    assert!(!store.port().overlay().unwrap().visible);
    assert!(store
        .port()
        .scrolls()
        .contains(&(SurfaceId::Page(GEEK), ScrollRequest::ToTop)));

    store.advance(Duration::from_millis(100));
    assert!(!store.is_transitioning());
    assert_eq!(
        store.port().page(Page::Home).unwrap().status,
        PageStatus::Hidden
    );
    assert!(store.port().page(GEEK).unwrap().interactive);
    assert_eq!(store.next_deadline(), None);
}

#[test]
fn overlay_falls_back_to_home_label() {
    let mut store = store();
    store.update(enter(Page::Store(Universe::Crista)));
    assert_eq!(store.port().overlay().unwrap().label, "MATHEORY");
}

#[test]
fn double_enter_equals_single_enter() {
    let mut once = store();
    once.update(enter(GEEK));
    once.settle();

    let mut twice = store();
    twice.update(enter(GEEK));
    twice.update(enter(GEEK));
    twice.settle();

    assert_eq!(once.current_page(), twice.current_page());
    assert_eq!(active_pages(&once), active_pages(&twice));
    assert_eq!(
        once.port().scrolls().len(),
        twice.port().scrolls().len()
    );
}

#[test]
fn queued_request_runs_after_settle() {
    let mut store = store();
    store.update(enter(GEEK));
    store.advance(Duration::from_millis(100));
    store.update(enter(STREET));

    store.advance(Duration::from_millis(600));
    assert_eq!(store.current_page(), GEEK);
    assert!(store.is_transitioning());

    store.settle();
    assert_eq!(store.current_page(), STREET);
    assert_eq!(active_pages(&store), vec![STREET]);
}

#[test]
fn latest_request_wins_when_returning_to_in_flight_target() {
    let mut store = store();
    store.update(enter(GEEK));
    store.update(enter(STREET));
    store.update(enter(GEEK));
    store.settle();
    assert_eq!(store.current_page(), GEEK);
    assert_eq!(active_pages(&store), vec![GEEK]);
}

#[test]
fn rejected_request_is_dropped() {
    let mut settings = Settings::default();
    settings.navigation.busy_policy = BusyPolicy::Reject;
    let mut store = store_with(settings);

    store.update(enter(GEEK));
    store.update(enter(STREET));
    store.settle();
    assert_eq!(store.current_page(), GEEK);
    assert_eq!(active_pages(&store), vec![GEEK]);
}

#[test]
fn superseding_request_settles_in_flight_transition() {
    let mut settings = Settings::default();
    settings.navigation.busy_policy = BusyPolicy::Supersede;
    let mut store = store_with(settings);

    store.update(enter(GEEK));
    store.advance(Duration::from_millis(100));
    store.update(enter(STREET));
    assert_eq!(store.current_page(), GEEK);
    assert_eq!(store.state().timeline.len(), 2);

    store.settle();
    assert_eq!(store.current_page(), STREET);
    assert_eq!(active_pages(&store), vec![STREET]);
}

#[test]
fn go_home_returns_to_home_page() {
    let mut store = store();
    store.update(enter(GEEK));
    store.settle();
    store.update(Message::Navigation(NavigationMessage::GoHome));
    store.settle();
    assert_eq!(store.current_page(), Page::Home);
    assert_eq!(active_pages(&store), vec![Page::Home]);
}

// =============================================================================
// SYNCHRONIZATION
// =============================================================================

#[test]
fn unchanged_state_presents_nothing() {
    let mut store = store();
    let presents = store.port().present_count();

    assert_eq!(store.mount(), 0);
    store.update(Message::Cart(CartMessage::CloseDrawer));
    store.update(apply_filter(Universe::Geek, CategoryFilter::All));
    store.update(enter(Page::Home));

    assert_eq!(store.port().present_count(), presents);
}

#[test]
fn remount_presents_every_renderable_surface() {
    let mut store = store();
    // Crista and street have no copy table, so their category navs are empty.
    let renderable = SurfaceId::all().len() - 2;
    assert_eq!(store.remount(), renderable);
}

#[test]
fn unmounted_surface_is_skipped_and_caught_up_on_mount() {
    let mut store = store();
    let drawer = SurfaceId::CartDrawer(Universe::Street);
    store.port_mut().unmount(drawer);

    store.update(add_item("s1", "U", "#f00", 1));
    assert!(store.port().drawer(Universe::Street).is_none());
    assert_eq!(store.port().badge(Universe::Street).map(|b| b.count), Some(1));

    store.port_mut().mount(drawer);
    assert_eq!(store.mount(), 1);
    assert!(matches!(
        store.port().drawer(Universe::Street).map(|d| &d.content),
        Some(DrawerContent::Lines { .. })
    ));
}

#[test]
fn notice_duration_follows_settings() {
    let mut settings = Settings::default();
    settings.notifications.duration_ms = 1000;
    let mut store = store_with(settings);
    store.update(Message::Card(CardMessage::QuickAdd(id("e1"))));
    assert_eq!(store.notifier()[0].duration, Duration::from_secs(1));
}
