use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use storefront_core::NoticeKind;
use storefront_model::{Catalog, Product};

use crate::script::RunReport;

pub fn print_run_report(report: &RunReport) {
    println!("{}", run_overview(report));
    if !report.cart.is_empty() {
        println!("{}", cart_table(report));
    }
    if !report.notices.is_empty() {
        println!("{}", notice_table(report));
    }
}

/// Plain-text session summary, one fact per line.
pub fn run_overview(report: &RunReport) -> String {
    let mut lines = vec![
        format!(
            "Steps: {} ({} accepted, {} rejected)",
            report.steps,
            report.accepted,
            report.rejected.len()
        ),
        format!("Page: {}", report.page),
        format!(
            "Drawer: {}",
            report
                .drawer
                .map_or_else(|| "closed".to_string(), |u| u.to_string())
        ),
        format!(
            "Cart: {} items, {} lines, {}",
            report.total_items,
            report.cart.len(),
            report.total_price
        ),
    ];
    if !report.wishlist.is_empty() {
        let ids: Vec<&str> = report.wishlist.iter().map(|id| id.as_str()).collect();
        lines.push(format!("Wishlist: {}", ids.join(", ")));
    }
    for rejected in &report.rejected {
        lines.push(format!(
            "Rejected: step {} ({})",
            rejected.index, rejected.feature
        ));
    }
    lines.push(format!("Elapsed: {} ms", report.elapsed_ms));
    lines.join("\n")
}

pub fn catalog_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Universe"),
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Category"),
        header_cell("Price"),
        header_cell("Sizes"),
        header_cell("Colors"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for product in catalog.iter() {
        table.add_row(vec![
            Cell::new(product.universe),
            Cell::new(product.id.as_str()),
            name_cell(product),
            Cell::new(&product.category),
            price_cell(product),
            sizes_cell(product),
            Cell::new(product.colors.len()),
        ]);
    }
    table
}

pub fn cart_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Product"),
        header_cell("Size"),
        header_cell("Color"),
        header_cell("Qty"),
        header_cell("Subtotal"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for row in &report.cart {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(&row.size),
            Cell::new(&row.color),
            Cell::new(row.qty),
            Cell::new(row.subtotal),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(report.total_items).add_attribute(Attribute::Bold),
        Cell::new(report.total_price).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn notice_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Notice"), header_cell("Message")]);
    apply_table_style(&mut table);
    for notice in &report.notices {
        table.add_row(vec![kind_cell(notice.kind), Cell::new(&notice.message)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn name_cell(product: &Product) -> Cell {
    match &product.badge {
        Some(badge) => Cell::new(format!("{} [{badge}]", product.name)),
        None => Cell::new(&product.name),
    }
}

fn price_cell(product: &Product) -> Cell {
    match product.price_old {
        Some(old) => Cell::new(format!("{} (was {old})", product.price)).fg(Color::Green),
        None => Cell::new(product.price),
    }
}

/// Sizes with unavailable ones struck through.
fn sizes_cell(product: &Product) -> Cell {
    let sizes: Vec<String> = product
        .sizes
        .iter()
        .map(|size| {
            if product.is_size_available(size) {
                size.clone()
            } else {
                format!("~{size}~")
            }
        })
        .collect();
    Cell::new(sizes.join(" "))
}

fn kind_cell(kind: NoticeKind) -> Cell {
    let color = match kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Info => Color::Blue,
        NoticeKind::Warning => Color::Yellow,
    };
    Cell::new(kind.label()).fg(color)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
