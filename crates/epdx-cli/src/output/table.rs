use epdx_core::display::{build_display_items, carbon_summary};
use epdx_core::NormalizedEpd;

pub fn print(epd: &NormalizedEpd) {
    let summary = carbon_summary(epd);
    println!("=== Carbon footprint ===\n");
    println!("  {}", summary.headline);
    println!("  {}\n", summary.formula);

    let items = build_display_items(epd);
    println!("=== Extracted fields ===\n");

    let max_title = items.iter().map(|i| i.title.len()).max().unwrap_or(10);
    for item in &items {
        match &item.source {
            Some(source) => println!(
                "  {:<width$}  {}  ({})",
                item.title,
                item.value,
                source,
                width = max_title
            ),
            None => println!("  {:<width$}  {}", item.title, item.value, width = max_title),
        }
    }
}
