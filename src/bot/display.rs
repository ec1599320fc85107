//! Plain-text rendering of lists for Discord messages.
//!
//! These helpers only format; grouping and totals come from the core.

use crate::core::{
    catalog::Product,
    grouping::Group,
    restock::RestockEntry,
    stock_take::{StockTakeEntry, compute_total_units, format_units},
};

/// Discord's limit on the length of an embed field value
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// One restock line, e.g. `• **Heineken** - Qty: 2`
#[must_use]
pub fn restock_line(entry: &RestockEntry) -> String {
    format!("• **{}** - Qty: {}", entry.name, entry.quantity)
}

/// One catalog line, e.g. `• Heineken (id 3)`
#[must_use]
pub fn catalog_line(product: &Product) -> String {
    format!("• {} (id {})", product.name, product.id)
}

/// Describes the counted parts of a stock-take entry, e.g. `2 Full · 1 Crate (24) · 0.5 Open`.
///
/// Zero parts are left out.
#[must_use]
pub fn describe_counts(entry: &StockTakeEntry) -> String {
    let mut parts = Vec::new();
    if entry.full > 0 {
        parts.push(format!("{} Full", entry.full));
    }
    if entry.crates > 0 {
        let plural = if entry.crates > 1 { "s" } else { "" };
        parts.push(format!("{} Crate{plural} ({})", entry.crates, entry.crate_size));
    }
    if entry.usage > 0.0 {
        parts.push(format!("{:.1} Open", entry.usage));
    }

    if parts.is_empty() {
        "nothing on hand".to_string()
    } else {
        parts.join(" · ")
    }
}

/// One stock-take line with its total, e.g. `• **Jameson** - 2 Full · 0.5 Open = **2.5**`
#[must_use]
pub fn stock_take_line(entry: &StockTakeEntry) -> String {
    format!(
        "• **{}** - {} = **{}**",
        entry.name,
        describe_counts(entry),
        format_units(compute_total_units(entry))
    )
}

/// Renders non-empty groups as `(title, body)` pairs suitable for embed fields.
///
/// Bodies longer than [`FIELD_VALUE_LIMIT`] are cut at a line boundary and end
/// with a count of the hidden lines.
pub fn group_fields<T, F>(groups: &[Group<'_, T>], line: F) -> Vec<(String, String)>
where
    F: Fn(&T) -> String,
{
    groups
        .iter()
        .filter(|group| !group.is_empty())
        .map(|group| {
            let lines: Vec<String> = group.items.iter().map(|item| line(*item)).collect();
            (group.label.clone(), fit_lines(&lines, FIELD_VALUE_LIMIT))
        })
        .collect()
}

fn fit_lines(lines: &[String], limit: usize) -> String {
    let mut body = String::new();
    for (shown, line) in lines.iter().enumerate() {
        let remaining = lines.len() - shown;
        let more = format!("\n… and {remaining} more");
        let separator = usize::from(!body.is_empty());
        let reserve = if remaining > 1 { more.len() } else { 0 };
        if body.len() + separator + line.len() + reserve > limit {
            body.push_str(&more);
            return body;
        }
        if separator == 1 {
            body.push('\n');
        }
        body.push_str(line);
    }
    body
}
