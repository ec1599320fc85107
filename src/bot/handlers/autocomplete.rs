//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions come from the live session: catalog products, names already on
//! the restock list or stock take, and the configured sections and bars.

use crate::bot::Context;
use crate::core::normalize::{normalize, same_product};

/// Discord shows at most this many suggestions
const MAX_SUGGESTIONS: usize = 25;

/// Keeps the names containing `partial` (case-insensitive), sorted and capped.
fn filter_suggestions<I>(names: I, partial: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let needle = normalize(partial);
    let mut matching: Vec<String> = names
        .into_iter()
        .filter(|name| name.to_lowercase().contains(needle.as_str()))
        .collect();
    matching.sort_by_key(|name| name.to_lowercase());
    matching.dedup_by(|a, b| same_product(a, b));
    matching.truncate(MAX_SUGGESTIONS);
    matching
}

/// Suggests catalog product names.
pub async fn autocomplete_catalog_product(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let session = ctx.data().session.lock().await;
    let names = session.catalog().iter().map(|product| product.name.clone());
    filter_suggestions(names, partial)
}

/// Suggests names already on the restock list.
pub async fn autocomplete_restock_entry(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let session = ctx.data().session.lock().await;
    let names = session.restock().iter().map(|entry| entry.name.clone());
    filter_suggestions(names, partial)
}

/// Suggests catalog products and names already counted, for stock-take entry.
pub async fn autocomplete_stock_take_name(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let session = ctx.data().session.lock().await;
    let names = session
        .catalog()
        .iter()
        .map(|product| product.name.clone())
        .chain(session.stock_take().iter().map(|entry| entry.name.clone()))
        .collect::<Vec<_>>();
    filter_suggestions(names, partial)
}

/// Suggests configured sections, in configured order.
pub async fn autocomplete_section(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let session = ctx.data().session.lock().await;
    let needle = normalize(partial);
    session
        .config()
        .inventory
        .sections
        .iter()
        .filter(|section| section.to_lowercase().contains(needle.as_str()))
        .cloned()
        .collect()
}

/// Suggests configured bars, in configured order.
pub async fn autocomplete_bar(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let session = ctx.data().session.lock().await;
    let needle = normalize(partial);
    session
        .config()
        .inventory
        .bars
        .iter()
        .filter(|bar| bar.to_lowercase().contains(needle.as_str()))
        .cloned()
        .collect()
}
