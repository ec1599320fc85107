//! Stock-take Discord commands - `/stocktake add|list|remove|clear`.
//!
//! Counts are recorded per bar. A product may only be counted once per bar, and
//! a name that looks like a typo of one already counted needs `confirm:True`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]
    #![allow(clippy::too_many_arguments)]

    use crate::{
        bot::{BotData, display, handlers::autocomplete},
        core::stock_take::{StockTakeDraft, compute_total_units, format_units},
        errors::{Error, Result},
        session::StockTakeOutcome,
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    /// Parent command for the stock take.
    #[poise::command(
        slash_command,
        subcommands(
            "stocktake_add",
            "stocktake_list",
            "stocktake_remove",
            "stocktake_clear"
        )
    )]
    pub async fn stocktake(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Stock take command. Available subcommands:\n\
            `/stocktake add` - Record a count at a bar\n\
            `/stocktake list` - Show counts and totals by bar\n\
            `/stocktake remove` - Remove a count\n\
            `/stocktake clear` - Start a new stock take";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Records full containers, crates and open usage for a product at a bar.
    ///
    /// Blank or non-numeric counts count as zero. Usage is the open fraction
    /// between 0 and 1.
    #[poise::command(slash_command, rename = "add")]
    pub async fn stocktake_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Bar being counted"]
        #[autocomplete = "autocomplete::autocomplete_bar"]
        bar: String,
        #[description = "Product name"]
        #[autocomplete = "autocomplete::autocomplete_stock_take_name"]
        name: String,
        #[description = "Full containers"] full: Option<String>,
        #[description = "Unopened crates"] crates: Option<String>,
        #[description = "Containers per crate"] crate_size: Option<String>,
        #[description = "Open container fraction, 0 to 1 (e.g., 0.5)"] usage: Option<String>,
        #[description = "Set to True to add even if a similar name exists"] confirm: Option<
            bool,
        >,
    ) -> Result<()> {
        let draft = StockTakeDraft {
            bar,
            name,
            full: full.unwrap_or_default(),
            crates: crates.unwrap_or_default(),
            crate_size: crate_size.unwrap_or_default(),
            usage: usage.unwrap_or_default(),
        };
        let accept = confirm.unwrap_or(false);
        let mut session = ctx.data().session.lock().await;

        match session.add_stock_take(&draft, |_| accept).await {
            Ok(StockTakeOutcome::Added(entry)) => {
                ctx.say(format!(
                    "✅ Counted **{}** at {}: {} = **{}**",
                    entry.name,
                    entry.bar,
                    display::describe_counts(&entry),
                    format_units(compute_total_units(&entry))
                ))
                .await?;
            }
            Ok(StockTakeOutcome::Declined { similar }) => {
                ctx.say(format!(
                    "⚠️ **{}** looks like **{}** already counted at {}. \
                    Run the command again with `confirm:True` to add it anyway.",
                    draft.name.trim(),
                    similar.name,
                    similar.bar
                ))
                .await?;
            }
            Err(
                e @ (Error::EmptyName
                | Error::UnknownCategory { .. }
                | Error::DuplicateEntry { .. }),
            ) => {
                ctx.say(format!("❌ {e}")).await?;
            }
            Err(e) => {
                ctx.say("❌ Failed to record the count.").await?;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Shows the stock take grouped by bar, with unit totals.
    #[poise::command(slash_command, rename = "list")]
    pub async fn stocktake_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let session = ctx.data().session.lock().await;

        if session.stock_take().is_empty() {
            ctx.say("Nothing has been counted yet. Use `/stocktake add` to start!")
                .await?;
            return Ok(());
        }

        let fields = display::group_fields(&session.stock_take_by_bar(), display::stock_take_line)
            .into_iter()
            .map(|(title, body)| (title, body, false));

        let report_embed = serenity::CreateEmbed::default()
            .title("**Stock Take**")
            .color(0x0058_65F2) // Discord purple
            .fields(fields)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{} entries",
                session.stock_take().len()
            )));

        ctx.send(poise::CreateReply::default().embed(report_embed))
            .await?;
        Ok(())
    }

    /// Removes one count from the stock take.
    #[poise::command(slash_command, rename = "remove")]
    pub async fn stocktake_remove(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Bar the product was counted at"]
        #[autocomplete = "autocomplete::autocomplete_bar"]
        bar: String,
        #[description = "Product to remove"]
        #[autocomplete = "autocomplete::autocomplete_stock_take_name"]
        name: String,
    ) -> Result<()> {
        let mut session = ctx.data().session.lock().await;

        let Some(id) = session.find_stock_take(&name, &bar).map(|entry| entry.id) else {
            ctx.say(format!("❌ '{name}' has not been counted at {bar}."))
                .await?;
            return Ok(());
        };

        let removed = session.remove_stock_take(id).await?;
        ctx.say(format!(
            "✅ Removed **{}** at {} from the stock take.",
            removed.name, removed.bar
        ))
        .await?;
        Ok(())
    }

    /// Empties the stock take.
    #[poise::command(slash_command, rename = "clear")]
    pub async fn stocktake_clear(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Set to True to confirm"] confirm: bool,
    ) -> Result<()> {
        if !confirm {
            ctx.say("Nothing cleared. Run `/stocktake clear confirm:True` to start over.")
                .await?;
            return Ok(());
        }

        let cleared = ctx.data().session.lock().await.clear_stock_take().await?;
        info!("{} cleared the stock take", ctx.author().name);
        ctx.say(format!("✅ Cleared {cleared} stock-take entries."))
            .await?;
        Ok(())
    }
}

pub use inner::*;
