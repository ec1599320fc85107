//! Restock list Discord commands - `/restock add|quick|list|remove|clear`.
//!
//! Adding a product that is already on the list increases its quantity rather
//! than creating a second line.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, display, handlers::autocomplete},
        core::catalog,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    /// Parent command for the restock list.
    #[poise::command(
        slash_command,
        subcommands(
            "restock_add",
            "restock_quick",
            "restock_list",
            "restock_remove",
            "restock_clear"
        )
    )]
    pub async fn restock(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Restock list command. Available subcommands:\n\
            `/restock add` - Add a product, or add to its quantity\n\
            `/restock quick` - Add one of a catalog product\n\
            `/restock list` - Show the list by section\n\
            `/restock remove` - Remove a product\n\
            `/restock clear` - Empty the list";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Adds a product to the restock list.
    ///
    /// Quantities that are not whole numbers count as zero.
    #[poise::command(slash_command, rename = "add")]
    pub async fn restock_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Product name"]
        #[autocomplete = "autocomplete::autocomplete_catalog_product"]
        name: String,
        #[description = "How many to add (defaults to 0)"] quantity: Option<String>,
    ) -> Result<()> {
        let quantity = quantity.unwrap_or_else(|| "0".to_string());
        let mut session = ctx.data().session.lock().await;

        match session.add_restock(&name, &quantity).await {
            Ok(entry) => {
                ctx.say(format!(
                    "✅ **{}** is on the restock list: Qty {} ({})",
                    entry.name, entry.quantity, entry.section
                ))
                .await?;
            }
            Err(Error::EmptyName) => {
                ctx.say("❌ Product name cannot be empty.").await?;
            }
            Err(e) => {
                ctx.say(format!("❌ Failed to add '{name}' to the restock list."))
                    .await?;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Adds one of a catalog product to the restock list.
    #[poise::command(slash_command, rename = "quick")]
    pub async fn restock_quick(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Catalog product"]
        #[autocomplete = "autocomplete::autocomplete_catalog_product"]
        product: String,
    ) -> Result<()> {
        let mut session = ctx.data().session.lock().await;

        let Some(product_id) = catalog::find_product(session.catalog(), &product).map(|p| p.id)
        else {
            ctx.say(format!(
                "❌ '{product}' is not in the catalog. Use `/catalog add` first."
            ))
            .await?;
            return Ok(());
        };

        let entry = session.quick_add(product_id).await?;
        info!("Quick-added {} for {}", entry.name, ctx.author().name);
        ctx.say(format!(
            "✅ **{}** now at Qty {} ({})",
            entry.name, entry.quantity, entry.section
        ))
        .await?;
        Ok(())
    }

    /// Shows the restock list grouped by section.
    #[poise::command(slash_command, rename = "list")]
    pub async fn restock_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let session = ctx.data().session.lock().await;

        if session.restock().is_empty() {
            ctx.say("The restock list is empty. Use `/restock add` to start one!")
                .await?;
            return Ok(());
        }

        let fields = display::group_fields(&session.restock_by_section(), display::restock_line)
            .into_iter()
            .map(|(title, body)| (title, body, false));

        let list_embed = serenity::CreateEmbed::default()
            .title("**Restock List**")
            .color(0x0058_65F2) // Discord purple
            .fields(fields)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{} products",
                session.restock().len()
            )));

        ctx.send(poise::CreateReply::default().embed(list_embed))
            .await?;
        Ok(())
    }

    /// Removes a product from the restock list.
    #[poise::command(slash_command, rename = "remove")]
    pub async fn restock_remove(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Product to remove"]
        #[autocomplete = "autocomplete::autocomplete_restock_entry"]
        name: String,
    ) -> Result<()> {
        let mut session = ctx.data().session.lock().await;

        let Some(id) = session.find_restock(&name).map(|entry| entry.id) else {
            ctx.say(format!("❌ '{name}' is not on the restock list."))
                .await?;
            return Ok(());
        };

        let removed = session.remove_restock(id).await?;
        ctx.say(format!("✅ Removed **{}** from the restock list.", removed.name))
            .await?;
        Ok(())
    }

    /// Empties the restock list.
    #[poise::command(slash_command, rename = "clear")]
    pub async fn restock_clear(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Set to True to confirm"] confirm: bool,
    ) -> Result<()> {
        if !confirm {
            ctx.say("Nothing cleared. Run `/restock clear confirm:True` to empty the list.")
                .await?;
            return Ok(());
        }

        let cleared = ctx.data().session.lock().await.clear_restock().await?;
        info!("{} cleared the restock list", ctx.author().name);
        ctx.say(format!("✅ Cleared {cleared} products from the restock list."))
            .await?;
        Ok(())
    }
}

pub use inner::*;
