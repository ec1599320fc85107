//! Catalog Discord commands - `/catalog add|list|remove`.
//!
//! The catalog remembers which section each product is stored in, so restock
//! entries for known products land in the right place.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, display, handlers::autocomplete},
        core::{catalog, grouping::group_by},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    /// Parent command for the product catalog.
    #[poise::command(
        slash_command,
        subcommands("catalog_add", "catalog_list", "catalog_remove")
    )]
    pub async fn catalog(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Catalog command. Available subcommands:\n\
            `/catalog add` - Add a product and its section\n\
            `/catalog list` - Show all products by section\n\
            `/catalog remove` - Remove a product";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Adds a product to the catalog.
    #[poise::command(slash_command, rename = "add")]
    pub async fn catalog_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Product name"] name: String,
        #[description = "Where it is stored (defaults to the first section)"]
        #[autocomplete = "autocomplete::autocomplete_section"]
        section: Option<String>,
    ) -> Result<()> {
        let mut session = ctx.data().session.lock().await;

        match session.add_to_catalog(&name, section.as_deref()).await {
            Ok(product) => {
                ctx.say(format!(
                    "✅ Added **{}** to the catalog under {}.",
                    product.name, product.section
                ))
                .await?;
            }
            Err(
                e @ (Error::EmptyName
                | Error::UnknownCategory { .. }
                | Error::AlreadyInCatalog { .. }),
            ) => {
                ctx.say(format!("❌ {e}")).await?;
            }
            Err(e) => {
                ctx.say(format!("❌ Failed to add '{name}' to the catalog."))
                    .await?;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Lists catalog products grouped by section.
    #[poise::command(slash_command, rename = "list")]
    pub async fn catalog_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let session = ctx.data().session.lock().await;

        if session.catalog().is_empty() {
            ctx.say("The catalog is empty. Use `/catalog add` to add products!")
                .await?;
            return Ok(());
        }

        let sections = &session.config().inventory.sections;
        let products: Vec<catalog::Product> =
            session.catalog_for_display().into_iter().cloned().collect();
        let groups = group_by(&products, sections, |product| product.section.as_str());
        let fields = display::group_fields(&groups, display::catalog_line)
            .into_iter()
            .map(|(title, body)| (title, body, false));

        let list_embed = serenity::CreateEmbed::default()
            .title("**Product Catalog**")
            .color(0x0058_65F2) // Discord purple
            .fields(fields);

        ctx.send(poise::CreateReply::default().embed(list_embed))
            .await?;
        Ok(())
    }

    /// Removes a product from the catalog.
    ///
    /// Restock entries already on the list keep their section.
    #[poise::command(slash_command, rename = "remove")]
    pub async fn catalog_remove(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Product to remove"]
        #[autocomplete = "autocomplete::autocomplete_catalog_product"]
        name: String,
    ) -> Result<()> {
        let mut session = ctx.data().session.lock().await;

        let Some(id) = catalog::find_product(session.catalog(), &name).map(|p| p.id) else {
            ctx.say(format!("❌ Product '{name}' not found.")).await?;
            return Ok(());
        };

        match session.remove_from_catalog(id).await {
            Ok(product) => {
                ctx.say(format!("✅ Product '{}' has been removed.", product.name))
                    .await?;
            }
            Err(e) => {
                ctx.say(format!("❌ Failed to remove product '{name}'."))
                    .await?;
                return Err(e);
            }
        }
        Ok(())
    }
}

pub use inner::*;
