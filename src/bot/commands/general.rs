//! General Discord commands - ping and help.
//! These commands don't touch the inventory session.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**StockBuddy Help**\n\
        Keeps the restock list, the product catalog and the stock take for the venue.\n\n\
        **Restock List**\n\
        • `/restock add <name> [quantity]` - Adds to the list; repeats of a product are summed.\n\
        • `/restock quick <product>` - Adds one of a catalog product.\n\
        • `/restock list` - Shows the list grouped by section.\n\
        • `/restock remove <name>` / `/restock clear confirm:True`\n\n\
        **Catalog**\n\
        • `/catalog add <name> [section]` - Remembers a product and where it is stored.\n\
        • `/catalog list` / `/catalog remove <name>`\n\n\
        **Stock Take**\n\
        • `/stocktake add <bar> <name> [full] [crates] [crate_size] [usage] [confirm]` - Records a count.\n\
        • `/stocktake list` - Shows counts and totals per bar.\n\
        • `/stocktake remove <bar> <name>` / `/stocktake clear confirm:True`\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
