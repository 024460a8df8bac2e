//! Command and event loading for serenity/poise bots.
//!
//! - `core/` = loader and dispatch logic (platform-agnostic)
//! - `infra/` = implementations of core traits (file system, module catalog, config)
//! - `discord/` = serenity adapters and helpers (embeds, reactions, logging)

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
pub mod core;
#[path = "discord/discord_layer.rs"]
pub mod discord;
#[path = "infra/infra_layer.rs"]
pub mod infra;
