// The core module contains the platform-agnostic loader and dispatch logic.
// Nothing in here imports serenity or poise.

#[path = "loading/mod.rs"]
pub mod loading;

#[path = "commands/mod.rs"]
pub mod commands;

#[path = "events/mod.rs"]
pub mod events;
