// Gateway event listeners keyed by event name.
//
// `EventRegistry::load_all_events` feeds `add_listener`; the poise event
// handler calls `dispatch` for every gateway event.

use crate::core::events::EventListener;
use dashmap::DashMap;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

/// What every gateway listener receives.
#[derive(Clone)]
pub struct GatewayEvent {
    pub ctx: serenity::Context,
    pub event: serenity::FullEvent,
}

pub type BotEventListener = dyn EventListener<GatewayEvent>;

#[derive(Default)]
pub struct ListenerTable {
    listeners: DashMap<String, Vec<Arc<BotEventListener>>>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registration callback target. Several listeners may share a name.
    pub fn add_listener(&self, event_name: &str, listener: Arc<BotEventListener>) {
        self.listeners
            .entry(event_name.to_string())
            .or_default()
            .push(listener);
    }

    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners
            .get(event_name)
            .map(|entry| entry.len())
            .unwrap_or(0)
    }

    /// Calls the listeners registered under the event's snake_case name.
    ///
    /// A failing listener is logged and does not stop the others.
    pub async fn dispatch(&self, ctx: &serenity::Context, event: &serenity::FullEvent) {
        let name = event.snake_case_name();
        let listeners = match self.listeners.get(name) {
            Some(entry) => entry.value().clone(),
            None => return,
        };

        let args = GatewayEvent {
            ctx: ctx.clone(),
            event: event.clone(),
        };
        for listener in listeners {
            if let Err(e) = listener.call(&args).await {
                tracing::error!(event = name, "Event listener failed: {}", e);
            }
        }
    }
}
