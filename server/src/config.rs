//! Runtime configuration for the pet simulator server.

use once_cell::sync::Lazy;
use std::{env, ops::Range};

#[derive(Debug)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub server_addr: String,
    /// Fixed RNG seed for reproducible games; random when unset.
    pub rng_seed: Option<u64>,
    /// Food-search duration bounds in milliseconds (max exclusive).
    pub feed_min_delay_ms: u32,
    pub feed_max_delay_ms: u32,
}

impl Settings {
    fn from_env() -> Self {
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".into());

        let rng_seed = env::var("RNG_SEED").ok().and_then(|v| v.parse::<u64>().ok());

        let feed_min_delay_ms = env::var("FEED_MIN_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1000);

        let feed_max_delay_ms = env::var("FEED_MAX_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(3000);

        Settings {
            server_addr,
            rng_seed,
            feed_min_delay_ms,
            feed_max_delay_ms,
        }
    }

    /// Search delay range, widened to at least 1 ms so it is never empty.
    pub fn feed_delay_ms(&self) -> Range<u32> {
        let max = self.feed_max_delay_ms.max(self.feed_min_delay_ms.saturating_add(1));
        self.feed_min_delay_ms..max
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
