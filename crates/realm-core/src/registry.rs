//! Lazily created, process-wide single instances.
//!
//! [`SingleInstance`] wraps a [`OnceLock`] together with the function that
//! builds its value, so it can live in a `static` and be handed out through
//! an accessor. [`Kingdom`] is the realm's own singleton built on top of it.

use std::fmt;
use std::sync::OnceLock;

use crate::chronicle::Chronicle;

/// Holds at most one value of `T`, built on first access.
///
/// Concurrent first accesses race to [`OnceLock::get_or_init`]; exactly one
/// of them runs the constructor and every caller observes its result.
pub struct SingleInstance<T> {
    cell: OnceLock<T>,
    init: fn() -> T,
}

impl<T> SingleInstance<T> {
    /// Create an empty holder that will call `init` on first access.
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    /// Return the shared instance, constructing it if this is the first call.
    pub fn instance(&self) -> &T {
        self.cell.get_or_init(self.init)
    }

    /// Whether the instance has been constructed yet.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for SingleInstance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleInstance")
            .field("instance", &self.cell.get())
            .finish()
    }
}

const KINGDOM_NAME: &str = "Eldmark";

static KINGDOM: SingleInstance<Kingdom> = SingleInstance::new(Kingdom::found);

/// The one and only kingdom.
///
/// There is no public constructor; use [`Kingdom::instance`].
#[derive(Debug)]
pub struct Kingdom {
    name: &'static str,
}

impl Kingdom {
    fn found() -> Self {
        tracing::debug!(name = KINGDOM_NAME, "founding the kingdom");
        Self { name: KINGDOM_NAME }
    }

    /// Access the kingdom, founding it on first use.
    pub fn instance() -> &'static Kingdom {
        KINGDOM.instance()
    }

    /// Whether anyone has accessed the kingdom yet.
    pub fn is_founded() -> bool {
        KINGDOM.is_initialized()
    }

    /// The kingdom's name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Record the royal proclamation.
    pub fn proclaim(&self, chronicle: &mut Chronicle) {
        chronicle.record(self.name, format!("Long live {}!", self.name));
    }
}
