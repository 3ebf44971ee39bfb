//! Core types for Realm: a small registry-and-delegation toolkit told as a
//! medieval tale.
//!
//! - [`Kingdom`] is reached only through [`Kingdom::instance`], built on the
//!   generic [`SingleInstance`] holder.
//! - [`Barracks::summon`] hands out warriors as `Box<dyn Armed>`.
//! - [`FightingMemory`] asks every learned [`Technique`] to recall a move.
//! - [`StrategicPoint`] relays an alarm to every [`Watchtower`].
//!
//! Everything they say is written to a [`Chronicle`].

/// Line sink for everything the realm says.
pub mod chronicle;
/// Configuration for assembling a realm.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// The barracks and the warriors it summons.
pub mod factory;
/// Techniques and the fighting memory that recalls them.
pub mod memory;
/// Single-instance holders and the kingdom.
pub mod registry;
/// Append-only ordered collection.
pub mod roster;
/// Watchtowers and the strategic point they guard.
pub mod watch;

/// Re-export chronicle types.
pub use chronicle::{Chronicle, Proclamation};
/// Re-export configuration.
pub use config::RealmConfig;
/// Re-export error types.
pub use error::{RealmError, RealmResult};
/// Re-export factory types.
pub use factory::{Armament, Armed, Barracks, Spearman, Swordsman, WarriorId, summon};
/// Re-export fighting memory types.
pub use memory::{FightingMemory, RecallMode, ShieldTechnique, SwordTechnique, Technique};
/// Re-export registry types.
pub use registry::{Kingdom, SingleInstance};
/// Re-export the roster.
pub use roster::Roster;
/// Re-export watchtower types.
pub use watch::{BellWatchtower, HornWatchtower, StrategicPoint, Watchtower};
