//! Watchtowers around a strategic point.
//!
//! Every tower hears every alarm; there is no filtering.

use std::fmt;

use crate::chronicle::Chronicle;
use crate::roster::Roster;

/// A tower that raises the alarm when it hears a report.
pub trait Watchtower: fmt::Debug + Send + Sync {
    /// Short name used as the source of this tower's lines.
    fn name(&self) -> &str;

    /// Relay `message` with this tower's signal.
    fn report(&self, message: &str, chronicle: &mut Chronicle);
}

/// Sounds the horns.
#[derive(Debug, Clone, Copy, Default)]
pub struct HornWatchtower;

impl Watchtower for HornWatchtower {
    fn name(&self) -> &str {
        "horn"
    }

    fn report(&self, message: &str, chronicle: &mut Chronicle) {
        chronicle.record(self.name(), format!("{message}, sound the horns!!!!"));
    }
}

/// Rings the bells.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellWatchtower;

impl Watchtower for BellWatchtower {
    fn name(&self) -> &str {
        "bell"
    }

    fn report(&self, message: &str, chronicle: &mut Chronicle) {
        chronicle.record(self.name(), format!("{message}, sound the bells!!!"));
    }
}

/// A place guarded by watchtowers, alerted in the order they were built.
#[derive(Debug, Default)]
pub struct StrategicPoint {
    towers: Roster<Box<dyn Watchtower>>,
}

impl StrategicPoint {
    /// Create a point with no towers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tower at this point.
    pub fn add<W: Watchtower + 'static>(&mut self, tower: W) {
        self.towers.push(Box::new(tower));
    }

    /// Deliver `message` to every tower. Returns how many towers were alerted.
    pub fn dispatch(&self, message: &str, chronicle: &mut Chronicle) -> usize {
        for tower in &self.towers {
            tower.report(message, chronicle);
        }
        tracing::debug!(message, towers = self.towers.len(), "raised the alarm");
        self.towers.len()
    }

    /// Names of the towers, in order.
    pub fn names(&self) -> Vec<&str> {
        self.towers.iter().map(|t| t.name()).collect()
    }

    /// Number of towers.
    pub fn len(&self) -> usize {
        self.towers.len()
    }

    /// Whether no tower has been built.
    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }
}
