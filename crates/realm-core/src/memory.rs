//! Fighting memory: an ordered list of techniques that each try to recall a
//! named move.
//!
//! [`FightingMemory::dispatch`] asks every technique in insertion order,
//! whether or not an earlier one already answered. For the classic
//! stop-at-first-handler chain use [`FightingMemory::dispatch_first`], or
//! pick explicitly with [`RecallMode`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chronicle::Chronicle;
use crate::roster::Roster;

/// A move a fighter may know.
pub trait Technique: fmt::Debug + Send + Sync {
    /// The move this technique answers to.
    fn name(&self) -> &str;

    /// Try to perform the move called `technique`.
    ///
    /// Returns `true` and records a line if `technique` is this move;
    /// otherwise does nothing and returns `false`.
    fn perform(&self, technique: &str, chronicle: &mut Chronicle) -> bool;
}

/// Two quick strokes of the blade.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwordTechnique;

impl Technique for SwordTechnique {
    fn name(&self) -> &str {
        "doubleCut"
    }

    fn perform(&self, technique: &str, chronicle: &mut Chronicle) -> bool {
        if technique != self.name() {
            return false;
        }
        chronicle.record(self.name(), "cut cut!");
        true
    }
}

/// Catching a blow on the shield.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShieldTechnique;

impl Technique for ShieldTechnique {
    fn name(&self) -> &str {
        "parry"
    }

    fn perform(&self, technique: &str, chronicle: &mut Chronicle) -> bool {
        if technique != self.name() {
            return false;
        }
        chronicle.record(self.name(), "KLANG!");
        true
    }
}

/// How a recall walks the fighting memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecallMode {
    /// Ask every technique, even after one has answered.
    #[default]
    FanOut,
    /// Stop at the first technique that answers.
    FirstMatch,
}

impl fmt::Display for RecallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FanOut => write!(f, "fan-out"),
            Self::FirstMatch => write!(f, "first-match"),
        }
    }
}

/// The techniques a fighter has learned, in the order they were learned.
#[derive(Debug, Default)]
pub struct FightingMemory {
    techniques: Roster<Box<dyn Technique>>,
}

impl FightingMemory {
    /// Create an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn a technique. Duplicates are allowed.
    pub fn add<T: Technique + 'static>(&mut self, technique: T) {
        self.techniques.push(Box::new(technique));
    }

    /// Ask every technique to perform `technique`, in the order learned.
    ///
    /// Returns how many techniques answered.
    pub fn dispatch(&self, technique: &str, chronicle: &mut Chronicle) -> usize {
        let handled = self
            .techniques
            .iter()
            .filter(|t| t.perform(technique, chronicle))
            .count();
        tracing::debug!(
            technique,
            asked = self.techniques.len(),
            handled,
            "recalled technique"
        );
        handled
    }

    /// Ask techniques in order until one performs `technique`.
    ///
    /// Returns whether any technique answered.
    pub fn dispatch_first(&self, technique: &str, chronicle: &mut Chronicle) -> bool {
        let handled = self
            .techniques
            .iter()
            .any(|t| t.perform(technique, chronicle));
        tracing::debug!(technique, handled, "recalled first technique");
        handled
    }

    /// Recall `technique` using the given mode. Returns how many techniques
    /// answered (at most one for [`RecallMode::FirstMatch`]).
    pub fn recall(&self, technique: &str, mode: RecallMode, chronicle: &mut Chronicle) -> usize {
        match mode {
            RecallMode::FanOut => self.dispatch(technique, chronicle),
            RecallMode::FirstMatch => usize::from(self.dispatch_first(technique, chronicle)),
        }
    }

    /// Names of the learned techniques, in order.
    pub fn names(&self) -> Vec<&str> {
        self.techniques.iter().map(|t| t.name()).collect()
    }

    /// Number of learned techniques.
    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    /// Whether no technique has been learned.
    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }
}
