//! The barracks: summoning warriors without knowing what kind they are.
//!
//! Callers only see [`Armed`]. Which concrete warrior comes out of
//! [`Barracks::summon`] is decided by the barracks' [`Armament`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chronicle::Chronicle;
use crate::error::RealmError;

/// Unique identifier for every summoned warrior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarriorId(pub Uuid);

impl WarriorId {
    /// Generate a new random warrior ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WarriorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WarriorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Something that can report the weapon it carries.
pub trait Armed: fmt::Debug + Send + Sync {
    /// This warrior's identity.
    fn id(&self) -> WarriorId;

    /// The weapon this warrior carries.
    fn weapon(&self) -> &str;

    /// Record this warrior announcing its weapon.
    fn report(&self, chronicle: &mut Chronicle) {
        chronicle.record(self.id().to_string(), format!("I carry a {}", self.weapon()));
    }
}

/// A warrior armed with a sword.
#[derive(Debug)]
pub struct Swordsman {
    id: WarriorId,
}

impl Armed for Swordsman {
    fn id(&self) -> WarriorId {
        self.id
    }

    fn weapon(&self) -> &str {
        "sword"
    }
}

/// A warrior armed with a spear.
#[derive(Debug)]
pub struct Spearman {
    id: WarriorId,
}

impl Armed for Spearman {
    fn id(&self) -> WarriorId {
        self.id
    }

    fn weapon(&self) -> &str {
        "spear"
    }
}

/// What the barracks hands out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Armament {
    /// Summon [`Swordsman`] warriors.
    #[default]
    Sword,
    /// Summon [`Spearman`] warriors.
    Spear,
}

impl fmt::Display for Armament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sword => write!(f, "sword"),
            Self::Spear => write!(f, "spear"),
        }
    }
}

impl FromStr for Armament {
    type Err = RealmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sword" => Ok(Self::Sword),
            "spear" => Ok(Self::Spear),
            _ => Err(RealmError::UnknownArmament(s.to_string())),
        }
    }
}

impl TryFrom<String> for Armament {
    type Error = RealmError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Summons fresh warriors.
#[derive(Debug, Clone, Default)]
pub struct Barracks {
    armament: Armament,
}

impl Barracks {
    /// Create a barracks that arms its warriors with `armament`.
    pub fn new(armament: Armament) -> Self {
        Self { armament }
    }

    /// The armament this barracks hands out.
    pub fn armament(&self) -> Armament {
        self.armament
    }

    /// Summon a new, independent warrior.
    pub fn summon(&self) -> Box<dyn Armed> {
        let id = WarriorId::new();
        tracing::debug!(%id, armament = %self.armament, "summoning warrior");
        match self.armament {
            Armament::Sword => Box::new(Swordsman { id }),
            Armament::Spear => Box::new(Spearman { id }),
        }
    }
}

/// Summon a warrior from the default barracks.
pub fn summon() -> Box<dyn Armed> {
    Barracks::default().summon()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summons_are_independent() {
        let a = summon();
        let b = summon();

        assert_ne!(a.id(), b.id());
        assert!(!std::ptr::eq(
            a.as_ref() as *const dyn Armed as *const u8,
            b.as_ref() as *const dyn Armed as *const u8,
        ));
        assert_eq!(a.weapon(), "sword");
        assert_eq!(b.weapon(), "sword");
    }

    #[test]
    fn armament_decides_the_variant() {
        let barracks = Barracks::new(Armament::Spear);
        assert_eq!(barracks.summon().weapon(), "spear");
        assert_eq!(barracks.armament(), Armament::Spear);
    }

    #[test]
    fn warrior_reports_weapon() {
        let warrior = summon();
        let mut chronicle = Chronicle::unbounded();
        warrior.report(&mut chronicle);

        assert_eq!(chronicle.lines(), vec!["I carry a sword"]);
        assert_eq!(chronicle.proclamations()[0].source, warrior.id().to_string());
    }

    #[test]
    fn armament_parse() {
        assert_eq!("sword".parse::<Armament>().unwrap(), Armament::Sword);
        assert_eq!(" Spear ".parse::<Armament>().unwrap(), Armament::Spear);
        let err = "axe".parse::<Armament>().unwrap_err();
        assert!(matches!(err, RealmError::UnknownArmament(ref s) if s == "axe"));
    }

    #[test]
    fn armament_serde_accepts_any_case() {
        let armament: Armament = serde_json::from_str("\"Spear\"").unwrap();
        assert_eq!(armament, Armament::Spear);
        assert_eq!(serde_json::to_string(&Armament::Spear).unwrap(), "\"spear\"");
        assert!(serde_json::from_str::<Armament>("\"axe\"").is_err());
    }

    #[test]
    fn warrior_id_display_is_short() {
        assert_eq!(WarriorId::new().to_string().len(), 8);
    }
}
