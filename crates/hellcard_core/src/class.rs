use std::fmt;

use serde::{Deserialize, Serialize};

/// Character class as identified by the 3-letter tag at the start of each
/// record. Tags are matched case-insensitively; anything else is kept as
/// `Unrecognized` with the original tag so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassTag {
    Mage,
    Warrior,
    Rogue,
    Unrecognized(String),
}

impl ClassTag {
    pub const MAGE_TAG: &'static str = "mag";
    pub const WARRIOR_TAG: &'static str = "war";
    pub const ROGUE_TAG: &'static str = "rog";

    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            Self::MAGE_TAG => Self::Mage,
            Self::WARRIOR_TAG => Self::Warrior,
            Self::ROGUE_TAG => Self::Rogue,
            _ => Self::Unrecognized(tag.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match *self {
            Self::Mage => Self::MAGE_TAG,
            Self::Warrior => Self::WARRIOR_TAG,
            Self::Rogue => Self::ROGUE_TAG,
            Self::Unrecognized(ref tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(*self, Self::Unrecognized(_))
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Mage => "Mage",
            Self::Warrior => "Warrior",
            Self::Rogue => "Rogue",
            Self::Unrecognized(_) => "Unrecognized",
        }
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unrecognized(ref tag) => write!(f, "Unrecognized ({})", tag),
            _ => f.write_str(self.as_str()),
        }
    }
}
