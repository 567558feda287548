//! Code tables for values scraped from database site pages.
//!
//! Database sites tag item links with CSS classes `q0`..`q7` for quality and class
//! listings with `c1`..`c11` for the character class. Lookups are total: unknown codes
//! map to the `No*` member.

use std::fmt;

/// Item type tag for items in search result rows.
const ITEM_TYPE: i64 = 3;

/// Item quality (rarity) as colored on database sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemQuality {
    Poor,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Artifact,
    Blizzard,
    #[default]
    NoQuality,
}

impl ItemQuality {
    /// Converts a database CSS class into an `ItemQuality`.
    ///
    /// Matching is exact and case-sensitive; anything other than `q0`..`q7` is
    /// `NoQuality`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "q0" => Self::Poor,
            "q1" => Self::Common,
            "q2" => Self::Uncommon,
            "q3" => Self::Rare,
            "q4" => Self::Epic,
            "q5" => Self::Legendary,
            "q6" => Self::Artifact,
            "q7" => Self::Blizzard,
            _ => Self::NoQuality,
        }
    }
}

impl fmt::Display for ItemQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Poor => "Poor",
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
            Self::Artifact => "Artifact",
            Self::Blizzard => "Blizzard",
            Self::NoQuality => "No quality",
        };
        f.write_str(name)
    }
}

/// Playable character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterClass {
    Warrior,
    Paladin,
    Hunter,
    Rogue,
    Priest,
    Shaman,
    Mage,
    Warlock,
    Druid,
    #[default]
    NoClass,
}

impl CharacterClass {
    /// Converts a database CSS class into a `CharacterClass`.
    ///
    /// Class ids 6 and 10 are unused by the game, so `c6` and `c10` map to `NoClass`
    /// like any other unknown code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "c1" => Self::Warrior,
            "c2" => Self::Paladin,
            "c3" => Self::Hunter,
            "c4" => Self::Rogue,
            "c5" => Self::Priest,
            "c7" => Self::Shaman,
            "c8" => Self::Mage,
            "c9" => Self::Warlock,
            "c11" => Self::Druid,
            _ => Self::NoClass,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Warrior => "Warrior",
            Self::Paladin => "Paladin",
            Self::Hunter => "Hunter",
            Self::Rogue => "Rogue",
            Self::Priest => "Priest",
            Self::Shaman => "Shaman",
            Self::Mage => "Mage",
            Self::Warlock => "Warlock",
            Self::Druid => "Druid",
            Self::NoClass => "No class",
        };
        f.write_str(name)
    }
}

/// Returns the absolute URL of a large icon.
///
/// # Arguments
/// - `icon_name` - Icon name as seen in the site's JavaScript, any case
/// - `host` - Site base URL without trailing slash
pub fn icon_url(icon_name: &str, host: &str) -> String {
    format!("{}/images/icons/large/{}.jpg", host, icon_name.to_lowercase())
}

/// Finds the first row describing an item in search result details.
///
/// Each row starts with a type tag (`3` for items) followed by id, quality and
/// thumbnail fields. Empty rows are skipped.
///
/// # Returns
/// - `Some(index)` - Position of the first item row
/// - `None` - No row is an item
pub fn find_first_item_index(rows: &[Vec<i64>]) -> Option<usize> {
    rows.iter().position(|row| row.first() == Some(&ITEM_TYPE))
}
