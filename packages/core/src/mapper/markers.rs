//! Drop levels

use std::fmt;

use serde::{Deserialize, Serialize};

/// How far up the output tree a missing retrieval nulls its ancestor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropLevel {
    /// Missing values just become null (or the default)
    #[default]
    None,
    /// Null the immediately enclosing mapping or sequence
    ThisObject,
    /// Null the container enclosing this object
    Parent,
    /// Two containers above this object
    Grandparent,
    /// Three containers above this object
    GreatGrandparent,
    /// Null the nearest enclosing element of a sequence
    ThisListItem,
    /// Null the top-level entry of the output root holding the marker
    ThisLevelRoot,
}

impl DropLevel {
    /// Containers to climb for the fixed-distance levels
    #[must_use]
    pub fn climb(self) -> Option<usize> {
        match self {
            DropLevel::ThisObject => Some(1),
            DropLevel::Parent => Some(2),
            DropLevel::Grandparent => Some(3),
            DropLevel::GreatGrandparent => Some(4),
            DropLevel::None | DropLevel::ThisListItem | DropLevel::ThisLevelRoot => None,
        }
    }
}

impl fmt::Display for DropLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DropLevel::None => "NONE",
            DropLevel::ThisObject => "THIS_OBJECT",
            DropLevel::Parent => "PARENT",
            DropLevel::Grandparent => "GRANDPARENT",
            DropLevel::GreatGrandparent => "GREATGRANDPARENT",
            DropLevel::ThisListItem => "THIS_LIST_ITEM",
            DropLevel::ThisLevelRoot => "THIS_LEVEL_ROOT",
        };
        f.write_str(name)
    }
}
