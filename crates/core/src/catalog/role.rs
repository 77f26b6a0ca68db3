use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Known agent roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Sentinel,
    Initiator,
    Controller,
    Duelist,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Sentinel,
        Role::Initiator,
        Role::Controller,
        Role::Duelist,
    ];

    /// Canonical, capitalised role tag as it appears in the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sentinel => "Sentinel",
            Role::Initiator => "Initiator",
            Role::Controller => "Controller",
            Role::Duelist => "Duelist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownRole(s.to_string()))
    }
}
