//! Catalog records and list shapes

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A playable character record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable identifier, unique across the catalog
    pub id: u64,

    pub name: String,

    /// Role tags, e.g. "Duelist"
    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(default)]
    pub story: String,

    #[serde(default)]
    pub abilities: Vec<Ability>,

    #[serde(default)]
    pub origin: String,

    /// Patch the agent shipped in, e.g. "1.05"
    #[serde(default)]
    pub release_patch: String,

    /// Photo URLs or paths, in display order
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Agent {
    /// Whether the agent carries `role`, compared case-insensitively
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }
}

/// One skill belonging to an agent.
///
/// Absent optional fields mean "not applicable", never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Cooldown in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<f64>,

    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
}

/// Shape of the agents-list payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListShape {
    /// `[...]`
    #[default]
    Array,
    /// `{"agents": [...]}`
    Wrapped,
}

impl FromStr for ListShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" | "bare" => Ok(ListShape::Array),
            "wrapped" | "object" => Ok(ListShape::Wrapped),
            other => Err(format!("unknown list shape '{}'", other)),
        }
    }
}

/// Agents-list payload in either shape.
///
/// Deserializing accepts both forms, so clients can normalize whichever
/// shape a server is configured to emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgentList {
    Bare(Vec<Agent>),
    Wrapped { agents: Vec<Agent> },
}

impl AgentList {
    /// Build a list in the given shape
    pub fn new(shape: ListShape, agents: Vec<Agent>) -> Self {
        match shape {
            ListShape::Array => AgentList::Bare(agents),
            ListShape::Wrapped => AgentList::Wrapped { agents },
        }
    }

    pub fn shape(&self) -> ListShape {
        match self {
            AgentList::Bare(_) => ListShape::Array,
            AgentList::Wrapped { .. } => ListShape::Wrapped,
        }
    }

    pub fn agents(&self) -> &[Agent] {
        match self {
            AgentList::Bare(agents) | AgentList::Wrapped { agents } => agents,
        }
    }

    pub fn into_agents(self) -> Vec<Agent> {
        match self {
            AgentList::Bare(agents) | AgentList::Wrapped { agents } => agents,
        }
    }
}
