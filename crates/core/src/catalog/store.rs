use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use super::model::Agent;
use crate::error::{CatalogError, CatalogResult};

/// On-disk catalog document
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    agents: Vec<Agent>,
}

/// In-memory agent catalog.
///
/// Populated once before serving and read-only afterwards; share it behind an
/// `Arc` once loaded.
#[derive(Debug, Clone, Default)]
pub struct AgentStore {
    source: Option<PathBuf>,
    agents: Vec<Agent>,
}

impl AgentStore {
    /// Create an empty store that loads from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            agents: Vec::new(),
        }
    }

    /// Create a store over an already-built collection
    pub fn from_agents(agents: Vec<Agent>) -> Self {
        Self {
            source: None,
            agents,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Read the catalog document and replace the collection.
    ///
    /// On error the previous collection is left untouched.
    pub async fn try_load(&mut self) -> CatalogResult<usize> {
        let path = self
            .source
            .as_ref()
            .ok_or_else(|| CatalogError::DataUnavailable("no catalog source configured".into()))?;

        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            CatalogError::DataUnavailable(format!("{}: {}", path.display(), e))
        })?;
        let document: CatalogDocument = serde_json::from_str(&contents)?;

        let mut seen = HashSet::new();
        for agent in &document.agents {
            if !seen.insert(agent.id) {
                warn!(id = agent.id, name = %agent.name, "Duplicate agent id; lookups return the first match");
            }
        }

        self.agents = document.agents;
        Ok(self.agents.len())
    }

    /// Load the catalog, logging failures instead of returning them.
    ///
    /// Returns the number of agents held after the call.
    pub async fn load(&mut self) -> usize {
        match self.try_load().await {
            Ok(count) => {
                info!(count, "Loaded agent catalog");
            }
            Err(e) => {
                warn!(error = %e, kept = self.agents.len(), "Failed to load agent catalog");
            }
        }
        self.agents.len()
    }

    /// All agents in file order
    pub fn list_all(&self) -> &[Agent] {
        &self.agents
    }

    /// First agent with a matching id
    pub fn find_by_id(&self, id: u64) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Every photo across every agent, agent order then photo order
    pub fn list_photos(&self) -> Vec<&str> {
        self.agents
            .iter()
            .flat_map(|a| a.photos.iter().map(String::as_str))
            .collect()
    }

    /// Photos of one agent, or `None` if the id is absent
    pub fn photos_for(&self, id: u64) -> Option<&[String]> {
        self.find_by_id(id).map(|a| a.photos.as_slice())
    }

    /// Agents whose role set contains `role` (case-insensitive, exact)
    pub fn filter_by_role(&self, role: &str) -> Vec<&Agent> {
        self.agents.iter().filter(|a| a.has_role(role)).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
