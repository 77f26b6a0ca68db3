//! # agent-catalog-core
//!
//! Read-mostly catalog of game-character records plus a small API-key store.
//!
//! ## Features
//!
//! - `Agent` / `Ability` data model matching the catalog JSON document
//! - `AgentStore`: load once, query by id, photos and role
//! - `AgentList`: bare or `{agents: [...]}` list shapes, readable in either form
//! - `ApiKeyStore`: issue and validate opaque keys persisted as JSON
//!
//! ## Quick Start
//!
//! ```ignore
//! use agent_catalog_core::{AgentStore, ApiKeyStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut store = AgentStore::new("./valorant-agents-v1.json");
//!     store.load().await;
//!
//!     let duelists = store.filter_by_role("duelist");
//!
//!     let keys = ApiKeyStore::open("./api-keys.json").await.unwrap();
//!     let key = keys.issue().await.unwrap();
//!     assert!(keys.validate(Some(&key)).await);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod keys;

pub use catalog::{Ability, Agent, AgentList, AgentStore, ListShape, Role};
pub use error::{CatalogError, CatalogResult};
pub use keys::{constant_time_eq, generate_key, ApiKeyStore};
