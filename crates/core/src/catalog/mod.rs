//! Agent catalog module
//!
//! Data model for agents and their abilities, the role set, and the
//! in-memory store the HTTP layer queries.

pub mod model;
pub mod role;
pub mod store;

#[cfg(test)]
mod tests;

pub use model::{Ability, Agent, AgentList, ListShape};
pub use role::Role;
pub use store::AgentStore;
