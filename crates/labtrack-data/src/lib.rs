//! Data access for labtrack: the external-collaborator contract
//! (`DataProvider`) plus the bundled in-memory provider and its JSON seed.

pub mod error;
pub mod memory;
pub mod model;
pub mod provider;
pub mod seed;
