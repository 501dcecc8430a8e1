//! RollerCoaster Tycoon 1 park importer
//!
//! Reads legacy scenarios (`.sc4`) and saved games (`.sv4`) and converts
//! them into the native park model, resolving every fixed legacy type code
//! to a dynamically loaded object.

pub mod codec;
pub mod error;
pub mod import;
pub mod objects;
pub mod state;

pub use error::{Error, Result};
pub use codec::{DecodedPark, Edition, FileKind, S4, S4_SIZE};
pub use import::{ImportOptions, S4Importer, ScenarioIndexEntry, ScenarioPatches};
pub use objects::{ObjectList, ObjectManager, ObjectRepository, ObjectType};
pub use state::{Park, Ride, Research};
