//! Player Registry - Resolves free-text player names to NBA person ids
//!
//! The registry holds the player directory in directory order and hands the
//! matching candidates to a [`ResolvePolicy`] to pick exactly one player. The
//! directory ships with the crate (`data/players.json`), so resolving a name
//! never touches the network. `refresh-players` regenerates that file.

pub mod policy;
pub mod registry;
pub mod types;

pub use policy::{FirstMatch, ResolvePolicy};
pub use registry::{fold_name, PlayerRegistry};
pub use types::{DirectoryEntry, Player, PlayerDirectory, ResolveError};
