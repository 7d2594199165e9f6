//! CLI command implementations.
//!
//! - **rank**: compute a grade from flags or a JSON statistics document
//! - **init**: write a default `.rankcalc.toml`

pub mod init;
pub mod rank;

pub use init::init_config;
pub use rank::{handle_rank, RankCommandConfig};
