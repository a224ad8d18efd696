//! Interactive client for the pity calculator.
//!
//! The binary is the composition root: it reads [`config::ClientConfig`],
//! installs logging, opens the file repository, picks a random source, and
//! hands everything to [`menu::Menu`].
pub mod config;
pub mod input;
pub mod logging;
pub mod menu;
pub mod presentation;
pub mod rng;

pub use config::ClientConfig;
pub use input::{Console, InputError};
pub use menu::Menu;
