//! Configuration management for the lanedrag application.
//!
//! This crate handles loading, validating, and persisting configuration,
//! and reading and writing the board file.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`feedback`]: Visual feedback applied to dragged cards
//! - [`board_store`]: Board file loading and saving
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! The first file found wins:
//!
//! 1. Local config (`./lanedrag.json5` or `./lanedrag.json`)
//! 2. User config (`~/.config/lanedrag/config.json5` or `~/.config/lanedrag/config.json`)
//! 3. Built-in defaults
//!
//! # Format
//!
//! ```json5
//! {
//!   // Optional. Enables persistence of status changes.
//!   board_file: "board.json",
//!   feedback: { opacity: 0.8, scale: 1.05, shadow: true },
//!   mouse_capture: true,
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use lanedrag_config::{board_store, Config};
//!
//! # async fn example() -> lanedrag_config::Result<()> {
//! let config = Config::load().await?;
//!
//! if let Some(path) = &config.board_file {
//!     let board = board_store::load_board(path)?;
//!     println!("Board found: {}", board.is_some());
//! }
//! # Ok(())
//! # }
//! ```

pub mod board_store;
pub mod config;
pub mod error;
pub mod feedback;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use feedback::FeedbackConfig;
