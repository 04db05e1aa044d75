//! # resume-view-core
//!
//! Core library for the resume-view terminal client.
//!
//! This crate provides the foundational functionality for:
//! - Fetching a randomly generated resume for a given name from the remote
//!   endpoint
//! - Decoding and validating the resume payload at the trust boundary
//! - Tracking the fetch lifecycle as an explicit state value
//! - Laying the resume out as a surface-agnostic tree of display
//!   instructions driven by user display preferences
//!
//! ## Modules
//!
//! - [`client`] - HTTP client for the resume endpoint
//! - [`config`] - Configuration (endpoint, default name, UI theme)
//! - [`error`] - Error types and Result alias
//! - [`prefs`] - Display preferences (font size, family, colors)
//! - [`resume`] - Resume data model
//! - [`view`] - Fetch state and display instruction tree
//!
//! ## Example
//!
//! ```no_run
//! use resume_view_core::{build_view, Config, DisplayPreferences, FetchState, ResumeClient};
//!
//! # async fn demo() -> resume_view_core::Result<()> {
//! let config = Config::load();
//! let client = ResumeClient::new(config.endpoint);
//!
//! let resume = client.fetch_resume("alice").await?;
//! let tree = build_view(&DisplayPreferences::default(), &FetchState::Loaded(resume));
//! println!("{} display blocks", tree.blocks.len());
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod prefs;
pub mod resume;
pub mod view;

// Re-export key types for convenience

// Error types
pub use error::{Error, Result};

// Resume model
pub use resume::{Project, Resume};

// Fetching
pub use client::ResumeClient;

// Configuration
pub use config::{Config, ThemeName};

// Display preferences
pub use prefs::{BackgroundColor, DisplayPreferences, FontFamily, TextColor};

// View construction
pub use view::{build_view, DisplayBlock, FetchState, TextStyle, ViewTree};
