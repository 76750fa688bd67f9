//! Core library for humanizer.
//!
//! Rewrites informal prose into a more formal, academic register: contractions
//! are expanded, transitions are inserted, and optionally clauses are turned
//! passive and content words swapped for synonyms.
//!
//! # Modules
//!
//! - [`humanizer`] - The rewrite pipeline and its stages
//! - [`tagger`] - The natural-language tagging seam and the built-in tagger
//! - [`dictionaries`] - Word lists and tables
//! - [`stats`] - Word and sentence counts
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use humanizer_core::{HumanizeOptions, HumanizerConfig, TextHumanizer};
//!
//! let humanizer = TextHumanizer::new(HumanizerConfig::recommended());
//! let out = humanizer.humanize_seeded("We can't stop now.", HumanizeOptions::all(), 7);
//! assert!(out.contains("cannot"));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod humanizer;
pub mod stats;
pub mod tagger;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    ConfigError, ConfigResult, HumanizeError, HumanizeResult, TaggerError, TaggerResult,
};
pub use humanizer::{HumanizeOptions, HumanizerConfig, Stage, TextHumanizer};
pub use stats::{HumanizeReport, TextStats};
pub use tagger::{RuleTagger, Tagger, UnavailableTagger};
