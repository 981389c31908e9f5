//! Omnifile Domain Layer
//!
//! This crate contains the core vocabulary shared by every other Omnifile crate.
//! It has ZERO external dependencies and defines the fundamental concepts and
//! trait interfaces that the infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **Category**: One of eleven fixed labels; also the destination subfolder
//! - **ClassificationResult**: Category plus proposed file name for one document
//! - **ClassificationSource**: Whether the result came from the LLM or the keyword fallback
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure business vocabulary only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod classification;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use classification::{ClassificationResult, ClassificationSource, MAX_NAME_CHARS};
