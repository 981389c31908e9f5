//! Omnifile Naming
//!
//! Quality control for proposed file names.
//!
//! This crate provides:
//! - Name validation (generic words, bare dates, too-short names)
//! - Replacement names built from the original filename
//! - Category-aware improvement of names produced by the keyword fallback
//! - Filename sanitization (illegal characters, whitespace, length)
//!
//! # Examples
//!
//! ```
//! use omnifile_naming::{sanitize_filename, NameValidator};
//!
//! let validator = NameValidator::default_config();
//!
//! // Generic names are replaced with something derived from the original file
//! let name = validator.validate_or_replace("Documento", "ata_reuniao_marco.pdf");
//! assert_eq!(name, "Documento - ata reuniao marco");
//!
//! assert_eq!(sanitize_filename("Relatório: 2024/Q1?"), "Relatório 2024 Q1");
//! ```

#![warn(missing_docs)]

mod config;
mod patterns;
mod sanitize;
mod validator;

pub use config::NamingConfig;
pub use patterns::{embedded_date, is_date_only};
pub use sanitize::{sanitize_filename, DEFAULT_NAME, INVALID_CHARS};
pub use validator::{clean_stem, file_stem, NameValidator, NameVerdict, RejectionReason};
