//! Omnifile Organizer
//!
//! Batch pipeline that copies documents into a categorized folder tree.
//!
//! # Overview
//!
//! For every supported file under the input folder:
//!
//! ```text
//! Extract → Classify (remote | fallback) → Validate/Improve → Sanitize
//!         → ResolveCollision → Copy → Done | Failed
//! ```
//!
//! Copies land at `<output>/<category>/<name><ext>`; a name already taken
//! gets the lowest free ` (n)` suffix. Originals are never moved or deleted.
//! A file that fails at any stage is reported with that stage and the batch
//! continues.
//!
//! # Concurrency
//!
//! [`BatchWorker`] runs the batch sequentially on one tokio task and sends
//! [`OrganizerEvent`]s over an unbounded channel. Text extraction and copying
//! run on the blocking pool.
//!
//! # Configuration
//!
//! ```toml
//! dry_run = false
//! preserve_timestamps = true
//! ```

#![warn(missing_docs)]

mod config;
mod discovery;
mod error;
mod events;
mod organizer;
mod placement;
mod report;
mod worker;

pub use config::OrganizerConfig;
pub use discovery::discover_files;
pub use error::OrganizerError;
pub use events::{OrganizerEvent, Placement, Stage};
pub use organizer::Organizer;
pub use placement::{copy_file, next_free_name, resolve_collision, resolve_collision_excluding};
pub use report::{BatchReport, FailedFile};
pub use worker::BatchWorker;
