//! Core domain logic for the activity tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Activity type definitions and their `(category, name)` uniqueness key
//! - Activity records with an explicit open/closed lifecycle state
//! - Summarization: rolling closed records into a date×category table

pub mod activity_type;
pub mod record;
pub mod summary;
pub mod timestamp;

mod error;

pub use activity_type::ActivityType;
pub use error::ValidationError;
pub use record::{ActivityRecord, ActivityState, AlreadyClosed, Closure};
pub use summary::{FALLBACK_CATEGORY, Summary, summarize};
