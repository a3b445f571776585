//! # mdnum-core
//!
//! Naming rules and rename planning for numbered Markdown notes.
//!
//! Nothing in this crate writes to disk:
//! - [`title`] — first-line title extraction and filename sanitization
//! - [`naming`] — numeric prefixes, stems, [`Candidate`], collision suffixes
//! - [`policy`] — ordering [`Policy`], [`RenameOptions`], [`SequenceCounter`]
//! - [`plan`] — pure [`plan_renames`] producing a [`RenamePlan`]
//! - Error hierarchy ([`MdnumError`])

pub mod error;
pub mod naming;
pub mod plan;
pub mod policy;
pub mod title;

pub use error::{MdnumError, Result};
pub use naming::Candidate;
pub use plan::{plan_renames, Note, RenamePlan, RenamePlanEntry};
pub use policy::{Policy, RenameOptions, SequenceCounter};
