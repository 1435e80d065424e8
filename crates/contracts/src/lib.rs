//! # Contracts
//!
//! Frozen interface contracts shared by every fanlog crate: severities, the
//! target trait, log records and the configuration blueprint.
//! Business crates depend on this crate only; reverse dependencies are prohibited.
//!
//! ## Ordering Model
//! - `Severity` is totally ordered, `Debug` lowest and `Fatal` highest
//! - A target accepts a record when `record.level >= target.threshold()`

mod blueprint;
mod error;
mod record;
mod severity;
mod target;

pub use blueprint::*;
pub use error::*;
pub use record::{CallSite, LogRecord};
pub use severity::{ParseSeverityError, Severity};
pub use target::{LogTarget, TargetState};
