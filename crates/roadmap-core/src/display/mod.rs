//! Markdown display for goals, plans, progress and operation notices.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and notices get small wrapper types. Everything renders as
//! markdown so a terminal renderer can style it, and reads fine as plain
//! text when it cannot.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │    Markdown     │
//! │ (Goal, Plan...) │───▶│ wrapper types   │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Goal history listing ([`Goals`])
//! - [`status`]: Success/error notices ([`Notice`])
//! - [`datetime`]: Ordinal date rendering (`1st Mar 2025`)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use roadmap_core::display::Notice;
//!
//! let notice = Notice::success("Task marked as completed");
//! assert_eq!(notice.to_string().trim(), "Success: Task marked as completed");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::Goals;
pub use datetime::{ordinal_date, OrdinalDate};
pub use models::ProgressBar;
pub use status::{Notice, NoticeKind};
