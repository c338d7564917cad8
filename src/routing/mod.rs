//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Normalized path
//!     → table.rs (ordered rule scan, first match wins)
//!     → matcher.rs (evaluate one rule: exact / prefix / dynamic set)
//!     → Return: RouteMatch (handler id, params, invocation) or no match
//!
//! Table Construction (at startup):
//!     category names (external route-type table)
//!     → fixed rule sequence, most specific prefixes first
//!     → Freeze as immutable RouteTable, shared via Arc
//! ```
//!
//! # Design Decisions
//! - Rules are an explicit ordered list, not a hash map: routes overlap by
//!   prefix, so linear precedence is the contract, not an accident
//! - Declared category names take precedence over the genre fallback
//! - No regex; exact and prefix tests only

pub mod matcher;
pub mod table;

pub use matcher::{MatchError, Matcher};
pub use table::{RouteMatch, RouteTable};
