//! Instant quote engine.
//!
//! Turns wall dimensions and per-sq.ft unit prices into a material,
//! installation and total estimate. The maths lives in [`calculators`] and
//! is pure; the rest is presentation and HTTP plumbing.

pub mod calculators;
pub mod display;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_quote, parse_amount, round_money, QuoteDefaults, QuoteInput, QuoteResult};
pub use display::{format_area, format_rupees, format_rupees_exact, CURRENCY};
pub use routes::router;
