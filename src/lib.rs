//! ftc-recap — turns one event's FTC Events API data into a spoken-style
//! recap script for a video voice-over.
//!
//! Data flows one way: gateway → entity model → statistics engine →
//! narrative composer → assembled script. One snapshot is fetched per
//! script; narration mutates only the per-team mention counters.

pub mod api;
pub mod core;
pub mod schema;
