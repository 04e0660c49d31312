//! Test fixture modules.
//!
//! - `scorecard` - Scorecard JSON documents in every supported input shape

pub mod scorecard;
