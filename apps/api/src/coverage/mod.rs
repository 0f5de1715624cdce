// Keyword coverage: role → keyword profile resolution and case-insensitive keyword matching.
// The engine is pure; handlers are the only place that touches HTTP.

pub mod engine;
pub mod handlers;
pub mod profiles;
pub mod report;
