//! Robots.txt handling module
//!
//! Fetching, parsing, and per-domain caching of robots.txt directives.

mod checker;
mod rules;

pub use checker::RobotsChecker;
pub use rules::RobotsRules;
