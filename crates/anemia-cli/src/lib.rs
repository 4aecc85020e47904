//! CLI library components for the anemia screening demonstrator.

pub mod logging;
pub mod pipeline;
pub mod report;
