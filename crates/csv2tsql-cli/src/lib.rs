//! CLI library components for csv2tsql.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
