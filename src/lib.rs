pub mod chart;
pub mod config;
pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod readability;
pub mod text;
// cmd and reports are binary modules (see main.rs).
