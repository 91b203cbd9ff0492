pub mod config;
pub mod error;
pub mod handoff;
pub mod logging;
pub mod pipeline;
pub mod session;
pub mod sink;
pub mod source;
