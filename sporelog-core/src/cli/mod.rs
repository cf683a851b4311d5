//! Command implementations behind the `sporelog` binary. Each takes the
//! resolved config and window and returns `anyhow::Result` so the binary
//! only has to print the error chain.

#[cfg(feature = "frames")]
pub mod frames;
#[cfg(feature = "chart")]
pub mod graph;
pub mod json;
