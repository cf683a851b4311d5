pub mod cli;
pub mod conf;
pub mod correlate;
pub mod event;
pub mod logging;
pub mod parse;
pub mod reconcile;
pub mod render;
pub mod timeline;
pub mod window;
