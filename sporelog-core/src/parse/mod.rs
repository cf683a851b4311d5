//! Line parsers for the two logs written by the enclosure service.
//!
//! The air log carries one sensor reading per line:
//!
//! ```text
//! 22 Jul 2023 14:06:20 CO2: 1281.21ppm, temp: 23.73°C, rh: 98.36%
//! ```
//!
//! The monitor log mixes image captures, relay switches and register debug
//! output; only the first two produce events:
//!
//! ```text
//! 22-Jul-2023 03:05:41.141 [INFO] Capturing /data/images/image_10.jpg
//! 22-Jul-2023 03:05:43.182 [INFO] CO2 is HIGH (1528.5 >= 1000), turning ON  OUTLET 6 (fan)
//! 22-Jul-2023 03:05:43.183 [INFO] Setting register bits to 00000010
//! ```
//!
//! Both parsers are all-or-nothing: a line whose timestamp cannot be read
//! aborts the whole parse.

mod air;
mod error;
mod monitor;
#[cfg(test)]
mod tests;

pub use air::parse_air_log;
pub use error::ParseError;
pub use monitor::{MonitorLog, parse_monitor_log};
