use std::str::FromStr;
use thiserror::Error;

/// Relays whose state is reported on every correlated frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedDevice {
    Fan,
    Humidifier,
    Heater,
    Lights,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("untracked device: {0}")]
pub struct UntrackedDevice(pub String);

impl FromStr for TrackedDevice {
    type Err = UntrackedDevice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fan" => Ok(Self::Fan),
            "humidifier" => Ok(Self::Humidifier),
            "heater" => Ok(Self::Heater),
            "lights" => Ok(Self::Lights),
            _ => Err(UntrackedDevice(s.to_string())),
        }
    }
}
