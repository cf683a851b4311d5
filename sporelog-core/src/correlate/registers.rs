use crate::event::{
    ActuatorStateChange, CorrelatedFrame, ImageEvent, SensorReading, TrackedDevice,
};
use tracing::trace;

/// Latest known value of every tracked quantity during a sweep.
///
/// Relays start OFF. Sensor values start unknown (`None`), not zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    pub humidifier: bool,
    pub heater: bool,
    pub fan: bool,
    pub lights: bool,
    pub co2: Option<String>,
    pub temp: Option<String>,
    pub rh: Option<String>,
}

impl Registers {
    pub fn apply_change(&mut self, change: &ActuatorStateChange) {
        let Ok(device) = change.device.parse::<TrackedDevice>() else {
            trace!(device = %change.device, "ignoring untracked device");
            return;
        };

        let register = match device {
            TrackedDevice::Fan => &mut self.fan,
            TrackedDevice::Humidifier => &mut self.humidifier,
            TrackedDevice::Heater => &mut self.heater,
            TrackedDevice::Lights => &mut self.lights,
        };
        *register = change.state;
    }

    pub fn apply_reading(&mut self, reading: &SensorReading) {
        self.co2 = Some(reading.co2_ppm.clone());
        self.temp = Some(reading.temp_degc.clone());
        self.rh = Some(reading.rh_pct.clone());
    }

    pub fn snapshot(&self, image: &ImageEvent) -> CorrelatedFrame {
        CorrelatedFrame {
            timestamp: image.timestamp,
            file_path: image.file_path.clone(),
            hum_outlet: self.humidifier,
            heat_outlet: self.heater,
            fan_outlet: self.fan,
            light_outlet: self.lights,
            rh_value: self.rh.clone(),
            temp_value: self.temp.clone(),
            co2_value: self.co2.clone(),
        }
    }
}
