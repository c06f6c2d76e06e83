//! # Interface Segregation
//!
//! Clients should not be forced to depend on operations they don't use. Instead of one
//! "smart device" trait, each capability is its own trait and a device implements only
//! the ones it has.
//!
//! | Device | [`Switchable`] | [`AdjustableBrightness`] | [`AdjustableTemperature`] |
//! |--------|:-:|:-:|:-:|
//! | [`Light`] | yes | yes | no |
//! | [`Thermostat`] | yes | no | yes |
//!
//! A thermostat has no brightness, and asking for one does not compile:
//!
//! ```rust,compile_fail
//! use demo_framework::Console;
//! use solid_sample::interface_segregation::{AdjustableBrightness, Thermostat};
//!
//! let thermostat = Thermostat::new(Console::stdout());
//! thermostat.set_brightness(75);
//! ```
//!
//! Generic code states which capabilities it needs, so the same holds for functions:
//!
//! ```rust,compile_fail
//! use demo_framework::Console;
//! use solid_sample::interface_segregation::{dim, Thermostat};
//!
//! dim(&Thermostat::new(Console::stdout()), 10);
//! ```

use demo_framework::{Console, Demo, DemoError};

pub trait Switchable {
    fn turn_on(&self);
    fn turn_off(&self);
}

pub trait AdjustableBrightness {
    /// `level` is a percentage.
    fn set_brightness(&self, level: u8);
}

pub trait AdjustableTemperature {
    /// `temperature` is in degrees.
    fn set_temperature(&self, temperature: i32);
}

pub struct Light {
    console: Console,
}

impl Light {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Switchable for Light {
    fn turn_on(&self) {
        self.console.line("Light turned on");
    }

    fn turn_off(&self) {
        self.console.line("Light turned off");
    }
}

impl AdjustableBrightness for Light {
    fn set_brightness(&self, level: u8) {
        self.console.line(format!("Light brightness set to {level}"));
    }
}

pub struct Thermostat {
    console: Console,
}

impl Thermostat {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Switchable for Thermostat {
    fn turn_on(&self) {
        self.console.line("Thermostat turned on");
    }

    fn turn_off(&self) {
        self.console.line("Thermostat turned off");
    }
}

impl AdjustableTemperature for Thermostat {
    fn set_temperature(&self, temperature: i32) {
        self.console.line(format!("Temperature set to {temperature} degrees"));
    }
}

/// Turns a device on and sets its brightness. Only dimmable devices are accepted.
pub fn dim<D: Switchable + AdjustableBrightness>(device: &D, level: u8) {
    device.turn_on();
    device.set_brightness(level);
}

/// Switches off every device, whatever else it can do.
pub fn all_off(devices: &[&dyn Switchable]) {
    for device in devices {
        device.turn_off();
    }
}

pub struct InterfaceSegregationDemo;

impl Demo for InterfaceSegregationDemo {
    fn name(&self) -> &'static str {
        "interface-segregation"
    }

    fn summary(&self) -> &'static str {
        "Devices implement only the small interfaces they need"
    }

    fn run(&self, console: &Console) -> Result<(), DemoError> {
        let light = Light::new(console.clone());
        light.turn_on();
        light.set_brightness(75);

        let thermostat = Thermostat::new(console.clone());
        thermostat.turn_on();
        thermostat.set_temperature(22);
        Ok(())
    }
}
