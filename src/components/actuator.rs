use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::vehicle::config::{ActuatorConfig, ControlChannel};
use crate::utils::move_toward;

/// Rate-limited value follower turning a control input into a bounded physical quantity
/// (a deflection angle, a throttle position).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actuator {
    pub name: String,
    /// Input channel this actuator follows
    pub channel: ControlChannel,
    /// Last raw value passed to [`Actuator::update`]
    pub input_value: f64,
    /// Input clamped to `[min, max]`
    pub target_value: f64,
    pub current_value: f64,
    /// Maximum |Δvalue| per second; `f64::INFINITY` follows the target instantly
    pub rate: f64,
    pub min: f64,
    pub max: f64,
}

impl Actuator {
    pub fn new(config: &ActuatorConfig) -> Self {
        let neutral = (config.max + config.min) / 2.0;
        Self {
            name: config.name.clone(),
            channel: config.channel,
            input_value: neutral,
            target_value: neutral,
            current_value: neutral,
            rate: config.rate,
            min: config.min,
            max: config.max,
        }
    }

    /// Moves towards `clamp(input, min, max)` by at most `rate * dt` and returns the new value.
    pub fn update(&mut self, input: f64, dt: f64) -> f64 {
        self.input_value = input;
        self.target_value = input.clamp(self.min, self.max);

        self.current_value = if self.rate.is_infinite() {
            self.target_value
        } else {
            move_toward(self.current_value, self.target_value, self.rate * dt)
        };
        self.current_value
    }

    /// Maps a symmetric [-1, 1] control signal linearly onto `[min, max]`
    pub fn scaled_input(&self, x: f64) -> f64 {
        x * (self.max - self.min) / 2.0 + (self.max + self.min) / 2.0
    }

    /// Inverse of [`Actuator::scaled_input`] applied to the current value
    pub fn normalized(&self) -> f64 {
        let half_range = (self.max - self.min) / 2.0;
        if half_range.abs() < f64::EPSILON {
            return 0.0;
        }
        (self.current_value - (self.max + self.min) / 2.0) / half_range
    }

    pub fn reset(&mut self) {
        let neutral = (self.max + self.min) / 2.0;
        self.input_value = neutral;
        self.target_value = neutral;
        self.current_value = neutral;
    }
}

/// All actuators of one vehicle, in configuration order
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActuatorBank {
    pub actuators: Vec<Actuator>,
}

impl ActuatorBank {
    pub fn new(configs: &[ActuatorConfig]) -> Self {
        Self {
            actuators: configs.iter().map(Actuator::new).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Actuator> {
        self.actuators.iter().find(|a| a.name == name)
    }

    /// First actuator bound to `channel`
    pub fn for_channel(&self, channel: ControlChannel) -> Option<&Actuator> {
        self.actuators.iter().find(|a| a.channel == channel)
    }

    pub fn reset(&mut self) {
        self.actuators.iter_mut().for_each(Actuator::reset);
    }
}
