use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::vehicle::config::{ControlChannel, EngineConfig};
use crate::components::ActuatorBank;

/// Raw normalized pilot inputs, written by the input-binding layer (or the attitude hold).
///
/// Every value is expected in [-1, 1]. `throttle[i]` and `vectoring[i]` drive engine `i`.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub throttle: Vec<f64>,
    pub vectoring: Vec<f64>,
}

impl ControlInputs {
    /// Neutral inputs with one throttle and vectoring slot per engine
    pub fn for_engines(count: usize) -> Self {
        Self {
            throttle: vec![0.0; count],
            vectoring: vec![0.0; count],
            ..Default::default()
        }
    }

    pub fn get(&self, channel: ControlChannel) -> Option<f64> {
        match channel {
            ControlChannel::Roll => Some(self.roll),
            ControlChannel::Pitch => Some(self.pitch),
            ControlChannel::Yaw => Some(self.yaw),
            ControlChannel::Throttle(i) => self.throttle.get(i).copied(),
            ControlChannel::Vectoring(i) => self.vectoring.get(i).copied(),
        }
    }

    /// Sets a channel, growing the engine vectors when needed
    pub fn set(&mut self, channel: ControlChannel, value: f64) {
        match channel {
            ControlChannel::Roll => self.roll = value,
            ControlChannel::Pitch => self.pitch = value,
            ControlChannel::Yaw => self.yaw = value,
            ControlChannel::Throttle(i) => set_slot(&mut self.throttle, i, value),
            ControlChannel::Vectoring(i) => set_slot(&mut self.vectoring, i, value),
        }
    }
}

fn set_slot(values: &mut Vec<f64>, index: usize, value: f64) {
    if values.len() <= index {
        values.resize(index + 1, 0.0);
    }
    values[index] = value;
}

/// Effective [-1, 1] control state after actuator dynamics.
///
/// A channel with a bound actuator reports the actuator's normalized position; any other
/// channel passes the raw input through.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub throttle: Vec<f64>,
    pub vectoring: Vec<f64>,
}

impl ControlState {
    pub fn resolve(inputs: &ControlInputs, actuators: &ActuatorBank) -> Self {
        let effective = |channel: ControlChannel, raw: f64| {
            actuators
                .for_channel(channel)
                .map(|a| a.normalized())
                .unwrap_or(raw)
        };

        Self {
            roll: effective(ControlChannel::Roll, inputs.roll),
            pitch: effective(ControlChannel::Pitch, inputs.pitch),
            yaw: effective(ControlChannel::Yaw, inputs.yaw),
            throttle: inputs
                .throttle
                .iter()
                .enumerate()
                .map(|(i, &raw)| effective(ControlChannel::Throttle(i), raw))
                .collect(),
            vectoring: inputs
                .vectoring
                .iter()
                .enumerate()
                .map(|(i, &raw)| effective(ControlChannel::Vectoring(i), raw))
                .collect(),
        }
    }

    pub fn get(&self, channel: ControlChannel) -> Option<f64> {
        match channel {
            ControlChannel::Roll => Some(self.roll),
            ControlChannel::Pitch => Some(self.pitch),
            ControlChannel::Yaw => Some(self.yaw),
            ControlChannel::Throttle(i) => self.throttle.get(i).copied(),
            ControlChannel::Vectoring(i) => self.vectoring.get(i).copied(),
        }
    }
}

/// Runtime state of one engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineState {
    /// Current pitch rotation of the thrust point (deg), applied from the next tick on
    pub vector_angle: f64,
    /// Thrust produced on the last tick (N)
    pub thrust: f64,
    /// Thrust vector produced on the last tick, world frame (N)
    pub thrust_vector: Vector3<f64>,
}

#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineStates {
    pub engines: Vec<EngineState>,
}

impl EngineStates {
    pub fn new(configs: &[EngineConfig]) -> Self {
        Self {
            engines: vec![EngineState::default(); configs.len()],
        }
    }

    /// Total thrust magnitude over all engines on the last tick (N)
    pub fn total_thrust(&self) -> f64 {
        self.engines.iter().map(|e| e.thrust).sum()
    }

    pub fn reset(&mut self) {
        self.engines.iter_mut().for_each(|e| *e = EngineState::default());
    }
}

/// Smoothed velocity heading used by the probe drag model
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeDragState {
    /// Unit heading in world space; `None` until the first tick with airspeed
    pub smoothed_heading: Option<Vector3<f64>>,
    /// Angle between the nose and the smoothed heading on the last tick (rad)
    pub offbore: f64,
}

impl ProbeDragState {
    /// Blends the heading towards `direction` at `smoothing` per second.
    ///
    /// The first sample is taken as-is. Returns the updated heading.
    pub fn update(&mut self, direction: &Vector3<f64>, smoothing: f64, dt: f64) -> Vector3<f64> {
        let heading = match self.smoothed_heading {
            None => *direction,
            Some(previous) => {
                let blend = 1.0 - (-smoothing.max(0.0) * dt).exp();
                previous
                    .lerp(direction, blend)
                    .try_normalize(1e-12)
                    .unwrap_or(*direction)
            }
        };
        self.smoothed_heading = Some(heading);
        heading
    }

    pub fn reset(&mut self) {
        self.smoothed_heading = None;
        self.offbore = 0.0;
    }
}
