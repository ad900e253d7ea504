use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Proportional-integral-derivative controller.
///
/// The integral sum and previous error persist between calls until [`PidController::reset`].
/// There is no anti-windup: a long-standing error grows the integral without bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PidController {
    pub p: f64,
    pub i: f64,
    pub d: f64,
    pub target: f64,
    #[serde(skip)]
    integral: f64,
    #[serde(skip)]
    previous_error: f64,
}

impl PidController {
    pub fn new(p: f64, i: f64, d: f64) -> Self {
        Self {
            p,
            i,
            d,
            target: 0.0,
            integral: 0.0,
            previous_error: 0.0,
        }
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    /// Control signal for the measured `current` value. `dt` must be strictly positive.
    pub fn get_control(&mut self, current: f64, dt: f64) -> f64 {
        let error = self.target - current;

        let p_term = self.p * error;
        self.integral += self.i * error * dt;
        let d_term = self.d * (error - self.previous_error) / dt;
        self.previous_error = error;

        p_term + self.integral + d_term
    }

    pub fn integral(&self) -> f64 {
        self.integral
    }

    pub fn previous_error(&self) -> f64 {
        self.previous_error
    }

    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.previous_error = 0.0;
    }
}

/// Bank/pitch hold that drives the roll and pitch channels while engaged
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct AttitudeHold {
    pub engaged: bool,
    /// Holds `bank.target` radians of bank through the roll channel
    pub bank: Option<PidController>,
    /// Holds `pitch.target` radians of pitch through the pitch channel
    pub pitch: Option<PidController>,
}

impl Default for AttitudeHold {
    fn default() -> Self {
        Self {
            engaged: false,
            bank: Some(PidController::new(1.2, 0.05, 0.3)),
            pitch: Some(PidController::new(2.0, 0.1, 0.4)),
        }
    }
}

impl AttitudeHold {
    pub fn wings_level() -> Self {
        Self {
            engaged: true,
            ..Default::default()
        }
    }

    pub fn engage(&mut self) {
        self.engaged = true;
    }

    /// Disengaging also clears the controllers so a later engage starts without stale history
    pub fn disengage(&mut self) {
        self.engaged = false;
        if let Some(pid) = self.bank.as_mut() {
            pid.reset();
        }
        if let Some(pid) = self.pitch.as_mut() {
            pid.reset();
        }
    }
}
