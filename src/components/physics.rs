use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Force and torque contributions handed to the external rigid-body integrator.
///
/// Each force system replaces its own [`ForceCategory`] every tick; the accumulation system
/// then sums everything into `net_force` / `net_moment` in the world frame.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub net_force: Vector3<f64>,
    pub net_moment: Vector3<f64>,
    pub forces: Vec<Force>,
    pub moments: Vec<Moment>,
    /// Optional per-tick linear damping coefficient for the integrator to use instead of its own
    pub linear_damping_override: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    /// Application point relative to the centre of mass, in the body frame
    pub point: Option<Vector3<f64>>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moment {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
    Control,
    Custom(String),
}

impl PhysicsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn add_moment(&mut self, moment: Moment) {
        self.moments.push(moment);
    }

    /// Drops every force and moment of one category so a system can publish this tick's set
    pub fn clear_category(&mut self, category: &ForceCategory) {
        self.forces.retain(|f| &f.category != category);
        self.moments.retain(|m| &m.category != category);
    }

    pub fn forces_in(&self, category: &ForceCategory) -> impl Iterator<Item = &Force> {
        let category = category.clone();
        self.forces.iter().filter(move |f| f.category == category)
    }

    pub fn moments_in(&self, category: &ForceCategory) -> impl Iterator<Item = &Moment> {
        let category = category.clone();
        self.moments.iter().filter(move |m| m.category == category)
    }
}
