use serde::{Deserialize, Deserializer, Serialize};

/// Normalized [-1, 1] input channel supplied by the input-binding layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlChannel {
    Roll,
    Pitch,
    Yaw,
    /// Throttle of the engine at this index
    Throttle(usize),
    /// Thrust-vectoring angle of the engine at this index
    Vectoring(usize),
}

/// Configuration for a single actuator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuatorConfig {
    /// Name used by control surfaces to reference this actuator
    pub name: String,
    /// Input channel the actuator follows
    pub channel: ControlChannel,
    /// Maximum rate of change per second; omitted (or null) means instantaneous
    #[serde(
        default = "unbounded_rate",
        skip_serializing_if = "is_unbounded",
        deserialize_with = "deserialize_rate"
    )]
    pub rate: f64,
    /// Physical lower bound (e.g. rad for surfaces)
    pub min: f64,
    /// Physical upper bound
    pub max: f64,
}

fn unbounded_rate() -> f64 {
    f64::INFINITY
}

fn is_unbounded(rate: &f64) -> bool {
    *rate == f64::INFINITY
}

/// JSON has no infinity, so an instant actuator may arrive as `null`
fn deserialize_rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(unbounded_rate))
}

impl ActuatorConfig {
    pub fn new(name: &str, channel: ControlChannel, rate: f64, min: f64, max: f64) -> Self {
        Self {
            name: name.to_string(),
            channel,
            rate,
            min,
            max,
        }
    }

    /// Symmetric surface actuator deflecting `±limit` radians
    pub fn surface(name: &str, channel: ControlChannel, rate: f64, limit: f64) -> Self {
        Self::new(name, channel, rate, -limit, limit)
    }

    /// Actuator smoothing a [-1, 1] channel (e.g. engine spool-up)
    pub fn smoothing(name: &str, channel: ControlChannel, rate: f64) -> Self {
        Self::new(name, channel, rate, -1.0, 1.0)
    }
}
