use serde::{Deserialize, Serialize};

use crate::core::error::SimError;

/// Spacing between trajectory samples, in time units of the chosen system.
pub const TIME_STEP_S: f64 = 0.1;
/// Inverse of [`TIME_STEP_S`]; sample counts are derived from `T * 10`.
pub const STEPS_PER_SECOND: f64 = 10.0;
/// Cap on samples per trajectory: flights longer than 100000 time units are cut short.
pub const MAX_SAMPLES: usize = 1_000_001;

/// Launch inputs for one projectile. Validated on construction and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    initial_velocity: f64,
    launch_angle_deg: f64,
    launch_angle_rad: f64,
    gravity: f64,
}

impl LaunchParameters {
    /// Rejects non-finite values, velocity <= 0, gravity <= 0, and combinations
    /// whose flight metrics overflow to infinity.
    ///
    /// The angle is not range-checked: 190 degrees goes straight into the
    /// trigonometry and yields a degenerate flight.
    pub fn new(
        initial_velocity: f64,
        launch_angle_deg: f64,
        gravity: f64,
    ) -> Result<Self, SimError> {
        if !initial_velocity.is_finite() || !launch_angle_deg.is_finite() || !gravity.is_finite()
        {
            return Err(SimError::invalid("launch parameters must be finite numbers"));
        }
        if initial_velocity <= 0.0 {
            return Err(SimError::invalid(format!(
                "initial velocity must be positive, got {initial_velocity}"
            )));
        }
        if gravity <= 0.0 {
            return Err(SimError::invalid(format!(
                "gravity must be positive, got {gravity}"
            )));
        }

        let params = Self {
            initial_velocity,
            launch_angle_deg,
            launch_angle_rad: launch_angle_deg.to_radians(),
            gravity,
        };
        let metrics = [params.time_of_flight(), params.max_height(), params.range()];
        if metrics.iter().any(|m| !m.is_finite()) {
            return Err(SimError::invalid(format!(
                "velocity {initial_velocity} with gravity {gravity} overflows the flight metrics"
            )));
        }
        Ok(params)
    }

    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    pub fn launch_angle_deg(&self) -> f64 {
        self.launch_angle_deg
    }

    pub fn launch_angle_rad(&self) -> f64 {
        self.launch_angle_rad
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn velocity_components(&self) -> (f64, f64) {
        let theta = self.launch_angle_rad;
        (
            self.initial_velocity * theta.cos(),
            self.initial_velocity * theta.sin(),
        )
    }

    pub fn position_at(&self, time_s: f64) -> (f64, f64) {
        let (vx, vy) = self.velocity_components();
        let x = vx * time_s;
        let y = (vy * time_s) - (0.5 * self.gravity * time_s * time_s);
        (x, y)
    }

    pub fn time_of_flight(&self) -> f64 {
        2.0 * self.initial_velocity * self.launch_angle_rad.sin() / self.gravity
    }

    pub fn max_height(&self) -> f64 {
        let sin_theta = self.launch_angle_rad.sin();
        self.initial_velocity.powi(2) * sin_theta * sin_theta / (2.0 * self.gravity)
    }

    /// Signed: angles past 90 degrees land behind the launch point.
    pub fn range(&self) -> f64 {
        self.initial_velocity.powi(2) * (2.0 * self.launch_angle_rad).sin() / self.gravity
    }
}

/// Closed-form results for one projectile; one entry of the persisted record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    #[serde(rename = "Projectile")]
    pub projectile_index: usize,
    #[serde(rename = "Time of Flight")]
    pub time_of_flight: f64,
    #[serde(rename = "Max Height")]
    pub max_height: f64,
    #[serde(rename = "Range")]
    pub range: f64,
}

impl FlightSummary {
    pub fn from_parameters(projectile_index: usize, params: &LaunchParameters) -> Self {
        Self {
            projectile_index,
            time_of_flight: params.time_of_flight(),
            max_height: params.max_height(),
            range: params.range(),
        }
    }

    /// No positive flight time; the trajectory collapses to the launch point.
    pub fn is_degenerate(&self) -> bool {
        self.time_of_flight <= 0.0
    }
}

/// `floor(T * 10) + 1`, clamped to `1..=MAX_SAMPLES`.
pub fn sample_count(time_of_flight: f64) -> usize {
    if !time_of_flight.is_finite() || time_of_flight <= 0.0 {
        return 1;
    }
    let steps = (time_of_flight * STEPS_PER_SECOND).floor();
    if steps >= (MAX_SAMPLES - 1) as f64 {
        MAX_SAMPLES
    } else {
        steps as usize + 1
    }
}

/// Positions on the fixed 0.1 grid. Holds only the parameters, so every call
/// to [`Trajectory::samples`] recomputes the same sequence from scratch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    params: LaunchParameters,
    sample_count: usize,
}

impl Trajectory {
    pub fn new(params: LaunchParameters) -> Self {
        Self {
            params,
            sample_count: sample_count(params.time_of_flight()),
        }
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> {
        let params = self.params;
        (0..self.sample_count).map(move |i| params.position_at(i as f64 * TIME_STEP_S))
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples().collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileFlight {
    pub summary: FlightSummary,
    pub trajectory: Trajectory,
}

pub fn compute_flight(projectile_index: usize, params: LaunchParameters) -> ProjectileFlight {
    ProjectileFlight {
        summary: FlightSummary::from_parameters(projectile_index, &params),
        trajectory: Trajectory::new(params),
    }
}

/// Flights in input order, numbered from 1.
pub fn simulate(projectiles: &[LaunchParameters]) -> Vec<ProjectileFlight> {
    projectiles
        .iter()
        .enumerate()
        .map(|(i, params)| compute_flight(i + 1, *params))
        .collect()
}

pub fn summaries(flights: &[ProjectileFlight]) -> Vec<FlightSummary> {
    flights.iter().map(|flight| flight.summary).collect()
}
