use std::io::{self, BufRead, Write};

use crate::core::ballistics::LaunchParameters;
use crate::core::error::SimError;
use crate::core::units::UnitSystem;

/// Everything a run needs, gathered before any computation starts.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationRequest {
    pub units: UnitSystem,
    pub projectiles: Vec<LaunchParameters>,
}

pub trait InputCollector {
    fn collect(&mut self) -> Result<SimulationRequest, SimError>;
}

pub fn parse_f64(value: &str, label: &str) -> Result<f64, SimError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SimError::invalid(format!("{label}: '{}' is not a number", value.trim())))
}

pub fn parse_count(value: &str) -> Result<usize, SimError> {
    let count = value.trim().parse::<usize>().map_err(|_| {
        SimError::invalid(format!(
            "number of projectiles: '{}' is not a whole number",
            value.trim()
        ))
    })?;
    if count == 0 {
        return Err(SimError::invalid("at least one projectile is required"));
    }
    Ok(count)
}

/// Parses `velocity,angle,gravity`.
pub fn parse_launch_triplet(value: &str) -> Result<LaunchParameters, SimError> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(SimError::invalid(format!(
            "expected <velocity>,<angle>,<gravity>, got '{value}'"
        )));
    }

    LaunchParameters::new(
        parse_f64(parts[0], "initial velocity")?,
        parse_f64(parts[1], "launch angle")?,
        parse_f64(parts[2], "gravity")?,
    )
}

fn with_projectile<T>(index: usize, result: Result<T, SimError>) -> Result<T, SimError> {
    result.map_err(|err| match err {
        SimError::InvalidParameter(msg) => {
            SimError::InvalidParameter(format!("projectile {index}: {msg}"))
        }
        other => other,
    })
}

/// Asks for the unit system, the projectile count, then each projectile in turn.
/// The first malformed answer aborts the whole collection.
pub struct PromptCollector<R, W> {
    reader: R,
    writer: W,
}

impl PromptCollector<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptCollector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, SimError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(SimError::invalid("input ended unexpectedly (EOF)"));
        }
        Ok(line)
    }

    fn read_f64(&mut self, prompt: &str, label: &str) -> Result<f64, SimError> {
        let line = self.read_line(prompt)?;
        parse_f64(&line, label)
    }

    fn read_projectile(&mut self, units: UnitSystem) -> Result<LaunchParameters, SimError> {
        let velocity = self.read_f64(
            &format!("Enter initial velocity ({}): ", units.velocity_unit()),
            "initial velocity",
        )?;
        let angle = self.read_f64("Enter launch angle in degrees: ", "launch angle")?;
        let gravity = self.read_f64(
            &format!("Enter gravitational acceleration ({}): ", units.gravity_unit()),
            "gravity",
        )?;
        LaunchParameters::new(velocity, angle, gravity)
    }
}

impl<R: BufRead, W: Write> InputCollector for PromptCollector<R, W> {
    fn collect(&mut self) -> Result<SimulationRequest, SimError> {
        let units = UnitSystem::from_token(&self.read_line("Choose unit system (SI or US): ")?);
        let count = parse_count(&self.read_line("Enter the number of projectiles: ")?)?;

        let mut projectiles = Vec::with_capacity(count);
        for index in 1..=count {
            writeln!(self.writer, "Projectile {index}:")?;
            let params = self.read_projectile(units);
            projectiles.push(with_projectile(index, params)?);
        }

        Ok(SimulationRequest { units, projectiles })
    }
}

/// Builds a request from a unit token and `velocity,angle,gravity` triplets.
pub struct ArgsCollector {
    units: String,
    triplets: Vec<String>,
}

impl ArgsCollector {
    pub fn new(units: impl Into<String>, triplets: Vec<String>) -> Self {
        Self {
            units: units.into(),
            triplets,
        }
    }
}

impl InputCollector for ArgsCollector {
    fn collect(&mut self) -> Result<SimulationRequest, SimError> {
        if self.triplets.is_empty() {
            return Err(SimError::invalid("at least one projectile is required"));
        }

        let projectiles = self
            .triplets
            .iter()
            .enumerate()
            .map(|(i, triplet)| with_projectile(i + 1, parse_launch_triplet(triplet)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SimulationRequest {
            units: UnitSystem::from_token(&self.units),
            projectiles,
        })
    }
}
