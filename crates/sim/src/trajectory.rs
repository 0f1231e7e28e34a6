use cartpole_plant::{Command, Reference, State, wrap};
use serde::Serialize;

/// One recorded point of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Simulation time (s).
    pub time: f64,

    /// Plant state at `time`.
    pub state: State,

    /// Controller command evaluated at `state`.
    pub command: Command,
}

impl Sample {
    /// Wrapped angle error of this sample relative to `reference`.
    #[must_use]
    pub fn theta_error(&self, reference: &Reference) -> f64 {
        wrap(self.state.theta - reference.theta)
    }
}

/// The samples of one simulation run, in time order.
///
/// A trajectory is built by the simulation and is read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    pub(crate) fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Sample times in order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|sample| sample.time)
    }

    /// Largest applied force magnitude, or zero for an empty trajectory.
    #[must_use]
    pub fn peak_force(&self) -> f64 {
        self.samples
            .iter()
            .map(|sample| sample.command.force.abs())
            .fold(0.0, f64::max)
    }

    /// Number of samples whose requested force was clipped.
    #[must_use]
    pub fn saturated_count(&self) -> usize {
        self.samples
            .iter()
            .filter(|sample| sample.command.saturated)
            .count()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use cartpole_plant::Mode;

    fn sample(time: f64, theta: f64, force: f64, saturated: bool) -> Sample {
        Sample {
            time,
            state: State::new(0.0, theta, 0.0, 0.0),
            command: Command {
                force,
                damping: 0.1,
                mode: Mode::SwingUp,
                proximity: 0.0,
                saturated,
            },
        }
    }

    #[test]
    fn summaries() {
        let trajectory = Trajectory::from_samples(vec![
            sample(0.0, 0.0, 3.0, false),
            sample(0.5, 1.0, -20.0, true),
            sample(1.0, 2.0, 20.0, true),
        ]);

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.times().collect::<Vec<_>>(), [0.0, 0.5, 1.0]);
        assert_eq!(trajectory.peak_force(), 20.0);
        assert_eq!(trajectory.saturated_count(), 2);
        assert_eq!(trajectory.last().map(|s| s.time), Some(1.0));
        assert_eq!((&trajectory).into_iter().count(), 3);
    }

    #[test]
    fn empty_trajectory() {
        let trajectory = Trajectory::default();

        assert!(trajectory.is_empty());
        assert_eq!(trajectory.peak_force(), 0.0);
        assert!(trajectory.first().is_none());
    }

    #[test]
    fn theta_error_is_wrapped() {
        let s = sample(0.0, 3.0 * PI - 0.1, 0.0, false);
        let error = s.theta_error(&Reference::default());

        assert_relative_eq!(error, -0.1, epsilon = 1e-12);
    }
}
