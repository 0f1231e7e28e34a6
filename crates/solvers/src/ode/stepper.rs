use cartpole_core::OdeModel;
use ode_solvers::{SVector, System};

use super::{Failure, Method, Stats};

/// Fraction of an interval the adaptive methods integrate past its end.
///
/// Dense output is emitted at `start + spacing`; ending the integration a
/// little later keeps that point strictly inside the integrated span.
const OVERSHOOT: f64 = 1e-3;

/// Relative distance from the interval end within which an output counts as
/// landing on it.
const LANDING_TOL: f64 = 1e-6;

/// The state reached at the end of one grid interval.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Advanced<const N: usize> {
    pub(crate) y: [f64; N],
    pub(crate) stats: Stats,
}

/// Adapts an [`OdeModel`] to the `ode_solvers` system interface.
///
/// A failed model call writes `NaN` into the derivative, which the
/// integrator then reports through its own error handling or which shows up
/// as a non-finite state at the grid point.
struct OdeStepper<'a, M: OdeModel<N>, const N: usize> {
    model: &'a M,
    base: &'a M::Input,
}

impl<M: OdeModel<N>, const N: usize> System<f64, SVector<f64, N>> for OdeStepper<'_, M, N> {
    fn system(&self, x: f64, y: &SVector<f64, N>, dy: &mut SVector<f64, N>) {
        let input = M::apply_state(self.base, x, (*y).into());

        match self.model.call(&input) {
            Ok(output) => {
                *dy = SVector::from(M::extract_derivative(&output));
            }
            Err(_) => {
                *dy = SVector::from_element(f64::NAN);
            }
        }
    }
}

/// Integrates one grid interval from `start` to `end`.
///
/// The integrator is restarted from `y` for every interval, so its internal
/// step never exceeds the grid spacing.
pub(crate) fn advance<M, const N: usize>(
    model: &M,
    base: &M::Input,
    start: f64,
    end: f64,
    y: [f64; N],
    method: Method,
) -> Result<Advanced<N>, Failure>
where
    M: OdeModel<N>,
{
    let spacing = end - start;
    let system = OdeStepper { model, base };
    let y_start = SVector::from(y);

    let (stats, y_end) = match method {
        Method::Rk4 => {
            let mut stepper = ode_solvers::Rk4::new(system, start, y_start, end, spacing);

            let stats = stepper.integrate().map_err(|err| Failure::from(&err))?;
            let y_end = landing(stepper.x_out(), stepper.y_out(), end, spacing)?;

            (stats, y_end)
        }
        Method::Dopri5 { rel_tol, abs_tol } => {
            let mut stepper = ode_solvers::Dopri5::new(
                system,
                start,
                end + spacing * OVERSHOOT,
                spacing,
                y_start,
                rel_tol,
                abs_tol,
            );

            let stats = stepper.integrate().map_err(|err| Failure::from(&err))?;
            let y_end = landing(stepper.x_out(), stepper.y_out(), end, spacing)?;

            (stats, y_end)
        }
        Method::Dop853 { rel_tol, abs_tol } => {
            let mut stepper = ode_solvers::Dop853::new(
                system,
                start,
                end + spacing * OVERSHOOT,
                spacing,
                y_start,
                rel_tol,
                abs_tol,
            );

            let stats = stepper.integrate().map_err(|err| Failure::from(&err))?;
            let y_end = landing(stepper.x_out(), stepper.y_out(), end, spacing)?;

            (stats, y_end)
        }
    };

    Ok(Advanced {
        y: y_end,
        stats: Stats {
            evaluations: u64::from(stats.num_eval),
            accepted_steps: u64::from(stats.accepted_steps),
            rejected_steps: u64::from(stats.rejected_steps),
        },
    })
}

/// Picks the integrator output at `end` and checks that it is finite.
fn landing<const N: usize>(
    x_out: &[f64],
    y_out: &[SVector<f64, N>],
    end: f64,
    spacing: f64,
) -> Result<[f64; N], Failure> {
    let index = x_out
        .iter()
        .position(|x| (x - end).abs() <= LANDING_TOL * spacing)
        .ok_or(Failure::MissedOutput)?;

    let y: [f64; N] = (*y_out.get(index).ok_or(Failure::MissedOutput)?).into();

    if y.iter().all(|value| value.is_finite()) {
        Ok(y)
    } else {
        Err(Failure::NonFinite)
    }
}
