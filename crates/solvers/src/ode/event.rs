use cartpole_core::Snapshot;

/// Event emitted by the ODE solver for each grid point.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each output interval is integrated.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    /// The step number (0 for initial, 1..N for integrated grid points).
    pub step: usize,

    /// The independent variable at this grid point.
    pub time: f64,

    /// Snapshot of the model input and output at this grid point.
    pub snapshot: Snapshot<I, O>,
}
