use chord_core::Snapshot;

/// Step event emitted by the transient solvers.
///
/// Step 0 carries the initial state before any integration; steps `1..=N`
/// are emitted after each integration step.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    /// The step number.
    pub step: usize,

    /// Snapshot of the model input and output at this step.
    pub snapshot: Snapshot<I, O>,
}
