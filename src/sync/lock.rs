/// The view an edit event is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSource {
    Graph,
    Document,
    Title,
}

/// Reentrancy guard over edit sources.
///
/// A single lock replaces per-source boolean flags, so illegal flag
/// combinations cannot be represented. An edit from source S is dropped
/// while the lock is `Locked(S)`; an edit from any other source is accepted
/// and takes the lock over. `Idle` is the only rest state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateLock {
    #[default]
    Idle,
    Locked(EditSource),
}

impl UpdateLock {
    /// Whether an edit attributed to `source` must be dropped.
    pub fn blocks(&self, source: EditSource) -> bool {
        matches!(self, UpdateLock::Locked(locked) if *locked == source)
    }

    pub fn acquire(&mut self, source: EditSource) {
        *self = UpdateLock::Locked(source);
    }

    pub fn release(&mut self) {
        *self = UpdateLock::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, UpdateLock::Idle)
    }
}
