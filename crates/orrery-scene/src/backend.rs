use std::convert::Infallible;

use crate::plan::AnimationPlan;

/// Turns a finished plan into whatever the host renders or stores.
///
/// The core never reaches into a backend while sampling; it calls
/// [`SceneBackend::materialize`] once with the whole plan.
pub trait SceneBackend {
    type Handle;
    type Error: std::error::Error;

    /// Drops everything a previous build produced. Must be idempotent.
    fn clear(&mut self) -> Result<(), Self::Error>;

    fn commit(&mut self, plan: &AnimationPlan) -> Result<Self::Handle, Self::Error>;

    fn materialize(&mut self, plan: &AnimationPlan) -> Result<Self::Handle, Self::Error> {
        self.clear()?;
        self.commit(plan)
    }
}

/// Keeps the last committed plan in memory.
#[derive(Default)]
pub struct RecordingBackend {
    plan: Option<AnimationPlan>,
    clears: usize,
    commits: usize,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn plan(&self) -> Option<&AnimationPlan> {
        self.plan.as_ref()
    }

    #[inline]
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl SceneBackend for RecordingBackend {
    /// Sequence number of the commit.
    type Handle = usize;
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.plan = None;
        self.clears += 1;
        Ok(())
    }

    fn commit(&mut self, plan: &AnimationPlan) -> Result<usize, Infallible> {
        self.plan = Some(plan.clone());
        self.commits += 1;
        Ok(self.commits)
    }
}
