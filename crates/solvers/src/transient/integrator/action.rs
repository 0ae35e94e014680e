/// Control actions supported by the integrator.
///
/// There are none: a run always completes or fails on its own, so observers
/// of an integration run are purely observational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}
