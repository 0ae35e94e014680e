//! Reusable observers for odebox.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the odebox solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasProgress`], [`CanStopEarly`])
//! - [`progress`]: [`ProgressLogger`], a percentage-complete sink
//!
//! # Features
//!
//! - `plot`: Enables [`TrajectoryPlot`] for rendering stored trajectories and
//!   direction fields via egui. This feature adds dependencies on `eframe` and
//!   `egui_plot`.
//!
//! [`Observer`]: odebox_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasProgress`]: traits::HasProgress
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`ProgressLogger`]: progress::ProgressLogger

pub mod progress;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotError, ShowConfig, TrajectoryPlot};
