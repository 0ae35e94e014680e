//! Interactive comparison of integration schemes.
//!
//! Integrates `y' = y`, `y(0) = 1` on `[0, 2]` with every scheme at a coarse
//! resolution, then opens a window showing the trajectories over the
//! direction field. Deviations from `e^x` grow visibly for the first-order
//! schemes.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot
//! cargo run --example plot --features plot -- 21
//! cargo run --example plot --features plot -- 21 implE RK4
//! ```
//!
//! The first argument is the number of grid points (default 11). Any further
//! arguments select schemes by short name; all schemes run when none are given.

use std::error::Error;

use odebox_core::Problem;
use odebox_observers::{ShowConfig, TrajectoryPlot};
use odebox_solvers::{
    field,
    transient::{Integrator, Scheme},
};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let n = args.next().map(|arg| arg.parse::<usize>()).transpose()?.unwrap_or(11);
    let schemes = args.map(|name| name.parse::<Scheme>()).collect::<Result<Vec<_>, _>>()?;
    let schemes = if schemes.is_empty() {
        Scheme::ALL.to_vec()
    } else {
        schemes
    };

    let problem = Problem::new(0.0, 2.0, 1.0, |_x: f64, y: f64| y)?
        .with_derivative(|_x: f64, _y: f64| 1.0);
    let mut integrator = Integrator::new(problem);

    for scheme in schemes {
        let (x, y) = integrator.run(n, scheme)?.last();
        println!(
            "{scheme:>9}: y({x}) = {y:.6}, error {:.2e}",
            (y - x.exp()).abs()
        );
    }

    TrajectoryPlot::new(integrator.trajectories())?
        .directions(
            integrator.problem().rhs(),
            integrator.problem().interval(),
            &field::Config::default(),
        )?
        .show(
            ShowConfig::new()
                .title(format!("y' = y on [0, 2] with n = {n}"))
                .legend(),
        )?;

    Ok(())
}
