use odebox_core::Rhs;

use super::Node;

/// `y[k+1] = y[k] + h·f(x[k], y[k])`
pub(super) fn euler<F: Rhs>(rhs: &F, node: Node) -> f64 {
    let Node { x, y, h, .. } = node;
    y + h * rhs.eval(x, y)
}

/// Classical RK4: four slopes at `x`, `x + h/2` (twice), and `x + h`,
/// weighted 1/6, 1/3, 1/3, 1/6.
pub(super) fn rk4<F: Rhs>(rhs: &F, node: Node) -> f64 {
    let Node { x, y, h, .. } = node;

    let k1 = rhs.eval(x, y);
    let k2 = rhs.eval(x + 0.5 * h, y + 0.5 * h * k1);
    let k3 = rhs.eval(x + 0.5 * h, y + 0.5 * h * k2);
    let k4 = rhs.eval(x + h, y + h * k3);

    y + h * (k1 / 6.0 + k2 / 3.0 + k3 / 3.0 + k4 / 6.0)
}
