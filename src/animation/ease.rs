/// Easing curve applied to normalized progress between two keyframes.
///
/// Resolution never fails: anything unrecognized is [`Easing::Linear`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// Identity.
    #[default]
    Linear,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

const EASE: [f64; 4] = [0.25, 0.1, 0.25, 1.0];
const EASE_IN: [f64; 4] = [0.42, 0.0, 1.0, 1.0];
const EASE_OUT: [f64; 4] = [0.0, 0.0, 0.58, 1.0];
const EASE_IN_OUT: [f64; 4] = [0.42, 0.0, 0.58, 1.0];

impl Easing {
    /// Resolve an easing identifier: `linear`, `ease`, `ease-in`, `ease-out`,
    /// `ease-in-out` or `cubic-bezier(x1,y1,x2,y2)`.
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        let points = match spec {
            "" | "linear" => return Self::Linear,
            "ease" => EASE,
            "ease-in" => EASE_IN,
            "ease-out" => EASE_OUT,
            "ease-in-out" => EASE_IN_OUT,
            other => match parse_cubic_bezier(other) {
                Some(points) => points,
                None => return Self::Linear,
            },
        };
        Self::from_points(points)
    }

    fn from_points([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Map progress `t` through the curve.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                BezierCurve::new(x1, y1, x2, y2).solve(t.clamp(0.0, 1.0))
            }
        }
    }
}

/// Resolve an optional easing identifier; `None` is linear.
pub fn resolve_easing(spec: Option<&str>) -> Easing {
    spec.map(Easing::parse).unwrap_or_default()
}

/// Parse `cubic-bezier(x1,y1,x2,y2)`, case-insensitive and whitespace-tolerant.
///
/// Returns `None` unless exactly four finite numbers are present.
pub fn parse_cubic_bezier(spec: &str) -> Option<[f64; 4]> {
    let lower = spec.trim().to_ascii_lowercase();
    let args = lower
        .strip_prefix("cubic-bezier")?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let mut out = [0.0; 4];
    let mut parts = args.split(',');
    for slot in &mut out {
        let v: f64 = parts.next()?.trim().parse().ok()?;
        if !v.is_finite() {
            return None;
        }
        *slot = v;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

// Polynomial form of a unit cubic Bézier with endpoints (0,0) and (1,1).
struct BezierCurve {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl BezierCurve {
    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self {
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    fn sample_x(&self, u: f64) -> f64 {
        ((self.ax * u + self.bx) * u + self.cx) * u
    }

    fn sample_y(&self, u: f64) -> f64 {
        ((self.ay * u + self.by) * u + self.cy) * u
    }

    fn sample_dx(&self, u: f64) -> f64 {
        (3.0 * self.ax * u + 2.0 * self.bx) * u + self.cx
    }

    fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.param_for_x(x))
    }

    // Newton-Raphson from u = x; bisection when the slope is too flat to trust.
    fn param_for_x(&self, x: f64) -> f64 {
        let mut u = x;
        for _ in 0..8 {
            let err = self.sample_x(u) - x;
            if err.abs() < 1e-7 {
                return u;
            }
            let d = self.sample_dx(u);
            if d.abs() < 1e-6 {
                return self.bisect(x);
            }
            u = (u - err / d).clamp(0.0, 1.0);
        }
        u
    }

    fn bisect(&self, x: f64) -> f64 {
        let mut lo = 0.0;
        let mut hi = 1.0;
        let mut u = x;
        for _ in 0..12 {
            if self.sample_x(u) < x {
                lo = u;
            } else {
                hi = u;
            }
            u = 0.5 * (lo + hi);
        }
        u
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
