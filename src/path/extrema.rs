use std::f32::consts::PI;

use crate::geometry::{pt, Point};

const EPSILON: f32 = 1e-6;

/// Compute the extremal points of a quadratic Bezier
/// by solving for dx/dt = 0, dy/dt = 0
pub fn quadratic_extrema(start: Point, cp: Point, end: Point) -> Vec<Point> {
    // Evaluate quadratic Bezier for a single coordinate
    fn bezier(t: f32, p0: f32, p1: f32, p2: f32) -> f32 {
        let mt = 1.0 - t;
        mt * mt * p0 + 2.0 * mt * t * p1 + t * t * p2
    }

    // Stationary point t for one dimension, if it lies in (0,1)
    fn stationary_t(p0: f32, p1: f32, p2: f32) -> Option<f32> {
        // B'(t) == 0  when  t = (p0-p1) / (p0-2p1+p2)
        let denom = p0 - 2.0 * p1 + p2;
        if denom.abs() < EPSILON {
            None
        } else {
            let t = (p0 - p1) / denom;
            (t > 0.0 && t < 1.0).then_some(t)
        }
    }

    [
        stationary_t(start.re, cp.re, end.re),
        stationary_t(start.im, cp.im, end.im),
    ]
    .into_iter()
    .flatten()
    .map(|t| {
        pt(
            bezier(t, start.re, cp.re, end.re),
            bezier(t, start.im, cp.im, end.im),
        )
    })
    .collect()
}

pub fn cubic_extrema(start: Point, cp1: Point, cp2: Point, end: Point) -> Vec<Point> {
    fn cubic(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
        let mt = 1.0 - t;
        mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
    }

    fn stationary_ts(p0: f32, p1: f32, p2: f32, p3: f32) -> Vec<f32> {
        // B'(t) as at^2 + bt + c = 0
        let a = 3.0 * (p3 - 3.0 * p2 + 3.0 * p1 - p0);
        let b = 6.0 * (p2 - 2.0 * p1 + p0);
        let c = 3.0 * (p1 - p0);

        let mut ts = vec![];
        if a.abs() < EPSILON {
            if b.abs() >= EPSILON {
                ts.push(-c / b);
            }
        } else {
            let disc = b * b - 4.0 * a * c;
            if disc >= 0.0 {
                let sqrt_disc = disc.sqrt();
                let inv_2a = 1.0 / (2.0 * a);
                ts.push((-b + sqrt_disc) * inv_2a);
                ts.push((-b - sqrt_disc) * inv_2a);
            }
        }
        ts.retain(|t| *t > 0.0 && *t < 1.0);
        ts
    }

    let mut all_t = stationary_ts(start.re, cp1.re, cp2.re, end.re);
    all_t.extend(stationary_ts(start.im, cp1.im, cp2.im, end.im));

    all_t
        .into_iter()
        .map(|t| {
            pt(
                cubic(t, start.re, cp1.re, cp2.re, end.re),
                cubic(t, start.im, cp1.im, cp2.im, end.im),
            )
        })
        .collect()
}

/// Extremal points of an elliptical arc given in SVG endpoint form;
/// `radius` is `rx + ry·i` and `rotation` is in degrees.
pub fn arc_extrema(
    start: Point,
    radius: Point,
    rotation: f32,
    large_arc: bool,
    sweep: bool,
    end: Point,
) -> Vec<Point> {
    let (rx, ry) = (radius.re.abs(), radius.im.abs());
    if rx < EPSILON || ry < EPSILON || (start - end).norm() < EPSILON {
        return vec![];
    }

    let phi = rotation.to_radians();

    // Scale radii if required to reach the endpoint
    // https://www.w3.org/TR/SVG2/implnote.html#ArcCorrectionOutOfRangeRadii
    let half = (start - end) / 2.0;
    let (cos_phi, sin_phi) = (phi.cos(), phi.sin());
    let x1_prime = cos_phi * half.re + sin_phi * half.im;
    let y1_prime = -sin_phi * half.re + cos_phi * half.im;

    let lambda = (x1_prime * x1_prime) / (rx * rx) + (y1_prime * y1_prime) / (ry * ry);
    let (rx, ry) = if lambda > 1.0 {
        (rx * lambda.sqrt(), ry * lambda.sqrt())
    } else {
        (rx, ry)
    };

    let (center, start_angle, sweep_angle) =
        endpoint_to_center(start, end, rx, ry, phi, large_arc, sweep);

    let mut angles = Vec::new();
    let axis_aligned = phi.abs() < EPSILON
        || (phi - PI).abs() < EPSILON
        || (phi - PI / 2.0).abs() < EPSILON
        || (phi - 3.0 * PI / 2.0).abs() < EPSILON;
    if axis_aligned {
        angles.extend([0.0, PI / 2.0, PI, 3.0 * PI / 2.0]);
    } else {
        // dx/dt = 0: tan(t) = -ry*sin(phi) / (rx*cos(phi))
        let tan_t = -ry * sin_phi / (rx * cos_phi);
        angles.extend([tan_t.atan(), tan_t.atan() + PI]);

        // dy/dt = 0: tan(t) = ry*cos(phi) / (rx*sin(phi))
        let tan_t = ry * cos_phi / (rx * sin_phi);
        angles.extend([tan_t.atan(), tan_t.atan() + PI]);
    }

    fn fround(v: f32) -> f32 {
        const SCALE: f32 = 65536.0;
        (v * SCALE).round() / SCALE
    }

    angles
        .into_iter()
        .filter(|angle| angle_in_sweep(*angle, start_angle, sweep_angle))
        .map(|angle| ellipse_point(center, rx, ry, phi, angle))
        .map(|p| pt(fround(p.re), fround(p.im)))
        .collect()
}

// Implements https://www.w3.org/TR/SVG2/implnote.html#ArcConversionEndpointToCenter
fn endpoint_to_center(
    start: Point,
    end: Point,
    rx: f32,
    ry: f32,
    phi: f32,
    large_arc: bool,
    sweep: bool,
) -> (Point, f32, f32) {
    let (cos_phi, sin_phi) = (phi.cos(), phi.sin());
    let half = (start - end) / 2.0;
    let mid = (start + end) / 2.0;

    // Step 1: Compute (x1', y1')
    let x1_prime = cos_phi * half.re + sin_phi * half.im;
    let y1_prime = -sin_phi * half.re + cos_phi * half.im;

    // Step 2: Compute (cx', cy')
    let sign = if large_arc != sweep { 1.0 } else { -1.0 };
    let coeff_sq = ((rx * ry).powi(2) - (rx * y1_prime).powi(2) - (ry * x1_prime).powi(2))
        / ((rx * y1_prime).powi(2) + (ry * x1_prime).powi(2));
    let coeff = sign * coeff_sq.max(0.0).sqrt();
    let cx_prime = coeff * (rx * y1_prime) / ry;
    let cy_prime = coeff * -(ry * x1_prime) / rx;

    // Step 3: Compute (cx, cy) from (cx', cy')
    let center = pt(
        cos_phi * cx_prime - sin_phi * cy_prime + mid.re,
        sin_phi * cx_prime + cos_phi * cy_prime + mid.im,
    );

    // Step 4: theta1 and delta_theta; atan2 of the two vectors
    let u = pt((x1_prime - cx_prime) / rx, (y1_prime - cy_prime) / ry);
    let v = pt((-x1_prime - cx_prime) / rx, (-y1_prime - cy_prime) / ry);
    let theta1 = u.arg();
    let mut delta_theta = (v / u).arg();

    if sweep && delta_theta < 0.0 {
        delta_theta += 2.0 * PI;
    } else if !sweep && delta_theta > 0.0 {
        delta_theta -= 2.0 * PI;
    }

    (center, theta1, delta_theta)
}

fn ellipse_point(center: Point, rx: f32, ry: f32, phi: f32, t: f32) -> Point {
    let (cos_t, sin_t) = (t.cos(), t.sin());
    let (cos_phi, sin_phi) = (phi.cos(), phi.sin());

    center
        + pt(
            rx * cos_t * cos_phi - ry * sin_t * sin_phi,
            rx * cos_t * sin_phi + ry * sin_t * cos_phi,
        )
}

fn angle_in_sweep(angle: f32, start_angle: f32, sweep_angle: f32) -> bool {
    if sweep_angle.abs() < EPSILON {
        return false;
    }

    // relative to start_angle in [-PI, PI]
    let delta = ((angle - start_angle + PI) % (2.0 * PI)) - PI;

    if sweep_angle > 0.0 {
        let normalized_delta = if delta < 0.0 { delta + 2.0 * PI } else { delta };
        normalized_delta <= sweep_angle
    } else {
        let normalized_delta = if delta > 0.0 { delta - 2.0 * PI } else { delta };
        normalized_delta >= sweep_angle
    }
}
