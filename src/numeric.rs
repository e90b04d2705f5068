/*

    Declare numeric types used throughout this crate.

    Boxes and rays are single precision on purpose, they mirror the
    float3 layout used on the device side. If you like to use f64
    instead, change both of these:
    pub type Float = f32;
    pub type Vector3 = Vec3;

    Component-wise helpers below spell out the vector arithmetic used by
    the slab test so min/max follow fminf/fmaxf semantics exactly
    (a NaN operand yields the other operand).

    @date: 19 Oct, 2026
*/

use bevy_math::Vec3;

pub type Float = f32; // WARNING: If you want to change it to f64, don't forget to update Vector3
pub type Vector3 = Vec3;

#[inline]
pub fn approx_eq(a: Float, b: Float, eps: Float) -> bool {
    (a - b).abs() <= eps
}

/// Component-wise minimum, not a magnitude based comparison.
#[inline]
pub fn vmin(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

/// Component-wise maximum.
#[inline]
pub fn vmax(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

#[inline]
pub fn vsub(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

#[inline]
pub fn vmul(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(a.x * b.x, a.y * b.y, a.z * b.z)
}

/// Component-wise division, division by zero gives signed infinities.
#[inline]
pub fn vdiv(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(a.x / b.x, a.y / b.y, a.z / b.z)
}

/// max(max(x, y), z)
#[inline]
pub fn max_component(v: Vector3) -> Float {
    v.x.max(v.y).max(v.z)
}

/// min(min(x, y), z)
#[inline]
pub fn min_component(v: Vector3) -> Float {
    v.x.min(v.y).min(v.z)
}

/// Format like a default C++ ostream (printf "%g"): 6 significant
/// digits, trailing zeros dropped, exponent form outside [1e-4, 1e6).
pub fn format_g6(x: Float) -> String {
    const PRECISION: i32 = 6;
    let v = x as f64;
    if v.is_nan() {
        return String::from("nan");
    }
    if v.is_infinite() {
        return String::from(if v < 0.0 { "-inf" } else { "inf" });
    }
    if v == 0.0 {
        return String::from(if v.is_sign_negative() { "-0" } else { "0" });
    }

    // Exponent after rounding to PRECISION digits, so 999999.5 goes to 1e+06
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..PRECISION).contains(&exp) {
        let fixed = format!("{:.*}", (PRECISION - 1 - exp) as usize, v);
        trim_fraction_zeros(&fixed).to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction_zeros(mantissa), sign, exp.abs())
    }
}

fn trim_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
