// extensions/easing.rs
//
// Pure interpolation helpers for animation. Just math.

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Componentwise linear interpolation between two Vec3 values.
#[inline]
pub fn lerp_vec3(a: glam::Vec3, b: glam::Vec3, t: f32) -> glam::Vec3 {
    glam::Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(100.0, 200.0, 0.0), 100.0);
        assert_eq!(lerp(100.0, 200.0, 1.0), 200.0);
        assert!((lerp(100.0, 200.0, 0.5) - 150.0).abs() < 0.001);
    }

    #[test]
    fn lerp_vec3_interpolates() {
        let result = lerp_vec3(glam::Vec3::ZERO, glam::Vec3::splat(10.0), 0.5);
        assert!((result - glam::Vec3::splat(5.0)).length() < 0.001);
    }
}
