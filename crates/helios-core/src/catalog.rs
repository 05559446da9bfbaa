//! Static descriptive data for the sun and the eight planets.
//!
//! Sizes, distances and speeds are stylized animation values chosen for
//! readability, not astronomy. Insertion order is the rendering and UI order.

/// Visual and orbital description of one planet. Immutable after load.
#[derive(Debug, Clone, Copy)]
pub struct PlanetDescriptor {
    /// Unique display name, also used for DOM control lookup (lower-cased).
    pub name: &'static str,
    /// Rendered sphere radius.
    pub display_size: f32,
    /// Distance of the body from the system origin.
    pub orbit_radius: f32,
    /// Texture image reference, resolved by the host page.
    pub texture: &'static str,
    /// Default angular-speed multiplier.
    pub base_speed: f32,
    /// Fallback albedo while the texture is unresolved.
    pub color: [f32; 3],
    /// Optional ring description (Saturn, Uranus).
    pub ring: Option<RingDescriptor>,
}

/// Ring geometry and texture for a ringed planet.
#[derive(Debug, Clone, Copy)]
pub struct RingDescriptor {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: &'static str,
}

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 8.0;
pub const SUN_TEXTURE: &str = "image/sun.jpg";
pub const SUN_COLOR: [f32; 3] = [1.0, 0.9, 0.5];

// ── Planets ──────────────────────────────────────────────────────────

const PLANETS: [PlanetDescriptor; 8] = [
    PlanetDescriptor {
        name: "Mercury",
        display_size: 1.5,
        orbit_radius: 12.0,
        texture: "image/mercury.jpg",
        base_speed: 1.0,
        color: [0.60, 0.55, 0.50],
        ring: None,
    },
    PlanetDescriptor {
        name: "Venus",
        display_size: 2.5,
        orbit_radius: 17.0,
        texture: "image/venus.jpg",
        base_speed: 0.8,
        color: [0.90, 0.75, 0.40],
        ring: None,
    },
    PlanetDescriptor {
        name: "Earth",
        display_size: 2.7,
        orbit_radius: 23.0,
        texture: "image/earth.jpg",
        base_speed: 0.7,
        color: [0.20, 0.40, 0.80],
        ring: None,
    },
    PlanetDescriptor {
        name: "Mars",
        display_size: 2.1,
        orbit_radius: 29.0,
        texture: "image/mars.jpg",
        base_speed: 0.6,
        color: [0.80, 0.30, 0.15],
        ring: None,
    },
    PlanetDescriptor {
        name: "Jupiter",
        display_size: 6.0,
        orbit_radius: 38.0,
        texture: "image/jupiter.jpg",
        base_speed: 0.4,
        color: [0.80, 0.70, 0.50],
        ring: None,
    },
    PlanetDescriptor {
        name: "Saturn",
        display_size: 5.2,
        orbit_radius: 48.0,
        texture: "image/saturn.jpg",
        base_speed: 0.3,
        color: [0.85, 0.75, 0.50],
        ring: Some(RingDescriptor {
            inner_radius: 6.2,
            outer_radius: 8.5,
            texture: "image/saturn_ring.png",
        }),
    },
    PlanetDescriptor {
        name: "Uranus",
        display_size: 4.2,
        orbit_radius: 58.0,
        texture: "image/uranus.jpg",
        base_speed: 0.2,
        color: [0.50, 0.75, 0.85],
        ring: Some(RingDescriptor {
            inner_radius: 4.8,
            outer_radius: 6.5,
            texture: "image/uranus_ring.png",
        }),
    },
    PlanetDescriptor {
        name: "Neptune",
        display_size: 4.0,
        orbit_radius: 66.0,
        texture: "image/neptune.jpg",
        base_speed: 0.15,
        color: [0.25, 0.35, 0.80],
        ring: None,
    },
];

/// The ordered planet catalog.
pub fn planets() -> &'static [PlanetDescriptor] {
    &PLANETS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_planets_with_unique_names() {
        let planets = planets();
        assert_eq!(planets.len(), 8);
        for (i, a) in planets.iter().enumerate() {
            for b in &planets[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn exactly_saturn_and_uranus_ringed() {
        let ringed: Vec<&str> = planets()
            .iter()
            .filter(|p| p.ring.is_some())
            .map(|p| p.name)
            .collect();
        assert_eq!(ringed, ["Saturn", "Uranus"]);
    }

    #[test]
    fn sizes_and_radii_positive() {
        for p in planets() {
            assert!(p.display_size > 0.0, "{} size", p.name);
            assert!(p.orbit_radius > 0.0, "{} radius", p.name);
            assert!(p.base_speed >= 0.0, "{} speed", p.name);
        }
    }

    #[test]
    fn rings_wider_than_inner_radius() {
        for p in planets() {
            if let Some(ring) = p.ring {
                assert!(ring.outer_radius > ring.inner_radius, "{} ring", p.name);
            }
        }
    }
}
