//! Damped orbit controls around the scene origin.
//!
//! Pointer drags accumulate a spherical delta; every `update` applies a
//! `damping` fraction of it and keeps the rest for the following frames, so
//! the camera glides to a stop after the pointer is released.

use crate::constants::{ORBIT_DAMPING, ORBIT_PHI_EPSILON, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Spherical coordinates with `phi` measured from +Y and `theta` around Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub damping: f32,
    pub rotate_speed: f32,
    pub min_radius: f32,
    spherical: Spherical,
    delta_phi: f32,
    delta_theta: f32,
    dolly_scale: f32,
}

impl OrbitControls {
    /// Starts on the +Z axis, facing the origin.
    pub fn new(radius: f32, min_radius: f32) -> Self {
        Self {
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            min_radius,
            spherical: Spherical {
                radius: radius.max(min_radius),
                phi: FRAC_PI_2,
                theta: 0.0,
            },
            delta_phi: 0.0,
            delta_theta: 0.0,
            dolly_scale: 1.0,
        }
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.spherical.to_vec3()
    }

    /// Put the eye back at `radius`, keeping the current angles.
    pub fn set_radius(&mut self, radius: f32) {
        self.spherical.radius = radius.max(self.min_radius);
    }

    /// Queue a rotation from a pointer drag of `(dx, dy)` CSS pixels.
    ///
    /// A drag across the full viewport height turns the camera once around.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * dx / h * self.rotate_speed;
        self.delta_phi -= TAU * dy / h * self.rotate_speed;
    }

    /// Queue a dolly from a wheel event; positive `delta_y` moves away.
    pub fn dolly(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.dolly_scale /= ORBIT_ZOOM_STEP;
        } else if delta_y < 0.0 {
            self.dolly_scale *= ORBIT_ZOOM_STEP;
        }
    }

    /// Advance the damping by one frame and return the new eye position.
    pub fn update(&mut self) -> Vec3 {
        let d = self.damping.clamp(0.0, 1.0);
        self.spherical.theta += self.delta_theta * d;
        self.spherical.phi += self.delta_phi * d;
        self.spherical.phi = self
            .spherical
            .phi
            .clamp(ORBIT_PHI_EPSILON, PI - ORBIT_PHI_EPSILON);
        self.spherical.radius = (self.spherical.radius * self.dolly_scale).max(self.min_radius);

        self.delta_theta *= 1.0 - d;
        self.delta_phi *= 1.0 - d;
        self.dolly_scale = 1.0;
        self.eye()
    }
}
