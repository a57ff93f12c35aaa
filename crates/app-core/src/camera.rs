//! Perspective camera that keeps one world unit equal to one CSS pixel on the
//! `z = 0` plane.
//!
//! The camera sits on the view axis at `distance = (height / 2) / tan(fov / 2)`,
//! which is exactly where a plane of the viewport's size fills the frustum.

use crate::constants::{CAMERA_FAR_MULTIPLIER, CAMERA_NEAR};
use crate::viewport::Viewport;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_degrees: f32,
    pub half_fov_radians: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, viewport: Viewport) -> Self {
        let mut cam = Self {
            fov_degrees,
            half_fov_radians: (fov_degrees / 2.0).to_radians(),
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR_MULTIPLIER,
            distance: 1.0,
            eye: Vec3::Z,
            target: Vec3::ZERO,
            up: Vec3::Y,
        };
        cam.fit_to_viewport(viewport);
        cam.eye = Vec3::new(0.0, 0.0, cam.distance);
        cam
    }

    /// Distance at which a viewport-sized plane exactly fills the view.
    #[inline]
    pub fn fitting_distance(half_fov_radians: f32, viewport: Viewport) -> f32 {
        (viewport.height / 2.0) / half_fov_radians.tan()
    }

    /// Recompute distance, aspect and far plane for `viewport`.
    ///
    /// Leaves `eye` alone; the orbit controls own the eye position and are
    /// told about the new distance separately.
    pub fn fit_to_viewport(&mut self, viewport: Viewport) {
        self.distance = Self::fitting_distance(self.half_fov_radians, viewport);
        self.aspect = viewport.aspect();
        self.far = self.distance * CAMERA_FAR_MULTIPLIER;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
