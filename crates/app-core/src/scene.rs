//! Camera, meshes and uniforms kept in sync with the viewport.
//!
//! The backdrop plane is built once at the start-up viewport size and then
//! only rescaled, so after every resize it still covers the whole viewport at
//! one world unit per CSS pixel. The sphere sits in front of it on the view
//! axis and shares the same shading program.

use crate::camera::PerspectiveCamera;
use crate::color::Rgb;
use crate::config::AppConfig;
use crate::constants::{
    CAMERA_NEAR, LIGHT_COLOR, LIGHT_INTENSITY, LIGHT_POSITION, PLANE_SCALE_EPSILON,
    PLANE_SEGMENTS, SPHERE_OFFSET_Z, SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SHADE,
};
use crate::geometry::{PlaneGeometry, SphereGeometry};
use crate::orbit::OrbitControls;
use crate::uniforms::{DirectionalLight, GpuModelUniforms, GpuSceneUniforms, UniformSet};
use crate::viewport::Viewport;
use glam::{Mat4, Vec2, Vec3};

/// Consumer of finished frames (the GPU renderer on the web).
pub trait RenderBackend {
    fn render(&mut self, frame: &SceneFrame) -> anyhow::Result<()>;
}

/// Everything the renderer needs for one draw.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub view_proj: Mat4,
    pub plane_model: Mat4,
    pub sphere_model: Mat4,
    pub uniforms: UniformSet,
    pub light: DirectionalLight,
}

impl SceneFrame {
    pub fn gpu_uniforms(&self) -> GpuSceneUniforms {
        GpuSceneUniforms::pack(self.view_proj, &self.uniforms, &self.light)
    }

    pub fn plane_uniforms(&self) -> GpuModelUniforms {
        GpuModelUniforms::new(self.plane_model, 0.0)
    }

    pub fn sphere_uniforms(&self) -> GpuModelUniforms {
        GpuModelUniforms::new(self.sphere_model, SPHERE_SHADE)
    }
}

/// Scale that stretches a plane of `base` size over `viewport`, rounded to
/// two decimals plus a small overshoot so rounding never leaves a seam.
pub fn plane_scale_for(viewport: Viewport, base: Vec2) -> Vec2 {
    let axis = |v: f32, b: f32| (v / b * 100.0).round() / 100.0 + PLANE_SCALE_EPSILON;
    Vec2::new(axis(viewport.width, base.x), axis(viewport.height, base.y))
}

pub struct ViewportSceneController {
    viewport: Viewport,
    camera: PerspectiveCamera,
    orbit: OrbitControls,
    pub uniforms: UniformSet,
    pub light: DirectionalLight,
    plane: PlaneGeometry,
    sphere: SphereGeometry,
    plane_scale: Vec2,
    sphere_offset: Vec3,
    time_scale: f32,
}

impl ViewportSceneController {
    pub fn new(viewport: Viewport, config: &AppConfig) -> Self {
        let camera = PerspectiveCamera::new(config.fov_degrees, viewport);
        let orbit = OrbitControls::new(camera.distance, CAMERA_NEAR);
        let plane = PlaneGeometry::new(
            viewport.width,
            viewport.height,
            PLANE_SEGMENTS,
            PLANE_SEGMENTS,
        );
        let sphere = SphereGeometry::new(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS);
        let mut scene = Self {
            viewport,
            camera,
            orbit,
            uniforms: UniformSet::new(viewport),
            light: DirectionalLight {
                color: Rgb::from_hex(LIGHT_COLOR),
                intensity: LIGHT_INTENSITY,
                position: Vec3::from(LIGHT_POSITION),
            },
            plane,
            sphere,
            plane_scale: Vec2::ONE,
            sphere_offset: Vec3::new(0.0, 0.0, SPHERE_OFFSET_Z),
            time_scale: config.time_scale,
        };
        scene.camera.eye = scene.orbit.eye();
        log::info!(
            "[scene] {}x{} fov={} distance={:.2}",
            viewport.width,
            viewport.height,
            scene.camera.fov_degrees,
            scene.camera.distance
        );
        scene
    }

    /// Re-fit camera, resolution uniform and plane scale to `viewport`.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.fit_to_viewport(viewport);
        self.orbit.set_radius(self.camera.distance);
        self.camera.eye = self.orbit.eye();
        self.uniforms.resolution = viewport.size();
        self.plane_scale = plane_scale_for(viewport, self.plane.base_size());
        log::debug!(
            "[scene] resize {}x{} distance={:.2} scale=({:.2},{:.2})",
            viewport.width,
            viewport.height,
            self.camera.distance,
            self.plane_scale.x,
            self.plane_scale.y
        );
    }

    /// Advance time and orbit damping, then hand one frame to `backend`.
    pub fn tick(
        &mut self,
        elapsed_secs: f32,
        backend: &mut dyn RenderBackend,
    ) -> anyhow::Result<()> {
        self.uniforms.time = elapsed_secs * self.time_scale;
        self.camera.eye = self.orbit.update();
        backend.render(&self.frame())
    }

    pub fn frame(&self) -> SceneFrame {
        SceneFrame {
            view_proj: self.camera.view_projection(),
            plane_model: self.plane_model(),
            sphere_model: self.sphere_model(),
            uniforms: self.uniforms.clone(),
            light: self.light,
        }
    }

    #[inline]
    pub fn plane_model(&self) -> Mat4 {
        Mat4::from_scale(Vec3::new(self.plane_scale.x, self.plane_scale.y, 1.0))
    }

    #[inline]
    pub fn sphere_model(&self) -> Mat4 {
        Mat4::from_translation(self.sphere_offset)
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    #[inline]
    pub fn orbit_mut(&mut self) -> &mut OrbitControls {
        &mut self.orbit
    }

    #[inline]
    pub fn plane_scale(&self) -> Vec2 {
        self.plane_scale
    }

    #[inline]
    pub fn plane_geometry(&self) -> &PlaneGeometry {
        &self.plane
    }

    #[inline]
    pub fn sphere_geometry(&self) -> &SphereGeometry {
        &self.sphere
    }
}
