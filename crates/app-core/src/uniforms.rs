//! Named shader inputs and their GPU packing.

use crate::color::Rgb;
use crate::constants::{
    DEFAULT_COLORS, DEFAULT_NOISE_LOUDNESS, DEFAULT_TIME_SPEED, TEX_RESOLUTION,
};
use crate::viewport::Viewport;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Values bound to the shading program for every draw.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformSet {
    pub time: f32,
    pub time_speed: f32,
    pub resolution: Vec2,
    pub tex_resolution: Vec2,
    pub noise_loudness: Vec2,
    pub colors: [Rgb; 4],
}

impl UniformSet {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            time: 0.0,
            time_speed: DEFAULT_TIME_SPEED,
            resolution: viewport.size(),
            tex_resolution: Vec2::from(TEX_RESOLUTION),
            noise_loudness: Vec2::from(DEFAULT_NOISE_LOUDNESS),
            colors: DEFAULT_COLORS.map(Rgb::from_hex),
        }
    }
}

/// Directional light attached to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: glam::Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing from the scene towards the light.
    #[inline]
    pub fn direction(&self) -> glam::Vec3 {
        self.position.normalize_or_zero()
    }
}

/// Layout of `SceneUniforms` in `gradient.wgsl` (group 0, binding 0).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GpuSceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub tex_resolution: [f32; 2],
    pub noise_loudness: [f32; 2],
    pub time: f32,
    pub time_speed: f32,
    pub colors: [[f32; 4]; 4],
    pub light_dir_intensity: [f32; 4],
    pub light_color: [f32; 4],
}

impl GpuSceneUniforms {
    pub fn pack(view_proj: Mat4, uniforms: &UniformSet, light: &DirectionalLight) -> Self {
        let dir = light.direction();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            resolution: uniforms.resolution.to_array(),
            tex_resolution: uniforms.tex_resolution.to_array(),
            noise_loudness: uniforms.noise_loudness.to_array(),
            time: uniforms.time,
            time_speed: uniforms.time_speed,
            colors: uniforms.colors.map(Rgb::to_array4),
            light_dir_intensity: [dir.x, dir.y, dir.z, light.intensity],
            light_color: light.color.to_array4(),
        }
    }
}

/// Layout of `ModelUniforms` in `gradient.wgsl` (group 1, binding 0).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GpuModelUniforms {
    pub model: [[f32; 4]; 4],
    /// x: how strongly the directional light shades this mesh.
    pub params: [f32; 4],
}

impl GpuModelUniforms {
    pub fn new(model: Mat4, shade: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            params: [shade, 0.0, 0.0, 0.0],
        }
    }
}
