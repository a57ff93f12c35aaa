//! Indexed triangle meshes for the backdrop plane and the sphere.
//!
//! Layout and winding follow the usual grid conventions: rows run top to
//! bottom, `uv` has `v = 1` at the top edge, and both meshes are rendered
//! double-sided so winding only matters for normals.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Plane in the XY plane centred at the origin, facing +Z.
///
/// `width`/`height` are kept as the reference dimensions that mesh scale is
/// computed against.
#[derive(Clone, Debug)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Self {
        Self {
            width,
            height,
            width_segments: width_segments.max(1),
            height_segments: height_segments.max(1),
        }
    }

    #[inline]
    pub fn base_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn build(&self) -> MeshData {
        let gx = self.width_segments;
        let gy = self.height_segments;
        let seg_w = self.width / gx as f32;
        let seg_h = self.height / gy as f32;
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;

        let mut vertices = Vec::with_capacity(((gx + 1) * (gy + 1)) as usize);
        for iy in 0..=gy {
            let y = iy as f32 * seg_h - half_h;
            for ix in 0..=gx {
                let x = ix as f32 * seg_w - half_w;
                vertices.push(Vertex {
                    position: [x, -y, 0.0],
                    normal: [0.0, 0.0, 1.0],
                    uv: [ix as f32 / gx as f32, 1.0 - iy as f32 / gy as f32],
                });
            }
        }

        let mut indices = Vec::with_capacity((gx * gy * 6) as usize);
        let row = gx + 1;
        for iy in 0..gy {
            for ix in 0..gx {
                let a = ix + row * iy;
                let b = ix + row * (iy + 1);
                let c = (ix + 1) + row * (iy + 1);
                let d = (ix + 1) + row * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        MeshData { vertices, indices }
    }
}

#[derive(Clone, Debug)]
pub struct SphereGeometry {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl SphereGeometry {
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self {
            radius,
            width_segments: width_segments.max(3),
            height_segments: height_segments.max(2),
        }
    }

    pub fn build(&self) -> MeshData {
        let ws = self.width_segments;
        let hs = self.height_segments;
        let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
        for iy in 0..=hs {
            let v = iy as f32 / hs as f32;
            // Shift pole u by half a segment so pole triangles sample the middle.
            let u_offset = if iy == 0 {
                0.5 / ws as f32
            } else if iy == hs {
                -0.5 / ws as f32
            } else {
                0.0
            };
            for ix in 0..=ws {
                let u = ix as f32 / ws as f32;
                let phi = u * TAU;
                let theta = v * PI;
                let n = [
                    -phi.cos() * theta.sin(),
                    theta.cos(),
                    phi.sin() * theta.sin(),
                ];
                vertices.push(Vertex {
                    position: [n[0] * self.radius, n[1] * self.radius, n[2] * self.radius],
                    normal: n,
                    uv: [u + u_offset, 1.0 - v],
                });
            }
        }

        let row = ws + 1;
        let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
        for iy in 0..hs {
            for ix in 0..ws {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != hs - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }
        MeshData { vertices, indices }
    }
}
