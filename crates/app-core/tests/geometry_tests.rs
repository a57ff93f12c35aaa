// Host-side tests for the plane and sphere meshes.

use app_core::*;

#[test]
fn plane_has_grid_counts_and_spans_its_size() {
    let plane = PlaneGeometry::new(1920.0, 1080.0, PLANE_SEGMENTS, PLANE_SEGMENTS);
    let mesh = plane.build();
    assert_eq!(mesh.vertices.len(), 41 * 41);
    assert_eq!(mesh.indices.len(), 40 * 40 * 6);
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (f32::MAX, f32::MIN, f32::MAX, f32::MIN);
    for v in &mesh.vertices {
        min_x = min_x.min(v.position[0]);
        max_x = max_x.max(v.position[0]);
        min_y = min_y.min(v.position[1]);
        max_y = max_y.max(v.position[1]);
        assert_eq!(v.position[2], 0.0);
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
    }
    assert!((min_x + 960.0).abs() < 1e-3 && (max_x - 960.0).abs() < 1e-3);
    assert!((min_y + 540.0).abs() < 1e-3 && (max_y - 540.0).abs() < 1e-3);
    // Top-left vertex carries uv (0, 1).
    assert_eq!(mesh.vertices[0].uv, [0.0, 1.0]);
    assert!(mesh.vertices[0].position[1] > 0.0);
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let sphere = SphereGeometry::new(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS);
    let mesh = sphere.build();
    assert_eq!(mesh.vertices.len(), 41 * 41);
    // Pole rows contribute one triangle per segment, the rest two.
    assert_eq!(mesh.indices.len(), (40 * (2 * 40 - 2) * 3) as usize);
    for v in &mesh.vertices {
        let p = glam::Vec3::from(v.position);
        assert!((p.length() - SPHERE_RADIUS).abs() < 1e-2);
        let n = glam::Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn indices_stay_in_bounds() {
    for mesh in [
        PlaneGeometry::new(10.0, 10.0, 3, 2).build(),
        SphereGeometry::new(1.0, 8, 6).build(),
    ] {
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        assert_eq!(mesh.indices.len() % 3, 0);
        assert_eq!(mesh.index_count() as usize, mesh.indices.len());
    }
}

#[test]
fn zero_segments_are_clamped() {
    let mesh = PlaneGeometry::new(4.0, 4.0, 0, 0).build();
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.indices.len(), 6);
}
