//! Trophy sphere geometry
//!
//! Hosts that draw trophies from raw geometry get a stacked-ring UV
//! sphere: the stack angle sweeps [0, π] from the +Y pole, the sector
//! angle sweeps [0, 2π], and each quad between neighboring rings emits
//! two triangles. Output is plain position and index buffers; normals
//! and UVs are the host's business.

use std::f32::consts::PI;

use glam::Vec3;

/// Sector count the demo trophies are built with.
pub const DEFAULT_SECTORS: u32 = 36;
/// Stack count the demo trophies are built with.
pub const DEFAULT_STACKS: u32 = 18;

/// Raw sphere geometry: vertex positions plus a triangle index list.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generate a UV sphere of the given radius centered on the origin.
///
/// Rings are laid out pole to pole, each ring closed by a duplicated
/// seam vertex, giving `(stacks + 1) × (sectors + 1)` vertices and
/// `stacks × sectors × 6` indices.
pub fn uv_sphere(radius: f32, sectors: u32, stacks: u32) -> SphereMesh {
    let mut positions = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
    for stack in 0..=stacks {
        let stack_angle = PI * stack as f32 / stacks as f32;
        let ring = radius * stack_angle.sin();
        let y = radius * stack_angle.cos();
        for sector in 0..=sectors {
            let sector_angle = 2.0 * PI * sector as f32 / sectors as f32;
            positions.push(Vec3::new(
                ring * sector_angle.sin(),
                y,
                ring * sector_angle.cos(),
            ));
        }
    }

    let mut indices = Vec::with_capacity((stacks * sectors * 6) as usize);
    for stack in 0..stacks {
        for sector in 0..sectors {
            let k0 = stack * (sectors + 1) + sector;
            let k1 = k0 + sectors + 1;
            indices.extend_from_slice(&[k0, k1, k1 + 1, k0, k1 + 1, k0 + 1]);
        }
    }

    SphereMesh { positions, indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertex_and_index_counts() {
        let mesh = uv_sphere(0.05, DEFAULT_SECTORS, DEFAULT_STACKS);
        assert_eq!(mesh.vertex_count(), ((DEFAULT_STACKS + 1) * (DEFAULT_SECTORS + 1)) as usize);
        assert_eq!(mesh.indices.len(), (DEFAULT_STACKS * DEFAULT_SECTORS * 6) as usize);
        assert_eq!(mesh.triangle_count(), (DEFAULT_STACKS * DEFAULT_SECTORS * 2) as usize);
    }

    #[test]
    fn test_every_vertex_sits_on_the_sphere() {
        let radius = 0.05;
        let mesh = uv_sphere(radius, 12, 6);
        for position in &mesh.positions {
            assert_relative_eq!(position.length(), radius, max_relative = 1e-4);
        }
    }

    #[test]
    fn test_poles_lie_on_the_y_axis() {
        let radius = 1.5;
        let mesh = uv_sphere(radius, 8, 4);
        // First ring is the +Y pole repeated along the seam.
        for position in &mesh.positions[..9] {
            assert_relative_eq!(position.y, radius, max_relative = 1e-5);
            assert!(position.x.abs() < 1e-5 && position.z.abs() < 1e-5);
        }
        let last_ring = mesh.vertex_count() - 9;
        for position in &mesh.positions[last_ring..] {
            assert_relative_eq!(position.y, -radius, max_relative = 1e-5);
        }
    }

    #[test]
    fn test_indices_stay_in_range() {
        let mesh = uv_sphere(0.05, 36, 18);
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_seam_vertices_coincide() {
        let mesh = uv_sphere(1.0, 6, 3);
        // Each ring's last vertex duplicates its first (sector 0 vs 2π).
        for ring in 0..=3 {
            let start = ring * 7;
            let first = mesh.positions[start];
            let last = mesh.positions[start + 6];
            assert_relative_eq!(first.x, last.x, epsilon = 1e-5);
            assert_relative_eq!(first.z, last.z, epsilon = 1e-5);
        }
    }
}
