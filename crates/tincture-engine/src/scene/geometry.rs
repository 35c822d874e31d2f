use bytemuck::{Pod, Zeroable};

/// Plane vertex: object-space position + texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Subdivided plane in the XY plane, centered at the origin, facing +Z.
///
/// Layout matches the common convention: rows go top to bottom, `uv` has
/// (0, 1) at the top-left corner and (1, 0) at the bottom-right.
#[derive(Debug, Clone)]
pub struct PlaneGeometry {
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u32>,
}

impl PlaneGeometry {
    /// Builds the grid. Segment counts below 1 are treated as 1.
    pub fn new(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Self {
        let grid_x = width_segments.max(1);
        let grid_y = height_segments.max(1);
        let cols = grid_x + 1;
        let rows = grid_y + 1;

        let half_w = width * 0.5;
        let half_h = height * 0.5;
        let seg_w = width / grid_x as f32;
        let seg_h = height / grid_y as f32;

        let mut vertices = Vec::with_capacity((cols * rows) as usize);
        for iy in 0..rows {
            let y = iy as f32 * seg_h - half_h;
            for ix in 0..cols {
                let x = ix as f32 * seg_w - half_w;
                vertices.push(PlaneVertex {
                    position: [x, -y, 0.0],
                    uv: [ix as f32 / grid_x as f32, 1.0 - iy as f32 / grid_y as f32],
                });
            }
        }

        let mut indices = Vec::with_capacity((grid_x * grid_y * 6) as usize);
        for iy in 0..grid_y {
            for ix in 0..grid_x {
                let a = ix + cols * iy;
                let b = ix + cols * (iy + 1);
                let c = (ix + 1) + cols * (iy + 1);
                let d = (ix + 1) + cols * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self { vertices, indices }
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_for_300_by_300() {
        let g = PlaneGeometry::new(1.5, 1.5, 300, 300);
        assert_eq!(g.vertices.len(), 301 * 301);
        assert_eq!(g.index_count(), 300 * 300 * 6);
    }

    #[test]
    fn corners_and_uvs() {
        let g = PlaneGeometry::new(2.0, 1.0, 2, 1);
        let first = g.vertices[0];
        let last = *g.vertices.last().unwrap();

        assert_eq!(first.position, [-1.0, 0.5, 0.0]);
        assert_eq!(first.uv, [0.0, 1.0]);
        assert_eq!(last.position, [1.0, -0.5, 0.0]);
        assert_eq!(last.uv, [1.0, 0.0]);
    }

    #[test]
    fn triangles_wind_counter_clockwise_towards_viewer() {
        let g = PlaneGeometry::new(1.0, 1.0, 1, 1);
        for tri in g.indices.chunks(3) {
            let p = |i: u32| g.vertices[i as usize].position;
            let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
            let cross_z = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross_z > 0.0);
        }
    }

    #[test]
    fn zero_segments_clamp_to_one() {
        let g = PlaneGeometry::new(1.0, 1.0, 0, 0);
        assert_eq!(g.vertices.len(), 4);
        assert_eq!(g.indices.len(), 6);
    }

    #[test]
    fn indices_in_bounds() {
        let g = PlaneGeometry::new(1.0, 1.0, 7, 5);
        let n = g.vertices.len() as u32;
        assert!(g.indices.iter().all(|&i| i < n));
    }
}
