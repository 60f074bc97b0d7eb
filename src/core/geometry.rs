use std::f32::consts::PI;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// Full UV sphere centered on the origin, counter-clockwise when seen from outside.
///
/// Layout follows the usual latitude/longitude grid: `(width_segments + 1) *
/// (height_segments + 1)` vertices with `u` running around the equator and `v`
/// from the north pole (uv.y = 1) to the south pole (uv.y = 0). Pole rows emit a
/// single triangle per quad.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    let mut indices = Vec::with_capacity((ws * (hs - 1) * 6) as usize);

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        // Pole vertices sit half a segment over so their texels line up with the quad
        let u_offset = if iy == 0 {
            0.5 / ws as f32
        } else if iy == hs {
            -0.5 / ws as f32
        } else {
            0.0
        };
        let theta = v * PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * 2.0 * PI;
            let x = -radius * phi.cos() * theta.sin();
            let y = radius * theta.cos();
            let z = radius * phi.sin() * theta.sin();
            let len = (x * x + y * y + z * z).sqrt().max(f32::EPSILON);
            vertices.push(MeshVertex {
                position: [x, y, z],
                normal: [x / len, y / len, z / len],
                uv: [u + u_offset, 1.0 - v],
            });
        }
    }

    let row = ws + 1;
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
