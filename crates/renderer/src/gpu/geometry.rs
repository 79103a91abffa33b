use bytemuck::{Pod, Zeroable};

/// One corner of the fullscreen quad in clip space.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub(crate) struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    /// Vertex buffer layout: stride 8, one float32x2 attribute at offset 0.
    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Unit quad covering the whole clip-space viewport, counter-clockwise from
/// the bottom-left corner.
pub(crate) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex {
        position: [-1.0, -1.0],
    },
    QuadVertex {
        position: [1.0, -1.0],
    },
    QuadVertex {
        position: [1.0, 1.0],
    },
    QuadVertex {
        position: [-1.0, 1.0],
    },
];

/// Two triangles: (0, 1, 2) and (2, 3, 0).
pub(crate) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_vertices_cover_clip_space_in_order() {
        let expected = [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];
        for (vertex, position) in QUAD_VERTICES.iter().zip(expected) {
            assert_eq!(vertex.position, position);
        }
    }

    #[test]
    fn quad_payloads_have_exact_byte_lengths() {
        assert_eq!(bytemuck::cast_slice::<_, u8>(&QUAD_VERTICES).len(), 32);
        assert_eq!(bytemuck::cast_slice::<_, u8>(&QUAD_INDICES).len(), 12);
    }

    #[test]
    fn quad_vertex_bytes_are_stable() {
        let raw: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0];
        assert_eq!(
            bytemuck::cast_slice::<_, u8>(&QUAD_VERTICES),
            bytemuck::cast_slice::<_, u8>(&raw)
        );
    }

    #[test]
    fn quad_indices_form_two_triangles() {
        assert_eq!(QUAD_INDICES, [0, 1, 2, 2, 3, 0]);
    }

    #[test]
    fn vertex_layout_matches_attribute_contract() {
        let layout = QuadVertex::layout();
        assert_eq!(layout.array_stride, 8);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x2);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].shader_location, 0);
    }
}
