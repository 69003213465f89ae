//! CPU-side mesh produced by the OBJ loader.

use corelib::{Aabb, Vec2, Vec3};

/// One triangle corner. Indices are 0-based into the owning mesh's lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FaceCorner {
    pub position: u32,
    pub uv: Option<u32>,
    pub normal: Option<u32>,
}

/// A triangulated face line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Face {
    pub corners: [FaceCorner; 3],
}

impl Face {
    #[inline]
    pub fn position_indices(&self) -> [u32; 3] {
        self.corners.map(|c| c.position)
    }
}

/// Triangle mesh with the attribute lists in file order plus
/// upload-ready position and index buffers.
///
/// Built in one go by the loader; read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    uvs: Vec<Vec2>,
    normals: Vec<Vec3>,
    faces: Vec<Face>,
    vertex_floats: Vec<f32>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Assemble a mesh from attribute lists and faces, deriving the flat
    /// buffers. Face indices must already be validated against the lists.
    pub(crate) fn from_parts(
        positions: Vec<Vec3>,
        uvs: Vec<Vec2>,
        normals: Vec<Vec3>,
        faces: Vec<Face>,
    ) -> Self {
        let mut vertex_floats = Vec::with_capacity(faces.len() * 9);
        let mut indices = Vec::with_capacity(faces.len() * 3);
        for face in &faces {
            for index in face.position_indices() {
                let p = positions[index as usize];
                vertex_floats.extend_from_slice(&p.to_array());
                indices.push(index);
            }
        }

        Self {
            positions,
            uvs,
            normals,
            faces,
            vertex_floats,
            indices,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Corner positions in emission order, three floats per corner.
    /// Shared corners are repeated, not deduplicated.
    pub fn vertex_floats(&self) -> &[f32] {
        &self.vertex_floats
    }

    /// 0-based position indices, three per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Bounds over all declared positions, referenced or not.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.positions)
    }

    /// [`Mesh::vertex_floats`] as raw bytes for a vertex buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_floats)
    }

    /// [`Mesh::indices`] as raw bytes for an index buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
