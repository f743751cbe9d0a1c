//! Polygon meshes and their normals.

use glam::Vec3;

/// Shared vertices plus faces as index loops of three or more corners.
///
/// Face indices are trusted to be in range for the built-in meshes; lookups
/// still go through `get`, so a bad index drops that face instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Vec<usize>>,
    face_normals: Vec<Vec3>,
    vertex_normals: Vec<Vec3>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Vec<usize>>) -> Self {
        let face_normals: Vec<Vec3> = faces.iter().map(|f| face_normal(&vertices, f)).collect();
        let vertex_normals = vertex_normals(vertices.len(), &faces, &face_normals);
        Self { vertices, faces, face_normals, vertex_normals }
    }

    /// Unit cube centered on the origin; quads wound counter-clockwise seen
    /// from outside.
    pub fn cube() -> Self {
        let vertices = vec![
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
        ];
        let faces = vec![
            vec![0, 1, 2, 3], // front
            vec![4, 5, 1, 0], // bottom
            vec![7, 6, 5, 4], // back
            vec![3, 2, 6, 7], // top
            vec![0, 3, 7, 4], // left
            vec![1, 5, 6, 2], // right
        ];
        Self::new(vertices, faces)
    }

    /// Square-based pyramid: four triangular sides and a quad base.
    pub fn pyramid() -> Self {
        let vertices = vec![
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.0, 0.5, 0.0),
        ];
        let faces = vec![
            vec![0, 3, 4],
            vec![3, 2, 4],
            vec![2, 1, 4],
            vec![1, 0, 4],
            vec![0, 1, 2, 3],
        ];
        Self::new(vertices, faces)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// One unit normal per face, zero for degenerate faces.
    #[inline]
    pub fn face_normals(&self) -> &[Vec3] {
        &self.face_normals
    }

    /// Per-vertex average of the incident face normals, for smooth shading.
    #[inline]
    pub fn vertex_normals(&self) -> &[Vec3] {
        &self.vertex_normals
    }

    /// Fan triangulation of face `face`, as vertex index triples.
    pub fn triangles(&self, face: usize) -> impl Iterator<Item = [usize; 3]> + '_ {
        let corners = self.faces.get(face).map(Vec::as_slice).unwrap_or(&[]);
        (1..corners.len().saturating_sub(1)).map(move |i| [corners[0], corners[i], corners[i + 1]])
    }
}

/// Normal from the first three corners; faces with fewer corners face +Z.
fn face_normal(vertices: &[Vec3], face: &[usize]) -> Vec3 {
    let corner = |i: usize| face.get(i).and_then(|&v| vertices.get(v)).copied();
    match (corner(0), corner(1), corner(2)) {
        (Some(a), Some(b), Some(c)) => (b - a).cross(c - a).normalize_or_zero(),
        _ => Vec3::Z,
    }
}

fn vertex_normals(count: usize, faces: &[Vec<usize>], face_normals: &[Vec3]) -> Vec<Vec3> {
    let mut sums = vec![Vec3::ZERO; count];
    for (face, n) in faces.iter().zip(face_normals) {
        for &v in face {
            if let Some(sum) = sums.get_mut(v) {
                *sum += *n;
            }
        }
    }
    sums.into_iter().map(Vec3::normalize_or_zero).collect()
}
