//! Single-pass OBJ parser supporting positions, texture coordinates,
//! normals and triangle faces.
//!
//! Faces are triangles-only: every corner of a face line is validated, but a
//! line with more than three corners only contributes its first three (no
//! fan triangulation).

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::IntErrorKind,
    path::Path,
    str::{FromStr, SplitWhitespace},
};

use corelib::{Vec2, Vec3};

use crate::{
    error::{Attribute, ObjError, ObjResult},
    mesh::{Face, FaceCorner, Mesh},
};

/// Directive named by the first token of an OBJ line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Vertex,
    TexCoord,
    Normal,
    Face,
    Unknown,
}

impl LineKind {
    pub fn classify(tag: &str) -> Self {
        match tag {
            "v" => LineKind::Vertex,
            "vt" => LineKind::TexCoord,
            "vn" => LineKind::Normal,
            "f" => LineKind::Face,
            _ => LineKind::Unknown,
        }
    }
}

/// Load an OBJ mesh from a file path.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> ObjResult<Mesh> {
    let path = path.as_ref();
    log::info!("Loading OBJ mesh from {:?}", path);

    let file = File::open(path).map_err(|source| ObjError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    load_obj_from_reader(BufReader::new(file))
}

/// Build a [`Mesh`] from buffered OBJ text. Line numbers in errors count
/// from the first line the reader yields.
pub fn load_obj_from_reader<R: BufRead>(reader: R) -> ObjResult<Mesh> {
    parse_obj(reader)
}

/// Build a [`Mesh`] from OBJ text held in memory.
pub fn load_obj_from_str(contents: &str) -> ObjResult<Mesh> {
    load_obj_from_reader(io::Cursor::new(contents))
}

impl Mesh {
    /// Shorthand for [`load_obj_from_path`].
    pub fn load(path: impl AsRef<Path>) -> ObjResult<Self> {
        load_obj_from_path(path)
    }
}

impl FromStr for Mesh {
    type Err = ObjError;

    fn from_str(s: &str) -> ObjResult<Self> {
        load_obj_from_str(s)
    }
}

fn parse_obj<R: BufRead>(reader: R) -> ObjResult<Mesh> {
    let mut builder = MeshBuilder::default();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| ObjError::Read {
            line: line_no,
            source,
        })?;
        builder.push_line(line_no, &line)?;
    }
    Ok(builder.finish())
}

/// Growable lists filled line by line; turned into an immutable [`Mesh`]
/// only once the whole input parsed.
#[derive(Default)]
struct MeshBuilder {
    positions: Vec<Vec3>,
    uvs: Vec<Vec2>,
    normals: Vec<Vec3>,
    faces: Vec<Face>,
    truncated_faces: usize,
}

impl MeshBuilder {
    fn push_line(&mut self, line_no: usize, raw: &str) -> ObjResult<()> {
        let text = strip_comment(raw).trim();
        let mut parts = text.split_whitespace();
        let Some(tag) = parts.next() else {
            return Ok(());
        };

        match LineKind::classify(tag) {
            LineKind::Vertex => {
                let [x, y, z] = parse_floats(parts, line_no, text)?;
                self.positions.push(Vec3::new(x, y, z));
            }
            LineKind::TexCoord => {
                let [u, v] = parse_floats(parts, line_no, text)?;
                self.uvs.push(Vec2::new(u, v));
            }
            LineKind::Normal => {
                let [nx, ny, nz] = parse_floats(parts, line_no, text)?;
                self.normals.push(Vec3::new(nx, ny, nz));
            }
            LineKind::Face => {
                let face = self.parse_face(parts, line_no, text)?;
                self.faces.push(face);
            }
            LineKind::Unknown => {
                log::trace!("Ignoring OBJ directive '{}' on line {}", tag, line_no);
            }
        }
        Ok(())
    }

    fn parse_face<'a>(
        &mut self,
        corners: impl Iterator<Item = &'a str>,
        line_no: usize,
        text: &str,
    ) -> ObjResult<Face> {
        let tokens: Vec<&str> = corners.collect();
        if tokens.len() < 3 {
            return Err(malformed_face(
                line_no,
                text,
                format!("expected at least 3 corners, found {}", tokens.len()),
            ));
        }
        if tokens.len() > 3 {
            self.truncated_faces += 1;
        }

        let mut resolved = [FaceCorner::default(); 3];
        for (i, token) in tokens.iter().enumerate() {
            let corner = self.resolve_corner(token, line_no, text)?;
            if let Some(slot) = resolved.get_mut(i) {
                *slot = corner;
            }
        }
        Ok(Face { corners: resolved })
    }

    /// Resolve one `p`, `p/t`, `p//n` or `p/t/n` corner against the lists
    /// declared so far.
    fn resolve_corner(&self, token: &str, line_no: usize, text: &str) -> ObjResult<FaceCorner> {
        let mut fields = token.split('/');
        let position = match fields.next() {
            Some(field) if !field.is_empty() => field,
            _ => {
                return Err(malformed_face(
                    line_no,
                    text,
                    format!("corner '{}' has no position index", token),
                ));
            }
        };
        let uv = fields.next().filter(|f| !f.is_empty());
        let normal = fields.next().filter(|f| !f.is_empty());
        if fields.next().is_some() {
            return Err(malformed_face(
                line_no,
                text,
                format!("corner '{}' has more than three fields", token),
            ));
        }

        Ok(FaceCorner {
            position: resolve_index(
                position,
                Attribute::Position,
                self.positions.len(),
                line_no,
                text,
            )?,
            uv: uv
                .map(|f| resolve_index(f, Attribute::TexCoord, self.uvs.len(), line_no, text))
                .transpose()?,
            normal: normal
                .map(|f| resolve_index(f, Attribute::Normal, self.normals.len(), line_no, text))
                .transpose()?,
        })
    }

    fn finish(self) -> Mesh {
        if self.truncated_faces > 0 {
            log::warn!(
                "{} face line(s) had more than 3 corners; only the first triangle of each was kept",
                self.truncated_faces
            );
        }
        if self.faces.is_empty() {
            log::warn!("OBJ contained no faces");
        }

        let mesh = Mesh::from_parts(self.positions, self.uvs, self.normals, self.faces);
        log::debug!(
            "Parsed OBJ: {} positions, {} uvs, {} normals, {} triangles",
            mesh.positions().len(),
            mesh.uvs().len(),
            mesh.normals().len(),
            mesh.triangle_count()
        );
        mesh
    }
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}

fn parse_floats<const N: usize>(
    fields: SplitWhitespace<'_>,
    line_no: usize,
    text: &str,
) -> ObjResult<[f32; N]> {
    let fields: Vec<&str> = fields.collect();
    if fields.len() != N {
        return Err(malformed_vertex(
            line_no,
            text,
            format!("expected {} values, found {}", N, fields.len()),
        ));
    }

    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(&fields) {
        let value = token.parse::<f32>().map_err(|e| {
            malformed_vertex(line_no, text, format!("invalid number '{}': {}", token, e))
        })?;
        if !value.is_finite() {
            return Err(malformed_vertex(
                line_no,
                text,
                format!("non-finite value '{}'", token),
            ));
        }
        *slot = value;
    }
    Ok(out)
}

/// Convert a 1-based OBJ index into a 0-based one, checking it against the
/// current length of its list.
fn resolve_index(
    token: &str,
    attribute: Attribute,
    len: usize,
    line_no: usize,
    text: &str,
) -> ObjResult<u32> {
    // Integers beyond i64 are still indices, just saturated for reporting.
    let raw = match token.parse::<i64>() {
        Ok(raw) => raw,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                return Err(malformed_face(
                    line_no,
                    text,
                    format!("invalid {} index '{}'", attribute, token),
                ));
            }
        },
    };

    let out_of_range = || ObjError::IndexOutOfRange {
        line: line_no,
        attribute,
        index: raw,
        len,
    };
    if raw < 1 || raw as u64 > len as u64 {
        return Err(out_of_range());
    }
    u32::try_from(raw - 1).map_err(|_| out_of_range())
}

fn malformed_vertex(line: usize, text: &str, reason: String) -> ObjError {
    ObjError::MalformedVertexLine {
        line,
        text: text.to_owned(),
        reason,
    }
}

fn malformed_face(line: usize, text: &str, reason: String) -> ObjError {
    ObjError::MalformedFaceLine {
        line,
        text: text.to_owned(),
        reason,
    }
}
