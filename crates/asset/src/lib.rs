//! Asset loading: Wavefront OBJ meshes into upload-ready CPU buffers.

pub mod error;
pub mod mesh;
pub mod obj;

pub use error::{Attribute, ObjError, ObjResult};
pub use mesh::{Face, FaceCorner, Mesh};
pub use obj::{LineKind, load_obj_from_path, load_obj_from_reader, load_obj_from_str};
