use std::{fs, path::PathBuf};

use asset::{Attribute, Mesh, ObjError, load_obj_from_path};
use corelib::vec3;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn cube_fixture_loads() {
    let mesh = load_obj_from_path(fixture("cube.obj")).expect("load cube");
    assert_eq!(mesh.positions().len(), 8);
    assert_eq!(mesh.uvs().len(), 4);
    assert_eq!(mesh.normals().len(), 6);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.indices().len(), 36);
    assert_eq!(mesh.vertex_floats().len(), 108);
    assert!(mesh.indices().iter().all(|&i| (i as usize) < mesh.positions().len()));

    let bounds = mesh.bounds().expect("bounds");
    assert_eq!(bounds.min, vec3(-0.5, -0.5, -0.5));
    assert_eq!(bounds.max, vec3(0.5, 0.5, 0.5));
}

#[test]
fn flat_buffer_follows_index_order() {
    let mesh = Mesh::load(fixture("cube.obj")).unwrap();
    for (corner, &index) in mesh.indices().iter().enumerate() {
        let p = mesh.positions()[index as usize];
        assert_eq!(&mesh.vertex_floats()[corner * 3..corner * 3 + 3], &p.to_array());
    }
}

#[test]
fn pentagon_keeps_first_triangle() {
    let mesh = load_obj_from_path(fixture("pentagon.obj")).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.indices(), &[0, 1, 2]);
}

#[test]
fn loading_twice_is_identical() {
    let a = load_obj_from_path(fixture("cube.obj")).unwrap();
    let b = load_obj_from_path(fixture("cube.obj")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.obj");
    let err = load_obj_from_path(&path).unwrap_err();
    match err {
        ObjError::FileNotFound { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bad_file_on_disk_fails_whole_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.obj");
    fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\nf 1 2 5\n").unwrap();

    let err = load_obj_from_path(&path).unwrap_err();
    assert!(matches!(
        err,
        ObjError::IndexOutOfRange {
            line: 5,
            attribute: Attribute::Position,
            ..
        }
    ));
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.obj");
    fs::write(&path, b"v 0 0 0\n\xff\xfe\n").unwrap();

    let err = load_obj_from_path(&path).unwrap_err();
    assert!(matches!(err, ObjError::Read { line: 2, .. }));
}
