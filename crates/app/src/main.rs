//! Entry point for syre-obj.
//! Loads OBJ meshes given on the command line and reports what was parsed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use asset::Mesh;

const USAGE: &str = "usage: syre-obj [--dump=floats|indices|all] [--skip-invalid] <file.obj>...";

/// Which upload buffers to print after loading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Dump {
    #[default]
    None,
    Floats,
    Indices,
    All,
}

#[derive(Debug, Default, PartialEq)]
struct Options {
    paths: Vec<PathBuf>,
    dump: Dump,
    skip_invalid: bool,
}

impl Options {
    fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut opts = Options::default();
        for arg in args {
            if let Some(val) = arg.strip_prefix("--dump=") {
                opts.dump = match val.to_ascii_lowercase().as_str() {
                    "floats" | "vertices" => Dump::Floats,
                    "indices" => Dump::Indices,
                    "all" => Dump::All,
                    "none" => Dump::None,
                    other => bail!("unknown dump target '{}'\n{}", other, USAGE),
                };
            } else if arg == "--skip-invalid" {
                opts.skip_invalid = true;
            } else if arg.starts_with("--") {
                log::warn!("Ignoring unknown flag '{}'", arg);
            } else {
                opts.paths.push(PathBuf::from(arg));
            }
        }

        if opts.paths.is_empty() {
            bail!("no OBJ files given\n{}", USAGE);
        }
        Ok(opts)
    }
}

fn report(path: &Path, mesh: &Mesh) {
    log::info!(
        "{}: {} positions, {} uvs, {} normals, {} triangles ({} vertex bytes, {} index bytes)",
        path.display(),
        mesh.positions().len(),
        mesh.uvs().len(),
        mesh.normals().len(),
        mesh.triangle_count(),
        mesh.vertex_bytes().len(),
        mesh.index_bytes().len()
    );
    if let Some(bounds) = mesh.bounds() {
        log::info!(
            "  bounds min={:?} max={:?} center={:?} radius={:.3}",
            bounds.min.to_array(),
            bounds.max.to_array(),
            bounds.center().to_array(),
            bounds.radius()
        );
    }
}

fn dump(mesh: &Mesh, what: Dump) {
    if matches!(what, Dump::Floats | Dump::All) {
        for corner in mesh.vertex_floats().chunks_exact(3) {
            println!("{} {} {}", corner[0], corner[1], corner[2]);
        }
    }
    if matches!(what, Dump::Indices | Dump::All) {
        for tri in mesh.indices().chunks_exact(3) {
            println!("{} {} {}", tri[0], tri[1], tri[2]);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Options::from_args(std::env::args().skip(1))?;
    log::info!(
        "Starting syre-obj. files={}, dump={:?}, skip_invalid={}",
        opts.paths.len(),
        opts.dump,
        opts.skip_invalid
    );

    let mut failed = 0usize;
    for path in &opts.paths {
        let mesh = match Mesh::load(path) {
            Ok(mesh) => mesh,
            Err(err) if opts.skip_invalid => {
                log::error!("Skipping {}: {}", path.display(), err);
                failed += 1;
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to load {}", path.display()));
            }
        };
        report(path, &mesh);
        dump(&mesh, opts.dump);
    }

    if failed > 0 {
        return Err(anyhow!(
            "{} of {} file(s) failed to load",
            failed,
            opts.paths.len()
        ));
    }
    Ok(())
}
