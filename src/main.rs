//! `chunkmesh` command line: meshes chunk files, inspects packed vertex output and writes demos.
#![forbid(unsafe_code)]

mod cli;
mod config;
mod demo;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use chunkmesh_blocks::BlockRegistry;
use chunkmesh_chunk::ChunkData;
use chunkmesh_mesh::{
    CursorAdvance, MeshOptions, PackedVertex, VertexBuffer, try_render_chunk_blocks,
};

use cli::{Cli, Command};
use config::RunConfig;

const DEFAULT_BLOCKS: &str = "assets/blocks.toml";

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let run_cfg = match &cli.config {
        Some(path) => RunConfig::load_from_path(path)?,
        None => RunConfig::default(),
    };

    match cli.command {
        Command::Mesh {
            blocks,
            cursor,
            out_dir,
            threads,
            chunks,
        } => {
            let blocks = blocks
                .or(run_cfg.blocks)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BLOCKS));
            let opts = MeshOptions {
                cursor: cursor
                    .or(run_cfg.cursor)
                    .map(CursorAdvance::from)
                    .unwrap_or_default(),
            };
            let out_dir = out_dir.or(run_cfg.out_dir);
            let threads = threads.or(run_cfg.threads).unwrap_or(0);
            run_mesh(&blocks, &opts, out_dir.as_deref(), threads, &chunks)
        }
        Command::Inspect { verts, limit } => run_inspect(&verts, limit),
        Command::Demo { out, pattern } => {
            let chunk = demo::build(pattern)?;
            fs::write(&out, chunk.as_bytes())?;
            log::info!("wrote {:?} demo chunk to {}", pattern, out.display());
            Ok(())
        }
    }
}

struct MeshOutcome {
    path: PathBuf,
    result: Result<VertexBuffer, String>,
}

fn mesh_file(
    path: &Path,
    reg: &BlockRegistry,
    opts: &MeshOptions,
) -> Result<VertexBuffer, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    let chunk = ChunkData::from_bytes(bytes).map_err(|e| e.to_string())?;
    try_render_chunk_blocks(&chunk, reg.tables(), opts).map_err(|e| e.to_string())
}

fn run_mesh(
    blocks: &Path,
    opts: &MeshOptions,
    out_dir: Option<&Path>,
    threads: usize,
    chunks: &[PathBuf],
) -> Result<(), Box<dyn Error>> {
    let reg = BlockRegistry::load_from_path(blocks)?;
    log::info!("loaded {} block types from {}", reg.len(), blocks.display());
    if let Some(dir) = out_dir {
        fs::create_dir_all(dir)?;
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("chunkmesh-worker-{i}"))
        .build()?;

    let start = Instant::now();
    let outcomes: Vec<MeshOutcome> = pool.install(|| {
        chunks
            .par_iter()
            .map(|path| MeshOutcome {
                path: path.clone(),
                result: mesh_file(path, &reg, opts),
            })
            .collect()
    });
    log::info!(
        target: "perf",
        "ms={} chunkmesh_batch chunks={} threads={}",
        start.elapsed().as_millis(),
        chunks.len(),
        pool.current_num_threads()
    );

    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(buf) => {
                println!(
                    "{}: {} vertices ({} quads, capacity {})",
                    outcome.path.display(),
                    buf.len(),
                    buf.quads(),
                    buf.capacity()
                );
                if let Some(dir) = out_dir {
                    let stem = outcome
                        .path
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "chunk".to_string());
                    let out = dir.join(format!("{stem}.verts"));
                    fs::write(&out, buf.to_le_bytes())?;
                    log::debug!("wrote {}", out.display());
                }
            }
            Err(e) => {
                failed += 1;
                log::error!("{}: {}", outcome.path.display(), e);
            }
        }
    }
    if failed > 0 {
        return Err(format!("{} of {} chunks failed", failed, outcomes.len()).into());
    }
    Ok(())
}

fn run_inspect(path: &Path, limit: usize) -> Result<(), Box<dyn Error>> {
    let bytes = fs::read(path)?;
    if bytes.len() % 8 != 0 {
        return Err(format!(
            "{}: {} bytes is not a whole number of 8-byte vertices",
            path.display(),
            bytes.len()
        )
        .into());
    }
    let count = bytes.len() / 8;
    println!("{}: {} vertices", path.display(), count);
    for (i, raw) in bytes.chunks_exact(8).take(limit).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(raw);
        println!("{:>6} {}", i, describe(&PackedVertex::from_le_bytes(word)));
    }
    if count > limit {
        println!("... {} more", count - limit);
    }
    Ok(())
}

fn describe(v: &PackedVertex) -> String {
    let face = v.face().map(|f| f.name()).unwrap_or("?");
    let p = v.position();
    let (u, w) = v.uv();
    format!(
        "face={:<6} corner={} pos=({:>2},{:>2},{:>2}) uv=({:>2},{:>2}) alpha={:#x} raw={:#010x}:{:#010x}",
        face,
        v.corner_id(),
        p.x,
        p.y,
        p.z,
        u,
        w,
        v.alpha(),
        v.word0,
        v.word1
    )
}
