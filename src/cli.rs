use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use chunkmesh_mesh::CursorAdvance;

#[derive(Parser, Debug)]
#[command(name = "chunkmesh", version, about = "Greedy mesher for 32x32x32 block chunks")]
pub struct Cli {
    /// Raise the default log level (-v debug, -vv trace); RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Optional run config (TOML) supplying defaults for the flags below.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mesh one or more chunk files
    Mesh {
        /// Block definitions (TOML)
        #[arg(long)]
        blocks: Option<PathBuf>,
        #[arg(long, value_enum)]
        cursor: Option<CursorArg>,
        /// Write `<name>.verts` files here
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Worker threads; 0 uses one per core
        #[arg(long)]
        threads: Option<usize>,
        #[arg(required = true)]
        chunks: Vec<PathBuf>,
    },
    /// Decode a `.verts` file and print its vertices
    Inspect {
        verts: PathBuf,
        #[arg(long, default_value_t = 36)]
        limit: usize,
    },
    /// Write a sample chunk file
    Demo {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Pattern::Cube)]
        pattern: Pattern,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorArg {
    SkipNext,
    Contiguous,
}

impl From<CursorArg> for CursorAdvance {
    fn from(c: CursorArg) -> Self {
        match c {
            CursorArg::SkipNext => CursorAdvance::SkipNext,
            CursorArg::Contiguous => CursorAdvance::Contiguous,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// A 16³ stone cube with a grass top in the middle of the chunk
    Cube,
    /// Alternating stone and dirt on every cell
    Checker,
    /// An 8-block thick floor
    Slab,
}
