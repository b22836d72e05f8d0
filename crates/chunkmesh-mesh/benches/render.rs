use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chunkmesh_blocks::BlockTables;
use chunkmesh_blocks::types::{BlockState, FaceTextures};
use chunkmesh_chunk::{BlockRecord, ChunkData};
use chunkmesh_mesh::{CursorAdvance, MeshOptions, render_chunk_blocks_with};

const TRANSPARENT: [bool; 3] = [true, false, false];
const STATE: [BlockState; 3] = [BlockState::Gas, BlockState::Solid, BlockState::Solid];
const TEXTURE: [FaceTextures; 3] = [[0, 0, 1, 2, 0, 0], [3; 6], [4; 6]];

fn terrain_chunk() -> ChunkData {
    let mut chunk = ChunkData::new();
    for z in 0..32 {
        for x in 0..32 {
            // Rolling surface between y = 8 and y = 23
            let h = 8 + ((x * 7 + z * 13) % 16);
            for y in 0..h {
                let t = if y + 1 == h { 2 } else { 1 };
                chunk.set_block_type(x, y, z, t).unwrap();
            }
        }
    }
    chunk
}

fn checker_chunk() -> ChunkData {
    let mut chunk = ChunkData::new();
    for z in 0..32 {
        for y in 0..32 {
            for x in 0..32 {
                if (x + y + z) % 2 == 0 {
                    chunk.set_block_type(x, y, z, 1).unwrap();
                }
            }
        }
    }
    chunk
}

fn bench_render(c: &mut Criterion) {
    let tables = BlockTables::new(&TRANSPARENT, &STATE, &TEXTURE);
    let mut group = c.benchmark_group("render_chunk_blocks");

    let mut solid = ChunkData::new();
    solid.fill(&BlockRecord::with_type(1));
    let cases = [
        ("solid", solid),
        ("terrain", terrain_chunk()),
        ("checker3d", checker_chunk()),
    ];
    for (name, chunk) in &cases {
        for cursor in [CursorAdvance::SkipNext, CursorAdvance::Contiguous] {
            let opts = MeshOptions { cursor };
            group.bench_function(format!("{}_{:?}", name, cursor), |b| {
                b.iter(|| black_box(render_chunk_blocks_with(black_box(chunk), tables, &opts)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
