use chunkmesh_blocks::types::{BlockState, FaceTextures};
use chunkmesh_blocks::{BlockRegistry, BlockTables};
use chunkmesh_chunk::{BlockRecord, ChunkData};
use chunkmesh_mesh::{
    CursorAdvance, FACE_UVS, FACE_VERTICES, Face, GridPoint, MeshError, MeshOptions, TableKind,
    count_visible_faces, merge_slice, render_chunk_blocks, render_chunk_blocks_with,
    try_render_chunk_blocks,
};

const TRANSPARENT: [bool; 3] = [true, false, false];
const STATE: [BlockState; 3] = [BlockState::Gas, BlockState::Solid, BlockState::Solid];
const TEXTURE: [FaceTextures; 3] = [[0; 6]; 3];

fn tables() -> BlockTables<'static> {
    BlockTables::new(&TRANSPARENT, &STATE, &TEXTURE)
}

fn chunk_with(cells: &[(usize, usize, usize, u16)]) -> ChunkData {
    let mut chunk = ChunkData::new();
    for &(x, y, z, t) in cells {
        chunk.set_block_type(x, y, z, t).unwrap();
    }
    chunk
}

#[test]
fn empty_chunk_yields_no_vertices() {
    let buf = render_chunk_blocks(&ChunkData::new(), tables());
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 36);
}

#[test]
fn all_gas_tables_yield_no_vertices() {
    let transparent = [true; 3];
    let state = [BlockState::Gas; 3];
    let chunk = chunk_with(&[(0, 0, 0, 1), (4, 5, 6, 2), (31, 31, 31, 1)]);
    let buf = render_chunk_blocks(&chunk, BlockTables::new(&transparent, &state, &TEXTURE));
    assert!(buf.is_empty());
}

#[test]
fn single_block_emits_six_unmerged_quads() {
    let chunk = chunk_with(&[(0, 0, 0, 1)]);
    let buf = render_chunk_blocks(&chunk, tables());
    assert_eq!(buf.len(), 36);
    assert_eq!(buf.capacity(), 72);

    for (q, face) in Face::ALL.iter().enumerate() {
        for j in 0..6 {
            let v = buf.as_slice()[q * 6 + j];
            assert_eq!(v.face(), Some(*face));
            assert_eq!(v.corner_id(), FACE_VERTICES[q][j] as u32);
            assert_eq!(v.position(), GridPoint::new(0, 0, 0));
            assert_eq!(v.uv(), (FACE_UVS[j][0], FACE_UVS[j][1]));
            assert_eq!(v.alpha(), 0xF);
        }
    }

    // First vertex of each face: normal | corner << 3, uv (0, 1) with full alpha
    let first: Vec<(u32, u32)> = buf
        .as_slice()
        .chunks_exact(6)
        .map(|q| (q[0].word0, q[0].word1))
        .collect();
    assert_eq!(
        first,
        vec![
            (16, 15392),
            (57, 15392),
            (18, 15392),
            (11, 15392),
            (44, 15392),
            (37, 15392),
        ]
    );
}

#[test]
fn two_adjacent_blocks_merge_shared_faces() {
    let chunk = chunk_with(&[(0, 0, 0, 1), (1, 0, 0, 1)]);
    assert_eq!(count_visible_faces(&chunk, &tables()), 10);

    let buf = render_chunk_blocks(&chunk, tables());
    assert_eq!(buf.len(), 36);

    let verts = buf.as_slice();
    // Right face sits on the second block
    assert!(verts[6..12].iter().all(|v| v.position().x == 1));
    // Top quad spans both blocks: vertex 2 is corner 7 at x = 1
    assert_eq!(verts[12 + 2].word0, 2 | (7 << 3) | (1 << 7));
    assert_eq!(verts[12 + 1].position(), GridPoint::new(0, 0, 0));

    let contiguous = render_chunk_blocks_with(
        &chunk,
        tables(),
        &MeshOptions {
            cursor: CursorAdvance::Contiguous,
        },
    );
    assert_eq!(contiguous, buf);
}

#[test]
fn solid_chunk_collapses_to_one_quad_per_face() {
    let mut chunk = ChunkData::new();
    chunk.fill(&BlockRecord::with_type(1));
    let buf = render_chunk_blocks(&chunk, tables());
    assert_eq!(buf.len(), 36);
    // Top face at y = 31; vertex 2 sits on the far inclusive corner
    let top = &buf.as_slice()[12..18];
    assert_eq!(top[1].position(), GridPoint::new(0, 31, 0));
    assert_eq!(top[2].position(), GridPoint::new(31, 31, 0));
    assert_eq!(top[3].position(), GridPoint::new(31, 31, 31));
}

#[test]
fn checkerboard_depends_on_cursor() {
    let mut chunk = ChunkData::new();
    for z in 0..32 {
        for x in 0..32 {
            let t = if (x + z) % 2 == 0 { 1 } else { 2 };
            chunk.set_block_type(x, 0, z, t).unwrap();
        }
    }
    let mut rects = Vec::new();
    merge_slice(&chunk, &tables(), Face::Top, 0, CursorAdvance::Contiguous, &mut rects);
    assert_eq!(rects.len(), 1024);
    assert!(rects.iter().all(|r| r.width == 1 && r.height == 1));

    merge_slice(&chunk, &tables(), Face::Top, 0, CursorAdvance::SkipNext, &mut rects);
    assert_eq!(rects.len(), 512);
}

#[test]
fn texture_lookup_uses_face_index() {
    let texture: [FaceTextures; 2] = [[0; 6], [0, 1, 17, 3, 4, 5]];
    let chunk = chunk_with(&[(3, 3, 3, 1)]);
    let buf = render_chunk_blocks(
        &chunk,
        BlockTables::new(&TRANSPARENT[..2], &STATE[..2], &texture),
    );
    let top_v0 = buf.as_slice()[12];
    assert_eq!(top_v0.face(), Some(Face::Top));
    assert_eq!(top_v0.uv(), (1, 2));
    assert_eq!(top_v0.word1, 15425);
}

#[test]
fn output_is_deterministic_and_parallel_safe() {
    let chunk = chunk_with(&[
        (0, 0, 0, 1),
        (1, 0, 0, 2),
        (5, 9, 30, 1),
        (31, 31, 31, 2),
        (16, 16, 16, 1),
        (16, 17, 16, 1),
    ]);
    let first = render_chunk_blocks(&chunk, tables());
    assert_eq!(first.len() % 6, 0);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| render_chunk_blocks(&chunk, tables())))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), first);
        }
    });
}

#[test]
fn checked_render_reports_uncovered_types() {
    let chunk = chunk_with(&[(2, 2, 2, 7)]);
    let err = try_render_chunk_blocks(&chunk, tables(), &MeshOptions::default()).unwrap_err();
    assert_eq!(
        err,
        MeshError::UncoveredBlockType {
            id: 7,
            table: TableKind::State,
            table_len: 3
        }
    );

    // Texture table too short for an emitting type
    let err = try_render_chunk_blocks(
        &chunk_with(&[(0, 0, 0, 2)]),
        BlockTables::new(&TRANSPARENT, &STATE, &TEXTURE[..2]),
        &MeshOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        MeshError::UncoveredBlockType {
            id: 2,
            table: TableKind::Texture,
            ..
        }
    ));
    assert!(err.to_string().contains("texture"));

    // Gas-only chunks never look at transparency or textures
    let state = [BlockState::Gas];
    let buf = try_render_chunk_blocks(
        &ChunkData::new(),
        BlockTables::new(&[], &state, &[]),
        &MeshOptions::default(),
    )
    .unwrap();
    assert!(buf.is_empty());
}

#[test]
fn registry_tables_drive_the_mesher() {
    let reg = BlockRegistry::from_toml_str(
        r#"
        [[blocks]]
        name = "air"
        state = "gas"

        [[blocks]]
        name = "glass"
        transparent = true
        [blocks.textures]
        all = 4

        [[blocks]]
        name = "stone"
        [blocks.textures]
        all = 1
        "#,
    )
    .unwrap();
    let glass = reg.id_by_name("glass").unwrap();
    let stone = reg.id_by_name("stone").unwrap();
    let chunk = chunk_with(&[(10, 10, 10, stone), (11, 10, 10, glass)]);
    // Stone keeps all six faces behind glass; glass loses only the face against stone
    assert_eq!(count_visible_faces(&chunk, &reg.tables()), 11);
    let contiguous = MeshOptions {
        cursor: CursorAdvance::Contiguous,
    };
    let buf = try_render_chunk_blocks(&chunk, reg.tables(), &contiguous).unwrap();
    assert_eq!(buf.len(), 6 * 11);

    // Skipping the cell after each run drops the glass faces that share a row with the stone
    let skip = try_render_chunk_blocks(&chunk, reg.tables(), &MeshOptions::default()).unwrap();
    assert_eq!(skip.len(), 6 * 7);
}

#[test]
fn checked_render_rejects_atlas_past_uv_range() {
    let chunk = chunk_with(&[(0, 0, 0, 1)]);
    let mut texture = TEXTURE;
    texture[1] = [0, 0, 0, 496, 0, 0];
    let err = try_render_chunk_blocks(
        &chunk,
        BlockTables::new(&TRANSPARENT, &STATE, &texture),
        &MeshOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        MeshError::AtlasOutOfRange {
            id: 1,
            face: Face::Bottom,
            index: 496
        }
    );
    assert!(err.to_string().contains("bottom"));

    // Last addressable tile still meshes with V = 31 on the far edge
    texture[1] = [495; 6];
    let buf = try_render_chunk_blocks(
        &chunk,
        BlockTables::new(&TRANSPARENT, &STATE, &texture),
        &MeshOptions::default(),
    )
    .unwrap();
    assert_eq!(buf.as_slice()[0].uv(), (15, 31));

    // Out-of-range textures on a type that is absent from the chunk are ignored
    texture[1] = [0; 6];
    texture[2] = [4096; 6];
    assert!(
        try_render_chunk_blocks(
            &chunk,
            BlockTables::new(&TRANSPARENT, &STATE, &texture),
            &MeshOptions::default(),
        )
        .is_ok()
    );
}
