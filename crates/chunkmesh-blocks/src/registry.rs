use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::{BlockDef, BlocksConfig, TexturesDef};
use super::tables::BlockTables;
use super::types::{
    AtlasIndex, BLOCK_TYPES, BlockId, BlockState, FACE_COUNT, FaceTextures, atlas_index_fits,
};

// Minimal duplication of mesher face order to avoid a dependency from blocks → mesher.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Face {
    Left = 0,
    Right = 1,
    Top = 2,
    Bottom = 3,
    Back = 4,
    Front = 5,
}

const SIDE_FACES: [Face; 4] = [Face::Left, Face::Right, Face::Back, Face::Front];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateName(String),
    DuplicateId { id: BlockId, first: String, second: String },
    AtlasIndexOutOfRange { block: String, index: AtlasIndex },
    TooManyTypes,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateName(name) => write!(f, "duplicate block name: {}", name),
            RegistryError::DuplicateId { id, first, second } => {
                write!(f, "block id {} used by both `{}` and `{}`", id, first, second)
            }
            RegistryError::AtlasIndexOutOfRange { block, index } => write!(
                f,
                "atlas index {} of block `{}` does not fit the packed texture fields",
                index, block
            ),
            RegistryError::TooManyTypes => {
                write!(f, "more than {} block types configured", BLOCK_TYPES)
            }
        }
    }
}

impl Error for RegistryError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub state: BlockState,
    pub transparent: bool,
    pub textures: FaceTextures,
}

impl BlockType {
    // Fills id gaps: never emits faces and never hides a neighbor.
    fn placeholder(id: BlockId) -> Self {
        BlockType {
            id,
            name: String::new(),
            state: BlockState::Gas,
            transparent: true,
            textures: [0; FACE_COUNT],
        }
    }
}

/// Compiled block metadata with dense per-id tables ready for the mesher.
#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    pub blocks: Vec<BlockType>,
    pub by_name: HashMap<String, BlockId>,
    // Precomputed dense tables (fast path for mesher)
    is_transparent: Vec<bool>,
    state: Vec<BlockState>,
    texture: Vec<FaceTextures>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Borrowed view of the dense tables.
    pub fn tables(&self) -> BlockTables<'_> {
        BlockTables::new(&self.is_transparent, &self.state, &self.texture)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Ok(Self::from_config(cfg)?)
    }

    pub fn from_config(cfg: BlocksConfig) -> Result<Self, RegistryError> {
        let mut reg = BlockRegistry::new();
        let mut next_id: usize = 0;
        for def in cfg.blocks.into_iter() {
            let id = match def.id {
                Some(id) => id,
                None if next_id < BLOCK_TYPES => next_id as BlockId,
                None => return Err(RegistryError::TooManyTypes),
            };
            next_id = id as usize + 1;
            let ty = compile_block(id, def)?;
            if reg.by_name.contains_key(&ty.name) {
                return Err(RegistryError::DuplicateName(ty.name));
            }
            if let Some(prev) = reg.blocks.get(id as usize).filter(|b| !b.name.is_empty()) {
                return Err(RegistryError::DuplicateId {
                    id,
                    first: prev.name.clone(),
                    second: ty.name,
                });
            }
            if reg.blocks.len() <= id as usize {
                let start = reg.blocks.len();
                reg.blocks
                    .extend((start..=id as usize).map(|i| BlockType::placeholder(i as BlockId)));
            }
            reg.by_name.insert(ty.name.clone(), id);
            reg.blocks[id as usize] = ty;
        }
        reg.rebuild_tables();
        log::debug!(
            "block registry compiled: {} named types, {} table entries",
            reg.by_name.len(),
            reg.blocks.len()
        );
        Ok(reg)
    }

    /// Builds a registry straight from parallel tables; every entry becomes an unnamed type.
    ///
    /// Tables are truncated to the shortest of the three so that every id in range is covered.
    pub fn from_tables(
        is_transparent: &[bool],
        state: &[BlockState],
        texture: &[FaceTextures],
    ) -> Self {
        let n = is_transparent.len().min(state.len()).min(texture.len());
        if n != is_transparent.len() || n != state.len() || n != texture.len() {
            log::warn!(
                "block tables differ in length ({}, {}, {}); keeping the first {} ids",
                is_transparent.len(),
                state.len(),
                texture.len(),
                n
            );
        }
        let blocks = (0..n.min(BLOCK_TYPES))
            .map(|i| BlockType {
                id: i as BlockId,
                name: String::new(),
                state: state[i],
                transparent: is_transparent[i],
                textures: texture[i],
            })
            .collect();
        let mut reg = BlockRegistry {
            blocks,
            ..Default::default()
        };
        reg.rebuild_tables();
        reg
    }

    fn rebuild_tables(&mut self) {
        self.is_transparent = self.blocks.iter().map(|b| b.transparent).collect();
        self.state = self.blocks.iter().map(|b| b.state).collect();
        self.texture = self.blocks.iter().map(|b| b.textures).collect();
    }
}

fn compile_block(id: BlockId, def: BlockDef) -> Result<BlockType, RegistryError> {
    let state = def.state.unwrap_or_default();
    let transparent = def.transparent.unwrap_or(state == BlockState::Gas);
    let textures = compile_textures(def.textures.unwrap_or_default());
    if let Some(&index) = textures.iter().find(|&&i| !atlas_index_fits(i)) {
        return Err(RegistryError::AtlasIndexOutOfRange {
            block: def.name,
            index,
        });
    }
    Ok(BlockType {
        id,
        name: def.name,
        state,
        transparent,
        textures,
    })
}

fn compile_textures(def: TexturesDef) -> FaceTextures {
    if let Some(faces) = def.faces {
        return faces;
    }
    let all = def.all.unwrap_or(0);
    let mut out = [all; FACE_COUNT];
    out[Face::Top as usize] = def.top.unwrap_or(all);
    out[Face::Bottom as usize] = def.bottom.unwrap_or(all);
    for face in SIDE_FACES {
        out[face as usize] = def.side.unwrap_or(all);
    }
    out
}
