use serde::Deserialize;

use crate::types::{AtlasIndex, BlockState, FACE_COUNT};

// Top-level blocks config file
#[derive(Deserialize, Debug, Default)]
pub struct BlocksConfig {
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BlockDef {
    pub name: String,
    // Sequential (previous id + 1) when omitted
    #[serde(default)]
    pub id: Option<u16>,
    #[serde(default)]
    pub state: Option<BlockState>,
    // Defaults to `state == gas`
    #[serde(default)]
    pub transparent: Option<bool>,
    #[serde(default)]
    pub textures: Option<TexturesDef>,
}

// Texture mapping: `faces` wins, then top/bottom/side, then all
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TexturesDef {
    #[serde(default)]
    pub all: Option<AtlasIndex>,
    #[serde(default)]
    pub top: Option<AtlasIndex>,
    #[serde(default)]
    pub bottom: Option<AtlasIndex>,
    #[serde(default)]
    pub side: Option<AtlasIndex>,
    // Explicit per-face list in mesher order: left, right, top, bottom, back, front
    #[serde(default)]
    pub faces: Option<[AtlasIndex; FACE_COUNT]>,
}
