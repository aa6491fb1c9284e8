use crate::collection::{CollectionItem, CollectionKind, IdName, Source};
use crate::prelude::*;

pub type MinionId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Minion {
    pub id: MinionId,
    pub name: String,
    pub description: String,
    pub enhanced_description: String,
    pub tooltip: String,
    pub patch: String,
    pub item_id: Option<u64>,
    pub tradeable: bool,
    pub behavior: IdName,
    pub race: IdName,
    pub owned: String,
    pub icon: Url,
    pub image: Url,
    pub sources: Vec<Source>,
    pub verminion: Verminion,
}

/// Lord of Verminion minigame stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verminion {
    pub cost: u32,
    pub attack: u32,
    pub defense: u32,
    pub hp: u32,
    pub speed: u32,
    pub area_attack: bool,
    pub skill: String,
    pub skill_description: String,
    pub skill_angle: u32,
    pub skill_cost: u32,
    pub eye: bool,
    pub gate: bool,
    pub shield: bool,
    pub skill_type: IdName,
}

impl CollectionItem for Minion {
    const KIND: CollectionKind = CollectionKind::Minions;
}
