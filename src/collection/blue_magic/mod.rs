use crate::collection::{CollectionItem, CollectionKind, IdName, Source};
use crate::prelude::*;

pub type SpellId = u64;

/// A blue mage spell. Lives under the `spells` category upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueMagicSpell {
    pub id: SpellId,
    pub name: String,
    pub description: String,
    pub tooltip: String,
    pub order: u32,
    pub rank: u32,
    pub patch: String,
    pub owned: String,
    pub icon: Url,
    #[serde(rename = "type")]
    pub kind: IdName,
    pub aspect: IdName,
    pub sources: Vec<Source>,
}

impl CollectionItem for BlueMagicSpell {
    const KIND: CollectionKind = CollectionKind::BlueMagic;
}
