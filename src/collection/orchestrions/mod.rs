use crate::collection::{CollectionItem, CollectionKind, IdName};
use crate::prelude::*;

pub type OrchestrionId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orchestrion {
    pub id: OrchestrionId,
    pub name: String,
    pub description: String,
    /// Roll number as displayed in-game, e.g. `"38"`.
    pub number: String,
    pub patch: String,
    pub owned: String,
    pub icon: Url,
    pub category: IdName,
}

impl CollectionItem for Orchestrion {
    const KIND: CollectionKind = CollectionKind::Orchestrions;
}
