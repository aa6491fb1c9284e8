use crate::collection::{CollectionItem, CollectionKind, Location};
use crate::prelude::*;

pub type LevequestId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Levequest {
    pub id: LevequestId,
    pub name: String,
    pub level: u32,
    pub cost: u32,
    pub issuer: String,
    pub patch: String,
    pub location: Location,
    pub craft: String,
    pub category: String,
    pub item: LeveReward,
}

/// The turn-in item for a crafting leve; all-null for battle leves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeveReward {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub quantity: Option<u64>,
}

impl CollectionItem for Levequest {
    const KIND: CollectionKind = CollectionKind::Levequests;
}
