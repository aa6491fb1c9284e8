//! The two field-operation record categories: Bozjan field records under
//! `records`, Occult Crescent survey records under `survey records` (the
//! path builder normalizes the space).

use crate::collection::{CollectionItem, CollectionKind, Source};
use crate::prelude::*;

pub type RecordId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRecord {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub rarity: u32,
    pub location: String,
    pub linked_record_id: Option<u64>,
    pub patch: String,
    pub owned: String,
    pub icon: Url,
    pub image: Url,
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub solution: String,
    pub dungeon: String,
    pub patch: String,
    pub owned: String,
    pub icon: Url,
    pub image: Url,
    pub sources: Vec<Source>,
}

impl CollectionItem for FieldRecord {
    const KIND: CollectionKind = CollectionKind::FieldRecords;
}

impl CollectionItem for SurveyRecord {
    const KIND: CollectionKind = CollectionKind::SurveyRecords;
}
