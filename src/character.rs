//! Character and user profile accessor.
//!
//! Constructed through [`Client::character`](crate::Client::character) or
//! [`Client::user`](crate::Client::user), which validate the identifier
//! shape before anything goes on the wire.

use crate::collection::CollectionItem;
use crate::path::Query;
use crate::prelude::*;
use crate::transport::Transport;

#[derive(Clone, Debug)]
pub struct Character {
    id: String,
    transport: Transport,
}

impl Character {
    pub(crate) fn new(id: String, transport: Transport) -> Self {
        Self { id, transport }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full profile with per-category completion counts. All caller filters
    /// pass through; the endpoint accepts `ids`, `times` and `latest`
    /// toggles besides the language.
    pub fn show(&self, params: Option<Query>) -> Result<Profile> {
        let query = params.unwrap_or_default();
        let lang = self.transport.language(Some(&query));
        let url = self.transport.url(&["characters", &self.id], &query, lang);
        self.transport
            .get_json(&url)
            .ok_or_else(|| Error::NotFound { url })
    }

    /// Entries of a category this character already has.
    pub fn owned<T: CollectionItem>(&self, params: Option<Query>) -> Result<Vec<T>> {
        self.breakdown("owned", params)
    }

    /// Entries of a category this character is still missing.
    pub fn missing<T: CollectionItem>(&self, params: Option<Query>) -> Result<Vec<T>> {
        self.breakdown("missing", params)
    }

    fn breakdown<T: CollectionItem>(&self, which: &str, params: Option<Query>) -> Result<Vec<T>> {
        let query = params.unwrap_or_default();
        let lang = self.transport.language(Some(&query));
        let url = self.transport.url(
            &["characters", &self.id, T::KIND.as_str(), which],
            &query,
            lang,
        );
        self.transport
            .get_json(&url)
            .ok_or_else(|| Error::NotFound { url })
    }
}

/// `count`/`total` pair reported for the unranked categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counts {
    pub count: Option<u64>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCounts {
    pub count: Option<u64>,
    pub total: Option<u64>,
    pub ranked_count: Option<u64>,
    pub ranked_total: Option<u64>,
    pub public: bool,
}

/// Achievements report points alongside counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementCounts {
    pub count: Option<u64>,
    pub total: Option<u64>,
    pub points: Option<u64>,
    pub points_total: Option<u64>,
    pub ranked_points_total: Option<u64>,
    pub ranked_time: Option<String>,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingSlots {
    pub server: Option<u64>,
    pub data_center: Option<u64>,
    pub global: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rankings {
    pub achievements: RankingSlots,
    pub mounts: RankingSlots,
    pub minions: RankingSlots,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelicProgress {
    pub weapons: Counts,
    pub armor: Counts,
    pub tools: Counts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeveProgress {
    pub battlecraft: Counts,
    pub tradecraft: Counts,
    pub fieldcraft: Counts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub server: String,
    pub data_center: String,
    pub portrait: Url,
    pub avatar: Url,
    pub last_parsed: String,
    pub verified: bool,
    pub achievements: AchievementCounts,
    pub mounts: RankedCounts,
    pub minions: RankedCounts,
    pub orchestrions: Counts,
    pub spells: Counts,
    pub emotes: Counts,
    pub bardings: Counts,
    pub hairstyles: Counts,
    pub armoires: Counts,
    pub fashions: Counts,
    pub records: Counts,
    pub survey_records: Counts,
    pub cards: Counts,
    pub npcs: Counts,
    pub rankings: Rankings,
    pub relics: RelicProgress,
    pub leves: LeveProgress,
}
