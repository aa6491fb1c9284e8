//! The facade: shared options plus one accessor per category.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::character::Character;
use crate::collection::achievements::Achievement;
use crate::collection::armoire::ArmoireItem;
use crate::collection::bardings::Barding;
use crate::collection::blue_magic::BlueMagicSpell;
use crate::collection::emotes::Emote;
use crate::collection::fashion_accessories::FashionAccessory;
use crate::collection::framer_kits::FramerKit;
use crate::collection::hairstyles::Hairstyle;
use crate::collection::leves::Levequest;
use crate::collection::minions::Minion;
use crate::collection::mounts::Mount;
use crate::collection::orchestrions::Orchestrion;
use crate::collection::records::{FieldRecord, SurveyRecord};
use crate::collection::relics::Relic;
use crate::collection::titles::Title;
use crate::collection::triple_triad::{Card, Deck, Npc, Pack, TriadCollection};
use crate::collection::trove::TroveCollection;
use crate::collection::Collection;
use crate::prelude::*;
use crate::transport::Transport;

/// Response language for localized fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Fr,
    De,
    Ja,
}

impl Lang {
    pub const fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
            Lang::De => "de",
            Lang::Ja => "ja",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Lang::En),
            "fr" => Ok(Lang::Fr),
            "de" => Ok(Lang::De),
            "ja" => Ok(Lang::Ja),
            other => Err(Error::InvalidLanguage(other.to_string())),
        }
    }
}

/// Shared, immutable client configuration.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub language: Lang,
    /// Log transport failures through `tracing` instead of swallowing them.
    pub verbose: bool,
}

impl Options {
    /// Parse a language code. Fails before any accessor exists.
    pub fn new(language: &str, verbose: bool) -> Result<Self> {
        Ok(Self {
            language: language.parse()?,
            verbose,
        })
    }
}

/// The two field-operation record accessors.
#[derive(Clone)]
pub struct Records {
    pub field: Collection<FieldRecord>,
    pub survey: Collection<SurveyRecord>,
}

/// The four Triple Triad sub-resource accessors.
#[derive(Clone)]
pub struct TripleTriad {
    pub cards: TriadCollection<Card>,
    pub decks: TriadCollection<Deck>,
    pub npcs: TriadCollection<Npc>,
    pub packs: TriadCollection<Pack>,
}

/// Entry point: one accessor per collection category plus the
/// character/user factories. Construction is cheap; all accessors share
/// one options value and one HTTP agent (agent clones share a connection
/// pool).
#[derive(Clone)]
pub struct Client {
    options: Arc<Options>,
    transport: Transport,
    pub achievements: Collection<Achievement>,
    pub armoire: Collection<ArmoireItem>,
    pub bardings: Collection<Barding>,
    pub blue_magic: Collection<BlueMagicSpell>,
    pub emotes: Collection<Emote>,
    pub fashion_accessories: Collection<FashionAccessory>,
    pub framer_kits: Collection<FramerKit>,
    pub hairstyles: Collection<Hairstyle>,
    pub leves: Collection<Levequest>,
    pub minions: Collection<Minion>,
    pub mounts: Collection<Mount>,
    pub orchestrions: Collection<Orchestrion>,
    pub records: Records,
    pub relics: Collection<Relic>,
    pub titles: Collection<Title>,
    pub triple_triad: TripleTriad,
    pub trove: TroveCollection,
}

impl Client {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self::with_base(options, API_BASE_URL)
    }

    /// Point the client at a different service root. Meant for mirrors and
    /// tests; everything else behaves identically.
    pub fn with_base(options: Options, base: impl Into<String>) -> Self {
        let options = Arc::new(options);
        let agent: HttpClient = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .user_agent(concat!("xivcollect/", env!("CARGO_PKG_VERSION")))
            .build();
        let transport = Transport::new(agent, Arc::clone(&options), base.into());
        Self {
            achievements: Collection::new(transport.clone()),
            armoire: Collection::new(transport.clone()),
            bardings: Collection::new(transport.clone()),
            blue_magic: Collection::new(transport.clone()),
            emotes: Collection::new(transport.clone()),
            fashion_accessories: Collection::new(transport.clone()),
            framer_kits: Collection::new(transport.clone()),
            hairstyles: Collection::new(transport.clone()),
            leves: Collection::new(transport.clone()),
            minions: Collection::new(transport.clone()),
            mounts: Collection::new(transport.clone()),
            orchestrions: Collection::new(transport.clone()),
            records: Records {
                field: Collection::new(transport.clone()),
                survey: Collection::new(transport.clone()),
            },
            relics: Collection::new(transport.clone()),
            titles: Collection::new(transport.clone()),
            triple_triad: TripleTriad {
                cards: TriadCollection::new(transport.clone()),
                decks: TriadCollection::new(transport.clone()),
                npcs: TriadCollection::new(transport.clone()),
                packs: TriadCollection::new(transport.clone()),
            },
            trove: TroveCollection::new(transport.clone()),
            transport,
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Accessor for one character, by Lodestone id: exactly 8 digits,
    /// accepted as number or numeric string. No request is made here.
    pub fn character(&self, id: impl ToString) -> Result<Character> {
        let id = id.to_string();
        if id.len() != 8 || !all_digits(&id) {
            return Err(Error::InvalidCharacterId(id));
        }
        Ok(Character::new(id, self.transport.clone()))
    }

    /// Accessor for a user's character, by Discord id: 17 or more digits.
    /// No request is made here.
    pub fn user(&self, id: impl ToString) -> Result<Character> {
        let id = id.to_string();
        if id.len() < 17 || !all_digits(&id) {
            return Err(Error::InvalidUserId(id));
        }
        Ok(Character::new(id, self.transport.clone()))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

fn all_digits(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}
