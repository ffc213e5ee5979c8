//! Static Content Catalog
//!
//! Chapters, characters, merch and survey options shown by the site.
//! Everything here is placeholder content standing in for a real content
//! source; the state machine only ever reads it.

use serde::{Deserialize, Serialize};

/// Chapter identifier. Ids start at 1.
pub type ChapterId = u32;

/// A readable chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
}

impl Chapter {
    pub fn new(id: ChapterId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Case-insensitive substring match against the title.
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

/// A member of the cast shown in the character gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub bio: String,
    pub image: String,
}

/// A product tile in the merch shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchItem {
    pub id: u32,
    pub name: String,
    pub blurb: String,
    pub image: String,
}

/// A donation platform button on the support page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportLink {
    pub label: String,
    pub icon: String,
}

/// Answers offered by the "where did you hear about us" survey
pub const SURVEY_SOURCES: [&str; 5] = ["TikTok", "Instagram", "Twitter", "Google", "Facebook"];

/// Number of pages shown by the manga grid, whatever the chapter.
pub const MANGA_PAGE_COUNT: u32 = 3;

const PLACEHOLDER_HOST: &str = "https://placehold.co";

/// Image shown for page `n` (1-based) of the webtoon strip
pub fn webtoon_page_image(n: u32) -> String {
    format!("{}/700x1500/EEE/333?text=Page+{}", PLACEHOLDER_HOST, n)
}

/// Image shown for page `n` (1-based) of the manga grid
pub fn manga_page_image(n: u32) -> String {
    format!("{}/700x1000/EEE/333?text=Manga+Page+{}", PLACEHOLDER_HOST, n)
}

/// Background of the home page hero banner
pub fn hero_banner_image() -> String {
    format!(
        "{}/1200x400/4A00FF/FFFFFF?text=Anime+Themed+Banner",
        PLACEHOLDER_HOST
    )
}

/// All static site content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub chapters: Vec<Chapter>,
    pub characters: Vec<Character>,
    pub merch: Vec<MerchItem>,
    pub support_links: Vec<SupportLink>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl Catalog {
    /// The hard-coded content the site ships with
    pub fn placeholder() -> Self {
        let chapters = vec![
            Chapter::new(1, "Chapter 1 - The Beginning"),
            Chapter::new(2, "Chapter 2 - Shadows Rise"),
            Chapter::new(3, "Chapter 3 - Forgotten Memories"),
            Chapter::new(4, "Chapter 4 - Return of the Hero"),
            Chapter::new(5, "Chapter 5 - Betrayal"),
        ];

        let characters = vec![
            Character {
                name: "Kira Tachibana".to_string(),
                bio: "A fierce and mysterious warrior who holds the key to an ancient prophecy."
                    .to_string(),
                image: format!("{}/300x400/FFB6C1/333?text=Kira", PLACEHOLDER_HOST),
            },
            Character {
                name: "Renjiro Sato".to_string(),
                bio: "A genius inventor and reluctant hero caught in a world he never asked for."
                    .to_string(),
                image: format!("{}/300x400/87CEEB/333?text=Renjiro", PLACEHOLDER_HOST),
            },
            Character {
                name: "Yuna Kurogane".to_string(),
                bio: "An elite assassin with a tragic past and unmatched swordsmanship."
                    .to_string(),
                image: format!("{}/300x400/696969/FFFFFF?text=Yuna", PLACEHOLDER_HOST),
            },
        ];

        let merch = (1..=3)
            .map(|i| MerchItem {
                id: i,
                name: format!("T-Shirt Design {}", i),
                blurb: "High-quality anime-themed apparel.".to_string(),
                image: format!("{}/400x400/AAA/333?text=Product+{}", PLACEHOLDER_HOST, i),
            })
            .collect();

        let support_links = vec![
            SupportLink {
                label: "Ko-fi".to_string(),
                icon: "☕".to_string(),
            },
            SupportLink {
                label: "Patreon".to_string(),
                icon: "🪙".to_string(),
            },
        ];

        Self {
            chapters,
            characters,
            merch,
            support_links,
        }
    }

    /// Chapters whose title contains `query`, ignoring case.
    ///
    /// An empty query matches every chapter.
    pub fn filter_chapters(&self, query: &str) -> Vec<&Chapter> {
        self.chapters.iter().filter(|ch| ch.matches(query)).collect()
    }

    pub fn chapter(&self, id: ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|ch| ch.id == id)
    }
}

/// Extension point for the reader's previous/next chapter controls.
///
/// The placeholder content defines no chapter ordering of its own, so the
/// default implementation ([`NoPaging`]) never resolves a neighbour.
pub trait ChapterPaging {
    fn previous(&self, current: ChapterId) -> Option<ChapterId>;
    fn next(&self, current: ChapterId) -> Option<ChapterId>;
}

/// Paging collaborator that leaves both controls inert
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPaging;

impl ChapterPaging for NoPaging {
    fn previous(&self, _current: ChapterId) -> Option<ChapterId> {
        None
    }

    fn next(&self, _current: ChapterId) -> Option<ChapterId> {
        None
    }
}
