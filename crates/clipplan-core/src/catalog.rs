//! Embedded lookup tables for plan composition.
//!
//! Niche hashtags, tone profiles, and the transition and audio candidate
//! lists are defined in `catalog.toml` and embedded in the binary at compile
//! time. The table is parsed once on first access and never mutated.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// A niche category and its hashtags.
#[derive(Debug, Clone, Deserialize)]
pub struct NicheEntry {
    /// Key matched as a substring of the lowercased niche (e.g. `fitness`).
    pub key: String,
    /// Category-specific hashtags, in output order.
    pub hashtags: Vec<String>,
}

/// Style descriptor used to phrase hooks and calls to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneProfile {
    /// Normalized tone name (e.g. `ironico`).
    pub label: String,
    /// Prose style description.
    pub style: String,
    /// Verb opening the hook line.
    pub hook_verb: String,
    /// Verb opening the call to action.
    pub cta_verb: String,
}

/// The full set of lookup tables.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    /// Niche key used when no entry matches.
    pub default_niche: String,
    /// Tone label used when the tone is absent or unknown.
    pub default_tone: String,
    /// Tags appended after the category tags for every niche.
    pub base_hashtags: Vec<String>,
    /// Transition styles for the shot movements.
    pub transitions: Vec<String>,
    /// Audio style candidates for the script.
    pub audio: Vec<String>,
    niches: Vec<NicheEntry>,
    tones: Vec<ToneProfile>,
}

/// The embedded catalog TOML.
static CATALOG_TOML: &str = include_str!("catalog.toml");

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog: Catalog = toml::from_str(CATALOG_TOML).expect("embedded catalog.toml is invalid");
    assert!(
        catalog.niche(&catalog.default_niche).is_some(),
        "default niche {:?} missing from catalog.toml",
        catalog.default_niche
    );
    assert!(
        catalog.tone(&catalog.default_tone).is_some(),
        "default tone {:?} missing from catalog.toml",
        catalog.default_tone
    );
    catalog
});

/// Return the process-wide catalog.
///
/// # Panics
///
/// Panics on first access if the embedded TOML is malformed or its defaults
/// point at missing entries. If the tests pass, the embedded file is valid.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    /// Niche entries in declaration order.
    pub fn niches(&self) -> &[NicheEntry] {
        &self.niches
    }

    /// Niche keys in declaration order.
    pub fn niche_keys(&self) -> Vec<&str> {
        self.niches.iter().map(|n| n.key.as_str()).collect()
    }

    /// Look up a niche entry by exact key.
    pub fn niche(&self, key: &str) -> Option<&NicheEntry> {
        self.niches.iter().find(|n| n.key == key)
    }

    /// Tone profiles in declaration order.
    pub fn tones(&self) -> &[ToneProfile] {
        &self.tones
    }

    /// Tone labels in declaration order.
    pub fn tone_labels(&self) -> Vec<&str> {
        self.tones.iter().map(|t| t.label.as_str()).collect()
    }

    /// Look up a tone profile by exact (already normalized) label.
    pub fn tone(&self, label: &str) -> Option<&ToneProfile> {
        self.tones.iter().find(|t| t.label == label)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
