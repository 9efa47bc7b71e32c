//! Tone resolution: label to style profile.

use crate::catalog::{ToneProfile, catalog};
use crate::text::non_blank;

/// Resolve a tone label to its profile.
///
/// The label is trimmed and lowercased. Absent, blank, and unknown labels all
/// resolve to the catalog's default tone.
pub fn resolve_tone(tone: Option<&str>) -> &'static ToneProfile {
    let cat = catalog();
    let normalized = non_blank(tone).map(str::to_lowercase);
    normalized
        .as_deref()
        .and_then(|label| cat.tone(label))
        .unwrap_or_else(default_tone)
}

/// The profile used when no known tone is requested.
pub fn default_tone() -> &'static ToneProfile {
    let cat = catalog();
    cat.tone(&cat.default_tone)
        .expect("default tone validated when the catalog was loaded")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tones_resolve() {
        assert_eq!(resolve_tone(Some("ironico")).cta_verb, "Dimmi");
        assert_eq!(resolve_tone(Some("motivazionale")).hook_verb, "Prova");
        assert_eq!(resolve_tone(Some("educativo")).style, "chiaro e didattico");
        assert_eq!(resolve_tone(Some("dinamico")).cta_verb, "Seguimi");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(resolve_tone(Some("IRONICO")).label, "ironico");
        assert_eq!(resolve_tone(Some("  Educativo ")).label, "educativo");
    }

    #[test]
    fn absent_and_unknown_fall_back_to_default() {
        let default = default_tone();
        assert_eq!(default.label, "dinamico");
        for tone in [None, Some(""), Some("   "), Some("sarcastico"), Some("ironic")] {
            assert_eq!(resolve_tone(tone), default, "tone {tone:?} should fall back");
        }
    }
}
