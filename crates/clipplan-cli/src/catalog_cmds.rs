//! `clipplan tones` and `clipplan niches`: list the built-in lookup tables.

use std::io::Write;

use anyhow::Result;

use clipplan_core::Catalog;

/// Print tone profiles, marking the default.
pub fn run_tones(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<16} {:<28} {:<12} {:<10}", "TONE", "STYLE", "HOOK", "CTA")?;
    writeln!(out, "{}", "-".repeat(68))?;
    for tone in catalog.tones() {
        let label = if tone.label == catalog.default_tone {
            format!("{} *", tone.label)
        } else {
            tone.label.clone()
        };
        writeln!(
            out,
            "{:<16} {:<28} {:<12} {:<10}",
            label, tone.style, tone.hook_verb, tone.cta_verb
        )?;
    }
    writeln!(out)?;
    writeln!(out, "* default for absent or unknown tones")?;
    Ok(())
}

/// Print niche categories in matching order, then the baseline tags.
pub fn run_niches(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    for niche in catalog.niches() {
        let marker = if niche.key == catalog.default_niche { " *" } else { "" };
        writeln!(out, "{}{marker}: {}", niche.key, niche.hashtags.join(" "))?;
    }
    writeln!(out)?;
    writeln!(out, "baseline: {}", catalog.base_hashtags.join(" "))?;
    writeln!(out, "* used when no category key appears in the niche")?;
    Ok(())
}
