//! Deterministic short-form video content planning.
//!
//! Given a niche and optional trend keyword, goal, and tone, [`compose_plan`]
//! produces a hook idea, a shot script, post copy, and publishing notes.
//! Everything here is pure: no I/O, no clock, no randomness.

pub mod catalog;
pub mod hashtags;
pub mod plan;
pub mod request;
pub mod text;
pub mod tone;

pub use catalog::{Catalog, NicheEntry, ToneProfile, catalog};
pub use hashtags::{MAX_HASHTAGS, match_niche, select_hashtags};
pub use plan::{GeneratedPlan, PostCopy, Publish, Script, compose_plan, pick};
pub use request::{MIN_NICHE_CHARS, PlanRequest, RequestError};
pub use text::title_case;
pub use tone::{default_tone, resolve_tone};
