//! Plan composition: turn a validated request into a full content plan.
//!
//! Composition is a pure function of the request. Candidate lists are
//! indexed with fixed offsets through [`pick`], so the same request always
//! yields the same plan, byte for byte.

use serde::{Deserialize, Serialize};

use crate::catalog::catalog;
use crate::hashtags::{match_niche, select_hashtags};
use crate::request::PlanRequest;
use crate::text::title_case;
use crate::tone::resolve_tone;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The full generated plan, serialized with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub idea: String,
    pub script: Script,
    pub copy: PostCopy,
    pub publish: Publish,
}

/// Shot script for a clip of about ten seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub visual: String,
    pub movements: Vec<String>,
    pub on_screen_text: Vec<String>,
    pub audio: String,
}

/// Post copy: caption, call to action, hashtags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCopy {
    pub caption: String,
    pub cta: String,
    pub hashtags: Vec<String>,
}

/// Publishing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publish {
    pub format: String,
    pub title: String,
    pub timing: String,
    pub autopublish: String,
}

impl GeneratedPlan {
    /// Caption followed by the hashtags, space separated.
    pub fn share_text(&self) -> String {
        format!("{} {}", self.copy.caption, self.copy.hashtags.join(" "))
    }
}

// ---------------------------------------------------------------------------
// Fixed content
// ---------------------------------------------------------------------------

const HOOK_INDEX: usize = 0;
const AUDIO_INDEX: usize = 1;
const BEAT_TRANSITION_INDEX: usize = 0;
const SPLIT_TRANSITION_INDEX: usize = 2;

const BEFORE_AFTER_LINE: &str = "Prima → Dopo (in 3 step)";
const NO_GOAL_LINE: &str = "Provalo ora";
const GOAL_SUFFIX: &str = " immediato";

const FORMAT: &str = "1080x1920 (9:16), 24-30fps, durata ≤ 10s, sottotitoli on-screen";
const TIMING: &str = "Posta tra 19:00-21:00 (Lun-Gio) o 12:00-14:00 nel weekend";
const AUTOPUBLISH: &str = "L'auto-pubblicazione diretta richiede integrazione API TikTok Business \
e autorizzazione account. Esporta e pubblica manualmente dall'app per ora.";

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Return the element at `bias`, clamped into the slice bounds.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn pick<T>(items: &[T], bias: usize) -> &T {
    &items[bias.min(items.len() - 1)]
}

/// Hook line candidates, in selection order.
fn hook_candidates(niche: &str, trend: Option<&str>, hook_verb: &str) -> Vec<String> {
    let lower = niche.to_lowercase();
    vec![
        format!("{hook_verb} che non conoscevi questo trucco {lower}!"),
        format!("Il modo più veloce per un boost {lower} in 10s"),
        format!("3 secondi per cambiare il tuo {lower}"),
        match trend {
            Some(trend) => format!("Trend {trend} ma utile ({niche})"),
            None => format!("Trucco che funziona ({niche})"),
        },
    ]
}

/// Compose the full plan for a validated request.
pub fn compose_plan(request: &PlanRequest) -> GeneratedPlan {
    let cat = catalog();
    let niche = request.niche();
    let trend = request.trend_keyword();
    let goal = request.goal();
    let tone = resolve_tone(request.tone());

    tracing::debug!(
        category = match_niche(niche),
        tone = %tone.label,
        "composing plan"
    );

    let idea = pick(&hook_candidates(niche, trend, &tone.hook_verb), HOOK_INDEX).clone();

    let visual = format!(
        "Hook 0-1s: close-up con testo bold. 1-6s: dimostrazione \"prima → dopo\" ({niche}). \
         6-9s: payoff a schermo con micro-reazione. 9-10s: CTA velocissima."
    );

    let movements = vec![
        format!(
            "{} sulle battute principali",
            pick(&cat.transitions, BEAT_TRANSITION_INDEX)
        ),
        "Zoom-in leggero su payoff".to_string(),
        format!(
            "{} tra prima/dopo",
            pick(&cat.transitions, SPLIT_TRANSITION_INDEX)
        ),
    ];

    let trend_line = match trend {
        Some(trend) => format!("Trend: {} in {niche}", title_case(trend)),
        None => format!("in {niche}"),
    };
    let goal_line = match goal {
        Some(goal) => format!("{}{GOAL_SUFFIX}", title_case(goal)),
        None => NO_GOAL_LINE.to_string(),
    };
    let on_screen_text = vec![trend_line, BEFORE_AFTER_LINE.to_string(), goal_line];

    let audio = pick(&cat.audio, AUDIO_INDEX).clone();

    let mut caption_parts = vec![idea.clone()];
    if let Some(goal) = goal {
        caption_parts.push(format!("Obiettivo: {goal}."));
    }
    if let Some(trend) = trend {
        caption_parts.push(format!("Usando il trend {trend}."));
    }
    let caption = caption_parts.join(" ");

    let cta = format!(
        "{} per altre idee {}. Condividi se ti è utile!",
        tone.cta_verb,
        niche.to_lowercase()
    );

    GeneratedPlan {
        idea,
        script: Script {
            visual,
            movements,
            on_screen_text,
            audio,
        },
        copy: PostCopy {
            caption,
            cta,
            hashtags: select_hashtags(niche, trend),
        },
        publish: Publish {
            format: FORMAT.to_string(),
            title: format!("{} in 10s: trucco che funziona", title_case(niche)),
            timing: TIMING.to_string(),
            autopublish: AUTOPUBLISH.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn request(niche: &str, trend: Option<&str>, goal: Option<&str>, tone: Option<&str>) -> PlanRequest {
        PlanRequest::new(niche, trend, goal, tone).expect("valid request")
    }

    #[test]
    fn pick_clamps_index() {
        let items = ["a", "b", "c"];
        assert_eq!(*pick(&items, 0), "a");
        assert_eq!(*pick(&items, 1), "b");
        assert_eq!(*pick(&items, 99), "c");
    }

    #[test]
    fn minimal_request() {
        let plan = compose_plan(&request("Fitness", None, None, None));

        assert_eq!(plan.idea, "Guarda che non conoscevi questo trucco fitness!");
        assert_eq!(
            plan.script.movements,
            vec![
                "taglio a ritmo sulle battute principali",
                "Zoom-in leggero su payoff",
                "snap transition tra prima/dopo",
            ]
        );
        assert_eq!(
            plan.script.on_screen_text,
            vec!["in Fitness", "Prima → Dopo (in 3 step)", "Provalo ora"]
        );
        assert_eq!(plan.script.audio, "pop/whip SFX + beat bounce");
        assert_eq!(plan.copy.caption, plan.idea);
        assert_eq!(
            plan.copy.cta,
            "Seguimi per altre idee fitness. Condividi se ti è utile!"
        );
        assert_eq!(plan.publish.title, "Fitness in 10s: trucco che funziona");
    }

    #[test]
    fn visual_embeds_niche_verbatim() {
        let plan = compose_plan(&request("Street Food", None, None, None));
        assert!(plan.script.visual.starts_with("Hook 0-1s: close-up con testo bold."));
        assert!(plan.script.visual.contains("(Street Food)"));
        assert!(plan.script.visual.ends_with("9-10s: CTA velocissima."));
    }

    #[test]
    fn trend_and_goal_flow_into_text_and_caption() {
        let plan = compose_plan(&request("tech", Some("AI Boom"), Some("più follower"), None));

        assert_eq!(plan.script.on_screen_text[0], "Trend: Ai Boom in tech");
        assert_eq!(plan.script.on_screen_text[2], "Più Follower immediato");
        assert_eq!(
            plan.copy.caption,
            "Guarda che non conoscevi questo trucco tech! Obiettivo: più follower. \
             Usando il trend AI Boom."
        );
    }

    #[test]
    fn caption_skips_missing_parts() {
        let plan = compose_plan(&request("food", Some("capcut"), None, None));
        assert_eq!(
            plan.copy.caption,
            "Guarda che non conoscevi questo trucco food! Usando il trend capcut."
        );
    }

    #[test]
    fn tone_changes_hook_and_cta() {
        let plan = compose_plan(&request("food", None, None, Some("ironico")));
        assert!(plan.idea.starts_with("Scommetti"));
        assert!(plan.copy.cta.starts_with("Dimmi"));

        let plan = compose_plan(&request("food", None, None, Some("sconosciuto")));
        assert!(plan.copy.cta.starts_with("Seguimi"));
    }

    #[test]
    fn publish_constants() {
        let plan = compose_plan(&request("beauty", None, None, None));
        assert!(plan.publish.format.starts_with("1080x1920 (9:16)"));
        assert!(plan.publish.timing.contains("19:00-21:00"));
        assert!(plan.publish.autopublish.contains("API TikTok Business"));
        assert!(plan.publish.autopublish.contains("manualmente"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let plan = compose_plan(&request("travel", None, None, None));
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json["script"]["onScreenText"].is_array());
        assert!(json["script"].get("on_screen_text").is_none());
        assert!(json["copy"]["hashtags"].is_array());
        assert!(json["publish"]["autopublish"].is_string());
    }

    #[test]
    fn share_text_joins_caption_and_tags() {
        let plan = compose_plan(&request("fitness", None, None, None));
        let text = plan.share_text();
        assert!(text.starts_with(&plan.copy.caption));
        assert!(text.ends_with("#fyp #tiktokitalia"));
    }
}
