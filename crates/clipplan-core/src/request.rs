//! Plan request parsing and validation.
//!
//! A [`PlanRequest`] can only be built through [`PlanRequest::new`] or
//! [`PlanRequest::from_json`], so a request reaching the composer always has
//! a trimmed niche of at least [`MIN_NICHE_CHARS`] characters and optional
//! fields that are trimmed and non-blank.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::text::non_blank;

/// Minimum niche length, in characters, after trimming.
pub const MIN_NICHE_CHARS: usize = 2;

/// Errors from building a [`PlanRequest`].
///
/// The `Display` text is the message returned to clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The niche is missing, blank, or too short.
    #[error("Campo 'niche' obbligatorio e deve avere almeno 2 caratteri.")]
    Validation,

    /// The body is not JSON, or a field has the wrong type.
    #[error("Richiesta non valida")]
    Invalid,
}

/// A validated request for a content plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    niche: String,
    trend_keyword: Option<String>,
    goal: Option<String>,
    tone: Option<String>,
}

impl PlanRequest {
    /// Build a request from raw field values, trimming every field.
    pub fn new(
        niche: &str,
        trend_keyword: Option<&str>,
        goal: Option<&str>,
        tone: Option<&str>,
    ) -> Result<Self, RequestError> {
        let niche = niche.trim();
        if niche.chars().count() < MIN_NICHE_CHARS {
            return Err(RequestError::Validation);
        }
        Ok(Self {
            niche: niche.to_string(),
            trend_keyword: non_blank(trend_keyword).map(str::to_string),
            goal: non_blank(goal).map(str::to_string),
            tone: non_blank(tone).map(str::to_string),
        })
    }

    /// Parse a JSON request body.
    ///
    /// Malformed JSON and fields of the wrong type are [`RequestError::Invalid`].
    /// A body that is not an object, or whose `niche` is missing, null, `false`,
    /// zero, or too short, is [`RequestError::Validation`]. Any other
    /// non-string niche is [`RequestError::Invalid`].
    pub fn from_json(body: &[u8]) -> Result<Self, RequestError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| RequestError::Invalid)?;
        let Value::Object(fields) = value else {
            return Err(RequestError::Validation);
        };

        let niche = match fields.get("niche") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                return Err(RequestError::Validation);
            }
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
                return Err(RequestError::Validation);
            }
            Some(Value::String(niche)) => niche.as_str(),
            Some(_) => return Err(RequestError::Invalid),
        };

        Self::new(
            niche,
            optional_str(&fields, "trendKeyword")?,
            optional_str(&fields, "goal")?,
            optional_str(&fields, "tone")?,
        )
    }

    pub fn niche(&self) -> &str {
        &self.niche
    }

    pub fn trend_keyword(&self) -> Option<&str> {
        self.trend_keyword.as_deref()
    }

    pub fn goal(&self) -> Option<&str> {
        self.goal.as_deref()
    }

    pub fn tone(&self) -> Option<&str> {
        self.tone.as_deref()
    }
}

/// Read an optional string field; null counts as absent.
fn optional_str<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>, RequestError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(RequestError::Invalid),
    }
}
