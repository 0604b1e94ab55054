use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Lowest rating the classifier may return.
pub const MIN_RATING: u8 = 1;
/// Highest rating the classifier may return.
pub const MAX_RATING: u8 = 5;

/// Emotional polarity of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// The label the rating maps to: 4-5 positive, 3 neutral, 1-2 negative.
    pub fn for_rating(rating: u8) -> Self {
        match rating {
            r if r >= 4 => Sentiment::Positive,
            3 => Sentiment::Neutral,
            _ => Sentiment::Negative,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(CoreError::SchemaViolation(format!(
                "sentiment '{other}' is not one of positive, negative, neutral"
            ))),
        }
    }
}

/// Classification returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentResponse {
    pub sentiment: Sentiment,
    pub rating: u8,
}

/// Exact shape the model is instructed to emit. Anything else is an upstream error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVerdict {
    sentiment: String,
    rating: i64,
}

impl SentimentResponse {
    /// Decode and validate the raw completion text produced by the model.
    ///
    /// Invalid JSON and missing, extra or mistyped fields surface as
    /// [`CoreError::Json`]. Well-formed payloads with an unknown label or an
    /// out-of-range rating surface as [`CoreError::SchemaViolation`].
    pub fn from_completion(raw: &str) -> CoreResult<Self> {
        let verdict: RawVerdict = serde_json::from_str(raw)?;

        let sentiment = verdict.sentiment.parse::<Sentiment>()?;

        let rating = u8::try_from(verdict.rating)
            .ok()
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or_else(|| {
                CoreError::SchemaViolation(format!(
                    "rating {} is outside {MIN_RATING}..={MAX_RATING}",
                    verdict.rating
                ))
            })?;

        Ok(Self { sentiment, rating })
    }

    /// Whether the rating agrees with the documented rating-to-label mapping.
    ///
    /// Informational only: inconsistent pairs are still returned to callers.
    pub fn is_consistent(&self) -> bool {
        Sentiment::for_rating(self.rating) == self.sentiment
    }
}
