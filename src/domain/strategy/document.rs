//! Strategy document returned by the generation service.
//!
//! Parsing is lenient: missing or `null` fields fall back to empty values so
//! a partial result still renders, and numeric labels are kept as text.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Structured content strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyDocument {
    #[serde(rename = "strategy_overview", deserialize_with = "lenient_string")]
    pub overview: String,

    #[serde(rename = "content_calendar", deserialize_with = "null_as_default")]
    pub calendar: Vec<CalendarEntry>,

    #[serde(deserialize_with = "null_as_default")]
    pub post_ideas: Vec<PostIdea>,

    #[serde(deserialize_with = "null_as_default")]
    pub captions: Vec<Caption>,

    #[serde(rename = "hashtag_strategy", deserialize_with = "null_as_default")]
    pub hashtags: HashtagPlan,

    /// Passed through untouched.
    #[serde(deserialize_with = "null_as_default")]
    pub reusable_prompts: Vec<Value>,

    /// Passed through untouched.
    #[serde(deserialize_with = "null_as_default")]
    pub cost_optimization: Vec<Value>,
}

/// One roadmap row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub day: String,
    #[serde(deserialize_with = "lenient_string")]
    pub theme: String,
    #[serde(deserialize_with = "lenient_string")]
    pub content_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostIdea {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub hook: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Caption {
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_string")]
    pub content: String,
}

/// Hashtags in three ordered groups. `branded` may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashtagPlan {
    #[serde(deserialize_with = "null_as_default")]
    pub broad: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub niche: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub branded: Vec<String>,
}

impl StrategyDocument {
    /// Parses a raw JSON value from the generation service.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_document() {
        let doc = StrategyDocument::from_value(json!({
            "strategy_overview": "Own the morning ritual.",
            "content_calendar": [
                { "day": "Day 1", "theme": "Origin story", "content_type": "Reel" }
            ],
            "post_ideas": [ { "title": "Bean to cup", "hook": "You won't believe step 3" } ],
            "captions": [ { "type": "short", "content": "Fuel your grind." } ],
            "hashtag_strategy": {
                "broad": ["#coffee"], "niche": ["specialtycoffee"], "branded": []
            },
            "reusable_prompts": ["Write a hook about {topic}"],
            "cost_optimization": [ { "tip": "batch shoots" } ]
        }))
        .unwrap();

        assert_eq!(doc.overview, "Own the morning ritual.");
        assert_eq!(doc.calendar[0].content_type, "Reel");
        assert_eq!(doc.post_ideas[0].hook, "You won't believe step 3");
        assert_eq!(doc.captions[0].kind, "short");
        assert_eq!(doc.hashtags.niche, vec!["specialtycoffee"]);
        assert!(doc.hashtags.branded.is_empty());
        assert_eq!(doc.reusable_prompts.len(), 1);
        assert_eq!(doc.cost_optimization[0]["tip"], "batch shoots");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let doc = StrategyDocument::from_value(json!({ "strategy_overview": "Only this" })).unwrap();
        assert_eq!(doc.overview, "Only this");
        assert!(doc.calendar.is_empty());
        assert!(doc.hashtags.broad.is_empty());
    }

    #[test]
    fn null_fields_default_to_empty() {
        let doc = StrategyDocument::from_value(json!({
            "strategy_overview": null,
            "content_calendar": null,
            "hashtag_strategy": { "broad": ["a"], "niche": null, "branded": null }
        }))
        .unwrap();
        assert_eq!(doc.overview, "");
        assert!(doc.calendar.is_empty());
        assert_eq!(doc.hashtags.broad, vec!["a"]);
        assert!(doc.hashtags.niche.is_empty());
    }

    #[test]
    fn numeric_day_label_is_kept_as_text() {
        let doc = StrategyDocument::from_value(json!({
            "content_calendar": [ { "day": 7, "theme": "Recap" } ]
        }))
        .unwrap();
        assert_eq!(doc.calendar[0].day, "7");
        assert_eq!(doc.calendar[0].content_type, "");
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(StrategyDocument::from_value(json!("nope")).is_err());
    }

    #[test]
    fn serializes_with_wire_names() {
        let doc = StrategyDocument {
            overview: "x".into(),
            captions: vec![Caption {
                kind: "long".into(),
                content: "y".into(),
            }],
            ..Default::default()
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["strategy_overview"], "x");
        assert_eq!(json["captions"][0]["type"], "long");
        assert!(json["hashtag_strategy"]["branded"].is_array());
    }
}
