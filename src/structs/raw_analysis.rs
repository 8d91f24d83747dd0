use serde::Deserialize;
use serde_json::Value;
use crate::structs::partial_analysis::PartialAnalysis;

const LIST_SEPARATOR: &str = ". ";

/// A text field as the model actually sends it: usually a string, sometimes a
/// list of strings, occasionally something else entirely.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldText {
    Text(String),
    List(Vec<Value>),
    Other(Value),
}

impl FieldText {
    /// Collapses the field into one string. Falsy values (empty string,
    /// empty list, `false`, `0`) count as missing.
    pub fn resolve(self) -> Option<String> {
        let text = match self {
            Self::Text(text) => text,
            Self::List(items) => items
                .iter()
                .map(Self::list_item_text)
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
            Self::Other(value) => match value {
                Value::Bool(true) => "true".to_string(),
                Value::Bool(false) | Value::Null => return None,
                Value::Number(number) if number.as_f64() == Some(0.0) => return None,
                Value::Number(number) => number.to_string(),
                other => other.to_string(),
            },
        };

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn list_item_text(item: &Value) -> String {
        match item {
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// The score as sent by the model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(serde_json::Number),
    Text(String),
    Other(Value),
}

impl ScoreValue {
    pub fn resolve(self, zero_is_missing: bool) -> Option<i64> {
        let score = match self {
            Self::Number(number) => Self::number_to_score(&number)?,
            Self::Text(text) => Self::text_to_score(&text)?,
            Self::Other(_) => return None,
        };

        if score == 0 && zero_is_missing {
            None
        } else {
            Some(score)
        }
    }

    fn number_to_score(number: &serde_json::Number) -> Option<i64> {
        if let Some(value) = number.as_i64() {
            return Some(value);
        }
        if let Some(value) = number.as_u64() {
            return Some(i64::try_from(value).unwrap_or(i64::MAX));
        }
        number.as_f64().and_then(Self::float_to_score)
    }

    fn text_to_score(text: &str) -> Option<i64> {
        let trimmed = text.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Some(value);
        }
        trimmed.parse::<f64>().ok().and_then(Self::float_to_score)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn float_to_score(value: f64) -> Option<i64> {
        if value.is_finite() {
            Some(value.round() as i64)
        } else {
            None
        }
    }
}

/// Loosely typed view of the JSON object the model was asked to return.
/// Field types never cause deserialization to fail; only a non-object does.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnalysis {
    pub strengths: Option<FieldText>,
    pub improvements: Option<FieldText>,
    pub recommendations: Option<FieldText>,
    pub time_complexity: Option<FieldText>,
    pub space_complexity: Option<FieldText>,
    pub score: Option<ScoreValue>,
}

impl RawAnalysis {
    /// Parses `candidate` as a JSON object. Duplicate keys keep the last value.
    pub fn parse(candidate: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(candidate)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("expected a JSON object"));
        }
        serde_json::from_value(value)
    }

    pub fn into_partial(self, zero_score_is_missing: bool) -> PartialAnalysis {
        PartialAnalysis {
            strengths: self.strengths.and_then(FieldText::resolve),
            improvements: self.improvements.and_then(FieldText::resolve),
            recommendations: self.recommendations.and_then(FieldText::resolve),
            time_complexity: self.time_complexity.and_then(FieldText::resolve),
            space_complexity: self.space_complexity.and_then(FieldText::resolve),
            score: self.score.and_then(|score| score.resolve(zero_score_is_missing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_field_is_joined_in_order() {
        let raw = RawAnalysis::parse(r#"{"strengths":["clear logic","good tests"]}"#).unwrap();
        let partial = raw.into_partial(true);
        assert_eq!(partial.strengths.as_deref(), Some("clear logic. good tests"));
    }

    #[test]
    fn test_unexpected_field_types_do_not_fail_parsing() {
        let raw = RawAnalysis::parse(r#"{"strengths":42,"improvements":false,"score":"88"}"#).unwrap();
        let partial = raw.into_partial(true);
        assert_eq!(partial.strengths.as_deref(), Some("42"));
        assert_eq!(partial.improvements, None);
        assert_eq!(partial.score, Some(88));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let raw = RawAnalysis::parse(r#"{"strengths":"","improvements":[],"recommendations":null}"#).unwrap();
        let partial = raw.into_partial(true);
        assert!(partial.is_empty());
    }

    #[test]
    fn test_zero_score_policy() {
        let raw = RawAnalysis::parse(r#"{"score":0}"#).unwrap();
        assert_eq!(raw.clone().into_partial(true).score, None);
        assert_eq!(raw.into_partial(false).score, Some(0));
    }

    #[test]
    fn test_fractional_and_non_numeric_scores() {
        assert_eq!(ScoreValue::Text("87.6".to_string()).resolve(true), Some(88));
        assert_eq!(ScoreValue::Text("excellent".to_string()).resolve(true), None);
        assert_eq!(ScoreValue::Other(Value::Bool(true)).resolve(true), None);
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        assert!(RawAnalysis::parse("[1, 2, 3]").is_err());
        assert!(RawAnalysis::parse("\"text\"").is_err());
        assert!(RawAnalysis::parse("{\"strengths\": ").is_err());
    }
}
