//! Stateless hand-off between pages: JSON carried in the `data` query parameter

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const DATA_PARAM: &str = "data";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("No data found")]
    Missing,

    #[error("Invalid data: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Decode an already percent-decoded `data` parameter.
/// An absent or empty parameter is `Missing`.
pub fn decode<T: DeserializeOwned>(raw: Option<&str>) -> Result<T, TransportError> {
    match raw {
        None | Some("") => Err(TransportError::Missing),
        Some(raw) => Ok(serde_json::from_str(raw)?),
    }
}

/// JSON-serialize and percent-encode a value for use as a query value
pub fn encode<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    Ok(url::form_urlencoded::byte_serialize(json.as_bytes()).collect())
}

/// `path?data=<encoded value>`
pub fn data_link<T: Serialize>(path: &str, value: &T) -> Result<String, serde_json::Error> {
    Ok(format!("{}?{}={}", path, DATA_PARAM, encode(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerSet, ClassificationResult, LoadCategory, Severity};

    #[test]
    fn test_missing_and_empty() {
        assert!(matches!(
            decode::<AnswerSet>(None),
            Err(TransportError::Missing)
        ));
        assert!(matches!(
            decode::<AnswerSet>(Some("")),
            Err(TransportError::Missing)
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            decode::<AnswerSet>(Some("{q1:")),
            Err(TransportError::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_category_is_invalid() {
        let raw = r#"{"dominant":"spiritual","secondary":"cognitive","severity":"low","recovery":false,"reframe":false}"#;
        assert!(matches!(
            decode::<ClassificationResult>(Some(raw)),
            Err(TransportError::Invalid(_))
        ));
    }

    #[test]
    fn test_encode_escapes_json() {
        let answers: AnswerSet = [("q1", 3.0)].into_iter().collect();
        assert_eq!(encode(&answers).unwrap(), "%7B%22q1%22%3A3%7D");
    }

    #[test]
    fn test_data_link_decodes_back() {
        let result = ClassificationResult {
            dominant: LoadCategory::Emotional,
            secondary: LoadCategory::Decision,
            severity: Severity::High,
            recovery: true,
            reframe: true,
        };
        let link = data_link("/breakdown", &result).unwrap();
        let (path, query) = link.split_once('?').unwrap();
        assert_eq!(path, "/breakdown");

        let (key, value) = url::form_urlencoded::parse(query.as_bytes())
            .next()
            .unwrap();
        assert_eq!(key, DATA_PARAM);
        let decoded: ClassificationResult = decode(Some(&*value)).unwrap();
        assert_eq!(decoded, result);
    }
}
