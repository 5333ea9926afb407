//! Versioned JSON envelope for the stored high score

use serde::{Deserialize, Serialize};

use super::PersistenceError;

/// Current on-disk format
pub const SCORE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEnvelope {
    pub version: u32,
    pub high_score: u64,
}

impl ScoreEnvelope {
    pub fn new(high_score: u64) -> Self {
        Self {
            version: SCORE_FORMAT_VERSION,
            high_score,
        }
    }

    pub fn encode(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and reject versions newer than this build understands
    pub fn decode(json: &str) -> Result<Self, PersistenceError> {
        let envelope: Self = serde_json::from_str(json)?;
        if envelope.version == 0 || envelope.version > SCORE_FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: envelope.version,
            });
        }
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_current() {
        let env = ScoreEnvelope::decode(r#"{"version":1,"high_score":42}"#).unwrap();
        assert_eq!(env.high_score, 42);
    }

    #[test]
    fn test_encode_shape() {
        assert_eq!(
            ScoreEnvelope::new(7).encode().unwrap(),
            r#"{"version":1,"high_score":7}"#
        );
    }

    #[test]
    fn test_future_version_rejected() {
        let err = ScoreEnvelope::decode(r#"{"version":2,"high_score":1}"#).unwrap_err();
        assert!(matches!(err, PersistenceError::UnsupportedVersion { found: 2 }));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            ScoreEnvelope::decode("1234"),
            Err(PersistenceError::Parse(_))
        ));
    }
}
