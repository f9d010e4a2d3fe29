//! Animation source descriptors and their resolution.
//!
//! The installed ctor takes exactly one argument. Scripts pass either a
//! Lottie document (as JSON text or as a plain object) or a record naming
//! a dotLottie archive by URI; everything else is rejected up front.

use serde_json::Value;

use crate::error::BindingError;

/// Object key that marks a URI-addressed dotLottie source.
pub const DOT_LOTTIE_URI_KEY: &str = "sourceDotLottieURI";

/// Resolved source for one animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimationSource {
    /// Lottie document passed inline as JSON text.
    InlineJson(String),
    /// dotLottie archive addressed by URI, fetched through the platform
    /// context.
    DotLottieUri(String),
}

impl AnimationSource {
    /// Resolve the raw ctor argument into a source.
    ///
    /// A string is taken as an inline document verbatim. An object
    /// carrying [`DOT_LOTTIE_URI_KEY`] is a URI source; any other object
    /// is re-serialized and treated as an inline document.
    pub fn resolve(raw: &Value) -> Result<Self, BindingError> {
        match raw {
            Value::String(text) => Ok(Self::InlineJson(text.clone())),
            Value::Object(map) => match map.get(DOT_LOTTIE_URI_KEY) {
                Some(Value::String(uri)) => Ok(Self::DotLottieUri(uri.clone())),
                Some(other) => Err(BindingError::InvalidSource {
                    reason: format!("{DOT_LOTTIE_URI_KEY} must be a string, got {other}"),
                }),
                None => Ok(Self::InlineJson(raw.to_string())),
            },
            other => Err(BindingError::InvalidSource {
                reason: format!("expected string or object source, got {other}"),
            }),
        }
    }

    /// Short tag for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InlineJson(_) => "inline-json",
            Self::DotLottieUri(_) => "dotlottie-uri",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_is_inline_json() {
        let src = AnimationSource::resolve(&json!("{\"v\":\"5.7.4\"}")).unwrap();
        assert_eq!(src, AnimationSource::InlineJson("{\"v\":\"5.7.4\"}".into()));
    }

    #[test]
    fn object_is_stringified() {
        let src = AnimationSource::resolve(&json!({"v": "5.7.4", "fr": 60})).unwrap();
        match src {
            AnimationSource::InlineJson(text) => {
                let back: Value = serde_json::from_str(&text).unwrap();
                assert_eq!(back, json!({"v": "5.7.4", "fr": 60}));
            }
            other => panic!("expected inline source, got {other:?}"),
        }
    }

    #[test]
    fn uri_record_is_dotlottie() {
        let src =
            AnimationSource::resolve(&json!({ DOT_LOTTIE_URI_KEY: "asset://intro.lottie" }))
                .unwrap();
        assert_eq!(
            src,
            AnimationSource::DotLottieUri("asset://intro.lottie".into())
        );
    }

    #[test]
    fn non_string_uri_is_rejected() {
        let err = AnimationSource::resolve(&json!({ DOT_LOTTIE_URI_KEY: 42 })).unwrap_err();
        assert!(matches!(err, BindingError::InvalidSource { .. }));
    }

    #[test]
    fn scalar_shapes_are_rejected() {
        for raw in [json!(7), json!(true), json!(null), json!([1, 2])] {
            let err = AnimationSource::resolve(&raw).unwrap_err();
            assert!(matches!(err, BindingError::InvalidSource { .. }));
        }
    }
}
