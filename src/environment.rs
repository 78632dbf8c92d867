//! Environment Configuration
//!
//! Explicit SDK location configuration. Rather than reading process globals
//! deep inside the resolver, callers capture the environment once (or supply
//! values from persisted settings) and hand the result to [`crate::AndroidSdk`].

use serde::{Deserialize, Serialize};
use std::env;

use crate::{ANDROID_HOME_ENV, ANDROID_SDK_ROOT_ENV};

/// Candidate SDK root locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Value of `ANDROID_HOME`, the preferred SDK root.
    pub android_home: Option<String>,
    /// Value of `ANDROID_SDK_ROOT`, the fallback SDK root.
    pub android_sdk_root: Option<String>,
}

impl Environment {
    /// Capture the SDK root candidates from the process environment.
    pub fn from_env() -> Self {
        Self {
            android_home: env::var(ANDROID_HOME_ENV).ok(),
            android_sdk_root: env::var(ANDROID_SDK_ROOT_ENV).ok(),
        }
    }

    /// The active SDK root: `android_home` when set and non-empty, otherwise
    /// `android_sdk_root` when set and non-empty.
    ///
    /// No existence check is performed on the returned path.
    pub fn sdk_root(&self) -> Option<&str> {
        non_empty(self.android_home.as_deref()).or_else(|| non_empty(self.android_sdk_root.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_wins() {
        let env = Environment {
            android_home: Some("/opt/android-home".to_string()),
            android_sdk_root: Some("/opt/android-sdk-root".to_string()),
        };
        assert_eq!(env.sdk_root(), Some("/opt/android-home"));
    }

    #[test]
    fn test_primary_only() {
        let env = Environment {
            android_home: Some("/opt/android-home".to_string()),
            android_sdk_root: None,
        };
        assert_eq!(env.sdk_root(), Some("/opt/android-home"));
    }

    #[test]
    fn test_fallback_only() {
        let env = Environment {
            android_home: None,
            android_sdk_root: Some("/opt/android-sdk-root".to_string()),
        };
        assert_eq!(env.sdk_root(), Some("/opt/android-sdk-root"));
    }

    #[test]
    fn test_empty_primary_falls_through() {
        let env = Environment {
            android_home: Some(String::new()),
            android_sdk_root: Some("/opt/android-sdk-root".to_string()),
        };
        assert_eq!(env.sdk_root(), Some("/opt/android-sdk-root"));
    }

    #[test]
    fn test_unconfigured() {
        assert_eq!(Environment::default().sdk_root(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let env = Environment {
            android_home: Some("/opt/android-home".to_string()),
            android_sdk_root: None,
        };
        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(serde_json::from_str::<Environment>(&json).unwrap(), env);
    }
}
