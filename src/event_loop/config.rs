//! Settings for spawning a [`MessageLoop`][super::MessageLoop].

use serde::{Deserialize, Serialize};

/// Configuration for a [`MessageLoop`][super::MessageLoop]. Missing fields fall back to their
/// defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// The name of the loop's thread. This also shows up in the loop's `Display` implementation,
    /// and thus in rejection errors.
    pub name: String,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            name: String::from("message-loop"),
        }
    }
}

impl LoopConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_read_from_json() {
        let config: LoopConfig = serde_json::from_str(r#"{ "name": "ui" }"#).unwrap();

        assert_eq!(config.name, "ui");
    }

    #[test]
    fn empty_object_is_the_default() {
        let config: LoopConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, LoopConfig::default());
    }

    #[test]
    fn builder_overrides_the_name() {
        let config = LoopConfig::default().with_name("audio-io");

        assert_eq!(
            config,
            LoopConfig {
                name: String::from("audio-io"),
            }
        );
    }
}
