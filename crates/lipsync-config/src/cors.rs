use std::time::Duration;

use serde::Deserialize;

/// CORS settings for browser clients calling the speech endpoints directly
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins
    #[serde(default)]
    pub origins: AllowList,
    /// Allowed HTTP methods
    #[serde(default)]
    pub methods: AllowList,
    /// Allowed request headers
    #[serde(default)]
    pub headers: AllowList,
    #[serde(default)]
    pub credentials: bool,
    /// Preflight cache lifetime in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl CorsConfig {
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

/// `"*"`, a single value, or a list of values
///
/// A `"*"` anywhere in a list widens it to [`AllowList::Any`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAllowList")]
pub enum AllowList {
    #[default]
    Any,
    Only(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAllowList {
    One(String),
    Many(Vec<String>),
}

impl From<RawAllowList> for AllowList {
    fn from(raw: RawAllowList) -> Self {
        let values = match raw {
            RawAllowList::One(value) => vec![value],
            RawAllowList::Many(values) => values,
        };

        if values.iter().any(|value| value == "*") {
            Self::Any
        } else {
            Self::Only(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_everything() {
        let config: CorsConfig = toml::from_str("").unwrap();

        assert_eq!(config.origins, AllowList::Any);
        assert_eq!(config.methods, AllowList::Any);
        assert!(!config.credentials);
        assert!(config.max_age_duration().is_none());
    }

    #[test]
    fn explicit_lists() {
        let config: CorsConfig = toml::from_str(
            r#"
            origins = ["https://app.example.com", "http://localhost:5173"]
            methods = "POST"
            max_age = 600
            "#,
        )
        .unwrap();

        assert_eq!(
            config.origins,
            AllowList::Only(vec![
                "https://app.example.com".to_string(),
                "http://localhost:5173".to_string()
            ])
        );
        assert_eq!(config.methods, AllowList::Only(vec!["POST".to_string()]));
        assert_eq!(config.max_age_duration(), Some(Duration::from_secs(600)));
    }

    #[test]
    fn wildcard_in_list_means_any() {
        let config: CorsConfig = toml::from_str(r#"headers = ["content-type", "*"]"#).unwrap();
        assert_eq!(config.headers, AllowList::Any);
    }
}
