use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::evaluate::query::{CategoryFilter, RecommendRequest, MAX_RATING, MIN_RATING};

/// Defaults used by the presentation shell when the user leaves a field unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// minimum rating preselected in the filter
    pub default_min_rating: f64,
    /// number of recommendations preselected
    pub default_top_k: usize,
    /// largest number of recommendations the shell offers
    pub max_top_k: usize,
    /// width in characters of the longest bar in the similarity chart
    pub bar_width: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_min_rating: 4.0,
            default_top_k: 3,
            max_top_k: 5,
            bar_width: 40,
        }
    }
}

impl RecommendConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_top_k == 0 {
            return Err(Error::InvalidConfig("max_top_k must be at least 1".into()));
        }
        if self.default_top_k == 0 || self.default_top_k > self.max_top_k {
            return Err(Error::InvalidConfig(format!(
                "default_top_k must be in [1, {}], got {}",
                self.max_top_k, self.default_top_k
            )));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.default_min_rating) {
            return Err(Error::InvalidConfig(format!(
                "default_min_rating must be in [{MIN_RATING}, {MAX_RATING}], got {}",
                self.default_min_rating
            )));
        }
        if self.bar_width == 0 {
            return Err(Error::InvalidConfig("bar_width must be at least 1".into()));
        }
        Ok(())
    }

    /// Request for `text` with every filter set to its default.
    pub fn request(&self, text: impl Into<String>) -> RecommendRequest {
        RecommendRequest::new(text)
            .with_category(CategoryFilter::All)
            .with_min_rating(self.default_min_rating)
            .with_top_k(self.default_top_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RecommendConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_min_rating, 4.0);
        assert_eq!(config.default_top_k, 3);
    }

    #[test]
    fn top_k_above_max_is_rejected() {
        let config = RecommendConfig { default_top_k: 6, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn request_uses_defaults() {
        let req = RecommendConfig::default().request("kopi");
        assert_eq!(req.text, "kopi");
        assert_eq!(req.category, CategoryFilter::All);
        assert_eq!(req.min_rating, 4.0);
        assert_eq!(req.top_k, 3);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: RecommendConfig = serde_json::from_str(r#"{"max_top_k": 10}"#).unwrap();
        assert_eq!(config.max_top_k, 10);
        assert_eq!(config.default_top_k, 3);
    }
}
