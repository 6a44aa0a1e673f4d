//! Search configuration for the path enumerator.

/// Configuration parameters for path enumeration.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Maximum number of frontier entries to expand, or `None` for an
    /// unbounded search.
    ///
    /// Cycle avoidance already bounds every traversal, so the cap is not
    /// needed for termination. It exists to cut short pathologically
    /// dense networks; with a cap set the enumeration may miss paths.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Configuration with no expansion cap.
    pub fn unbounded() -> Self {
        Self {
            max_expansions: None,
        }
    }

    /// Configuration capped at `max_expansions` frontier expansions.
    pub fn capped(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        assert_eq!(SearchConfig::default().max_expansions, None);
    }

    #[test]
    fn capped_sets_limit() {
        assert_eq!(SearchConfig::capped(100).max_expansions, Some(100));
    }
}
