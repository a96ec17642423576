use serde::Deserialize;

/// Tunables shared by every traversal.
///
/// Deserializes from the `[walk]` table of a config file; every field is
/// optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkOptions {
    /// Abort a single traversal with [`WalkError::LimitExceeded`] once it has
    /// visited this many commits. `None` walks until the history is
    /// exhausted.
    ///
    /// [`WalkError::LimitExceeded`]: crate::WalkError::LimitExceeded
    pub max_commits: Option<usize>,
}

impl WalkOptions {
    pub fn with_max_commits(max_commits: usize) -> Self {
        Self {
            max_commits: Some(max_commits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_is_unlimited() {
        let options: WalkOptions = toml::from_str("").unwrap();
        assert_eq!(options, WalkOptions::default());
        assert_eq!(options.max_commits, None);
    }

    #[test]
    fn reads_max_commits() {
        let options: WalkOptions = toml::from_str("max_commits = 5000").unwrap();
        assert_eq!(options, WalkOptions::with_max_commits(5000));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<WalkOptions>("max_depth = 3").is_err());
    }
}
