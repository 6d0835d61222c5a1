// 配置管理

use anyhow::{bail, Result};

use crate::buffer::DEFAULT_MAX_UNDO;

pub const DEFAULT_MAX_WORD_LEN: usize = 49;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 撤銷歷史上限，超過時淘汰最舊的項目
    pub max_undo: usize,
    /// 單字長度上限（字元數），`None` 表示不限制
    pub max_word_len: Option<usize>,
    pub show_status: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            max_undo: DEFAULT_MAX_UNDO,
            max_word_len: Some(DEFAULT_MAX_WORD_LEN),
            show_status: true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_undo == 0 {
            bail!("--max-undo must be at least 1");
        }
        if self.max_word_len == Some(0) {
            bail!("--max-word-len must be at least 1");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.max_undo, 5);
        assert_eq!(config.max_word_len, Some(49));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        let config = Config {
            max_undo: 0,
            ..Config::new()
        };
        assert!(config.validate().is_err());

        let config = Config {
            max_word_len: Some(0),
            ..Config::new()
        };
        assert!(config.validate().is_err());
    }
}
