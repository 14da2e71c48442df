use crate::core::price::UnparsablePrice;
use crate::core::{MenuCollection, MenuItem, MenuSource};
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{validate_max_length, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CURRENCY_PREFIX: &str = "R";
const MAX_CURRENCY_PREFIX_LEN: usize = 8;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_prefix: default_currency_prefix(),
        }
    }
}

fn default_currency_prefix() -> String {
    DEFAULT_CURRENCY_PREFIX.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregationConfig {
    #[serde(default)]
    pub unparsable_price: UnparsablePrice,
}

impl MenuConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${CURRENCY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MenuError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn currency_prefix(&self) -> &str {
        &self.display.currency_prefix
    }

    pub fn unparsable_price(&self) -> UnparsablePrice {
        self.aggregation.unparsable_price
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("display.currency_prefix", &self.display.currency_prefix)?;
        validate_max_length(
            "display.currency_prefix",
            &self.display.currency_prefix,
            MAX_CURRENCY_PREFIX_LEN,
        )?;
        Ok(())
    }
}

/// The `[[items]]` of a config file double as a seed menu.
impl MenuSource for MenuConfig {
    fn load(&self) -> Result<MenuCollection> {
        Ok(self.items.iter().cloned().collect())
    }
}
