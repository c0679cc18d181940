//! Dataset vocabulary and presentation settings.
//!
//! The header names, answer sentinel and user-visible strings are specific to
//! one deployment, so they live here as data. `Config::default()` carries the
//! deployment's values; a TOML file may override any subset of them.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

use super::error::{HintsError, Result};
use super::models::BodyFormat;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Relative path of the hint CSV.
    pub source: PathBuf,
    pub columns: ColumnNames,
    /// Stage value that marks the answer rather than a numbered hint.
    pub answer_stage: String,
    /// Title of the group held back until the reveal gesture.
    /// `None` disables the reveal feature.
    pub hidden_title: Option<String>,
    pub answer_format: BodyFormat,
    pub reveal: RevealSettings,
    pub labels: Labels,
    pub messages: Messages,
    pub page: PageSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("./hints.csv"),
            columns: ColumnNames::default(),
            answer_stage: "答え".to_string(),
            hidden_title: Some("お色直しが終わった後".to_string()),
            answer_format: BodyFormat::Text,
            reveal: RevealSettings::default(),
            labels: Labels::default(),
            messages: Messages::default(),
            page: PageSettings::default(),
        }
    }
}

impl Config {
    /// Load a configuration file; missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration: {}", path.display());
        let raw = fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| HintsError::Config(e.to_string()))
    }
}

/// Exact header strings for the three columns the grouping engine needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub puzzle: String,
    pub stage: String,
    pub text: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            puzzle: "謎".to_string(),
            stage: "ヒント段階".to_string(),
            text: "ヒント".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Trigger events needed to reveal the hidden group.
    pub threshold: u32,
    /// Restart the count when events are further apart than this.
    pub reset_on_idle_ms: Option<u64>,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 5,
            reset_on_idle_ms: None,
        }
    }
}

impl RevealSettings {
    pub fn reset_on_idle(&self) -> Option<Duration> {
        self.reset_on_idle_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Staged hint summaries read "{hint_prefix} {stage}".
    pub hint_prefix: String,
    /// Badges read "{count} {badge_suffix}".
    pub badge_suffix: String,
    pub answer_summary: String,
    pub answer_prefix: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            hint_prefix: "ヒント".to_string(),
            badge_suffix: "件".to_string(),
            answer_summary: "答え".to_string(),
            answer_prefix: "答え:".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub load_failed: String,
    pub empty: String,
    pub revealed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            load_failed: "読み込みに失敗しました。".to_string(),
            empty: "ヒントが見つかりませんでした。".to_string(),
            revealed: "追加ヒントが公開されました。".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Document title and the text of the trigger element.
    pub title: String,
    pub lang: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "ヒント".to_string(),
            lang: "ja".to_string(),
        }
    }
}
