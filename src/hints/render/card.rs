//! Group → card construction.

use crate::hints::types::config::{Config, Labels};
use crate::hints::types::models::{BodyFormat, CardSection, DisplayCard, Group};

/// Builds display cards. Holds the answer sentinel and label vocabulary.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    answer_stage: String,
    answer_format: BodyFormat,
    labels: Labels,
}

impl CardRenderer {
    pub fn new(answer_stage: impl Into<String>, answer_format: BodyFormat, labels: Labels) -> Self {
        Self {
            answer_stage: answer_stage.into(),
            answer_format,
            labels,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.answer_stage.clone(),
            config.answer_format,
            config.labels.clone(),
        )
    }

    pub fn answer_stage(&self) -> &str {
        &self.answer_stage
    }

    /// Render one group.
    ///
    /// Staged hints keep their order; the first answer-stage record becomes
    /// the trailing answer section. Further answer-stage records are not
    /// shown as staged hints. The badge counts every record.
    pub fn render(&self, group: &Group) -> DisplayCard {
        let hints = group
            .hints
            .iter()
            .filter(|record| record.stage != self.answer_stage)
            .map(|record| CardSection {
                label: format!("{} {}", self.labels.hint_prefix, record.stage),
                prefix: None,
                body: record.text.clone(),
                format: BodyFormat::Text,
            })
            .collect();

        let answer = group
            .hints
            .iter()
            .find(|record| record.stage == self.answer_stage)
            .map(|record| CardSection {
                label: self.labels.answer_summary.clone(),
                prefix: Some(self.labels.answer_prefix.clone()),
                body: record.text.clone(),
                format: self.answer_format,
            });

        let search_text = std::iter::once(group.title.as_str())
            .chain(group.hints.iter().map(|record| record.text.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        DisplayCard {
            title: group.title.clone(),
            badge: format!("{} {}", group.hints.len(), self.labels.badge_suffix),
            hints,
            answer,
            search_text,
        }
    }
}
