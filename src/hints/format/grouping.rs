//! Grouping of parsed rows into per-puzzle hint lists.

use std::collections::HashMap;

use log::{debug, warn};

use crate::hints::types::config::ColumnNames;
use crate::hints::types::error::{HintsError, Result};
use crate::hints::types::models::{ColumnRole, Group, HintRecord, Row};

/// Positions of the required columns within the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderIndex {
    pub puzzle: Option<usize>,
    pub stage: Option<usize>,
    pub text: Option<usize>,
}

impl HeaderIndex {
    /// Locate each column by exact match against the header fields.
    /// The first matching field wins.
    pub fn locate(header: &[String], columns: &ColumnNames) -> Self {
        let find = |name: &str| header.iter().position(|field| field == name);
        Self {
            puzzle: find(&columns.puzzle),
            stage: find(&columns.stage),
            text: find(&columns.text),
        }
    }

    /// Columns that were not found in the header.
    pub fn missing(&self) -> Vec<ColumnRole> {
        [
            (ColumnRole::Puzzle, self.puzzle),
            (ColumnRole::Stage, self.stage),
            (ColumnRole::Text, self.text),
        ]
        .into_iter()
        .filter(|(_, idx)| idx.is_none())
        .map(|(role, _)| role)
        .collect()
    }

    /// Build a record from a data row, or `None` if any value is absent or
    /// blank after trimming.
    fn record(&self, row: &Row) -> Option<HintRecord> {
        Some(HintRecord {
            puzzle_id: trimmed_field(row, self.puzzle)?.to_string(),
            stage: trimmed_field(row, self.stage)?.to_string(),
            text: trimmed_field(row, self.text)?.to_string(),
        })
    }
}

fn trimmed_field(row: &Row, idx: Option<usize>) -> Option<&str> {
    let trimmed = row.get(idx?)?.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Group data rows by puzzle id.
///
/// The first row is the header. Groups appear in first-occurrence order and
/// each group's hints keep row order. A missing column is logged and yields
/// no groups rather than an error; use [`group_strict`] to surface it.
pub fn group(rows: &[Row], columns: &ColumnNames) -> Vec<Group> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };
    let index = HeaderIndex::locate(header, columns);
    for role in index.missing() {
        warn!("Header has no {} column ({:?})", role, column_name(columns, role));
    }
    collect_groups(&index, data)
}

/// Like [`group`], but fails with [`HintsError::MissingColumn`] when a
/// required column is absent from the header.
pub fn group_strict(rows: &[Row], columns: &ColumnNames) -> Result<Vec<Group>> {
    let Some((header, data)) = rows.split_first() else {
        return Ok(Vec::new());
    };
    let index = HeaderIndex::locate(header, columns);
    if let Some(role) = index.missing().first() {
        return Err(HintsError::MissingColumn {
            column: column_name(columns, *role).to_string(),
        });
    }
    Ok(collect_groups(&index, data))
}

fn collect_groups(index: &HeaderIndex, data: &[Row]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for row in data.iter().filter(|row| !row.is_empty()) {
        let Some(record) = index.record(row) else {
            skipped += 1;
            continue;
        };
        match positions.get(&record.puzzle_id) {
            Some(&pos) => groups[pos].hints.push(record),
            None => {
                positions.insert(record.puzzle_id.clone(), groups.len());
                groups.push(Group {
                    title: record.puzzle_id.clone(),
                    hints: vec![record],
                });
            }
        }
    }

    debug!("Grouped {} data rows into {} groups ({} skipped)", data.len(), groups.len(), skipped);
    groups
}

fn column_name(columns: &ColumnNames, role: ColumnRole) -> &str {
    match role {
        ColumnRole::Puzzle => &columns.puzzle,
        ColumnRole::Stage => &columns.stage,
        ColumnRole::Text => &columns.text,
    }
}

/// Groups partitioned around the hidden group.
#[derive(Debug, Clone, Default)]
pub struct Split {
    pub visible: Vec<Group>,
    pub hidden: Option<Group>,
}

/// Separate the group titled `hidden_title` from the rest, preserving order.
pub fn split(groups: Vec<Group>, hidden_title: Option<&str>) -> Split {
    let mut result = Split::default();
    for group in groups {
        if result.hidden.is_none() && Some(group.title.as_str()) == hidden_title {
            result.hidden = Some(group);
        } else {
            result.visible.push(group);
        }
    }
    result
}
