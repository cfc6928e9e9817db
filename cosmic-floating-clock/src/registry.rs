// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use chrono::{DateTime, Utc};

use crate::{clock, zones};

/// Identity of a displayed row. Two rows for the same timezone never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneRow {
    pub id: RowId,
    pub timezone_id: String,
    pub label: String,
    pub time: String,
}

/// Ordered rows of the clock, top to bottom.
///
/// Once the first row is added, the registry refuses to drop below one row.
#[derive(Debug, Default)]
pub struct Registry {
    rows: Vec<TimezoneRow>,
    next_id: u64,
}

impl Registry {
    /// Append a row for `timezone_id` at the bottom.
    pub fn add(&mut self, timezone_id: &str) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;

        self.rows.push(TimezoneRow {
            id,
            timezone_id: timezone_id.to_owned(),
            label: zones::display_name(timezone_id).to_owned(),
            time: clock::PLACEHOLDER.to_owned(),
        });

        tracing::debug!(?id, timezone_id, "added timezone row");
        id
    }

    /// Remove the row with identity `row`.
    ///
    /// Does nothing when it is the last row left or no such row exists.
    pub fn remove(&mut self, row: RowId) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }

        let Some(index) = self.rows.iter().position(|r| r.id == row) else {
            return false;
        };

        let removed = self.rows.remove(index);
        tracing::debug!(id = ?removed.id, timezone_id = %removed.timezone_id, "removed timezone row");
        true
    }

    /// Recompute every row's time for `now`.
    ///
    /// A row that fails shows [`clock::ERROR_TEXT`]; the others still update.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        for row in &mut self.rows {
            row.time = clock::display_time(&row.timezone_id, now);
        }
    }

    pub fn rows(&self) -> &[TimezoneRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
