// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

/// A timezone offered by the "Add Timezone" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneEntry {
    pub id: &'static str,
    pub display_name: &'static str,
}

pub const TIMEZONES: &[TimezoneEntry] = &[
    TimezoneEntry {
        id: "UTC",
        display_name: "UTC",
    },
    TimezoneEntry {
        id: "US/Eastern",
        display_name: "New York",
    },
    TimezoneEntry {
        id: "Europe/London",
        display_name: "London",
    },
    TimezoneEntry {
        id: "Asia/Tokyo",
        display_name: "Tokyo",
    },
    TimezoneEntry {
        id: "Asia/Shanghai",
        display_name: "Shanghai",
    },
    TimezoneEntry {
        id: "Asia/Hong_Kong",
        display_name: "Hong Kong",
    },
    TimezoneEntry {
        id: "Asia/Jakarta",
        display_name: "Jakarta",
    },
];

/// Label shown for a timezone, or the identifier itself when it isn't in the table.
pub fn display_name(timezone_id: &str) -> &str {
    TIMEZONES
        .iter()
        .find(|entry| entry.id == timezone_id)
        .map_or(timezone_id, |entry| entry.display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_zones_use_their_city_name() {
        assert_eq!(display_name("US/Eastern"), "New York");
        assert_eq!(display_name("Asia/Hong_Kong"), "Hong Kong");
    }

    #[test]
    fn unknown_zone_falls_back_to_identifier() {
        assert_eq!(display_name("Mars/Olympus_Mons"), "Mars/Olympus_Mons");
    }

    #[test]
    fn every_table_entry_resolves() {
        for entry in TIMEZONES {
            assert!(
                entry.id.parse::<chrono_tz::Tz>().is_ok(),
                "{} is not a known timezone",
                entry.id
            );
        }
    }
}
