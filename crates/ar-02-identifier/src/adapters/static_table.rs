//! Static location reference table.
//!
//! Carries the state and country short codes used on issued cards. Names
//! missing from the table fall back to the first two alphabetic characters
//! of the name, or "XX" when nothing alphabetic survives, so rendering
//! stays total.

use crate::ports::outbound::LocationCodeLookup;
use std::collections::HashMap;

const STATE_CODES: &[(&str, &str)] = &[
    ("TAMIL NADU", "TN"),
    ("KERALA", "KL"),
    ("KARNATAKA", "KA"),
    ("ANDHRA PRADESH", "AP"),
    ("TELANGANA", "TG"),
    ("MAHARASHTRA", "MH"),
    ("GUJARAT", "GJ"),
    ("RAJASTHAN", "RJ"),
    ("MADHYA PRADESH", "MP"),
    ("UTTAR PRADESH", "UP"),
    ("BIHAR", "BR"),
    ("WEST BENGAL", "WB"),
    ("ODISHA", "OR"),
    ("ASSAM", "AS"),
    ("PUNJAB", "PB"),
    ("HARYANA", "HR"),
    ("HIMACHAL PRADESH", "HP"),
    ("UTTARAKHAND", "UK"),
    ("JAMMU AND KASHMIR", "JK"),
    ("DELHI", "DL"),
    ("CHANDIGARH", "CH"),
    ("PUDUCHERRY", "PY"),
    ("GOA", "GA"),
    ("MEGHALAYA", "ML"),
    ("MANIPUR", "MN"),
    ("MIZORAM", "MZ"),
    ("NAGALAND", "NL"),
    ("TRIPURA", "TR"),
    ("SIKKIM", "SK"),
    ("ARUNACHAL PRADESH", "AR"),
    ("LADAKH", "LA"),
];

const COUNTRY_CODES: &[(&str, &str)] = &[
    ("INDIA", "IN"),
    ("UNITED STATES", "US"),
    ("UNITED KINGDOM", "UK"),
    ("CANADA", "CA"),
    ("AUSTRALIA", "AU"),
    ("GERMANY", "DE"),
    ("FRANCE", "FR"),
    ("JAPAN", "JP"),
    ("CHINA", "CN"),
    ("BRAZIL", "BR"),
    ("NEPAL", "NP"),
    ("BHUTAN", "BT"),
    ("BANGLADESH", "BD"),
    ("SRI LANKA", "LK"),
    ("MYANMAR", "MM"),
    ("THAILAND", "TH"),
    ("VIETNAM", "VN"),
    ("MALAYSIA", "MY"),
    ("SINGAPORE", "SG"),
    ("INDONESIA", "ID"),
    ("PHILIPPINES", "PH"),
];

pub struct StaticLocationTable {
    codes: HashMap<&'static str, &'static str>,
}

impl StaticLocationTable {
    pub fn new() -> Self {
        let codes = STATE_CODES
            .iter()
            .chain(COUNTRY_CODES.iter())
            .copied()
            .collect();
        Self { codes }
    }

    /// First two alphabetic characters, uppercased and padded with 'X'.
    fn normalize_two_letters(value: &str) -> String {
        let mut cleaned: String = value
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .take(2)
            .collect::<String>()
            .to_ascii_uppercase();
        while cleaned.len() < 2 {
            cleaned.push('X');
        }
        cleaned
    }
}

impl Default for StaticLocationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationCodeLookup for StaticLocationTable {
    fn code_for(&self, location_name: &str) -> String {
        let key = location_name.trim().to_ascii_uppercase();
        match self.codes.get(key.as_str()) {
            Some(code) => (*code).to_string(),
            None => Self::normalize_two_letters(&key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_state_and_country() {
        let table = StaticLocationTable::new();
        assert_eq!(table.code_for("Tamil Nadu"), "TN");
        assert_eq!(table.code_for("INDIA"), "IN");
    }

    #[test]
    fn test_unknown_name_falls_back_to_two_letters() {
        let table = StaticLocationTable::new();
        assert_eq!(table.code_for("Atlantis"), "AT");
        assert_eq!(table.code_for("Z-9"), "ZX");
    }

    #[test]
    fn test_empty_name_yields_placeholder() {
        let table = StaticLocationTable::new();
        assert_eq!(table.code_for(""), "XX");
        assert_eq!(table.code_for("  42  "), "XX");
    }
}
