//! Outbound Ports (Driven Ports / SPI)

/// Location reference lookup.
///
/// Maps a location display name ("TAMIL NADU", "INDIA") to its short code.
/// Implementations must be pure lookups: same name, same code, no clock or
/// counter involvement. Unknown names still produce a usable code so that
/// identifier rendering never fails on reference-data gaps.
pub trait LocationCodeLookup: Send + Sync {
    fn code_for(&self, location_name: &str) -> String;
}
