//! Pure identifier renderings.
//!
//! Deterministic given their inputs. No clocks, no counters, no hidden
//! state: a truncated-timestamp fallback is exactly the kind of
//! pseudo-uniqueness this module exists to rule out.

use shared_types::HolderType;

/// Render a sequential business code: `{prefix}-{seq:05}`.
///
/// Used for farmer/employee/organization entity codes, e.g. `FRM-00042`.
pub fn sequential_code(prefix: &str, reserved_sequence: u64) -> String {
    format!("{prefix}-{reserved_sequence:05}")
}

/// Render a composite credential identifier:
/// `{holder tag}{state code}{country code}{seq:04}`, e.g. `FRMTNIN0007`.
pub fn composite_code(
    holder_type: HolderType,
    state_code: &str,
    country_code: &str,
    reserved_sequence: u64,
) -> String {
    format!(
        "{}{}{}{:04}",
        holder_type.tag(),
        state_code,
        country_code,
        reserved_sequence
    )
}
