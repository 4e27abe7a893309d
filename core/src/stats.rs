//! Stat extraction from the host's unordered stat tables.

use crate::host::StatEntry;

/// Look up a stat by substring match on its display name.
///
/// Returns the value of the first entry whose name contains `name`,
/// or 0 when the table is absent or nothing matches. The host does
/// not guarantee table order, so when two stat names both contain the
/// needle the winner is unspecified; callers pick needles that are
/// unambiguous in practice, but the collision risk is inherent to the
/// host data.
pub fn stat_value(stats: Option<&[StatEntry]>, name: &str) -> i32 {
    let Some(stats) = stats else {
        return 0;
    };
    stats
        .iter()
        .find(|entry| entry.name.contains(name))
        .map(|entry| entry.value)
        .unwrap_or(0)
}
