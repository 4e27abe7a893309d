//! Entity classification and giant qualification.
//!
//! One pure function decides what a newly observed entity is, so the
//! metadata-string comparisons live in exactly one place. Faults
//! while reading the modifier list are caught here and downgrade the
//! entity to "no match"; they never reach the host.

use crate::host::GameEntity;
use crate::stats::stat_value;
use tracing::warn;

/// Metadata identifier of the ritual blocker obstacle.
pub const RITUAL_BLOCKER_METADATA: &str = "Metadata/Terrain/Leagues/Ritual/RitualBlocker";

/// Metadata identifier of the ritual rune boundary marker.
pub const RITUAL_RUNE_METADATA: &str = "Metadata/Terrain/Leagues/Ritual/RitualRuneObject";

/// Substring identifying the size-increasing "Gigantic" modifier.
pub const GIGANTISM_MOD_ID: &str = "MonsterSupporterGigantism1";

/// Minimum combined life percentage for a spawn to count (undamaged).
pub const MIN_COMBINED_LIFE_PCT: i32 = 100;

/// Minimum actor scale percentage for a spawn to count (fully grown).
pub const MIN_ACTOR_SCALE_PCT: i32 = 80;

/// What a newly observed entity is to the ritual tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Ignore,
    BlockerMarker,
    GiantCandidate,
    RuneMarker,
}

/// Classify an entity. Pure, no side effects beyond logging.
///
/// Checks run in priority order (blocker, candidate, rune). The
/// metadata identifiers differ, so no entity matches more than one in
/// practice; the order exists for determinism.
pub fn classify(entity: &dyn GameEntity) -> Classification {
    if !entity.is_valid() {
        return Classification::Ignore;
    }

    if entity.is_hostile() && entity.metadata() == RITUAL_BLOCKER_METADATA {
        return Classification::BlockerMarker;
    }

    if entity.is_hostile() && has_gigantism_mod(entity) {
        return Classification::GiantCandidate;
    }

    if entity.metadata() == RITUAL_RUNE_METADATA {
        return Classification::RuneMarker;
    }

    Classification::Ignore
}

/// True when the entity's magic properties carry the gigantism mod.
/// Absent capability, empty list, or a host read fault all mean no.
fn has_gigantism_mod(entity: &dyn GameEntity) -> bool {
    match entity.magic_mods() {
        Ok(Some(mods)) => mods.iter().any(|m| m.contains(GIGANTISM_MOD_ID)),
        Ok(None) => false,
        Err(err) => {
            warn!(entity_id = entity.id(), %err, "failed to read magic properties");
            false
        }
    }
}

/// Whether a giant candidate counts as a fully-grown, undamaged spawn.
pub fn is_qualifying(entity: &dyn GameEntity) -> bool {
    stat_value(entity.stats(), "CombinedLifePct") >= MIN_COMBINED_LIFE_PCT
        && stat_value(entity.stats(), "ActorScalePct") >= MIN_ACTOR_SCALE_PCT
}
