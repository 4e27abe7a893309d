//! Ritual spawn/blocker tracker.
//!
//! Pure storage plus the per-tick bookkeeping that turns entity
//! observations into a per-area spawn history:
//! - classify newly discovered entities and file them,
//! - confirm tracked giants once they pass the stat thresholds,
//!   deduplicating spawn positions by grid coordinate,
//! - attribute each confirmed spawn to every blocker in range.
//!
//! All collections are scoped to one area instance; `area_changed` is
//! the only reset path. The renderer reads the accessors and never
//! mutates.

use crate::classify::{classify, is_qualifying, Classification};
use crate::grid::GridPos;
use crate::host::{EntityId, EntityLookup, GameEntity};
use hashbrown::HashMap;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Two blocker observations closer than this are the same obstacle.
pub const BLOCKER_DEDUP_RADIUS: f32 = 5.0;

/// A spawn within this range of a blocker credits it (inclusive).
pub const SPAWN_CREDIT_RADIUS: f32 = 105.0;

/// One tracked ritual blocker and its running spawn count.
///
/// `count` starts at the negative sum of all existing blockers'
/// counts, so a late-arriving blocker reads zero until fresh spawns
/// land near it: the displayed number is "net new spawns since this
/// blocker appeared", not an absolute total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockerMarker {
    pub entity_id: EntityId,
    pub position: GridPos,
    pub count: i32,
}

/// Stateful core of the overlay. Owns every per-area collection.
#[derive(Debug, Default)]
pub struct RitualTracker {
    /// Giant candidates currently under observation, by host id.
    giants: HashSet<EntityId>,
    /// Ids already converted into a spawn record this area.
    processed: HashSet<EntityId>,
    /// Confirmed spawn positions, deduplicated by grid coordinate.
    spawns: HashSet<GridPos>,
    /// Spawns confirmed within blocker range at recording time.
    inside_ritual_spawns: HashSet<GridPos>,
    /// Blockers in creation order.
    blockers: Vec<BlockerMarker>,
    /// Rune boundary markers, position fixed at first observation.
    runes: HashMap<EntityId, GridPos>,
}

impl RitualTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Read access (renderer) ---

    pub fn tracked_giants(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.giants.iter().copied()
    }

    pub fn spawn_positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.spawns.iter().copied()
    }

    pub fn inside_ritual_spawns(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.inside_ritual_spawns.iter().copied()
    }

    pub fn blockers(&self) -> &[BlockerMarker] {
        &self.blockers
    }

    pub fn runes(&self) -> impl Iterator<Item = (EntityId, GridPos)> + '_ {
        self.runes.iter().map(|(&id, &pos)| (id, pos))
    }

    // --- Lifecycle ---

    /// Classify a newly observed entity and file it.
    pub fn entity_discovered(&mut self, entity: &dyn GameEntity) {
        match classify(entity) {
            Classification::BlockerMarker => self.add_blocker(entity),
            Classification::GiantCandidate => self.add_candidate(entity),
            Classification::RuneMarker => {
                self.runes.insert(entity.id(), entity.grid_pos());
            }
            Classification::Ignore => {}
        }
    }

    /// Reset every collection. The sole path that shrinks state apart
    /// from dead-giant removal in [`tick`](Self::tick).
    pub fn area_changed(&mut self) {
        self.giants.clear();
        self.processed.clear();
        self.spawns.clear();
        self.inside_ritual_spawns.clear();
        self.blockers.clear();
        self.runes.clear();
    }

    /// Re-examine every tracked giant against the live entity list.
    ///
    /// Two passes: first collect confirmations and removals without
    /// touching the tracked set, then apply them. A giant that died
    /// the same tick it reached full stats is still credited with its
    /// spawn. Non-qualifying giants stay unprocessed and are retried
    /// every tick until they die; stats can still change under them.
    pub fn tick(&mut self, entities: &dyn EntityLookup) {
        let mut confirmed: Vec<(EntityId, GridPos)> = Vec::new();
        let mut removals: Vec<EntityId> = Vec::new();

        for &id in &self.giants {
            let Some(entity) = entities.entity(id) else {
                // Id no longer resolves: permanently invalid.
                removals.push(id);
                continue;
            };

            if !self.processed.contains(&id) && !entity.is_dead() && entity.is_valid() {
                if is_qualifying(entity) {
                    confirmed.push((id, entity.grid_pos()));
                } else {
                    debug!(entity_id = id, "giant not yet qualifying, will retry");
                }
            }

            if entity.is_dead() {
                removals.push(id);
            }
        }

        for (id, position) in confirmed {
            self.record_spawn(position);
            self.processed.insert(id);
            info!(entity_id = id, %position, "gigantic spawn confirmed");
        }

        for id in removals {
            self.giants.remove(&id);
        }
    }

    // --- Internals ---

    /// Track a new blocker unless one already sits at (nearly) the
    /// same spot. Initial count is the negative sum of all existing
    /// counts; see [`BlockerMarker`].
    fn add_blocker(&mut self, entity: &dyn GameEntity) {
        let position = entity.grid_pos();

        if let Some(existing) = self
            .blockers
            .iter()
            .find(|b| b.position.distance_to(position) < BLOCKER_DEDUP_RADIUS)
        {
            debug!(
                entity_id = entity.id(),
                %position,
                existing = %existing.position,
                "blocker ignored, too close to an existing one"
            );
            return;
        }

        let baseline: i32 = self.blockers.iter().map(|b| b.count).sum();
        let blocker = BlockerMarker {
            entity_id: entity.id(),
            position,
            count: -baseline,
        };
        info!(
            entity_id = blocker.entity_id,
            %position,
            initial_count = blocker.count,
            "ritual blocker added"
        );
        self.blockers.push(blocker);
    }

    /// Start observing a giant candidate if it already qualifies.
    fn add_candidate(&mut self, entity: &dyn GameEntity) {
        if is_qualifying(entity) {
            info!(entity_id = entity.id(), pos = %entity.grid_pos(), "gigantic candidate tracked");
            self.giants.insert(entity.id());
        } else {
            debug!(entity_id = entity.id(), "gigantic candidate skipped (damaged or scaled down)");
        }
    }

    /// Record one confirmed spawn position and credit nearby blockers.
    /// Inserting an already-known position is a no-op on the set.
    fn record_spawn(&mut self, position: GridPos) {
        self.spawns.insert(position);

        let mut in_blocker_range = false;
        for blocker in &mut self.blockers {
            let distance = blocker.position.distance_to(position);
            if distance <= SPAWN_CREDIT_RADIUS {
                blocker.count += 1;
                in_blocker_range = true;
                debug!(
                    blocker = %blocker.position,
                    count = blocker.count,
                    distance,
                    "blocker credited"
                );
            }
        }

        if in_blocker_range {
            self.inside_ritual_spawns.insert(position);
        }
    }
}
