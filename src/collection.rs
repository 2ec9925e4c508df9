//! Ordered storage for every live entity plus per-category id sets.
//!
//! All entities live in a single insertion-ordered list; the enemy and cloud
//! sets hold ids into it. Inserts and removals always touch both so the sets
//! never disagree about membership.

use glam::Vec2;

use crate::entity::{Category, EntityId, EntityKind, GameEntity};

/// Insertion-ordered set of entities grouped by category.
#[derive(Debug, Clone, Default)]
pub struct EntityCollection {
    all: Vec<GameEntity>,
    enemies: Vec<EntityId>,
    clouds: Vec<EntityId>,
    next_id: u64,
}

impl EntityCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity and returns its freshly assigned id.
    ///
    /// Enemies and clouds are also recorded in their category set.
    pub fn insert(
        &mut self,
        kind: EntityKind,
        position: Vec2,
        velocity: Vec2,
        extent: Vec2,
    ) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.all.push(GameEntity {
            id,
            kind,
            position,
            velocity,
            extent,
        });
        match kind.category() {
            Category::Enemy => self.enemies.push(id),
            Category::Cloud => self.clouds.push(id),
            Category::Player => {}
        }
        id
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&GameEntity> {
        self.all.iter().find(|entity| entity.id == id)
    }

    /// Looks up an entity by id for mutation.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut GameEntity> {
        self.all.iter_mut().find(|entity| entity.id == id)
    }

    /// Returns `true` if an entity with `id` is present.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over every entity in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GameEntity> {
        self.all.iter()
    }

    /// Iterates mutably over every entity in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut GameEntity> {
        self.all.iter_mut()
    }

    /// Returns the ids in one category set, in insertion order.
    ///
    /// The player is not tracked in a category set, so `Category::Player`
    /// yields an empty slice.
    #[must_use]
    pub fn ids(&self, category: Category) -> &[EntityId] {
        match category {
            Category::Enemy => &self.enemies,
            Category::Cloud => &self.clouds,
            Category::Player => &[],
        }
    }

    /// Iterates over the entities of one category set.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &GameEntity> {
        self.ids(category).iter().filter_map(|&id| self.get(id))
    }

    /// Number of entities in the all-entities set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Returns `true` if the collection holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Counts the entities of one category.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Player => self
                .all
                .iter()
                .filter(|entity| entity.kind.category() == Category::Player)
                .count(),
            Category::Enemy | Category::Cloud => self.ids(category).len(),
        }
    }

    /// Removes every entity of `category` for which `should_remove` returns
    /// `true`, dropping it from both the category set and the all-entities
    /// set. Returns the removed ids in category order.
    ///
    /// The player category is never pruned.
    pub fn remove_where<F>(&mut self, category: Category, mut should_remove: F) -> Vec<EntityId>
    where
        F: FnMut(&GameEntity) -> bool,
    {
        let doomed: Vec<EntityId> = self
            .in_category(category)
            .filter(|entity| should_remove(entity))
            .map(|entity| entity.id)
            .collect();
        if doomed.is_empty() {
            return doomed;
        }
        self.all.retain(|entity| !doomed.contains(&entity.id));
        match category {
            Category::Enemy => self.enemies.retain(|id| !doomed.contains(id)),
            Category::Cloud => self.clouds.retain(|id| !doomed.contains(id)),
            Category::Player => {}
        }
        doomed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn cloud(scale: u8) -> EntityKind {
        EntityKind::Cloud { scale }
    }

    #[fixture]
    fn populated() -> EntityCollection {
        let mut collection = EntityCollection::new();
        collection.insert(EntityKind::Player, Vec2::ZERO, Vec2::ZERO, Vec2::ONE);
        for y in [10.0, -5.0, 20.0] {
            collection.insert(EntityKind::Enemy, Vec2::new(0.0, y), Vec2::ZERO, Vec2::ONE);
        }
        collection.insert(cloud(1), Vec2::new(0.0, -100.0), Vec2::ZERO, Vec2::ONE);
        collection
    }

    fn assert_consistent(collection: &EntityCollection) {
        for category in [Category::Enemy, Category::Cloud] {
            for &id in collection.ids(category) {
                let entity = collection
                    .get(id)
                    .unwrap_or_else(|| panic!("{id} is in a category set but not in all"));
                assert_eq!(entity.kind.category(), category);
            }
        }
        for entity in collection.iter() {
            let category = entity.kind.category();
            if category != Category::Player {
                assert!(
                    collection.ids(category).contains(&entity.id),
                    "{} missing from its category set",
                    entity.id
                );
            }
        }
    }

    #[rstest]
    fn insert_assigns_unique_ids_and_tracks_categories(populated: EntityCollection) {
        assert_eq!(populated.len(), 5);
        assert_eq!(populated.count(Category::Player), 1);
        assert_eq!(populated.count(Category::Enemy), 3);
        assert_eq!(populated.count(Category::Cloud), 1);
        let mut ids: Vec<_> = populated.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_consistent(&populated);
    }

    #[rstest]
    fn remove_where_drops_from_both_sets(mut populated: EntityCollection) {
        let removed = populated.remove_where(Category::Enemy, |e| e.position.y < 0.0);
        assert_eq!(removed.len(), 1);
        assert!(!populated.contains(removed[0]));
        assert_eq!(populated.count(Category::Enemy), 2);
        assert_eq!(populated.len(), 4);
        assert_consistent(&populated);
    }

    #[rstest]
    fn remove_where_only_touches_requested_category(mut populated: EntityCollection) {
        let removed = populated.remove_where(Category::Cloud, |_| true);
        assert_eq!(removed.len(), 1);
        assert_eq!(populated.count(Category::Enemy), 3);
        assert_eq!(populated.count(Category::Cloud), 0);
        assert_consistent(&populated);
    }

    #[rstest]
    fn player_category_is_never_pruned(mut populated: EntityCollection) {
        let removed = populated.remove_where(Category::Player, |_| true);
        assert!(removed.is_empty());
        assert_eq!(populated.count(Category::Player), 1);
    }

    #[rstest]
    fn insertion_order_is_preserved(populated: EntityCollection) {
        let ys: Vec<f32> = populated
            .in_category(Category::Enemy)
            .map(|e| e.position.y)
            .collect();
        assert_eq!(ys, vec![10.0, -5.0, 20.0]);
    }
}
