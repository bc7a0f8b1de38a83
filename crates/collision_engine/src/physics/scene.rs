//! A set of triangles queried pairwise
//!
//! Triangles live in a slot map so handles stay valid across removals. The
//! scene owns the triangles but not their update cadence: callers mutate them
//! between queries and refresh spheres after direct vertex edits.

use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::Vec3;
use crate::physics::collision::Triangle;
use crate::physics::collision_system::{PairCollisionSystem, PairVerdict};

new_key_type! {
    /// Handle to a triangle in a [`CollisionScene`]
    pub struct TriangleKey;
}

/// One entry of [`CollisionScene::query_all`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenePair {
    /// First triangle
    pub a: TriangleKey,
    /// Second triangle
    pub b: TriangleKey,
    /// Verdicts for the pair
    pub verdict: PairVerdict,
}

/// Triangles plus the collision system used to query them
pub struct CollisionScene {
    triangles: SlotMap<TriangleKey, Triangle>,
    system: PairCollisionSystem,
}

impl CollisionScene {
    /// Create an empty scene using `system` for queries
    pub fn new(system: PairCollisionSystem) -> Self {
        Self {
            triangles: SlotMap::with_key(),
            system,
        }
    }

    /// Add a triangle
    pub fn insert(&mut self, triangle: Triangle) -> TriangleKey {
        self.triangles.insert(triangle)
    }

    /// Remove a triangle, returning it if the key was live
    pub fn remove(&mut self, key: TriangleKey) -> Option<Triangle> {
        self.triangles.remove(key)
    }

    /// Look up a triangle
    pub fn get(&self, key: TriangleKey) -> Option<&Triangle> {
        self.triangles.get(key)
    }

    /// Mutable access; refresh the sphere after editing vertices directly
    pub fn get_mut(&mut self, key: TriangleKey) -> Option<&mut Triangle> {
        self.triangles.get_mut(key)
    }

    /// Move a triangle and its sphere; false if the key is stale
    pub fn translate(&mut self, key: TriangleKey, offset: &Vec3) -> bool {
        match self.triangles.get_mut(key) {
            Some(triangle) => {
                triangle.translate(offset);
                true
            }
            None => false,
        }
    }

    /// Number of triangles
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True if the scene has no triangles
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Query one pair; `None` if either key is stale
    pub fn query(&self, a: TriangleKey, b: TriangleKey) -> Option<PairVerdict> {
        let tri_a = self.triangles.get(a)?;
        let tri_b = self.triangles.get(b)?;
        Some(self.system.test_pair(tri_a, tri_b))
    }

    /// Query every unordered pair, in slot order
    pub fn query_all(&self) -> Vec<ScenePair> {
        let entries: Vec<(TriangleKey, &Triangle)> = self.triangles.iter().collect();
        let mut pairs = Vec::with_capacity(entries.len() * entries.len().saturating_sub(1) / 2);

        for (i, (key_a, tri_a)) in entries.iter().enumerate() {
            for (key_b, tri_b) in &entries[i + 1..] {
                pairs.push(ScenePair {
                    a: *key_a,
                    b: *key_b,
                    verdict: self.system.test_pair(tri_a, tri_b),
                });
            }
        }

        pairs
    }

    /// Pairs whose triangles collide
    pub fn colliding_pairs(&self) -> Vec<ScenePair> {
        self.query_all()
            .into_iter()
            .filter(|pair| pair.verdict.is_colliding())
            .collect()
    }
}

impl Default for CollisionScene {
    fn default() -> Self {
        Self::new(PairCollisionSystem::default())
    }
}
