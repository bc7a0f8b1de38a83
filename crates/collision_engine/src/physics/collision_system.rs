//! Core collision detection system
//!
//! Two-phase query over a pair of triangles: a bounding-sphere broad phase
//! rejects pairs that cannot touch, and only the survivors reach the exact
//! narrow phase.
//!
//! The narrow phase is a pluggable [`NarrowPhase`] so it can be swapped or
//! instrumented without changing the orchestration.

use std::fmt;

use log::{debug, warn};

use crate::core::config::NarrowPhaseTolerances;
use crate::physics::collision::intersection::triangle_pierces_with;
use crate::physics::collision::{CollisionMesh, Triangle};

/// Tri-state result of one collision phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionVerdict {
    /// Tested, not colliding
    No,
    /// Tested, colliding
    Yes,
    /// Skipped because an earlier phase already ruled out a collision
    NotChecked,
}

impl CollisionVerdict {
    /// `Yes` for true, `No` for false
    pub fn from_hit(hit: bool) -> Self {
        if hit { Self::Yes } else { Self::No }
    }

    /// True only for `Yes`
    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }
}

impl fmt::Display for CollisionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::No => "COLLISION_NO",
            Self::Yes => "COLLISION_YES",
            Self::NotChecked => "COLLISION_NOT_CHECKED",
        };
        f.pad(label)
    }
}

/// Broad- and narrow-phase verdicts for one triangle pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairVerdict {
    /// Bounding-sphere overlap (never `NotChecked`)
    pub spheres: CollisionVerdict,
    /// Triangle intersection; `NotChecked` when the spheres do not overlap
    pub triangles: CollisionVerdict,
}

impl PairVerdict {
    /// The verdict for a pair the broad phase rejected
    pub const SEPARATED: Self = Self {
        spheres: CollisionVerdict::No,
        triangles: CollisionVerdict::NotChecked,
    };

    /// True if the triangles themselves collide
    pub fn is_colliding(&self) -> bool {
        self.triangles.is_yes()
    }
}

/// Verdicts for a pair of collision meshes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshVerdict {
    /// Overlap of the two meshes' enclosing spheres
    pub spheres: CollisionVerdict,
    /// Whether any triangle pair collides
    pub triangles: CollisionVerdict,
    /// Indices of the first colliding triangle pair found
    pub hit: Option<(usize, usize)>,
}

/// Trait for the exact, one-directional triangle test
///
/// Implementations answer whether `b` passes through `a`. The collision
/// system calls it in both directions.
pub trait NarrowPhase: Send {
    /// True if an edge of `b` passes through the interior of `a`
    fn pierces(&self, a: &Triangle, b: &Triangle) -> bool;

    /// Returns the narrow phase strategy name
    fn name(&self) -> &str;
}

/// Edge/plane crossing plus angle-sum inside test
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleSumNarrowPhase {
    tolerances: NarrowPhaseTolerances,
}

impl AngleSumNarrowPhase {
    /// Create with explicit tolerances
    pub fn new(tolerances: NarrowPhaseTolerances) -> Self {
        Self { tolerances }
    }

    /// Tolerances in use
    pub fn tolerances(&self) -> &NarrowPhaseTolerances {
        &self.tolerances
    }
}

impl NarrowPhase for AngleSumNarrowPhase {
    fn pierces(&self, a: &Triangle, b: &Triangle) -> bool {
        triangle_pierces_with(a, b, &self.tolerances)
    }

    fn name(&self) -> &str {
        "angle_sum"
    }
}

/// Two-phase triangle collision system
pub struct PairCollisionSystem {
    narrow_phase: Box<dyn NarrowPhase>,
}

impl PairCollisionSystem {
    /// Create a collision system with the given narrow phase
    pub fn new(narrow_phase: Box<dyn NarrowPhase>) -> Self {
        Self { narrow_phase }
    }

    /// Create a collision system using [`AngleSumNarrowPhase`] with `tolerances`
    pub fn with_tolerances(tolerances: NarrowPhaseTolerances) -> Self {
        Self::new(Box::new(AngleSumNarrowPhase::new(tolerances)))
    }

    /// Name of the narrow phase in use
    pub fn narrow_phase_name(&self) -> &str {
        self.narrow_phase.name()
    }

    /// Broad phase: do the cached bounding spheres overlap?
    ///
    /// Uses the spheres as stored; a sphere left stale by a direct vertex
    /// edit is not recomputed here.
    pub fn broad_phase(&self, a: &Triangle, b: &Triangle) -> CollisionVerdict {
        CollisionVerdict::from_hit(a.bounding_sphere.intersects(&b.bounding_sphere))
    }

    /// Narrow phase: `b` through `a`, then `a` through `b`
    pub fn narrow_phase(&self, a: &Triangle, b: &Triangle) -> CollisionVerdict {
        if a.is_degenerate() || b.is_degenerate() {
            warn!("narrow phase on a degenerate triangle; result is unreliable");
        }

        if self.narrow_phase.pierces(a, b) {
            return CollisionVerdict::Yes;
        }

        // One direction misses cases where only the other triangle's edges cross
        CollisionVerdict::from_hit(self.narrow_phase.pierces(b, a))
    }

    /// Full pair query: broad phase, then narrow phase only if needed
    pub fn test_pair(&self, a: &Triangle, b: &Triangle) -> PairVerdict {
        if !self.broad_phase(a, b).is_yes() {
            debug!("bounding spheres apart, narrow phase skipped");
            return PairVerdict::SEPARATED;
        }

        let triangles = self.narrow_phase(a, b);
        debug!("bounding spheres overlap, triangles {}", triangles);

        PairVerdict {
            spheres: CollisionVerdict::Yes,
            triangles,
        }
    }

    /// Mesh query: enclosing spheres, then every triangle pair until a hit
    pub fn test_meshes(&self, a: &CollisionMesh, b: &CollisionMesh) -> MeshVerdict {
        if !a.bounding_sphere().intersects(b.bounding_sphere()) {
            return MeshVerdict {
                spheres: CollisionVerdict::No,
                triangles: CollisionVerdict::NotChecked,
                hit: None,
            };
        }

        for (i, tri_a) in a.triangles().iter().enumerate() {
            for (j, tri_b) in b.triangles().iter().enumerate() {
                if self.test_pair(tri_a, tri_b).is_colliding() {
                    return MeshVerdict {
                        spheres: CollisionVerdict::Yes,
                        triangles: CollisionVerdict::Yes,
                        hit: Some((i, j)),
                    };
                }
            }
        }

        MeshVerdict {
            spheres: CollisionVerdict::Yes,
            triangles: CollisionVerdict::No,
            hit: None,
        }
    }
}

impl Default for PairCollisionSystem {
    fn default() -> Self {
        Self::new(Box::new(AngleSumNarrowPhase::default()))
    }
}

/// Query one triangle pair with the default narrow phase
pub fn test_triangle_pair(a: &Triangle, b: &Triangle) -> PairVerdict {
    PairCollisionSystem::default().test_pair(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::physics::collision::triangle_pierces;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts calls and forwards to the real test
    struct CountingNarrowPhase {
        calls: Arc<AtomicUsize>,
    }

    impl NarrowPhase for CountingNarrowPhase {
        fn pierces(&self, a: &Triangle, b: &Triangle) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            triangle_pierces(a, b)
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    fn counting_system() -> (PairCollisionSystem, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let system = PairCollisionSystem::new(Box::new(CountingNarrowPhase { calls: Arc::clone(&calls) }));
        (system, calls)
    }

    fn sample_small() -> Triangle {
        Triangle::new(Vec3::new(1.0, -1.0, 1.0), Vec3::new(-1.0, 1.0, 1.0), Vec3::new(-3.0, -1.0, 1.0))
    }

    fn sample_large() -> Triangle {
        Triangle::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -2.0, 2.0), Vec3::new(0.0, -2.0, -2.0))
    }

    fn flat() -> Triangle {
        Triangle::new(Vec3::new(-10.0, -10.0, 0.0), Vec3::new(10.0, -10.0, 0.0), Vec3::new(0.0, 10.0, 0.0))
    }

    fn upright() -> Triangle {
        Triangle::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(1.0, 0.0, 1.0), Vec3::new(-1.0, 0.0, 1.0))
    }

    #[test]
    fn test_sample_scenario_baseline() {
        let small = sample_small();
        let large = sample_large();
        let system = PairCollisionSystem::default();

        assert_eq!(system.broad_phase(&small, &large), CollisionVerdict::Yes);
        assert_eq!(
            system.test_pair(&small, &large),
            PairVerdict { spheres: CollisionVerdict::Yes, triangles: CollisionVerdict::Yes }
        );
    }

    #[test]
    fn test_far_pair_skips_narrow_phase() {
        let (system, calls) = counting_system();
        let a = Triangle::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let mut b = a;
        b.translate(&Vec3::new(100.0, 0.0, 0.0));

        assert!(a.bounding_sphere.radius < 2.0);
        assert_eq!(system.test_pair(&a, &b), PairVerdict::SEPARATED);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_overlapping_pair_runs_narrow_phase() {
        let (system, calls) = counting_system();

        // First direction hits, second is never needed
        let verdict = system.test_pair(&flat(), &upright());
        assert!(verdict.is_colliding());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_miss_runs_both_directions() {
        let (system, calls) = counting_system();
        let a = Triangle::new(Vec3::zeros(), Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0));
        let mut b = a;
        b.translate(&Vec3::new(0.0, 0.0, 1.0));

        let verdict = system.test_pair(&a, &b);
        assert_eq!(verdict, PairVerdict { spheres: CollisionVerdict::Yes, triangles: CollisionVerdict::No });
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_second_direction_catches_one_way_miss() {
        let small = upright();
        let big = flat();

        // Checking big's edges against small finds nothing...
        assert!(!triangle_pierces(&small, &big));

        // ...but the reverse direction does
        let verdict = test_triangle_pair(&small, &big);
        assert_eq!(verdict.spheres, CollisionVerdict::Yes);
        assert_eq!(verdict.triangles, CollisionVerdict::Yes);
    }

    #[test]
    fn test_pair_query_is_order_independent() {
        let system = PairCollisionSystem::default();
        let pairs = [
            (sample_small(), sample_large()),
            (flat(), upright()),
        ];
        for (a, b) in &pairs {
            assert_eq!(system.test_pair(a, b), system.test_pair(b, a));
        }
    }

    #[test]
    fn test_stale_sphere_is_used_as_is() {
        let system = PairCollisionSystem::default();
        let a = sample_large();
        let mut b = sample_small();

        // Move b far away without refreshing its sphere
        for v in [&mut b.v0, &mut b.v1, &mut b.v2] {
            v.x += 100.0;
        }
        assert_eq!(system.broad_phase(&a, &b), CollisionVerdict::Yes);

        b.refresh_bounding_sphere();
        assert_eq!(system.test_pair(&a, &b), PairVerdict::SEPARATED);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(CollisionVerdict::No.to_string(), "COLLISION_NO");
        assert_eq!(CollisionVerdict::Yes.to_string(), "COLLISION_YES");
        assert_eq!(CollisionVerdict::NotChecked.to_string(), "COLLISION_NOT_CHECKED");
    }

    #[test]
    fn test_mesh_query() {
        let system = PairCollisionSystem::default();
        let plate = CollisionMesh::try_from_triangles(vec![
            Triangle::new(Vec3::new(-10.0, -10.0, 0.0), Vec3::new(10.0, -10.0, 0.0), Vec3::new(10.0, 10.0, 0.0)),
            Triangle::new(Vec3::new(-10.0, -10.0, 0.0), Vec3::new(10.0, 10.0, 0.0), Vec3::new(-10.0, 10.0, 0.0)),
        ])
        .unwrap();

        // Pierces the second plate triangle only
        let mut spike = CollisionMesh::try_from_triangles(vec![Triangle::new(
            Vec3::new(-5.0, 5.0, -1.0),
            Vec3::new(-4.0, 5.0, 1.0),
            Vec3::new(-6.0, 5.0, 1.0),
        )])
        .unwrap();

        let verdict = system.test_meshes(&plate, &spike);
        assert_eq!(verdict.spheres, CollisionVerdict::Yes);
        assert_eq!(verdict.triangles, CollisionVerdict::Yes);
        assert_eq!(verdict.hit, Some((1, 0)));

        spike.translate(&Vec3::new(0.0, 0.0, 5.0));
        let verdict = system.test_meshes(&plate, &spike);
        assert_eq!(verdict.spheres, CollisionVerdict::Yes);
        assert_eq!(verdict.triangles, CollisionVerdict::No);
        assert_eq!(verdict.hit, None);

        spike.translate(&Vec3::new(0.0, 0.0, 100.0));
        let verdict = system.test_meshes(&plate, &spike);
        assert_eq!(verdict.spheres, CollisionVerdict::No);
        assert_eq!(verdict.triangles, CollisionVerdict::NotChecked);
    }

    #[test]
    fn test_custom_tolerances_are_used() {
        let system = PairCollisionSystem::with_tolerances(NarrowPhaseTolerances::default());
        assert_eq!(system.narrow_phase_name(), "angle_sum");
    }
}
