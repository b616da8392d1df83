//! Seeded placement of agents inside a rectangular area.
use glam::DVec2;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::rng::UnitRandom;
use crate::vector_math::{distance, Point2D};
use crate::{WAVE_BASE_COUNT, WAVE_INCREMENT, WAVE_MAX_LEVEL, WAVE_SEED_STRIDE};

/// Axis-aligned rectangle agents are spawned in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnArea {
    /// Lower-left corner.
    pub min: Point2D,
    /// Upper-right corner.
    pub max: Point2D,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self {
            min: DVec2::new(60.0, 60.0),
            max: DVec2::new(740.0, 540.0),
        }
    }
}

impl SpawnArea {
    /// Whether the rectangle has finite corners with `min <= max`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    /// Clamps `point` into the rectangle.
    #[must_use]
    pub fn clamp(&self, point: Point2D) -> Point2D {
        point.clamp(self.min, self.max)
    }

    /// Moves `position` by `velocity` over `dt` seconds, reflecting off the
    /// edges.
    ///
    /// The returned position is clamped into the rectangle and each velocity
    /// component is negated when its edge was crossed.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use prowl::spawn::SpawnArea;
    /// let area = SpawnArea::default();
    /// let (pos, vel) = area.bounce(DVec2::new(735.0, 300.0), DVec2::new(120.0, 0.0), 0.1);
    /// assert_eq!(pos, DVec2::new(740.0, 300.0));
    /// assert_eq!(vel, DVec2::new(-120.0, 0.0));
    /// ```
    #[must_use]
    pub fn bounce(&self, position: Point2D, velocity: Point2D, dt: f64) -> (Point2D, Point2D) {
        let next = position + velocity * dt;
        let clamped = self.clamp(next);
        let hit = clamped.cmpne(next);
        let mut velocity = velocity;
        if hit.x {
            velocity.x = -velocity.x;
        }
        if hit.y {
            velocity.y = -velocity.y;
        }
        (clamped, velocity)
    }

    fn sample(&self, rng: &mut impl UnitRandom) -> Point2D {
        let x = rng.between(self.min.x, self.max.x);
        let y = rng.between(self.min.y, self.max.y);
        DVec2::new(x, y).floor()
    }
}

/// A disc spawns must stay out of, usually around the player's start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeepOut {
    /// Centre of the disc.
    pub centre: Point2D,
    /// Candidates strictly closer than this are redrawn.
    pub radius: f64,
}

impl KeepOut {
    fn allows(&self, point: Point2D) -> bool {
        distance(point, self.centre) >= self.radius
    }
}

/// Draws up to `count` positions at least `min_spacing` apart.
///
/// Each position gets `max_attempts` candidates; the first one far enough
/// from every accepted position, and outside `keep_out`, wins. When all
/// attempts fail the position is skipped, so fewer than `count` points may
/// come back. Coordinates are floored to whole units.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use prowl::rng::SeededLcg;
/// use prowl::spawn::{scatter, KeepOut, SpawnArea};
/// let centre = KeepOut { centre: DVec2::new(400.0, 300.0), radius: 100.0 };
/// let points = scatter(&mut SeededLcg::new(1000), 5, &SpawnArea::default(), 80.0, Some(centre), 50);
/// let again = scatter(&mut SeededLcg::new(1000), 5, &SpawnArea::default(), 80.0, Some(centre), 50);
/// assert_eq!(points, again);
/// ```
pub fn scatter(
    rng: &mut impl UnitRandom,
    count: usize,
    area: &SpawnArea,
    min_spacing: f64,
    keep_out: Option<KeepOut>,
    max_attempts: u32,
) -> Vec<Point2D> {
    let mut accepted: Vec<Point2D> = Vec::with_capacity(count);
    for index in 0..count {
        let placed = (0..max_attempts)
            .map(|_| area.sample(&mut *rng))
            .find(|candidate| {
                keep_out.is_none_or(|zone| zone.allows(*candidate))
                    && accepted
                        .iter()
                        .all(|other| distance(*candidate, *other) >= min_spacing)
            });
        match placed {
            Some(point) => accepted.push(point),
            None => warn!("no room for spawn {index} after {max_attempts} attempts"),
        }
    }
    debug!("scattered {} of {count} spawn points", accepted.len());
    accepted
}

/// Enemy counts and seeds for a sequence of levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WavePlan {
    /// Enemies in level one.
    pub base_count: u32,
    /// Enemies added per subsequent level.
    pub increment: u32,
    /// Last level of the plan.
    pub max_level: u32,
}

impl Default for WavePlan {
    fn default() -> Self {
        Self {
            base_count: WAVE_BASE_COUNT,
            increment: WAVE_INCREMENT,
            max_level: WAVE_MAX_LEVEL,
        }
    }
}

impl WavePlan {
    /// Number of enemies in `level` (1-based), saturating at `u32::MAX`.
    ///
    /// # Examples
    /// ```
    /// use prowl::spawn::WavePlan;
    /// let plan = WavePlan::default();
    /// assert_eq!(plan.enemy_count(1), 15);
    /// assert_eq!(plan.enemy_count(5), 23);
    /// ```
    #[must_use]
    pub const fn enemy_count(&self, level: u32) -> u32 {
        self.base_count
            .saturating_add(level.saturating_sub(1).saturating_mul(self.increment))
    }

    /// Seed used to place the enemies of `level`.
    #[must_use]
    pub const fn seed(&self, level: u32) -> u64 {
        level as u64 * WAVE_SEED_STRIDE
    }

    /// Whether `level` is the final one.
    #[must_use]
    pub const fn is_last(&self, level: u32) -> bool {
        level >= self.max_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{DeterministicRng, SeededLcg};
    use rstest::rstest;

    #[rstest]
    #[case::lcg(1000)]
    #[case::other_seed(5000)]
    fn scattered_points_respect_spacing(#[case] seed: u64) {
        let area = SpawnArea::default();
        let points = scatter(&mut SeededLcg::new(seed), 12, &area, 80.0, None, 50);
        assert!(!points.is_empty());
        for (i, a) in points.iter().enumerate() {
            assert!(area.min.cmple(*a).all() && a.cmple(area.max).all());
            assert_eq!(*a, a.floor());
            for b in points.iter().skip(i + 1) {
                assert!(distance(*a, *b) >= 80.0, "{a:?} and {b:?} too close");
            }
        }
    }

    #[test]
    fn impossible_spacing_drops_points() {
        let area = SpawnArea {
            min: DVec2::ZERO,
            max: DVec2::new(10.0, 10.0),
        };
        let points = scatter(&mut DeterministicRng::new(3), 4, &area, 100.0, None, 10);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn zero_attempts_place_nothing() {
        let points = scatter(&mut SeededLcg::new(1), 3, &SpawnArea::default(), 0.0, None, 0);
        assert!(points.is_empty());
    }

    #[rstest]
    #[case::level_one(1000)]
    #[case::level_three(3000)]
    fn keep_out_disc_stays_empty(#[case] seed: u64) {
        let zone = KeepOut {
            centre: DVec2::new(400.0, 300.0),
            radius: 100.0,
        };
        let points = scatter(
            &mut SeededLcg::new(seed),
            15,
            &SpawnArea::default(),
            80.0,
            Some(zone),
            50,
        );
        assert!(!points.is_empty());
        for point in &points {
            assert!(
                distance(*point, zone.centre) >= 100.0,
                "{point:?} spawned inside the keep-out disc"
            );
        }
    }

    #[test]
    fn keep_out_covering_area_places_nothing() {
        let zone = KeepOut {
            centre: DVec2::new(400.0, 300.0),
            radius: 10_000.0,
        };
        let points = scatter(&mut SeededLcg::new(1), 3, &SpawnArea::default(), 0.0, Some(zone), 50);
        assert!(points.is_empty());
    }

    #[rstest]
    #[case::inside(DVec2::new(100.0, 100.0), DVec2::new(10.0, 0.0), 1.0, DVec2::new(110.0, 100.0), DVec2::new(10.0, 0.0))]
    #[case::right_edge(DVec2::new(735.0, 300.0), DVec2::new(120.0, 90.0), 0.1, DVec2::new(740.0, 309.0), DVec2::new(-120.0, 90.0))]
    #[case::corner(DVec2::new(65.0, 65.0), DVec2::new(-100.0, -100.0), 0.1, DVec2::new(60.0, 60.0), DVec2::new(100.0, 100.0))]
    #[case::bottom_edge(DVec2::new(300.0, 535.0), DVec2::new(0.0, 90.0), 0.1, DVec2::new(300.0, 540.0), DVec2::new(0.0, -90.0))]
    fn bounce_reflects_at_edges(
        #[case] position: DVec2,
        #[case] velocity: DVec2,
        #[case] dt: f64,
        #[case] expected_position: DVec2,
        #[case] expected_velocity: DVec2,
    ) {
        let (pos, vel) = SpawnArea::default().bounce(position, velocity, dt);
        assert!((pos - expected_position).length() < 1e-9, "got {pos:?}");
        assert_eq!(vel, expected_velocity);
    }

    #[test]
    fn enemy_count_saturates() {
        let plan = WavePlan {
            base_count: u32::MAX - 1,
            increment: u32::MAX,
            max_level: u32::MAX,
        };
        assert_eq!(plan.enemy_count(u32::MAX), u32::MAX);
        assert_eq!(plan.enemy_count(1), u32::MAX - 1);
    }

    #[test]
    fn wave_plan_grows_linearly() {
        let plan = WavePlan::default();
        assert_eq!(plan.enemy_count(0), 15);
        assert_eq!(plan.enemy_count(3), 19);
        assert_eq!(plan.seed(2), 2000);
        assert!(!plan.is_last(4));
        assert!(plan.is_last(5));
    }

    #[test]
    fn area_validation() {
        assert!(SpawnArea::default().is_valid());
        let inverted = SpawnArea {
            min: DVec2::new(5.0, 0.0),
            max: DVec2::new(0.0, 5.0),
        };
        assert!(!inverted.is_valid());
    }
}
