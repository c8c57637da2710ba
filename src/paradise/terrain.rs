//! Procedural terrain stream
//!
//! An ordered, growing list of terrain segments and a generation frontier.
//! New segments are appended on demand as the frontier advances; nothing is
//! recycled for the lifetime of a session. Each step is anchored at the
//! right edge of the previous segment, so the stream reads left to right in
//! emission order. The whole stream scrolls by the player's effective
//! velocity each tick, which also advances every platform's oscillation and
//! triggers regeneration whenever the frontier falls inside the lookahead
//! window.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::config::TerrainConfig;
use crate::geom::Rect;

/// How far past the origin the stream generates ahead, in world units
pub const LOOKAHEAD: f32 = 10_000.0;

/// Consecutive degenerate draws (long-x and long-y together) tolerated
/// before a step falls back to the short/short branch
const DEGENERATE_RETRY_CAP: u32 = 32;

/// Oscillation axis - exactly one per platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// What a body standing on a platform inherits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformContact {
    pub axis: Axis,
    /// The platform's stored speed: signed for horizontal platforms,
    /// magnitude for vertical ones
    pub speed: f32,
}

/// One placed terrain unit
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Immobile slab; only shifts with the global scroll
    Ground { rect: Rect, color: u32 },
    /// Oscillates along its single axis between `bounds`
    Platform {
        rect: Rect,
        axis: Axis,
        /// Motion bounds along the active axis (low, high), in the same
        /// scrolling frame as the rectangle
        bounds: (f32, f32),
        /// Signed per-tick speed for horizontal platforms; positive
        /// magnitude for vertical ones (direction comes from `progressing`)
        speed: f32,
        /// Vertical platforms: currently moving toward the high bound
        progressing: bool,
        color: u32,
    },
}

impl Segment {
    pub fn rect(&self) -> &Rect {
        match self {
            Segment::Ground { rect, .. } => rect,
            Segment::Platform { rect, .. } => rect,
        }
    }

    /// Palette index for the renderer
    pub fn color(&self) -> u32 {
        match self {
            Segment::Ground { color, .. } => *color,
            Segment::Platform { color, .. } => *color,
        }
    }
}

/// The terrain stream itself
pub struct Terrain {
    config: TerrainConfig,
    canvas_width: f32,
    canvas_height: f32,
    segments: Vec<Segment>,
    generated_x: f32,
    rng: Pcg32,
}

impl Terrain {
    pub fn new(config: TerrainConfig, canvas_width: f32, canvas_height: f32, seed: u64) -> Self {
        let mut terrain = Self {
            config,
            canvas_width,
            canvas_height,
            segments: Vec::new(),
            generated_x: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        };
        terrain.place_starting_slab();
        terrain.advance_frontier(LOOKAHEAD);
        terrain
    }

    /// Ordered segment list for the renderer
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Current generation frontier
    pub fn generated_x(&self) -> f32 {
        self.generated_x
    }

    /// The wide slab every session starts on
    fn place_starting_slab(&mut self) {
        let color = self.next_color();
        self.segments.push(Segment::Ground {
            rect: Rect::new(
                50.0,
                self.canvas_height / 2.0 + 30.0,
                3.0 * self.canvas_width / 4.0,
                50.0,
            ),
            color,
        });
        self.generated_x = 3.0 * self.canvas_width / 4.0;
    }

    /// Append segments until the frontier reaches or exceeds `target`
    pub fn advance_frontier(&mut self, target: f32) {
        let mut degenerate_streak = 0u32;

        while self.generated_x < target {
            let gap_x_long = self.draw_long_gap();
            let gap_y_long = self.draw_long_gap();

            if gap_x_long && gap_y_long {
                // Degenerate step: no branch emits anything here. Re-roll,
                // but never spin forever on an adversarial draw sequence.
                degenerate_streak += 1;
                if degenerate_streak < DEGENERATE_RETRY_CAP {
                    continue;
                }
                log::warn!(
                    "terrain generation re-rolled {DEGENERATE_RETRY_CAP} times; forcing a short step"
                );
                self.emit_step(false, false);
            } else {
                self.emit_step(gap_x_long, gap_y_long);
            }
            degenerate_streak = 0;
        }
    }

    /// Emit one generation step for an already-resolved branch
    fn emit_step(&mut self, gap_x_long: bool, gap_y_long: bool) {
        let (anchor_x, anchor_y) = self.anchor();
        let dirn = self.draw_direction();
        let ground_width = self.config.ground_width.sample(&mut self.rng);
        let platform = self.config.platform;

        match (gap_x_long, gap_y_long) {
            (false, false) => {
                // Plain hop: one ground slab a short gap away
                let gap_x = self.config.short_gap_x.sample(&mut self.rng);
                let gap_y = self.config.short_gap_y.sample(&mut self.rng);
                self.push_ground(anchor_x + gap_x, anchor_y + dirn * gap_y, ground_width);
                self.generated_x += gap_x + ground_width;
            }
            (true, false) => {
                // Long horizontal gap: a ferry platform sweeps most of it
                let gap_x = self.config.long_gap_x.sample(&mut self.rng);
                let gap_y = self.config.short_gap_y.sample(&mut self.rng);

                let low = anchor_x + platform.clearance_x;
                let high = anchor_x + gap_x - platform.width - platform.clearance_x;
                let color = self.next_color();
                self.segments.push(Segment::Platform {
                    rect: Rect::new(
                        low,
                        anchor_y + dirn * gap_y / 2.0,
                        platform.width,
                        platform.height,
                    ),
                    axis: Axis::Horizontal,
                    bounds: (low, high),
                    speed: platform.speed,
                    progressing: true,
                    color,
                });

                self.push_ground(anchor_x + gap_x, anchor_y + dirn * gap_y, ground_width);
                self.generated_x += gap_x + ground_width;
            }
            (false, true) => {
                // Long vertical gap: an elevator platform at the gap midpoint
                let mut gap_x = self.config.short_gap_x.sample(&mut self.rng);
                let gap_y = self.config.long_gap_y.sample(&mut self.rng);

                // Widen gaps too narrow to fit the platform plus clearance
                let min_fit = platform.width + 2.0 * platform.clearance_x;
                if gap_x < min_fit {
                    gap_x = min_fit;
                }

                let far_y = anchor_y + dirn * gap_y;
                let near_bound = anchor_y + platform.clearance_y;
                let far_bound = far_y - platform.clearance_y;
                let low = near_bound.min(far_bound);
                let high = near_bound.max(far_bound);

                let color = self.next_color();
                self.segments.push(Segment::Platform {
                    rect: Rect::new(
                        anchor_x + (gap_x - platform.width) / 2.0,
                        anchor_y.clamp(low, high),
                        platform.width,
                        platform.height,
                    ),
                    axis: Axis::Vertical,
                    bounds: (low, high),
                    speed: platform.speed,
                    progressing: false,
                    color,
                });

                self.push_ground(anchor_x + gap_x, far_y, ground_width);
                self.generated_x += gap_x + ground_width;
            }
            (true, true) => unreachable!("degenerate branch is resolved by the caller"),
        }
    }

    fn push_ground(&mut self, x: f32, y: f32, width: f32) {
        let height = self.config.ground_height.sample(&mut self.rng);
        let color = self.next_color();
        self.segments.push(Segment::Ground {
            rect: Rect::new(x, y, width, height),
            color,
        });
    }

    /// Anchor for the next step: right edge and top of the last segment
    fn anchor(&self) -> (f32, f32) {
        match self.segments.last() {
            Some(last) => (last.rect().right(), last.rect().y),
            // Unreachable: the starting slab is placed before any generation
            None => (0.0, self.canvas_height / 2.0),
        }
    }

    fn draw_long_gap(&mut self) -> bool {
        self.rng.random_range(0..=10) > self.config.long_gap_threshold
    }

    fn draw_direction(&mut self) -> f32 {
        if self.rng.random_range(0..=100) < self.config.up_bias {
            -1.0
        } else {
            1.0
        }
    }

    fn next_color(&mut self) -> u32 {
        self.rng.random_range(0..self.config.palette_size)
    }

    /// Scroll the whole stream by (-dx, -dy), advance every platform's
    /// oscillation by one step, and regenerate when the frontier falls
    /// within two canvas-widths of the origin
    pub fn scroll(&mut self, dx: f32, dy: f32) {
        for segment in &mut self.segments {
            match segment {
                Segment::Ground { rect, .. } => rect.translate(-dx, -dy),
                Segment::Platform {
                    rect,
                    axis,
                    bounds,
                    speed,
                    progressing,
                    ..
                } => {
                    rect.translate(-dx, -dy);
                    match axis {
                        Axis::Horizontal => {
                            bounds.0 -= dx;
                            bounds.1 -= dx;

                            rect.x += *speed;
                            if rect.x > bounds.1 {
                                rect.x = bounds.1;
                                *speed = -*speed;
                            } else if rect.x < bounds.0 {
                                rect.x = bounds.0;
                                *speed = -*speed;
                            }
                        }
                        Axis::Vertical => {
                            bounds.0 -= dy;
                            bounds.1 -= dy;

                            if *progressing {
                                rect.y += *speed;
                                if rect.y > bounds.1 {
                                    rect.y = bounds.1;
                                    *progressing = false;
                                }
                            } else {
                                rect.y -= *speed;
                                if rect.y < bounds.0 {
                                    rect.y = bounds.0;
                                    *progressing = true;
                                }
                            }
                        }
                    }
                }
            }
        }

        self.generated_x -= dx;
        if self.generated_x < 2.0 * self.canvas_width {
            self.advance_frontier(LOOKAHEAD);
        }
    }

    /// Pure translation of every segment and motion bound. No oscillation
    /// advance and no frontier bookkeeping - penetration resolution uses
    /// this so it cannot secretly move platforms along their tracks.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        for segment in &mut self.segments {
            match segment {
                Segment::Ground { rect, .. } => rect.translate(dx, dy),
                Segment::Platform {
                    rect, axis, bounds, ..
                } => {
                    rect.translate(dx, dy);
                    match axis {
                        Axis::Horizontal => {
                            bounds.0 += dx;
                            bounds.1 += dx;
                        }
                        Axis::Vertical => {
                            bounds.0 += dy;
                            bounds.1 += dy;
                        }
                    }
                }
            }
        }
    }

    /// Is the point strictly inside any ground slab?
    pub fn is_on_ground(&self, p: Vec2) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Ground { .. }) && s.rect().contains(p))
    }

    /// Is the point strictly inside any platform? Reports the platform's
    /// axis and speed so the caller can inherit carried velocity.
    pub fn is_on_platform(&self, p: Vec2) -> Option<PlatformContact> {
        self.segments.iter().find_map(|s| match s {
            Segment::Platform {
                rect, axis, speed, ..
            } if rect.contains(p) => Some(PlatformContact {
                axis: *axis,
                speed: *speed,
            }),
            _ => None,
        })
    }

    /// Is the point strictly inside any segment, of either kind?
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.segments.iter().any(|s| s.rect().contains(p))
    }

    /// Clear the stream, re-place the starting slab and regenerate the
    /// lookahead buffer. The RNG stream continues; it is not reseeded.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.generated_x = 0.0;
        self.place_starting_slab();
        self.advance_frontier(LOOKAHEAD);
    }

    #[cfg(test)]
    pub(crate) fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paradise::config::SpanRange;
    use proptest::prelude::*;

    const W: f32 = 1280.0;
    const H: f32 = 800.0;

    fn terrain(seed: u64) -> Terrain {
        Terrain::new(TerrainConfig::default(), W, H, seed)
    }

    // ── Generation ──

    #[test]
    fn test_new_places_starting_slab_first() {
        let t = terrain(1);
        let first = t.segments().first().expect("stream must not be empty");
        let rect = first.rect();
        assert!(matches!(first, Segment::Ground { .. }));
        assert_eq!(rect.x, 50.0);
        assert_eq!(rect.y, H / 2.0 + 30.0);
        assert_eq!(rect.width, 3.0 * W / 4.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn test_new_generates_past_lookahead() {
        let t = terrain(1);
        assert!(t.generated_x() >= LOOKAHEAD);
        assert!(t.segments().len() > 10, "lookahead buffer looks too thin");
    }

    #[test]
    fn test_colors_stay_in_palette() {
        let t = terrain(3);
        for segment in t.segments() {
            assert!(segment.color() < TerrainConfig::default().palette_size);
        }
    }

    #[test]
    fn test_grounds_follow_platforms() {
        // Every platform is a ferry/elevator toward a landing slab, so a
        // ground segment must follow it immediately.
        let t = terrain(5);
        let segments = t.segments();
        for (i, segment) in segments.iter().enumerate() {
            if matches!(segment, Segment::Platform { .. }) {
                assert!(
                    matches!(segments.get(i + 1), Some(Segment::Ground { .. })),
                    "platform at index {i} has no landing slab"
                );
            }
        }
    }

    #[test]
    fn test_degenerate_draws_cannot_stall_generation() {
        // A negative threshold makes every gap draw long, so every step is
        // degenerate; the retry cap must keep generation moving.
        let mut config = TerrainConfig::default();
        config.long_gap_threshold = -1;
        let t = Terrain::new(config, W, H, 9);
        assert!(t.generated_x() >= LOOKAHEAD);
        // The fallback branch emits plain grounds only
        assert!(
            t.segments()
                .iter()
                .all(|s| matches!(s, Segment::Ground { .. }))
        );
    }

    #[test]
    fn test_narrow_gaps_widened_for_vertical_platforms() {
        // Short gaps far below the platform fit force the widening path:
        // every vertical platform must sit one clearance past its anchor.
        let mut config = TerrainConfig::default();
        config.short_gap_x = SpanRange::new(10, 20);
        let mut t = Terrain::new(config, W, H, 11);
        t.advance_frontier(100_000.0);

        let mut seen = 0;
        let segments = t.segments();
        for (i, segment) in segments.iter().enumerate().skip(1) {
            if let Segment::Platform {
                rect,
                axis: Axis::Vertical,
                ..
            } = segment
            {
                seen += 1;
                let anchor_x = segments[i - 1].rect().right();
                assert!(
                    (rect.x - anchor_x - config.platform.clearance_x).abs() < 1e-3,
                    "vertical platform not centered in the widened gap"
                );
            }
        }
        assert!(seen > 0, "seed produced no vertical platforms");
    }

    #[test]
    fn test_same_seed_same_stream() {
        let a = terrain(77);
        let b = terrain(77);
        assert_eq!(a.segments(), b.segments());
    }

    // ── Scrolling and oscillation ──

    #[test]
    fn test_scroll_translates_grounds_uniformly() {
        let mut t = terrain(2);
        let before: Vec<Rect> = t.segments().iter().map(|s| *s.rect()).collect();
        t.scroll(7.0, -2.0);
        for (new, old) in t
            .segments()
            .iter()
            .zip(&before)
            .filter(|(s, _)| matches!(s, Segment::Ground { .. }))
        {
            assert_eq!(new.rect().x, old.x - 7.0);
            assert_eq!(new.rect().y, old.y + 2.0);
        }
    }

    #[test]
    fn test_scroll_decrements_frontier_and_regenerates() {
        let mut t = terrain(2);
        let frontier = t.generated_x();
        t.scroll(100.0, 0.0);
        assert_eq!(t.generated_x(), frontier - 100.0);

        // Push the frontier under two canvas-widths: regeneration refills it
        t.scroll(frontier - 100.0 - 2.0 * W + 1.0, 0.0);
        assert!(t.generated_x() >= LOOKAHEAD);
    }

    #[test]
    fn test_platforms_stay_inside_bounds_under_scroll() {
        let mut t = terrain(4);
        for _ in 0..600 {
            t.scroll(0.0, 0.0);
            for segment in t.segments() {
                if let Segment::Platform {
                    rect, axis, bounds, ..
                } = segment
                {
                    let pos = match axis {
                        Axis::Horizontal => rect.x,
                        Axis::Vertical => rect.y,
                    };
                    assert!(
                        bounds.0 - 1e-3 <= pos && pos <= bounds.1 + 1e-3,
                        "platform left its track: {pos} not in [{}, {}]",
                        bounds.0,
                        bounds.1
                    );
                }
            }
        }
    }

    #[test]
    fn test_horizontal_platform_reverses_at_bounds() {
        let mut t = terrain(0);
        t.push_segment(Segment::Platform {
            rect: Rect::new(100.0, 0.0, 200.0, 20.0),
            axis: Axis::Horizontal,
            bounds: (100.0, 109.0),
            speed: 3.0,
            progressing: true,
            color: 0,
        });

        // 3 steps reach the high bound; the 4th overshoots, clamps and flips
        for _ in 0..4 {
            t.scroll(0.0, 0.0);
        }
        let Some(Segment::Platform { rect, speed, .. }) = t.segments().last() else {
            panic!("platform vanished");
        };
        assert_eq!(rect.x, 109.0);
        assert_eq!(*speed, -3.0);

        t.scroll(0.0, 0.0);
        let Some(Segment::Platform { rect, .. }) = t.segments().last() else {
            panic!("platform vanished");
        };
        assert_eq!(rect.x, 106.0);
    }

    #[test]
    fn test_vertical_platform_flips_progressing_at_bounds() {
        let mut t = terrain(0);
        t.push_segment(Segment::Platform {
            rect: Rect::new(100.0, 50.0, 200.0, 20.0),
            axis: Axis::Vertical,
            bounds: (50.0, 56.0),
            speed: 3.0,
            progressing: true,
            color: 0,
        });

        // Down to the high bound...
        for _ in 0..3 {
            t.scroll(0.0, 0.0);
        }
        let Some(Segment::Platform {
            rect, progressing, ..
        }) = t.segments().last()
        else {
            panic!("platform vanished");
        };
        assert_eq!(rect.y, 56.0);
        assert!(!*progressing, "should regress after touching the high bound");

        // ...and back up to the low bound
        for _ in 0..3 {
            t.scroll(0.0, 0.0);
        }
        let Some(Segment::Platform {
            rect, progressing, ..
        }) = t.segments().last()
        else {
            panic!("platform vanished");
        };
        assert_eq!(rect.y, 50.0);
        assert!(*progressing, "should progress after touching the low bound");
    }

    // ── Queries ──

    #[test]
    fn test_queries_distinguish_segment_kinds() {
        let mut t = terrain(0);
        t.push_segment(Segment::Platform {
            rect: Rect::new(2000.0, 100.0, 200.0, 20.0),
            axis: Axis::Horizontal,
            bounds: (2000.0, 2400.0),
            speed: 3.0,
            progressing: true,
            color: 0,
        });

        let on_slab = Vec2::new(100.0, H / 2.0 + 40.0);
        let on_platform = Vec2::new(2100.0, 110.0);

        assert!(t.is_on_ground(on_slab));
        assert!(t.is_on_platform(on_slab).is_none());

        assert!(!t.is_on_ground(on_platform));
        let contact = t
            .is_on_platform(on_platform)
            .expect("point is inside the platform");
        assert_eq!(contact.axis, Axis::Horizontal);
        assert_eq!(contact.speed, 3.0);

        assert!(t.contains_point(on_slab));
        assert!(t.contains_point(on_platform));
        assert!(!t.contains_point(Vec2::new(-500.0, -500.0)));
    }

    #[test]
    fn test_queries_are_strict_at_surfaces() {
        let t = terrain(0);
        let slab_top = H / 2.0 + 30.0;
        // Exactly on the surface is not inside; one unit deep is
        assert!(!t.is_on_ground(Vec2::new(100.0, slab_top)));
        assert!(t.is_on_ground(Vec2::new(100.0, slab_top + 1.0)));
    }

    // ── Reset ──

    #[test]
    fn test_reset_rebuilds_the_stream() {
        let mut t = terrain(6);
        t.scroll(5000.0, 120.0);
        t.reset();

        let first = t.segments().first().expect("stream must not be empty");
        assert_eq!(first.rect().x, 50.0);
        assert_eq!(first.rect().y, H / 2.0 + 30.0);
        assert!(t.generated_x() >= LOOKAHEAD);
    }

    // ── Spec properties ──

    proptest! {
        #[test]
        fn prop_advance_frontier_terminates_past_target(
            seed in any::<u64>(),
            target in 1_000f32..30_000f32,
        ) {
            let mut t = terrain(seed);
            t.advance_frontier(target);
            prop_assert!(t.generated_x() >= target);
        }

        #[test]
        fn prop_segments_emitted_in_increasing_x(seed in any::<u64>()) {
            let t = terrain(seed);
            for pair in t.segments().windows(2) {
                prop_assert!(
                    pair[1].rect().x > pair[0].rect().x,
                    "segment order violated: {} then {}",
                    pair[0].rect().x,
                    pair[1].rect().x
                );
            }
        }

        #[test]
        fn prop_consecutive_grounds_never_overlap(seed in any::<u64>()) {
            let t = terrain(seed);
            let grounds: Vec<&Rect> = t
                .segments()
                .iter()
                .filter(|s| matches!(s, Segment::Ground { .. }))
                .map(|s| s.rect())
                .collect();
            for pair in grounds.windows(2) {
                prop_assert!(pair[1].x >= pair[0].right());
            }
        }

        #[test]
        fn prop_scroll_round_trips_ground_positions(
            seed in any::<u64>(),
            dx in 0f32..500f32,
        ) {
            let mut t = terrain(seed);
            let before: Vec<Rect> = t
                .segments()
                .iter()
                .filter(|s| matches!(s, Segment::Ground { .. }))
                .map(|s| *s.rect())
                .collect();

            t.scroll(dx, 0.0);
            t.scroll(-dx, 0.0);

            let after: Vec<Rect> = t
                .segments()
                .iter()
                .filter(|s| matches!(s, Segment::Ground { .. }))
                .map(|s| *s.rect())
                .collect();

            // Regeneration may append, but the original slabs round-trip
            for (a, b) in before.iter().zip(&after) {
                prop_assert!((a.x - b.x).abs() < 1e-2);
                prop_assert!((a.y - b.y).abs() < 1e-2);
            }
        }

        #[test]
        fn prop_platform_bounds_are_ordered(seed in any::<u64>()) {
            let t = terrain(seed);
            for segment in t.segments() {
                if let Segment::Platform { rect, axis, bounds, .. } = segment {
                    prop_assert!(bounds.0 <= bounds.1);
                    let pos = match axis {
                        Axis::Horizontal => rect.x,
                        Axis::Vertical => rect.y,
                    };
                    prop_assert!(bounds.0 <= pos && pos <= bounds.1);
                }
            }
        }
    }
}
