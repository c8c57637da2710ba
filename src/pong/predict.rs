//! Ball trajectory prediction
//!
//! Steps the ball's straight-line motion forward, reflecting off the side
//! walls, until it reaches a target row. This is the same integration the
//! real ball runs, so the predicted landing column matches what actually
//! happens (paddle contacts aside).

use glam::Vec2;

/// Hard cap on simulated steps; reached only with pathological velocities
const MAX_STEPS: u32 = 100_000;

/// Predicted x-coordinate of the ball center when it reaches `target_y`.
///
/// Returns `None` when the ball cannot reach the row: zero vertical speed,
/// moving away from it, or (degenerately) too slow to arrive within the
/// step cap. A ball already on the row predicts its current column.
pub fn intercept_x(
    pos: Vec2,
    vel: Vec2,
    target_y: f32,
    court_width: f32,
    radius: f32,
) -> Option<f32> {
    if vel.y == 0.0 {
        return None;
    }
    let to_row = target_y - pos.y;
    if to_row == 0.0 {
        return Some(pos.x);
    }
    if to_row.signum() != vel.y.signum() {
        return None;
    }

    let (mut x, mut y) = (pos.x, pos.y);
    let (mut vx, vy) = (vel.x, vel.y);

    let mut steps = 0;
    while (vy < 0.0 && y > target_y) || (vy > 0.0 && y < target_y) {
        x += vx;
        y += vy;

        if x - radius < 0.0 {
            x = radius;
            vx = -vx;
        } else if x + radius > court_width {
            x = court_width - radius;
            vx = -vx;
        }

        steps += 1;
        if steps >= MAX_STEPS {
            return None;
        }
    }

    Some(x)
}
