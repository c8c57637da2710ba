//! Per-frame update for the platformer
//!
//! One invocation advances the session by exactly one frame: support
//! re-evaluation, input, collision suppression, fall-death, then the terrain
//! scroll by the body's effective velocity and one clock step. The host
//! drives this from its own timer and reads back the returned events.

use glam::Vec2;

use super::player::{Player, Support};
use super::state::{ParadiseEvent, ParadiseState};
use super::terrain::{Axis, Terrain};

/// Iteration cap for penetration resolution
const STABILIZE_CAP: u32 = 256;

/// Held-key flags for one frame, sampled level-triggered by the tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut ParadiseState, input: &TickInput) -> Vec<ParadiseEvent> {
    let mut events = Vec::new();
    state.frame += 1;

    let support_point = state.player.support_point();

    // 1. Support re-evaluation. The platform probe runs first so its result
    //    also decides whether carried velocity survives this frame.
    let contact = state.terrain.is_on_platform(support_point);

    if state.terrain.is_on_ground(support_point) {
        stabilize(&state.player, &mut state.terrain);
        state.player.vel.y = 0.0;
        state.player.support = Support::Grounded;
    } else if let Some(contact) = contact {
        stabilize(&state.player, &mut state.terrain);
        state.player.support = Support::OnPlatform;
        state.player.vel.y = 0.0;
        match contact.axis {
            Axis::Horizontal => state.player.carry.x = contact.speed,
            Axis::Vertical => state.player.carry.y = contact.speed,
        }
    } else {
        state.player.support = Support::Airborne;
        state.player.vel.y += state.config.env.gravity;
    }
    if contact.is_none() {
        state.player.carry = Vec2::ZERO;
    }

    // 2. Controls only bite while something is underfoot
    if state.player.supported() {
        state.player.steer(input.left, input.right);
        if input.up {
            state.player.jump(state.momentum_transfer);
        }
        if input.down {
            state.player.brake();
        }
    }

    // 3. Horizontal collision suppression at the wheel's leading edge
    let side = Vec2::new(state.player.radius, 0.0);
    if state.player.vel.x < 0.0 && state.terrain.contains_point(state.player.pos - side) {
        state.player.vel.x = 0.0;
    } else if state.player.vel.x > 0.0 && state.terrain.contains_point(state.player.pos + side) {
        state.player.vel.x = 0.0;
    }

    // 4. Fall-death: the one terminal condition. Reset in place and keep
    //    going - the rest of the frame runs on the fresh state, so the
    //    scroll below degenerates to a zero-delta step.
    if state.player.vel.y >= state.config.env.terminal_velocity {
        state.reset();
        events.push(ParadiseEvent::Restarted);
    }

    // 5. Spin and distance bookkeeping
    state.player.roll();

    // 6. Scroll the world by the effective velocity
    let dx = state.player.vel.x + state.player.carry.x;
    let dy = state.player.vel.y - state.player.carry.y;
    state.terrain.scroll(dx, dy);

    // 7. One clock step
    state.clock.pass(state.config.env.time_speed);

    events
}

/// Penetration resolution: while the support point is buried more than one
/// unit deep in any segment, push the terrain down one unit at a time. The
/// body ends up resting just inside the surface, which keeps the
/// strictly-inside support queries reporting contact on the next frame.
fn stabilize(player: &Player, terrain: &mut Terrain) {
    let probe = player.pos + Vec2::new(0.0, player.radius - 1.0);
    let mut iterations = 0;
    while terrain.contains_point(probe) {
        terrain.translate(0.0, 1.0);
        iterations += 1;
        if iterations >= STABILIZE_CAP {
            log::warn!("stabilize hit its iteration cap ({STABILIZE_CAP})");
            break;
        }
    }
}
