/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an elapsed-time value or an RNG handle)
/// and returns a brand-new value.  Side effects are limited to the
/// injected RNG, so callers control determinism (seeded RNG in tests).

use rand::Rng;

use crate::entities::{Arrow, Balloon, GameState};

// ── Tunables ─────────────────────────────────────────────────────────────────

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Horizontal drift per tick.  Deliberately a per-tick step, not scaled by
/// elapsed time — legacy parity with the arrow's time-scaled motion below.
pub const BALLOON_SPEED: f32 = 0.2 / 3.0;

/// Arrow climb rate in pixels per second.
pub const ARROW_SPEED: f32 = 500.0;

pub const MAX_ARROWS: usize = 5;

/// Hits needed to trigger a bonus reset of the currently indexed arrow.
pub const REPLENISH_THRESHOLD: u32 = 3;

/// Spawn odds: one new balloon per tick with probability 1-in-SPAWN_ODDS.
pub const SPAWN_ODDS: u32 = 11_000;

/// Balloons enter the field well left of the visible edge.
pub const BALLOON_SPAWN_X: f32 = -100.0;

/// Where idle arrows are parked, safely outside the field.
pub const OFFSCREEN: (f32, f32) = (-100.0, -100.0);

// Sprite hitboxes (width, height).  Textures are drawn scaled to these
// sizes so the visual extent and the collision extent agree.
pub const BALLOON_SIZE: (f32, f32) = (64.0, 64.0);
pub const ARROW_SIZE: (f32, f32) = (16.0, 48.0);
pub const CROSSBOW_SIZE: (f32, f32) = (96.0, 96.0);

/// Gap between the crossbow sprite and the bottom edge of the window.
pub const CROSSBOW_MARGIN: f32 = 20.0;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial session state for a field of the given dimensions.
/// The whole ammo pool starts idle, parked off-field.
pub fn init_state(width: f32, height: f32) -> GameState {
    GameState {
        balloons: Vec::new(),
        arrows: (0..MAX_ARROWS)
            .map(|_| Arrow {
                x: OFFSCREEN.0,
                y: OFFSCREEN.1,
                flying: false,
                speed: ARROW_SPEED,
            })
            .collect(),
        current_arrow: 0,
        hits: 0,
        score: 0,
        width,
        height,
    }
}

/// Create one balloon entering at the left edge with a random vertical
/// offset inside the play field.
pub fn spawn_balloon(height: f32, rng: &mut impl Rng) -> Balloon {
    Balloon {
        x: BALLOON_SPAWN_X,
        y: rng.gen_range(0.0..height - 100.0),
        alive: true,
    }
}

// ── Entity steps ─────────────────────────────────────────────────────────────

/// Advance a balloon by its fixed per-tick drift.  No-op when not alive.
pub fn update_balloon(balloon: &Balloon) -> Balloon {
    if !balloon.alive {
        return balloon.clone();
    }
    Balloon {
        x: balloon.x + BALLOON_SPEED,
        ..balloon.clone()
    }
}

/// Integrate a flying arrow's climb over `dt` seconds.  No-op when idle.
pub fn update_arrow(arrow: &Arrow, dt: f32) -> Arrow {
    if !arrow.flying {
        return arrow.clone();
    }
    Arrow {
        y: arrow.y - arrow.speed * dt,
        ..arrow.clone()
    }
}

/// Launch an idle arrow from `(x, y)`.  Shooting an arrow that is already
/// mid-flight is a no-op.
pub fn shoot_arrow(arrow: &Arrow, x: f32, y: f32) -> Arrow {
    if arrow.flying {
        return arrow.clone();
    }
    Arrow {
        x,
        y,
        flying: true,
        speed: arrow.speed,
    }
}

/// Park an arrow off-field and clear its flight flag.  Unconditional and
/// idempotent.
pub fn reset_arrow(arrow: &Arrow) -> Arrow {
    Arrow {
        x: OFFSCREEN.0,
        y: OFFSCREEN.1,
        flying: false,
        speed: arrow.speed,
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// The crossbow's top-left corner: horizontally centered, resting just
/// above the bottom edge.
pub fn crossbow_position(state: &GameState) -> (f32, f32) {
    (
        state.width / 2.0 - CROSSBOW_SIZE.0 / 2.0,
        state.height - CROSSBOW_SIZE.1 - CROSSBOW_MARGIN,
    )
}

/// Axis-aligned bounding-box overlap between an arrow and a balloon.
fn overlaps(arrow: &Arrow, balloon: &Balloon) -> bool {
    arrow.x < balloon.x + BALLOON_SIZE.0
        && arrow.x + ARROW_SIZE.0 > balloon.x
        && arrow.y < balloon.y + BALLOON_SIZE.1
        && arrow.y + ARROW_SIZE.1 > balloon.y
}

// ── Input-driven state transition ────────────────────────────────────────────

/// Fire the currently indexed arrow from the crossbow muzzle and advance
/// the pool index circularly.  If that arrow is still mid-flight the whole
/// operation is a no-op: no launch, no index advance.
pub fn fire(state: &GameState) -> GameState {
    let idx = state.current_arrow;
    if state.arrows[idx].flying {
        return state.clone();
    }

    let (cx, cy) = crossbow_position(state);
    let mut arrows = state.arrows.clone();
    arrows[idx] = shoot_arrow(&arrows[idx], cx + CROSSBOW_SIZE.0 / 2.0, cy);

    GameState {
        arrows,
        current_arrow: (idx + 1) % state.arrows.len(),
        ..state.clone()
    }
}

// ── Collision & lifecycle ────────────────────────────────────────────────────

/// Resolve arrow–balloon hits.
///
/// For every arrow in pool order: skip it unless flying, then scan the
/// balloon list in order and take the first overlapping balloon — remove
/// it, bump score and hit counter, and return the arrow to the pool.  At
/// most one balloon falls per arrow per call.
///
/// Reaching the replenish threshold zeroes the hit counter and resets the
/// arrow at the *current* pool index, even if that one is mid-flight.  This
/// mirrors the original bonus-refill behaviour exactly, quirk included.
pub fn resolve_collisions(state: &GameState) -> GameState {
    let mut balloons = state.balloons.clone();
    let mut arrows = state.arrows.clone();
    let mut score = state.score;
    let mut hits = state.hits;

    for ai in 0..arrows.len() {
        if !arrows[ai].flying {
            continue;
        }
        if let Some(bi) = balloons.iter().position(|b| overlaps(&arrows[ai], b)) {
            balloons.remove(bi);
            score += 1;
            arrows[ai] = reset_arrow(&arrows[ai]);
            hits += 1;

            if hits >= REPLENISH_THRESHOLD {
                hits = 0;
                let ci = state.current_arrow;
                arrows[ci] = reset_arrow(&arrows[ci]);
            }
        }
    }

    GameState {
        balloons,
        arrows,
        score,
        hits,
        ..state.clone()
    }
}

/// Drop every balloon that has drifted past the right edge.  Escapes carry
/// no score penalty.
pub fn remove_escaped(state: &GameState) -> GameState {
    let balloons: Vec<Balloon> = state
        .balloons
        .iter()
        .filter(|b| b.x <= state.width)
        .cloned()
        .collect();
    GameState {
        balloons,
        ..state.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame: spawn, move balloons, move arrows,
/// resolve hits, prune escapes.  Total — nothing in here can fail.
pub fn tick(state: &GameState, dt: f32, rng: &mut impl Rng) -> GameState {
    let mut balloons = state.balloons.clone();
    if rng.gen_ratio(1, SPAWN_ODDS) {
        balloons.push(spawn_balloon(state.height, rng));
    }

    let balloons: Vec<Balloon> = balloons.iter().map(update_balloon).collect();
    let arrows: Vec<Arrow> = state
        .arrows
        .iter()
        .map(|a| update_arrow(a, dt))
        .collect();

    let moved = GameState {
        balloons,
        arrows,
        ..state.clone()
    };

    remove_escaped(&resolve_collisions(&moved))
}

// ── Derived displays ─────────────────────────────────────────────────────────

/// HUD ammo readout: pool size minus the circular index.  An approximation
/// of remaining shots, not a count of idle arrows — preserved from the
/// original display.
pub fn arrows_remaining(state: &GameState) -> usize {
    state.arrows.len() - state.current_arrow
}

/// Banner condition: the next arrow to fire is stuck mid-flight and there
/// is nothing left to shoot.  Display-only; the loop keeps running.
pub fn is_game_over(state: &GameState) -> bool {
    state.arrows[state.current_arrow].flying && state.balloons.is_empty()
}
