/// All game entity types — pure data, no logic.

// ── Balloon ───────────────────────────────────────────────────────────────────

/// A balloon drifting left-to-right across the field.
///
/// Positions are stored as floats so the slow drift stays smooth.
#[derive(Clone, Debug, PartialEq)]
pub struct Balloon {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
}

// ── Arrow ─────────────────────────────────────────────────────────────────────

/// One slot of the fixed ammo pool.
///
/// Arrows are never created or destroyed after startup; they cycle between
/// idle (parked off-field) and flying.  The position is meaningful only
/// while `flying` is true.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub x: f32,
    pub y: f32,
    pub flying: bool,
    /// Vertical speed in pixels per second, set once at pool creation.
    pub speed: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Live balloons, in spawn order.  Pruned by hits and escapes.
    pub balloons: Vec<Balloon>,
    /// The ammo pool — fixed size, allocated once.
    pub arrows: Vec<Arrow>,
    /// Circular index of the next arrow to fire.
    pub current_arrow: usize,
    /// Hits since the last bonus refill; wraps at the replenish threshold.
    pub hits: u32,
    pub score: u32,
    pub width: f32,
    pub height: f32,
}
