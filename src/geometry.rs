//! Pure spawn / collision helpers. No state lives here; the caller owns the RNG.
//!
//! Coordinates use a top-left origin: x grows to the right, y grows downward.

use rand::Rng;

/// A point on the arena, in pixels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width / height of a rectangular footprint.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f64) -> Self {
        Self { width: side, height: side }
    }
}

/// Rectangle the player may occupy and enemies may spawn in (inclusive on all sides).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundaries {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Boundaries {
    /// Arena minus the player footprint, anchored at the origin.
    pub fn from_arena(arena: Size, player: Size) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: arena.width - player.width,
            max_y: arena.height - player.height,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        in_range(pos.x, self.min_x, self.max_x) && in_range(pos.y, self.min_y, self.max_y)
    }
}

/// Padded hit region of an enemy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl CollisionBox {
    pub fn contains(&self, pos: Position) -> bool {
        in_range(pos.x, self.min_x, self.max_x) && in_range(pos.y, self.min_y, self.max_y)
    }
}

/// `floor + floor(random * span)` with `random` in `[0, 1)`.
///
/// A negative `span` yields values below `floor`; callers keep the span positive.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, floor: f64, span: f64) -> f64 {
    let unit: f64 = rng.gen_range(0.0..1.0);
    floor + (unit * span).floor()
}

/// Pick an enemy spawn point on the roomier side of the player along each axis.
///
/// The enemy lands between one player-size unit and the full free space away
/// from the player on both axes. Ties go to the left / up side. Boundaries
/// narrower than twice the player size leave the result unspecified.
pub fn calculate_spawn<R: Rng + ?Sized>(
    rng: &mut R,
    player: Position,
    player_size: Size,
    bounds: &Boundaries,
) -> Position {
    let left = player.x - bounds.min_x;
    let right = bounds.max_x - player.x;
    let up = player.y - bounds.min_y;
    let down = bounds.max_y - player.y;

    let x_dist = random_range(rng, player_size.width, left.max(right) - player_size.width);
    let y_dist = random_range(rng, player_size.height, up.max(down) - player_size.height);

    let x = if left >= right { player.x - x_dist } else { player.x + x_dist };
    let y = if up >= down { player.y - y_dist } else { player.y + y_dist };
    Position { x, y }
}

/// Hit region around `pos`, padded by the full enemy size in every direction.
pub fn collision_box(size: Size, pos: Position) -> CollisionBox {
    CollisionBox {
        min_x: pos.x - size.width,
        max_x: pos.x + size.width,
        min_y: pos.y - size.height,
        max_y: pos.y + size.height,
    }
}

pub fn in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}
