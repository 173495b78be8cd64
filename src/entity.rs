//! Movable squares: the player and the enemy it hunts.

use std::str::FromStr;

use rand::Rng;

use crate::geometry::{collision_box, random_range, CollisionBox, Position, Size};

/// One of the four movement directions. Up/left decrease a coordinate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step as (dx, dy) in a top-left-origin system.
    pub fn offset(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown direction '{0}'")]
pub struct UnknownDirection(pub String);

/// Accepts both command names ("up") and keyboard key names ("ArrowUp").
impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" | "ArrowUp" => Ok(Direction::Up),
            "down" | "ArrowDown" => Ok(Direction::Down),
            "left" | "ArrowLeft" => Ok(Direction::Left),
            "right" | "ArrowRight" => Ok(Direction::Right),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

/// Preset cosmetic colours a square can be painted with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tint {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
}

impl Tint {
    pub const ALL: [Tint; 7] = [
        Tint::Red,
        Tint::Orange,
        Tint::Yellow,
        Tint::Green,
        Tint::Blue,
        Tint::Indigo,
        Tint::Violet,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Tint {
        let idx = random_range(rng, 0.0, Self::ALL.len() as f64) as usize;
        Self::ALL[idx.min(Self::ALL.len() - 1)]
    }

    pub fn css_name(self) -> &'static str {
        match self {
            Tint::Red => "red",
            Tint::Orange => "orange",
            Tint::Yellow => "yellow",
            Tint::Green => "green",
            Tint::Blue => "blue",
            Tint::Indigo => "indigo",
            Tint::Violet => "violet",
        }
    }
}

/// A square with a position, an explicit footprint and a per-step speed.
///
/// No bounds checking happens here; the game controller decides whether a
/// step is allowed before calling [`Entity::move_by`].
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub position: Position,
    pub size: Size,
    pub speed: f64,
    pub tint: Tint,
}

impl Entity {
    pub fn new(position: Position, size: Size, speed: f64) -> Self {
        Self { position, size, speed, tint: Tint::Red }
    }

    /// Where a step of `delta` in `direction` would land.
    pub fn step_target(&self, direction: Direction, delta: f64) -> Position {
        let (dx, dy) = direction.offset();
        Position::new(self.position.x + dx * delta, self.position.y + dy * delta)
    }

    pub fn move_by(&mut self, direction: Direction, delta: f64) {
        self.position = self.step_target(direction, delta);
    }

    /// One step at the entity's own speed.
    pub fn step(&mut self, direction: Direction) {
        self.move_by(direction, self.speed);
    }
}

/// An enemy square plus its hit region, fixed at spawn time.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Entity,
    pub collision: CollisionBox,
}

impl Enemy {
    pub fn spawn(position: Position, size: Size) -> Self {
        Self {
            body: Entity::new(position, size, 0.0),
            collision: collision_box(size, position),
        }
    }

    pub fn position(&self) -> Position {
        self.body.position
    }

    pub fn is_hit_by(&self, pos: Position) -> bool {
        self.collision.contains(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn move_by_follows_top_left_origin() {
        let mut e = Entity::new(Position::new(10.0, 10.0), Size::square(5.0), 1.5);
        e.move_by(Direction::Up, 2.0);
        assert_eq!(e.position, Position::new(10.0, 8.0));
        e.move_by(Direction::Down, 4.0);
        assert_eq!(e.position, Position::new(10.0, 12.0));
        e.move_by(Direction::Left, 3.0);
        assert_eq!(e.position, Position::new(7.0, 12.0));
        e.step(Direction::Right);
        assert_eq!(e.position, Position::new(8.5, 12.0));
    }

    #[test]
    fn move_by_does_not_clamp() {
        let mut e = Entity::new(Position::new(0.0, 0.0), Size::square(5.0), 1.0);
        e.step(Direction::Left);
        assert_eq!(e.position.x, -1.0);
    }

    #[test]
    fn direction_parses_commands_and_keys() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("ArrowRight".parse::<Direction>(), Ok(Direction::Right));
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    fn enemy_box_tracks_spawn_position() {
        let enemy = Enemy::spawn(Position::new(100.0, 50.0), Size::square(20.0));
        assert!(enemy.is_hit_by(Position::new(80.0, 70.0)));
        assert!(!enemy.is_hit_by(Position::new(79.0, 50.0)));
    }

    #[test]
    fn random_tint_covers_palette() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Tint::random(&mut rng));
        }
        assert_eq!(seen.len(), Tint::ALL.len());
    }
}
