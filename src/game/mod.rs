//! Game controller: owns the session (player, enemy, level, score, countdown)
//! and turns presentation commands into state changes and [`GameEvent`]s.
//!
//! The presentation layer drives it with [`Game::start_game`],
//! [`Game::toggle_pause`], [`Game::move_player`] and a once-per-second
//! [`Game::tick`], then drains notifications with [`Game::drain_events`].

pub mod events;
pub mod levels;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{ConfigError, GameConfig};
use crate::entity::{Direction, Enemy, Entity, Tint};
use crate::geometry::{calculate_spawn, Boundaries, Position};
use crate::timer::{Clock, Countdown};

pub use events::{GameEvent, Outcome};
pub use levels::{LevelSpec, LevelTable, CLASSIC_LEVELS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

pub struct Game {
    levels: LevelTable,
    boundaries: Boundaries,
    player: Entity,
    enemy: Option<Enemy>,
    level: u8,
    score: u32,
    goal: u32,
    phase: Phase,
    timer: Countdown,
    rng: StdRng,
    // Cosmetic draws only; keeps recolors from shifting spawn positions.
    tint_rng: StdRng,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let boundaries = config.boundaries();
        let (rng, tint_rng) = match config.seed {
            Some(seed) => (StdRng::seed_from_u64(seed), StdRng::seed_from_u64(!seed)),
            None => (StdRng::from_entropy(), StdRng::from_entropy()),
        };
        let first = config.levels.get(1).copied().ok_or(ConfigError::EmptyLevelTable)?;
        Ok(Self {
            player: Entity::new(config.player_start, config.player_size, first.speed),
            levels: config.levels,
            boundaries,
            enemy: None,
            level: 1,
            score: 0,
            goal: first.par,
            phase: Phase::NotStarted,
            timer: Countdown::new(first.time),
            rng,
            tint_rng,
            events: Vec::new(),
        })
    }

    // --- Read-only state --------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn time_left(&self) -> u32 {
        self.timer.time_left()
    }

    /// `None` until the run ends.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_game_over().then(|| Outcome::from_score(self.score, self.levels.final_par()))
    }

    pub fn status_line(&self) -> String {
        format!("Level:{} Score:{}", self.level, self.score)
    }

    /// Take all notifications emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Commands ---------------------------------------------------------------

    /// Begin a fresh run. Valid from any phase; nothing carries over.
    pub fn start_game(&mut self) {
        let Some(first) = self.levels.get(1).copied() else {
            return;
        };
        self.enemy = None;
        self.level = 1;
        self.score = 0;
        self.goal = first.par;
        self.player.speed = first.speed;
        self.enemy = Some(self.spawn_enemy());
        self.timer = Countdown::new(first.time);
        self.on_timer_tick(self.timer.clock());
        self.timer.start();
        self.phase = Phase::Running;
        log::info!("game started: goal {} in {}s", self.goal, first.time);
    }

    /// Pause or resume the countdown. Ignored outside a live run.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => {
                self.timer.pause();
                self.phase = Phase::Paused;
            }
            Phase::Paused => {
                self.timer.start();
                self.phase = Phase::Running;
            }
            Phase::NotStarted | Phase::GameOver => {
                log::warn!("toggle_pause ignored in {:?}", self.phase);
            }
        }
    }

    /// Step the player one `speed` unit if the destination stays inside the
    /// boundaries, then test for a hit. Returns whether the player moved.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        let target = self.player.step_target(direction, self.player.speed);
        let moved = self.boundaries.contains(target);
        if moved {
            self.player.step(direction);
        }
        if self.enemy.is_some() {
            self.check_collision();
        }
        moved
    }

    /// Kill the enemy when the player stands inside its hit region.
    pub fn check_collision(&mut self) -> bool {
        let hit = self
            .enemy
            .as_ref()
            .is_some_and(|enemy| enemy.is_hit_by(self.player.position));
        if hit {
            self.kill_enemy();
        }
        hit
    }

    /// Host-driven once-per-second countdown step.
    pub fn tick(&mut self) {
        let mut observed = None;
        if self.timer.tick_with(|t| observed = Some(t.clock()))
            && let Some(clock) = observed
        {
            self.on_timer_tick(clock);
        }
    }

    /// Paint the player a random preset colour. Cosmetic only.
    pub fn recolor_player(&mut self) -> Tint {
        let tint = Tint::random(&mut self.tint_rng);
        self.player.tint = tint;
        tint
    }

    // --- Internal transitions ---------------------------------------------------

    fn kill_enemy(&mut self) {
        self.enemy = None;
        self.score += 1;
        log::debug!("enemy down, score {}", self.score);
        if self.score < self.levels.final_par() {
            self.enemy = Some(self.spawn_enemy());
        }
        self.events.push(GameEvent::Scored { score: self.score, level: self.level });
        if self.score == self.goal {
            self.next_level();
        }
    }

    fn next_level(&mut self) {
        if self.level >= self.levels.final_level() {
            self.game_end();
            return;
        }
        let Some(spec) = self.levels.get(self.level + 1).copied() else {
            self.game_end();
            return;
        };
        self.level += 1;
        self.events.push(GameEvent::LevelUp { level: self.level });
        self.player.speed = spec.speed;
        self.goal = spec.par;
        self.timer.pause();
        self.timer.set_time_left(spec.time);
        self.on_timer_tick(self.timer.clock());
        // A level cleared while paused stays paused until the next toggle.
        if self.phase == Phase::Running {
            self.timer.start();
        }
        log::info!("level {}: goal {} in {}s at speed {}", self.level, spec.par, spec.time, spec.speed);
    }

    fn game_end(&mut self) {
        if self.timer.is_running() {
            self.timer.pause();
        }
        self.enemy = None;
        self.phase = Phase::GameOver;
        let outcome = Outcome::from_score(self.score, self.levels.final_par());
        self.events.push(GameEvent::GameOver { outcome, score: self.score });
        log::info!("game over: {:?} with score {}", outcome, self.score);
    }

    fn on_timer_tick(&mut self, clock: Clock) {
        self.events.push(GameEvent::TimeTick { minutes: clock.minutes, seconds: clock.seconds });
        if clock.total_seconds() == 0 && self.phase != Phase::GameOver {
            self.game_end();
        }
    }

    fn spawn_enemy(&mut self) -> Enemy {
        let pos: Position = calculate_spawn(&mut self.rng, self.player.position, self.player.size, &self.boundaries);
        log::trace!("enemy spawned at ({}, {})", pos.x, pos.y);
        Enemy::spawn(pos, self.player.size)
    }
}
