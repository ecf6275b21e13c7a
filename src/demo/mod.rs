//! Star catcher: the bundled demo game.
//!
//! Colored stars fall from the top of the play area; a ship along the bottom
//! catches them. Arrow keys or `a`/`d` move, `p` pauses.

pub mod rng;

use std::time::Duration;

use anyhow::{ensure, Result};

use crate::engine::Game;
use crate::input::{InputMap, KeyCode};
use crate::types::{Color, Drawable};

use rng::SimpleRng;

const SHIP: [&str; 2] = [" ^ ", "/#\\"];
const SHIP_WIDTH: u16 = 3;
const SHIP_HEIGHT: u16 = SHIP.len() as u16;

/// Stars move one row every this many ticks.
const FALL_EVERY: u64 = 3;
/// One in this many ticks spawns a star.
const SPAWN_ODDS: u32 = 5;

const BASE_DELAY_MS: u64 = 80;
const MIN_DELAY_MS: u64 = 30;
/// The delay shrinks by 5ms for every this many points.
const SPEEDUP_EVERY: u32 = 5;

const DEFAULT_SEED: u32 = 0x5eed;

const STAR_COLORS: [Color; 6] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Star {
    x: u16,
    y: u16,
    color: Color,
}

pub struct StarCatcher {
    width: u16,
    height: u16,
    ship_x: u16,
    stars: Vec<Star>,
    score: u32,
    missed: u32,
    ticks: u64,
    paused: bool,
    rng: SimpleRng,
    map: InputMap<Action>,
}

impl StarCatcher {
    pub fn with_seed(width: u16, height: u16, seed: u32) -> Result<Self> {
        ensure!(
            width >= SHIP_WIDTH && height >= SHIP_HEIGHT + 2,
            "play area {width}x{height} is too small for the ship"
        );

        let map = InputMap::new()
            .bind_all([KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], Action::Left)
            .bind_all([KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], Action::Right)
            .bind_all([KeyCode::Char('p'), KeyCode::Char('P')], Action::Pause);

        Ok(Self {
            width,
            height,
            ship_x: (width - SHIP_WIDTH) / 2,
            stars: Vec::new(),
            score: 0,
            missed: 0,
            ticks: 0,
            paused: false,
            rng: SimpleRng::new(seed),
            map,
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn missed(&self) -> u32 {
        self.missed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn ship_y(&self) -> u16 {
        self.height - SHIP_HEIGHT
    }

    fn under_ship(&self, star: &Star) -> bool {
        star.y >= self.ship_y() && star.x >= self.ship_x && star.x < self.ship_x + SHIP_WIDTH
    }

    fn settle_stars(&mut self) {
        let mut caught = 0;
        let mut missed = 0;
        let stars = std::mem::take(&mut self.stars);
        for star in stars {
            if self.under_ship(&star) {
                caught += 1;
            } else if star.y >= self.height {
                missed += 1;
            } else {
                self.stars.push(star);
            }
        }
        self.score += caught;
        self.missed += missed;
    }

    fn spawn_star(&mut self) {
        if self.rng.next_range(SPAWN_ODDS) != 0 {
            return;
        }
        let x = self.rng.next_range(u32::from(self.width)) as u16;
        let color = STAR_COLORS[self.rng.next_range(STAR_COLORS.len() as u32) as usize];
        self.stars.push(Star { x, y: 0, color });
    }
}

impl Game for StarCatcher {
    type Action = Action;

    fn new(width: u16, height: u16) -> Result<Self> {
        Self::with_seed(width, height, DEFAULT_SEED)
    }

    fn entities(&self) -> Vec<Drawable> {
        let mut out: Vec<Drawable> = self
            .stars
            .iter()
            .map(|s| Drawable::glyph(s.x, s.y, '*').with_color(s.color))
            .collect();
        out.push(Drawable::texture(self.ship_x, self.ship_y(), SHIP).with_color(Color::Cyan));
        out
    }

    fn input_map(&self) -> &InputMap<Action> {
        &self.map
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Pause => self.paused = !self.paused,
            _ if self.paused => {}
            Action::Left => self.ship_x = self.ship_x.saturating_sub(1),
            Action::Right => self.ship_x = (self.ship_x + 1).min(self.width - SHIP_WIDTH),
        }
    }

    fn advance(&mut self) -> Result<()> {
        if self.paused {
            return Ok(());
        }
        self.ticks += 1;
        if self.ticks % FALL_EVERY == 0 {
            for star in &mut self.stars {
                star.y += 1;
            }
        }
        self.settle_stars();
        self.spawn_star();
        Ok(())
    }

    fn exit_message(&self) -> String {
        format!(
            "Thanks for playing! Final score: {} (missed {})",
            self.score, self.missed
        )
    }

    fn status_text(&self) -> String {
        let state = if self.paused { "PAUSED" } else { "arrows/a/d move, p pause, ctrl+c quit" };
        format!("Score: {}  Missed: {}  {}", self.score, self.missed, state)
    }

    fn frame_delay(&self) -> Duration {
        let speedup = u64::from(self.score / SPEEDUP_EVERY) * 5;
        Duration::from_millis(BASE_DELAY_MS.saturating_sub(speedup).max(MIN_DELAY_MS))
    }
}
