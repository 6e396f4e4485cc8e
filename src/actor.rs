use std::f32::consts::PI;

use ggez::graphics::Color;
use ggez::mint::Point2;

pub const PLAYER_SPEED: f32 = 2.0;
pub const PLAYER_RADIUS: f32 = 15.0;
pub const GHOST_SPEED: f32 = 1.0;
pub const GHOST_RADIUS: f32 = 15.0;
pub const PELLET_RADIUS: f32 = 3.0;
pub const POWER_UP_RADIUS: f32 = 8.0;

const MOUTH_OPEN_LIMIT: f32 = 0.75;
const MOUTH_RATE: f32 = 0.02;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    pub fn velocity(self, speed: f32) -> Point2<f32> {
        match self {
            Direction::Up => Point2 { x: 0.0, y: -speed },
            Direction::Down => Point2 { x: 0.0, y: speed },
            Direction::Left => Point2 { x: -speed, y: 0.0 },
            Direction::Right => Point2 { x: speed, y: 0.0 },
        }
    }
}

pub struct Player {
    pub pos: Point2<f32>,
    pub vel: Point2<f32>,
    pub radius: f32,
    pub rotation: f32,
    pub mouth: f32,
    mouth_rate: f32,
}

impl Player {
    pub fn new(pos: Point2<f32>) -> Player {
        Player {
            pos,
            vel: Point2 { x: 0.0, y: 0.0 },
            radius: PLAYER_RADIUS,
            rotation: 0.0,
            mouth: MOUTH_OPEN_LIMIT,
            mouth_rate: MOUTH_RATE,
        }
    }

    pub fn advance(&mut self) {
        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y;

        // Mouth arc bounces between closed and fully open.
        if self.mouth < 0.0 || self.mouth > MOUTH_OPEN_LIMIT {
            self.mouth_rate = -self.mouth_rate;
        }
        self.mouth += self.mouth_rate;
    }

    // Zero velocity keeps the previous facing.
    pub fn update_rotation(&mut self) {
        if self.vel.x > 0.0 {
            self.rotation = 0.0;
        } else if self.vel.x < 0.0 {
            self.rotation = PI;
        } else if self.vel.y > 0.0 {
            self.rotation = PI / 2.0;
        } else if self.vel.y < 0.0 {
            self.rotation = PI * 1.5;
        }
    }
}

pub struct Ghost {
    pub pos: Point2<f32>,
    pub vel: Point2<f32>,
    pub radius: f32,
    pub color: Color,
    pub speed: f32,
    pub scared: bool,
    pub scared_left: f32,
    pub prev_blocked: Vec<Direction>,
}

impl Ghost {
    pub fn new(pos: Point2<f32>, color: Color) -> Ghost {
        Ghost {
            pos,
            vel: Point2 {
                x: GHOST_SPEED,
                y: 0.0,
            },
            radius: GHOST_RADIUS,
            color,
            speed: GHOST_SPEED,
            scared: false,
            scared_left: 0.0,
            prev_blocked: Vec::new(),
        }
    }

    pub fn advance(&mut self) {
        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y;
    }

    pub fn heading(&self) -> Option<Direction> {
        if self.vel.x > 0.0 {
            Some(Direction::Right)
        } else if self.vel.x < 0.0 {
            Some(Direction::Left)
        } else if self.vel.y < 0.0 {
            Some(Direction::Up)
        } else if self.vel.y > 0.0 {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

pub struct Pellet {
    pub pos: Point2<f32>,
    pub radius: f32,
}

impl Pellet {
    pub fn new(pos: Point2<f32>) -> Pellet {
        Pellet {
            pos,
            radius: PELLET_RADIUS,
        }
    }
}

pub struct PowerUp {
    pub pos: Point2<f32>,
    pub radius: f32,
}

impl PowerUp {
    pub fn new(pos: Point2<f32>) -> PowerUp {
        PowerUp {
            pos,
            radius: POWER_UP_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_applies_velocity_per_tick() {
        let mut player = Player::new(Point2 { x: 60.0, y: 60.0 });
        player.vel = Point2 { x: 2.0, y: 0.0 };
        player.advance();
        assert_eq!(player.pos.x, 62.0);
        assert_eq!(player.pos.y, 60.0);
    }

    #[test]
    fn mouth_phase_bounces_within_its_arc() {
        let mut player = Player::new(Point2 { x: 0.0, y: 0.0 });
        for _ in 0..200 {
            player.advance();
            assert!(player.mouth >= -MOUTH_RATE);
            assert!(player.mouth <= MOUTH_OPEN_LIMIT + MOUTH_RATE);
        }
    }

    #[test]
    fn rotation_follows_velocity_sign_and_holds_on_stop() {
        let mut player = Player::new(Point2 { x: 0.0, y: 0.0 });

        player.vel = Point2 { x: 2.0, y: 0.0 };
        player.update_rotation();
        assert_eq!(player.rotation, 0.0);

        player.vel = Point2 { x: -2.0, y: 0.0 };
        player.update_rotation();
        assert_eq!(player.rotation, PI);

        player.vel = Point2 { x: 0.0, y: 2.0 };
        player.update_rotation();
        assert_eq!(player.rotation, PI / 2.0);

        player.vel = Point2 { x: 0.0, y: -2.0 };
        player.update_rotation();
        assert_eq!(player.rotation, PI * 1.5);

        player.vel = Point2 { x: 0.0, y: 0.0 };
        player.update_rotation();
        assert_eq!(player.rotation, PI * 1.5);
    }

    #[test]
    fn heading_reads_the_velocity_sign() {
        let mut ghost = Ghost::new(Point2 { x: 0.0, y: 0.0 }, Color::RED);
        assert_eq!(ghost.heading(), Some(Direction::Right));

        ghost.vel = Point2 { x: 0.0, y: -1.0 };
        assert_eq!(ghost.heading(), Some(Direction::Up));

        ghost.vel = Point2 { x: 0.0, y: 0.0 };
        assert_eq!(ghost.heading(), None);
    }
}
