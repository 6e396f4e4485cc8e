use ggez::graphics::Rect;
use ggez::mint::Point2;

use crate::actor::{Pellet, PowerUp};

pub const TILE_SIZE: f32 = 40.0;

// 13x11 tile grid. Wall symbols pick the segment shape, '.' is a pellet,
// 'p' is a power-up.
pub const MAP: [&str; 13] = [
    "1---------2",
    "|....p....|",
    "|.b.[7].b.|",
    "|...._....|",
    "|.[]...[].|",
    "|....^p...|",
    "|.b.[+].b.|",
    "|..p._....|",
    "|.[]...[].|",
    "|....^....|",
    "|.b.[5].b.|",
    "|........p|",
    "4---------3",
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WallShape {
    Horizontal,
    Vertical,
    Corner1,
    Corner2,
    Corner3,
    Corner4,
    Block,
    CapLeft,
    CapRight,
    CapBottom,
    CapTop,
    Cross,
    ConnectorTop,
    ConnectorRight,
    ConnectorBottom,
    ConnectorLeft,
}

impl WallShape {
    fn from_symbol(symbol: char) -> Option<WallShape> {
        match symbol {
            '-' => Some(WallShape::Horizontal),
            '|' => Some(WallShape::Vertical),
            '1' => Some(WallShape::Corner1),
            '2' => Some(WallShape::Corner2),
            '3' => Some(WallShape::Corner3),
            '4' => Some(WallShape::Corner4),
            'b' => Some(WallShape::Block),
            '[' => Some(WallShape::CapLeft),
            ']' => Some(WallShape::CapRight),
            '_' => Some(WallShape::CapBottom),
            '^' => Some(WallShape::CapTop),
            '+' => Some(WallShape::Cross),
            '5' => Some(WallShape::ConnectorTop),
            '6' => Some(WallShape::ConnectorRight),
            '7' => Some(WallShape::ConnectorBottom),
            '8' => Some(WallShape::ConnectorLeft),
            _ => None,
        }
    }
}

pub struct Wall {
    pub rect: Rect,
    pub shape: WallShape,
}

pub struct Maze {
    pub walls: Vec<Wall>,
    pub pellets: Vec<Pellet>,
    pub power_ups: Vec<PowerUp>,
}

pub fn tile_center(col: usize, row: usize) -> Point2<f32> {
    Point2 {
        x: col as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        y: row as f32 * TILE_SIZE + TILE_SIZE / 2.0,
    }
}

impl Maze {
    pub fn parse(rows: &[&str]) -> Maze {
        let mut walls = Vec::new();
        let mut pellets = Vec::new();
        let mut power_ups = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                match symbol {
                    '.' => pellets.push(Pellet::new(tile_center(col, row))),
                    'p' => power_ups.push(PowerUp::new(tile_center(col, row))),
                    _ => {
                        if let Some(shape) = WallShape::from_symbol(symbol) {
                            walls.push(Wall {
                                rect: Rect::new(
                                    col as f32 * TILE_SIZE,
                                    row as f32 * TILE_SIZE,
                                    TILE_SIZE,
                                    TILE_SIZE,
                                ),
                                shape,
                            });
                        }
                    }
                }
            }
        }

        Maze {
            walls,
            pellets,
            power_ups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_cell_of_the_default_map() {
        let maze = Maze::parse(&MAP);
        assert_eq!(maze.walls.len(), 71);
        assert_eq!(maze.pellets.len(), 68);
        assert_eq!(maze.power_ups.len(), 4);
    }

    #[test]
    fn walls_sit_on_tile_corners_with_fixed_extent() {
        let maze = Maze::parse(&MAP);
        let corner = &maze.walls[0];
        assert_eq!(corner.shape, WallShape::Corner1);
        assert_eq!(corner.rect.x, 0.0);
        assert_eq!(corner.rect.y, 0.0);
        assert_eq!(corner.rect.w, TILE_SIZE);
        assert_eq!(corner.rect.h, TILE_SIZE);

        let connector = maze
            .walls
            .iter()
            .find(|wall| wall.rect.x == 200.0 && wall.rect.y == 80.0)
            .unwrap();
        assert_eq!(connector.shape, WallShape::ConnectorBottom);
    }

    #[test]
    fn pellets_and_power_ups_sit_on_tile_centers() {
        let maze = Maze::parse(&MAP);
        let first = &maze.pellets[0];
        assert_eq!(first.pos.x, 60.0);
        assert_eq!(first.pos.y, 60.0);

        let power_up = &maze.power_ups[0];
        assert_eq!(power_up.pos.x, 5.0 * TILE_SIZE + TILE_SIZE / 2.0);
        assert_eq!(power_up.pos.y, TILE_SIZE + TILE_SIZE / 2.0);
    }

    #[test]
    fn tile_center_is_half_a_tile_in() {
        let center = tile_center(1, 1);
        assert_eq!(center.x, 60.0);
        assert_eq!(center.y, 60.0);
    }
}
