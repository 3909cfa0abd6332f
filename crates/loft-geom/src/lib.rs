//! Minimal geometry types for the launch math (no host dependency).
#![forbid(unsafe_code)]

use core::f32::consts::FRAC_1_SQRT_2;
use core::ops::{Add, AddAssign, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const UP: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len > 0.0 { self * (1.0 / len) } else { self }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Error produced when parsing a compass direction name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectionError {
    /// The name is a real direction but lies outside the horizontal plane.
    #[error("direction `{0}` is not in the horizontal plane")]
    OutOfPlane(String),
    #[error("unknown direction `{0}`")]
    Unknown(String),
}

/// The eight horizontal compass/intercardinal directions.
///
/// North is -Z, east is +X; diagonal unit vectors are normalized so a launch
/// along a diagonal carries the same horizontal speed as along a cardinal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    #[inline]
    pub fn unit_vector(self) -> Vec3 {
        match self {
            Direction::North => Vec3::new(0.0, 0.0, -1.0),
            Direction::South => Vec3::new(0.0, 0.0, 1.0),
            Direction::East => Vec3::new(1.0, 0.0, 0.0),
            Direction::West => Vec3::new(-1.0, 0.0, 0.0),
            Direction::NorthEast => Vec3::new(FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
            Direction::NorthWest => Vec3::new(-FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
            Direction::SouthEast => Vec3::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
            Direction::SouthWest => Vec3::new(-FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::NorthEast => "north_east",
            Direction::NorthWest => "north_west",
            Direction::SouthEast => "south_east",
            Direction::SouthWest => "south_west",
        }
    }

    /// Parses a direction name, case-insensitively.
    ///
    /// Vertical names parse as [`DirectionError::OutOfPlane`] so callers can
    /// phrase the rejection differently from a typo.
    pub fn from_name(name: &str) -> Result<Direction, DirectionError> {
        match name.to_ascii_lowercase().as_str() {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            "north_east" => Ok(Direction::NorthEast),
            "north_west" => Ok(Direction::NorthWest),
            "south_east" => Ok(Direction::SouthEast),
            "south_west" => Ok(Direction::SouthWest),
            "up" | "down" => Err(DirectionError::OutOfPlane(name.to_string())),
            _ => Err(DirectionError::Unknown(name.to_string())),
        }
    }
}
