use std::fmt;

/// Opaque identifier of the world a block lives in.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct WorldId(String);

impl WorldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("expected `world,x,y,z`, got `{0}`")]
    BadShape(String),
    #[error("bad coordinate `{0}`")]
    BadCoordinate(String),
}

/// Exact block position; equality is exact, no spatial tolerance.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub world: WorldId,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub fn new(world: WorldId, x: i32, y: i32, z: i32) -> Self {
        Self { world, x, y, z }
    }

    /// The durable-storage key form, `world,x,y,z`.
    pub fn storage_key(&self) -> String {
        self.to_string()
    }

    pub fn parse_key(key: &str) -> Result<Position, KeyParseError> {
        let parts: Vec<&str> = key.split(',').collect();
        let [world, x, y, z] = parts.as_slice() else {
            return Err(KeyParseError::BadShape(key.to_string()));
        };
        let coord = |s: &str| {
            s.trim()
                .parse::<i32>()
                .map_err(|_| KeyParseError::BadCoordinate(s.to_string()))
        };
        Ok(Position {
            world: WorldId::new(world.trim()),
            x: coord(x)?,
            y: coord(y)?,
            z: coord(z)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.world, self.x, self.y, self.z)
    }
}
