//! Directional input, decoupled from any keyboard representation.

/// One of the four pan directions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Direction::Up => 1 << 0,
            Direction::Down => 1 << 1,
            Direction::Left => 1 << 2,
            Direction::Right => 1 << 3,
        }
    }
}

/// Set of directions held during one tick.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Directions(u8);

impl Directions {
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns a copy with `direction` added.
    #[inline]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    #[inline]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    #[inline]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Directions::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

/// Query for "is this direction currently held".
///
/// The platform layer implements this over its key state; the core calls it
/// once per tick through [`held_directions`](DirectionInput::held_directions).
pub trait DirectionInput {
    fn is_held(&self, direction: Direction) -> bool;

    fn held_directions(&self) -> Directions {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.is_held(d))
            .collect()
    }
}

impl DirectionInput for Directions {
    #[inline]
    fn is_held(&self, direction: Direction) -> bool {
        self.contains(direction)
    }
}
