use std::slice::Iter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn flip(&self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }
}

/// Structural position a chain takes in the rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Top,
    Bottom,
    Left,
    Right,
}

impl Role {
    pub fn iter() -> Iter<'static, Role> {
        static ROLES: [Role; 4] = [Role::Top, Role::Bottom, Role::Left, Role::Right];
        ROLES.iter()
    }

    /// Direction the chain in this role is read in
    pub fn direction(&self) -> Direction {
        match self {
            Self::Top | Self::Bottom => Direction::Across,
            Self::Left | Self::Right => Direction::Down,
        }
    }

    /// Role taking this one's place when the rectangle is mirrored about its main diagonal
    pub fn transpose(&self) -> Self {
        match self {
            Self::Top => Self::Left,
            Self::Left => Self::Top,
            Self::Bottom => Self::Right,
            Self::Right => Self::Bottom,
        }
    }
}

/// A corner of the rectangle, where one across chain meets one down chain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn iter() -> Iter<'static, Corner> {
        static CORNERS: [Corner; 4] = [
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomLeft,
            Corner::BottomRight,
        ];
        CORNERS.iter()
    }

    /// The (across, down) roles meeting here
    pub fn roles(&self) -> (Role, Role) {
        match self {
            Self::TopLeft => (Role::Top, Role::Left),
            Self::TopRight => (Role::Top, Role::Right),
            Self::BottomLeft => (Role::Bottom, Role::Left),
            Self::BottomRight => (Role::Bottom, Role::Right),
        }
    }

    /// Whether the across chain meets this corner at the start of its span
    pub fn is_left(&self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Whether the down chain meets this corner at the start of its span
    pub fn is_top(&self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_split_by_direction() {
        let across = Role::iter().filter(|r| r.direction() == Direction::Across).count();
        let down = Role::iter().filter(|r| r.direction() == Direction::Down).count();
        assert_eq!(across, 2);
        assert_eq!(down, 2);
        for r in Role::iter() {
            assert_eq!(r.transpose().direction(), r.direction().flip());
            assert_eq!(r.transpose().transpose(), *r);
        }
    }

    #[test]
    fn test_corners_join_perpendicular_chains() {
        for c in Corner::iter() {
            let (across, down) = c.roles();
            assert_eq!(across.direction(), Direction::Across);
            assert_eq!(down.direction(), Direction::Down);
            assert_eq!(c.is_top(), across == Role::Top);
            assert_eq!(c.is_left(), down == Role::Left);
        }
    }
}
