use std::fmt;

/// Which of the two seats a piece or turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// 1-based seat number, used by the text rendering
    pub fn number(self) -> u8 {
        match self {
            PlayerId::P1 => 1,
            PlayerId::P2 => 2,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A seat plus the color token its pieces are drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    color: String,
}

impl Player {
    pub(crate) fn new(id: PlayerId, color: String) -> Self {
        Player { id, color }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Normalized (trimmed, lowercase) color token
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.color)
    }
}
