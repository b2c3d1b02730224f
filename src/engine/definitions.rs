use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seeds held by a single hole.
pub type Seeds = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Gebeta: two rows of six holes, row index is the player index.
    #[serde(rename = "12-hole")]
    TwelveHole,
    /// Gabata: three rows, players own the outer rows.
    #[serde(rename = "18-hole")]
    EighteenHole,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    First,
    Second,
}

/// Captured seeds of both players. Carried with every request, not scored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stores(pub [Seeds; 2]);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Vec<Seeds>>,
}

/// Rows a player sows from and faces, resolved for one variant.
#[derive(Clone, Copy, Debug)]
pub struct Sides<'a> {
    pub own: &'a [Seeds],
    pub opponent: &'a [Seeds],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Simple,
    Advanced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub hole: usize,
    pub seeds: Seeds,
    pub strategy: StrategyKind,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no row {row} (it has {rows} rows)")]
    MissingRow { row: usize, rows: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown variant '{0}', expected '12-hole' or '18-hole'")]
pub struct UnknownVariant(pub String);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("player must be 0 or 1, got {0}")]
pub struct UnknownPlayer(pub i64);

// ---
// Implementation block
// ---

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::TwelveHole => "12-hole",
            Variant::EighteenHole => "18-hole",
        }
    }

    /// Row sown by `player`.
    pub fn player_row(&self, player: Player) -> usize {
        match (self, player) {
            (Variant::TwelveHole, player) => player.index(),
            (Variant::EighteenHole, Player::First) => 0,
            (Variant::EighteenHole, Player::Second) => 2,
        }
    }

    /// Row facing `player`.
    pub fn opponent_row(&self, player: Player) -> usize {
        self.player_row(player.opponent())
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "12-hole" => Ok(Variant::TwelveHole),
            "18-hole" => Ok(Variant::EighteenHole),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}

impl Player {
    pub fn index(&self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl TryFrom<i64> for Player {
    type Error = UnknownPlayer;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Player::First),
            1 => Ok(Player::Second),
            other => Err(UnknownPlayer(other)),
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = UnknownPlayer;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Player::try_from(i64::from(value))
    }
}

impl From<Player> for u8 {
    fn from(value: Player) -> Self {
        value.index() as u8
    }
}

impl Board {
    pub fn new(rows: Vec<Vec<Seeds>>) -> Self {
        Board { rows }
    }

    pub fn rows(&self) -> &[Vec<Seeds>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Result<&[Seeds], BoardError> {
        self.rows
            .get(row)
            .map(Vec::as_slice)
            .ok_or(BoardError::MissingRow {
                row,
                rows: self.rows.len(),
            })
    }

    pub fn sides(&self, player: Player, variant: Variant) -> Result<Sides<'_>, BoardError> {
        Ok(Sides {
            own: self.row(variant.player_row(player))?,
            opponent: self.row(variant.opponent_row(player))?,
        })
    }
}

impl From<Vec<Vec<Seeds>>> for Board {
    fn from(rows: Vec<Vec<Seeds>>) -> Self {
        Board::new(rows)
    }
}

impl Sides<'_> {
    /// Holes of the player's row that hold at least one seed.
    pub fn playable(&self) -> impl Iterator<Item = (usize, Seeds)> + '_ {
        self.own
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, seeds)| seeds > 0)
    }

    /// Seeds in the opponent's hole mirroring `hole`, zero when the row is shorter.
    pub fn facing(&self, hole: usize) -> Seeds {
        self.opponent.get(hole).copied().unwrap_or(0)
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Simple => f.write_str("simple"),
            StrategyKind::Advanced => f.write_str("advanced"),
        }
    }
}

impl Suggestion {
    pub fn reasoning(&self) -> String {
        format!("Selected hole {} with {} seeds", self.hole, self.seeds)
    }
}
