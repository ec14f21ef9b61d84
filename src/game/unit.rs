//! Purchasable unit kinds, army slots and shop offers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::PieceType;

/// A piece kind the player can own. Kings are never purchasable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitKind {
    /// Pawn.
    Pawn,
    /// Knight.
    Knight,
    /// Bishop.
    Bishop,
    /// Rook.
    Rook,
    /// Queen.
    Queen,
}

impl UnitKind {
    /// All kinds in table order.
    pub const ALL: [UnitKind; 5] = [
        UnitKind::Pawn,
        UnitKind::Knight,
        UnitKind::Bishop,
        UnitKind::Rook,
        UnitKind::Queen,
    ];

    /// The board piece this unit becomes when deployed.
    #[must_use]
    pub const fn piece_type(self) -> PieceType {
        match self {
            UnitKind::Pawn => PieceType::Pawn,
            UnitKind::Knight => PieceType::Knight,
            UnitKind::Bishop => PieceType::Bishop,
            UnitKind::Rook => PieceType::Rook,
            UnitKind::Queen => PieceType::Queen,
        }
    }

    /// Unit kind for a board piece, `None` for kings.
    #[must_use]
    pub const fn from_piece_type(kind: PieceType) -> Option<Self> {
        match kind {
            PieceType::Pawn => Some(UnitKind::Pawn),
            PieceType::Knight => Some(UnitKind::Knight),
            PieceType::Bishop => Some(UnitKind::Bishop),
            PieceType::Rook => Some(UnitKind::Rook),
            PieceType::Queen => Some(UnitKind::Queen),
            PieceType::King => None,
        }
    }

    /// Single uppercase letter (`P`, `N`, `B`, `R`, `Q`).
    #[must_use]
    pub const fn letter(self) -> char {
        self.piece_type().letter()
    }

    /// Parse an army string such as `"PNQ"` into unit kinds.
    ///
    /// # Errors
    ///
    /// Returns the first character that is not a purchasable kind.
    pub fn parse_army(text: &str) -> Result<Vec<Self>, char> {
        text.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| {
                PieceType::from_letter(c)
                    .and_then(Self::from_piece_type)
                    .ok_or(c)
            })
            .collect()
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitKind::Pawn => "pawn",
            UnitKind::Knight => "knight",
            UnitKind::Bishop => "bishop",
            UnitKind::Rook => "rook",
            UnitKind::Queen => "queen",
        };
        f.write_str(name)
    }
}

/// Identifier for an offer or army slot, unique within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u64);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source owned by a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// A sequence starting at id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// A sequence whose next id is `next` (at least 1).
    #[must_use]
    pub const fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Mint the next id.
    pub fn mint(&mut self) -> UnitId {
        let id = UnitId(self.next.max(1));
        self.next = id.0.saturating_add(1);
        id
    }
}

/// A purchased unit in the player's army.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArmySlot {
    /// Id assigned at purchase.
    pub id: UnitId,
    /// Unit kind.
    pub kind: UnitKind,
}

/// One purchasable entry in a shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Offer {
    /// Offer id.
    pub id: UnitId,
    /// Unit kind on sale.
    pub kind: UnitKind,
    /// Price in gold.
    pub price: u32,
}

/// The offers available between rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shop {
    /// Up to three offers with distinct kinds.
    pub offers: Vec<Offer>,
    /// Cost of the next reroll.
    pub reroll_cost: u32,
}

impl Shop {
    /// Offer with the given id, if still on sale.
    #[must_use]
    pub fn offer(&self, id: UnitId) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_army() {
        assert_eq!(
            UnitKind::parse_army("PnQ"),
            Ok(vec![UnitKind::Pawn, UnitKind::Knight, UnitKind::Queen])
        );
        assert_eq!(UnitKind::parse_army("P, R"), Ok(vec![UnitKind::Pawn, UnitKind::Rook]));
        assert_eq!(UnitKind::parse_army(""), Ok(vec![]));
        assert_eq!(UnitKind::parse_army("PK"), Err('K'));
        assert_eq!(UnitKind::parse_army("x"), Err('x'));
    }

    #[test]
    fn test_king_not_a_unit() {
        assert_eq!(UnitKind::from_piece_type(PieceType::King), None);
        for kind in UnitKind::ALL {
            assert_eq!(UnitKind::from_piece_type(kind.piece_type()), Some(kind));
        }
    }

    #[test]
    fn test_id_sequence_unique() {
        let mut ids = IdSequence::new();
        let a = ids.mint();
        let b = ids.mint();
        assert_ne!(a, b);
        assert_eq!(a, UnitId(1));
        assert_eq!(b, UnitId(2));

        // A default sequence also starts at 1.
        let mut ids = IdSequence::default();
        assert_eq!(ids.mint(), UnitId(1));

        let mut ids = IdSequence::starting_at(10);
        assert_eq!(ids.mint(), UnitId(10));
    }
}
