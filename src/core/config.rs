use crate::core::card::Suit;

/// Highest card rank (King).
pub const MAX_RANK: u8 = 13;
/// Rank at which cards become castle enemies (Jack).
pub const FACE_RANK: u8 = 11;
/// Hand size dealt at setup; Diamonds never draw past it.
pub const HAND_LIMIT: usize = 8;
/// Upper bound on the summed rank of a same-rank combo.
pub const MAX_COMBO_TOTAL: u32 = 10;
/// Largest same-rank combo.
pub const MAX_COMBO_CARDS: usize = 4;

pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

/// Order in which suit effects resolve, independent of the order cards were selected.
pub const EFFECT_ORDER: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

/// Health and attack of a castle enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyStats {
    pub health: i32,
    pub attack: u32,
}

impl EnemyStats {
    pub const fn new(health: i32, attack: u32) -> Self {
        Self { health, attack }
    }
}

/// Stats indexed by `rank - FACE_RANK`: Jack, Queen, King.
pub const ENEMIES: [EnemyStats; 3] = [
    EnemyStats::new(20, 10),
    EnemyStats::new(30, 15),
    EnemyStats::new(40, 20),
];

/// Look up enemy stats for a face-card rank. Returns `None` for non-face ranks.
pub fn enemy_stats(rank: u8) -> Option<EnemyStats> {
    if (FACE_RANK..=MAX_RANK).contains(&rank) {
        Some(ENEMIES[(rank - FACE_RANK) as usize])
    } else {
        None
    }
}
