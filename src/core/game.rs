use alloc::{string::String, vec::Vec};
use log::{debug, info, warn};
use rand::{seq::SliceRandom, Rng};

use crate::core::{
    card::{full_deck, total_value, Card, Suit},
    common::PlayError,
    config::{enemy_stats, EFFECT_ORDER, HAND_LIMIT, MAX_RANK},
    rules::is_valid_play,
};

/// Serializable overall game state.
///
/// Every card lives in exactly one of the six collections. `castle` is kept
/// sorted by ascending rank and its front card is the active enemy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub player_name: String,
    /// Setup scratch pile; empty once the deck has been split.
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub castle: Vec<Card>,
    pub tavern: Vec<Card>,
    /// Cards committed against the active enemy, flushed when it falls.
    pub played: Vec<Card>,
    pub discard: Vec<Card>,
    pub enemy_health: i32,
    pub enemy_attack: u32,
    /// Spades shield against the active enemy only.
    pub damage_reduction: u32,
    pub cards_played: u32,
    pub awaiting_defense: bool,
    pub game_over: bool,
    pub victory: bool,
}

impl GameState {
    /// Whether the snapshot could have come from a real game: the six piles
    /// hold each of the 52 cards exactly once and the castle holds only face
    /// cards in ascending rank.
    pub fn is_consistent(&self) -> bool {
        let piles = [
            &self.deck,
            &self.hand,
            &self.castle,
            &self.tavern,
            &self.played,
            &self.discard,
        ];
        let mut seen = [false; 52];
        let mut count = 0;
        for card in piles.iter().flat_map(|pile| pile.iter()) {
            let slot = card.suit() as usize * MAX_RANK as usize + (card.rank() as usize - 1);
            if seen[slot] {
                return false;
            }
            seen[slot] = true;
            count += 1;
        }
        count == seen.len()
            && self.hand.len() <= HAND_LIMIT
            && self.castle.iter().all(|c| c.is_face())
            && self.castle.windows(2).all(|w| w[0].rank() <= w[1].rank())
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Turn phase of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlay,
    AwaitingDefense,
    Victory,
    Defeat,
}

/// How a defeated enemy fell. Exact kills return the enemy to the tavern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kill {
    Exact,
    Overkill,
}

/// Suit effects triggered by one attack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectReport {
    /// Cards moved from discard to the bottom of the tavern (Hearts).
    pub recycled: usize,
    /// Cards drawn into the hand (Diamonds).
    pub drawn: usize,
    /// Shield added against the active enemy (Spades).
    pub shield: u32,
    /// Whether the damage was doubled (Clubs).
    pub doubled: bool,
}

/// What happened to the active enemy after an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Enemy is still standing and counter-attacks for `counter`.
    Survived { health: i32, counter: u32 },
    /// Enemy fell and `next` is the new active enemy.
    Defeated { kill: Kill, next: Card },
    /// The last enemy fell.
    Victory { kill: Kill },
}

/// Full report of a resolved attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOutcome {
    pub enemy: Card,
    pub cards: Vec<Card>,
    /// Rank sum before suit effects.
    pub base_damage: u32,
    /// Damage dealt after suit effects.
    pub damage: u32,
    pub effects: EffectReport,
    pub result: AttackResult,
}

/// Result of a defense attempt against a counter-attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefenseOutcome {
    /// Counter-attack absorbed; `discarded` left the hand.
    Blocked {
        total: u32,
        required: u32,
        discarded: Vec<Card>,
    },
    /// Selection falls short but other cards remain: nothing changed, top up and retry.
    Insufficient { total: u32, required: u32 },
    /// Selection falls short using the whole hand. The game is lost.
    Failed { total: u32, required: u32 },
}

#[derive(Default)]
struct SuitTally([u32; 4]);

impl SuitTally {
    fn slot(suit: Suit) -> usize {
        match suit {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Clubs => 2,
            Suit::Diamonds => 3,
        }
    }

    fn add(&mut self, suit: Suit, amount: u32) {
        self.0[Self::slot(suit)] += amount;
    }

    fn get(&self, suit: Suit) -> u32 {
        self.0[Self::slot(suit)]
    }
}

/// Core rules engine. All state changes go through its operations.
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Shuffle a fresh deck, build the castle and tavern, deal the opening hand
    /// and activate the first enemy.
    pub fn new_game<R: Rng + ?Sized>(player_name: impl Into<String>, rng: &mut R) -> Self {
        let mut state = GameState {
            player_name: player_name.into(),
            deck: full_deck(),
            ..GameState::default()
        };
        state.deck.shuffle(rng);

        for card in state.deck.drain(..) {
            if card.is_face() {
                state.castle.push(card);
            } else {
                state.tavern.push(card);
            }
        }
        // stable: same-rank enemies keep their shuffled order
        state.castle.sort_by_key(|c| c.rank());

        let opening = HAND_LIMIT.min(state.tavern.len());
        state.hand.extend(state.tavern.drain(..opening));

        let mut engine = Self { state };
        engine.activate_enemy();
        engine
    }

    /// Restore an engine from a previously saved state.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Generate a snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    pub fn player_name(&self) -> &str {
        &self.state.player_name
    }

    pub fn hand(&self) -> &[Card] {
        &self.state.hand
    }

    pub fn castle(&self) -> &[Card] {
        &self.state.castle
    }

    pub fn tavern(&self) -> &[Card] {
        &self.state.tavern
    }

    pub fn played(&self) -> &[Card] {
        &self.state.played
    }

    pub fn discard(&self) -> &[Card] {
        &self.state.discard
    }

    /// Front card of the castle, if any enemy remains.
    pub fn active_enemy(&self) -> Option<Card> {
        self.state.castle.first().copied()
    }

    pub fn enemy_health(&self) -> i32 {
        self.state.enemy_health
    }

    /// Base attack of the active enemy, before Spades.
    pub fn enemy_attack(&self) -> u32 {
        self.state.enemy_attack
    }

    pub fn damage_reduction(&self) -> u32 {
        self.state.damage_reduction
    }

    /// Damage the next counter-attack deals: attack minus shield, never negative.
    pub fn effective_damage(&self) -> u32 {
        self.state.enemy_attack.saturating_sub(self.state.damage_reduction)
    }

    pub fn cards_played(&self) -> u32 {
        self.state.cards_played
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn is_victory(&self) -> bool {
        self.state.victory
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        match (self.state.game_over, self.state.victory) {
            (false, _) => GameStatus::InProgress,
            (true, true) => GameStatus::Won,
            (true, false) => GameStatus::Lost,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.status() {
            GameStatus::Won => Phase::Victory,
            GameStatus::Lost => Phase::Defeat,
            GameStatus::InProgress if self.state.awaiting_defense => Phase::AwaitingDefense,
            GameStatus::InProgress => Phase::AwaitingPlay,
        }
    }

    /// Cards at the given hand positions, in selection order.
    pub fn selection(&self, indices: &[usize]) -> Result<Vec<Card>, PlayError> {
        self.check_indices(indices)?;
        Ok(indices.iter().map(|&i| self.state.hand[i]).collect())
    }

    /// Whether the given hand positions form a legal attack.
    pub fn is_valid_selection(&self, indices: &[usize]) -> bool {
        self.selection(indices)
            .map(|cards| is_valid_play(&cards))
            .unwrap_or(false)
    }

    /// Attack the active enemy with the cards at `indices`.
    ///
    /// Rejected calls return an error and leave the game untouched.
    pub fn play(&mut self, indices: &[usize]) -> Result<AttackOutcome, PlayError> {
        self.ensure_live()?;
        if self.state.awaiting_defense {
            return Err(PlayError::DefensePending);
        }
        if self.state.hand.is_empty() {
            return Err(PlayError::EmptyHand);
        }
        if indices.is_empty() {
            return Err(PlayError::EmptySelection);
        }
        let cards = self.selection(indices)?;
        if !is_valid_play(&cards) {
            return Err(PlayError::IllegalPlay);
        }
        let enemy = self.active_enemy().ok_or(PlayError::GameOver)?;

        let base_damage = total_value(&cards);
        self.remove_from_hand(indices);
        self.state.played.extend(cards.iter().copied());

        let mut tally = SuitTally::default();
        for card in cards.iter().filter(|c| c.suit() != enemy.suit()) {
            tally.add(card.suit(), card.value());
        }

        let mut damage = base_damage;
        let mut effects = EffectReport::default();
        for suit in EFFECT_ORDER {
            let amount = tally.get(suit);
            if amount == 0 {
                continue;
            }
            match suit {
                Suit::Hearts => {
                    effects.recycled = self.recycle_discard(amount as usize);
                    debug!("Hearts: {} cards returned to the tavern", effects.recycled);
                }
                Suit::Diamonds => {
                    effects.drawn = self.draw(amount as usize);
                    debug!("Diamonds: drew {} cards", effects.drawn);
                }
                Suit::Spades => {
                    self.state.damage_reduction += amount;
                    effects.shield = amount;
                    debug!("Spades: shield now {}", self.state.damage_reduction);
                }
                Suit::Clubs => {
                    damage *= 2;
                    effects.doubled = true;
                    debug!("Clubs: damage doubled to {}", damage);
                }
            }
        }

        self.state.enemy_health -= damage as i32;
        self.state.cards_played += cards.len() as u32;
        debug!("{} dealt {} damage to {}", self.state.player_name, damage, enemy);

        let result = if self.state.enemy_health <= 0 {
            self.defeat_enemy()
        } else {
            self.state.awaiting_defense = true;
            AttackResult::Survived {
                health: self.state.enemy_health,
                counter: self.effective_damage(),
            }
        };

        Ok(AttackOutcome {
            enemy,
            cards,
            base_damage,
            damage,
            effects,
            result,
        })
    }

    /// Absorb the pending counter-attack with the cards at `indices`.
    ///
    /// A short selection that leaves cards in hand is reported as
    /// [`DefenseOutcome::Insufficient`] without changing anything; the caller may
    /// retry with more cards or concede.
    pub fn defend(&mut self, indices: &[usize]) -> Result<DefenseOutcome, PlayError> {
        self.ensure_live()?;
        if !self.state.awaiting_defense {
            return Err(PlayError::NoDefensePending);
        }
        let cards = self.selection(indices)?;
        let total = total_value(&cards);
        let required = self.effective_damage();

        if total >= required {
            let discarded = self.remove_from_hand(indices);
            self.state.discard.extend(discarded.iter().copied());
            self.state.awaiting_defense = false;
            debug!("Blocked {} damage with {}", required, total);
            Ok(DefenseOutcome::Blocked {
                total,
                required,
                discarded,
            })
        } else if indices.len() == self.state.hand.len() {
            info!("Defense failed: {}/{} with the whole hand", total, required);
            self.finish(false);
            Ok(DefenseOutcome::Failed { total, required })
        } else {
            Ok(DefenseOutcome::Insufficient { total, required })
        }
    }

    /// Give up the game (explicit surrender or no cards left to play).
    pub fn concede(&mut self) {
        if !self.state.game_over {
            info!("{} concedes", self.state.player_name);
            self.finish(false);
        }
    }

    /// Joker refill: discard the hand and the played pile, then draw a fresh
    /// hand from the tavern. Returns the number of cards drawn.
    pub fn refill_hand(&mut self) -> Result<usize, PlayError> {
        self.ensure_live()?;
        let hand = core::mem::take(&mut self.state.hand);
        self.state.discard.extend(hand);
        let played = core::mem::take(&mut self.state.played);
        self.state.discard.extend(played);
        let drawn = self.draw(HAND_LIMIT);
        info!("Joker used: drew {} cards", drawn);
        Ok(drawn)
    }

    fn ensure_live(&self) -> Result<(), PlayError> {
        if self.state.game_over {
            Err(PlayError::GameOver)
        } else {
            Ok(())
        }
    }

    fn check_indices(&self, indices: &[usize]) -> Result<(), PlayError> {
        for (n, &idx) in indices.iter().enumerate() {
            if idx >= self.state.hand.len() {
                return Err(PlayError::InvalidIndex(idx));
            }
            if indices[..n].contains(&idx) {
                return Err(PlayError::DuplicateIndex(idx));
            }
        }
        Ok(())
    }

    /// Remove validated positions from the hand, highest first so lower
    /// positions stay valid. Cards are returned in removal order.
    fn remove_from_hand(&mut self, indices: &[usize]) -> Vec<Card> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
            .into_iter()
            .map(|idx| self.state.hand.remove(idx))
            .collect()
    }

    fn recycle_discard(&mut self, amount: usize) -> usize {
        let n = amount.min(self.state.discard.len());
        let moved: Vec<Card> = self.state.discard.drain(..n).collect();
        self.state.tavern.extend(moved);
        n
    }

    fn draw(&mut self, amount: usize) -> usize {
        let room = HAND_LIMIT.saturating_sub(self.state.hand.len());
        let n = amount.min(room).min(self.state.tavern.len());
        let drawn: Vec<Card> = self.state.tavern.drain(..n).collect();
        self.state.hand.extend(drawn);
        n
    }

    fn defeat_enemy(&mut self) -> AttackResult {
        let enemy = self.state.castle.remove(0);
        let kill = if self.state.enemy_health == 0 {
            self.state.tavern.push(enemy);
            Kill::Exact
        } else {
            self.state.discard.push(enemy);
            Kill::Overkill
        };
        let played = core::mem::take(&mut self.state.played);
        self.state.discard.extend(played);
        info!("{} defeated ({:?})", enemy, kill);

        match self.activate_enemy() {
            Some(next) => AttackResult::Defeated { kill, next },
            None => {
                self.finish(true);
                AttackResult::Victory { kill }
            }
        }
    }

    /// Load stats for the castle front and reset the shield.
    fn activate_enemy(&mut self) -> Option<Card> {
        let enemy = self.active_enemy()?;
        match enemy_stats(enemy.rank()) {
            Some(stats) => {
                self.state.enemy_health = stats.health;
                self.state.enemy_attack = stats.attack;
            }
            None => warn!("Castle card {} is not a face card", enemy),
        }
        self.state.damage_reduction = 0;
        self.state.awaiting_defense = false;
        Some(enemy)
    }

    fn finish(&mut self, victory: bool) {
        self.state.game_over = true;
        self.state.victory = victory;
        self.state.awaiting_defense = false;
        info!(
            "Game over for {}: {}",
            self.state.player_name,
            if victory { "victory" } else { "defeat" }
        );
    }
}
