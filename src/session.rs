#![cfg(feature = "std")]

use log::{info, warn};

use crate::{
    core::{DefenseOutcome, GameEngine, GameStatus, Phase},
    player::{AttackChoice, DefenseChoice, Player},
    storage::{stats::now_timestamp, Outcome, StatsRecord, StorageConfig},
};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a terminal state and was recorded.
    Finished(Outcome),
    /// The player saved and left mid-game.
    Saved,
}

/// Turn loop combining a Player, the GameEngine and the storage collaborators.
pub struct Session {
    player: Box<dyn Player>,
    engine: GameEngine,
    storage: StorageConfig,
    jokers: u32,
}

impl Session {
    pub fn new(player: Box<dyn Player>, engine: GameEngine, storage: StorageConfig) -> Self {
        Self {
            player,
            engine,
            storage,
            jokers: 0,
        }
    }

    /// Allow `jokers` hand refills when the hand runs out.
    pub fn with_jokers(mut self, jokers: u32) -> Self {
        self.jokers = jokers;
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn jokers_remaining(&self) -> u32 {
        self.jokers
    }

    /// Current status of the underlying game engine.
    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    /// Drive the game until it ends or the player saves.
    pub fn run(&mut self) -> anyhow::Result<SessionEnd> {
        loop {
            match self.engine.phase() {
                Phase::Victory | Phase::Defeat => return Ok(SessionEnd::Finished(self.finish())),
                Phase::AwaitingPlay => {
                    if self.attack_round()? {
                        return Ok(SessionEnd::Saved);
                    }
                }
                Phase::AwaitingDefense => {
                    if self.defense_round()? {
                        return Ok(SessionEnd::Saved);
                    }
                }
            }
        }
    }

    /// One attack prompt. Returns `true` if the player saved.
    fn attack_round(&mut self) -> anyhow::Result<bool> {
        if self.engine.hand().is_empty() && !self.use_joker() {
            self.engine.concede();
            return Ok(false);
        }
        match self.player.choose_attack(&self.engine) {
            AttackChoice::Save => {
                self.save()?;
                return Ok(true);
            }
            AttackChoice::Surrender => self.engine.concede(),
            AttackChoice::Play(indices) => match self.engine.play(&indices) {
                Ok(outcome) => {
                    self.player.handle_attack(&outcome);
                    if !self.engine.is_game_over()
                        && self.engine.hand().is_empty()
                        && !self.use_joker()
                    {
                        info!("Hand exhausted after attacking");
                        self.engine.concede();
                    }
                }
                Err(e) => self.player.handle_rejection(e),
            },
        }
        Ok(false)
    }

    /// Defend the pending counter-attack, topping up until it holds, fails or
    /// the player gives up. Returns `true` if the player saved.
    fn defense_round(&mut self) -> anyhow::Result<bool> {
        // nothing to choose when the shield absorbs the hit or no cards are left
        let unprompted = self.engine.effective_damage() == 0
            || (self.engine.hand().is_empty() && !self.use_joker());
        if unprompted {
            let outcome = self
                .engine
                .defend(&[])
                .map_err(|e| anyhow::anyhow!(e))?;
            self.player.handle_defense(&outcome);
            return Ok(false);
        }

        let mut selected: Vec<usize> = Vec::new();
        loop {
            let extra = match self.player.choose_defense(&self.engine, &selected) {
                DefenseChoice::Save => {
                    self.save()?;
                    return Ok(true);
                }
                DefenseChoice::Surrender => {
                    self.engine.concede();
                    return Ok(false);
                }
                DefenseChoice::Cards(extra) => extra,
            };

            let mut attempt = selected.clone();
            attempt.extend(extra.into_iter().filter(|idx| !selected.contains(idx)));
            match self.engine.defend(&attempt) {
                Ok(outcome) => {
                    self.player.handle_defense(&outcome);
                    match outcome {
                        DefenseOutcome::Insufficient { .. } => selected = attempt,
                        DefenseOutcome::Blocked { .. } | DefenseOutcome::Failed { .. } => {
                            return Ok(false)
                        }
                    }
                }
                Err(e) => self.player.handle_rejection(e),
            }
        }
    }

    /// Spend a joker on an empty hand. Returns `true` if cards were drawn.
    fn use_joker(&mut self) -> bool {
        if self.jokers == 0 {
            return false;
        }
        match self.engine.refill_hand() {
            Ok(drawn) => {
                self.jokers -= 1;
                self.player.handle_joker(drawn, self.jokers);
                drawn > 0
            }
            Err(e) => {
                warn!("Joker refill rejected: {}", e);
                false
            }
        }
    }

    fn save(&self) -> anyhow::Result<()> {
        self.storage.save_store().save(&self.engine.state())
    }

    /// Record the finished game and drop the now-stale save.
    fn finish(&mut self) -> Outcome {
        self.player.handle_game_over(&self.engine);
        let outcome = if self.engine.is_victory() {
            Outcome::Victory
        } else {
            Outcome::Defeat
        };
        let recorded = StatsRecord::from_engine(&self.engine, now_timestamp())
            .and_then(|record| self.storage.stats_log().append(&record));
        if let Err(e) = recorded {
            warn!("Could not record statistics: {}", e);
        }
        if let Err(e) = self.storage.save_store().clear() {
            warn!("Could not remove save file: {}", e);
        }
        outcome
    }
}
