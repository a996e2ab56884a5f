//! Turn controller: owns both boards and drives a game from placement to
//! the final shot.
//!
//! ```text
//! Placement --(last human ship placed)--> Battle --(all ships of one side sunk)--> Over
//! ```
//!
//! During `Battle` a miss hands the turn to the other side while a hit lets
//! the attacker fire again. Every turn-taking operation re-checks phase and
//! turn first, so a stale caller cannot act on a finished or reset game.

use alloc::string::{String, ToString};
use rand::Rng;

use crate::board::{Board, BoardView};
use crate::common::{AttackIssue, AttackResult, GameError, PlacementIssue};
use crate::config::{DEFAULT_PLAYER_NAME, FLEET};
use crate::coordinate::Coordinate;
use crate::player::{place_randomly, ComputerPlayer};
use crate::ship::{Ship, ShipType};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    Battle,
    Over,
}

/// An accepted attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct AttackReport {
    pub side: Side,
    pub target: Coordinate,
    pub result: AttackResult,
}

/// What the computer did when asked to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerMove {
    Fired(AttackReport),
    /// Every cell of the human board had already been attacked; the game is
    /// over without a winner.
    NoMoves,
}

/// A single human-vs-computer game.
#[derive(Debug, Clone)]
pub struct GameSession {
    human_name: String,
    human: Board,
    computer: Board,
    opponent: ComputerPlayer,
    next_ship: usize,
    phase: Phase,
    turn: Side,
    winner: Option<Side>,
    epoch: u64,
}

impl GameSession {
    /// Fresh game: both boards empty, computer fleet placed at random, the
    /// human fleet waiting for placement. A blank name becomes `"Player"`.
    pub fn start_game<R: Rng>(player_name: &str, rng: &mut R) -> Result<Self, GameError> {
        let name = player_name.trim();
        let human_name = if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name.to_string()
        };
        let mut session = GameSession {
            human_name,
            human: Board::new(),
            computer: Board::new(),
            opponent: ComputerPlayer::new(),
            next_ship: 0,
            phase: Phase::Placement,
            turn: Side::Human,
            winner: None,
            epoch: 0,
        };
        session.opponent.place_ships(rng, &mut session.computer)?;
        log::info!("new game for {}", session.human_name);
        Ok(session)
    }

    /// Discard both boards and start over with the same player name.
    pub fn restart_game<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let epoch = self.epoch + 1;
        *self = GameSession::start_game(&self.human_name, rng)?;
        self.epoch = epoch;
        log::info!("game restarted (epoch {})", epoch);
        Ok(())
    }

    pub fn human_name(&self) -> &str {
        &self.human_name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side allowed to attack next. Only meaningful in `Battle`.
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Bumped on every restart; lets deferred work detect a reset.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }

    /// Number of attacks `side` has made so far.
    pub fn shots_fired(&self, side: Side) -> usize {
        let target = self.board(side.opponent());
        target.hit_space().len() + target.miss_space().len()
    }

    /// The human ship that will be placed next, if any.
    pub fn next_ship(&self) -> Option<ShipType> {
        FLEET.get(self.next_ship).copied()
    }

    /// Place the next human ship on `coords`. Returns the ship after it, if
    /// any; placing the last one starts the battle with the human to move.
    pub fn place_next(&mut self, coords: &[Coordinate]) -> Result<Option<ShipType>, GameError> {
        let def = match (self.phase, self.next_ship()) {
            (Phase::Placement, Some(def)) => def,
            _ => return Err(PlacementIssue::NothingToPlace.into()),
        };
        self.human.place_ship(Ship::new(def)?, coords)?;
        self.advance_placement();
        Ok(self.next_ship())
    }

    /// Randomly place whatever human ships remain.
    pub fn auto_place_human<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(PlacementIssue::NothingToPlace.into());
        }
        while let Some(def) = self.next_ship() {
            place_randomly(rng, &mut self.human, def)?;
            self.advance_placement();
        }
        Ok(())
    }

    fn advance_placement(&mut self) {
        self.next_ship += 1;
        if self.next_ship >= FLEET.len() {
            self.phase = Phase::Battle;
            self.turn = Side::Human;
            log::info!("all ships placed, battle begins");
        }
    }

    /// Fire at `target` on the opponent of `side`.
    ///
    /// Refused with [`GameError::IllegalAttack`] outside `Battle`, out of
    /// turn, or on a cell attacked before; a refusal changes nothing.
    pub fn attack(&mut self, side: Side, target: Coordinate) -> Result<AttackReport, GameError> {
        if self.phase != Phase::Battle {
            log::warn!("{:?} attack on {} ignored: phase is {:?}", side, target, self.phase);
            return Err(AttackIssue::NotInBattle.into());
        }
        if self.turn != side {
            log::warn!("{:?} attack on {} ignored: not their turn", side, target);
            return Err(AttackIssue::OutOfTurn.into());
        }
        let result = self.board_mut(side.opponent()).receive_attack(target)?;
        log::debug!("{:?} fired at {}: {:?}", side, target, result);
        match result {
            AttackResult::Miss => self.turn = side.opponent(),
            AttackResult::Hit => {}
            AttackResult::GameOver => {
                self.phase = Phase::Over;
                self.winner = Some(side);
                log::info!("game over, {:?} wins", side);
            }
        }
        Ok(AttackReport {
            side,
            target,
            result,
        })
    }

    /// Let the computer pick a target and fire, if it is its turn.
    pub fn computer_turn<R: Rng>(&mut self, rng: &mut R) -> Result<ComputerMove, GameError> {
        if self.phase != Phase::Battle {
            return Err(AttackIssue::NotInBattle.into());
        }
        if self.turn != Side::Computer {
            return Err(AttackIssue::OutOfTurn.into());
        }
        match self.opponent.select_target(rng, &self.human) {
            Some(target) => self.attack(Side::Computer, target).map(ComputerMove::Fired),
            None => {
                log::warn!("computer has no cells left to attack");
                self.phase = Phase::Over;
                self.winner = None;
                Ok(ComputerMove::NoMoves)
            }
        }
    }

    /// Snapshot for rendering: own board revealed, enemy board fogged.
    pub fn view(&self) -> SessionView {
        SessionView {
            human_name: self.human_name.clone(),
            phase: self.phase,
            turn: self.turn,
            winner: self.winner,
            next_ship: self.next_ship().map(|def| def.name()),
            human_board: self.human.view(true),
            computer_board: self.computer.view(self.phase == Phase::Over),
        }
    }
}

/// Read-only state handed to a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SessionView {
    pub human_name: String,
    pub phase: Phase,
    pub turn: Side,
    pub winner: Option<Side>,
    pub next_ship: Option<&'static str>,
    pub human_board: BoardView,
    pub computer_board: BoardView,
}

#[cfg(test)]
impl GameSession {
    /// Battle with the computer to move and every human cell already
    /// attacked, so the computer has nothing left to fire at.
    pub(crate) fn with_exhausted_human_board<R: Rng>(rng: &mut R) -> Self {
        let mut session = GameSession::start_game("Ada", rng).unwrap();
        for cell in Coordinate::all() {
            session.human.receive_attack(cell).unwrap();
        }
        session.next_ship = FLEET.len();
        session.phase = Phase::Battle;
        session.turn = Side::Computer;
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn computer_without_targets_ends_game_without_winner() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut session = GameSession::with_exhausted_human_board(&mut rng);
        assert_eq!(session.board(Side::Human).unattacked().count(), 0);

        assert_eq!(session.computer_turn(&mut rng), Ok(ComputerMove::NoMoves));
        assert_eq!(session.phase(), Phase::Over);
        assert_eq!(session.winner(), None);
        assert_eq!(
            session.computer_turn(&mut rng),
            Err(GameError::IllegalAttack(AttackIssue::NotInBattle))
        );
        assert_eq!(session.view().winner, None);
    }
}
