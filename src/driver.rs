#![cfg(feature = "std")]

//! Async wrapper around [`GameSession`] that paces the computer's moves.
//!
//! Once the turn passes to the computer a tokio task waits a fixed delay,
//! fires, and keeps going (one delay per shot) while the computer keeps
//! hitting. The task re-checks the session epoch, phase and turn under the
//! lock before every shot. Restarting the game aborts the task.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::common::{AttackResult, GameError};
use crate::coordinate::Coordinate;
use crate::game::{AttackReport, ComputerMove, GameSession, Phase, SessionView, Side};
use crate::ship::ShipType;

/// Notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// An attack by either side was resolved.
    Attack(AttackReport),
    /// The game ended; `None` when the computer ran out of targets.
    GameOver { winner: Option<Side> },
    /// A new game replaced the old one.
    Restarted { epoch: u64 },
}

pub struct GameDriver {
    session: Arc<Mutex<GameSession>>,
    rng: SmallRng,
    delay: Duration,
    events: mpsc::UnboundedSender<SessionEvent>,
    pending: Option<JoinHandle<()>>,
}

impl GameDriver {
    /// Wrap `session`. Returns the driver and the receiving end of its event
    /// stream.
    pub fn new(
        session: GameSession,
        rng: SmallRng,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let driver = Self {
            session: Arc::new(Mutex::new(session)),
            rng,
            delay,
            events,
            pending: None,
        };
        (driver, rx)
    }

    /// Shared handle to the session, for read access.
    pub fn session(&self) -> Arc<Mutex<GameSession>> {
        Arc::clone(&self.session)
    }

    pub async fn view(&self) -> SessionView {
        self.session.lock().await.view()
    }

    /// `true` while a computer move is scheduled or running.
    pub fn computer_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub async fn place_next(&mut self, coords: &[Coordinate]) -> Result<Option<ShipType>, GameError> {
        self.session.lock().await.place_next(coords)
    }

    pub async fn auto_place(&mut self) -> Result<(), GameError> {
        let mut session = self.session.lock().await;
        session.auto_place_human(&mut self.rng)
    }

    /// Human fires at `target`. If that hands the turn to the computer, its
    /// reply is scheduled.
    pub async fn human_attack(&mut self, target: Coordinate) -> Result<AttackReport, GameError> {
        let report = self.session.lock().await.attack(Side::Human, target)?;
        self.publish(&report);
        self.schedule_computer().await;
        Ok(report)
    }

    /// Cancel any pending computer move and start a new game.
    pub async fn restart(&mut self) -> Result<(), GameError> {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let epoch = {
            let mut session = self.session.lock().await;
            session.restart_game(&mut self.rng)?;
            session.epoch()
        };
        let _ = self.events.send(SessionEvent::Restarted { epoch });
        Ok(())
    }

    /// Wait until the scheduled computer moves, if any, have played out.
    pub async fn wait_for_computer(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    log::error!("computer move task failed: {}", e);
                }
            }
        }
    }

    fn publish(&self, report: &AttackReport) {
        let _ = self.events.send(SessionEvent::Attack(*report));
        if report.result == AttackResult::GameOver {
            let _ = self.events.send(SessionEvent::GameOver {
                winner: Some(report.side),
            });
        }
    }

    async fn schedule_computer(&mut self) {
        if self.computer_pending() {
            return;
        }
        let epoch = {
            let session = self.session.lock().await;
            if session.phase() != Phase::Battle || session.current_turn() != Side::Computer {
                return;
            }
            session.epoch()
        };
        let rng = SmallRng::from_rng(&mut self.rng);
        log::debug!("computer move scheduled in {:?}", self.delay);
        self.pending = Some(tokio::spawn(computer_moves(
            Arc::clone(&self.session),
            rng,
            self.delay,
            epoch,
            self.events.clone(),
        )));
    }
}

impl Drop for GameDriver {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Plays computer shots until the turn passes back. Events are sent while
/// the session lock is held, so nothing from this task can follow a
/// `Restarted` event for a newer epoch.
async fn computer_moves(
    session: Arc<Mutex<GameSession>>,
    mut rng: SmallRng,
    delay: Duration,
    epoch: u64,
    events: mpsc::UnboundedSender<SessionEvent>,
) {
    loop {
        tokio::time::sleep(delay).await;
        let mut game = session.lock().await;
        if game.epoch() != epoch {
            log::debug!("stale computer move dropped");
            return;
        }
        match game.computer_turn(&mut rng) {
            Ok(ComputerMove::Fired(report)) => {
                let _ = events.send(SessionEvent::Attack(report));
                match report.result {
                    AttackResult::Hit => continue,
                    AttackResult::Miss => return,
                    AttackResult::GameOver => {
                        let _ = events.send(SessionEvent::GameOver {
                            winner: Some(Side::Computer),
                        });
                        return;
                    }
                }
            }
            Ok(ComputerMove::NoMoves) => {
                let _ = events.send(SessionEvent::GameOver { winner: None });
                return;
            }
            Err(e) => {
                log::debug!("computer move skipped: {}", e);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn exhausted_computer_announces_game_without_winner() {
        let mut rng = SmallRng::seed_from_u64(5);
        let session = GameSession::with_exhausted_human_board(&mut rng);
        let (mut driver, mut events) = GameDriver::new(session, rng, Duration::from_millis(600));

        driver.schedule_computer().await;
        assert!(driver.computer_pending());
        driver.wait_for_computer().await;

        assert_eq!(events.try_recv(), Ok(SessionEvent::GameOver { winner: None }));
        assert!(events.try_recv().is_err());
        let view = driver.view().await;
        assert_eq!(view.phase, Phase::Over);
        assert_eq!(view.winner, None);
    }
}
