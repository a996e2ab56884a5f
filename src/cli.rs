#![cfg(feature = "std")]

//! Terminal front end: renders session snapshots and feeds intents to a
//! [`GameDriver`]. Holds no game rules of its own.

use std::fmt::Write as _;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::board::{Board, BoardView, CellView};
use crate::common::{AttackResult, GameError, PlacementIssue};
use crate::config::{BOARD_SIZE, COMPUTER_NAME};
use crate::coordinate::Coordinate;
use crate::driver::{GameDriver, SessionEvent};
use crate::game::{Phase, SessionView, Side};
use crate::intent::{Intent, IntentSource};
use crate::placement::{self, Selection};

/// Text grid for one board, columns `1..10` across and rows `A..J` down.
pub fn render_board(view: &BoardView) -> String {
    let n = BOARD_SIZE as usize;
    let mut out = String::from("   ");
    for c in 1..=n {
        let _ = write!(out, "{:>3}", c);
    }
    out.push('\n');
    for (r, row) in view.cells.chunks(n).enumerate() {
        let _ = write!(out, " {} ", (b'A' + r as u8) as char);
        for cell in row {
            let ch = match cell {
                CellView::Water => '.',
                CellView::Ship => 'S',
                CellView::Hit => 'X',
                CellView::Miss => 'o',
            };
            let _ = write!(out, "{:>3}", ch);
        }
        out.push('\n');
    }
    for ship in &view.ships {
        let status = if ship.sunk { "SUNK" } else { "afloat" };
        let _ = writeln!(out, "   {} ({}): {}", ship.name, ship.size, status);
    }
    out
}

/// Both boards plus a status line.
pub fn render_session(view: &SessionView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Computer's board:");
    out.push_str(&render_board(&view.computer_board));
    let _ = writeln!(out, "\n{}'s board:", view.human_name);
    out.push_str(&render_board(&view.human_board));
    out.push_str(&status_line(view));
    out
}

fn status_line(view: &SessionView) -> String {
    match (view.phase, view.next_ship, view.winner) {
        (Phase::Placement, Some(name), _) => format!("Place your {}.\n", name),
        (Phase::Placement, None, _) => "Waiting for the battle to start.\n".to_string(),
        (Phase::Battle, _, _) => match view.turn {
            Side::Human => "Your turn: fire at a cell (e.g. B7).\n".to_string(),
            Side::Computer => "Computer is aiming...\n".to_string(),
        },
        (Phase::Over, _, Some(Side::Human)) => "Victory! You sank the whole enemy fleet.\n".to_string(),
        (Phase::Over, _, Some(Side::Computer)) => "Defeat. All your ships have been sunk.\n".to_string(),
        (Phase::Over, _, None) => "The game ended without a winner.\n".to_string(),
    }
}

fn describe(event: &SessionEvent, human_name: &str) -> String {
    match event {
        SessionEvent::Attack(report) => {
            let who = match report.side {
                Side::Human => human_name,
                Side::Computer => COMPUTER_NAME,
            };
            let what = match report.result {
                AttackResult::Miss => "miss",
                AttackResult::Hit => "HIT",
                AttackResult::GameOver => "HIT, last ship down",
            };
            format!("{} fires at {}: {}", who, report.target, what)
        }
        SessionEvent::GameOver { winner: Some(side) } => format!("Game over, {:?} wins.", side),
        SessionEvent::GameOver { winner: None } => "Game over, no winner.".to_string(),
        SessionEvent::Restarted { epoch } => format!("New game #{}.", epoch + 1),
    }
}

/// Cells a placement intent asks for, for a ship of `size` on `board`.
pub fn placement_cells(board: &Board, size: usize, intent: &Intent) -> Result<Vec<Coordinate>, GameError> {
    match intent {
        Intent::PlaceAnchored {
            anchor,
            orientation,
        } => placement::anchored(size, *anchor, *orientation),
        Intent::PlaceDragged { start, end } => placement::dragged(size, *start, *end),
        Intent::PlaceCells(cells) => {
            let mut selection = Selection::new(size);
            for &cell in cells {
                selection.toggle(board, cell)?;
            }
            selection.finish()
        }
        other => Err(GameError::UnknownIntent(format!("{:?}", other))),
    }
}

const HELP: &str = "\
Placement:  place <cell> <h|v>   drag <from> <to>   select <cells...>   auto
Battle:     fire <cell>  (or just <cell>, e.g. B7)
Any time:   show   restart   help   quit";

async fn place(driver: &mut GameDriver, intent: &Intent) -> Result<String, GameError> {
    let coords = {
        let session = driver.session();
        let session = session.lock().await;
        let def = session
            .next_ship()
            .filter(|_| session.phase() == Phase::Placement)
            .ok_or(GameError::InvalidPlacement(PlacementIssue::NothingToPlace))?;
        placement_cells(session.board(Side::Human), def.length(), intent)?
    };
    driver.place_next(&coords).await?;
    let cells: Vec<String> = coords.iter().map(|c| c.to_string()).collect();
    Ok(format!("Placed at {}.", cells.join(" ")))
}

fn drain(events: &mut UnboundedReceiver<SessionEvent>, human_name: &str) {
    while let Ok(event) = events.try_recv() {
        println!("{}", describe(&event, human_name));
    }
}

/// Play until the source runs dry or the player quits. Returns the last
/// snapshot.
pub async fn run_session<S>(
    driver: &mut GameDriver,
    events: &mut UnboundedReceiver<SessionEvent>,
    source: &mut S,
) -> anyhow::Result<SessionView>
where
    S: IntentSource + ?Sized,
{
    println!("{}", render_session(&driver.view().await));
    while let Some(intent) = source.next_intent().await? {
        let outcome = match &intent {
            Intent::Quit => break,
            Intent::Help => Ok(HELP.to_string()),
            Intent::Show => Ok(String::new()),
            Intent::Restart => driver.restart().await.map(|_| "Board cleared.".to_string()),
            Intent::AutoPlace => driver.auto_place().await.map(|_| "Fleet placed.".to_string()),
            Intent::PlaceAnchored { .. } | Intent::PlaceDragged { .. } | Intent::PlaceCells(_) => {
                place(driver, &intent).await
            }
            Intent::Attack(target) => driver.human_attack(*target).await.map(|_| String::new()),
        };
        let view = driver.view().await;
        drain(events, &view.human_name);
        match outcome {
            Ok(message) if !message.is_empty() => println!("{}", message),
            Ok(_) => {}
            Err(e) => println!("{}", e),
        }
        if driver.computer_pending() {
            driver.wait_for_computer().await;
            drain(events, &view.human_name);
        }
        println!("{}", render_session(&driver.view().await));
    }
    Ok(driver.view().await)
}
