//! Player intents and where they come from.
//!
//! A front end turns raw input into [`Intent`]s; the core never sees
//! keystrokes or clicks directly.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::common::GameError;
use crate::coordinate::Coordinate;
use crate::ship::Orientation;

/// A discrete request from the human player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// `place B2 v`: anchor plus orientation.
    PlaceAnchored {
        anchor: Coordinate,
        orientation: Orientation,
    },
    /// `drag B2 B6`: drag from one cell towards another.
    PlaceDragged { start: Coordinate, end: Coordinate },
    /// `select C1 C2 C3`: cells picked one by one.
    PlaceCells(Vec<Coordinate>),
    /// `auto`: random layout for the remaining ships.
    AutoPlace,
    /// `fire D4`, `attack D4` or just `D4`.
    Attack(Coordinate),
    Show,
    Restart,
    Help,
    Quit,
}

fn orientation(word: &str) -> Option<Orientation> {
    match word.to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Some(Orientation::Horizontal),
        "v" | "vertical" => Some(Orientation::Vertical),
        _ => None,
    }
}

impl FromStr for Intent {
    type Err = GameError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let unknown = || GameError::UnknownIntent(line.trim().to_string());
        let words: Vec<&str> = line.split_whitespace().collect();
        let (command, args) = match words.split_first() {
            Some((command, args)) => (command.to_ascii_lowercase(), args),
            None => return Err(unknown()),
        };
        match (command.as_str(), args) {
            ("place", [anchor, dir]) => Ok(Intent::PlaceAnchored {
                anchor: anchor.parse()?,
                orientation: orientation(dir).ok_or_else(unknown)?,
            }),
            ("drag", [start, end]) => Ok(Intent::PlaceDragged {
                start: start.parse()?,
                end: end.parse()?,
            }),
            ("select", cells) if !cells.is_empty() => cells
                .iter()
                .map(|c| c.parse())
                .collect::<Result<Vec<Coordinate>, _>>()
                .map(Intent::PlaceCells),
            ("auto", []) => Ok(Intent::AutoPlace),
            ("fire" | "attack", [target]) => Ok(Intent::Attack(target.parse()?)),
            ("show" | "board", []) => Ok(Intent::Show),
            ("restart", []) => Ok(Intent::Restart),
            ("help" | "?", []) => Ok(Intent::Help),
            ("quit" | "exit", []) => Ok(Intent::Quit),
            (_, []) if command.starts_with(|c: char| c.is_ascii_alphabetic()) => command
                .parse::<Coordinate>()
                .map(Intent::Attack)
                .map_err(|_| unknown()),
            _ => Err(unknown()),
        }
    }
}

#[cfg(feature = "std")]
pub use source::*;

#[cfg(feature = "std")]
mod source {
    use std::collections::VecDeque;

    use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

    use super::Intent;

    /// Somewhere intents come from: a terminal, a script, a UI bridge.
    #[async_trait::async_trait]
    pub trait IntentSource: Send {
        /// Next intent, or `None` once the source is exhausted.
        async fn next_intent(&mut self) -> anyhow::Result<Option<Intent>>;
    }

    /// Reads one intent per line from standard input. Lines that do not
    /// parse are reported on stdout and skipped.
    pub struct StdinIntents {
        lines: Lines<BufReader<Stdin>>,
    }

    impl StdinIntents {
        pub fn new() -> Self {
            Self {
                lines: BufReader::new(tokio::io::stdin()).lines(),
            }
        }
    }

    impl Default for StdinIntents {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait::async_trait]
    impl IntentSource for StdinIntents {
        async fn next_intent(&mut self) -> anyhow::Result<Option<Intent>> {
            while let Some(line) = self.lines.next_line().await? {
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Intent>() {
                    Ok(intent) => return Ok(Some(intent)),
                    Err(e) => println!("{}  (type 'help' for commands)", e),
                }
            }
            Ok(None)
        }
    }

    /// Fixed list of intents, handy for tests and demos.
    #[derive(Debug, Default)]
    pub struct ScriptedIntents {
        queue: VecDeque<Intent>,
    }

    impl ScriptedIntents {
        pub fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
            Self {
                queue: intents.into_iter().collect(),
            }
        }
    }

    #[async_trait::async_trait]
    impl IntentSource for ScriptedIntents {
        async fn next_intent(&mut self) -> anyhow::Result<Option<Intent>> {
            Ok(self.queue.pop_front())
        }
    }
}
