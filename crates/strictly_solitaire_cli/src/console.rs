//! Line-oriented pointer console.
//!
//! Stands in for a window's event loop: each line is a pointer event or a
//! query, resolved against the [`Layout`] and fed to the engine's
//! [`Session`].

use crate::layout::Layout;
use crate::render::render;
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::{Duration, Instant};
use strictly_solitaire::{DropOutcome, Offset, Point, PressOutcome, Session, StockOutcome, Table};
use tracing::{debug, info, instrument};

/// Help text listing the console commands.
pub const HELP: &str = "\
Commands:
  down X Y            pointer down at (X, Y)
  up X Y              pointer up at (X, Y)
  drag X1 Y1 X2 Y2    down at the first point, up at the second
  stock               click the stock
  auto                drop the dragged cards on the first pile that takes them
  show                print the table
  json                print the table as JSON
  help                print this help
  quit                leave";

/// One console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Pointer down.
    Down(Point),
    /// Pointer up.
    Up(Point),
    /// Pointer down then up.
    Drag {
        /// Where the pointer goes down.
        from: Point,
        /// Where it comes up.
        to: Point,
    },
    /// Stock click without coordinates.
    Stock,
    /// Release the drag over every pile.
    Auto,
    /// Print the table.
    Show,
    /// Print the table as JSON.
    Json,
    /// Print the help.
    Help,
    /// Stop reading input.
    Quit,
}

/// Error parsing a console line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Blank line.
    #[display("Empty command")]
    Empty,

    /// First word is not a command.
    #[display("Unknown command '{}' (try 'help')", _0)]
    Unknown(String),

    /// Wrong number of coordinates.
    #[display("'{}' takes {} numbers", command, expected)]
    Arity {
        /// The command word.
        command: &'static str,
        /// How many numbers it takes.
        expected: usize,
    },

    /// A coordinate is not an integer.
    #[display("Not a coordinate: '{}'", _0)]
    BadNumber(String),
}

impl std::error::Error for ParseError {}

fn numbers<const N: usize>(command: &'static str, args: &[&str]) -> Result<[i32; N], ParseError> {
    if args.len() != N {
        return Err(ParseError::Arity { command, expected: N });
    }
    let mut out = [0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().map_err(|_| ParseError::BadNumber(arg.to_string()))?;
    }
    Ok(out)
}

fn no_args(command: ConsoleCommand, name: &'static str, args: &[&str]) -> Result<ConsoleCommand, ParseError> {
    numbers::<0>(name, args).map(|_| command)
}

impl FromStr for ConsoleCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((first, args)) = words.split_first() else {
            return Err(ParseError::Empty);
        };
        match first.to_ascii_lowercase().as_str() {
            "down" => {
                let [x, y] = numbers("down", args)?;
                Ok(ConsoleCommand::Down(Point::new(x, y)))
            }
            "up" => {
                let [x, y] = numbers("up", args)?;
                Ok(ConsoleCommand::Up(Point::new(x, y)))
            }
            "drag" => {
                let [x1, y1, x2, y2] = numbers("drag", args)?;
                Ok(ConsoleCommand::Drag {
                    from: Point::new(x1, y1),
                    to: Point::new(x2, y2),
                })
            }
            "stock" => no_args(ConsoleCommand::Stock, "stock", args),
            "auto" => no_args(ConsoleCommand::Auto, "auto", args),
            "show" => no_args(ConsoleCommand::Show, "show", args),
            "json" => no_args(ConsoleCommand::Json, "json", args),
            "help" | "?" => no_args(ConsoleCommand::Help, "help", args),
            "quit" | "exit" => no_args(ConsoleCommand::Quit, "quit", args),
            _ => Err(ParseError::Unknown(first.to_string())),
        }
    }
}

/// A game driven by console lines.
#[derive(Debug)]
pub struct Console {
    session: Session,
    layout: Layout,
    started: Instant,
    auto_show: bool,
}

impl Console {
    /// Starts a console game on `table`.
    pub fn new(table: Table, layout: Layout) -> Self {
        Self {
            session: Session::new(table),
            layout,
            started: Instant::now(),
            auto_show: false,
        }
    }

    /// Re-renders the table after every pointer event when set.
    pub fn with_auto_show(mut self, auto_show: bool) -> Self {
        self.auto_show = auto_show;
        self
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Time since the console started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// The table as text.
    pub fn show(&self) -> String {
        render(&self.session.view(), self.elapsed())
    }

    fn step<T>(&mut self, f: impl FnOnce(Session) -> (Session, T)) -> T {
        let session = std::mem::replace(&mut self.session, Session::new(Table::default()));
        let (session, out) = f(session);
        self.session = session;
        out
    }

    fn pointer_down(&mut self, point: Point) -> String {
        let Some((press, anchor)) = self.layout.hit_press(self.session.table(), point) else {
            return format!("Nothing at {}", point);
        };
        let offset = Offset::between(point, anchor);
        match self.step(|session| session.press(press, offset)) {
            Ok(PressOutcome::StockClicked(StockOutcome::Drew(card))) => format!("Drew {}", card),
            Ok(PressOutcome::StockClicked(StockOutcome::Recycled(count))) => {
                format!("Recycled {} cards into the stock", count)
            }
            Ok(PressOutcome::Lifted(source)) => {
                let cards: Vec<String> = self
                    .session
                    .dragging()
                    .map(|dragging| dragging.lifted().iter().map(ToString::to_string).collect())
                    .unwrap_or_default();
                format!("Lifted {} from {}", cards.join(" "), source)
            }
            Err(err) => format!("Refused: {}", err),
        }
    }

    fn release(&mut self, point: Option<Point>) -> String {
        let Some(source) = self.session.dragging().map(|dragging| dragging.source()) else {
            return "Not dragging".to_string();
        };
        let outcome = match point {
            Some(point) => {
                let targets = self.layout.drop_targets(self.session.table(), point);
                debug!(?targets, "Drop targets under pointer");
                self.step(|session| session.release(&targets))
            }
            None => self.step(Session::release_anywhere),
        };
        match outcome {
            Some(Ok(DropOutcome::Committed(mv))) => format!("Moved {}", mv),
            Some(Ok(DropOutcome::Reverted)) => format!("No pile took the cards; back to {}", source),
            Some(Err(err)) => format!("Error: {}", err),
            None => "Not dragging".to_string(),
        }
    }

    /// Runs one command and returns what to print.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: ConsoleCommand) -> anyhow::Result<String> {
        let report = match command {
            ConsoleCommand::Down(point) => self.pointer_down(point),
            ConsoleCommand::Up(point) => self.release(Some(point)),
            ConsoleCommand::Drag { from, to } => {
                let down = self.pointer_down(from);
                if self.session.dragging().is_some() {
                    format!("{}\n{}", down, self.release(Some(to)))
                } else {
                    down
                }
            }
            ConsoleCommand::Stock => {
                let stock = self.layout.stock_rect().origin();
                self.pointer_down(stock)
            }
            ConsoleCommand::Auto => self.release(None),
            ConsoleCommand::Show => return Ok(self.show()),
            ConsoleCommand::Json => return Ok(serde_json::to_string_pretty(&self.session.view())?),
            ConsoleCommand::Help => return Ok(HELP.to_string()),
            ConsoleCommand::Quit => return Ok(String::new()),
        };
        if self.auto_show {
            Ok(format!("{}\n{}", report, self.show()))
        } else {
            Ok(report)
        }
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Blank lines and lines starting with `#` are skipped. A line that does
    /// not parse is reported and the console carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.parse::<ConsoleCommand>() {
                Ok(ConsoleCommand::Quit) => {
                    info!("Quit");
                    break;
                }
                Ok(command) => {
                    let report = self.execute(command)?;
                    writeln!(out, "{}", report.trim_end())?;
                }
                Err(err) => writeln!(out, "{}", err)?,
            }
        }
        out.flush()?;
        Ok(())
    }
}
