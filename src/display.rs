// Terminal status feedback: static usage legend, in-place velocity readout

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::state::VelocityState;

pub struct StatusDisplay<W: Write> {
    out: W,
}

impl<W: Write> StatusDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print the static usage legend
    ///
    /// Uses plain line endings, so call this before entering raw mode.
    pub fn print_usage(&mut self) -> io::Result<()> {
        writeln!(self.out, "Keyboard Teleop")?;
        writeln!(self.out, "---------------------------")?;
        writeln!(self.out, "Moving around:")?;
        writeln!(self.out, "   w")?;
        writeln!(self.out, "a  s  d")?;
        writeln!(self.out, "   x")?;
        writeln!(self.out)?;
        writeln!(self.out, "w/x : increase/decrease linear velocity")?;
        writeln!(self.out, "a/d : increase/decrease angular velocity")?;
        writeln!(self.out, "s : force stop")?;
        writeln!(self.out, "q or CTRL-C to quit")?;
        writeln!(self.out, "---------------------------")?;
        self.out.flush()
    }

    /// Rewrite the status line in place with the current velocities
    pub fn update(&mut self, state: VelocityState) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(format!(
                "Current: linear={:.2}, angular={:.2}",
                state.linear, state.angular
            )),
        )?;
        self.out.flush()
    }
}
