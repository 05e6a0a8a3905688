//! `matrix-ops` menu.

use std::io::{BufRead, Write};

use console::menu::{Dispatch, Menu};
use console::prompt::{PromptError, Prompter};
use tracing::debug;

use crate::core::{self, MAX_DIM, Matrix};
use crate::error::MatrixError;

const BANNER: &str = "
===== Matrix Operations Menu =====
1. Add two matrices
2. Subtract two matrices
3. Multiply two matrices
4. Transpose a matrix
5. Check if matrix is symmetric
6. Exit
==================================";

/// Stateless apart from the dimension limit; grids live for one command.
#[derive(Debug, Clone)]
pub struct MatrixMenu {
    max_dim: usize,
}

impl Default for MatrixMenu {
    fn default() -> Self {
        Self::new(MAX_DIM)
    }
}

impl MatrixMenu {
    /// `max_dim` is clamped to `1..=MAX_DIM`.
    pub fn new(max_dim: usize) -> Self {
        Self {
            max_dim: max_dim.clamp(1, MAX_DIM),
        }
    }

    pub fn max_dim(&self) -> usize {
        self.max_dim
    }

    /// Read a row and column count and return a zero grid of that shape,
    /// or `None` after reporting out-of-range dimensions.
    fn read_shape<R: BufRead, W: Write>(
        &self,
        p: &mut Prompter<R, W>,
        prompt: &str,
    ) -> Result<Option<Matrix>, PromptError> {
        let rows = p.read_int(prompt)?;
        let cols = p.read_int("")?;
        let within = |n: i64| usize::try_from(n).ok().filter(|n| (1..=self.max_dim).contains(n));
        let grid = match (within(rows), within(cols)) {
            (Some(rows), Some(cols)) => Matrix::zeros(rows, cols).ok(),
            _ => None,
        };
        if grid.is_none() {
            debug!(rows, cols, max = self.max_dim, "dimensions rejected");
            p.say(format_args!("Dimensions must be between 1 and {}.", self.max_dim))?;
        }
        Ok(grid)
    }

    fn binary_elementwise<R: BufRead, W: Write>(
        &self,
        p: &mut Prompter<R, W>,
        op: fn(&Matrix, &Matrix) -> Result<Matrix, MatrixError>,
        label: &str,
    ) -> Result<(), PromptError> {
        let Some(mut a) = self.read_shape(p, "Enter rows and columns: ")? else {
            return Ok(());
        };
        let mut b = a.clone();
        p.say("Enter Matrix A:")?;
        fill(p, &mut a)?;
        p.say("Enter Matrix B:")?;
        fill(p, &mut b)?;
        match op(&a, &b) {
            Ok(result) => {
                p.say(format_args!("Resultant Matrix ({label}):"))?;
                p.say(&result)
            }
            Err(err) => p.say(format_args!("Cannot compute {label}: {err}.")),
        }
    }

    fn multiply<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        let Some(mut a) = self.read_shape(p, "Enter rows and columns of Matrix A: ")? else {
            return Ok(());
        };
        p.say("Enter Matrix A:")?;
        fill(p, &mut a)?;
        let Some(mut b) = self.read_shape(p, "Enter rows and columns of Matrix B: ")? else {
            return Ok(());
        };
        p.say("Enter Matrix B:")?;
        fill(p, &mut b)?;
        if a.cols() != b.rows() {
            return p.say("Matrix multiplication not possible. Columns of A != Rows of B.");
        }
        match core::multiply(&a, &b) {
            Ok(result) => {
                p.say("Resultant Matrix (A*B):")?;
                p.say(&result)
            }
            Err(err) => p.say(format_args!("Cannot compute A*B: {err}.")),
        }
    }

    fn transpose<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        let Some(mut a) = self.read_shape(p, "Enter rows and columns: ")? else {
            return Ok(());
        };
        p.say("Enter Matrix:")?;
        fill(p, &mut a)?;
        p.say("Transpose Matrix:")?;
        p.say(core::transpose(&a))
    }

    fn symmetric<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        let Some(mut a) = self.read_shape(p, "Enter rows and columns: ")? else {
            return Ok(());
        };
        p.say("Enter Matrix:")?;
        fill(p, &mut a)?;
        if core::is_symmetric(&a) {
            p.say("Matrix is symmetric.")
        } else {
            p.say("Matrix is not symmetric.")
        }
    }
}

impl Menu for MatrixMenu {
    fn banner(&self) -> &str {
        BANNER
    }

    fn exit_choice(&self) -> i64 {
        6
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        choice: i64,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Dispatch, PromptError> {
        match choice {
            1 => self.binary_elementwise(prompter, core::add, "A+B")?,
            2 => self.binary_elementwise(prompter, core::subtract, "A-B")?,
            3 => self.multiply(prompter)?,
            4 => self.transpose(prompter)?,
            5 => self.symmetric(prompter)?,
            _ => return Ok(Dispatch::Unknown),
        }
        Ok(Dispatch::Handled)
    }
}

/// Prompt for every cell of `grid`, row by row.
fn fill<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    grid: &mut Matrix,
) -> Result<(), PromptError> {
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            grid[(i, j)] = p.read_int(&format!("Enter element [{i}][{j}]: "))?;
        }
    }
    Ok(())
}
