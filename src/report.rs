use std::fmt;

use crate::ast::Strings;
use crate::interp::Solution;

/// Renders a solved network as `name -> value` lines sorted by wire name.
pub struct Report<'a> {
    solution: &'a Solution,
    ctx: &'a Strings,
}

impl<'a> Report<'a> {
    pub fn new(solution: &'a Solution, ctx: &'a Strings) -> Self {
        Self { solution, ctx }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.solution.sorted(self.ctx) {
            writeln!(f, "{name} -> {value}")?;
        }
        Ok(())
    }
}
