use std::ops::Index;

use log::{debug, trace};

use crate::ast::{Gate, Ident, Operand, Strings};
use crate::error::Error;
use crate::model::Network;

/// Per-run resolution state: `None` until a wire's value is known.
#[derive(Clone, Debug, Default)]
pub struct State(Vec<Option<u16>>);

impl State {
    #[inline]
    pub fn get(&self, operand: Operand) -> Option<u16> {
        match operand {
            Operand::Literal(value) => Some(value),
            Operand::Reference(wire) => self[wire],
        }
    }

    #[inline]
    pub fn resolve(&mut self, wire: Ident, value: u16) {
        let index = wire.0 as usize;
        if index >= self.0.len() {
            self.0.resize(index + 1, None);
        }
        debug_assert!(
            self.0[index].map_or(true, |old| old == value),
            "wire {wire:?} re-resolved"
        );
        self.0[index] = Some(value)
    }

    pub fn is_resolved(&self, wire: Ident) -> bool {
        self[wire].is_some()
    }
}

impl Index<Ident> for State {
    type Output = Option<u16>;

    fn index(&self, index: Ident) -> &Self::Output {
        static UNRESOLVED: Option<u16> = None;
        self.0.get(index.0 as usize).unwrap_or(&UNRESOLVED)
    }
}

/// Value a gate drives once all of its operands are known.
pub fn calc(gate: &Gate, state: &State) -> Option<u16> {
    Some(match *gate {
        Gate::PassThrough { input, .. } => state.get(input)?,
        Gate::And { left, right, .. } => state.get(left)? & state.get(right)?,
        Gate::Or { left, right, .. } => state.get(left)? | state.get(right)?,
        Gate::Not { input, .. } => !state.get(input)?,
        Gate::ShiftLeft { input, amount, .. } => {
            state.get(input)?.checked_shl(amount).unwrap_or(0)
        }
        Gate::ShiftRight { input, amount, .. } => {
            state.get(input)?.checked_shr(amount).unwrap_or(0)
        }
    })
}

pub struct Interpreter<'a> {
    pub network: &'a Network,
    pub state: State,
}

impl<'a> Interpreter<'a> {
    pub fn new(network: &'a Network) -> Self {
        let mut state = State::default();
        for &(wire, value) in network.literals() {
            state.resolve(wire, value)
        }
        Self { network, state }
    }

    /// Tries every gate once and returns how many wires it resolved.
    pub fn step(&mut self) -> usize {
        let mut resolved = 0;
        for gate in self.network.gates() {
            let output = gate.output();
            if self.state.is_resolved(output) {
                continue;
            }
            if let Some(value) = calc(gate, &self.state) {
                trace!("{output:?} <- {value}");
                self.state.resolve(output, value);
                resolved += 1;
            }
        }
        resolved
    }

    pub fn unresolved(&self) -> impl Iterator<Item = Ident> + '_ {
        self.network
            .wires()
            .iter()
            .copied()
            .filter(|&wire| !self.state.is_resolved(wire))
    }

    /// Sweeps until every wire is resolved. A sweep that makes no progress
    /// means the remaining wires depend on each other.
    pub fn run(mut self, ctx: &Strings) -> Result<Solution, Error> {
        let mut sweeps = 0;
        while self.unresolved().next().is_some() {
            let resolved = self.step();
            sweeps += 1;
            debug!("sweep {sweeps}: resolved {resolved} wires");
            if resolved == 0 {
                let mut unresolved: Vec<String> =
                    self.unresolved().map(|wire| ctx[wire].to_string()).collect();
                unresolved.sort_unstable();
                return Err(Error::CycleDetected { unresolved });
            }
        }
        debug!("resolved after {sweeps} sweeps");

        let mut values = Vec::with_capacity(self.network.wires().len());
        for &wire in self.network.wires() {
            if let Some(value) = self.state[wire] {
                values.push((wire, value));
            }
        }
        Ok(Solution(values))
    }
}

/// Every wire of a network with its final value.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Solution(Vec<(Ident, u16)>);

impl Solution {
    pub fn get(&self, wire: Ident) -> Option<u16> {
        self.0
            .iter()
            .find_map(|&(w, value)| (w == wire).then_some(value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ident, u16)> + '_ {
        self.0.iter().copied()
    }

    /// Name/value pairs in ascending name order.
    pub fn sorted<'s>(&self, ctx: &'s Strings) -> Vec<(&'s str, u16)> {
        let mut values: Vec<(&str, u16)> =
            self.iter().map(|(wire, value)| (&ctx[wire], value)).collect();
        values.sort_unstable_by(|a, b| a.0.cmp(b.0));
        values
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn wire(n: u32) -> Operand {
        Operand::Reference(Ident(n))
    }

    fn state(values: &[u16]) -> State {
        let mut state = State::default();
        for (i, &v) in values.iter().enumerate() {
            state.resolve(Ident(i as u32), v);
        }
        state
    }

    #[test]
    fn test_calc() {
        let s = state(&[123, 456]);
        let out = Ident(9);
        let and = Gate::And { left: wire(0), right: wire(1), output: out };
        let or = Gate::Or { left: wire(0), right: wire(1), output: out };
        assert_eq!(calc(&and, &s), Some(72));
        assert_eq!(calc(&or, &s), Some(507));
        let lshift = Gate::ShiftLeft { input: wire(0), amount: 2, output: out };
        let rshift = Gate::ShiftRight { input: wire(1), amount: 2, output: out };
        assert_eq!(calc(&lshift, &s), Some(492));
        assert_eq!(calc(&rshift, &s), Some(114));
        assert_eq!(calc(&Gate::Not { input: wire(0), output: out }, &s), Some(65412));
        assert_eq!(calc(&Gate::PassThrough { input: wire(1), output: out }, &s), Some(456));
    }

    #[test]
    fn test_wraparound() {
        let out = Ident(0);
        let s = State::default();
        let not = |v| Gate::Not { input: Operand::Literal(v), output: out };
        assert_eq!(calc(&not(0), &s), Some(65535));
        assert_eq!(calc(&not(65535), &s), Some(0));

        let shl = |v, amount| Gate::ShiftLeft { input: Operand::Literal(v), amount, output: out };
        assert_eq!(calc(&shl(1, 16), &s), Some(0));
        assert_eq!(calc(&shl(1, 15), &s), Some(0x8000));
        assert_eq!(calc(&shl(0xffff, 4), &s), Some(0xfff0));
        assert_eq!(calc(&shl(1, 100), &s), Some(0));

        let shr = |v, amount| Gate::ShiftRight { input: Operand::Literal(v), amount, output: out };
        assert_eq!(calc(&shr(0x8000, 15), &s), Some(1));
        assert_eq!(calc(&shr(0xffff, 16), &s), Some(0));
    }

    #[test]
    fn test_unready_operand() {
        let s = state(&[5]);
        let gate = Gate::And { left: wire(0), right: wire(1), output: Ident(2) };
        assert_eq!(calc(&gate, &s), None);
        let gate = Gate::Or { left: Operand::Literal(3), right: wire(0), output: Ident(2) };
        assert_eq!(calc(&gate, &s), Some(7));
    }

    #[test]
    fn test_state_index_out_of_range() {
        let s = state(&[1]);
        assert_eq!(s[Ident(0)], Some(1));
        assert_eq!(s[Ident(40)], None);
    }
}
