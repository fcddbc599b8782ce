use crate::HashMap;
use std::ops::Index;

#[derive(Default, Debug)]
pub struct Strings {
    pub ident_ids: HashMap<String, Ident>,
    pub idents: Vec<String>,
}

impl Strings {
    pub fn intern(&mut self, str: &str) -> Ident {
        if let Some(&id) = self.ident_ids.get(str) {
            id
        } else {
            let id = Ident(self.idents.len() as u32);
            self.ident_ids.insert(str.into(), id);
            self.idents.push(str.into());
            id
        }
    }

    pub fn lookup(&self, str: &str) -> Option<Ident> {
        self.ident_ids.get(str).copied()
    }

    pub fn len(&self) -> usize {
        self.idents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idents.is_empty()
    }
}

impl Index<Ident> for Strings {
    type Output = str;

    fn index(&self, index: Ident) -> &Self::Output {
        &self.idents[index.0 as usize]
    }
}

/// An interned wire name.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Ident(pub u32);

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Operand {
    Literal(u16),
    Reference(Ident),
}

impl Operand {
    pub fn reference(self) -> Option<Ident> {
        match self {
            Operand::Reference(wire) => Some(wire),
            Operand::Literal(_) => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Gate {
    PassThrough {
        input: Operand,
        output: Ident,
    },
    And {
        left: Operand,
        right: Operand,
        output: Ident,
    },
    Or {
        left: Operand,
        right: Operand,
        output: Ident,
    },
    Not {
        input: Operand,
        output: Ident,
    },
    ShiftLeft {
        input: Operand,
        amount: u32,
        output: Ident,
    },
    ShiftRight {
        input: Operand,
        amount: u32,
        output: Ident,
    },
}

impl Gate {
    pub fn output(&self) -> Ident {
        match *self {
            Gate::PassThrough { output, .. }
            | Gate::And { output, .. }
            | Gate::Or { output, .. }
            | Gate::Not { output, .. }
            | Gate::ShiftLeft { output, .. }
            | Gate::ShiftRight { output, .. } => output,
        }
    }

    /// Operand inputs in source order. Shift amounts are part of the gate, not operands.
    pub fn operands(&self) -> impl Iterator<Item = Operand> {
        let (first, second) = match *self {
            Gate::And { left, right, .. } | Gate::Or { left, right, .. } => (left, Some(right)),
            Gate::PassThrough { input, .. }
            | Gate::Not { input, .. }
            | Gate::ShiftLeft { input, .. }
            | Gate::ShiftRight { input, .. } => (input, None),
        };
        std::iter::once(first).chain(second)
    }

    pub fn references(&self) -> impl Iterator<Item = Ident> {
        self.operands().filter_map(Operand::reference)
    }
}

/// What a single line of the circuit description declares.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Definition {
    Literal { value: u16, output: Ident },
    Gate(Gate),
}

impl Definition {
    pub fn output(&self) -> Ident {
        match self {
            Definition::Literal { output, .. } => *output,
            Definition::Gate(gate) => gate.output(),
        }
    }
}
