use crate::ast::{Gate, Ident, Strings};
use crate::error::Error;
use crate::HashMap;

/// The one thing driving a wire.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Source {
    Literal(u16),
    Gate(usize),
}

/// Structural graph of a circuit. Only built through [`crate::lower`], which
/// guarantees every tracked wire has exactly one source.
#[derive(Clone, Debug)]
pub struct Network {
    pub(crate) wires: Vec<Ident>,
    pub(crate) literals: Vec<(Ident, u16)>,
    pub(crate) gates: Vec<Gate>,
    pub(crate) sources: HashMap<Ident, Source>,
}

impl Network {
    /// All tracked wires, in order of first appearance.
    pub fn wires(&self) -> &[Ident] {
        &self.wires
    }

    pub fn literals(&self) -> &[(Ident, u16)] {
        &self.literals
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn source(&self, wire: Ident) -> Option<Source> {
        self.sources.get(&wire).copied()
    }

    pub fn contains(&self, wire: Ident) -> bool {
        self.sources.contains_key(&wire)
    }

    /// Copy of this network with `wire` driven by the constant `value`
    /// instead of whatever defined it before.
    pub fn with_literal(&self, wire: Ident, value: u16, ctx: &Strings) -> Result<Network, Error> {
        if !self.contains(wire) {
            return Err(Error::UndefinedWire {
                wire: ctx[wire].to_string(),
                referenced_by: "override".to_string(),
            });
        }

        let mut literals: Vec<(Ident, u16)> = self
            .literals
            .iter()
            .copied()
            .filter(|&(output, _)| output != wire)
            .collect();
        literals.push((wire, value));
        let gates: Vec<Gate> = self
            .gates
            .iter()
            .copied()
            .filter(|gate| gate.output() != wire)
            .collect();

        let mut sources = HashMap::default();
        for &(output, value) in &literals {
            sources.insert(output, Source::Literal(value));
        }
        for (index, gate) in gates.iter().enumerate() {
            sources.insert(gate.output(), Source::Gate(index));
        }

        Ok(Network {
            wires: self.wires.clone(),
            literals,
            gates,
            sources,
        })
    }
}
