use log::info;

use crate::ast::{Definition, Ident, Strings};
use crate::error::Error;
use crate::model::{Network, Source};
use crate::{HashMap, HashSet};

/// Builds the structural graph from parsed definitions, rejecting wires that
/// are defined twice or referenced without ever being defined.
pub fn lower(definitions: Vec<Definition>, ctx: &Strings) -> Result<Network, Error> {
    let mut wires = Vec::new();
    let mut seen = HashSet::default();
    let mut track = |wire: Ident| {
        if seen.insert(wire) {
            wires.push(wire);
        }
    };

    let mut literals = Vec::new();
    let mut gates = Vec::new();
    let mut sources = HashMap::default();

    for def in &definitions {
        let output = def.output();
        let source = match *def {
            Definition::Literal { value, .. } => Source::Literal(value),
            Definition::Gate(_) => Source::Gate(gates.len()),
        };
        if sources.insert(output, source).is_some() {
            return Err(Error::DuplicateDefinition {
                wire: ctx[output].to_string(),
            });
        }
        match *def {
            Definition::Literal { value, output } => literals.push((output, value)),
            Definition::Gate(gate) => {
                for input in gate.references() {
                    track(input);
                }
                gates.push(gate);
            }
        }
        track(output);
    }

    for gate in &gates {
        if let Some(wire) = gate.references().find(|wire| !sources.contains_key(wire)) {
            return Err(Error::UndefinedWire {
                wire: ctx[wire].to_string(),
                referenced_by: ctx[gate.output()].to_string(),
            });
        }
    }

    info!(
        "lowered {} wires: {} literals, {} gates",
        wires.len(),
        literals.len(),
        gates.len()
    );

    Ok(Network {
        wires,
        literals,
        gates,
        sources,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse;

    fn lower_str(code: &str) -> (Result<Network, Error>, Strings) {
        let mut ctx = Strings::default();
        let defs = parse(code, &mut ctx).unwrap();
        (lower(defs, &ctx), ctx)
    }

    #[test]
    fn test_tracks_every_wire() {
        let (net, ctx) = lower_str("x AND y -> d\n1 -> x\n2 -> y\n");
        let net = net.unwrap();
        let names: Vec<&str> = net.wires().iter().map(|&w| &ctx[w]).collect();
        assert_eq!(names, ["x", "y", "d"]);
        assert_eq!(net.gates().len(), 1);
        assert_eq!(net.literals().len(), 2);
        assert_eq!(net.source(ctx.lookup("x").unwrap()), Some(Source::Literal(1)));
        assert_eq!(net.source(ctx.lookup("d").unwrap()), Some(Source::Gate(0)));
    }

    #[test]
    fn test_undefined_wire() {
        let (net, _) = lower_str("1 -> x\nx AND z -> d\n");
        assert_eq!(
            net.unwrap_err(),
            Error::UndefinedWire {
                wire: "z".into(),
                referenced_by: "d".into()
            }
        );
    }

    #[test]
    fn test_duplicate_definition() {
        for code in [
            "1 -> x\n2 -> x\n",
            "1 -> y\ny -> x\n3 -> x\n",
            "1 -> y\nNOT y -> x\ny OR 1 -> x\n",
        ] {
            let (net, _) = lower_str(code);
            assert_eq!(
                net.unwrap_err(),
                Error::DuplicateDefinition { wire: "x".into() },
                "{code:?}"
            );
        }
    }

    #[test]
    fn test_with_literal() {
        let (net, ctx) = lower_str("1 -> b\nb -> a\n");
        let net = net.unwrap();
        let a = ctx.lookup("a").unwrap();
        let b = ctx.lookup("b").unwrap();

        let overridden = net.with_literal(a, 7, &ctx).unwrap();
        assert!(overridden.gates().is_empty());
        assert_eq!(overridden.source(a), Some(Source::Literal(7)));
        assert_eq!(overridden.source(b), Some(Source::Literal(1)));
        assert_eq!(overridden.wires(), net.wires());

        let overridden = net.with_literal(b, 9, &ctx).unwrap();
        assert_eq!(overridden.literals(), [(b, 9)]);
        assert_eq!(overridden.source(a), Some(Source::Gate(0)));
    }

    #[test]
    fn test_with_literal_unknown_wire() {
        let (net, mut ctx) = lower_str("1 -> b\n");
        let q = ctx.intern("q");
        assert!(matches!(
            net.unwrap().with_literal(q, 1, &ctx),
            Err(Error::UndefinedWire { .. })
        ));
    }
}
