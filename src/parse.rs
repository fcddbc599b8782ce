use log::info;

use crate::ast::*;
use crate::error::Error;

/// Parses a whole circuit description, one definition per non-blank line.
pub fn parse(code: &str, ctx: &mut Strings) -> Result<Vec<Definition>, Error> {
    let mut definitions = Vec::new();
    for (index, line) in code.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let definition = circuit::definition(line, ctx).map_err(|err| Error::Parse {
            line: index + 1,
            text: line.to_string(),
            expected: err.expected.to_string(),
        })?;
        definitions.push(definition);
    }
    info!(
        "parsed {} definitions naming {} wires",
        definitions.len(),
        ctx.len()
    );
    Ok(definitions)
}

peg::parser! { pub grammar circuit() for str {

    rule _() = quiet!{[' ' | '\t' | '\r']*}
    rule __() = quiet!{[' ' | '\t']+} / expected!("whitespace")

    pub rule definition(ctx: &mut Strings) -> Definition =
        _ def:(literal(ctx) / gate(ctx)) _ { def }

    rule literal(ctx: &mut Strings) -> Definition =
        value:number() __ "->" __ output:wire(ctx) {
            Definition::Literal { value, output }
        }

    rule gate(ctx: &mut Strings) -> Definition =
        gate:(pass_through(ctx) / binary(ctx) / shift(ctx) / not_gate(ctx)) { Definition::Gate(gate) }

    rule pass_through(ctx: &mut Strings) -> Gate =
        input:reference(ctx) __ "->" __ output:wire(ctx) {
            Gate::PassThrough { input, output }
        }

    rule binary(ctx: &mut Strings) -> Gate =
        left:operand(ctx) __ op:$("AND" / "OR") __ right:operand(ctx) __ "->" __ output:wire(ctx) {
            match op {
                "AND" => Gate::And { left, right, output },
                "OR" => Gate::Or { left, right, output },
                _ => unreachable!()
            }
        }

    rule shift(ctx: &mut Strings) -> Gate =
        input:reference(ctx) __ op:$("LSHIFT" / "RSHIFT") __ amount:shift_amount() __ "->" __ output:wire(ctx) {
            match op {
                "LSHIFT" => Gate::ShiftLeft { input, amount, output },
                "RSHIFT" => Gate::ShiftRight { input, amount, output },
                _ => unreachable!()
            }
        }

    rule not_gate(ctx: &mut Strings) -> Gate =
        "NOT" __ input:reference(ctx) __ "->" __ output:wire(ctx) {
            Gate::Not { input, output }
        }

    rule operand(ctx: &mut Strings) -> Operand =
        value:number() { Operand::Literal(value) } /
        input:reference(ctx) { input }

    rule reference(ctx: &mut Strings) -> Operand =
        wire:wire(ctx) { Operand::Reference(wire) }

    rule wire(ctx: &mut Strings) -> Ident = quiet!{name:$(['a'..='z'] ['a'..='z' | '0'..='9' | '_']*) {
        ctx.intern(name)
    }} / expected!("wire name")

    rule number() -> u16 = quiet!{num:$(['0'..='9']+) {?
        num.parse().or(Err("16-bit literal"))
    }} / expected!("16-bit literal")

    rule shift_amount() -> u32 = quiet!{num:$(['0'..='9']+) {?
        num.parse().or(Err("shift amount"))
    }} / expected!("shift amount")
}}
