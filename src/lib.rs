pub mod ast;
pub mod error;
mod interp;
mod lowering;
pub mod model;
mod parse;
mod report;

pub use rustc_hash::FxHashMap as HashMap;
pub use rustc_hash::FxHashSet as HashSet;

pub use error::Error;
pub use interp::{calc, Interpreter, Solution, State};
pub use lowering::lower;
pub use parse::parse;
pub use report::Report;

/// Parses, lowers and resolves a circuit description in one go.
pub fn solve(code: &str, ctx: &mut ast::Strings) -> Result<(model::Network, Solution), Error> {
    let definitions = parse(code, ctx)?;
    let network = lower(definitions, ctx)?;
    let solution = Interpreter::new(&network).run(ctx)?;
    Ok((network, solution))
}
