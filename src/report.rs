use std::fmt::Write;

use crate::pareto::ParetoFront;

/// Renders the front for the console: a header line followed by one
/// `Return: R, Risk: V, Transaction Cost: C` line per member.
pub fn render_text(front: &ParetoFront) -> String {
    let mut out = String::from("Pareto Front:\n");
    for portfolio in front.iter() {
        writeln!(
            out,
            "Return: {}, Risk: {}, Transaction Cost: {}",
            portfolio.net_return, portfolio.volatility, portfolio.transaction_cost
        )
        .expect("writing to a String cannot fail");
    }
    out
}

/// Serializes the front members as pretty-printed JSON, for consumers
/// that want a machine-readable export.
pub fn to_json(front: &ParetoFront) -> serde_json::Result<String> {
    serde_json::to_string_pretty(front.members())
}
