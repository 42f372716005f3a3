//! Build-time checks: nullability, empty repetition and left recursion.

use super::{Grammar, GrammarError, Op, RuleId};

pub(crate) fn check(grammar: &mut Grammar) -> Result<(), GrammarError> {
    let nullable = nullable_rules(grammar);
    for (rule, &is_nullable) in grammar.rules.iter_mut().zip(&nullable) {
        rule.nullable = is_nullable;
    }

    for rule in &grammar.rules {
        if repeats_nullable(&rule.op, &nullable) {
            return Err(GrammarError::NullableRepetition {
                rule: rule.name.clone(),
            });
        }
    }

    if let Some(cycle) = left_recursion(grammar, &nullable) {
        let cycle = cycle
            .into_iter()
            .map(|id| grammar.rule(id).name.clone())
            .collect();
        return Err(GrammarError::LeftRecursion { cycle });
    }

    Ok(())
}

/// Least fixpoint of "can succeed without consuming input".
fn nullable_rules(grammar: &Grammar) -> Vec<bool> {
    let mut nullable = vec![false; grammar.rules.len()];
    loop {
        let mut changed = false;
        for (i, rule) in grammar.rules.iter().enumerate() {
            if !nullable[i] && is_nullable(&rule.op, &nullable) {
                nullable[i] = true;
                changed = true;
            }
        }
        if !changed {
            return nullable;
        }
    }
}

fn is_nullable(op: &Op, nullable: &[bool]) -> bool {
    match op {
        Op::Literal { text, .. } => text.is_empty(),
        Op::Class { .. } | Op::Any { .. } => false,
        Op::Eoi { .. } => true,
        Op::Seq(items) => items.iter().all(|item| is_nullable(item, nullable)),
        Op::Choice(alts) => alts.iter().any(|alt| is_nullable(alt, nullable)),
        Op::ZeroOrMore(_) | Op::Optional(_) | Op::And(_) | Op::Not(_) => true,
        Op::OneOrMore(body) => is_nullable(body, nullable),
        Op::Call(id) => nullable[id.index()],
    }
}

fn repeats_nullable(op: &Op, nullable: &[bool]) -> bool {
    match op {
        Op::ZeroOrMore(body) | Op::OneOrMore(body) => {
            is_nullable(body, nullable) || repeats_nullable(body, nullable)
        }
        Op::Optional(body) | Op::And(body) | Op::Not(body) => repeats_nullable(body, nullable),
        Op::Seq(items) | Op::Choice(items) => {
            items.iter().any(|item| repeats_nullable(item, nullable))
        }
        _ => false,
    }
}

/// Rules `op` may call before consuming any input.
fn leading_calls(op: &Op, nullable: &[bool], out: &mut Vec<RuleId>) {
    match op {
        Op::Seq(items) => {
            for item in items.iter() {
                leading_calls(item, nullable, out);
                if !is_nullable(item, nullable) {
                    break;
                }
            }
        }
        Op::Choice(alts) => {
            for alt in alts.iter() {
                leading_calls(alt, nullable, out);
            }
        }
        Op::ZeroOrMore(body)
        | Op::OneOrMore(body)
        | Op::Optional(body)
        | Op::And(body)
        | Op::Not(body) => leading_calls(body, nullable, out),
        Op::Call(id) => out.push(*id),
        _ => {}
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    Active,
    Done,
}

/// First cycle in the leading-call graph, in definition order, closed by
/// repeating its first rule.
fn left_recursion(grammar: &Grammar, nullable: &[bool]) -> Option<Vec<RuleId>> {
    let edges: Vec<Vec<RuleId>> = grammar
        .rules
        .iter()
        .map(|rule| {
            let mut calls = Vec::new();
            leading_calls(&rule.op, nullable, &mut calls);
            calls.dedup();
            calls
        })
        .collect();

    let mut state = vec![Visit::New; edges.len()];
    let mut path = Vec::new();
    for start in 0..edges.len() {
        if state[start] == Visit::New
            && let Some(cycle) = visit(RuleId(start as u32), &edges, &mut state, &mut path)
        {
            return Some(cycle);
        }
    }
    None
}

fn visit(
    id: RuleId,
    edges: &[Vec<RuleId>],
    state: &mut [Visit],
    path: &mut Vec<RuleId>,
) -> Option<Vec<RuleId>> {
    state[id.index()] = Visit::Active;
    path.push(id);

    for &next in &edges[id.index()] {
        match state[next.index()] {
            Visit::Active => {
                let from = path.iter().position(|&p| p == next).unwrap_or(0);
                let mut cycle = path[from..].to_vec();
                cycle.push(next);
                return Some(cycle);
            }
            Visit::New => {
                if let Some(cycle) = visit(next, edges, state, path) {
                    return Some(cycle);
                }
            }
            Visit::Done => {}
        }
    }

    path.pop();
    state[id.index()] = Visit::Done;
    None
}
