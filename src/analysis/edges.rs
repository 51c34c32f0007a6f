//! Jump edge discovery within one function.
//!
//! Two linear passes resolve jump operands to instruction indices. The
//! backward pass walks the function bottom-up and resolves jumps whose target
//! address is at or below their own (loops); the forward pass walks top-down
//! and resolves jumps whose target lies above. In both passes a pending
//! target may collect any number of sources, and all of them are emitted once
//! the target instruction is reached.
//!
//! Edges come out in presentation order: every backward-pass edge first, then
//! every forward-pass edge, each pass in discovery order. The track allocator
//! relies on that order for its tie-breaks.

use std::collections::HashMap;

use tracing::trace;

use crate::config::{ArrowConfig, SelfLoopPolicy};
use crate::core::{Edge, InstructionLine};

/// Pending sources keyed by the address they jump to.
type PendingSources = HashMap<u64, Vec<usize>>;

/// Target address of `line` when it is a jump with a plain hexadecimal operand.
pub fn jump_target(line: &InstructionLine, config: &ArrowConfig) -> Option<u64> {
    let mnemonic = line.mnemonic.as_deref()?;
    if !config.is_jump_mnemonic(mnemonic) {
        return None;
    }
    line.hex_operand()
}

/// Discover all resolvable jump edges of a function.
pub fn extract_edges(lines: &[InstructionLine], config: &ArrowConfig) -> Vec<Edge> {
    let targets: Vec<Option<u64>> = lines.iter().map(|l| jump_target(l, config)).collect();
    let mut edges = Vec::new();
    backward_pass(lines, &targets, config.self_loops, &mut edges);
    forward_pass(lines, &targets, &mut edges);
    edges
}

fn backward_pass(
    lines: &[InstructionLine],
    targets: &[Option<u64>],
    self_loops: SelfLoopPolicy,
    edges: &mut Vec<Edge>,
) {
    let mut pending = PendingSources::new();
    for (index, line) in lines.iter().enumerate().rev() {
        resolve(&mut pending, line.address, index, edges);

        let Some(target) = targets[index] else {
            continue;
        };
        if target == line.address {
            // Registering would never resolve: the target row is already behind us.
            match self_loops {
                SelfLoopPolicy::Marker => edges.push(Edge::new(index, index)),
                SelfLoopPolicy::Drop => trace!(index, "dropping self loop"),
            }
        } else if target < line.address {
            pending.entry(target).or_default().push(index);
        }
    }
    log_unresolved("backward", &pending);
}

fn forward_pass(lines: &[InstructionLine], targets: &[Option<u64>], edges: &mut Vec<Edge>) {
    let mut pending = PendingSources::new();
    for (index, line) in lines.iter().enumerate() {
        resolve(&mut pending, line.address, index, edges);

        // Equal targets were handled as self loops by the backward pass.
        if let Some(target) = targets[index] {
            if target > line.address {
                pending.entry(target).or_default().push(index);
            }
        }
    }
    log_unresolved("forward", &pending);
}

/// Emit one edge per source waiting on `address`, then forget them.
fn resolve(pending: &mut PendingSources, address: u64, index: usize, edges: &mut Vec<Edge>) {
    if let Some(sources) = pending.remove(&address) {
        for source in sources {
            trace!(source, target = index, "resolved jump");
            edges.push(Edge::new(source, index));
        }
    }
}

fn log_unresolved(pass: &str, pending: &PendingSources) {
    if pending.is_empty() {
        return;
    }
    let dropped: usize = pending.values().map(Vec::len).sum();
    trace!(pass, dropped, "jumps leave the function");
}
