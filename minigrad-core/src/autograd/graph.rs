use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a node: the address of its shared storage.
///
/// Keys the visited set during traversal. Two nodes holding the same value
/// are still distinct nodes.
pub type NodeId = *const RefCell<ValueData>;

/// Builds a topological sort of the graph reachable from `root`.
///
/// The result is a depth-first post-order: every node appears after all of its
/// operands, and `root` is last. Operands are visited in construction order,
/// so the order is reproducible for a given graph shape.
///
/// The traversal keeps an explicit stack instead of recursing, so very deep
/// graphs (long training chains) cannot overflow the call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            log::trace!("[topological_sort] node {:?} already visited", node.node_id());
            continue;
        }

        let operands = node.operands();
        stack.push((node, true));
        // Reversed so the first operand is popped, and therefore finished, first.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    log::trace!("[topological_sort] {} nodes sorted", sorted_list.len());
    sorted_list
}

/// Resets the gradient of every node reachable from `root`, interior nodes
/// included.
pub fn zero_grad_graph(root: &Value) {
    for node in topological_sort(root) {
        node.zero_grad();
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
