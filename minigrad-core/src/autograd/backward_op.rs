//! Local gradient rules, one per [`Op`] tag.
//!
//! During the backward pass every node is visited once, after all of its
//! consumers. [`propagate`] reads the node's accumulated gradient `g` and adds
//! its contribution into each operand:
//!
//! | Op         | Contribution                          |
//! |------------|---------------------------------------|
//! | `Add`      | `a += g`, `b += g`                    |
//! | `Mul`      | `a += b * g`, `b += a * g`            |
//! | `Pow(k)`   | `a += k * a^(k-1) * g`                |
//! | `Relu`     | `a += g` if `out > 0`, else nothing   |
//! | `Sigmoid`  | `a += out * (1 - out) * g`            |
//! | `Leaf`     | nothing                               |

use crate::value::Value;
use crate::value_data::Op;

/// Applies the local gradient rule of `node` to its operands.
pub(crate) fn propagate(node: &Value) {
    let guard = node.read_data();
    let g = guard.grad;
    let out = guard.value;

    // The node's own cell stays borrowed while operands are updated. Operands
    // are always distinct cells (the graph is acyclic), so this never conflicts.
    match &guard.op {
        Op::Leaf => {}
        Op::Add(a, b) => {
            a.acc_grad(g);
            b.acc_grad(g);
        }
        Op::Mul(a, b) => {
            let (a_value, b_value) = (a.value(), b.value());
            a.acc_grad(b_value * g);
            b.acc_grad(a_value * g);
        }
        Op::Pow(a, k) => {
            a.acc_grad(k * a.value().powf(k - 1.0) * g);
        }
        Op::Relu(a) => {
            if out > 0.0 {
                a.acc_grad(g);
            }
        }
        Op::Sigmoid(a) => {
            a.acc_grad(out * (1.0 - out) * g);
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
