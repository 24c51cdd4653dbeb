use crate::autograd::backward_op::propagate;
use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl Value {
    /// Accumulated derivative of the last backward root with respect to this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `grad` to the stored gradient. Never overwrites, so a node with
    /// several consumers collects every contribution.
    pub(crate) fn acc_grad(&self, grad: f64) {
        self.write_data().grad += grad;
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Performs the backward pass starting from this node.
    ///
    /// The root's gradient is seeded to exactly `1.0` (a hard reset, even if it
    /// held a previous value). Interior nodes are reset to zero before
    /// propagation, so after the call each of them holds exactly the partial
    /// derivative of this root. Leaves accumulate into their existing
    /// gradient: calling `backward` twice without zeroing first doubles every
    /// leaf gradient, and backward passes from different roots sum up.
    /// Interior nodes are therefore not accumulators: their gradients never double.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        log::debug!(
            "backward: {} nodes reachable from root {:?}",
            sorted_nodes.len(),
            self.node_id()
        );

        for node in sorted_nodes.iter().filter(|node| !node.is_leaf()) {
            node.zero_grad();
        }
        self.set_grad(1.0);
        for node in sorted_nodes.iter().rev() {
            propagate(node);
        }
    }
}
