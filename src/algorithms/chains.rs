use log::{debug, error};

use crate::data::{EdgeId, VertexId};
use crate::Triangulator;

// Chain method of Lee and Preparata: once the graph is regular, weights that
// balance the flow through every vertex let the edges be covered by chains
// running from the leftmost to the rightmost vertex.

impl Triangulator {
  /// Split the regularized graph into x-monotone chains from the leftmost
  /// to the rightmost vertex, topmost chain first. Every edge ends up on at
  /// least one chain and adjacent chains bound monotone strips.
  ///
  /// Returns the number of chains.
  pub fn construct_chain_set(&mut self) -> usize {
    self.chains.clear();
    let order: Vec<VertexId> = self.index.values().copied().collect();
    let (source, sink) = match order.as_slice() {
      &[first, .., last] => (first, last),
      _ => return 0,
    };
    let interior = &order[1..order.len() - 1];

    for (_, edge) in self.edges.iter_mut() {
      edge.weight = 1;
    }
    for &v in interior.iter().rev() {
      let (w_in, w_out) = (self.weight_in(v), self.weight_out(v));
      if let (true, Some(&top)) = (w_out > w_in, self.edges_in[v.0].first()) {
        self.edges[top].weight += w_out - w_in;
      }
    }
    for &v in interior {
      let (w_in, w_out) = (self.weight_in(v), self.weight_out(v));
      if let (true, Some(&top)) = (w_in > w_out, self.edges_out[v.0].first()) {
        self.edges[top].weight += w_in - w_out;
      }
    }

    let mut remaining = vec![0u32; self.edges.capacity()];
    for (id, edge) in self.edges.iter() {
      remaining[id.0] = edge.weight;
    }
    for _ in 0..self.weight_out(source) {
      let mut chain = Vec::new();
      let mut v = source;
      while v != sink {
        let next = self.edges_out[v.0]
          .iter()
          .copied()
          .find(|e| remaining[e.0] > 0);
        let Some(e) = next else {
          error!("chain stuck at {:?}, graph is not regular", v);
          debug_assert!(false, "chain stuck at {:?}", v);
          break;
        };
        remaining[e.0] -= 1;
        chain.push(e);
        v = self.edges[e].v2;
      }
      self.chains.push(chain);
    }
    debug!("{} chains", self.chains.len());
    self.chains.len()
  }

  fn weight_in(&self, v: VertexId) -> u32 {
    self.weight_sum(&self.edges_in[v.0])
  }

  fn weight_out(&self, v: VertexId) -> u32 {
    self.weight_sum(&self.edges_out[v.0])
  }

  fn weight_sum(&self, edges: &[EdgeId]) -> u32 {
    edges.iter().map(|&e| self.edges[e].weight).sum()
  }
}
