//! Random mutation scripts for property tests.

use crate::graph::*;
use quickcheck::{Arbitrary, Gen};
use rs_quickcheck_util::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    AddVertex(VertexId),
    RemoveVertex(VertexId),
    /// Source, target, ID and a small non-negative integral weight.
    AddEdge((VertexId, VertexId, EdgeId, f64)),
    RemoveEdge(EdgeId),
}

#[derive(Clone)]
pub struct Ops {
    pub ops: Vec<Op>,
}

impl std::fmt::Debug for Ops {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.ops)
    }
}

impl Ops {
    pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
        self.ops.iter()
    }
}

fn pick<T: Copy>(g: &mut Gen, known: &BTreeSet<T>) -> Option<T> {
    if known.is_empty() {
        return None;
    }
    let idx = usize::arbitrary(g) % known.len();
    known.iter().nth(idx).copied()
}

impl Arbitrary for Ops {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut vid_factory = VertexIdFactory::new();
        let mut eid_factory = EdgeIdFactory::new();
        let mut known_vid = BTreeSet::new();
        let mut known_eid = BTreeSet::new();
        let ops = gen_bytes(g, b"abcd.", b'.', 0..)
            .iter()
            .filter_map(|_| match u8::arbitrary(g) % 4 {
                0 => {
                    let vid = vid_factory.one_more();
                    known_vid.insert(vid);
                    Some(Op::AddVertex(vid))
                }
                1 => {
                    let vid = pick(g, &known_vid)?;
                    known_vid.remove(&vid);
                    Some(Op::RemoveVertex(vid))
                }
                2 => {
                    let src = pick(g, &known_vid)?;
                    let snk = pick(g, &known_vid)?;
                    let eid = eid_factory.one_more();
                    known_eid.insert(eid);
                    let weight = f64::from(u8::arbitrary(g) % 10);
                    Some(Op::AddEdge((src, snk, eid, weight)))
                }
                3 => {
                    let eid = pick(g, &known_eid)?;
                    known_eid.remove(&eid);
                    Some(Op::RemoveEdge(eid))
                }
                _ => unreachable!(),
            })
            .collect();
        Self { ops }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let l = self.ops.len();
        let me = self.clone();
        let it = std::iter::successors(Some(l / 2), move |n| {
            let nxt = (n + l) / 2 + 1;
            if nxt >= l {
                None
            } else {
                Some(nxt)
            }
        })
        .map(move |n| Self {
            ops: me.ops[0..n].to_vec(),
        });
        Box::new(it)
    }
}
