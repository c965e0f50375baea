//! Connection requirements between a move's pivots and the rest of the quiver.

use crate::matrix::QuiverMatrix;
use serde::{Deserialize, Serialize};

/// How a pivot may be attached to the vertices outside the move's window.
///
/// Targets are window vertex indices of other pivots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connection {
    /// The pivot's outside neighbourhood is disconnected from every other pivot's.
    Unconnected,
    /// The pivot reaches, through the rest of the quiver, exactly the listed pivots.
    ConnectedTo(Vec<usize>),
    /// The pivot is the end of a (possibly empty) dangling path of single arrows.
    Line,
    /// A path of single arrows outside the window runs from this pivot to the target.
    LineTo(usize),
}

impl Connection {
    /// Convenience constructor for [`Connection::ConnectedTo`].
    pub fn connected_to<I: IntoIterator<Item = usize>>(targets: I) -> Self {
        Connection::ConnectedTo(targets.into_iter().collect())
    }

    /// Pivots this requirement refers to.
    pub fn targets(&self) -> &[usize] {
        match self {
            Connection::ConnectedTo(targets) => targets,
            Connection::LineTo(target) => std::slice::from_ref(target),
            Connection::Unconnected | Connection::Line => &[],
        }
    }

    /// Whether window vertex `pivot` satisfies this requirement.
    pub(crate) fn holds(&self, pivot: usize, pivots: &[usize], around: &Surroundings<'_>) -> bool {
        match self {
            Connection::Unconnected => {
                let mine = around.parts(pivot);
                pivots
                    .iter()
                    .filter(|&&q| q != pivot)
                    .all(|&q| disjoint(&mine, &around.parts(q)))
            }
            Connection::ConnectedTo(targets) => {
                let mine = around.parts(pivot);
                if mine.is_empty() {
                    return false;
                }
                pivots.iter().filter(|&&q| q != pivot).all(|&q| {
                    let shared = !disjoint(&mine, &around.parts(q));
                    shared == targets.contains(&q)
                })
            }
            Connection::Line => {
                let v = around.image[pivot];
                let outside = around.outside(v);
                match outside.as_slice() {
                    [] => true,
                    [x] => {
                        around.matrix.get(v, *x).abs() == 1
                            && around.is_path(around.component[*x], &[*x], &[(*x, v)])
                    }
                    _ => false,
                }
            }
            Connection::LineTo(target) => {
                let v = around.image[pivot];
                let w = around.image[*target];
                let (x, y) = match (around.outside(v).as_slice(), around.outside(w).as_slice()) {
                    ([x], [y]) => (*x, *y),
                    _ => return false,
                };
                if around.matrix.get(v, x).abs() != 1 || around.matrix.get(w, y).abs() != 1 {
                    return false;
                }
                let comp = around.component[x];
                if comp != around.component[y] {
                    return false;
                }
                if x == y {
                    return around.members[comp].len() == 1
                        && around.is_path(comp, &[x], &[(x, v), (x, w)]);
                }
                around.is_path(comp, &[x, y], &[(x, v), (y, w)])
            }
        }
    }
}

fn disjoint(a: &[usize], b: &[usize]) -> bool {
    a.iter().all(|c| !b.contains(c))
}

/// Component label of window vertices.
const IN_WINDOW: usize = usize::MAX;

/// Component label of rest vertices not yet visited.
const UNSEEN: usize = usize::MAX - 1;

/// The part of the quiver outside an assigned window.
///
/// Connected components are computed on the rest alone, using only edges between
/// vertices outside the window.
pub(crate) struct Surroundings<'a> {
    matrix: &'a QuiverMatrix,
    image: &'a [usize],
    component: Vec<usize>,
    members: Vec<Vec<usize>>,
}

impl<'a> Surroundings<'a> {
    /// `image[i]` is the ambient vertex assigned to window vertex `i`.
    pub(crate) fn new(matrix: &'a QuiverMatrix, image: &'a [usize]) -> Self {
        let n = matrix.num_vertices();
        let mut component = vec![UNSEEN; n];
        for &v in image {
            component[v] = IN_WINDOW;
        }
        let mut members: Vec<Vec<usize>> = Vec::new();
        for start in 0..n {
            if component[start] != UNSEEN {
                continue;
            }
            let label = members.len();
            component[start] = label;
            let mut group = vec![start];
            let mut stack = vec![start];
            while let Some(v) = stack.pop() {
                for w in 0..n {
                    if component[w] == UNSEEN && matrix.get(v, w) != 0 {
                        component[w] = label;
                        group.push(w);
                        stack.push(w);
                    }
                }
            }
            group.sort_unstable();
            members.push(group);
        }
        Self {
            matrix,
            image,
            component,
            members,
        }
    }

    /// Neighbours of ambient vertex `v` outside the window.
    fn outside(&self, v: usize) -> Vec<usize> {
        (0..self.matrix.num_vertices())
            .filter(|&w| self.component[w] != IN_WINDOW && self.matrix.get(v, w) != 0)
            .collect()
    }

    /// Whether window vertex `i` has no edge leaving the window.
    pub(crate) fn isolated(&self, i: usize) -> bool {
        self.outside(self.image[i]).is_empty()
    }

    /// Sorted labels of the outside components adjacent to window vertex `i`.
    fn parts(&self, i: usize) -> Vec<usize> {
        let mut labels: Vec<usize> = self
            .outside(self.image[i])
            .into_iter()
            .map(|w| self.component[w])
            .collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Whether component `comp` is a simple path of single arrows with every vertex
    /// of `ends` at an end, touching the window only through `attachments`
    /// (pairs of outside vertex and window vertex).
    fn is_path(&self, comp: usize, ends: &[usize], attachments: &[(usize, usize)]) -> bool {
        let group = &self.members[comp];
        let mut edges = 0;
        for &z in group {
            let mut degree = 0;
            for &u in group {
                let weight = self.matrix.get(z, u);
                if weight == 0 {
                    continue;
                }
                if weight.abs() != 1 {
                    return false;
                }
                degree += 1;
            }
            if degree > 2 || (ends.contains(&z) && degree > 1) {
                return false;
            }
            edges += degree;
            for &w in self.image {
                if self.matrix.get(z, w) != 0 && !attachments.contains(&(z, w)) {
                    return false;
                }
            }
        }
        edges / 2 + 1 == group.len()
    }
}
