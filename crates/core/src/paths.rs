use super::matrix::Matrix;
use common::error::Error;
use common::types::{Distance, UNREACHABLE};

/// Single-source result produced by Dijkstra and Bellman-Ford.
///
/// `predecessors[v]` is the node before `v` on the shortest path found from
/// `source`; the source is its own predecessor and unreached nodes have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub(crate) fn new(
        source: usize,
        distances: Vec<Distance>,
        predecessors: Vec<Option<usize>>,
    ) -> Self {
        Self {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance of every node from the source, `UNREACHABLE` where no path
    /// exists.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    pub fn distance(&self, target: usize) -> Result<Distance, Error> {
        self.check(target)?;
        Ok(self.distances[target])
    }

    pub fn is_reachable(&self, target: usize) -> Result<bool, Error> {
        Ok(self.distance(target)? != UNREACHABLE)
    }

    /// Reconstructs the path from `source` to `target` by walking
    /// predecessors backward from `target`.
    ///
    /// Returns the nodes from `source` to `target` inclusive, or an empty
    /// vector when `target` is unreachable or the predecessor chain does not
    /// lead back to `source` within `node_count` hops.
    ///
    /// # Errors
    /// Returns `Error::InvalidNode` if either index is out of range.
    pub fn path(&self, source: usize, target: usize) -> Result<Vec<usize>, Error> {
        self.check(source)?;
        self.check(target)?;

        if self.distances[target] == UNREACHABLE {
            return Ok(Vec::new());
        }

        let mut path = vec![target];
        let mut current = target;

        while current != source {
            if path.len() > self.node_count() {
                return Ok(Vec::new());
            }
            match self.predecessors[current] {
                Some(prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => return Ok(Vec::new()),
            }
        }

        path.reverse();
        Ok(path)
    }

    /// Path from this result's own source to `target`.
    pub fn path_to(&self, target: usize) -> Result<Vec<usize>, Error> {
        self.path(self.source, target)
    }

    fn check(&self, node: usize) -> Result<(), Error> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(Error::InvalidNode {
                node,
                node_count: self.node_count(),
            })
        }
    }
}

/// All-pairs result produced by Floyd-Warshall.
///
/// `next[i][j]` is the first hop after `i` on the shortest path from `i` to
/// `j`, or none when `j` is not reachable from `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairsPaths {
    distances: Matrix<Distance>,
    next: Matrix<Option<usize>>,
}

impl AllPairsPaths {
    pub(crate) fn new(distances: Matrix<Distance>, next: Matrix<Option<usize>>) -> Self {
        Self { distances, next }
    }

    pub fn node_count(&self) -> usize {
        self.distances.size()
    }

    pub fn distances(&self) -> &Matrix<Distance> {
        &self.distances
    }

    pub fn next_hops(&self) -> &Matrix<Option<usize>> {
        &self.next
    }

    pub fn distance(&self, start: usize, end: usize) -> Result<Distance, Error> {
        self.check(start)?;
        self.check(end)?;
        Ok(self.distances[(start, end)])
    }

    /// Row `start` of the distance matrix: distances from `start` to every
    /// node.
    pub fn distances_from(&self, start: usize) -> Result<&[Distance], Error> {
        self.check(start)?;
        self.distances.row(start).ok_or(Error::InvalidNode {
            node: start,
            node_count: self.node_count(),
        })
    }

    /// Reconstructs the path from `start` to `end` by following next hops.
    ///
    /// Returns an empty vector when `end` is unreachable from `start` or a
    /// hop is missing along the way.
    ///
    /// # Errors
    /// Returns `Error::InvalidNode` if either index is out of range.
    pub fn path(&self, start: usize, end: usize) -> Result<Vec<usize>, Error> {
        self.check(start)?;
        self.check(end)?;

        if self.distances[(start, end)] == UNREACHABLE {
            return Ok(Vec::new());
        }

        let mut path = vec![start];
        let mut at = start;

        while at != end {
            if path.len() > self.node_count() {
                return Ok(Vec::new());
            }
            match self.next[(at, end)] {
                Some(hop) => {
                    path.push(hop);
                    at = hop;
                }
                None => return Ok(Vec::new()),
            }
        }

        Ok(path)
    }

    fn check(&self, node: usize) -> Result<(), Error> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(Error::InvalidNode {
                node,
                node_count: self.node_count(),
            })
        }
    }
}
