use std::ops::Index;

pub(crate) type NodeId = usize;

/// A run of equal elements on a path through the edit graph.
///
/// Points are `(i, j)` pairs, `i` indexing the original sequence and `j` the
/// revised one. `prev` is the snake before this one on the same path; every
/// move between the two is an insert or a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Snake {
    pub start: (usize, usize),
    pub end: (usize, usize),
    pub prev: Option<NodeId>,
}

/// Owns the snakes of one search; links are indices into it.
#[derive(Debug, Default)]
pub(crate) struct PathArena {
    snakes: Vec<Snake>,
}

impl PathArena {
    pub fn push(&mut self, snake: Snake) -> NodeId {
        self.snakes.push(snake);
        self.snakes.len() - 1
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.snakes.len()
    }
}

impl Index<NodeId> for PathArena {
    type Output = Snake;

    fn index(&self, id: NodeId) -> &Snake {
        &self.snakes[id]
    }
}

/// Furthest point a path has reached on one diagonal, with the last snake
/// it went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Reach {
    pub i: usize,
    pub j: usize,
    pub snake: Option<NodeId>,
}

/// Furthest reach per diagonal `k = i - j`, indexed by signed `k`.
#[derive(Clone)]
pub(crate) struct Diagonals {
    data: Vec<Option<Reach>>,
    offset: isize,
}

impl Diagonals {
    pub fn new(size: usize) -> Self {
        Diagonals {
            data: vec![None; 2 * size + 1],
            offset: size as isize,
        }
    }

    pub fn get(&self, k: isize) -> Option<Reach> {
        self.data[(k + self.offset) as usize]
    }

    pub fn set(&mut self, k: isize, reach: Reach) {
        self.data[(k + self.offset) as usize] = Some(reach);
    }
}
