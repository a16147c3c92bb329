//! Hex board representation: a cell array plus a disjoint-set structure
//! used to answer "is there a connecting chain?" in near-constant time,
//! and an undo stack that can reverse exactly one `place_stone` call.
//!
//! The four "virtual edges" (red-top, red-bottom, black-left,
//! black-right) are extra disjoint-set elements appended after the
//! n*n board cells; a player has won once their two edges share a
//! root, which `union`'s path compression keeps cheap to check after
//! every move.

use std::collections::VecDeque;

use crate::error::{HexError, HexResult};
use crate::move_types::{Color, Move, Player};

/// Disjoint-set (union-find) over a fixed number of elements, with path
/// compression and union by rank. Supports full snapshot/restore of its
/// internal arrays, which is what makes `Board::undo` an exact inverse
/// of `place_stone`.
#[derive(Debug, Clone, PartialEq)]
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }

    fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

/// One undo-able mutation: the cell that changed, its previous color,
/// and a full copy of the union-find state before the move. Snapshotting
/// the whole structure rather than diffing it keeps undo trivially
/// correct at the cost of extra memory per history entry, bounded by
/// however deep a single search path goes.
#[derive(Debug, Clone)]
struct Snapshot {
    index: usize,
    previous_color: Color,
    uf: UnionFind,
}

/// An n x n Hex board. Red connects the top and bottom edges; Black
/// connects the left and right edges. Draws are impossible: the game
/// always decides a winner before the last empty cell is filled.
#[derive(Debug, Clone)]
pub struct Board {
    pub size: usize,
    cells: Vec<Color>,
    uf: UnionFind,
    history: Vec<Snapshot>,
}

const RED_TOP_OFFSET: usize = 0;
const RED_BOTTOM_OFFSET: usize = 1;
const BLACK_LEFT_OFFSET: usize = 2;
const BLACK_RIGHT_OFFSET: usize = 3;

/// Pointy-top rhombus neighbor offsets, in a fixed order used throughout
/// the engine (heuristics rely on this order only for iteration, never
/// for identity).
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] =
    [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)];

impl Board {
    pub fn new(size: usize) -> HexResult<Board> {
        if size == 0 {
            return Err(HexError::InvalidConfiguration(
                "board size must be positive".to_string(),
            ));
        }
        Ok(Board {
            size,
            cells: vec![Color::Empty; size * size],
            uf: UnionFind::new(size * size + 4),
            history: Vec::new(),
        })
    }

    fn virtual_edge(&self, offset: usize) -> usize {
        self.size * self.size + offset
    }

    #[inline]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if self.in_bounds(row, col) {
            Some(row as usize * self.size + col as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    pub fn cell(&self, row: i32, col: i32) -> Color {
        match self.index(row, col) {
            Some(idx) => self.cells[idx],
            None => Color::Empty,
        }
    }

    /// The in-bounds subset of the six hex neighbors of (row, col).
    pub fn neighbors(&self, row: i32, col: i32) -> Vec<(i32, i32)> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|(dr, dc)| (row + dr, col + dc))
            .filter(|&(r, c)| self.in_bounds(r, c))
            .collect()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..self.size as i32 {
            for col in 0..self.size as i32 {
                if self.cell(row, col) == Color::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_empty_at(&self, row: i32, col: i32) -> bool {
        self.cell(row, col) == Color::Empty
    }

    /// Places a stone, updating union-find connectivity with same-colored
    /// neighbors and, when the stone lands on a goal edge, with the
    /// corresponding virtual edge node.
    pub fn place_stone(&mut self, row: i32, col: i32, color: Color) -> HexResult<()> {
        let idx = self
            .index(row, col)
            .ok_or(HexError::InvalidMove { row, col })?;
        if self.cells[idx] != Color::Empty {
            return Err(HexError::InvalidMove { row, col });
        }

        self.history.push(Snapshot {
            index: idx,
            previous_color: self.cells[idx],
            uf: self.uf.clone(),
        });

        self.cells[idx] = color;

        for (nr, nc) in self.neighbors(row, col) {
            if self.cell(nr, nc) == color {
                let nidx = self.index(nr, nc).unwrap();
                self.uf.union(idx, nidx);
            }
        }

        match color {
            Color::Red => {
                if row == 0 {
                    self.uf.union(idx, self.virtual_edge(RED_TOP_OFFSET));
                }
                if row as usize == self.size - 1 {
                    self.uf.union(idx, self.virtual_edge(RED_BOTTOM_OFFSET));
                }
            }
            Color::Black => {
                if col == 0 {
                    self.uf.union(idx, self.virtual_edge(BLACK_LEFT_OFFSET));
                }
                if col as usize == self.size - 1 {
                    self.uf.union(idx, self.virtual_edge(BLACK_RIGHT_OFFSET));
                }
            }
            Color::Empty => unreachable!("place_stone with Color::Empty"),
        }

        Ok(())
    }

    pub fn make_move(&mut self, row: i32, col: i32, player: Player) -> HexResult<()> {
        self.place_stone(row, col, player.stone())
    }

    /// Precisely reverses the last `place_stone` call: restores the
    /// cell's previous color and the union-find state verbatim.
    pub fn undo(&mut self) -> HexResult<()> {
        let snapshot = self.history.pop().ok_or(HexError::NothingToUndo)?;
        self.cells[snapshot.index] = snapshot.previous_color;
        self.uf = snapshot.uf;
        Ok(())
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn red_wins(&mut self) -> bool {
        let top = self.virtual_edge(RED_TOP_OFFSET);
        let bottom = self.virtual_edge(RED_BOTTOM_OFFSET);
        self.uf.connected(top, bottom)
    }

    pub fn black_wins(&mut self) -> bool {
        let left = self.virtual_edge(BLACK_LEFT_OFFSET);
        let right = self.virtual_edge(BLACK_RIGHT_OFFSET);
        self.uf.connected(left, right)
    }

    pub fn is_terminal(&mut self) -> bool {
        self.red_wins() || self.black_wins()
    }

    pub fn reset(&mut self) {
        self.cells = vec![Color::Empty; self.size * self.size];
        self.uf = UnionFind::new(self.size * self.size + 4);
        self.history.clear();
    }

    pub fn copy(&self) -> Board {
        self.clone()
    }
}

/// Sentinel returned when a color's two goal edges are unreachable from
/// each other (should not occur in the legal positions the engine
/// searches, but kept finite so callers never have to special-case it).
fn unreachable_sentinel(n: usize) -> i64 {
    (n * n + 1) as i64
}

fn cell_cost(cell: Color, color: Color) -> Option<i64> {
    if cell == color {
        Some(0)
    } else if cell == Color::Empty {
        Some(1)
    } else {
        None
    }
}

/// Minimum-cost path connecting `color`'s two goal edges, where entering
/// a same-colored cell is free, an empty cell costs 1, and an opposing
/// cell is impassable. A 0/1-cost relaxation over a deque (push-front on
/// zero-cost edges, push-back on cost-1 edges) converges without a
/// priority queue.
pub fn shortest_path_distance(board: &Board, color: Color) -> i64 {
    let n = board.size;
    let mut dist = vec![i64::MAX; n * n];
    let mut deque: VecDeque<usize> = VecDeque::new();

    let start_cells: Vec<(i32, i32)> = match color {
        Color::Red => (0..n as i32).map(|col| (0, col)).collect(),
        Color::Black => (0..n as i32).map(|row| (row, 0)).collect(),
        Color::Empty => unreachable!("shortest_path_distance for Color::Empty"),
    };

    for (row, col) in start_cells {
        if let Some(cost) = cell_cost(board.cell(row, col), color) {
            let idx = row as usize * n + col as usize;
            if cost < dist[idx] {
                dist[idx] = cost;
                if cost == 0 {
                    deque.push_front(idx);
                } else {
                    deque.push_back(idx);
                }
            }
        }
    }

    while let Some(u) = deque.pop_front() {
        let row = (u / n) as i32;
        let col = (u % n) as i32;
        for (nr, nc) in board.neighbors(row, col) {
            let cost = match cell_cost(board.cell(nr, nc), color) {
                Some(c) => c,
                None => continue,
            };
            let v = nr as usize * n + nc as usize;
            let nd = dist[u].saturating_add(cost);
            if nd < dist[v] {
                dist[v] = nd;
                if cost == 0 {
                    deque.push_front(v);
                } else {
                    deque.push_back(v);
                }
            }
        }
    }

    let goal_cells: Vec<(i32, i32)> = match color {
        Color::Red => (0..n as i32).map(|col| (n as i32 - 1, col)).collect(),
        Color::Black => (0..n as i32).map(|row| (row, n as i32 - 1)).collect(),
        Color::Empty => unreachable!(),
    };

    goal_cells
        .into_iter()
        .map(|(row, col)| dist[row as usize * n + col as usize])
        .min()
        .filter(|&d| d < i64::MAX)
        .unwrap_or_else(|| unreachable_sentinel(n))
}
