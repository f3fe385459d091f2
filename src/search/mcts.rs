//! Monte-Carlo tree search with UCB1 selection and random playouts.
//!
//! Nodes live in a flat arena owned by the search; children are referenced by
//! index and each node keeps a non-owning parent index for backpropagation.
//! The tree is dropped as a whole when the search returns.

use std::time::Instant;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MctsConfig {
    /// Wall-clock budget; the playout in flight when it expires still finishes.
    pub timeout_ms: u64,
    pub max_iterations: Option<u64>,
    /// Playouts reaching this many plies are scored as a draw.
    pub max_playout_plies: u16,
    pub exploration: f64,
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            max_iterations: None,
            max_playout_plies: 200,
            exploration: std::f64::consts::SQRT_2,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MctsResult {
    pub best_move: Option<Move>,
    pub iterations: u64,
    pub root_visits: u64,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone)]
struct MctsNode {
    position: Position,
    incoming: Option<Move>,
    /// Side that played `incoming`; `None` only for the root.
    mover: Option<Color>,
    parent: Option<usize>,
    children: Vec<usize>,
    visits: u64,
    win_sum: f64,
}

impl MctsNode {
    fn new(position: Position, incoming: Option<Move>, mover: Option<Color>, parent: Option<usize>) -> Self {
        Self {
            position,
            incoming,
            mover,
            parent,
            children: Vec::new(),
            visits: 0,
            win_sum: 0.0,
        }
    }

    #[inline]
    fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.win_sum / self.visits as f64
        }
    }
}

pub struct MonteCarloTreeSearch {
    config: MctsConfig,
    rng: StdRng,
    nodes: Vec<MctsNode>,
    root_side: Color,
}

const ROOT: usize = 0;

impl MonteCarloTreeSearch {
    pub fn new(config: MctsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            config,
            rng,
            nodes: Vec::new(),
            root_side: Color::White,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Run select / expand / simulate / backpropagate until the time or
    /// iteration budget is spent, then report the root child with the best
    /// win rate (more visits break ties).
    pub fn search(&mut self, position: &Position) -> MctsResult {
        let started = Instant::now();
        self.root_side = position.side_to_move;
        self.nodes.clear();
        let mut root = MctsNode::new(position.snapshot(), None, None, None);
        root.visits = 1;
        self.nodes.push(root);

        if generate_legal_moves(position).is_empty() {
            warn!("mcts called on a position with no legal moves");
            return MctsResult {
                root_visits: self.nodes[ROOT].visits,
                elapsed_ms: elapsed_ms(started),
                ..MctsResult::default()
            };
        }

        let mut iterations = 0u64;
        while !self.budget_spent(started, iterations) {
            let leaf = self.select();
            let node = self.expand(leaf);
            let result = self.simulate(node);
            self.backpropagate(node, result);
            iterations += 1;

            if iterations % 1000 == 0 {
                debug!(
                    "mcts: {iterations} iterations, {} nodes, {} ms",
                    self.nodes.len(),
                    elapsed_ms(started)
                );
            }
        }

        let best_move = self.best_child().and_then(|idx| self.nodes[idx].incoming);
        let result = MctsResult {
            best_move,
            iterations,
            root_visits: self.nodes[ROOT].visits,
            elapsed_ms: elapsed_ms(started),
        };
        info!(
            "mcts chose {} after {} iterations in {} ms",
            best_move.map_or_else(|| "none".to_owned(), |mv| mv.to_string()),
            result.iterations,
            result.elapsed_ms
        );
        result
    }

    fn budget_spent(&self, started: Instant, iterations: u64) -> bool {
        if self
            .config
            .max_iterations
            .is_some_and(|cap| iterations >= cap)
        {
            return true;
        }
        elapsed_ms(started) >= self.config.timeout_ms
    }

    /// Descend by UCB1 to a node without children.
    fn select(&self) -> usize {
        let mut current = ROOT;
        while !self.nodes[current].children.is_empty() {
            let parent_visits = self.nodes[current].visits;
            let mut best = self.nodes[current].children[0];
            let mut best_ucb = f64::NEG_INFINITY;
            for &child in &self.nodes[current].children {
                let ucb = self.ucb1(child, parent_visits);
                if ucb > best_ucb {
                    best_ucb = ucb;
                    best = child;
                }
            }
            current = best;
        }
        current
    }

    fn ucb1(&self, idx: usize, parent_visits: u64) -> f64 {
        let node = &self.nodes[idx];
        if node.visits == 0 {
            return f64::INFINITY;
        }
        let visits = node.visits as f64;
        let parent = (parent_visits.max(1)) as f64;
        node.win_sum / visits + self.config.exploration * (parent.ln() / visits).sqrt()
    }

    /// Add one child per legal move and return a random one. Terminal leaves
    /// are returned unchanged.
    fn expand(&mut self, leaf: usize) -> usize {
        let position = &self.nodes[leaf].position;
        let mover = position.side_to_move;
        let moves = generate_legal_moves(position);
        if moves.is_empty() {
            return leaf;
        }

        let mut children = Vec::with_capacity(moves.len());
        for mv in moves {
            let mut child = self.nodes[leaf].position.snapshot();
            apply_move_unchecked(&mut child, &mv);
            children.push(self.nodes.len());
            self.nodes
                .push(MctsNode::new(child, Some(mv), Some(mover), Some(leaf)));
        }
        let picked = children.choose(&mut self.rng).copied().unwrap_or(leaf);
        self.nodes[leaf].children = children;
        picked
    }

    /// Random playout from `idx`, scored for the root side to move.
    fn simulate(&mut self, idx: usize) -> f64 {
        let mut position = self.nodes[idx].position.snapshot();
        for _ in 0..self.config.max_playout_plies {
            let status = position.status();
            if status.is_terminal() {
                return status.score_for(self.root_side);
            }
            let moves = generate_legal_moves(&position);
            let Some(mv) = moves.choose(&mut self.rng) else {
                break;
            };
            apply_move_unchecked(&mut position, mv);
        }
        position.status().score_for(self.root_side)
    }

    /// Credit `result` to every node from `idx` up to the root. Nodes whose
    /// move was made by the opponent of the root side receive `1 - result`.
    fn backpropagate(&mut self, idx: usize, result: f64) {
        let mut current = Some(idx);
        while let Some(node_idx) = current {
            let root_side = self.root_side;
            let node = &mut self.nodes[node_idx];
            node.visits += 1;
            node.win_sum += if node.mover == Some(root_side) {
                result
            } else {
                1.0 - result
            };
            current = node.parent;
        }
    }

    fn best_child(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for &child in &self.nodes[ROOT].children {
            let node = &self.nodes[child];
            if node.visits == 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some(current) => {
                    let current = &self.nodes[current];
                    node.win_rate() > current.win_rate()
                        || (node.win_rate() == current.win_rate() && node.visits > current.visits)
                }
            };
            if better {
                best = Some(child);
            }
        }
        best
    }

    /// `(move, visits, win rate)` for every root child of the last search.
    pub fn root_statistics(&self) -> Vec<(Move, u64, f64)> {
        let Some(root) = self.nodes.first() else {
            return Vec::new();
        };
        root.children
            .iter()
            .filter_map(|&idx| {
                let node = &self.nodes[idx];
                node.incoming.map(|mv| (mv, node.visits, node.win_rate()))
            })
            .collect()
    }
}

/// One-shot search with a fresh tree.
pub fn mcts_search(position: &Position, config: MctsConfig) -> MctsResult {
    MonteCarloTreeSearch::new(config).search(position)
}

#[inline]
fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capped(seed: u64, iterations: u64) -> MctsConfig {
        MctsConfig {
            timeout_ms: 60_000,
            max_iterations: Some(iterations),
            max_playout_plies: 60,
            seed: Some(seed),
            ..MctsConfig::default()
        }
    }

    fn back_rank_mate_setup() -> Position {
        let mut game = Position::empty();
        game.put_piece(0, 6, Color::Black, PieceKind::King).expect("g8");
        for col in 5..8 {
            game.put_piece(1, col, Color::Black, PieceKind::Pawn).expect("pawn");
        }
        game.put_piece(7, 0, Color::White, PieceKind::Rook).expect("a1");
        game.put_piece(7, 6, Color::White, PieceKind::King).expect("g1");
        game
    }

    #[test]
    fn root_starts_with_one_visit_and_counts_every_iteration() {
        let result = mcts_search(&Position::new_game(), capped(11, 40));
        assert_eq!(result.iterations, 40);
        assert_eq!(result.root_visits, 41);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn seeded_search_is_deterministic() {
        let game = Position::new_game();
        let first = mcts_search(&game, capped(5, 30));
        let second = mcts_search(&game, capped(5, 30));
        assert_eq!(first.best_move, second.best_move);
    }

    #[test]
    fn prefers_immediate_mate() {
        let game = back_rank_mate_setup();
        let mut search = MonteCarloTreeSearch::new(capped(3, 300));
        let result = search.search(&game);
        let mv = result.best_move.expect("a move should be found");
        assert_eq!(mv.to_string(), "a1a8");

        let stats = search.root_statistics();
        let (_, _, rate) = stats
            .iter()
            .find(|(m, _, _)| *m == mv)
            .copied()
            .expect("mate move is a root child");
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn single_legal_move_is_returned() {
        let mut game = Position::empty();
        game.put_piece(7, 0, Color::White, PieceKind::King).expect("a1");
        game.put_piece(5, 4, Color::White, PieceKind::Pawn).expect("e3");
        game.put_piece(0, 1, Color::Black, PieceKind::Rook).expect("b8");
        game.put_piece(6, 7, Color::Black, PieceKind::Rook).expect("h2");
        game.put_piece(0, 7, Color::Black, PieceKind::King).expect("h8");

        let result = mcts_search(&game, capped(9, 10));
        assert_eq!(result.best_move.map(|mv| mv.to_string()), Some("e3e4".to_owned()));
    }

    #[test]
    fn no_legal_moves_reports_none() {
        let mut game = Position::empty();
        game.put_piece(0, 0, Color::Black, PieceKind::King).expect("a8");
        game.put_piece(1, 2, Color::White, PieceKind::Queen).expect("c7");
        game.put_piece(7, 4, Color::White, PieceKind::King).expect("e1");
        game.set_side_to_move(Color::Black);

        let result = mcts_search(&game, capped(1, 10));
        assert_eq!(result.best_move, None);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.root_visits, 1);
    }
}
