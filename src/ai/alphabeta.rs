use tracing::debug;

use crate::error::GameError;
use crate::game::{game_status, Board, GameState, GameStatus, Player};

use super::agent::Agent;
use super::eval::{evaluate, WIN_SCORE};

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub column: usize,
    pub score: i32,
    pub nodes: u64,
}

/// Column in which `player` completes a line right away, lowest first.
pub fn winning_move(board: &Board, player: Player) -> Option<usize> {
    board.legal_columns().into_iter().find(|&col| {
        let mut child = board.clone();
        child.apply_drop(col, player).is_ok()
            && game_status(&child) == GameStatus::Won(player)
    })
}

/// Choose a column for `maximizer` with depth-limited minimax and
/// alpha-beta pruning.
pub fn choose_move_alpha_beta(
    board: &Board,
    depth: usize,
    maximizer: Player,
) -> Result<usize, GameError> {
    search(board, depth, maximizer).map(|outcome| outcome.column)
}

/// Full root search, reporting the chosen column, its score and the number
/// of nodes visited.
///
/// Columns are tried in ascending order and only a strictly better score
/// replaces the current choice, so ties go to the lowest column. An
/// immediately winning column is returned without searching.
pub fn search(board: &Board, depth: usize, maximizer: Player) -> Result<SearchOutcome, GameError> {
    let columns = board.legal_columns();
    if columns.is_empty() {
        return Err(GameError::NoLegalMoves);
    }

    if let Some(column) = winning_move(board, maximizer) {
        debug!(column, player = maximizer.name(), "taking immediate win");
        return Ok(SearchOutcome {
            column,
            score: WIN_SCORE,
            nodes: columns.len() as u64,
        });
    }

    let mut searcher = Searcher { maximizer, nodes: 0 };
    let mut alpha = i32::MIN;
    let beta = i32::MAX;
    let mut best: Option<(usize, i32)> = None;

    for col in columns {
        let mut child = board.clone();
        child.apply_drop(col, maximizer)?;
        let score = searcher.minimax(&child, depth.saturating_sub(1), alpha, beta, maximizer.other());
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((col, score));
        }
        alpha = alpha.max(score);
    }

    let (column, score) = best.ok_or(GameError::NoLegalMoves)?;
    debug!(
        column,
        score,
        depth,
        nodes = searcher.nodes,
        player = maximizer.name(),
        "alpha-beta search finished"
    );
    Ok(SearchOutcome {
        column,
        score,
        nodes: searcher.nodes,
    })
}

/// Remaining depth as a score adjustment, capped so that a win score plus
/// the bonus still fits in an `i32`.
fn depth_bonus(depth: usize) -> i32 {
    i32::try_from(depth)
        .unwrap_or(i32::MAX)
        .min(i32::MAX - WIN_SCORE)
}

struct Searcher {
    maximizer: Player,
    nodes: u64,
}

impl Searcher {
    /// Every child is explored on its own clone; `board` is never mutated.
    fn minimax(&mut self, board: &Board, depth: usize, mut alpha: i32, mut beta: i32, to_move: Player) -> i32 {
        self.nodes += 1;

        match game_status(board) {
            // Remaining depth is added to wins and subtracted from losses so
            // quicker wins and slower losses are preferred.
            GameStatus::Won(_) => {
                let score = evaluate(board, self.maximizer, to_move);
                return if score > 0 {
                    score + depth_bonus(depth)
                } else {
                    score - depth_bonus(depth)
                };
            }
            GameStatus::Draw => return 0,
            GameStatus::InProgress => {}
        }

        if depth == 0 {
            return evaluate(board, self.maximizer, to_move);
        }

        let maximizing = to_move == self.maximizer;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in board.legal_columns() {
            let mut child = board.clone();
            if child.apply_drop(col, to_move).is_err() {
                continue;
            }
            let score = self.minimax(&child, depth - 1, alpha, beta, to_move.other());

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

/// Minimax agent with alpha-beta pruning and a fixed depth limit.
pub struct AlphaBetaAgent {
    depth: usize,
}

impl AlphaBetaAgent {
    pub fn new(depth: usize) -> Self {
        AlphaBetaAgent { depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Agent for AlphaBetaAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, GameError> {
        if state.is_terminal() {
            return Err(GameError::GameOver);
        }
        choose_move_alpha_beta(state.board(), self.depth, state.current_player())
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}
