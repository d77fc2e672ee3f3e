use crate::board::Board;
use crate::rules;
use crate::types::{GameError, GameState, Outcome, Player, Position};

/// Move selection for the automated player.
pub trait MoveSelector {
    /// Picks a move for `player`, or `None` when no placement captures
    /// anything. Caller contract: the turn loop has already established that
    /// `player` has a legal move before asking.
    fn select_move(&self, board: &Board, player: Player) -> Option<Position>;
}

/// Turn-based game driven by an external loop: one human color, one
/// automated color, alternating turns with pass-when-stuck handling.
pub struct Game {
    board: Board,
    current_player: Player,
    computer: Player,
    forfeited_by: Option<Player>,
    last_flipped: Vec<Position>,
    selector: Box<dyn MoveSelector>,
}

impl Game {
    pub fn new(
        size: usize,
        computer: Player,
        selector: Box<dyn MoveSelector>,
    ) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(size)?,
            current_player: Player::Black,
            computer,
            forfeited_by: None,
            last_flipped: Vec::new(),
            selector,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Recomputed from board contents on every call; a forfeit overrides the
    /// disc count.
    pub fn outcome(&self) -> Outcome {
        if let Some(loser) = self.forfeited_by {
            return match loser.opponent() {
                Player::Black => Outcome::BlackWin,
                Player::White => Outcome::WhiteWin,
            };
        }
        rules::outcome(&self.board)
    }

    pub fn current_player_has_move(&self) -> bool {
        rules::has_any_legal_move(&self.board, self.current_player)
    }

    /// Skips the current player's turn. Called by the loop when
    /// [`Game::current_player_has_move`] is false.
    pub fn pass(&mut self) {
        tracing::debug!(player = %self.current_player, "no valid move, passing");
        self.last_flipped.clear();
        self.current_player = self.current_player.opponent();
    }

    /// Plays the current player's move at `position`. An illegal coordinate
    /// is reported as an error; the forfeit rule is the loop's call, via
    /// [`Game::forfeit`].
    pub fn place(&mut self, position: Position) -> Result<(), GameError> {
        if self.outcome() != Outcome::Ongoing {
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        if !self.board.in_bounds(position.row as i32, position.col as i32)
            || !rules::is_legal(&self.board, player, position)
        {
            return Err(GameError::IllegalMove { player, position });
        }

        self.last_flipped = rules::apply_move(&mut self.board, player, position);
        self.current_player = player.opponent();
        Ok(())
    }

    /// Asks the selector for the automated player's move and plays it.
    /// Returns the chosen position.
    pub fn play_computer_move(&mut self) -> Result<Position, GameError> {
        if self.outcome() != Outcome::Ongoing {
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        let position = self
            .selector
            .select_move(&self.board, player)
            .ok_or(GameError::NoLegalMove { player })?;

        self.place(position)?;
        tracing::debug!(%player, %position, "computer moved");
        Ok(position)
    }

    /// Ends the game immediately in the opponent's favor. Game rule: an
    /// invalid move entered by the human player forfeits the game.
    pub fn forfeit(&mut self, loser: Player) {
        self.forfeited_by = Some(loser);
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            size: self.board.size(),
            board: self.board.glyph_rows(),
            current_player: self.current_player,
            black_count,
            white_count,
            outcome: self.outcome(),
            flipped: self.last_flipped.clone(),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.current_player = current_player;
        self.forfeited_by = None;
        self.last_flipped.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::GreedySelector;

    fn new_game(size: usize, computer: Player) -> Game {
        Game::new(size, computer, Box::new(GreedySelector)).unwrap()
    }

    #[test]
    fn initial_state_is_correct() {
        let game = new_game(8, Player::White);
        let state = game.to_game_state();

        assert_eq!(state.current_player, Player::Black);
        assert_eq!(state.black_count, 2);
        assert_eq!(state.white_count, 2);
        assert_eq!(state.outcome, Outcome::Ongoing);
        assert!(state.flipped.is_empty());
        assert!(game.current_player_has_move());
    }

    #[test]
    fn t02_illegal_player_move_returns_error() {
        let mut game = new_game(8, Player::White);
        let err = game.place(Position::new(0, 0)).unwrap_err();

        assert_eq!(
            err,
            GameError::IllegalMove {
                player: Player::Black,
                position: Position::new(0, 0)
            }
        );
    }

    #[test]
    fn out_of_bounds_move_is_rejected_not_fatal() {
        let mut game = new_game(4, Player::White);

        assert!(game.place(Position::new(4, 0)).is_err());
        assert!(game.place(Position::new(0, 9)).is_err());
    }

    #[test]
    fn t03_pass_switches_turn_without_touching_the_board() {
        let mut game = new_game(4, Player::White);
        game.set_board_for_test(
            Board::from_glyph_rows(&[
                "UBBW", //
                "UUUU", //
                "UUUU", //
                "UUUU",
            ]),
            Player::Black,
        );

        assert!(!game.current_player_has_move());
        let before = game.board().clone();
        game.pass();

        assert_eq!(game.current_player(), Player::White);
        assert_eq!(*game.board(), before);
        assert!(game.current_player_has_move());
        assert_eq!(game.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn place_flips_and_alternates_turn() {
        let mut game = new_game(8, Player::White);

        game.place(Position::new(2, 3)).unwrap();
        let state = game.to_game_state();

        assert_eq!(state.current_player, Player::White);
        assert_eq!(state.flipped, vec![Position::new(3, 3)]);
        assert_eq!((state.black_count, state.white_count), (4, 1));
    }

    #[test]
    fn computer_move_picks_a_legal_capture() {
        let mut game = new_game(8, Player::Black);

        let position = game.play_computer_move().unwrap();
        let state = game.to_game_state();

        assert_eq!(position, Position::new(2, 3));
        assert_eq!(state.current_player, Player::White);
        assert!(!state.flipped.is_empty());
    }

    #[test]
    fn forfeit_hands_the_win_to_the_opponent() {
        let mut game = new_game(8, Player::White);

        game.forfeit(Player::Black);

        assert_eq!(game.outcome(), Outcome::WhiteWin);
        assert_eq!(game.place(Position::new(2, 3)).unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn finished_game_reports_winner_by_count() {
        let mut game = new_game(4, Player::White);
        game.set_board_for_test(
            Board::from_glyph_rows(&[
                "BBBB", //
                "BBBB", //
                "BBWW", //
                "WWWW",
            ]),
            Player::Black,
        );

        assert_eq!(game.outcome(), Outcome::BlackWin);
        assert!(game.play_computer_move().is_err());
    }
}
