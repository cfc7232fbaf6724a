use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Nothing revealed yet
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Reads the state off a board: a loss is a triggered mine, a win is
    /// every safe cell revealed.
    pub fn from_board(board: &Board) -> Self {
        if board.triggered_mine().is_some() {
            Self::Lost
        } else if board.all_safe_revealed() {
            Self::Won
        } else if board.hidden_count() < board.total_cells() {
            Self::Active
        } else {
            Self::Ready
        }
    }
}

/// One game session: the board plus the config and seed it was generated from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    seed: u64,
    board: Board,
    state: GameState,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let board = RandomMinefieldGenerator::new(seed).generate(config)?;
        log::debug!("New game {:?}, seed {}", config, seed);
        Ok(Self::from_board(board, seed))
    }

    /// Starts a session on a prepared board, the config is taken from it and
    /// the state follows from what is already revealed.
    pub fn from_board(board: Board, seed: u64) -> Self {
        let config = GameConfig::new_unchecked(board.size(), board.mine_count());
        let state = GameState::from_board(&board);
        Self {
            config,
            seed,
            board,
            state,
        }
    }

    /// Discards the board and generates a fresh one with the same config.
    pub fn restart(&mut self, seed: u64) -> Result<()> {
        *self = Self::new(self.config, seed)?;
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Mines minus flags placed on hidden cells, negative when over-flagged.
    pub fn mines_left(&self) -> i64 {
        let flags = self
            .board
            .cells()
            .filter(|cell| cell.is_flagged() && !cell.is_revealed())
            .count();
        i64::from(self.total_mines()) - flags as i64
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if self.state.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }

        let outcome = self.board.reveal(coords)?;
        match outcome {
            RevealOutcome::NoChange => {}
            RevealOutcome::Revealed => self.mark_started(),
            RevealOutcome::HitMine => self.end_game(false),
            RevealOutcome::Won => self.end_game(true),
        }
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if self.state.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }
        self.board.toggle_flag(coords)
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = GameState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!("Game ended: {:?}", self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::from_board(Board::from_mine_coords(size, mines).unwrap(), 0)
    }

    #[test]
    fn new_game_rejects_invalid_config() {
        let config = GameConfig::new_unchecked((3, 3), 9);
        assert_eq!(Game::new(config, 1), Err(GameError::TooManyMines));

        let config = GameConfig::new_unchecked((0, 3), 0);
        assert_eq!(Game::new(config, 1), Err(GameError::InvalidSize));
    }

    #[test]
    fn new_game_starts_ready_and_hidden() {
        let game = Game::new(GameConfig::beginner(), 99).unwrap();

        assert_eq!(game.state(), GameState::Ready);
        assert_eq!(game.config(), GameConfig::beginner());
        assert_eq!(game.seed(), 99);
        assert_eq!(game.board().hidden_count(), 81);
        assert_eq!(game.mines_left(), 10);
    }

    #[test]
    fn reveal_moves_through_states() {
        let mut game = game((2, 2), &[(0, 0)]);

        assert_eq!(game.reveal((1, 0)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(game.state(), GameState::Active);
        game.reveal((0, 1)).unwrap();
        assert_eq!(game.reveal((1, 1)).unwrap(), RevealOutcome::Won);
        assert_eq!(game.state(), GameState::Won);
        assert!(game.is_finished());
    }

    #[test]
    fn hitting_mine_loses() {
        let mut game = game((3, 3), &[(1, 1)]);

        assert_eq!(game.reveal((1, 1)).unwrap(), RevealOutcome::HitMine);
        assert_eq!(game.state(), GameState::Lost);
        assert!(game.board().cells().all(|cell| cell.is_revealed()));
    }

    #[test]
    fn finished_game_ignores_moves() {
        let mut game = game((3, 3), &[(1, 1)]);
        game.reveal((1, 1)).unwrap();
        let before = game.clone();

        assert_eq!(game.reveal((0, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(game.toggle_flag((0, 0)).unwrap(), MarkOutcome::NoChange);
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_range_is_an_error_even_when_finished() {
        let mut game = game((3, 1), &[]);

        assert_eq!(game.reveal((3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(game.reveal((0, 0)), Ok(RevealOutcome::Won));
        assert_eq!(game.toggle_flag((0, 1)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn flags_affect_mines_left_without_state_change() {
        let mut game = game((3, 3), &[(1, 1)]);

        assert_eq!(game.toggle_flag((1, 1)).unwrap(), MarkOutcome::Changed);
        assert_eq!(game.toggle_flag((0, 0)).unwrap(), MarkOutcome::Changed);
        assert_eq!(game.mines_left(), -1);
        assert_eq!(game.state(), GameState::Ready);
    }

    #[test]
    fn from_board_reads_state_off_revealed_cells() {
        let fresh = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
        assert_eq!(Game::from_board(fresh.clone(), 0).state(), GameState::Ready);

        let mut started = fresh.clone();
        started.reveal((0, 0)).unwrap();
        assert_eq!(Game::from_board(started, 0).state(), GameState::Active);

        let mut lost = fresh.clone();
        lost.reveal((1, 1)).unwrap();
        let mut game = Game::from_board(lost, 0);
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.reveal((0, 0)).unwrap(), RevealOutcome::NoChange);

        let mut won = Board::from_mine_coords((2, 1), &[(1, 0)]).unwrap();
        won.reveal((0, 0)).unwrap();
        let mut game = Game::from_board(won, 0);
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.toggle_flag((0, 0)).unwrap(), MarkOutcome::NoChange);
    }

    #[test]
    fn restart_keeps_config_and_resets_state() {
        let mut game = Game::new(GameConfig::new((5, 5), 3).unwrap(), 1).unwrap();
        game.reveal((0, 0)).unwrap();
        game.toggle_flag((4, 4)).unwrap();

        game.restart(2).unwrap();

        assert_eq!(game.state(), GameState::Ready);
        assert_eq!(game.config(), GameConfig::new((5, 5), 3).unwrap());
        assert_eq!(game.seed(), 2);
        assert_eq!(game.board().hidden_count(), 25);
        assert!(game.board().cells().all(|cell| !cell.is_flagged()));
    }
}
