use crate::{
    Board, Boneyard, MatchStatus, Pip, Player, Players, Side, Tile, TurnEngine, PLAYER_CAPACITY,
    TILES_LEN,
};

impl TurnEngine {
    /// Generates an empty [TurnEngine] with no players.
    ///
    /// # Returns
    ///
    /// A [TurnEngine] struct with the properties set to the following:
    /// * `players`: An empty players vector.
    /// * `board`: An empty board.
    /// * `boneyard`: An empty boneyard.
    /// * `current_player`: `0`.
    /// * `passes`: `0`.
    /// * `status`: [MatchStatus::InProgress].
    /// * `blocked_winner`: [None].
    pub fn empty_turn_engine() -> TurnEngine {
        TurnEngine {
            players: Players::with_capacity(PLAYER_CAPACITY),
            board: Board::new(),
            boneyard: Boneyard::with_capacity(TILES_LEN),
            current_player: 0,
            passes: 0,
            status: MatchStatus::InProgress,
            blocked_winner: None,
        }
    }

    /// Generates a [TurnEngine] with one player per hand, named by index.
    ///
    /// # Arguments
    ///
    /// * `board_tiles`: [Tiles](Tile) placed one after another on the right end, the first
    /// opening the board.
    /// * `hands`: The [tiles](Tile) of each player in turn order.
    pub fn scenario(board_tiles: &[(Pip, Pip)], hands: &[&[(Pip, Pip)]]) -> TurnEngine {
        let mut turn_engine = TurnEngine::empty_turn_engine();
        for &(first, second) in board_tiles {
            turn_engine
                .board
                .place(Tile::new(first, second), Side::Right)
                .expect("board tiles should form a chain");
        }
        for (index, &hand) in hands.iter().enumerate() {
            let mut player = Player::new(format!("{index}"));
            player
                .mut_hand()
                .extend(hand.iter().map(|&(first, second)| Tile::new(first, second)));
            turn_engine.players.push(player);
        }

        turn_engine
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut Players {
        &mut self.players
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.boneyard`.
    pub fn mut_boneyard(&mut self) -> &mut Boneyard {
        &mut self.boneyard
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }

    /// A mutable reference to `self.passes`.
    pub fn mut_passes(&mut self) -> &mut usize {
        &mut self.passes
    }

    /// A mutable reference to `self.status`.
    pub fn mut_status(&mut self) -> &mut MatchStatus {
        &mut self.status
    }
}
