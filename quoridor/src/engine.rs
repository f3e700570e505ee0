use engine::engine::GameEngine;

use crate::action::Action;
use crate::error::Error;
use crate::evaluate::Evaluation;
use crate::game_state::GameState;
use crate::player::Player;

pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;
    type Evaluation = Evaluation;
    type Error = Error;

    fn evaluate(&self, game_state: &GameState, player: usize) -> Evaluation {
        game_state.evaluate(Player::from_index(player))
    }

    fn take_action(
        &self,
        game_state: &GameState,
        player: usize,
        action: &Action,
    ) -> Result<GameState, Error> {
        let mut game_state = game_state.clone();
        game_state.take_action(Player::from_index(player), action)?;

        Ok(game_state)
    }
}
