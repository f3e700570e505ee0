use super::evaluation::Evaluation;

/// The boundary a game-loop or benchmark collaborator drives the core
/// through. `evaluate` is pure; `take_action` commits a chosen move by
/// producing the successor state.
pub trait GameEngine {
    type Action;
    type State;
    type Evaluation: Evaluation;
    type Error;

    fn evaluate(&self, game_state: &Self::State, player: usize) -> Self::Evaluation;

    fn take_action(
        &self,
        game_state: &Self::State,
        player: usize,
        action: &Self::Action,
    ) -> Result<Self::State, Self::Error>;
}
