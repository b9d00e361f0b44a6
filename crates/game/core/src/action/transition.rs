use crate::engine::Effect;
use crate::env::GameEnv;
use crate::state::GameState;

/// Defines how a concrete action mutates the game state.
///
/// The engine always calls `pre_validate`, then `apply`, then
/// `post_validate`, and stops at the first error.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly and records the
    /// resulting effects. Implementations should assume that `pre_validate`
    /// has already run successfully.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        effects: &mut Vec<Effect>,
    ) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
