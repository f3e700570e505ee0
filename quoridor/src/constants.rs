/// Classic Quoridor board edge length, used by `GameState::initial`.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Smallest playable board. Below 2x2 there is no goal row distinct from
/// the starting row and no room for a single wall.
pub const MIN_BOARD_SIZE: usize = 2;
