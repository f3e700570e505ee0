use engine::game_state;
use log::debug;

use crate::action::Action;
use crate::constants::DEFAULT_BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::pathing::Distance;
use crate::player::Player;
use crate::wall::Wall;

#[derive(Clone, Debug)]
pub struct PlayerState {
    player: Player,
    location: Coordinate,
}

impl PlayerState {
    fn new(player: Player, size: usize) -> Self {
        Self {
            player,
            location: player.start(size),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }
}

/// A board position: the movement graph with every permanent wall already
/// severed from it, both pawns, and each player's cached distance to goal.
/// The caches are refreshed on every mutation so reads never recompute.
#[derive(Clone, Debug)]
pub struct GameState {
    size: usize,
    graph: Graph,
    wall_catalog: Vec<Wall>,
    p1: PlayerState,
    p2: PlayerState,
    p1_dist: Distance,
    p2_dist: Distance,
}

impl GameState {
    pub fn new(size: usize) -> Result<Self> {
        let graph = Graph::build(size)?;

        let mut game_state = Self {
            size,
            graph,
            wall_catalog: Wall::catalog(size),
            p1: PlayerState::new(Player::One, size),
            p2: PlayerState::new(Player::Two, size),
            p1_dist: 0,
            p2_dist: 0,
        };

        game_state.refresh_distance(Player::One);
        game_state.refresh_distance(Player::Two);

        Ok(game_state)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Every wall placement that fits on this board, precomputed once.
    pub fn wall_catalog(&self) -> &[Wall] {
        &self.wall_catalog
    }

    pub fn player(&self, player: Player) -> &PlayerState {
        match player {
            Player::One => &self.p1,
            Player::Two => &self.p2,
        }
    }

    /// Cached distance from the player's pawn to their goal sentinel.
    pub fn goal_distance(&self, player: Player) -> Distance {
        match player {
            Player::One => self.p1_dist,
            Player::Two => self.p2_dist,
        }
    }

    pub fn take_action(&mut self, player: Player, action: &Action) -> Result<()> {
        match action {
            Action::MovePawn(coordinate) => self.relocate(player, *coordinate),
            Action::PlaceWall(wall) => self.place_wall(wall),
        }
    }

    /// Moves the player's pawn and refreshes their cached distance.
    pub fn relocate(&mut self, player: Player, coordinate: Coordinate) -> Result<()> {
        if !self.graph.contains(coordinate) {
            return Err(Error::OutOfBounds(coordinate, self.size));
        }

        match player {
            Player::One => self.p1.location = coordinate,
            Player::Two => self.p2.location = coordinate,
        }

        self.refresh_distance(player);

        Ok(())
    }

    /// Permanently places a wall and refreshes both cached distances. A
    /// rejected wall leaves the state untouched.
    pub fn place_wall(&mut self, wall: &Wall) -> Result<()> {
        self.graph.apply_wall(wall)?;

        self.refresh_distance(Player::One);
        self.refresh_distance(Player::Two);

        debug!(
            "placed wall {}: p1 distance {}, p2 distance {}",
            wall, self.p1_dist, self.p2_dist
        );

        Ok(())
    }

    fn refresh_distance(&mut self, player: Player) {
        let location = self.player(player).location();
        let distance = self.graph.view().goal_distance(location.into(), player);

        match player {
            Player::One => self.p1_dist = distance,
            Player::Two => self.p2_dist = distance,
        }
    }
}

impl game_state::GameState for GameState {
    fn initial() -> Self {
        GameState::new(DEFAULT_BOARD_SIZE).expect("the default board size is valid")
    }
}
