use std::fmt::{self, Display, Formatter};

use crate::coordinate::Coordinate;
use crate::game_state::GameState;
use crate::pathing::UNREACHABLE;
use crate::player::Player;

/// Renders the board with walls read straight off the graph: a missing
/// downward edge draws as `■■■`, a missing rightward edge as `█`.
impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let graph = self.graph();

        writeln!(f)?;

        write!(f, "   ")?;
        for _ in 0..size {
            write!(f, "+---")?;
        }
        writeln!(f, "+")?;

        for row in 0..size {
            write!(f, "{row:>2} |")?;
            for col in 0..size {
                let coordinate = Coordinate::new(row, col);

                let pawn = if self.player(Player::One).location() == coordinate {
                    '1'
                } else if self.player(Player::Two).location() == coordinate {
                    '2'
                } else {
                    ' '
                };

                let open = col + 1 == size
                    || graph.has_edge(coordinate.into(), coordinate.right().into());
                let divider = if open { '|' } else { '█' };

                write!(f, " {pawn} {divider}")?;
            }
            writeln!(f)?;

            write!(f, "   ")?;
            for col in 0..size {
                let coordinate = Coordinate::new(row, col);
                let open = row + 1 == size
                    || graph.has_edge(coordinate.into(), coordinate.below().into());

                write!(f, "+{}", if open { "---" } else { "■■■" })?;
            }
            writeln!(f, "+")?;
        }

        write!(f, "    ")?;
        for col in 0..size {
            write!(f, "{col:>2}  ")?;
        }
        writeln!(f)?;

        for player in [Player::One, Player::Two] {
            let location = self.player(player).location();
            let distance = self.goal_distance(player);

            if distance == UNREACHABLE {
                writeln!(f, "{player}: {location} (goal unreachable)")?;
            } else {
                writeln!(f, "{player}: {location} (distance {distance})")?;
            }
        }

        Ok(())
    }
}
