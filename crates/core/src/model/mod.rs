pub mod coords;
pub mod replay;
pub mod state;

pub use coords::Coord;
pub use replay::{EmptyReplay, Replay};
pub use state::{Cell, CellKind, HexMap, Player, Snapshot};
