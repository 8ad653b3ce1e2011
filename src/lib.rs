//! Cell-consumption arena: a single-player-plus-bots simulation core and the
//! thin backend that serves its static client.

pub mod config;
pub mod game;
pub mod protocol;
pub mod server;

pub use config::GameConfig;
pub use game::engine::{game_loop, tick, SharedInput, TickReport};
pub use game::world::World;
pub use protocol::messages::{FrameInput, WorldSnapshot};
