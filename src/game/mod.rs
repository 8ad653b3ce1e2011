pub mod bot;
pub mod collision;
pub mod engine;
pub mod error;
pub mod food;
pub mod movement;
pub mod physics;
pub mod player;
pub mod population;
pub mod split;
pub mod world;
