pub mod game;
pub mod rawg;
