pub mod automaton;
pub mod camera;
pub mod cell;
pub mod config;
pub mod events;
pub mod grid;
pub mod io;
pub mod rules;

pub type ScreenSize = u16;
pub type CellOffset = i64;
