pub mod driver;
pub mod dynamics;
pub mod params;
pub mod projection;
pub mod render;
pub mod state;
