pub mod drag;
pub mod dynamics;
pub mod energy;
pub mod gravity;
pub mod orbital;
pub mod thrust;
