pub mod roster_store;
pub mod seed;
