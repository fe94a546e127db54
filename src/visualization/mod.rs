pub mod snapshot;
pub mod vis2d;
