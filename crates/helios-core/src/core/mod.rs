pub mod graph;
pub mod scene;
pub mod time;
