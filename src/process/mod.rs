pub mod shade;
pub mod trace;
pub mod render;
pub mod pipeline;
