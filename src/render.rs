pub mod composite;
pub mod pipeline;
pub mod screen;
pub mod title;
