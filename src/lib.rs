pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod events;
pub mod geometry;
pub mod registry;
pub mod transition;
pub mod widget;
pub mod tasks {
    pub mod runner;
}
