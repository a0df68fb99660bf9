pub mod app;
pub mod data;
pub mod model;
pub mod results;
pub mod selector;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
