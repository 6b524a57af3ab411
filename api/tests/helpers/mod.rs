pub mod app;

pub use app::{make_test_app, seed_swim_club};
