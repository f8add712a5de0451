mod app;
mod outcome;

pub use app::App;
pub use outcome::Outcome;
