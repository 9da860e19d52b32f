pub mod views;
pub mod vm;

pub use views::render_screen;
pub use vm::{QuizIntent, ScreenVm, map_screen, parse_intent};
