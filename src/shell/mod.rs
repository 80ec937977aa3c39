// Interactive shell - the lesson pages rendered in a terminal.
// render: terminal text for content and results
// session: per-page state (draft, last result, exercise attempt)
// tutor: line input, command dispatch, navigation

mod render;
mod session;
mod tutor;

pub use render::{HELP, Renderer};
pub use session::PageSession;
pub use tutor::{Reply, Tutor};
