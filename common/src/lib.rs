pub mod games;

pub use games::SessionRng;
pub use games::tictactoe;
