mod render;
mod theme;
mod view;

pub use theme::Theme;
pub use view::View;
