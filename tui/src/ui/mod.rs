mod draw;
mod layout;
mod plot;
mod theme;
mod widgets;

pub use draw::draw;
