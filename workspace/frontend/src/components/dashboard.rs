mod cards;
mod styles;
mod table;
mod view;

pub use view::Dashboard;
