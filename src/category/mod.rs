pub mod handlers;
pub mod list;
pub mod model;
pub mod renderer;


pub use list::CategoryListView;
pub use model::{Category, DisplayMode};
pub use renderer::CategoryRenderer;
