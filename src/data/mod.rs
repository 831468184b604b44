pub mod load_data;
pub mod save_data;

pub use load_data::load_model;
pub use save_data::save_model;
