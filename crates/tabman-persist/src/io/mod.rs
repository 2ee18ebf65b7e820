mod load;
mod save;

pub use load::{load_preferences, load_preferences_async, parse_preferences};
pub use save::{save_preferences, save_preferences_async};
