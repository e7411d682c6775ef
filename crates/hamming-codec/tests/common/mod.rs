mod selections;

pub use selections::{sel, toggled};
