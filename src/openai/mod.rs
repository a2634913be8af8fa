mod core;

pub use self::core::{Message, Model, Role, TEMPERATURE, completion};
