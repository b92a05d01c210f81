pub mod binding;
pub mod parser;

pub use binding::{Binding, BindingMap, Modifiers};
pub use parser::{ScriptError, load, parse_reader, parse_str};
