pub mod load;
pub use load::{load_model, parse_model};

pub mod model;
pub use model::{Component, Model, VarOwner, Variable};
