pub mod id;
pub mod weight;
