pub mod impls;
pub mod types;
