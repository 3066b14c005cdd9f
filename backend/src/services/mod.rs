pub mod certificates;
pub mod proxy;
