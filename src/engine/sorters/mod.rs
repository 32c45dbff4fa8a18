pub mod heap;
pub mod insertion;
pub mod quick;
pub mod selection;
