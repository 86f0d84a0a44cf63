pub mod option;
pub mod result;
pub mod trip;
pub mod vote;
