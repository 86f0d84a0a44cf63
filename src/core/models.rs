pub mod option;
pub mod tally;
pub mod trip;
pub mod vote;
