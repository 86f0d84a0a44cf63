pub mod form;
pub mod models;
pub mod passcode;
pub mod ports;
pub mod services;
pub mod session;
pub mod tally;
