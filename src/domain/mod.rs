pub mod board;
pub mod calendar;
pub mod message;
pub mod staff;
