pub mod hours;
pub mod pairing;
