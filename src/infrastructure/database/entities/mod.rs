//! SeaORM entities

pub mod assignment;
pub mod cage;
pub mod employee;
pub mod pet;
