//! Business logic services

pub mod availability;
pub mod billing;
pub mod boarding;
pub mod cage;

pub use availability::{AvailabilityQuery, DateRange};
pub use billing::BillingService;
pub use boarding::{BoardingService, CheckInRequest};
pub use cage::{CageService, CageUpdate, NewCage};
