//! Repository layer: one zero-sized struct per table with async query methods.

mod aircraft_repo;
mod airline_repo;
mod registration_repo;

pub use aircraft_repo::AircraftRepo;
pub use airline_repo::AirlineRepo;
pub use registration_repo::RegistrationRepo;
