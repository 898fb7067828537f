//! Domain layer - Core entities of the user registry.
//!
//! This crate contains pure domain data with no infrastructure dependencies:
//! the [`User`] aggregate with the [`Address`], [`Contact`] and [`Login`]
//! records it owns, and the [`Appointment`] bookings that reference it.
//! Persistence, transport and validation all live in the layers built on top
//! of it.

pub mod address;
pub mod appointment;
pub mod contact;
pub mod error;
pub mod id;
pub mod login;
pub mod user;

pub use address::Address;
pub use appointment::{Appointment, AppointmentResponse, UpsertAppointment};
pub use contact::Contact;
pub use error::{DomainError, DomainResult};
pub use id::{AddressId, AppointmentId, ContactId, LoginId, SalonId, UserId};
pub use login::Login;
pub use user::User;
