//! Appointment entity and its transport shapes.
//!
//! Appointments link a user to a salon at a point in time. They come from a
//! different store than the profile entities, so their identifier is textual
//! rather than numeric, and the records cross a service boundary: the DTOs
//! here are the shapes the surrounding layers hand in and out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{AppointmentId, SalonId, UserId};

/// A booked appointment between a user and a salon.
///
/// The referenced user and salon are foreign records; only their identifiers
/// are held here. A fresh appointment carries none of them until the booking
/// layer fills them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Store-assigned identifier, absent until the record is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<AppointmentId>,
    pub user_id: Option<UserId>,
    pub salon_id: Option<SalonId>,
    pub appointment_date: Option<DateTime<Utc>>,
}

impl Appointment {
    /// Create a fresh, unpersisted appointment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start rebuilding a stored appointment under its assigned identifier.
    pub fn from_persistence(id: AppointmentId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Identifier assigned by the document store, if any.
    pub fn id(&self) -> Option<&AppointmentId> {
        self.id.as_ref()
    }
}

/// Booking request shape accepted by the layers above.
///
/// The optional identifier selects an existing record to replace; it is never
/// carried into a new [`Appointment`], whose identifier only the store
/// assigns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertAppointment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AppointmentId>,
    pub user_id: Option<UserId>,
    pub salon_id: Option<SalonId>,
    pub appointment_date: Option<DateTime<Utc>>,
}

impl From<UpsertAppointment> for Appointment {
    fn from(upsert: UpsertAppointment) -> Self {
        Self {
            id: None,
            user_id: upsert.user_id,
            salon_id: upsert.salon_id,
            appointment_date: upsert.appointment_date,
        }
    }
}

/// Outbound shape of a stored appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: Option<AppointmentId>,
    pub user_id: Option<UserId>,
    pub salon_id: Option<SalonId>,
    pub appointment_date: Option<DateTime<Utc>>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            user_id: appointment.user_id,
            salon_id: appointment.salon_id,
            appointment_date: appointment.appointment_date,
        }
    }
}

impl AppointmentResponse {
    /// Convert a batch of stored appointments, preserving order.
    pub fn from_entities(appointments: Vec<Appointment>) -> Vec<Self> {
        appointments.into_iter().map(Self::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn booking_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 5, 12, 18, 30, 25).unwrap()
    }

    #[test]
    fn test_upsert_with_all_values_becomes_an_appointment() {
        let upsert = UpsertAppointment {
            id: None,
            user_id: Some(UserId::new(1)),
            salon_id: Some(SalonId::new(1)),
            appointment_date: Some(booking_date()),
        };

        let appointment = Appointment::from(upsert);

        assert_eq!(appointment.user_id, Some(UserId::new(1)));
        assert_eq!(appointment.salon_id, Some(SalonId::new(1)));
        assert_eq!(appointment.appointment_date, Some(booking_date()));
        assert_eq!(appointment.id(), None);
    }

    #[test]
    fn test_upsert_without_user_keeps_the_slot_empty() {
        let upsert = UpsertAppointment {
            salon_id: Some(SalonId::new(1)),
            appointment_date: Some(booking_date()),
            ..UpsertAppointment::default()
        };

        let appointment = Appointment::from(upsert);

        assert_eq!(appointment.user_id, None);
        assert_eq!(appointment.salon_id, Some(SalonId::new(1)));
    }

    #[test]
    fn test_upsert_without_salon_keeps_the_slot_empty() {
        let upsert = UpsertAppointment {
            user_id: Some(UserId::new(1)),
            appointment_date: Some(booking_date()),
            ..UpsertAppointment::default()
        };

        let appointment = Appointment::from(upsert);

        assert_eq!(appointment.salon_id, None);
        assert_eq!(appointment.user_id, Some(UserId::new(1)));
    }

    #[test]
    fn test_upsert_identifier_is_not_carried_into_the_entity() {
        let upsert = UpsertAppointment {
            id: Some(AppointmentId::new("62b65300e1d7eab1ea9a681d")),
            user_id: Some(UserId::new(1)),
            salon_id: Some(SalonId::new(1)),
            appointment_date: Some(booking_date()),
        };

        let appointment = Appointment::from(upsert);

        // The store assigns identifiers, never the caller.
        assert_eq!(appointment.id(), None);
    }

    #[test]
    fn test_from_persistence_carries_identifier() {
        let id = AppointmentId::new("62b65300e1d7eab1ea9a681d");
        let appointment = Appointment::from_persistence(id.clone());

        assert_eq!(appointment.id(), Some(&id));
        assert_eq!(appointment.user_id, None);
    }

    #[test]
    fn test_response_exposes_every_stored_field() {
        let mut appointment =
            Appointment::from_persistence(AppointmentId::new("62b65300e1d7eab1ea9a681d"));
        appointment.user_id = Some(UserId::new(1));
        appointment.salon_id = Some(SalonId::new(1));
        appointment.appointment_date = Some(booking_date());

        let response = AppointmentResponse::from(appointment);

        assert_eq!(
            response.id,
            Some(AppointmentId::new("62b65300e1d7eab1ea9a681d"))
        );
        assert_eq!(response.user_id, Some(UserId::new(1)));
        assert_eq!(response.salon_id, Some(SalonId::new(1)));
        assert_eq!(response.appointment_date, Some(booking_date()));
    }

    #[test]
    fn test_batch_conversion_preserves_order() {
        let first = Appointment::from_persistence(AppointmentId::new("a1"));
        let mut second = Appointment::new();
        second.user_id = Some(UserId::new(2));

        let responses = AppointmentResponse::from_entities(vec![first, second]);

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].id, Some(AppointmentId::new("a1")));
        assert_eq!(responses[1].id, None);
        assert_eq!(responses[1].user_id, Some(UserId::new(2)));
    }

    #[test]
    fn test_batch_conversion_of_nothing_is_empty() {
        assert!(AppointmentResponse::from_entities(Vec::new()).is_empty());
    }
}
