//! In-memory `DataProvider` used by the bundled server and the test suite.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use labtrack_core::types::RegistrationStatus;
use labtrack_sched::model::{Booking, BookingStatus, TimetableSlot, ViewContext};

use crate::error::{DataError, DataResult};
use crate::model::{Broadcast, Lab, SharedResource, UserAccount};
use crate::provider::DataProvider;
use crate::seed::Seed;

/// All tables behind one lock so every read sees a coherent snapshot.
#[derive(Debug, Default)]
struct Tables {
    users: HashMap<String, UserAccount>,
    labs: HashMap<String, Lab>,
    slots: HashMap<String, TimetableSlot>,
    bookings: HashMap<String, Booking>,
    resources: Vec<SharedResource>,
    broadcasts: Vec<Broadcast>,
    active_subject: Option<ViewContext>,
}

#[derive(Debug, Default)]
pub struct MemoryProvider {
    tables: RwLock<Tables>,
}

impl MemoryProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Builds a provider pre-populated from a JSON seed.
    #[must_use]
    pub fn from_seed(seed: Seed) -> Self {
        let tables = Tables {
            users: seed.users.into_iter().map(|u| (u.id.clone(), u)).collect(),
            labs: seed.labs.into_iter().map(|l| (l.id.clone(), l)).collect(),
            slots: seed.slots.into_iter().map(|s| (s.id.clone(), s)).collect(),
            bookings: seed
                .bookings
                .into_iter()
                .map(|b| (b.id.clone(), b))
                .collect(),
            resources: seed.resources,
            broadcasts: seed.broadcasts,
            active_subject: seed.active_subject,
        };
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Replaces the persisted "active subject" pointer.
    pub async fn set_active_subject(&self, context: Option<ViewContext>) {
        self.tables.write().await.active_subject = context;
    }
}

#[async_trait]
impl DataProvider for MemoryProvider {
    async fn fetch_all_bookings(&self) -> DataResult<Vec<Booking>> {
        Ok(self.tables.read().await.bookings.values().cloned().collect())
    }

    async fn fetch_timetable(
        &self,
        course: &str,
        semester: &str,
    ) -> DataResult<Vec<TimetableSlot>> {
        Ok(self
            .tables
            .read()
            .await
            .slots
            .values()
            .filter(|slot| slot.course == course && slot.semester == semester)
            .cloned()
            .collect())
    }

    async fn resolve_active_subject_context(&self) -> DataResult<Option<ViewContext>> {
        Ok(self.tables.read().await.active_subject.clone())
    }

    async fn insert_slot(&self, slot: TimetableSlot) -> DataResult<()> {
        let mut tables = self.tables.write().await;
        if tables.slots.contains_key(&slot.id) {
            return Err(DataError::Conflict(format!("slot {}", slot.id)));
        }
        tables.slots.insert(slot.id.clone(), slot);
        Ok(())
    }

    async fn update_slot(&self, slot: TimetableSlot) -> DataResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.slots.contains_key(&slot.id) {
            return Err(DataError::NotFound(format!("slot {}", slot.id)));
        }
        tables.slots.insert(slot.id.clone(), slot);
        Ok(())
    }

    async fn delete_slot(&self, id: &str) -> DataResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .slots
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DataError::NotFound(format!("slot {id}")))
    }

    async fn fetch_booking(&self, id: &str) -> DataResult<Option<Booking>> {
        Ok(self.tables.read().await.bookings.get(id).cloned())
    }

    async fn insert_booking(&self, booking: Booking) -> DataResult<()> {
        let mut tables = self.tables.write().await;
        if tables.bookings.contains_key(&booking.id) {
            return Err(DataError::Conflict(format!("booking {}", booking.id)));
        }
        tables.bookings.insert(booking.id.clone(), booking);
        Ok(())
    }

    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> DataResult<Booking> {
        let mut tables = self.tables.write().await;
        let booking = tables
            .bookings
            .get_mut(id)
            .ok_or_else(|| DataError::NotFound(format!("booking {id}")))?;
        booking.status = status;
        Ok(booking.clone())
    }

    async fn fetch_user(&self, id: &str) -> DataResult<Option<UserAccount>> {
        Ok(self.tables.read().await.users.get(id).cloned())
    }

    async fn fetch_users_by_status(
        &self,
        status: RegistrationStatus,
    ) -> DataResult<Vec<UserAccount>> {
        let mut users: Vec<UserAccount> = self
            .tables
            .read()
            .await
            .users
            .values()
            .filter(|user| user.registration == status)
            .cloned()
            .collect();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    async fn update_registration_status(
        &self,
        id: &str,
        status: RegistrationStatus,
    ) -> DataResult<UserAccount> {
        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .get_mut(id)
            .ok_or_else(|| DataError::NotFound(format!("user {id}")))?;
        user.registration = status;
        Ok(user.clone())
    }

    async fn fetch_labs(&self) -> DataResult<Vec<Lab>> {
        let mut labs: Vec<Lab> = self.tables.read().await.labs.values().cloned().collect();
        labs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(labs)
    }

    async fn fetch_lab(&self, id: &str) -> DataResult<Option<Lab>> {
        Ok(self.tables.read().await.labs.get(id).cloned())
    }

    async fn insert_resource(&self, resource: SharedResource) -> DataResult<()> {
        self.tables.write().await.resources.push(resource);
        Ok(())
    }

    async fn fetch_resources(&self) -> DataResult<Vec<SharedResource>> {
        let mut resources = self.tables.read().await.resources.clone();
        resources.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(resources)
    }

    async fn insert_broadcast(&self, broadcast: Broadcast) -> DataResult<()> {
        self.tables.write().await.broadcasts.push(broadcast);
        Ok(())
    }

    async fn fetch_broadcasts(&self) -> DataResult<Vec<Broadcast>> {
        let mut broadcasts = self.tables.read().await.broadcasts.clone();
        broadcasts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(broadcasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labtrack_sched::model::DayOfWeek;

    fn slot(id: &str, course: &str, semester: &str) -> TimetableSlot {
        TimetableSlot {
            id: id.to_string(),
            course: course.to_string(),
            semester: semester.to_string(),
            day_of_week: DayOfWeek::Monday,
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            subject_id: "sub-1".to_string(),
            subject_name: "Data Structures".to_string(),
            faculty_id: "fac-1".to_string(),
            faculty_name: "A. Menon".to_string(),
            lab_id: "lab-1".to_string(),
            lab_name: Some("Lab 1".to_string()),
            batch: "ALL".to_string(),
        }
    }

    #[test_log::test(tokio::test)]
    async fn timetable_fetch_matches_exact_pair() {
        let provider = MemoryProvider::new();
        provider.insert_slot(slot("s1", "BCA", "S1")).await.unwrap();
        provider.insert_slot(slot("s2", "BCA", "S2")).await.unwrap();
        provider.insert_slot(slot("s3", "MCA", "S1")).await.unwrap();

        let slots = provider.fetch_timetable("BCA", "S1").await.unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].id, "s1");
    }

    #[test_log::test(tokio::test)]
    async fn duplicate_slot_insert_conflicts() {
        let provider = MemoryProvider::new();
        provider.insert_slot(slot("s1", "BCA", "S1")).await.unwrap();
        assert!(matches!(
            provider.insert_slot(slot("s1", "BCA", "S1")).await,
            Err(DataError::Conflict(_))
        ));
    }

    #[test_log::test(tokio::test)]
    async fn booking_status_update_round_trips() {
        let provider = MemoryProvider::new();
        let start = chrono::NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let booking = Booking {
            id: "bk-1".to_string(),
            user_id: "fac-1".to_string(),
            user_name: "A. Menon".to_string(),
            subject: "Extra session".to_string(),
            course: "BCA".to_string(),
            semester: "S1".to_string(),
            lab_id: "lab-1".to_string(),
            start,
            end: start + chrono::TimeDelta::hours(1),
            status: BookingStatus::Pending,
        };
        provider.insert_booking(booking).await.unwrap();

        let updated = provider
            .update_booking_status("bk-1", BookingStatus::Approved)
            .await
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Approved);
        assert!(matches!(
            provider
                .update_booking_status("bk-404", BookingStatus::Approved)
                .await,
            Err(DataError::NotFound(_))
        ));
    }
}
