//! The external data collaborator contract.
//!
//! The production deployment fronts a remote document store; the bundled
//! [`MemoryProvider`](crate::memory::MemoryProvider) implements the same
//! trait for development and tests. Calendar code never filters here:
//! `fetch_all_bookings` returns every booking regardless of status and the
//! visibility rules run downstream.

use async_trait::async_trait;

use labtrack_core::types::RegistrationStatus;
use labtrack_sched::model::{Booking, BookingStatus, TimetableSlot, ViewContext};

use crate::error::DataResult;
use crate::model::{Broadcast, Lab, SharedResource, UserAccount};

#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Every booking on record, all statuses included.
    async fn fetch_all_bookings(&self) -> DataResult<Vec<Booking>>;

    /// All recurring slots for an exact (course, semester) pair.
    async fn fetch_timetable(
        &self,
        course: &str,
        semester: &str,
    ) -> DataResult<Vec<TimetableSlot>>;

    /// The externally persisted "active subject" pointer, if one is set.
    async fn resolve_active_subject_context(&self) -> DataResult<Option<ViewContext>>;

    async fn insert_slot(&self, slot: TimetableSlot) -> DataResult<()>;
    async fn update_slot(&self, slot: TimetableSlot) -> DataResult<()>;
    async fn delete_slot(&self, id: &str) -> DataResult<()>;

    async fn fetch_booking(&self, id: &str) -> DataResult<Option<Booking>>;
    async fn insert_booking(&self, booking: Booking) -> DataResult<()>;
    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> DataResult<Booking>;

    async fn fetch_user(&self, id: &str) -> DataResult<Option<UserAccount>>;
    async fn fetch_users_by_status(
        &self,
        status: RegistrationStatus,
    ) -> DataResult<Vec<UserAccount>>;
    async fn update_registration_status(
        &self,
        id: &str,
        status: RegistrationStatus,
    ) -> DataResult<UserAccount>;

    async fn fetch_labs(&self) -> DataResult<Vec<Lab>>;
    async fn fetch_lab(&self, id: &str) -> DataResult<Option<Lab>>;

    async fn insert_resource(&self, resource: SharedResource) -> DataResult<()>;
    async fn fetch_resources(&self) -> DataResult<Vec<SharedResource>>;

    async fn insert_broadcast(&self, broadcast: Broadcast) -> DataResult<()>;
    async fn fetch_broadcasts(&self) -> DataResult<Vec<Broadcast>>;
}
