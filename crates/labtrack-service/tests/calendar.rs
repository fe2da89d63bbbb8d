//! Calendar build behavior against the in-memory provider.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use labtrack_core::types::RegistrationStatus;
use labtrack_data::error::DataResult;
use labtrack_data::memory::MemoryProvider;
use labtrack_data::model::{Broadcast, Lab, SharedResource, UserAccount};
use labtrack_data::provider::DataProvider;
use labtrack_sched::model::{
    Booking, BookingStatus, DayOfWeek, EventKind, ScheduleFilter, TimetableSlot, ViewContext,
    Viewer,
};
use labtrack_service::calendar::build_calendar;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn booking(id: &str, user_id: &str, course: &str, semester: &str) -> Booking {
    Booking {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: "R. Nair".to_string(),
        subject: format!("Session {id}"),
        course: course.to_string(),
        semester: semester.to_string(),
        lab_id: "lab-1".to_string(),
        start: at(10, 14),
        end: at(10, 16),
        status: BookingStatus::Approved,
    }
}

fn slot(id: &str, course: &str, semester: &str, subject: &str) -> TimetableSlot {
    TimetableSlot {
        id: id.to_string(),
        course: course.to_string(),
        semester: semester.to_string(),
        day_of_week: DayOfWeek::Monday,
        start_time: "09:00".to_string(),
        end_time: "10:30".to_string(),
        subject_id: format!("sub-{id}"),
        subject_name: subject.to_string(),
        faculty_id: "fac-1".to_string(),
        faculty_name: "A. Menon".to_string(),
        lab_id: "lab-1".to_string(),
        lab_name: Some("Lab 1".to_string()),
        batch: "ALL".to_string(),
    }
}

fn reference() -> NaiveDate {
    // February 2026: four Mondays (2, 9, 16, 23).
    NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
}

fn student() -> Viewer {
    Viewer::Student {
        id: "stu-1".to_string(),
        course: "BCA".to_string(),
        semester: "S1".to_string(),
    }
}

fn admin() -> Viewer {
    Viewer::Admin {
        id: "adm-1".to_string(),
        filter: None,
    }
}

#[test_log::test(tokio::test)]
async fn rebuild_is_idempotent_for_an_unchanged_snapshot() {
    let provider = MemoryProvider::new();
    provider
        .insert_slot(slot("sl-1", "BCA", "S1", "Data Structures"))
        .await
        .unwrap();
    provider
        .insert_booking(booking("bk-1", "fac-9", "BCA", "S1"))
        .await
        .unwrap();

    let viewer = student();
    let first = build_calendar(&provider, &viewer, reference()).await.unwrap();
    let second = build_calendar(&provider, &viewer, reference()).await.unwrap();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test_log::test(tokio::test)]
async fn four_mondays_expand_to_four_class_events() {
    let provider = MemoryProvider::new();
    provider
        .insert_slot(slot("sl-1", "BCA", "S1", "Data Structures"))
        .await
        .unwrap();

    let events = build_calendar(&provider, &student(), reference())
        .await
        .unwrap();
    let classes: Vec<_> = events
        .iter()
        .filter(|e| e.kind == EventKind::Class)
        .collect();
    assert_eq!(classes.len(), 4);
    let ids: Vec<&str> = classes.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["sl-1-02", "sl-1-09", "sl-1-16", "sl-1-23"]);
}

#[test_log::test(tokio::test)]
async fn student_only_sees_their_class_bookings() {
    let provider = MemoryProvider::new();
    provider
        .insert_booking(booking("bk-own-class", "fac-9", "BCA", "S1"))
        .await
        .unwrap();
    provider
        .insert_booking(booking("bk-other", "fac-9", "MCA", "S1"))
        .await
        .unwrap();

    let events = build_calendar(&provider, &student(), reference())
        .await
        .unwrap();
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["bk-own-class"]);
}

#[test_log::test(tokio::test)]
async fn unfiltered_admin_sees_every_booking() {
    let provider = MemoryProvider::new();
    provider
        .insert_booking(booking("bk-far", "fac-9", "MCA", "S3"))
        .await
        .unwrap();

    let events = build_calendar(&provider, &admin(), reference())
        .await
        .unwrap();
    assert!(events.iter().any(|e| e.id == "bk-far"));
}

#[test_log::test(tokio::test)]
async fn faculty_subject_context_narrows_class_layer() {
    let provider = MemoryProvider::new();
    provider
        .insert_slot(slot("sl-ds", "BCA", "S1", "Data Structures"))
        .await
        .unwrap();
    provider
        .insert_slot(slot("sl-net", "BCA", "S1", "Computer Networks"))
        .await
        .unwrap();
    provider
        .set_active_subject(Some(ViewContext {
            name: "data structures".to_string(),
            course: "BCA".to_string(),
            semester: "S1".to_string(),
        }))
        .await;

    let viewer = Viewer::Faculty {
        id: "fac-1".to_string(),
    };
    let events = build_calendar(&provider, &viewer, reference())
        .await
        .unwrap();
    let classes: Vec<_> = events
        .iter()
        .filter(|e| e.kind == EventKind::Class)
        .collect();
    assert_eq!(classes.len(), 4);
    assert!(classes.iter().all(|e| e.summary == "Data Structures"));
}

#[test_log::test(tokio::test)]
async fn rejected_and_cancelled_bookings_never_surface() {
    let provider = MemoryProvider::new();
    let mut rejected = booking("bk-rej", "stu-1", "BCA", "S1");
    rejected.status = BookingStatus::Rejected;
    let mut cancelled = booking("bk-can", "stu-1", "BCA", "S1");
    cancelled.status = BookingStatus::Cancelled;
    provider.insert_booking(rejected).await.unwrap();
    provider.insert_booking(cancelled).await.unwrap();

    for viewer in [student(), admin()] {
        let events = build_calendar(&provider, &viewer, reference())
            .await
            .unwrap();
        assert!(
            events.is_empty(),
            "viewer {viewer:?} saw a dead booking: {events:?}"
        );
    }
}

#[test_log::test(tokio::test)]
async fn merged_events_are_sorted_by_start() {
    let provider = MemoryProvider::new();
    for (id, hour) in [("bk-a", 14), ("bk-b", 9), ("bk-c", 11)] {
        let mut b = booking(id, "stu-1", "BCA", "S1");
        b.start = at(10, hour);
        b.end = at(10, hour + 1);
        provider.insert_booking(b).await.unwrap();
    }

    let events = build_calendar(&provider, &student(), reference())
        .await
        .unwrap();
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["bk-b", "bk-c", "bk-a"]);
}

#[test_log::test(tokio::test)]
async fn admin_filter_pins_master_schedule_context() {
    let provider = MemoryProvider::new();
    provider
        .insert_slot(slot("sl-bca", "BCA", "S1", "Data Structures"))
        .await
        .unwrap();
    provider
        .insert_slot(slot("sl-mca", "MCA", "S3", "Compilers"))
        .await
        .unwrap();

    let viewer = Viewer::Admin {
        id: "adm-1".to_string(),
        filter: Some(ScheduleFilter {
            course: "MCA".to_string(),
            semester: "S3".to_string(),
        }),
    };
    let events = build_calendar(&provider, &viewer, reference())
        .await
        .unwrap();
    let classes: Vec<_> = events
        .iter()
        .filter(|e| e.kind == EventKind::Class)
        .collect();
    assert!(classes.iter().all(|e| e.summary == "Compilers"));
    assert_eq!(classes.len(), 4);
}

/// Wrapper that records which (course, semester) pairs the engine queries.
struct RecordingProvider {
    inner: MemoryProvider,
    queried: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl DataProvider for RecordingProvider {
    async fn fetch_all_bookings(&self) -> DataResult<Vec<Booking>> {
        self.inner.fetch_all_bookings().await
    }

    async fn fetch_timetable(
        &self,
        course: &str,
        semester: &str,
    ) -> DataResult<Vec<TimetableSlot>> {
        self.queried
            .lock()
            .unwrap()
            .push((course.to_string(), semester.to_string()));
        self.inner.fetch_timetable(course, semester).await
    }

    async fn resolve_active_subject_context(&self) -> DataResult<Option<ViewContext>> {
        self.inner.resolve_active_subject_context().await
    }

    async fn insert_slot(&self, slot: TimetableSlot) -> DataResult<()> {
        self.inner.insert_slot(slot).await
    }

    async fn update_slot(&self, slot: TimetableSlot) -> DataResult<()> {
        self.inner.update_slot(slot).await
    }

    async fn delete_slot(&self, id: &str) -> DataResult<()> {
        self.inner.delete_slot(id).await
    }

    async fn fetch_booking(&self, id: &str) -> DataResult<Option<Booking>> {
        self.inner.fetch_booking(id).await
    }

    async fn insert_booking(&self, booking: Booking) -> DataResult<()> {
        self.inner.insert_booking(booking).await
    }

    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> DataResult<Booking> {
        self.inner.update_booking_status(id, status).await
    }

    async fn fetch_user(&self, id: &str) -> DataResult<Option<UserAccount>> {
        self.inner.fetch_user(id).await
    }

    async fn fetch_users_by_status(
        &self,
        status: RegistrationStatus,
    ) -> DataResult<Vec<UserAccount>> {
        self.inner.fetch_users_by_status(status).await
    }

    async fn update_registration_status(
        &self,
        id: &str,
        status: RegistrationStatus,
    ) -> DataResult<UserAccount> {
        self.inner.update_registration_status(id, status).await
    }

    async fn fetch_labs(&self) -> DataResult<Vec<Lab>> {
        self.inner.fetch_labs().await
    }

    async fn fetch_lab(&self, id: &str) -> DataResult<Option<Lab>> {
        self.inner.fetch_lab(id).await
    }

    async fn insert_resource(&self, resource: SharedResource) -> DataResult<()> {
        self.inner.insert_resource(resource).await
    }

    async fn fetch_resources(&self) -> DataResult<Vec<SharedResource>> {
        self.inner.fetch_resources().await
    }

    async fn insert_broadcast(&self, broadcast: Broadcast) -> DataResult<()> {
        self.inner.insert_broadcast(broadcast).await
    }

    async fn fetch_broadcasts(&self) -> DataResult<Vec<Broadcast>> {
        self.inner.fetch_broadcasts().await
    }
}

#[test_log::test(tokio::test)]
async fn master_view_never_queries_s7_or_s8() {
    let provider = RecordingProvider {
        inner: MemoryProvider::new(),
        queried: Mutex::new(Vec::new()),
    };

    build_calendar(&provider, &admin(), reference())
        .await
        .unwrap();

    let queried = provider.queried.lock().unwrap();
    assert!(!queried.is_empty());
    assert!(
        queried
            .iter()
            .all(|(_, semester)| semester != "S7" && semester != "S8"),
        "master view queried a late semester: {queried:?}"
    );
}

#[test_log::test(tokio::test)]
async fn guest_without_context_gets_bookings_only() {
    let provider = MemoryProvider::new();
    provider
        .insert_slot(slot("sl-1", "BCA", "S1", "Data Structures"))
        .await
        .unwrap();
    provider
        .insert_booking(booking("bk-1", "fac-9", "BCA", "S1"))
        .await
        .unwrap();

    let events = build_calendar(&provider, &Viewer::Guest, reference())
        .await
        .unwrap();
    // No resolved context: no class layer and no booking rule admits bk-1.
    assert!(events.is_empty());
}
