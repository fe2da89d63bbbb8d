//! Fixed course and semester catalogs.
//!
//! Both lists are ordered for display. The master (all-courses) calendar
//! iterates only the leading semesters; S7 and S8 are never queried there.

/// Course catalog, in display order.
pub const COURSES: [&str; 4] = ["BCA", "MCA", "BSC-CS", "MSC-CS"];

/// Semester catalog, in display order.
pub const SEMESTERS: [&str; 8] = ["S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8"];

/// How many leading semesters the master calendar view spans.
pub const MASTER_VIEW_SEMESTER_SPAN: usize = 6;

/// ## Summary
/// Returns the semesters the master calendar view iterates (S1 through S6).
#[must_use]
pub fn master_view_semesters() -> &'static [&'static str] {
    &SEMESTERS[..MASTER_VIEW_SEMESTER_SPAN]
}

/// ## Summary
/// Returns true if `course` is one of the catalog courses, ignoring case.
#[must_use]
pub fn is_known_course(course: &str) -> bool {
    COURSES.iter().any(|c| c.eq_ignore_ascii_case(course))
}

/// ## Summary
/// Returns true if `semester` is one of the catalog semesters, ignoring case.
#[must_use]
pub fn is_known_semester(semester: &str) -> bool {
    SEMESTERS.iter().any(|s| s.eq_ignore_ascii_case(semester))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_view_stops_at_s6() {
        let semesters = master_view_semesters();
        assert_eq!(semesters.len(), 6);
        assert!(!semesters.contains(&"S7"));
        assert!(!semesters.contains(&"S8"));
    }

    #[test]
    fn catalog_lookups_ignore_case() {
        assert!(is_known_course("bca"));
        assert!(is_known_semester("s3"));
        assert!(!is_known_course("PHD"));
    }
}
