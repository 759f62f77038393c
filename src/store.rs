use thiserror::Error;

use crate::course::{Course, CoursePatch, CourseSummary};
use crate::semester::{Term, Year};

/// Upper bound on the number of records the store will hold.
pub const MAX_COURSES: usize = 100;

/// Failures a store operation reports back to the caller. All of them are
/// ordinary business outcomes; the store is left unchanged in every case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("maximum number of courses ({}) reached", MAX_COURSES)]
    CapacityExceeded,
    #[error("no course with code '{code}'")]
    NotFound { code: String },
}

/// In-memory catalog of course records. Records keep their insertion order
/// across updates and removals; code lookups are exact, case-sensitive and
/// resolve to the first match in stored order.
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: Vec<Course>,
}

impl CourseStore {
    pub fn new() -> CourseStore {
        CourseStore {
            courses: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Appends the course at the end. No dedup by code takes place.
    pub fn add_course(&mut self, course: Course) -> Result<(), StoreError> {
        if self.courses.len() >= MAX_COURSES {
            return Err(StoreError::CapacityExceeded);
        }
        self.courses.push(course);
        Ok(())
    }

    /// All records in insertion order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses.iter()
    }

    pub fn update_course(&mut self, code: &str, patch: CoursePatch) -> Result<(), StoreError> {
        match self.courses.iter_mut().find(|course| course.code() == code) {
            Some(course) => {
                course.apply(patch);
                Ok(())
            }
            None => Err(StoreError::NotFound {
                code: code.to_owned(),
            }),
        }
    }

    /// Removes the first record with the given code, closing the gap so the
    /// survivors keep their relative order.
    pub fn remove_course(&mut self, code: &str) -> Result<(), StoreError> {
        match self.courses.iter().position(|course| course.code() == code) {
            Some(index) => {
                self.courses.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound {
                code: code.to_owned(),
            }),
        }
    }

    pub fn search_by_code(&self, code: &str) -> Option<CourseSummary> {
        self.courses
            .iter()
            .find(|course| course.code() == code)
            .map(Course::summary)
    }

    /// (code, name) of every record whose term and year both match, in
    /// insertion order.
    pub fn list_by_semester(
        &self,
        term: Term,
        year: Year,
    ) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.courses
            .iter()
            .filter(move |course| {
                course.semester().term() == term && course.semester().year() == year
            })
            .map(|course| (course.code(), course.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::CourseKind;
    use crate::semester::Semester;

    fn course(name: &str, code: &str, term: Term, year: Year, kind: CourseKind) -> Course {
        Course::new(
            name.to_owned(),
            code.to_owned(),
            3,
            "N. Wirth".to_owned(),
            Semester::new(term, year),
            kind,
        )
    }

    fn core(name: &str, code: &str) -> Course {
        course(
            name,
            code,
            Term::Fall,
            Year::Y2025,
            CourseKind::Core { lecture_hours: 3 },
        )
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = CourseStore::new();
        assert!(store.is_empty());
        assert_eq!(store.courses().count(), 0);
        assert_eq!(store.list_by_semester(Term::Fall, Year::Y2025).count(), 0);
    }

    #[test]
    fn add_rejects_beyond_capacity() {
        let mut store = CourseStore::new();
        for i in 0..MAX_COURSES {
            store
                .add_course(core("Filler", &format!("CS{:03}", i)))
                .unwrap();
        }
        assert_eq!(store.courses().count(), MAX_COURSES);

        let err = store.add_course(core("Overflow", "CS998")).unwrap_err();
        assert_eq!(err, StoreError::CapacityExceeded);
        assert_eq!(store.courses().count(), MAX_COURSES);
    }

    #[test]
    fn remove_preserves_order_of_survivors() {
        let mut store = CourseStore::new();
        store.add_course(core("A", "CS101")).unwrap();
        store.add_course(core("B", "CS102")).unwrap();
        store.add_course(core("C", "CS103")).unwrap();

        store.remove_course("CS102").unwrap();

        let codes: Vec<&str> = store.courses().map(Course::code).collect();
        assert_eq!(codes, vec!["CS101", "CS103"]);
        assert!(store.search_by_code("CS102").is_none());
    }

    #[test]
    fn removing_a_missing_code_twice_fails_twice_and_changes_nothing() {
        let mut store = CourseStore::new();
        store.add_course(core("A", "CS101")).unwrap();

        for _ in 0..2 {
            let err = store.remove_course("CS404").unwrap_err();
            assert_eq!(
                err,
                StoreError::NotFound {
                    code: "CS404".to_owned()
                }
            );
            assert_eq!(store.courses().count(), 1);
        }
    }

    #[test]
    fn patch_with_only_credit_hours_touches_nothing_else() {
        let mut store = CourseStore::new();
        store
            .add_course(course(
                "Algorithms",
                "CS301",
                Term::Spring,
                Year::Y2026,
                CourseKind::Elective { lab_hours: 2 },
            ))
            .unwrap();

        let patch = CoursePatch {
            credit_hours: Some(4),
            ..CoursePatch::default()
        };
        store.update_course("CS301", patch).unwrap();

        let updated = store.courses().next().unwrap();
        assert_eq!(updated.name(), "Algorithms");
        assert_eq!(updated.credit_hours(), 4);
        assert_eq!(updated.semester(), Semester::new(Term::Spring, Year::Y2026));
        assert_eq!(updated.kind(), CourseKind::Elective { lab_hours: 2 });
    }

    #[test]
    fn semester_update_replaces_the_whole_pair() {
        let mut store = CourseStore::new();
        store.add_course(core("A", "CS101")).unwrap();

        let patch = CoursePatch {
            semester: Some(Semester::new(Term::Summer, Year::Y2027)),
            ..CoursePatch::default()
        };
        store.update_course("CS101", patch).unwrap();

        let updated = store.courses().next().unwrap();
        assert_eq!(updated.semester(), Semester::new(Term::Summer, Year::Y2027));
        assert_eq!(updated.name(), "A");
    }

    #[test]
    fn list_by_semester_requires_term_and_year_to_match() {
        let mut store = CourseStore::new();
        store
            .add_course(course(
                "A",
                "CS101",
                Term::Fall,
                Year::Y2025,
                CourseKind::Core { lecture_hours: 3 },
            ))
            .unwrap();
        store
            .add_course(course(
                "B",
                "CS201",
                Term::Spring,
                Year::Y2026,
                CourseKind::Elective { lab_hours: 2 },
            ))
            .unwrap();
        store
            .add_course(course(
                "C",
                "CS301",
                Term::Fall,
                Year::Y2026,
                CourseKind::Core { lecture_hours: 2 },
            ))
            .unwrap();

        let listed: Vec<(&str, &str)> = store.list_by_semester(Term::Fall, Year::Y2025).collect();
        assert_eq!(listed, vec![("CS101", "A")]);
    }

    #[test]
    fn remove_then_search_scenario() {
        let mut store = CourseStore::new();
        store
            .add_course(course(
                "Data Structures",
                "CS101",
                Term::Fall,
                Year::Y2025,
                CourseKind::Core { lecture_hours: 3 },
            ))
            .unwrap();
        store
            .add_course(course(
                "Robotics Lab",
                "CS201",
                Term::Fall,
                Year::Y2025,
                CourseKind::Elective { lab_hours: 2 },
            ))
            .unwrap();

        store.remove_course("CS101").unwrap();

        let remaining: Vec<&str> = store.courses().map(Course::code).collect();
        assert_eq!(remaining, vec!["CS201"]);
        assert!(store.search_by_code("CS101").is_none());

        let summary = store.search_by_code("CS201").unwrap();
        assert_eq!(summary.name(), "Robotics Lab");
        assert_eq!(summary.code(), "CS201");
        assert_eq!(summary.instructor(), "N. Wirth");
    }

    #[test]
    fn duplicate_codes_resolve_to_the_first_inserted() {
        let mut store = CourseStore::new();
        store.add_course(core("First", "CS999")).unwrap();
        store.add_course(core("Second", "CS999")).unwrap();

        let patch = CoursePatch {
            name: Some("X".to_owned()),
            ..CoursePatch::default()
        };
        store.update_course("CS999", patch).unwrap();

        let names: Vec<&str> = store.courses().map(Course::name).collect();
        assert_eq!(names, vec!["X", "Second"]);
    }

    #[test]
    fn code_lookup_is_exact_and_case_sensitive() {
        let mut store = CourseStore::new();
        store.add_course(core("A", "CS101")).unwrap();

        assert!(store.search_by_code("cs101").is_none());
        assert!(store.search_by_code("CS10").is_none());

        let err = store
            .update_course("cs101", CoursePatch::default())
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                code: "cs101".to_owned()
            }
        );
    }
}
