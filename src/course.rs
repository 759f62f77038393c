use std::fmt;

use anyhow::Result;
use colored::Colorize;

use crate::prompt;
use crate::semester::{self, Semester};
use crate::store::CourseStore;

/// A single catalog record. The code is treated as the lookup identifier but
/// uniqueness is not enforced; duplicate codes resolve to the first match in
/// stored order. The kind is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    name: String,
    code: String,
    credit_hours: u8,
    instructor: String,
    semester: Semester,
    kind: CourseKind,
}

impl Course {
    pub fn new(
        name: String,
        code: String,
        credit_hours: u8,
        instructor: String,
        semester: Semester,
        kind: CourseKind,
    ) -> Course {
        Course {
            name,
            code,
            credit_hours,
            instructor,
            semester,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn credit_hours(&self) -> u8 {
        self.credit_hours
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn semester(&self) -> Semester {
        self.semester
    }

    pub fn kind(&self) -> CourseKind {
        self.kind
    }

    /// Applies the present patch fields; absent fields stay untouched.
    /// Code and kind are not patchable.
    pub(crate) fn apply(&mut self, patch: CoursePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(credit_hours) = patch.credit_hours {
            self.credit_hours = credit_hours;
        }
        if let Some(semester) = patch.semester {
            self.semester = semester;
        }
    }

    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            name: self.name.clone(),
            code: self.code.clone(),
            instructor: self.instructor.clone(),
        }
    }
}

/// Core courses carry lecture hours, electives carry lab hours. The payload
/// travels with the tag and cannot be read without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseKind {
    Core { lecture_hours: u8 },
    Elective { lab_hours: u8 },
}

impl fmt::Display for CourseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_str = match self {
            CourseKind::Core { .. } => "Core",
            CourseKind::Elective { .. } => "Elective",
        };
        write!(f, "{}", kind_str)
    }
}

/// Field subset an update may change. The semester is replaced as a whole
/// pair or not at all.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub credit_hours: Option<u8>,
    pub semester: Option<Semester>,
}

/// Narrow read-only projection returned by the code search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    name: String,
    code: String,
    instructor: String,
}

impl CourseSummary {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }
}

pub fn add(store: &mut CourseStore) -> Result<()> {
    let name = prompt::text("Enter Course Name")?;
    let code = prompt::text("Enter Course Code")?;
    let Some(credit_hours) = prompt::number("Enter Credit Hours")? else {
        return cancelled();
    };
    let instructor = prompt::text("Enter Instructor Name")?;
    let Some(term) = semester::select_term()? else {
        return cancelled();
    };
    let Some(year) = semester::select_year()? else {
        return cancelled();
    };

    let Some(is_core) = prompt::yes_no("Is this a Core Course?")? else {
        return cancelled();
    };
    let kind = if is_core {
        let Some(lecture_hours) = prompt::number("Enter Lecture Hours")? else {
            return cancelled();
        };
        CourseKind::Core { lecture_hours }
    } else {
        let Some(lab_hours) = prompt::number("Enter Lab Hours")? else {
            return cancelled();
        };
        CourseKind::Elective { lab_hours }
    };

    let course = Course::new(
        name,
        code,
        credit_hours,
        instructor,
        Semester::new(term, year),
        kind,
    );
    match store.add_course(course) {
        Ok(()) => println!("{}", "Course added successfully!".green()),
        Err(err) => println!("{}", err.to_string().red()),
    }
    Ok(())
}

pub fn display(store: &CourseStore) -> Result<()> {
    if store.is_empty() {
        println!("No courses to display");
        return Ok(());
    }

    for (i, course) in store.courses().enumerate() {
        println!();
        println!("Course {}:", i + 1);
        println!("Name: {}", course.name());
        println!("Code: {}", course.code());
        println!("Credits: {}", course.credit_hours());
        println!("Instructor: {}", course.instructor());
        println!("Semester: {}", course.semester());
        println!("Type: {}", course.kind());
        match course.kind() {
            CourseKind::Core { lecture_hours } => println!("Lecture Hours: {}", lecture_hours),
            CourseKind::Elective { lab_hours } => println!("Lab Hours: {}", lab_hours),
        }
        println!("-----------------------------");
    }
    Ok(())
}

pub fn update(store: &mut CourseStore) -> Result<()> {
    let code = prompt::text("Enter course code to update")?;

    // The prompts echo the current values, read from the public view.
    let current = store
        .courses()
        .find(|course| course.code() == code)
        .map(|course| (course.name().to_owned(), course.credit_hours()));
    let Some((current_name, current_credits)) = current else {
        println!("{}", format!("No course with code '{}'", code).red());
        return Ok(());
    };

    let name = prompt::text(&format!("New Course Name ({})", current_name))?;
    let Some(credit_hours) = prompt::number(&format!("New Credit Hours ({})", current_credits))?
    else {
        return cancelled();
    };

    let semester = match prompt::yes_no("Update semester?")? {
        None => return cancelled(),
        Some(false) => None,
        Some(true) => {
            let Some(term) = semester::select_term()? else {
                return cancelled();
            };
            let Some(year) = semester::select_year()? else {
                return cancelled();
            };
            Some(Semester::new(term, year))
        }
    };

    let patch = CoursePatch {
        name: Some(name),
        credit_hours: Some(credit_hours),
        semester,
    };
    match store.update_course(&code, patch) {
        Ok(()) => println!("{}", "Course updated successfully!".green()),
        Err(err) => println!("{}", err.to_string().red()),
    }
    Ok(())
}

pub fn remove(store: &mut CourseStore) -> Result<()> {
    let code = prompt::text("Enter course code to remove")?;

    match prompt::yes_no(&format!("Do you really want to delete course '{}'?", code))? {
        Some(true) => {}
        Some(false) | None => {
            println!("Aborted removal of course: {}", code);
            return Ok(());
        }
    }

    match store.remove_course(&code) {
        Ok(()) => println!("{}", format!("Removed course: {}", code).green()),
        Err(err) => println!("{}", err.to_string().red()),
    }
    Ok(())
}

pub fn search(store: &CourseStore) -> Result<()> {
    let code = prompt::text("Enter course code to search")?;

    match store.search_by_code(&code) {
        Some(summary) => {
            println!("Course found:");
            println!("Name: {}", summary.name());
            println!("Code: {}", summary.code());
            println!("Instructor: {}", summary.instructor());
        }
        None => println!("{}", format!("No course with code '{}'", code).red()),
    }
    Ok(())
}

fn cancelled() -> Result<()> {
    println!("Cancelled");
    Ok(())
}
