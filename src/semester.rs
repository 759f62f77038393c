use std::fmt;

use anyhow::Result;

use crate::prompt;
use crate::store::CourseStore;

pub fn list_by_semester(store: &CourseStore) -> Result<()> {
    let Some(term) = select_term()? else {
        return Ok(());
    };
    let Some(year) = select_year()? else {
        return Ok(());
    };

    println!("Courses for {} {}:", term, year);
    let mut found = false;
    for (code, name) in store.list_by_semester(term, year) {
        found = true;
        println!("- {}: {}", code, name);
    }
    if !found {
        println!("No courses found for this semester.");
    }
    Ok(())
}

/// Prompts for a term by menu number. Returns `None` if the user cancels.
pub fn select_term() -> Result<Option<Term>> {
    println!("Select Term:");
    println!("1. Fall\n2. Spring\n3. Summer\n4. Winter");
    loop {
        let Some(choice) = prompt::number("Choice")? else {
            return Ok(None);
        };
        match Term::from_choice(choice) {
            Some(term) => return Ok(Some(term)),
            None => println!("Invalid choice, please enter a number between 1 and 4"),
        }
    }
}

/// Prompts for a year by menu number. Returns `None` if the user cancels.
pub fn select_year() -> Result<Option<Year>> {
    println!("Select Year:");
    println!("1. 2025\n2. 2026\n3. 2027\n4. 2028");
    loop {
        let Some(choice) = prompt::number("Choice")? else {
            return Ok(None);
        };
        match Year::from_choice(choice) {
            Some(year) => return Ok(Some(year)),
            None => println!("Invalid choice, please enter a number between 1 and 4"),
        }
    }
}

/// A (term, year) pair identifying when a course runs. Replaced wholesale on
/// update, never field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Semester {
    term: Term,
    year: Year,
}

impl Semester {
    pub fn new(term: Term, year: Year) -> Semester {
        Semester { term, year }
    }

    pub fn term(&self) -> Term {
        self.term
    }

    pub fn year(&self) -> Year {
        self.year
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.term, self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Fall,
    Spring,
    Summer,
    Winter,
}

impl Term {
    pub fn from_choice(choice: u8) -> Option<Term> {
        match choice {
            1 => Some(Term::Fall),
            2 => Some(Term::Spring),
            3 => Some(Term::Summer),
            4 => Some(Term::Winter),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let term_str = match self {
            Term::Fall => "Fall",
            Term::Spring => "Spring",
            Term::Summer => "Summer",
            Term::Winter => "Winter",
        };
        write!(f, "{}", term_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Year {
    Y2025,
    Y2026,
    Y2027,
    Y2028,
}

impl Year {
    pub fn from_choice(choice: u8) -> Option<Year> {
        match choice {
            1 => Some(Year::Y2025),
            2 => Some(Year::Y2026),
            3 => Some(Year::Y2027),
            4 => Some(Year::Y2028),
            _ => None,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = match self {
            Year::Y2025 => 2025,
            Year::Y2026 => 2026,
            Year::Y2027 => 2027,
            Year::Y2028 => 2028,
        };
        write!(f, "{}", year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_and_year_map_from_menu_choices() {
        assert_eq!(Term::from_choice(1), Some(Term::Fall));
        assert_eq!(Term::from_choice(4), Some(Term::Winter));
        assert_eq!(Term::from_choice(0), None);
        assert_eq!(Term::from_choice(5), None);

        assert_eq!(Year::from_choice(2), Some(Year::Y2026));
        assert_eq!(Year::from_choice(0), None);
        assert_eq!(Year::from_choice(5), None);
    }

    #[test]
    fn semester_displays_term_and_year() {
        let semester = Semester::new(Term::Fall, Year::Y2025);
        assert_eq!(semester.to_string(), "Fall 2025");
    }
}
