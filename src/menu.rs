use anyhow::Result;
use colored::Colorize;

use crate::course;
use crate::prompt;
use crate::semester;
use crate::store::CourseStore;

/// Runs the menu loop until the exit choice is selected or stdin closes.
pub fn run(store: &mut CourseStore) -> Result<()> {
    loop {
        println!();
        println!("{}", "Course Management System".bold());
        println!("1. Add Course");
        println!("2. Display Courses");
        println!("3. Update Course");
        println!("4. Remove Course");
        println!("5. Search by Code");
        println!("6. List by Semester");
        println!("7. Exit");

        let Some(choice) = prompt::number("Enter your choice")? else {
            return Ok(());
        };
        match choice {
            1 => course::add(store)?,
            2 => course::display(store)?,
            3 => course::update(store)?,
            4 => course::remove(store)?,
            5 => course::search(store)?,
            6 => semester::list_by_semester(store)?,
            7 => {
                println!("Exiting the Course Management System. Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice! Please enter a number between 1 and 7."),
        }
    }
}
