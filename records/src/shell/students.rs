//! `student-records` menu.

use std::io::{BufRead, Write};

use console::menu::{Dispatch, Menu};
use console::prompt::{PromptError, Prompter};

use crate::core::student::{Roster, Student};

const BANNER: &str = "
==============================
 Student Record Management 
==============================
1. Add Student
2. Display Students
3. Search Student by Roll
4. Update Student
5. Delete Student
6. Sort Students by Marks
7. Exit
==============================";

/// Menu over an owned [`Roster`].
#[derive(Debug, Default)]
pub struct StudentMenu {
    roster: Roster,
}

impl StudentMenu {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    fn add<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        if self.roster.is_full() {
            return p.say("Maximum student limit reached!");
        }
        let roll = p.read_int("Enter roll number: ")?;
        let name = p.read_word("Enter name: ")?;
        let marks = p.read_float("Enter marks: ")?;
        match self.roster.add(Student::new(roll, name, marks)) {
            Ok(_) => p.say("Student added successfully!"),
            Err(_) => p.say("Maximum student limit reached!"),
        }
    }

    fn display<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        let Ok(students) = self.roster.list() else {
            return p.say("No students to display.");
        };
        p.say("\nRoll\tName\tMarks")?;
        p.say("-".repeat(25))?;
        for s in students {
            p.say(format_args!("{}\t{}\t{:.2}", s.roll, s.name, s.marks))?;
        }
        Ok(())
    }

    fn search<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        if self.roster.is_empty() {
            return p.say("No students to search.");
        }
        let roll = p.read_int("Enter roll number to search: ")?;
        match self.roster.find(roll) {
            Ok(s) => p.say(format_args!(
                "Student found: {} {} {:.2}",
                s.roll, s.name, s.marks
            )),
            Err(_) => p.say("Student not found."),
        }
    }

    fn update<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        if self.roster.is_empty() {
            return p.say("No students to update.");
        }
        let roll = p.read_int("Enter roll number to update: ")?;
        if self.roster.find(roll).is_err() {
            return p.say("Student not found.");
        }
        let name = p.read_word("Enter new name: ")?;
        let marks = p.read_float("Enter new marks: ")?;
        match self.roster.update(roll, name, marks) {
            Ok(_) => p.say("Record updated successfully."),
            Err(_) => p.say("Student not found."),
        }
    }

    fn delete<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        if self.roster.is_empty() {
            return p.say("No students to delete.");
        }
        let roll = p.read_int("Enter roll number to delete: ")?;
        match self.roster.delete(roll) {
            Ok(_) => p.say("Record deleted successfully."),
            Err(_) => p.say("Student not found."),
        }
    }

    fn sort<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        match self.roster.sort_by_marks_desc() {
            Ok(()) => p.say("Students sorted by marks (descending)."),
            Err(_) => p.say("No students to sort."),
        }
    }
}

impl Menu for StudentMenu {
    fn banner(&self) -> &str {
        BANNER
    }

    fn exit_choice(&self) -> i64 {
        7
    }

    fn invalid_input_message(&self) -> &str {
        "Invalid input! Clearing buffer..."
    }

    fn invalid_choice_message(&self) -> &str {
        "Invalid choice. Try again."
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        choice: i64,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Dispatch, PromptError> {
        match choice {
            1 => self.add(prompter)?,
            2 => self.display(prompter)?,
            3 => self.search(prompter)?,
            4 => self.update(prompter)?,
            5 => self.delete(prompter)?,
            6 => self.sort(prompter)?,
            _ => return Ok(Dispatch::Unknown),
        }
        Ok(Dispatch::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{roster_of, student};
    use console::menu::{LoopOptions, run_menu};
    use std::io::Cursor;

    fn session(menu: &mut StudentMenu, input: &str) -> String {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_menu(menu, &mut prompter, LoopOptions { pause: false }).expect("session");
        let (_, out) = prompter.into_parts();
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn add_and_display() {
        let mut menu = StudentMenu::default();
        let out = session(&mut menu, "1\n10 Ada 91.5\n2\n7\n");
        assert!(out.contains("Student added successfully!"));
        assert!(out.contains("Roll\tName\tMarks\n-------------------------\n10\tAda\t91.50\n"));
    }

    #[test]
    fn empty_roster_guards_skip_the_roll_prompt() {
        let mut menu = StudentMenu::default();
        let out = session(&mut menu, "2\n3\n4\n5\n6\n7\n");
        for message in [
            "No students to display.",
            "No students to search.",
            "No students to update.",
            "No students to delete.",
            "No students to sort.",
        ] {
            assert!(out.contains(message), "missing {message:?}");
        }
        assert!(!out.contains("Enter roll number"));
    }

    #[test]
    fn update_prompts_for_fields_only_when_found() {
        let mut menu = StudentMenu::new(roster_of(vec![student(1, "Ada", 50.0)]));
        let out = session(&mut menu, "4 9\n4 1 Grace 77\n7\n");
        assert!(out.contains("Student not found."));
        assert_eq!(out.matches("Enter new name: ").count(), 1);
        assert_eq!(menu.roster().find(1), Ok(&student(1, "Grace", 77.0)));
    }

    #[test]
    fn full_roster_rejects_add_before_prompting() {
        let mut roster = Roster::with_capacity(1);
        roster.add(student(1, "Ada", 1.0)).expect("add");
        let mut menu = StudentMenu::new(roster);
        let out = session(&mut menu, "1\n7\n");
        assert!(out.contains("Maximum student limit reached!"));
        assert!(!out.contains("Enter roll number: "));
    }

    #[test]
    fn malformed_marks_leave_roster_unchanged() {
        let mut menu = StudentMenu::default();
        let out = session(&mut menu, "1 5 Ada lots\n7\n");
        assert!(out.contains("Invalid input! Clearing buffer..."));
        assert!(menu.roster().is_empty());
    }

    #[test]
    fn unknown_choice_uses_student_wording() {
        let mut menu = StudentMenu::default();
        let out = session(&mut menu, "8\n7\n");
        assert!(out.contains("Invalid choice. Try again."));
    }
}
