use super::format::{group_thousands, money};
use super::prompt::Prompt;
use crate::application::manager::EmployeeManager;
use crate::domain::employee::{Department, Employee};
use crate::domain::ports::AddOutcome;
use crate::error::{Collection, RecordError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

pub const MENU: &str = "
*----------PROGRAM TO MANAGE EMPLOYEES----------*
|                                               |
| 1. Shows list of employees.                   |
| 2. Shows list of departments.                 |
| 3. Add new employee.                          |
| 4. Delete employee by employee's ID.          |
| 5. Delete department by department's ID.      |
| 6. Shows payroll.                             |
| 7. Exit program.                              |
|_______________________________________________|
";

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListEmployees,
    ListDepartments,
    AddEmployee,
    DeleteEmployee,
    DeleteDepartment,
    ShowPayroll,
    Exit,
}

impl Command {
    pub fn from_choice(choice: char) -> Option<Self> {
        match choice {
            '1' => Some(Command::ListEmployees),
            '2' => Some(Command::ListDepartments),
            '3' => Some(Command::AddEmployee),
            '4' => Some(Command::DeleteEmployee),
            '5' => Some(Command::DeleteDepartment),
            '6' => Some(Command::ShowPayroll),
            '7' => Some(Command::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Wait for ENTER and clear the screen after each command.
    pub pause: bool,
}

/// The interactive menu loop.
///
/// Domain errors are printed and the loop carries on; only I/O and terminal
/// failures end the session with an error. End of input ends it cleanly.
pub struct Session<R, W> {
    manager: EmployeeManager,
    prompt: Prompt<R, W>,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(manager: EmployeeManager, prompt: Prompt<R, W>, options: SessionOptions) -> Self {
        Self {
            manager,
            prompt,
            options,
        }
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.prompt.output(), "{MENU}")?;
            let choice = match self.prompt.choice("Please select your desired function: ") {
                Ok(choice) => choice,
                Err(RecordError::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            };
            writeln!(self.prompt.output(), "---------------------------------")?;

            match Command::from_choice(choice) {
                Some(Command::Exit) => {
                    writeln!(self.prompt.output(), "Exit program.")?;
                    return Ok(());
                }
                Some(command) => {
                    debug!(?command, "executing command");
                    match self.execute(command).await {
                        Ok(()) => {}
                        Err(RecordError::InputClosed) => return Ok(()),
                        Err(e @ (RecordError::Io(_) | RecordError::Terminal(_))) => return Err(e),
                        Err(e) => writeln!(self.prompt.output(), "{e}")?,
                    }
                }
                None => writeln!(
                    self.prompt.output(),
                    "Input is not valid. Please enter again!!!"
                )?,
            }

            if self.options.pause {
                self.prompt.pause()?;
                write!(self.prompt.output(), "{CLEAR_SCREEN}")?;
            }
        }
    }

    async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::ListEmployees => self.show_employees().await,
            Command::ListDepartments => self.show_departments().await,
            Command::AddEmployee => self.add_employee().await,
            Command::DeleteEmployee => self.delete_employee().await,
            Command::DeleteDepartment => self.delete_department().await,
            Command::ShowPayroll => self.show_payroll().await,
            Command::Exit => Ok(()),
        }
    }

    async fn show_employees(&mut self) -> Result<()> {
        let employees = self.manager.employees().await?;
        let out = self.prompt.output();
        if employees.is_empty() {
            writeln!(out, "No employees to show!!!")?;
        }
        for employee in &employees {
            write_employee(out, employee)?;
        }
        Ok(())
    }

    async fn show_departments(&mut self) -> Result<()> {
        let departments = self.manager.departments().await?;
        let out = self.prompt.output();
        if departments.is_empty() {
            writeln!(out, "No department to show!!!")?;
        }
        for department in &departments {
            write_department(out, department)?;
        }
        Ok(())
    }

    async fn add_employee(&mut self) -> Result<()> {
        writeln!(self.prompt.output(), "Adding new employee . . . ")?;

        let id = loop {
            let id = self.prompt.text("Enter ID: ")?;
            if !self.manager.employee_exists(&id).await? {
                break id;
            }
            writeln!(
                self.prompt.output(),
                "\nID already exists!!!\n\nPlease enter another ID again."
            )?;
        };
        let department_id = self.prompt.text("Enter department's ID: ")?;
        let name = self.prompt.text("Enter your full name: ")?;
        let salary_base = self.prompt.whole_number("Enter salary base: ")?;
        let working_days = self.prompt.whole_number("Enter number of working days: ")?;
        let working_performance = self.prompt.performance("Enter working performance: ")?;
        let bonus = self.prompt.whole_number("Enter bonus: ")?;
        let late_coming_days = self.prompt.whole_number("Enter number of late coming days: ")?;

        let new_department_bonus = if self.manager.department_exists(&department_id).await? {
            0
        } else {
            writeln!(
                self.prompt.output(),
                "Department's ID does not exist, create a new one ..."
            )?;
            self.prompt.whole_number("Enter department's bonus: ")?
        };

        let employee = Employee {
            id,
            name,
            department_id,
            salary_base,
            working_days,
            working_performance,
            bonus,
            late_coming_days,
        };
        let outcome = self
            .manager
            .add_employee(employee, new_department_bonus)
            .await?;

        let out = self.prompt.output();
        writeln!(out, "----")?;
        if outcome == AddOutcome::CreatedDepartment {
            writeln!(out, "Created new department ...")?;
        }
        writeln!(out, "Added new employee ...")?;
        Ok(())
    }

    async fn delete_employee(&mut self) -> Result<()> {
        if self.manager.employees().await?.is_empty() {
            writeln!(self.prompt.output(), "No employee to delete!!!")?;
            return Ok(());
        }
        let id = self
            .prompt
            .text("Input employee's ID which you want to delete: ")?;
        self.manager.delete_employee(&id).await?;
        writeln!(self.prompt.output(), "Deleted successfully . . .")?;
        Ok(())
    }

    async fn delete_department(&mut self) -> Result<()> {
        if self.manager.departments().await?.is_empty() {
            writeln!(self.prompt.output(), "No department to delete!!!")?;
            return Ok(());
        }
        let id = self
            .prompt
            .text("Input department's ID which you want to delete: ")?;
        self.manager.delete_department(&id).await?;
        writeln!(self.prompt.output(), "Deleted department successfully ...")?;
        Ok(())
    }

    async fn show_payroll(&mut self) -> Result<()> {
        let out = self.prompt.output();
        let entries = match self.manager.payroll().await {
            Ok(entries) => entries,
            Err(RecordError::EmptyCollection(Collection::Employees)) => {
                writeln!(out, "No employee to show payroll!!!")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        for entry in &entries {
            writeln!(out, "\n----")?;
            writeln!(out, "ID: {}", entry.employee.id)?;
            writeln!(out, "Full name: {}", entry.employee.name)?;
            match &entry.payslip {
                Ok(payslip) => writeln!(
                    out,
                    "Actual salary received: {}",
                    money(payslip.net_salary)
                )?,
                Err(e) => writeln!(out, "Actual salary could not be computed: {e}")?,
            }
            writeln!(out, "----")?;
        }
        Ok(())
    }
}

fn write_employee<W: Write>(out: &mut W, employee: &Employee) -> Result<()> {
    writeln!(out, "----")?;
    writeln!(out, "ID: {}", employee.id)?;
    writeln!(out, "Department's ID: {}", employee.department_id)?;
    writeln!(out, "Full name: {}", employee.name)?;
    writeln!(out, "Salary base: {}", money(employee.salary_base))?;
    writeln!(
        out,
        "Number of working days: {} (days)",
        group_thousands(employee.working_days.into())
    )?;
    writeln!(
        out,
        "Working performance: {:.1}",
        employee.working_performance
    )?;
    writeln!(out, "Bonus: {}", money(employee.bonus))?;
    writeln!(
        out,
        "Number of late working days: {} (days)",
        group_thousands(employee.late_coming_days.into())
    )?;
    writeln!(out, "----")?;
    Ok(())
}

fn write_department<W: Write>(out: &mut W, department: &Department) -> Result<()> {
    writeln!(out, "----")?;
    writeln!(out, "Department's ID: {}", department.id)?;
    writeln!(out, "Department's bonus: {}", money(department.bonus_salary))?;
    writeln!(out, "----")?;
    Ok(())
}
