//! Interactive numbered menu over the same store operations as the API.
//!
//! Strictly sequential: one operation, including its store round trip,
//! finishes before the next line is read. Operation errors are printed and
//! the menu continues; only I/O errors on the terminal end the loop.

pub mod format;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::debug;

use crate::db::EduStore;
use crate::error::EduError;
use crate::types::{
    AwarenessInput, BankAccountInput, SchemeInput, StatusChange, StudentInput, Validate,
};

const MENU: &[&str] = &[
    "1. Insert Student",
    "2. Insert Bank Account",
    "3. Insert Scheme",
    "4. Show Students",
    "5. Show Bank Accounts",
    "6. Show Students Pending DBT",
    "7. Update Student",
    "8. Update Account Status",
    "9. Update Scheme",
    "10. Update Awareness Content",
    "11. Delete Student",
    "12. Delete Scheme",
    "13. Delete Awareness Content",
    "0. Exit",
];

const CONFIRM_WORD: &str = "YES";

pub struct Console<R, W> {
    store: EduStore,
    lines: Lines<R>,
    out: W,
}

/// Parse a numeric identifier typed at a prompt.
pub fn parse_id(raw: &str) -> Result<i64, EduError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| EduError::Validation(format!("invalid id: {:?}", raw.trim())))
}

/// `y`/`n` answers; blank keeps the current value.
pub fn parse_flag(raw: &str) -> Result<Option<bool>, EduError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "y" | "yes" => Ok(Some(true)),
        "n" | "no" => Ok(Some(false)),
        other => Err(EduError::Validation(format!(
            "answer y, n or leave blank (got {other:?})"
        ))),
    }
}

fn blank_to_none(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(store: EduStore, input: R, out: W) -> Self {
        Self {
            store,
            lines: input.lines(),
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until option 0 or end of input.
    pub async fn run(&mut self) -> Result<(), EduError> {
        loop {
            self.print_menu().await?;
            let Some(choice) = self.read_line("ENTER YOUR CHOICE: ").await? else {
                self.say("Exiting.").await?;
                return Ok(());
            };
            debug!(choice = %choice.trim(), "menu selection");
            let outcome = match choice.trim() {
                "1" => self.insert_student().await,
                "2" => self.insert_bank_account().await,
                "3" => self.insert_scheme().await,
                "4" => self.show_students().await,
                "5" => self.show_bank_accounts().await,
                "6" => self.show_pending_dbt().await,
                "7" => self.update_student().await,
                "8" => self.update_account_status().await,
                "9" => self.update_scheme().await,
                "10" => self.update_awareness().await,
                "11" => self.delete_student().await,
                "12" => self.delete_scheme().await,
                "13" => self.delete_awareness().await,
                "0" => {
                    self.say("Exiting.").await?;
                    return Ok(());
                }
                _ => self.say("Please enter a valid number.").await,
            };
            match outcome {
                Ok(()) => {}
                Err(EduError::Io(e)) => return Err(EduError::Io(e)),
                Err(e) => self.say(&format!("Error: {e}")).await?,
            }
        }
    }

    async fn print_menu(&mut self) -> Result<(), EduError> {
        self.say("\n******************** DBT DATABASE MENU ********************")
            .await?;
        for item in MENU {
            self.say(item).await?;
        }
        Ok(())
    }

    async fn say(&mut self, line: &str) -> Result<(), EduError> {
        self.out.write_all(line.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        Ok(())
    }

    /// `None` once input is exhausted.
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>, EduError> {
        self.out.write_all(prompt.as_bytes()).await?;
        self.out.flush().await?;
        Ok(self.lines.next_line().await?)
    }

    async fn ask(&mut self, prompt: &str) -> Result<String, EduError> {
        Ok(self.read_line(prompt).await?.unwrap_or_default())
    }

    async fn ask_optional(&mut self, prompt: &str) -> Result<Option<String>, EduError> {
        Ok(blank_to_none(self.ask(prompt).await?))
    }

    async fn ask_id(&mut self, prompt: &str) -> Result<i64, EduError> {
        let raw = self.ask(prompt).await?;
        parse_id(&raw)
    }

    async fn keep(&mut self, prompt: &str, current: String) -> Result<String, EduError> {
        Ok(self.ask_optional(prompt).await?.unwrap_or(current))
    }

    async fn keep_optional(
        &mut self,
        prompt: &str,
        current: Option<String>,
    ) -> Result<Option<String>, EduError> {
        Ok(self.ask_optional(prompt).await?.or(current))
    }

    async fn confirmed(&mut self) -> Result<bool, EduError> {
        let answer = self.ask("Type YES to confirm delete: ").await?;
        if answer.trim() == CONFIRM_WORD {
            return Ok(true);
        }
        self.say("Abort.").await?;
        Ok(false)
    }

    async fn insert_student(&mut self) -> Result<(), EduError> {
        self.say("INSERT STUDENT").await?;
        let input = StudentInput {
            name: self.ask("Name: ").await?,
            email: self.ask_optional("Email (or leave blank): ").await?,
            phone: self.ask_optional("Phone (or leave blank): ").await?,
            state: self.ask("State: ").await?,
            college: self.ask_optional("College (or leave blank): ").await?,
        };
        input.validate()?;
        let student = self.store.insert_student(&input).await?;
        self.say(&format!("Inserted student id: {}", student.student_id))
            .await
    }

    async fn insert_bank_account(&mut self) -> Result<(), EduError> {
        self.say("INSERT BANK ACCOUNT").await?;
        let input = BankAccountInput {
            student_id: self.ask_id("Student ID (must exist): ").await?,
            account_number: self.ask("Account Number: ").await?,
            bank_name: self.ask("Bank Name: ").await?,
        };
        input.validate()?;
        let account_id = self.store.insert_bank_account(&input).await?;
        self.say(&format!("Inserted bank account id: {account_id}"))
            .await
    }

    async fn insert_scheme(&mut self) -> Result<(), EduError> {
        self.say("INSERT SCHEME").await?;
        let input = SchemeInput {
            scheme_name: self.ask("Scheme name: ").await?,
            department: self.ask_optional("Department (or leave blank): ").await?,
        };
        input.validate()?;
        let scheme = self.store.insert_scheme(&input).await?;
        self.say(&format!("Inserted scheme id: {}", scheme.scheme_id))
            .await
    }

    async fn show_students(&mut self) -> Result<(), EduError> {
        let students = self.store.list_students().await?;
        if students.is_empty() {
            return self.say("No students found.").await;
        }
        for s in &students {
            self.say(&format::student_line(s)).await?;
        }
        Ok(())
    }

    async fn show_bank_accounts(&mut self) -> Result<(), EduError> {
        let accounts = self.store.list_bank_accounts().await?;
        if accounts.is_empty() {
            return self.say("No bank accounts.").await;
        }
        for a in &accounts {
            self.say(&format::account_line(a)).await?;
        }
        Ok(())
    }

    async fn show_pending_dbt(&mut self) -> Result<(), EduError> {
        self.say("STUDENTS PENDING DBT (no DBT enabled)").await?;
        let pending = self.store.students_pending_dbt().await?;
        if pending.is_empty() {
            return self.say("No pending students.").await;
        }
        for s in &pending {
            self.say(&format::pending_line(s)).await?;
        }
        Ok(())
    }

    async fn update_student(&mut self) -> Result<(), EduError> {
        self.say("UPDATE STUDENT").await?;
        let student_id = self.ask_id("Student ID to update: ").await?;
        let current = self.store.get_student(student_id).await?;
        self.say(&format!("Current: {}", format::student_line(&current)))
            .await?;
        let input = StudentInput {
            name: self.keep("New name (leave blank to keep): ", current.name).await?,
            email: self
                .keep_optional("New email (leave blank to keep): ", current.email)
                .await?,
            phone: self
                .keep_optional("New phone (leave blank to keep): ", current.phone)
                .await?,
            state: self.keep("New state (leave blank to keep): ", current.state).await?,
            college: self
                .keep_optional("New college (leave blank to keep): ", current.college)
                .await?,
        };
        input.validate()?;
        self.store.update_student(student_id, &input).await?;
        self.say("Student updated.").await
    }

    async fn update_account_status(&mut self) -> Result<(), EduError> {
        self.say("UPDATE ACCOUNT STATUS").await?;
        let account_id = self.ask_id("Account ID to update: ").await?;
        let current = self.store.ensure_account_status(account_id).await?;
        self.say(&format!("Current status: {}", format::status_line(&current)))
            .await?;
        let aadhaar = self
            .ask("Set Aadhaar linked? (y/n) leave blank keep current: ")
            .await?;
        let dbt = self
            .ask("Set DBT enabled? (y/n) leave blank keep current: ")
            .await?;
        let change = StatusChange {
            account_id,
            aadhaar_linked: parse_flag(&aadhaar)?,
            dbt_enabled: parse_flag(&dbt)?,
        };
        let updated = self.store.update_account_status(change).await?;
        self.say("Account status updated and history recorded.")
            .await?;
        self.say(&format::status_line(&updated)).await
    }

    async fn update_scheme(&mut self) -> Result<(), EduError> {
        self.say("UPDATE SCHEME").await?;
        let scheme_id = self.ask_id("Scheme ID to update: ").await?;
        let current = self.store.get_scheme(scheme_id).await?;
        self.say(&format!("Current: {}", format::scheme_line(&current)))
            .await?;
        let input = SchemeInput {
            scheme_name: self
                .keep("New name (leave blank keep): ", current.scheme_name)
                .await?,
            department: self
                .keep_optional("New dept (leave blank keep): ", current.department)
                .await?,
        };
        input.validate()?;
        self.store.update_scheme(scheme_id, &input).await?;
        self.say("Scheme updated.").await
    }

    /// Id `0` creates a new entry instead of updating one.
    async fn update_awareness(&mut self) -> Result<(), EduError> {
        self.say("UPDATE/INSERT AWARENESS CONTENT").await?;
        let content_id = self.ask_id("Content ID to update (0 to create new): ").await?;
        if content_id == 0 {
            let input = AwarenessInput {
                title: self.ask("Title: ").await?,
                content: self.ask_optional("Content text (plain): ").await?,
            };
            input.validate()?;
            let created = self.store.insert_awareness(&input).await?;
            return self
                .say(&format!("Inserted content id: {}", created.content_id))
                .await;
        }
        let current = self.store.get_awareness(content_id).await?;
        self.say(&format!("Current: {}", format::awareness_line(&current)))
            .await?;
        let input = AwarenessInput {
            title: self.keep("New title (leave blank keep): ", current.title).await?,
            content: self
                .keep_optional("New content (leave blank keep): ", current.content)
                .await?,
        };
        input.validate()?;
        self.store.update_awareness(content_id, &input).await?;
        self.say("Updated awareness content.").await
    }

    async fn delete_student(&mut self) -> Result<(), EduError> {
        self.say("DELETE STUDENT").await?;
        let student_id = self.ask_id("Student ID to delete: ").await?;
        if !self.confirmed().await? {
            return Ok(());
        }
        self.store.delete_student(student_id).await?;
        self.say("Deleted.").await
    }

    async fn delete_scheme(&mut self) -> Result<(), EduError> {
        self.say("DELETE SCHEME").await?;
        let scheme_id = self.ask_id("Scheme ID to delete: ").await?;
        if !self.confirmed().await? {
            return Ok(());
        }
        self.store.delete_scheme(scheme_id).await?;
        self.say("Deleted.").await
    }

    async fn delete_awareness(&mut self) -> Result<(), EduError> {
        self.say("DELETE AWARENESS CONTENT").await?;
        let content_id = self.ask_id("Content ID to delete: ").await?;
        if !self.confirmed().await? {
            return Ok(());
        }
        self.store.delete_awareness(content_id).await?;
        self.say("Deleted.").await
    }
}
