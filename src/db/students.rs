use crate::db::models::Student;
use crate::db::sqlite::EduStore;
use crate::error::EduError;
use crate::types::StudentInput;
use tracing::info;

const STUDENT_COLUMNS: &str = "student_id, name, email, phone, state, college";
const DUPLICATE_CONTACT: &str = "email or phone already exists";

impl EduStore {
    pub async fn insert_student(&self, input: &StudentInput) -> Result<Student, EduError> {
        let student: Student = sqlx::query_as(&format!(
            "INSERT INTO students (name, email, phone, state, college)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.state)
        .bind(&input.college)
        .fetch_one(self.pool())
        .await
        .map_err(|e| EduError::from(e).on_conflict(DUPLICATE_CONTACT))?;

        info!(student_id = student.student_id, "inserted student");
        Ok(student)
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, EduError> {
        let rows = sqlx::query_as(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY student_id"
        ))
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    pub async fn get_student(&self, student_id: i64) -> Result<Student, EduError> {
        sqlx::query_as(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE student_id = ?"
        ))
        .bind(student_id)
        .fetch_optional(self.pool())
        .await?
        .ok_or(EduError::not_found("student", student_id))
    }

    /// Full-row replace.
    pub async fn update_student(
        &self,
        student_id: i64,
        input: &StudentInput,
    ) -> Result<(), EduError> {
        let result = sqlx::query(
            "UPDATE students SET name = ?, email = ?, phone = ?, state = ?, college = ?
             WHERE student_id = ?",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.state)
        .bind(&input.college)
        .bind(student_id)
        .execute(self.pool())
        .await
        .map_err(|e| EduError::from(e).on_conflict(DUPLICATE_CONTACT))?;

        if result.rows_affected() == 0 {
            return Err(EduError::not_found("student", student_id));
        }
        info!(student_id, "updated student");
        Ok(())
    }

    /// Deletes the student; bank accounts, their status and history go with it.
    pub async fn delete_student(&self, student_id: i64) -> Result<(), EduError> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = ?")
            .bind(student_id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(EduError::not_found("student", student_id));
        }
        info!(student_id, "deleted student");
        Ok(())
    }

    /// Students with no DBT-enabled account, including students with no account at all.
    pub async fn students_pending_dbt(&self) -> Result<Vec<Student>, EduError> {
        let rows = sqlx::query_as(
            "SELECT s.student_id, s.name, s.email, s.phone, s.state, s.college
             FROM students s
             LEFT JOIN bank_accounts ba ON ba.student_id = s.student_id
             LEFT JOIN account_status st ON st.account_id = ba.account_id
             GROUP BY s.student_id
             HAVING MAX(COALESCE(st.dbt_enabled, 0)) = 0
             ORDER BY s.student_id",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }
}
