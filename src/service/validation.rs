//! Request validation and normalization for create inputs.
//!
//! Every string field is trimmed first; the trimmed value is what the
//! caller persists. A failed rule rejects the request before any session
//! is opened, so there are no partial writes.

use crate::error::AppError;
use crate::models::{FacultyInput, MessageInput, StudentInput, SubjectInput};
use regex::Regex;

const CODE_PATTERN: &str = "^[0-9A-Z]+$";
const FACULTY_CODE_PATTERN: &str = "^[0-9]{4}$";
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

impl StudentInput {
    /// Trim all fields and check rules: usn 10-20 chars of [0-9A-Z],
    /// non-empty name, semester in [1,8].
    pub fn normalized(self) -> Result<Self, AppError> {
        let usn = trimmed(&self.usn);
        check_len("usn", &usn, 10, 20)?;
        check_pattern("usn", &usn, CODE_PATTERN)?;
        let name = required("name", &self.name)?;
        check_range("semester", self.semester, 1, 8)?;
        Ok(Self {
            usn,
            name,
            semester: self.semester,
        })
    }
}

impl SubjectInput {
    /// Trim all fields and check rules: subject_code 3-10 chars of [0-9A-Z],
    /// non-empty name, semester in [1,8].
    pub fn normalized(self) -> Result<Self, AppError> {
        let subject_code = trimmed(&self.subject_code);
        check_len("subject_code", &subject_code, 3, 10)?;
        check_pattern("subject_code", &subject_code, CODE_PATTERN)?;
        let name = required("name", &self.name)?;
        check_range("semester", self.semester, 1, 8)?;
        Ok(Self {
            subject_code,
            name,
            semester: self.semester,
        })
    }
}

impl FacultyInput {
    /// Trim all fields and check rules: code exactly 4 digits, non-empty name.
    pub fn normalized(self) -> Result<Self, AppError> {
        let code = trimmed(&self.code);
        check_len("code", &code, 4, 4)?;
        check_pattern("code", &code, FACULTY_CODE_PATTERN)?;
        let name = required("name", &self.name)?;
        Ok(Self { code, name })
    }
}

impl MessageInput {
    /// Trim all fields; name and message must be non-empty, email must be
    /// syntactically valid.
    pub fn normalized(self) -> Result<Self, AppError> {
        let name = required("name", &self.name)?;
        let email = trimmed(&self.email);
        check_pattern_msg("email", &email, EMAIL_PATTERN, "must be a valid email")?;
        let message = required("message", &self.message)?;
        Ok(Self {
            name,
            email,
            message,
        })
    }
}

fn trimmed(s: &str) -> String {
    s.trim().to_string()
}

fn required(col: &str, s: &str) -> Result<String, AppError> {
    let t = trimmed(s);
    if t.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", col)));
    }
    Ok(t)
}

fn check_len(col: &str, s: &str, min: usize, max: usize) -> Result<(), AppError> {
    if s.len() < min {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            col, min
        )));
    }
    if s.len() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            col, max
        )));
    }
    Ok(())
}

fn check_pattern(col: &str, s: &str, pattern: &str) -> Result<(), AppError> {
    check_pattern_msg(col, s, pattern, "does not match required pattern")
}

fn check_pattern_msg(col: &str, s: &str, pattern: &str, msg: &str) -> Result<(), AppError> {
    let re = Regex::new(pattern)
        .map_err(|_| AppError::Validation(format!("invalid pattern for {}", col)))?;
    if !re.is_match(s) {
        return Err(AppError::Validation(format!("{} {}", col, msg)));
    }
    Ok(())
}

fn check_range(col: &str, v: i32, min: i32, max: i32) -> Result<(), AppError> {
    if v < min || v > max {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {}",
            col, min, max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::{FacultyInput, MessageInput, StudentInput, SubjectInput};

    fn student(usn: &str, name: &str, semester: i32) -> StudentInput {
        StudentInput {
            usn: usn.into(),
            name: name.into(),
            semester,
        }
    }

    #[test]
    fn student_valid_is_trimmed() {
        let s = student(" 4PM22CS001 ", "  Alice ", 6).normalized().unwrap();
        assert_eq!(s.usn, "4PM22CS001");
        assert_eq!(s.name, "Alice");
        assert_eq!(s.semester, 6);
    }

    #[test]
    fn student_usn_rules() {
        assert!(student("4PM22CS001", "Alice", 6).normalized().is_ok());
        // too short
        assert!(student("4PM22CS", "Alice", 6).normalized().is_err());
        // too long
        assert!(student(&"A".repeat(21), "Alice", 6).normalized().is_err());
        // lowercase rejected
        assert!(student("4pm22cs001", "Alice", 6).normalized().is_err());
        // punctuation rejected
        assert!(student("4PM22CS-01", "Alice", 6).normalized().is_err());
    }

    #[test]
    fn student_semester_bounds() {
        assert!(student("4PM22CS001", "Alice", 0).normalized().is_err());
        assert!(student("4PM22CS001", "Alice", 1).normalized().is_ok());
        assert!(student("4PM22CS001", "Alice", 8).normalized().is_ok());
        assert!(student("4PM22CS001", "Alice", 9).normalized().is_err());
    }

    #[test]
    fn student_name_required() {
        assert!(student("4PM22CS001", "   ", 6).normalized().is_err());
    }

    #[test]
    fn subject_code_rules() {
        let subj = |code: &str| SubjectInput {
            subject_code: code.into(),
            name: "Distributed Systems".into(),
            semester: 6,
        };
        assert!(subj("BCS601").normalized().is_ok());
        assert!(subj("BC").normalized().is_err());
        assert!(subj("BCS6010BCS60").normalized().is_err());
        assert!(subj("bcs601").normalized().is_err());
    }

    #[test]
    fn faculty_code_is_exactly_four_digits() {
        let fac = |code: &str| FacultyInput {
            code: code.into(),
            name: "Prof. Smith".into(),
        };
        assert!(fac("1234").normalized().is_ok());
        assert!(fac("123").normalized().is_err());
        assert!(fac("12345").normalized().is_err());
        assert!(fac("12A4").normalized().is_err());
    }

    #[test]
    fn message_email_rules() {
        let msg = |email: &str| MessageInput {
            name: "Bob".into(),
            email: email.into(),
            message: "hello".into(),
        };
        assert!(msg("a@b.com").normalized().is_ok());
        assert!(msg("not-an-email").normalized().is_err());
        assert!(msg("a@b").normalized().is_err());
        assert!(msg("a b@c.com").normalized().is_err());
    }
}
