use crate::errors::{GradeApiError, Result};
use crate::models::grade_inputs::entities::{InputType, Term};
use crate::models::grade_inputs::requests::{
    CreateGradeInputRequest, GradeInputChanges, NewGradeInput, UpdateGradeInputRequest,
};
use crate::models::grades::requests::{CreateGradeRequest, NewGrade};

/// 空字符串与缺失等价
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

pub fn validate_input_type(value: &str) -> Result<InputType> {
    value.parse().map_err(|_| {
        GradeApiError::validation(format!(
            "Invalid input_type. Must be one of: {}",
            InputType::allowed_values()
        ))
    })
}

pub fn validate_term(value: &str) -> Result<Term> {
    value.parse().map_err(|_| {
        GradeApiError::validation(format!(
            "Invalid term. Must be one of: {}",
            Term::allowed_values()
        ))
    })
}

/// 校验创建成绩请求：student_id、enrollment_id、course_subject_id 必填
pub fn validate_create_grade(req: CreateGradeRequest) -> Result<NewGrade> {
    let (Some(student_id), Some(enrollment_id), Some(course_subject_id)) =
        (req.student_id, req.enrollment_id, req.course_subject_id)
    else {
        return Err(GradeApiError::validation(
            "Missing required fields: student_id, enrollment_id, course_subject_id",
        ));
    };

    Ok(NewGrade {
        student_id,
        enrollment_id,
        course_subject_id,
        midterm_grade: req.midterm_grade,
        finals_grade: req.finals_grade,
        subject_grade: req.subject_grade,
        remarks: req.remarks,
        finalized_by: req.finalized_by,
    })
}

/// 校验创建成绩构成项请求
///
/// score 只检查是否出现：0 合法，显式 null 也会通过并交给数据库处理。
pub fn validate_create_grade_input(req: CreateGradeInputRequest) -> Result<NewGradeInput> {
    let (Some(subject_grade_id), Some(input_type), Some(input_name), Some(score), Some(term)) = (
        req.subject_grade_id,
        non_empty(req.input_type),
        non_empty(req.input_name),
        req.score,
        non_empty(req.term),
    ) else {
        return Err(GradeApiError::validation(
            "Missing required fields: subject_grade_id, input_type, input_name, score, term",
        ));
    };

    let input_type = validate_input_type(&input_type)?;
    let term = validate_term(&term)?;

    Ok(NewGradeInput {
        subject_grade_id,
        input_type,
        input_name,
        score,
        term,
        created_by: req.created_by,
    })
}

/// 校验更新成绩构成项请求：只检查提供了的枚举字段
pub fn validate_update_grade_input(req: UpdateGradeInputRequest) -> Result<GradeInputChanges> {
    let input_type = req
        .input_type
        .as_deref()
        .map(validate_input_type)
        .transpose()?;
    let term = req.term.as_deref().map(validate_term).transpose()?;

    Ok(GradeInputChanges {
        input_type,
        input_name: req.input_name,
        score: req.score,
        term,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input_request() -> CreateGradeInputRequest {
        CreateGradeInputRequest {
            subject_grade_id: Some(1),
            input_type: Some("quiz".into()),
            input_name: Some("Quiz 1".into()),
            score: Some(Some(18.0)),
            term: Some("midterms".into()),
            created_by: None,
        }
    }

    #[test]
    fn test_create_grade_requires_identifiers() {
        let missing = CreateGradeRequest {
            student_id: Some(1),
            enrollment_id: None,
            course_subject_id: Some(1),
            ..Default::default()
        };
        let err = validate_create_grade(missing).unwrap_err();
        assert_eq!(err.code(), "E004");
        assert!(err.message().contains("enrollment_id"));

        let ok = CreateGradeRequest {
            student_id: Some(1),
            enrollment_id: Some(101),
            course_subject_id: Some(1),
            subject_grade: Some(89.25),
            remarks: Some("Passed".into()),
            ..Default::default()
        };
        let grade = validate_create_grade(ok).unwrap();
        assert_eq!(grade.enrollment_id, 101);
        assert_eq!(grade.subject_grade, Some(89.25));
    }

    #[test]
    fn test_create_input_accepts_every_input_type() {
        for t in InputType::ALL {
            let req = CreateGradeInputRequest {
                input_type: Some(t.as_str().into()),
                ..valid_input_request()
            };
            assert_eq!(validate_create_grade_input(req).unwrap().input_type, t);
        }
    }

    #[test]
    fn test_create_input_rejects_unknown_input_type() {
        let req = CreateGradeInputRequest {
            input_type: Some("homework".into()),
            ..valid_input_request()
        };
        let err = validate_create_grade_input(req).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid input_type. Must be one of: quiz, exam, assignment, project, recitation, attendance"
        );
    }

    #[test]
    fn test_create_input_rejects_unknown_term() {
        let req = CreateGradeInputRequest {
            term: Some("prelims".into()),
            ..valid_input_request()
        };
        let err = validate_create_grade_input(req).unwrap_err();
        assert_eq!(err.message(), "Invalid term. Must be one of: midterms, finals");
    }

    #[test]
    fn test_create_input_score_presence() {
        let zero = CreateGradeInputRequest {
            score: Some(Some(0.0)),
            ..valid_input_request()
        };
        assert_eq!(validate_create_grade_input(zero).unwrap().score, Some(0.0));

        let null = CreateGradeInputRequest {
            score: Some(None),
            ..valid_input_request()
        };
        assert_eq!(validate_create_grade_input(null).unwrap().score, None);

        let missing = CreateGradeInputRequest {
            score: None,
            ..valid_input_request()
        };
        assert!(
            validate_create_grade_input(missing)
                .unwrap_err()
                .message()
                .starts_with("Missing required fields")
        );
    }

    #[test]
    fn test_create_input_missing_fields_checked_before_enums() {
        let req = CreateGradeInputRequest {
            input_name: Some(String::new()),
            term: Some("prelims".into()),
            ..valid_input_request()
        };
        let err = validate_create_grade_input(req).unwrap_err();
        assert!(err.message().starts_with("Missing required fields"));
    }

    #[test]
    fn test_update_input_checks_only_provided_enums() {
        let empty = validate_update_grade_input(UpdateGradeInputRequest::default()).unwrap();
        assert!(empty.input_type.is_none());
        assert!(empty.term.is_none());

        let bad_term = UpdateGradeInputRequest {
            term: Some("summer".into()),
            ..Default::default()
        };
        assert!(validate_update_grade_input(bad_term).is_err());

        let good = UpdateGradeInputRequest {
            input_type: Some("exam".into()),
            term: Some("finals".into()),
            score: Some(0.0),
            ..Default::default()
        };
        let changes = validate_update_grade_input(good).unwrap();
        assert_eq!(changes.input_type, Some(InputType::Exam));
        assert_eq!(changes.term, Some(Term::Finals));
        assert_eq!(changes.score, Some(0.0));
    }
}
