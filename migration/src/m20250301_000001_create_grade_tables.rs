use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 科目成绩表 ====================
        manager
            .create_table(
                Table::create()
                    .table(SubjectGrades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubjectGrades::SubjectGradeId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubjectGrades::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubjectGrades::EnrollmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubjectGrades::CourseSubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SubjectGrades::MidtermGrade).double().null())
                    .col(ColumnDef::new(SubjectGrades::FinalsGrade).double().null())
                    .col(ColumnDef::new(SubjectGrades::SubjectGrade).double().null())
                    .col(ColumnDef::new(SubjectGrades::Remarks).string().null())
                    .col(
                        ColumnDef::new(SubjectGrades::FinalizedBy)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SubjectGrades::FinalizedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubjectGrades::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubjectGrades::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 成绩构成项表 ====================
        // subject_grade_id 只是逻辑关联，不建外键
        manager
            .create_table(
                Table::create()
                    .table(GradeInputs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GradeInputs::GradeInputId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GradeInputs::SubjectGradeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GradeInputs::InputType).string().not_null())
                    .col(ColumnDef::new(GradeInputs::InputName).string().not_null())
                    .col(ColumnDef::new(GradeInputs::Score).double().not_null())
                    .col(ColumnDef::new(GradeInputs::Term).string().not_null())
                    .col(ColumnDef::new(GradeInputs::CreatedBy).big_integer().null())
                    .col(
                        ColumnDef::new(GradeInputs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GradeInputs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 科目成绩表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subject_grade_student_id")
                    .table(SubjectGrades::Table)
                    .col(SubjectGrades::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subject_grade_course_subject_id")
                    .table(SubjectGrades::Table)
                    .col(SubjectGrades::CourseSubjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subject_grade_enrollment_id")
                    .table(SubjectGrades::Table)
                    .col(SubjectGrades::EnrollmentId)
                    .to_owned(),
            )
            .await?;

        // 成绩构成项表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grade_input_subject_grade_id")
                    .table(GradeInputs::Table)
                    .col(GradeInputs::SubjectGradeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GradeInputs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SubjectGrades::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SubjectGrades {
    #[sea_orm(iden = "tbl_grades_subject_grade")]
    Table,
    SubjectGradeId,
    StudentId,
    EnrollmentId,
    CourseSubjectId,
    MidtermGrade,
    FinalsGrade,
    SubjectGrade,
    Remarks,
    FinalizedBy,
    FinalizedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GradeInputs {
    #[sea_orm(iden = "tbl_grade_grade_input")]
    Table,
    GradeInputId,
    SubjectGradeId,
    InputType,
    InputName,
    Score,
    Term,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
