//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 PostgreSQL 和 SQLite（本地开发与测试）。

mod grade_inputs;
mod grades;

use crate::config::DatabaseConfig;
use crate::errors::{GradeApiError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| GradeApiError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", redact_url(&db_url));

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        // 内存数据库每个连接都是独立的库，只能使用单连接
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let max_connections = if in_memory { 1 } else { config.pool_size };

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| GradeApiError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let opt = if in_memory {
            opt
        } else {
            opt.journal_mode(SqliteJournalMode::Wal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
        };

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout));

        // 内存库的唯一连接不能被回收，否则数据随之丢失
        pool_options = if in_memory {
            pool_options.idle_timeout(None).max_lifetime(None)
        } else {
            pool_options.idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options.connect_with(opt).await.map_err(|e| {
            GradeApiError::database_connection(format!("SQLite connection failed: {e}"))
        })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            GradeApiError::database_connection(format!("Unable to connect to database: {e}"))
        })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(url.to_string())
        } else {
            Err(GradeApiError::database_config(format!(
                "Cannot infer database type from URL: {}. Supported: postgres://, sqlite:, or a .db/.sqlite file path",
                redact_url(url)
            )))
        }
    }
}

/// 日志中隐藏连接串里的密码
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let credentials = &url[scheme_end + 3..at];
            match credentials.find(':') {
                Some(colon) => format!(
                    "{}{}:***{}",
                    &url[..scheme_end + 3],
                    &credentials[..colon],
                    &url[at..]
                ),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}

// Storage trait 实现
use crate::models::{
    grade_inputs::{
        entities::GradeInput,
        requests::{GradeInputChanges, GradeInputListQuery, NewGradeInput},
        responses::TermInputSummary,
    },
    grades::{
        entities::Grade,
        requests::{GradeListQuery, NewGrade, UpdateGradeRequest},
        responses::StudentGradeStats,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 科目成绩模块
    async fn list_grades(&self, query: GradeListQuery) -> Result<Vec<Grade>> {
        self.list_grades_impl(query).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn create_grade(&self, grade: NewGrade) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>> {
        self.update_grade_impl(id, update).await
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    async fn get_student_stats(&self, student_id: i64) -> Result<StudentGradeStats> {
        self.get_student_stats_impl(student_id).await
    }

    // 成绩构成项模块
    async fn list_grade_inputs(&self, query: GradeInputListQuery) -> Result<Vec<GradeInput>> {
        self.list_grade_inputs_impl(query).await
    }

    async fn get_grade_input_by_id(&self, id: i64) -> Result<Option<GradeInput>> {
        self.get_grade_input_by_id_impl(id).await
    }

    async fn create_grade_input(&self, input: NewGradeInput) -> Result<GradeInput> {
        self.create_grade_input_impl(input).await
    }

    async fn update_grade_input(
        &self,
        id: i64,
        changes: GradeInputChanges,
    ) -> Result<Option<GradeInput>> {
        self.update_grade_input_impl(id, changes).await
    }

    async fn delete_grade_input(&self, id: i64) -> Result<bool> {
        self.delete_grade_input_impl(id).await
    }

    async fn get_subject_input_summary(
        &self,
        subject_grade_id: i64,
    ) -> Result<Vec<TermInputSummary>> {
        self.get_subject_input_summary_impl(subject_grade_id).await
    }

    // 连接管理
    async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| GradeApiError::database_connection(format!("Database ping failed: {e}")))
    }

    async fn close(&self) -> Result<()> {
        self.db.clone().close().await.map_err(|e| {
            GradeApiError::database_connection(format!("Failed to close database pool: {e}"))
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 每个测试独立的内存数据库
    pub(crate) async fn memory_storage() -> SeaOrmStorage {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        };
        SeaOrmStorage::connect(&config)
            .await
            .expect("in-memory storage")
    }

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("postgresql://localhost:5432/grade_api").unwrap(),
            "postgresql://localhost:5432/grade_api"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("grades.db").unwrap(),
            "sqlite://grades.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert!(SeaOrmStorage::build_database_url("mongodb://localhost").is_err());
    }

    #[test]
    fn test_redact_url() {
        assert_eq!(
            redact_url("postgresql://grader:s3cret@db:5432/grade_api"),
            "postgresql://grader:***@db:5432/grade_api"
        );
        assert_eq!(
            redact_url("postgresql://localhost:5432/grade_api"),
            "postgresql://localhost:5432/grade_api"
        );
    }

    #[tokio::test]
    async fn test_ping_and_close() {
        let storage = memory_storage().await;
        assert!(storage.ping().await.is_ok());
        assert!(storage.close().await.is_ok());
    }
}
