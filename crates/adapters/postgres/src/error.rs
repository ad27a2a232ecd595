//! sqlx 错误映射

use shop_errors::AppError;

/// SQLSTATE 22 类：数据异常（超长字符串、数值越界等）
const DATA_EXCEPTION_CLASS: &str = "22";

/// 将 sqlx 错误转换为应用错误
///
/// 唯一约束冲突映射为 Conflict，数据异常映射为 Validation，其余统一为 Database
pub fn map_db_error(context: &str, err: sqlx::Error) -> AppError {
    let Some(db_err) = err.as_database_error() else {
        tracing::warn!(error = %err, "{}", context);
        return AppError::database(format!("{}: {}", context, err));
    };

    if db_err.is_unique_violation() {
        tracing::warn!(error = %err, "{}: unique constraint violated", context);
        return AppError::conflict(format!("{}: duplicate record", context));
    }

    let data_exception = db_err
        .code()
        .is_some_and(|code| code.starts_with(DATA_EXCEPTION_CLASS));
    if data_exception {
        tracing::warn!(error = %err, "{}: value rejected by database", context);
        return AppError::validation(format!("{}: {}", context, db_err.message()));
    }

    tracing::warn!(error = %err, "{}", context);
    AppError::database(format!("{}: {}", context, err))
}
