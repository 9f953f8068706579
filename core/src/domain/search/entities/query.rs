use sea_orm::{DatabaseBackend, Statement, Value};

/// A data query and its matching count query. Both share FROM, JOIN and
/// WHERE; only the data query is ordered and paged.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub sql: String,
    pub params: Vec<Value>,
    pub count_sql: String,
    pub count_params: Vec<Value>,
    pub page: i64,
    pub limit: i64,
}

impl SearchQuery {
    pub fn statement(&self) -> Statement {
        Statement::from_sql_and_values(DatabaseBackend::Postgres, &self.sql, self.params.clone())
    }

    pub fn count_statement(&self) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            &self.count_sql,
            self.count_params.clone(),
        )
    }
}
