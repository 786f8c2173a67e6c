//! Typed table queries.
//!
//! A [`TableQuery`] is started with [`crate::StoreClient::from`] and finished
//! by one of its async terminal methods. Column names are checked against the
//! table's declared columns as the query is built; the first unknown column is
//! reported by the terminal method before anything is sent.

use crate::{Method, StoreClient, StoreError, StoreRequest};
use ayur_schema::{Insert, Row, Schema, Table, Update};
use std::fmt::Display;
use std::marker::PhantomData;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    Ilike,
    Is,
    NotIs,
    In,
}

impl FilterOp {
    fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::Neq => "neq",
            FilterOp::Gt => "gt",
            FilterOp::Gte => "gte",
            FilterOp::Lt => "lt",
            FilterOp::Lte => "lte",
            FilterOp::Like => "like",
            FilterOp::Ilike => "ilike",
            FilterOp::Is => "is",
            FilterOp::NotIs => "not.is",
            FilterOp::In => "in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
    column: &'static str,
    op: FilterOp,
    value: String,
}

impl Filter {
    fn render(&self) -> String {
        format!("{}.{}", self.op.as_str(), self.value)
    }
}

/// A query against table `T`.
#[derive(Debug)]
pub struct TableQuery<'c, T: Table> {
    client: &'c StoreClient,
    columns: Option<Vec<&'static str>>,
    filters: Vec<Filter>,
    order: Vec<(&'static str, Direction)>,
    limit: Option<usize>,
    offset: Option<usize>,
    error: Option<StoreError>,
    _table: PhantomData<T>,
}

impl<'c, T: Table> TableQuery<'c, T> {
    pub(crate) fn new(client: &'c StoreClient) -> Self {
        Self {
            client,
            columns: None,
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
            error: None,
            _table: PhantomData,
        }
    }

    /// Resolve a column name, remembering the first unknown one.
    fn column(&mut self, name: &str) -> Option<&'static str> {
        match T::column(name) {
            Some(column) => Some(column.name),
            None => {
                if self.error.is_none() {
                    self.error = Some(StoreError::UnknownColumn {
                        table: T::NAME.to_string(),
                        column: name.to_string(),
                    });
                }
                None
            }
        }
    }

    fn filter(mut self, column: &str, op: FilterOp, value: String) -> Self {
        if let Some(column) = self.column(column) {
            self.filters.push(Filter { column, op, value });
        }
        self
    }

    /// Restrict the returned columns. Without this every column is returned.
    ///
    /// Rows still decode into the full row shape, so only narrow the
    /// selection when reading into a custom type with [`Self::fetch_as`].
    pub fn select(mut self, columns: &[&str]) -> Self {
        let resolved: Vec<_> = columns.iter().filter_map(|c| self.column(c)).collect();
        self.columns = Some(resolved);
        self
    }

    pub fn eq(self, column: &str, value: impl Display) -> Self {
        self.filter(column, FilterOp::Eq, value.to_string())
    }

    pub fn neq(self, column: &str, value: impl Display) -> Self {
        self.filter(column, FilterOp::Neq, value.to_string())
    }

    pub fn gt(self, column: &str, value: impl Display) -> Self {
        self.filter(column, FilterOp::Gt, value.to_string())
    }

    pub fn gte(self, column: &str, value: impl Display) -> Self {
        self.filter(column, FilterOp::Gte, value.to_string())
    }

    pub fn lt(self, column: &str, value: impl Display) -> Self {
        self.filter(column, FilterOp::Lt, value.to_string())
    }

    pub fn lte(self, column: &str, value: impl Display) -> Self {
        self.filter(column, FilterOp::Lte, value.to_string())
    }

    /// Case-sensitive pattern match; `*` is the wildcard.
    pub fn like(self, column: &str, pattern: impl Display) -> Self {
        self.filter(column, FilterOp::Like, pattern.to_string())
    }

    /// Case-insensitive pattern match; `*` is the wildcard.
    pub fn ilike(self, column: &str, pattern: impl Display) -> Self {
        self.filter(column, FilterOp::Ilike, pattern.to_string())
    }

    pub fn is_null(self, column: &str) -> Self {
        self.filter(column, FilterOp::Is, "null".to_string())
    }

    pub fn not_null(self, column: &str) -> Self {
        self.filter(column, FilterOp::NotIs, "null".to_string())
    }

    /// Match any of the given values.
    pub fn in_list<V: Display>(self, column: &str, values: impl IntoIterator<Item = V>) -> Self {
        let items: Vec<String> = values
            .into_iter()
            .map(|v| quote_list_item(&v.to_string()))
            .collect();
        self.filter(column, FilterOp::In, format!("({})", items.join(",")))
    }

    /// Sort by a column. Repeated calls add tie-breakers.
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        if let Some(column) = self.column(column) {
            self.order.push((column, direction));
        }
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.limit = Some(count);
        self
    }

    /// Rows `from..=to`, zero-based.
    pub fn range(mut self, from: usize, to: usize) -> Self {
        self.offset = Some(from);
        self.limit = Some(to.saturating_add(1).saturating_sub(from));
        self
    }

    /// Build the request for `method` without sending it.
    pub fn build(&self, method: Method) -> Result<StoreRequest, StoreError> {
        let mut url = reqwest::Url::parse(&self.client.endpoint(&format!("/rest/v1/{}", T::NAME)))
            .map_err(|e| StoreError::InvalidUrl(e.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            let select = match &self.columns {
                Some(columns) if !columns.is_empty() => columns.join(","),
                _ => "*".to_string(),
            };
            pairs.append_pair("select", &select);
            for filter in &self.filters {
                pairs.append_pair(filter.column, &filter.render());
            }
            if method == Method::Get {
                if !self.order.is_empty() {
                    let order: Vec<String> = self
                        .order
                        .iter()
                        .map(|(c, d)| format!("{}.{}", c, d.as_str()))
                        .collect();
                    pairs.append_pair("order", &order.join(","));
                }
                if let Some(limit) = self.limit {
                    pairs.append_pair("limit", &limit.to_string());
                }
                if let Some(offset) = self.offset {
                    pairs.append_pair("offset", &offset.to_string());
                }
            }
        }

        let mut request = self.client.request(method, url.as_str());
        let schema = <T::Schema as Schema>::NAME;
        if method.is_mutation() {
            request = request.header("Prefer", "return=representation");
            if schema != "public" {
                request = request.header("Content-Profile", schema);
            }
        } else if schema != "public" {
            request = request.header("Accept-Profile", schema);
        }
        Ok(request)
    }

    fn take_error(&mut self) -> Result<(), StoreError> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn require_filter(&self, operation: &'static str) -> Result<(), StoreError> {
        if self.filters.is_empty() {
            return Err(StoreError::MissingFilter {
                table: T::NAME.to_string(),
                operation,
            });
        }
        Ok(())
    }

    /// Read every matching row.
    pub async fn fetch(self) -> Result<Vec<Row<T>>, StoreError> {
        self.fetch_as().await
    }

    /// Read matching rows into a caller-chosen shape.
    pub async fn fetch_as<R: serde::de::DeserializeOwned>(mut self) -> Result<Vec<R>, StoreError> {
        self.take_error()?;
        let request = self.build(Method::Get)?;
        self.client.execute(request).await?.json()
    }

    /// Read exactly one row.
    pub async fn fetch_one(self) -> Result<Row<T>, StoreError> {
        self.fetch_optional().await?.ok_or_else(|| StoreError::NotFound {
            table: T::NAME.to_string(),
        })
    }

    /// Read at most one row.
    pub async fn fetch_optional(self) -> Result<Option<Row<T>>, StoreError> {
        let mut rows = self.fetch().await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            count => Err(StoreError::MultipleRows {
                table: T::NAME.to_string(),
                count,
            }),
        }
    }

    /// Create one record and return it as stored.
    pub async fn insert(self, values: &Insert<T>) -> Result<Row<T>, StoreError> {
        let mut rows = self.insert_many(std::slice::from_ref(values)).await?;
        rows.pop().ok_or_else(|| StoreError::NotFound {
            table: T::NAME.to_string(),
        })
    }

    /// Create several records in one request.
    pub async fn insert_many(mut self, values: &[Insert<T>]) -> Result<Vec<Row<T>>, StoreError> {
        self.take_error()?;
        if values.is_empty() {
            return Ok(Vec::new());
        }
        let request = self.build(Method::Post)?.json(values)?;
        self.client.execute(request).await?.json()
    }

    /// Apply a patch to every matching row.
    ///
    /// An empty patch is a no-op: nothing is sent and no rows are returned.
    pub async fn update(mut self, patch: &Update<T>) -> Result<Vec<Row<T>>, StoreError> {
        self.take_error()?;
        let body = serde_json::to_value(patch)?;
        if body.as_object().is_some_and(|fields| fields.is_empty()) {
            tracing::debug!(table = T::NAME, "skipping empty update");
            return Ok(Vec::new());
        }
        self.require_filter("update")?;
        let request = self.build(Method::Patch)?.json(&body)?;
        self.client.execute(request).await?.json()
    }

    /// Delete every matching row and return what was removed.
    pub async fn delete(mut self) -> Result<Vec<Row<T>>, StoreError> {
        self.take_error()?;
        self.require_filter("delete")?;
        let request = self.build(Method::Delete)?;
        self.client.execute(request).await?.json()
    }
}

/// Quote an `in` list item when it contains reserved characters.
fn quote_list_item(value: &str) -> String {
    if value.contains([',', '(', ')', '"', '\\', ' ']) {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_list_item() {
        assert_eq!(quote_list_item("doctor"), "doctor");
        assert_eq!(quote_list_item("a,b"), "\"a,b\"");
        assert_eq!(quote_list_item("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_direction_as_str() {
        assert_eq!(Direction::default().as_str(), "asc");
        assert_eq!(Direction::Descending.as_str(), "desc");
    }
}
