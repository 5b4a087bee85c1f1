//! `SQLite` edge source.
//!
//! Runs a query returning `(from, to)` integer pairs and streams them to the
//! builder. The first two result columns are used; any further columns are
//! ignored. Failures are sorted into the source-level error variants:
//!
//! - preparing the statement, or a result with fewer than two columns → `Query`
//! - a row value that is not an integer → `RowDecode`
//! - a failure while stepping the statement → `Stream`

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::NodeId;
use crate::source::EdgeSource;

/// Default query for the catchment navigation schema.
///
/// Selects every navigation edge touching a known catchment.
pub const DEFAULT_QUERY: &str = "SELECT DISTINCT fromcomid, tocomid FROM catchment_navigation \
     INNER JOIN catchments ON catchments.comid = catchment_navigation.fromcomid \
     OR catchments.comid = catchment_navigation.tocomid";

/// Edge source backed by a `SQLite` query.
pub struct SqliteSource {
    conn: Connection,
    query: String,
    path: Option<PathBuf>,
}

impl SqliteSource {
    /// Open the database at `path` read-only.
    ///
    /// A missing file is an error rather than silently creating an empty
    /// database.
    pub fn open(path: &Path, query: impl Into<String>) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "opened edge database");

        Ok(Self {
            conn,
            query: query.into(),
            path: Some(path.to_path_buf()),
        })
    }

    /// Use an existing connection, e.g. an in-memory database.
    #[must_use]
    pub fn from_connection(conn: Connection, query: impl Into<String>) -> Self {
        Self {
            conn,
            query: query.into(),
            path: None,
        }
    }

    /// The query this source runs.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Path of the database file, if opened from disk.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl EdgeSource for SqliteSource {
    fn for_each_edge(&self, visit: &mut dyn FnMut(NodeId, NodeId)) -> Result<()> {
        debug!(query = %self.query, "running edge query");

        let mut stmt = self.conn.prepare(&self.query).map_err(Error::query)?;
        let columns = stmt.column_count();
        if columns < 2 {
            return Err(Error::query(format!(
                "query returns {columns} column(s), expected (from, to)"
            )));
        }

        let mut rows = stmt.query([]).map_err(Error::query)?;
        let mut row_number = 0usize;

        while let Some(row) = rows.next().map_err(Error::stream)? {
            row_number += 1;
            let from: NodeId = row.get(0).map_err(|e| Error::row_decode(row_number, e))?;
            let to: NodeId = row.get(1).map_err(|e| Error::row_decode(row_number, e))?;
            visit(from, to);
        }

        debug!(rows = row_number, "edge query exhausted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_source(rows: &[(&str, &str)], query: &str) -> SqliteSource {
        let conn = Connection::open_in_memory().expect("in-memory database");
        conn.execute_batch("CREATE TABLE edges (fromcomid, tocomid);")
            .expect("create table");
        for (from, to) in rows {
            conn.execute(
                "INSERT INTO edges (fromcomid, tocomid) VALUES (?1, ?2)",
                [from, to],
            )
            .expect("insert row");
        }
        SqliteSource::from_connection(conn, query)
    }

    fn collect(source: &SqliteSource) -> Result<Vec<(NodeId, NodeId)>> {
        let mut edges = Vec::new();
        source.for_each_edge(&mut |from, to| edges.push((from, to)))?;
        Ok(edges)
    }

    #[test]
    fn streams_rows_in_query_order() {
        let source = memory_source(
            &[("0", "1"), ("1", "2"), ("2", "3")],
            "SELECT CAST(fromcomid AS INTEGER), CAST(tocomid AS INTEGER) FROM edges ORDER BY rowid",
        );

        let edges = collect(&source).expect("query should succeed");

        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn bad_query_is_query_error() {
        let source = memory_source(&[("0", "1")], "a very bad query");

        let result = collect(&source);

        assert!(matches!(result, Err(Error::Query(_))), "got {result:?}");
    }

    #[test]
    fn single_column_query_is_query_error() {
        let source = memory_source(&[("0", "1")], "SELECT fromcomid FROM edges");

        let result = collect(&source);

        assert!(matches!(result, Err(Error::Query(_))), "got {result:?}");
    }

    #[test]
    fn text_row_is_row_decode_error() {
        let source = memory_source(
            &[("A", "B"), ("C", "D")],
            "SELECT fromcomid, tocomid FROM edges",
        );

        let result = collect(&source);

        assert!(
            matches!(result, Err(Error::RowDecode { row: 1, .. })),
            "got {result:?}"
        );
    }

    #[test]
    fn from_connection_has_no_path() {
        let source = memory_source(&[], DEFAULT_QUERY);

        assert!(source.path().is_none());
        assert_eq!(source.query(), DEFAULT_QUERY);
    }
}
