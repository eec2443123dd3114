//! Database dialects and the column types negotiated per dialect.

use std::fmt;

/// A target database product, identified by its dialect name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    MySql,
    Postgres,
    SqlServer,
    Sqlite,
}

struct DialectEntry {
    dialect: Dialect,
    name: &'static str,
    /// Column type keyword for a time-of-day value.
    time_column: &'static str,
}

// SQLite has no TIME storage class; the canonical text form goes into TEXT.
static DIALECTS: [DialectEntry; 4] = [
    DialectEntry {
        dialect: Dialect::MySql,
        name: "mysql",
        time_column: "TIME",
    },
    DialectEntry {
        dialect: Dialect::Postgres,
        name: "postgres",
        time_column: "TIME",
    },
    DialectEntry {
        dialect: Dialect::SqlServer,
        name: "sqlserver",
        time_column: "TIME",
    },
    DialectEntry {
        dialect: Dialect::Sqlite,
        name: "sqlite",
        time_column: "TEXT",
    },
];

impl Dialect {
    /// Look up a dialect by its exact name (`"mysql"`, `"postgres"`,
    /// `"sqlserver"`, `"sqlite"`).
    ///
    /// # Example
    ///
    /// ```
    /// use ormtypes::Dialect;
    ///
    /// assert_eq!(Dialect::from_name("sqlite"), Some(Dialect::Sqlite));
    /// assert_eq!(Dialect::from_name("oracle"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        DIALECTS
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.dialect)
    }

    /// All known dialects, in table order.
    pub fn all() -> impl Iterator<Item = Dialect> {
        DIALECTS.iter().map(|entry| entry.dialect)
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Column type keyword for a time-of-day column on this dialect.
    pub fn time_column_type(self) -> &'static str {
        self.entry().time_column
    }

    fn entry(self) -> &'static DialectEntry {
        let row = match self {
            Dialect::MySql => 0,
            Dialect::Postgres => 1,
            Dialect::SqlServer => 2,
            Dialect::Sqlite => 3,
        };
        &DIALECTS[row]
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Time-of-day column type for a dialect name.
///
/// Unknown dialects get an empty string, leaving the choice to the
/// persistence layer's default.
///
/// # Example
///
/// ```
/// use ormtypes::dialect::time_column_type;
///
/// assert_eq!(time_column_type("mysql"), "TIME");
/// assert_eq!(time_column_type("sqlite"), "TEXT");
/// assert_eq!(time_column_type("unknown"), "");
/// ```
pub fn time_column_type(dialect_name: &str) -> &'static str {
    Dialect::from_name(dialect_name).map_or("", Dialect::time_column_type)
}

/// Column type negotiation with the persistence layer.
pub trait ColumnType {
    /// Dialect-neutral type name.
    fn data_type(&self) -> &'static str;

    /// Native column type keyword for `dialect_name`, or `""` when the dialect
    /// is not recognized.
    fn db_data_type(&self, dialect_name: &str) -> &'static str;
}
