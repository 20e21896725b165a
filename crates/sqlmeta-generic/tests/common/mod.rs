#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use sqlmeta_core::{Connection, DriverError, DriverName};
use sqlmeta_generic::{ColumnMeta, GenericField, GenericProtocol};

/// Generic layer connection answering probes from scripted column metas.
pub struct FakeGeneric {
    driver: String,
    results: HashMap<String, Vec<ColumnMeta>>,
    pub prepares: Rc<Cell<usize>>,
    pub closes: Rc<Cell<usize>>,
}

pub struct FakeCursor {
    columns: Vec<ColumnMeta>,
}

impl FakeGeneric {
    pub fn new(driver: &str) -> Self {
        Self {
            driver: driver.to_string(),
            results: HashMap::new(),
            prepares: Rc::new(Cell::new(0)),
            closes: Rc::new(Cell::new(0)),
        }
    }

    pub fn mysql() -> Self {
        Self::new("mysql")
            .with_result("select * from test_table_types limit 0", table_types_columns())
            .with_result(MEDIA_PROBE, media_columns())
    }

    pub fn with_result(mut self, probe: &str, columns: Vec<ColumnMeta>) -> Self {
        self.results.insert(probe.to_string(), columns);
        self
    }
}

impl DriverName for FakeGeneric {
    fn driver_name(&self) -> &str {
        &self.driver
    }
}

impl Connection for FakeGeneric {
    type Family = GenericProtocol;
    type Statement = FakeCursor;

    fn prepare(&mut self, sql: &str) -> Result<FakeCursor, DriverError> {
        self.prepares.set(self.prepares.get() + 1);
        Ok(FakeCursor {
            columns: self.results.get(sql).cloned().unwrap_or_default(),
        })
    }

    fn execute(&mut self, stmt: &mut FakeCursor) -> Result<(), DriverError> {
        // Generic layers often defer rejection to execution.
        if stmt.columns.is_empty() {
            return Err(DriverError::query("SQLSTATE[42S02]: Base table or view not found"));
        }
        Ok(())
    }

    fn describe(&mut self, stmt: &FakeCursor) -> Result<Vec<GenericField>, DriverError> {
        Ok(stmt.columns.iter().cloned().map(GenericField::from).collect())
    }

    fn close(&mut self, _stmt: FakeCursor) {
        self.closes.set(self.closes.get() + 1);
    }
}

pub fn meta(
    name: &str,
    table: &str,
    native_type: &str,
    len: u64,
    precision: u32,
    flags: &[&str],
) -> ColumnMeta {
    ColumnMeta {
        name: name.to_string(),
        table: table.to_string(),
        native_type: native_type.to_string(),
        len,
        precision,
        flags: flags.iter().map(ToString::to_string).collect(),
    }
}

fn typed(name: &str, native_type: &str, len: u64, flags: &[&str]) -> ColumnMeta {
    meta(name, "test_table_types", native_type, len, 0, flags)
}

/// Column metas of `select * from test_table_types`.
pub fn table_types_columns() -> Vec<ColumnMeta> {
    vec![
        typed("id", "LONG", 10, &["not_null", "primary_key"]),
        typed("test_varchar_255", "VAR_STRING", 765, &[]),
        typed("test_char_10", "STRING", 30, &[]),
        typed("test_text_2000", "BLOB", 6000, &["blob"]),
        typed("test_binary_3", "STRING", 3, &[]),
        typed("test_varbinary_10", "VAR_STRING", 10, &[]),
        typed("test_int_unsigned", "LONG", 10, &[]),
        typed("test_bigint", "LONGLONG", 20, &[]),
        meta("test_decimal_10_3", "test_table_types", "NEWDECIMAL", 12, 3, &[]),
        typed("test_float", "FLOAT", 12, &[]),
        typed("test_tinyint", "TINY", 4, &[]),
        typed("test_date", "DATE", 10, &[]),
        typed("test_timestamp", "TIMESTAMP", 19, &["not_null"]),
        typed("test_tinyblob", "BLOB", 255, &["blob"]),
        typed("test_mediumblob", "BLOB", 16_777_215, &["blob"]),
        typed("test_longblob", "BLOB", 4_294_967_295, &["blob"]),
        typed("test_enum", "STRING", 3, &[]),
        typed("test_set", "STRING", 15, &[]),
        typed("test_bit", "BIT", 1, &[]),
        typed("test_geometry", "GEOMETRY", 4_294_967_295, &["blob"]),
    ]
}

pub const MEDIA_QUERY: &str = "SELECT 'cool' as test_string, m.container_id, mc.container_id as mcid,
    filesize, max(filemtime) as max_time
    FROM media m inner join media_container mc on mc.container_id = m.container_id
    GROUP BY 1, 2, 3, 4";

pub const MEDIA_PROBE: &str = "select 'cool' as test_string, m.container_id, mc.container_id as mcid, \
filesize, max(filemtime) as max_time from media m inner join media_container mc \
on mc.container_id = m.container_id group by 1, 2, 3, 4 limit 0";

/// Column metas of [`MEDIA_QUERY`].
pub fn media_columns() -> Vec<ColumnMeta> {
    vec![
        meta("test_string", "", "VAR_STRING", 12, 31, &["not_null"]),
        meta("container_id", "m", "LONG", 11, 0, &["not_null", "multiple_key"]),
        meta("mcid", "mc", "LONG", 11, 0, &["not_null", "primary_key"]),
        meta("filesize", "m", "LONG", 11, 0, &[]),
        meta("max_time", "", "LONG", 11, 0, &[]),
    ]
}
