#![allow(dead_code)]

use std::collections::HashMap;

use sqlmeta_core::{Connection, DriverError};
use sqlmeta_mysql::field_flag::{
    AUTO_INCREMENT, BINARY, BLOB, ENUM, GROUP, NOT_NULL, NUM, PART_KEY, PRI_KEY, SET, UNSIGNED,
};
use sqlmeta_mysql::type_code::{
    BIT, BLOB as BLOB_TYPE, DATE, DATETIME, DOUBLE, FLOAT, GEOMETRY, INT24, JSON, LONG, LONGLONG,
    NEWDECIMAL, NULL, SHORT, STRING, TIME, TIMESTAMP, TINY, VAR_STRING,
};
use sqlmeta_mysql::{NativeField, NativeProtocol};

pub const SCHEMA: &str = "sqlmeta_test_db";

/// Connection answering probes from fields scripted per probe text.
///
/// Unscripted probes are rejected the way the server rejects unknown
/// tables.
#[derive(Default)]
pub struct FakeMysql {
    results: HashMap<String, Vec<NativeField>>,
    pub prepared: Vec<String>,
    pub closed: usize,
    pub fail_describe: bool,
}

pub struct FakeStatement {
    fields: Vec<NativeField>,
}

impl FakeMysql {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(mut self, probe: &str, fields: Vec<NativeField>) -> Self {
        self.results.insert(probe.to_string(), fields);
        self
    }

    /// Connection serving the fixture tables used across tests.
    pub fn with_fixtures() -> Self {
        Self::new()
            .with_result("select * from test_table_types limit 0", table_types_fields())
            .with_result(
                "select id from test_table_types limit 0",
                table_types_fields().into_iter().take(1).collect(),
            )
            .with_result(
                "select id, test_char_10 as id from test_table_types limit 0",
                ambiguous_id_fields(),
            )
            .with_result(MEDIA_PROBE, media_report_fields())
            .with_result("select * from test_table_with_default limit 0", with_defaults_fields())
    }
}

impl Connection for FakeMysql {
    type Family = NativeProtocol;
    type Statement = FakeStatement;

    fn prepare(&mut self, sql: &str) -> Result<FakeStatement, DriverError> {
        let fields = self.results.get(sql).cloned().ok_or_else(|| {
            DriverError::query(format!("Table '{SCHEMA}.sss' doesn't exist"))
        })?;
        self.prepared.push(sql.to_string());
        Ok(FakeStatement { fields })
    }

    fn execute(&mut self, _stmt: &mut FakeStatement) -> Result<(), DriverError> {
        Ok(())
    }

    fn describe(&mut self, stmt: &FakeStatement) -> Result<Vec<NativeField>, DriverError> {
        if self.fail_describe {
            return Err(DriverError::connection("Lost connection to MySQL server during query"));
        }
        Ok(stmt.fields.clone())
    }

    fn close(&mut self, _stmt: FakeStatement) {
        self.closed += 1;
    }
}

fn table_column(name: &str, code: u8, length: u64, flags: u32) -> NativeField {
    NativeField::new(name, code)
        .original_name(name)
        .table("test_table_types", "test_table_types")
        .schema(SCHEMA)
        .catalog("def")
        .length(length, 0)
        .flags(flags)
}

fn computed(name: &str, code: u8, length: u64, decimals: u32, flags: u32) -> NativeField {
    NativeField::new(name, code)
        .catalog("def")
        .length(length, decimals)
        .flags(flags)
}

/// Fields of `select * from test_table_types`.
pub fn table_types_fields() -> Vec<NativeField> {
    vec![
        table_column(
            "id",
            LONG,
            10,
            NOT_NULL | PRI_KEY | UNSIGNED | AUTO_INCREMENT | PART_KEY | NUM,
        ),
        table_column("test_varchar_255", VAR_STRING, 765, 0),
        table_column("test_char_10", STRING, 30, 0),
        table_column("test_text_2000", BLOB_TYPE, 6000, BLOB),
        table_column("test_binary_3", STRING, 3, BINARY),
        table_column("test_varbinary_10", VAR_STRING, 10, BINARY),
        table_column("test_int_unsigned", LONG, 10, UNSIGNED | NUM),
        table_column("test_bigint", LONGLONG, 20, NUM),
        table_column("test_decimal_10_3", NEWDECIMAL, 12, NUM).length(12, 3),
        table_column("test_float", FLOAT, 12, NUM),
        table_column("test_tinyint", TINY, 4, NUM),
        table_column("test_mediumint", INT24, 9, NUM),
        table_column("test_double", DOUBLE, 22, NUM),
        table_column("test_smallint", SHORT, 6, NUM),
        table_column("test_date", DATE, 10, BINARY),
        table_column("test_datetime", DATETIME, 19, BINARY),
        table_column("test_timestamp", TIMESTAMP, 19, NOT_NULL | BINARY),
        table_column("test_time", TIME, 10, BINARY),
        table_column("test_blob", BLOB_TYPE, 65535, BLOB | BINARY),
        table_column("test_tinyblob", BLOB_TYPE, 255, BLOB | BINARY),
        table_column("test_mediumblob", BLOB_TYPE, 16_777_215, BLOB | BINARY),
        table_column("test_longblob", BLOB_TYPE, 4_294_967_295, BLOB | BINARY),
        table_column("test_enum", STRING, 3, ENUM),
        table_column("test_set", STRING, 15, SET),
        table_column("test_bit", BIT, 1, 0),
        table_column("test_bool", TINY, 1, NUM),
        table_column("test_geometry", GEOMETRY, 4_294_967_295, BLOB | BINARY),
        table_column("test_point", GEOMETRY, 4_294_967_295, BLOB | BINARY),
        table_column("test_polygon", GEOMETRY, 4_294_967_295, BLOB | BINARY),
    ]
}

fn ambiguous_id_fields() -> Vec<NativeField> {
    let mut fields = table_types_fields();
    let id = fields.remove(0);
    let char_as_id = fields.remove(1);
    vec![
        id,
        NativeField {
            name: "id".to_string(),
            ..char_as_id
        },
    ]
}

pub const MEDIA_QUERY: &str = "
    SELECT 'cool' as test_string,
           (10/2*3)+1 as test_calc,
           (1+ mc.container_id) as test_calc_2,
           m.container_id,
           mc.container_id as mcid,
           mc.title,
           filesize,
           null as test_null,
           count(*) as count_media,
           max(filemtime) as max_time,
           avg(filemtime) as avg_time,
           group_concat(filename) as files
    FROM media m
    inner join media_container mc
    on mc.container_id = m.container_id
    group by 1,2,3,4,5,6,7
";

pub const MEDIA_PROBE: &str = "select 'cool' as test_string, (10/2*3)+1 as test_calc, \
(1+ mc.container_id) as test_calc_2, m.container_id, mc.container_id as mcid, mc.title, \
filesize, null as test_null, count(*) as count_media, max(filemtime) as max_time, \
avg(filemtime) as avg_time, group_concat(filename) as files from media m \
inner join media_container mc on mc.container_id = m.container_id \
group by 1,2,3,4,5,6,7 limit 0";

fn media_column(
    alias: &str,
    name: &str,
    table: &str,
    original_table: &str,
    code: u8,
    flags: u32,
) -> NativeField {
    NativeField::new(alias, code)
        .original_name(name)
        .table(table, original_table)
        .schema(SCHEMA)
        .catalog("def")
        .length(11, 0)
        .flags(flags)
}

/// Fields of [`MEDIA_QUERY`].
pub fn media_report_fields() -> Vec<NativeField> {
    vec![
        computed("test_string", VAR_STRING, 12, 31, NOT_NULL),
        computed("test_calc", NEWDECIMAL, 9, 4, NOT_NULL | BINARY | NUM),
        computed("test_calc_2", LONGLONG, 12, 0, BINARY | NUM),
        media_column(
            "container_id",
            "container_id",
            "m",
            "media",
            LONG,
            NOT_NULL | UNSIGNED | PART_KEY | NUM,
        ),
        media_column(
            "mcid",
            "container_id",
            "mc",
            "media_container",
            LONG,
            NOT_NULL | PRI_KEY | UNSIGNED | AUTO_INCREMENT | NUM,
        ),
        media_column("title", "title", "mc", "media_container", VAR_STRING, NOT_NULL)
            .length(765, 0),
        media_column("filesize", "filesize", "m", "media", LONG, UNSIGNED | NUM),
        computed("test_null", NULL, 0, 0, BINARY),
        computed("count_media", LONGLONG, 21, 0, NOT_NULL | BINARY | GROUP),
        computed("max_time", LONG, 11, 0, BINARY | GROUP),
        computed("avg_time", NEWDECIMAL, 14, 4, BINARY | GROUP),
        computed("files", BLOB_TYPE, 1024, 31, BLOB),
    ]
}

/// A single JSON column, which has no canonical mapping.
pub fn json_fields() -> Vec<NativeField> {
    vec![table_column("document", JSON, 4_294_967_295, BLOB | BINARY)]
}

/// Fields of `select * from test_table_with_default`.
pub fn with_defaults_fields() -> Vec<NativeField> {
    let column = |name: &str, code: u8, length: u64| {
        NativeField::new(name, code)
            .original_name(name)
            .table("test_table_with_default", "test_table_with_default")
            .schema(SCHEMA)
            .catalog("def")
            .length(length, 0)
    };
    vec![
        column("id", LONG, 10).flags(NOT_NULL | PRI_KEY | AUTO_INCREMENT | PART_KEY | NUM),
        column("default_5", LONG, 11).flags(NUM).default_value("5"),
        column("default_cool", VAR_STRING, 48).default_value("cool"),
        column("default_yes", STRING, 9).flags(ENUM).default_value("yes"),
    ]
}
