#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sqlmeta_core::{
    Capabilities, Capability, CanonicalDataType, Connection, DriverError, DriverFamily,
    FieldFlags, RawFieldDescriptor, TypeMapEntry,
};

/// Family with lower-case type names and flags given as predicates.
pub struct ScriptFamily;

impl DriverFamily for ScriptFamily {
    const NAME: &'static str = "script";
    type NativeType = &'static str;
    type Flags = FieldFlags;

    fn type_entry(native: &&'static str) -> Option<TypeMapEntry> {
        match *native {
            "int" => Some(TypeMapEntry::new(CanonicalDataType::Integer, "INTEGER")),
            "varchar" => Some(TypeMapEntry::new(CanonicalDataType::String, "VARCHAR")),
            "date" => Some(TypeMapEntry::new(CanonicalDataType::Date, "DATE")),
            _ => None,
        }
    }

    fn decode_flags(flags: &FieldFlags) -> FieldFlags {
        *flags
    }

    fn capabilities() -> Capabilities {
        [Capability::DetectPrimaryKey].into_iter().collect()
    }
}

pub type Field = RawFieldDescriptor<&'static str, FieldFlags>;

/// Outcome scripted for one probe query.
#[derive(Clone)]
pub enum Script {
    Fields(Vec<Field>),
    RejectPrepare(String),
    RejectExecute(String),
    Disconnect,
}

/// Round-trip counters shared with the test body.
#[derive(Default)]
pub struct Counters {
    pub prepared: AtomicUsize,
    pub closed: AtomicUsize,
}

impl Counters {
    pub fn prepared(&self) -> usize {
        self.prepared.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Connection answering probes from a script keyed by probe text.
pub struct ScriptedConnection {
    scripts: HashMap<String, Script>,
    pub counters: Arc<Counters>,
    pub queries: Vec<String>,
}

pub struct ScriptedStatement {
    script: Script,
}

impl ScriptedConnection {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            counters: Arc::new(Counters::default()),
            queries: Vec::new(),
        }
    }

    pub fn on(mut self, probe: &str, script: Script) -> Self {
        self.scripts.insert(probe.to_string(), script);
        self
    }
}

impl Connection for ScriptedConnection {
    type Family = ScriptFamily;
    type Statement = ScriptedStatement;

    fn prepare(&mut self, sql: &str) -> Result<ScriptedStatement, DriverError> {
        self.queries.push(sql.to_string());
        let script = self
            .scripts
            .get(sql)
            .cloned()
            .unwrap_or_else(|| Script::RejectPrepare(format!("unscripted query '{sql}'")));
        if let Script::RejectPrepare(message) = &script {
            return Err(DriverError::query(message.clone()));
        }
        self.counters.prepared.fetch_add(1, Ordering::SeqCst);
        Ok(ScriptedStatement { script })
    }

    fn execute(&mut self, stmt: &mut ScriptedStatement) -> Result<(), DriverError> {
        match &stmt.script {
            Script::RejectExecute(message) => Err(DriverError::query(message.clone())),
            Script::Disconnect => Err(DriverError::connection("server has gone away")),
            _ => Ok(()),
        }
    }

    fn describe(&mut self, stmt: &ScriptedStatement) -> Result<Vec<Field>, DriverError> {
        match &stmt.script {
            Script::Fields(fields) => Ok(fields.clone()),
            _ => Ok(Vec::new()),
        }
    }

    fn close(&mut self, _stmt: ScriptedStatement) {
        self.counters.closed.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn known(not_null: bool, primary: bool) -> FieldFlags {
    FieldFlags {
        not_null: Some(not_null),
        primary_key: Some(primary),
        auto_increment: Some(false),
        unsigned: Some(false),
        is_enum: Some(false),
        is_set: Some(false),
        group: Some(false),
    }
}

/// `select id, name, created from users` with `id` the primary key.
pub fn users_fields() -> Vec<Field> {
    vec![
        Field::new("id", "int")
            .original_name("id")
            .table("users", "users")
            .schema("app")
            .flags(known(true, true)),
        Field::new("name", "varchar")
            .original_name("name")
            .table("users", "users")
            .schema("app")
            .length(120, 0)
            .flags(known(false, false)),
        Field::new("created", "date")
            .original_name("created")
            .table("users", "users")
            .schema("app")
            .flags(known(true, false)),
    ]
}
