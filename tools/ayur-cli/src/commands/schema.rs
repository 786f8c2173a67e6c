//! Schema listing.

use anyhow::Result;
use ayur_schema::constants::public::enums::USER_ROLE;
use ayur_schema::functions::FUNCTIONS;
use ayur_schema::public::TABLES;
use ayur_schema::{table_info, TableInfo};
use serde_json::{json, Value};

use super::SchemaArgs;
use crate::context::Context;

fn table_json(info: &TableInfo) -> Value {
    json!({
        "schema": info.schema,
        "name": info.name,
        "primary_key": info.primary_key,
        "columns": info.columns.iter().map(|c| json!({ "name": c.name, "kind": c.kind.as_str() })).collect::<Vec<_>>(),
        "relationships": info.relationships.iter().map(|r| json!({
            "foreign_key_name": r.foreign_key_name,
            "columns": r.columns,
            "referenced_relation": r.referenced_relation,
            "referenced_columns": r.referenced_columns,
            "is_one_to_one": r.is_one_to_one,
        })).collect::<Vec<_>>(),
    })
}

/// Run the schema command.
pub async fn run(args: SchemaArgs, ctx: &Context) -> Result<()> {
    match args.table {
        Some(name) => show_table(table_info(&name)?, ctx),
        None => list_tables(ctx),
    }
    Ok(())
}

fn list_tables(ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "tables": TABLES.iter().map(table_json).collect::<Vec<_>>(),
            "functions": FUNCTIONS,
            "enums": { "user_role": USER_ROLE },
        }));
        return;
    }

    ctx.output.header("Tables (public)");
    let rows: Vec<_> = TABLES
        .iter()
        .map(|info| {
            vec![
                info.name.to_string(),
                info.columns.len().to_string(),
                info.relationships.len().to_string(),
            ]
        })
        .collect();
    ctx.output.table(&["TABLE", "COLUMNS", "RELATIONSHIPS"], &rows);

    ctx.output.header("Functions");
    for name in FUNCTIONS {
        ctx.output.list_item(name);
    }

    ctx.output.header("Enums");
    ctx.output.kv("user_role", &USER_ROLE.join(", "));
}

fn show_table(info: &TableInfo, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&table_json(info));
        return;
    }

    ctx.output.header(&format!("{}.{}", info.schema, info.name));
    ctx.output.kv("primary key", info.primary_key);
    let rows: Vec<_> = info
        .columns
        .iter()
        .map(|c| vec![c.name.to_string(), c.kind.as_str().to_string()])
        .collect();
    ctx.output.table(&["COLUMN", "KIND"], &rows);
    if !info.relationships.is_empty() {
        ctx.output.info("Relationships:");
        for r in info.relationships {
            ctx.output.list_item(&format!(
                "{} ({}) -> {}({})",
                r.foreign_key_name,
                r.columns.join(", "),
                r.referenced_relation,
                r.referenced_columns.join(", ")
            ));
        }
    }
}
