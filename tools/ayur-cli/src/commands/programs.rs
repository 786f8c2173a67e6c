//! Wellness programs and consultations.

use anyhow::Result;
use ayur_commerce::programs::{consultation_types, treatment_programs};
use console::style;
use serde_json::json;

use crate::context::Context;

/// Run the programs command.
pub async fn run(ctx: &Context) -> Result<()> {
    let programs = treatment_programs();
    let consultations = consultation_types();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "programs": programs,
            "consultations": consultations,
        }));
        return Ok(());
    }

    ctx.output.header("Treatment Programs");
    for program in &programs {
        println!(
            "\n  {} {}",
            style(program.name.as_str()).bold(),
            style(format!("[{}]", program.id)).dim()
        );
        println!(
            "    {} · {} sessions · {}",
            program.duration_label(),
            program.sessions,
            style(program.price.display()).green().bold()
        );
        println!("    {}", program.description);
        if ctx.output.is_verbose() {
            ctx.output.kv("benefits", &program.benefits.join(", "));
            ctx.output.kv("includes", &program.includes.join(", "));
            ctx.output.kv("suitable for", &program.suitable_for);
        }
    }

    ctx.output.header("Expert Consultations");
    for consultation in &consultations {
        ctx.output.list_item(&format!(
            "{} ({}) {} [{}]",
            consultation.name,
            consultation.duration_label(),
            style(consultation.price.display()).green(),
            consultation.id
        ));
    }
    Ok(())
}
