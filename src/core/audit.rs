//! Pretty-printer for the internal audit log table.

use crate::db::pool::DbPool;
use crate::db::queries::load_audit;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Color per operation family, mirroring the message helpers.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "staff_add" | "role_add" => Colour::Green,
        "staff_del" | "role_del" => Colour::Red,
        "staff_edit" => Colour::Yellow,
        "clock_in" | "clock_out" | "clock_pause" | "clock_resume" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct AuditLogic;

impl AuditLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_audit(&pool.conn)?;
        if entries.is_empty() {
            println!("The audit log is empty.");
            return Ok(());
        }

        // Pad on the uncolored text; ANSI codes would skew the widths.
        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + 1 + target.len())
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Audit log:\n");

        for (id, date, operation, target, message) in entries {
            let plain = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} {target}")
            };
            let padding = " ".repeat(op_w.saturating_sub(plain.len()));

            let colored = if target.is_empty() {
                color_for_operation(&operation).paint(operation.clone()).to_string()
            } else {
                format!(
                    "{} {}",
                    color_for_operation(&operation).paint(operation.clone()),
                    target
                )
            };

            println!("{id:>id_w$}: {date} | {colored}{padding} => {message}");
        }

        Ok(())
    }
}
