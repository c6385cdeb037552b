//! Customer ratings: creation and per-staff statistics.
//!
//! Ratings come from the public menu, so neither submitting one nor
//! reading the aggregates requires an authenticated tier.

use crate::db::db_utils::with_write_retry;
use crate::db::pool::DbPool;
use crate::db::queries::{find_staff_by_email, insert_rating, load_rating_stats};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::table::Table;

pub struct RateLogic;

impl RateLogic {
    pub fn add(pool: &mut DbPool, email: &str, score: u8) -> AppResult<()> {
        if !(1..=5).contains(&score) {
            return Err(AppError::InvalidScore(score));
        }

        let member = find_staff_by_email(&pool.conn, email)?
            .ok_or_else(|| AppError::UnknownStaff(email.to_string()))?;

        with_write_retry(|| insert_rating(&pool.conn, member.id, score))?;
        success(format!("Rated {} with {}/5.", member.name, score));
        Ok(())
    }

    pub fn stats(pool: &mut DbPool) -> AppResult<()> {
        let stats = load_rating_stats(&pool.conn)?;
        if stats.is_empty() {
            println!("No ratings yet.");
            return Ok(());
        }

        let mut table = Table::new(vec!["Staff", "Average", "Ratings"]);
        for s in &stats {
            table.add_row(vec![
                s.staff_name.clone(),
                format!("{:.2}", s.average),
                s.count.to_string(),
            ]);
        }
        print!("{}", table.render());
        Ok(())
    }
}
