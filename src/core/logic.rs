use crate::config::Config;
use crate::core::calculator::pairing::pair_shifts;
use crate::core::grouper::group_by_employee;
use crate::core::normalizer::normalize;
use crate::core::summary::{PayRates, SheetLayout, build_summary};
use crate::errors::AppResult;
use crate::ingest::RawTable;
use crate::models::employee_group::EmployeeGroup;
use crate::models::worksheet::EmployeeWorksheet;

pub struct Core;

impl Core {
    /// normalize → group → pair → summarize, one worksheet per employee.
    ///
    /// Only structural problems (missing column, empty sheet) fail; one
    /// employee's broken scans never block another's sheet.
    pub fn build_worksheets(table: &RawTable, cfg: &Config) -> AppResult<Vec<EmployeeWorksheet>> {
        let events = normalize(table)?;
        let layout = SheetLayout::default();
        let rates = cfg.pay_rates();

        Ok(group_by_employee(events)
            .iter()
            .map(|g| Self::build_worksheet(g, &layout, &rates, cfg.max_shift_hours))
            .collect())
    }

    pub fn build_worksheet(
        group: &EmployeeGroup,
        layout: &SheetLayout,
        rates: &PayRates,
        max_shift_hours: f64,
    ) -> EmployeeWorksheet {
        let rows = pair_shifts(&group.events, max_shift_hours);
        let summary = build_summary(&rows, layout, rates);

        EmployeeWorksheet {
            display_name: group.display_name.clone(),
            rows,
            summary,
        }
    }
}
