//! Market concentration: procedure totals by region and specialty

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::models::{CategoryTotal, ProcedureRecord, RecordSet, RegionTotal, SpecialtyTotal};

/// Procedure count and average revenue per region, largest first
#[must_use]
pub fn region_totals(records: &RecordSet) -> Vec<RegionTotal> {
    category_totals(records, |r| &r.geographic_region)
}

/// Procedure count and average revenue per specialty, largest first
#[must_use]
pub fn specialty_totals(records: &RecordSet) -> Vec<SpecialtyTotal> {
    category_totals(records, |r| &r.specialty)
}

/// The category with the highest average revenue (ties to the earlier entry)
#[must_use]
pub fn highest_average_revenue(totals: &[CategoryTotal]) -> Option<&CategoryTotal> {
    totals.iter().reduce(|best, candidate| {
        if candidate.avg_revenue > best.avg_revenue {
            candidate
        } else {
            best
        }
    })
}

/// Group by `key`, ordered by count descending then name ascending
fn category_totals<F>(records: &RecordSet, key: F) -> Vec<CategoryTotal>
where
    F: Fn(&ProcedureRecord) -> &String,
{
    let mut groups: FxHashMap<&str, (usize, f64)> = FxHashMap::default();
    for record in records {
        let entry = groups.entry(key(record).as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.revenue_impact;
    }

    let mut totals: Vec<CategoryTotal> = groups
        .into_iter()
        .map(|(name, (procedure_count, total_revenue))| CategoryTotal {
            name: name.to_string(),
            procedure_count,
            total_revenue,
            avg_revenue: total_revenue / procedure_count as f64,
        })
        .collect();

    totals.sort_by(by_count_then_name);
    totals
}

fn by_count_then_name(a: &CategoryTotal, b: &CategoryTotal) -> Ordering {
    b.procedure_count
        .cmp(&a.procedure_count)
        .then_with(|| a.name.cmp(&b.name))
}
