//! Console output utilities
//!
//! Plain-text rendering of a `DashboardView` for terminals.

use std::fmt::Write;

use crate::algorithm::adoption::{format_currency, format_growth};
use crate::dashboard::DashboardView;
use crate::models::CategoryTotal;

/// Widest bar drawn for a chart row
const BAR_WIDTH: usize = 40;

/// Render the whole dashboard as text panels
#[must_use]
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "MedTech Commercial Adoption Analysis");
    let _ = writeln!(
        out,
        "Region: {} | Specialty: {} | Matching procedures: {}",
        view.selection.region, view.selection.specialty, view.record_count
    );
    if let Some((first, last)) = view.date_range {
        let _ = writeln!(out, "Procedure dates: {first} to {last}");
    }
    let _ = writeln!(out, "Regions: {}", view.options.regions.join(", "));
    let _ = writeln!(out, "Specialties: {}", view.options.specialties.join(", "));

    let _ = writeln!(out, "\n1. {}", view.titles.adoption);
    let peak = view
        .adoption_series
        .iter()
        .map(|p| p.new_adopter_count)
        .max()
        .unwrap_or(0);
    for point in &view.adoption_series {
        let _ = writeln!(
            out,
            "  {}  {:>5}  {}",
            point.month,
            point.new_adopter_count,
            bar(point.new_adopter_count, peak)
        );
    }
    let _ = writeln!(
        out,
        "  Month-over-month growth: {}",
        format_growth(view.month_over_month_growth)
    );

    let _ = writeln!(out, "\n2. {}", view.titles.regions);
    render_totals(&mut out, &view.region_totals, false);

    let _ = writeln!(out, "\n3. {}", view.titles.specialties);
    render_totals(&mut out, &view.specialty_totals, true);

    let _ = writeln!(out, "\nActionable Insight");
    let _ = writeln!(out, "  {}", view.summary);
    for note in &view.focus_notes {
        let _ = writeln!(out, "  {note}");
    }

    out
}

/// Print the rendered dashboard to stdout
pub fn print_dashboard(view: &DashboardView) {
    print!("{}", render_dashboard(view));
}

fn render_totals(out: &mut String, totals: &[CategoryTotal], with_revenue: bool) {
    let peak = totals.first().map_or(0, |t| t.procedure_count);
    let width = totals.iter().map(|t| t.name.len()).max().unwrap_or(0);
    for total in totals {
        let _ = write!(
            out,
            "  {:<width$}  {:>6}  {}",
            total.name,
            total.procedure_count,
            bar(total.procedure_count, peak)
        );
        if with_revenue {
            let _ = write!(out, "  avg ${}", format_currency(total.avg_revenue));
        }
        out.push('\n');
    }
}

fn bar(value: usize, peak: usize) -> String {
    if peak == 0 {
        return String::new();
    }
    "#".repeat((value * BAR_WIDTH).div_ceil(peak))
}
