//! Plain-text rendering of reports.

use std::io::{self, Write};

use pity_runtime::{BaseRates, ProbabilityTable, ServiceError, SimulationReport, StateReport};

const RULE_WIDTH: usize = 60;

pub fn header(w: &mut impl Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(w, "\n{rule}")?;
    writeln!(w, "  {title}")?;
    writeln!(w, "{rule}")
}

pub fn error(w: &mut impl Write, message: impl std::fmt::Display) -> io::Result<()> {
    writeln!(w, "\n  Error: {message}")
}

/// Reports a failed pull service call, worded by who is at fault.
pub fn service_error(w: &mut impl Write, err: &ServiceError) -> io::Result<()> {
    match err.severity() {
        Some(severity) if severity.is_validation() => error(
            w,
            format!("Invalid data: {err}. Re-enter your state (option 2)."),
        ),
        Some(_) => error(w, format!("Not allowed right now: {err}.")),
        None => error(w, format!("Storage error: {err}. The result was not saved.")),
    }
}

pub fn base_rates(w: &mut impl Write, rates: &BaseRates) -> io::Result<()> {
    header(w, "RATES AND PITY SYSTEM")?;

    writeln!(w, "\nBase rates:")?;
    writeln!(w, "  Rare:   {:>6.2}%", rates.rare_percent)?;
    writeln!(w, "  Minor:  {:>6.2}%", rates.minor_percent)?;
    writeln!(w, "  Common: {:>6.2}%", rates.common_percent)?;

    writeln!(w, "\nPity system:")?;
    writeln!(
        w,
        "  Minor tier guaranteed every {} pulls",
        rates.minor_guarantee_window
    )?;
    writeln!(
        w,
        "  Soft pity from pull {} (+{:.2}% per pull)",
        rates.soft_pity_start, rates.soft_pity_increment_percent
    )?;
    writeln!(w, "  Hard pity at pull {}", rates.hard_pity)?;
    writeln!(
        w,
        "  Featured guaranteed after {} banner pulls",
        rates.featured_guarantee
    )?;
    writeln!(
        w,
        "  Bonus repeat after {} total pulls",
        rates.bonus_repeat_threshold
    )?;
    writeln!(
        w,
        "  Free pull after {} banner pulls",
        rates.free_pull_threshold
    )?;

    writeln!(w, "\n50/50 at hard pity:")?;
    writeln!(w, "  Win chance:              {:.2}%", rates.tie_break_percent)?;
    writeln!(
        w,
        "  On a loss, each prior limited: {:.2}%",
        rates.prior_variant_percent
    )?;
    writeln!(
        w,
        "  On a loss, standard rare:      {:.2}%",
        rates.standard_variant_percent
    )?;

    writeln!(
        w,
        "\nExpected pulls to a rare from zero pity: {:.2}",
        rates.expected_pulls_to_rare
    )
}

pub fn state_report(w: &mut impl Write, report: &StateReport) -> io::Result<()> {
    header(w, "CURRENT STATE")?;

    writeln!(w, "\nCounters:")?;
    writeln!(w, "  Pity:          {:>4}", report.pity)?;
    writeln!(w, "  Banner (spark): {:>3}", report.spark)?;
    writeln!(w, "  Dupe:          {:>4}", report.dupe)?;
    writeln!(
        w,
        "  Since minor:   {:>4}  (total pulls {}, banner pulls {})",
        report.pulls_since_minor, report.total_pulls, report.banner_pulls
    )?;

    writeln!(w, "\nPulls remaining:")?;
    writeln!(w, "  Minor guarantee:  {:>4}", report.pulls_to_minor_guarantee)?;
    writeln!(w, "  Soft pity:        {:>4}", report.pulls_to_soft_pity)?;
    writeln!(w, "  Hard pity:        {:>4}", report.pulls_to_hard_pity)?;
    writeln!(w, "  Featured:         {:>4}", report.pulls_to_featured)?;
    writeln!(w, "  Bonus repeat:     {:>4}", report.pulls_to_bonus_repeat)?;
    writeln!(w, "  Free pull:        {:>4}", report.pulls_to_free_pull)?;

    writeln!(w)?;
    if report.at_hard_pity {
        writeln!(w, "  * At hard pity: the next pull is a guaranteed rare.")?;
    } else if report.in_soft_pity {
        writeln!(w, "  * In soft pity: rare odds rise every pull.")?;
    }
    if report.at_featured_guarantee {
        writeln!(w, "  * Featured guarantee active: the next rare is featured.")?;
    }
    Ok(())
}

pub fn probability_table(
    w: &mut impl Write,
    title: &str,
    table: &ProbabilityTable,
) -> io::Result<()> {
    header(w, title)?;
    writeln!(
        w,
        "{:>6} | {:>5} | {:>11} | {:>10}",
        "Pull", "Pity", "Probability", "Cumulative"
    )?;
    writeln!(w, "{}", "-".repeat(RULE_WIDTH))?;
    for row in table.rows() {
        writeln!(
            w,
            "{:>6} | {:>5} | {:>11} | {:>10}",
            row.pull_number,
            row.pity,
            row.probability.to_string(),
            row.cumulative.to_string()
        )?;
    }
    Ok(())
}

pub fn simulation(w: &mut impl Write, report: &SimulationReport) -> io::Result<()> {
    header(w, "50/50 RESULT")?;
    writeln!(w, "\n  {}", report.message)?;
    writeln!(
        w,
        "\n  New pity: {}  Banner pulls: {}",
        report.state.pulls_since_rare(),
        report.state.banner_pulls()
    )
}
