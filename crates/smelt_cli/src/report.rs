//! Text and JSON rendering of a `SmeltReport`.

use std::io::Write;

use anyhow::{Context, Result};
use smelt_core::SmeltReport;

const RULE: &str = "_____________________________________________";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

pub fn write_report(
    out: &mut impl Write,
    report: &SmeltReport,
    format: Format,
    show_feed: bool,
) -> Result<()> {
    match format {
        Format::Text => {
            if show_feed {
                write_feed(out, report).context("writing feed table")?;
            }
            write_text(out, report).context("writing report")?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, report).context("serializing report")?;
            writeln!(out).context("writing report")?;
        }
    }
    Ok(())
}

fn write_feed(out: &mut impl Write, report: &SmeltReport) -> std::io::Result<()> {
    writeln!(
        out,
        "Feed: {} compounds, total weight {}",
        report.compound_count, report.total_weight
    )?;
    for (element, mass) in report.elements.iter() {
        let pct = report
            .element_percentages
            .get(&element)
            .copied()
            .unwrap_or(0.0);
        writeln!(out, "  {:<6} {mass} ({pct:.2}%)", element.symbol())?;
    }
    writeln!(out, "{RULE}")
}

/// The fixed line sequence: stein, slag, then the balance.
fn write_text(out: &mut impl Write, report: &SmeltReport) -> std::io::Result<()> {
    let stein = &report.stein;
    let slag = &report.slag;
    let balance = &report.balance;

    writeln!(out, "Copper in Stein: {:.2}%", stein.cu_pct)?;
    writeln!(out, "Iron in Stein: {:.2}%", stein.fe_pct)?;
    writeln!(out, "Sulfur in Stein: {:.2}%", stein.s_pct)?;
    writeln!(out, "Gold Concentration in Stein: {} ppm", stein.au_ppm)?;
    writeln!(out, "Silver Concentration in Stein: {} ppm", stein.ag_ppm)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Stein weight: {} ({:.2}%)\n",
        balance.stein_weight, balance.stein_pct
    )?;

    writeln!(out, "SiO2 in Slag: {:.2}%", slag.sio2_pct)?;
    writeln!(out, "CaO in Slag: {:.2}%", slag.cao_pct)?;
    writeln!(out, "Al2O3 in Slag: {:.2}%", slag.al2o3_pct)?;
    writeln!(out, "FeO in Slag: {:.2}%", slag.feo_pct)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Total Slag Weight: {} ({:.2}%)\n",
        balance.slag_weight, balance.slag_pct
    )?;

    writeln!(
        out,
        "Melt weight: {} ({:.2}%)",
        balance.melt_weight, balance.melt_pct
    )?;
    writeln!(
        out,
        "Sublimates weight: {} ({:.2}%)",
        balance.sublimates_weight, balance.sublimates_pct
    )?;
    writeln!(
        out,
        "Total weight check: {} ({:.2}%)",
        balance.weight_check(),
        balance.share_sum()
    )
}
