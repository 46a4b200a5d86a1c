//! Plain-text unit card.

use std::fmt::Write;

use combat_core::{EffectiveStats, UnitReference};
use runtime::{AutomationReport, StepOutcome};

/// Renders the card the way it currently plays.
pub fn card(reference: &UnitReference, stats: &EffectiveStats) -> String {
    let mut out = String::new();

    let pv = stats
        .point_value
        .map_or_else(|| "-".to_owned(), |pv| pv.to_string());
    let _ = writeln!(out, "{} ({})  PV {}", stats.name, stats.unit_type, pv);
    let _ = writeln!(
        out,
        "  Armor {}/{}  Structure {}/{}  Heat {}",
        stats.armor, reference.armor, stats.structure, reference.structure, stats.heat
    );

    let movement = stats
        .movement
        .iter()
        .map(|(label, inches)| format!("{}\"{}", inches, label))
        .collect::<Vec<_>>()
        .join("/");
    let _ = writeln!(out, "  Move {}  TMM {}", movement, stats.tmm);

    let to_hit = &stats.to_hit;
    let _ = writeln!(
        out,
        "  To-hit S {}+  M {}+  L {}+  E {}+",
        to_hit.short, to_hit.medium, to_hit.long, to_hit.extreme
    );
    let _ = writeln!(out, "  Damage {}", stats.damage);
    for arc in &stats.arcs {
        let _ = writeln!(
            out,
            "  {:<10} STD {}  CAP {}  SCAP {}  MSL {}",
            arc.arc.as_ref(),
            arc.standard,
            arc.capital,
            arc.sub_capital,
            arc.missile
        );
    }

    if !stats.crits.is_empty() {
        let crits = stats
            .crits
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "  Crits  {}", crits);
    }
    if stats.engine_heat > 0 {
        let _ = writeln!(out, "  Engine +{} heat when firing", stats.engine_heat);
    }

    let mut flags = Vec::new();
    if stats.destroyed {
        flags.push("DESTROYED");
    }
    if stats.immobilized {
        flags.push("IMMOBILIZED");
    }
    if stats.dirty {
        flags.push("PREVIEW");
    }
    if !flags.is_empty() {
        let _ = writeln!(out, "  [{}]", flags.join("] ["));
    }

    out
}

/// One line per automation step.
pub fn report(report: &AutomationReport) -> String {
    let mut out = String::new();

    for step in &report.steps {
        let result = match &step.result {
            StepOutcome::NoEffect => "no effect".to_owned(),
            StepOutcome::CritApplied(key) => format!("{} hit", key),
            StepOutcome::CapReached(key) => format!("{} already at maximum", key),
            StepOutcome::AmmoNegated => "ammo hit negated".to_owned(),
            StepOutcome::ExtraDamage { amount, .. } => format!("ammo vented, {} damage", amount),
            StepOutcome::Destroyed => "unit destroyed".to_owned(),
            StepOutcome::ManualResolution => "resolve by hand".to_owned(),
        };
        let _ = writeln!(
            out,
            "  {} roll {} -> {} ({})",
            step.rolled.request.kind, step.rolled.total, result, step.rolled.request.hook
        );
    }
    for skipped in &report.skipped {
        let _ = writeln!(out, "  {} roll skipped: unit destroyed", skipped.kind);
    }

    out
}
