use std::io::Write;

use inquest_core::AnalysisReport;
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print a formatted analysis report to stdout.
pub fn print_report(report: &AnalysisReport, color: ColorMode) {
    let mut stdout = std::io::stdout().lock();
    // stdout write failures (closed pipe) are not actionable here
    let _ = write_report(&mut stdout, report, color);
}

fn write_report(
    w: &mut dyn Write,
    report: &AnalysisReport,
    color: ColorMode,
) -> std::io::Result<()> {
    heading(w, "Metadata", color)?;
    field(w, "Case number", report.metadata.case_number.as_deref().unwrap_or("-"))?;
    field(w, "Dates", &join_or_dash(&report.metadata.dates))?;
    field(w, "People", &join_or_dash(&report.metadata.people))?;
    field(w, "Organizations", &join_or_dash(&report.metadata.organizations))?;
    field(w, "Locations", &join_or_dash(&report.metadata.locations))?;
    writeln!(w)?;

    heading(w, "Summary", color)?;
    writeln!(w, "{}", report.summary)?;
    writeln!(w)?;

    heading(w, "Key findings", color)?;
    if report.key_findings.is_empty() {
        writeln!(w, "(none detected)")?;
    } else {
        for (i, finding) in report.key_findings.iter().enumerate() {
            if color.enabled() {
                writeln!(w, "{} {}", format!("{}.", i + 1).green(), finding)?;
            } else {
                writeln!(w, "{}. {}", i + 1, finding)?;
            }
        }
    }
    writeln!(w)?;

    heading(w, "Statistics", color)?;
    field(w, "Words", &report.statistics.word_count.to_string())?;
    field(w, "Sentences", &report.statistics.sentence_count.to_string())?;
    field(w, "Summary tokens", &report.statistics.summary_length.to_string())?;
    Ok(())
}

fn heading(w: &mut dyn Write, title: &str, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", title.bold().underline())
    } else {
        writeln!(w, "{title}")
    }
}

fn field(w: &mut dyn Write, name: &str, value: &str) -> std::io::Result<()> {
    writeln!(w, "  {name}: {value}")
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inquest_core::DocumentAnalyzer;

    #[test]
    fn plain_report_renders_every_section() {
        let report = DocumentAnalyzer::new()
            .analyze_text(
                "Case No. 2024-11-003 was reviewed on 5/02/2024. The stain tested positive.",
                5,
            )
            .unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &report, ColorMode(false)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Case number: 2024-11-003"));
        assert!(text.contains("Summary"));
        assert!(text.contains("tested positive"));
        assert!(text.contains("Words:"));
    }
}
