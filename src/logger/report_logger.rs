use std::fmt::Write;
use terminal_size::{terminal_size, Width};
use crate::structs::analysis_round::AnalysisRound;
use crate::structs::connected_repository::ConnectedRepository;
use crate::structs::display_record::DisplayRecord;

const DEFAULT_RULE_WIDTH: usize = 60;
const MAX_RULE_WIDTH: usize = 100;

pub struct ReportLogger {}

impl ReportLogger {

    pub fn print_round(round: &AnalysisRound) {
        print!("{}", Self::render_round(round, Self::rule_width()));
    }

    pub fn print_repository(repository: &ConnectedRepository) {
        print!("{}", Self::render_repository(repository, Self::rule_width()));
    }

    pub fn render_round(round: &AnalysisRound, width: usize) -> String {
        let mut out = String::new();
        if let Some(warning) = &round.warning {
            let _ = writeln!(out, "\n⚠️  {}", warning);
        }
        for record in &round.records {
            Self::render_record(&mut out, record, width);
        }
        out
    }

    pub fn render_repository(repository: &ConnectedRepository, width: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "\n📦 {} [{}] {} ({})",
            repository.name,
            repository.provider.tag(),
            repository.status.label(),
            repository.url
        );
        for record in repository.results.iter().flatten() {
            Self::render_record(&mut out, record, width);
        }
        out
    }

    fn render_record(out: &mut String, record: &DisplayRecord, width: usize) {
        let rule = "━".repeat(width);
        let _ = writeln!(out, "\n{}", rule);
        match record.severity {
            Some(severity) => {
                let _ = writeln!(out, "{} [{}] {}", severity.emoji(), severity.name(), record.title);
            }
            None => {
                let _ = writeln!(out, "{}", record.title);
            }
        }
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "{}", record.content.trim_end());

        if let Some(code) = &record.code_block {
            let language = record.code_block_language.as_deref().unwrap_or_default();
            let _ = writeln!(out, "\n```{}\n{}\n```", language, code.trim_end());
        }
    }

    fn rule_width() -> usize {
        terminal_size()
            .map(|(Width(w), _)| usize::from(w).min(MAX_RULE_WIDTH))
            .unwrap_or(DEFAULT_RULE_WIDTH)
    }
}
