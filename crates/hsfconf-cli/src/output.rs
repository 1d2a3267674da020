//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use hsfconf_domain::{EndpointDefinition, MethodSpecial};
use hsfconf_registry::RegistryEntry;
use hsfconf_resolver::ScanReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format registry entries.
    pub fn format_entries(&self, entries: &[RegistryEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Table => Ok(self.format_entries_table(entries)),
        }
    }

    fn format_entries_table(&self, entries: &[RegistryEntry]) -> String {
        if entries.is_empty() {
            return self.colorize("No endpoints registered.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Kind", "Interface", "Version", "Group", "Target", "Timeouts", "Methods"]);

        for entry in entries {
            let (target, timeouts) = match &entry.definition {
                EndpointDefinition::Consumer(c) => (c.target.clone().unwrap_or_default(), String::new()),
                EndpointDefinition::Provider(p) => (
                    p.target.clone(),
                    format!("{}ms / {}s", p.client_timeout, p.client_idle_timeout),
                ),
            };
            builder.push_record([
                entry.name.clone(),
                entry.definition.kind().as_str().to_string(),
                entry.definition.interface_name().to_string(),
                entry.definition.version().unwrap_or("-").to_string(),
                entry.definition.group().unwrap_or("-").to_string(),
                target,
                timeouts,
                format_method_specials(entry.definition.method_specials()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a scan report.
    pub fn format_report(&self, report: &ScanReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let failures: Vec<serde_json::Value> = report
                    .failures
                    .iter()
                    .map(|f| {
                        serde_json::json!({
                            "component": f.component,
                            "subject": f.subject,
                            "error": f.error.to_string(),
                        })
                    })
                    .collect();
                let json = serde_json::json!({
                    "providers": report.providers.len(),
                    "consumers": report.consumers.len(),
                    "skipped": report.providers_skipped.len() + report.consumers_skipped.len(),
                    "failures": failures,
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut lines = Vec::with_capacity(report.failures.len() + 1);
                if report.is_success() {
                    lines.push(self.success(&report.summary()));
                } else {
                    lines.push(self.error(&report.summary()));
                }
                for failure in &report.failures {
                    lines.push(self.error(&format!(
                        "{} ({}): {}",
                        failure.component, failure.subject, failure.error
                    )));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn format_method_specials(specials: Option<&[MethodSpecial]>) -> String {
    specials
        .map(|specials| {
            specials
                .iter()
                .map(|s| format!("{}:{}", s.method_name, s.client_timeout))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}
