//! Human-oriented colored terminal output.

use colored::Colorize;

use crate::findings::{AuditReport, Category};
use crate::reporter::Reporter;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn category_label(&self, category: Category) -> colored::ColoredString {
        let label = format!("[{}]", category.issue_label());
        match category {
            Category::OverlyPermissiveRole => label.red().bold(),
            Category::UserWithoutMfa => label.yellow().bold(),
            Category::ExposedSecurityGroup => label.red().bold(),
            Category::UnusedKeyPair => label.cyan(),
        }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &AuditReport) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{} {} (scanned at {})\n\n",
            "Audit:".bold(),
            report.target,
            report.scanned_at
        ));

        if report.findings.is_empty() {
            out.push_str(&format!("{}\n", "No findings.".green().bold()));
        } else {
            for finding in &report.findings {
                out.push_str(&format!(
                    "{} {}\n",
                    self.category_label(finding.category),
                    finding.details_column()
                ));
            }
            out.push('\n');
            out.push_str(&format!(
                "{} {} finding(s): {} overly permissive role(s), {} user(s) without MFA, {} exposed group rule(s), {} unused key pair(s)\n",
                "Summary:".bold(),
                report.summary.total(),
                report.summary.overly_permissive_roles,
                report.summary.users_without_mfa,
                report.summary.exposed_security_groups,
                report.summary.unused_key_pairs,
            ));
        }

        for failure in &report.failed_detectors {
            out.push_str(&format!(
                "{} {} detector failed: {}\n",
                "ERROR:".red().bold(),
                failure.category.issue_label(),
                failure.message
            ));
        }

        if !report.warnings.is_empty() {
            if self.verbose {
                for warning in &report.warnings {
                    out.push_str(&format!(
                        "{} skipped {}: {}\n",
                        "WARN:".yellow(),
                        warning.resource,
                        warning.message
                    ));
                }
            } else {
                out.push_str(&format!(
                    "{} {} resource(s) skipped, rerun with --verbose for details\n",
                    "WARN:".yellow(),
                    report.warnings.len()
                ));
            }
        }

        out
    }
}
