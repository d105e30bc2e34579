// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::output::{OutputContext, OutputOpts, Styles, clap_styles};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use owo_colors::OwoColorize;
use std::{
    fmt::{self, Write as _},
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};
use testprism_core::{
    distribution::{DistributionRegistry, DistributionSlice},
    execution::current_execution,
    filter::FilterConfig,
    organize::OrganizationRegistry,
    sort::SortRegistry,
    tree::TestTreeNode,
    view::{TestTreeView, TestTreeViewBuilder},
};
use testprism_metadata::{ExecutionStatus, Test, TestReport};

/// Terminal viewer for testprism test reports.
#[derive(Debug, Parser)]
#[command(
    name = "testprism",
    version,
    styles = clap_styles::style(),
    max_term_width = 100,
)]
pub struct TestprismApp {
    #[clap(flatten)]
    output: OutputOpts,

    #[command(subcommand)]
    command: Command,
}

impl TestprismApp {
    /// Executes the selected command.
    pub fn exec(self) -> Result<()> {
        let output = self.output.init();
        self.command.exec(output)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the organized test tree
    Tree {
        /// Path to the report JSON
        #[arg(long, value_name = "PATH")]
        report: PathBuf,

        /// Organization type (folder, status)
        #[arg(long, value_name = "TYPE", default_value = "folder")]
        organize: String,

        /// Sort strategies to apply, in order
        #[arg(long, value_name = "TYPE")]
        sort: Vec<String>,

        /// Keep only tests whose name contains this substring
        #[arg(long, value_name = "SUBSTRING")]
        filter_name: Option<String>,

        /// Keep only tests with one of these current statuses
        #[arg(long, value_name = "STATUS")]
        status: Vec<ExecutionStatus>,

        /// Keep only tests carrying all of these tags
        #[arg(long, value_name = "TAG")]
        tag: Vec<String>,
    },

    /// Print a distribution summary
    Distribution {
        /// Path to the report JSON
        #[arg(long, value_name = "PATH")]
        report: PathBuf,

        /// Distribution type (status, duration)
        #[arg(long, value_name = "TYPE", default_value = "status")]
        by: String,
    },
}

impl Command {
    fn exec(self, output: OutputContext) -> Result<()> {
        let styles = output.stdout_styles();
        match self {
            Command::Tree {
                report,
                organize,
                sort,
                filter_name,
                status,
                tag,
            } => {
                let report = load_report(&report)?;

                let config = FilterConfig {
                    name: filter_name,
                    statuses: status,
                    tags: tag,
                };
                let organization = OrganizationRegistry::new().create(&organize);
                let sort_registry = SortRegistry::new();
                let mut builder =
                    TestTreeViewBuilder::new(organization).with_filter(config.build());
                for sort_type in &sort {
                    builder = builder.with_sort(sort_registry.create(sort_type)?);
                }

                let view = builder.build(&report.tests);
                let mut out = String::new();
                render_tree(&mut out, &view, &styles)?;
                print!("{out}");
                Ok(())
            }
            Command::Distribution { report, by } => {
                let report = load_report(&report)?;
                let strategy = DistributionRegistry::new().create(&by, None)?;

                let refs: Vec<&Test> = report.tests.iter().collect();
                let slices = strategy.distribution(&refs);
                let mut out = String::new();
                render_distribution(&mut out, &slices, &styles)?;
                print!("{out}");
                Ok(())
            }
        }
    }
}

fn load_report(path: &Path) -> Result<TestReport> {
    let file = File::open(path)
        .wrap_err_with(|| format!("failed to open report at {}", path.display()))?;
    let report: TestReport = serde_json::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("failed to parse report at {}", path.display()))?;
    Ok(report)
}

fn render_tree(out: &mut String, view: &TestTreeView<'_>, styles: &Styles) -> fmt::Result {
    for node in view.roots() {
        render_node(out, node, 0, styles)?;
    }
    Ok(())
}

fn render_node(
    out: &mut String,
    node: &TestTreeNode<'_>,
    depth: usize,
    styles: &Styles,
) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match node.test() {
        Some(test) => match current_execution(test) {
            Some(resolved) => {
                writeln!(
                    out,
                    "{indent}{}: {}, {}",
                    node.name.style(styles.for_status(resolved.status)),
                    resolved.status,
                    humanize(resolved.duration_ms).style(styles.duration),
                )?;
            }
            None => {
                writeln!(
                    out,
                    "{indent}{}: never run",
                    node.name.style(styles.unknown),
                )?;
            }
        },
        None => {
            let counts = node.test_count().unwrap_or_default();
            let total_duration_ms = node.total_duration_ms().unwrap_or_default();
            write!(
                out,
                "{indent}{}: {} {}",
                node.name.style(styles.group),
                counts.total().style(styles.count),
                if counts.total() == 1 { "test" } else { "tests" },
            )?;
            let mut breakdown = Vec::new();
            for status in ExecutionStatus::ALL {
                let count = counts.get(status);
                if count > 0 {
                    breakdown.push(format!(
                        "{count} {}",
                        status.name().style(styles.for_status(status))
                    ));
                }
            }
            if !breakdown.is_empty() {
                write!(out, " ({})", breakdown.join(", "))?;
            }
            writeln!(out, ", {}", humanize(total_duration_ms).style(styles.duration))?;
            for child in node.children() {
                render_node(out, child, depth + 1, styles)?;
            }
        }
    }
    Ok(())
}

fn render_distribution(
    out: &mut String,
    slices: &[DistributionSlice],
    styles: &Styles,
) -> fmt::Result {
    let width = slices
        .iter()
        .map(|slice| slice.label.len())
        .max()
        .unwrap_or_default();
    for slice in slices {
        let style = match slice.label.parse::<ExecutionStatus>() {
            Ok(status) => styles.for_status(status),
            Err(_) => styles.count,
        };
        writeln!(
            out,
            "{:<width$}  {}",
            slice.label.style(style),
            slice.count.style(styles.count),
        )?;
    }
    Ok(())
}

fn humanize(millis: u64) -> String {
    humantime::format_duration(Duration::from_millis(millis)).to_string()
}
