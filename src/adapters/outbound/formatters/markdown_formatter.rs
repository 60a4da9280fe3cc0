use crate::application::read_models::{
    CommitterView, DependencyNodeView, DependencyReportView, ImportReceiptView, ProjectView,
    ReportView, RepositoryView, SbomCatalogView, ScanDetailView, ScanSummaryView,
};
use crate::ports::outbound::ReportFormatter;
use crate::repository_insights::services::Page;
use crate::shared::Result;

/// Markdown table header for the scan list
const SCAN_TABLE_HEADER: &str =
    "| ID | Organisation | Start | End | Projects | Repositories | Builds | Commits | Committers |\n";

/// Markdown table separator line for the scan list
const SCAN_TABLE_SEPARATOR: &str =
    "|----|--------------|-------|-----|----------|--------------|--------|---------|------------|\n";

/// Placeholder for a missing value in a table cell
const NOT_AVAILABLE: &str = "N/A";

/// MarkdownFormatter adapter rendering reports as Markdown
///
/// Collections become tables; dependency trees become nested bullet lists.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn optional_cell(text: Option<&str>) -> String {
        Self::escape_markdown_table_cell(text.unwrap_or(NOT_AVAILABLE))
    }

    fn flag(value: bool) -> &'static str {
        if value {
            "yes"
        } else {
            "no"
        }
    }

    fn render_scan_table(&self, output: &mut String, scans: &[ScanSummaryView]) {
        if scans.is_empty() {
            output.push_str("No scans stored. Import one with `observes import <FILE>`.\n");
            return;
        }

        output.push_str(SCAN_TABLE_HEADER);
        output.push_str(SCAN_TABLE_SEPARATOR);
        for scan in scans {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&scan.id),
                Self::optional_cell(scan.organisation.as_deref()),
                Self::optional_cell(scan.scan_start.as_deref()),
                Self::optional_cell(scan.scan_end.as_deref()),
                scan.counts.projects,
                scan.counts.repositories,
                scan.counts.builds,
                scan.counts.commits,
                scan.counts.committers,
            ));
        }
    }

    fn render_scan_detail(&self, output: &mut String, detail: &ScanDetailView) {
        let summary = &detail.summary;
        let counts = &summary.counts;
        output.push_str(&format!("# Scan {}\n\n", summary.id));
        output.push_str(&format!(
            "- **Organisation**: {}\n- **Start**: {}\n- **End**: {}\n\n",
            summary.organisation.as_deref().unwrap_or(NOT_AVAILABLE),
            summary.scan_start.as_deref().unwrap_or(NOT_AVAILABLE),
            summary.scan_end.as_deref().unwrap_or(NOT_AVAILABLE),
        ));

        output.push_str("## Inventory\n\n| Entity | Count |\n|--------|-------|\n");
        for (label, count) in [
            ("Projects", counts.projects),
            ("Repositories", counts.repositories),
            ("Build definitions", counts.build_definitions),
            ("Builds", counts.builds),
            ("Commits", counts.commits),
            ("Committers", counts.committers),
            ("Artifacts", counts.artifacts),
            ("Build service accounts", counts.build_service_accounts),
        ] {
            output.push_str(&format!("| {} | {} |\n", label, count));
        }

        let states = &detail.states;
        output.push_str("\n## Repository States\n\n| State | Repositories |\n|-------|--------------|\n");
        for (label, count) in [
            ("Active", states.active),
            ("Stale", states.stale),
            ("Dormant", states.dormant),
            ("Disabled", states.disabled),
            ("Empty", states.empty),
        ] {
            output.push_str(&format!("| {} | {} |\n", label, count));
        }

        output.push_str("\n## Languages\n\n");
        if detail.languages.is_empty() {
            output.push_str("No language statistics in this scan.\n");
            return;
        }
        output.push_str("| Language | Bytes | Share |\n|----------|-------|-------|\n");
        for share in &detail.languages {
            output.push_str(&format!(
                "| {} | {} | {:.1}% |\n",
                Self::escape_markdown_table_cell(&share.language),
                share.bytes,
                share.percentage
            ));
        }
    }

    fn render_import_receipt(&self, output: &mut String, receipt: &ImportReceiptView) {
        output.push_str("# Scan Imported\n\n");
        output.push_str(&format!(
            "- **ID**: {}\n- **Organisation**: {}\n- **Stored scans**: {}\n",
            receipt.id,
            receipt.organisation.as_deref().unwrap_or(NOT_AVAILABLE),
            receipt.stored_scans
        ));
    }

    fn render_page_footer<T>(&self, output: &mut String, page: &Page<T>) {
        output.push_str(&format!(
            "\nPage {} of {} ({} item(s))\n",
            page.page,
            page.total_pages.max(1),
            page.total_items
        ));
    }

    fn render_repositories(&self, output: &mut String, page: &Page<RepositoryView>) {
        output.push_str("# Repositories\n\n");
        output.push_str("| Project | Repository | State | Disabled | Empty | Size | Last Commit |\n");
        output.push_str("|---------|------------|-------|----------|-------|------|-------------|\n");
        for repository in &page.items {
            let last_commit = repository
                .last_commit
                .map(|date| date.format("%Y-%m-%d").to_string());
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&repository.project),
                Self::escape_markdown_table_cell(&repository.name),
                repository.state,
                Self::flag(repository.disabled),
                Self::flag(repository.empty),
                repository.size,
                last_commit.as_deref().unwrap_or("never"),
            ));
        }
        self.render_page_footer(output, page);
    }

    fn render_projects(&self, output: &mut String, page: &Page<ProjectView>) {
        output.push_str("# Projects\n\n");
        output.push_str("| Project | Repositories | Stale or Dormant |\n");
        output.push_str("|---------|--------------|------------------|\n");
        for project in &page.items {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&project.name),
                project.repositories,
                project.inactive_repositories
            ));
        }
        self.render_page_footer(output, page);
    }

    fn render_committers(&self, output: &mut String, page: &Page<CommitterView>) {
        output.push_str("# Committers\n\n| Committer | Commits |\n|-----------|---------|\n");
        for committer in &page.items {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&committer.name),
                committer.commit_count
            ));
        }
        self.render_page_footer(output, page);
    }

    fn render_list(&self, output: &mut String, title: &str, items: &[String]) {
        output.push_str(&format!("# {}\n\n", title));
        if items.is_empty() {
            output.push_str("Nothing found.\n");
        }
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
    }

    fn render_catalog(&self, output: &mut String, catalog: &SbomCatalogView) {
        output.push_str("# SBOM Catalog\n\n| Component | Versions |\n|-----------|----------|\n");
        for entry in &catalog.entries {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&entry.component),
                Self::escape_markdown_table_cell(&entry.versions.join(", "))
            ));
        }
    }

    fn render_dependencies(&self, output: &mut String, report: &DependencyReportView) {
        output.push_str(&format!(
            "# Dependencies of {} {}\n\n",
            report.component, report.version
        ));
        output.push_str(&format!(
            "Root reference: `{}`\n\n",
            report.root_reference.as_deref().unwrap_or(NOT_AVAILABLE)
        ));

        output.push_str("## Direct Dependencies\n\n");
        if report.direct_dependencies.is_empty() {
            output.push_str("No direct dependencies found.\n");
            return;
        }
        output.push_str("| Package | Version | License | bom-ref |\n");
        output.push_str("|---------|---------|---------|---------|\n");
        for direct in &report.direct_dependencies {
            let component = &direct.component;
            let licenses = if component.licenses.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                component.licenses.join(", ")
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&Self::qualified_name(
                    component.group.as_deref(),
                    &component.name
                )),
                Self::escape_markdown_table_cell(&component.version),
                Self::escape_markdown_table_cell(&licenses),
                Self::escape_markdown_table_cell(&component.bom_ref),
            ));
        }

        let expanded: Vec<_> = report
            .direct_dependencies
            .iter()
            .filter_map(|d| d.children.as_ref().map(|children| (d, children)))
            .collect();
        if expanded.is_empty() {
            return;
        }

        output.push_str("\n## Dependency Trees\n");
        for (direct, children) in expanded {
            output.push_str(&format!(
                "\n### {} {}\n\n",
                direct.component.name, direct.component.version
            ));
            if children.is_empty() {
                output.push_str("No transitive dependencies.\n");
            }
            self.render_tree(output, children, 0);
        }
    }

    fn render_tree(&self, output: &mut String, nodes: &[DependencyNodeView], level: usize) {
        for node in nodes {
            output.push_str(&format!(
                "{}- {} {}\n",
                "  ".repeat(level),
                Self::qualified_name(node.component.group.as_deref(), &node.component.name),
                node.component.version
            ));
            self.render_tree(output, &node.children, level + 1);
        }
    }

    fn qualified_name(group: Option<&str>, name: &str) -> String {
        match group {
            Some(group) if !group.is_empty() => format!("{}/{}", group, name),
            _ => name.to_string(),
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ReportView) -> Result<String> {
        let mut output = String::new();

        match report {
            ReportView::ScanList(scans) => {
                output.push_str("# Scans\n\n");
                self.render_scan_table(&mut output, scans);
            }
            ReportView::ScanDetail(detail) => self.render_scan_detail(&mut output, detail),
            ReportView::ScanDeleted { deleted, remaining } => {
                output.push_str(&format!("# Scan Deleted\n\nDeleted scan `{}`.\n\n", deleted));
                output.push_str("## Remaining Scans\n\n");
                self.render_scan_table(&mut output, remaining);
            }
            ReportView::ImportReceipt(receipt) => self.render_import_receipt(&mut output, receipt),
            ReportView::Repositories(page) => self.render_repositories(&mut output, page),
            ReportView::Projects(page) => self.render_projects(&mut output, page),
            ReportView::Committers(page) => self.render_committers(&mut output, page),
            ReportView::Components(components) => {
                self.render_list(&mut output, "SBOM Components", components)
            }
            ReportView::Versions {
                component,
                versions,
            } => self.render_list(&mut output, &format!("Versions of {}", component), versions),
            ReportView::Catalog(catalog) => self.render_catalog(&mut output, catalog),
            ReportView::Dependencies(report) => self.render_dependencies(&mut output, report),
        }

        Ok(output)
    }
}
