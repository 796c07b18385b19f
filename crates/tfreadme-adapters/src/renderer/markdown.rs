//! README renderer.

use tfreadme_core::{
    application::ports::ReadmeRenderer,
    domain::{ModuleItem, Readme, Section},
    error::TfReadmeResult,
};
use tracing::instrument;

use super::table::{Align, Cell, Column, MarkdownTable, yes_no};

/// Renders a [`Readme`] as a markdown document with fixed sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new markdown renderer.
    pub fn new() -> Self {
        Self
    }

    fn section_body(self, section: Section, readme: &Readme) -> TfReadmeResult<String> {
        match section {
            Section::Overview | Section::Troubleshooting => Ok(String::new()),
            Section::Input => Ok(inputs_table(&readme.inputs).render()?),
            Section::Output => Ok(outputs_table(&readme.outputs).render()?),
            Section::Usage => Ok("```\n\n```\n".into()),
        }
    }
}

impl ReadmeRenderer for MarkdownRenderer {
    #[instrument(skip_all, fields(module = %readme.module_name))]
    fn render(&self, readme: &Readme) -> TfReadmeResult<String> {
        let mut out = format!("# {}\n", readme.title());

        for &section in readme.sections() {
            out.push_str(&format!("\n## {}\n", section.heading()));
            let body = self.section_body(section, readme)?;
            if !body.is_empty() {
                out.push('\n');
                out.push_str(&body);
            }
        }

        Ok(out)
    }
}

fn inputs_table(items: &[ModuleItem]) -> MarkdownTable {
    let mut table = MarkdownTable::new(vec![
        Column::new("Name", Align::None),
        Column::new("Description", Align::Left),
        Column::new("Type", Align::Center),
        Column::new("Default", Align::Center),
        Column::new("Required", Align::Center).with_mapping(yes_no),
    ]);
    for item in items {
        table.push_row(vec![
            item.name.as_str().into(),
            item.description.as_str().into(),
            item.var_type.as_str().into(),
            item.default_display().into(),
            Cell::Flag(item.required),
        ]);
    }
    table
}

fn outputs_table(items: &[ModuleItem]) -> MarkdownTable {
    let mut table = MarkdownTable::new(vec![
        Column::new("Name", Align::None),
        Column::new("Description", Align::Left),
        Column::new("Sensitive", Align::Center).with_mapping(yes_no),
    ]);
    for item in items {
        table.push_row(vec![
            item.name.as_str().into(),
            item.description.as_str().into(),
            Cell::Flag(item.sensitive),
        ]);
    }
    table
}
