//! The README model handed to renderers.

use crate::domain::{entities::item::ModuleItem, value_objects::Section};

/// Everything needed to render a module README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readme {
    pub module_name: String,
    pub inputs: Vec<ModuleItem>,
    pub outputs: Vec<ModuleItem>,
}

impl Readme {
    pub fn new(
        module_name: impl Into<String>,
        inputs: Vec<ModuleItem>,
        outputs: Vec<ModuleItem>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            inputs,
            outputs,
        }
    }

    /// Document title, e.g. `NETWORK Terraform Module`.
    pub fn title(&self) -> String {
        format!("{} Terraform Module", self.module_name.to_uppercase())
    }

    /// Sections in the order they appear in the document.
    pub fn sections(&self) -> &'static [Section] {
        Section::ALL
    }
}
