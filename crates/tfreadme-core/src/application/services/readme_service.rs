//! Readme Service - main application orchestrator.
//!
//! This service coordinates the README generation workflow:
//! 1. Read and parse the variables file, extract `variable` blocks
//! 2. Read and parse the outputs file, extract `output` blocks
//! 3. Render the README
//!
//! The first failure aborts the run.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{DocumentParser, Filesystem, ReadmeRenderer},
    },
    domain::{BlockKind, ModuleItem, Readme, extract_items},
    error::{InFileExt, TfReadmeResult},
};

/// Input of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeRequest {
    pub module_name: String,
    pub variables_path: PathBuf,
    pub outputs_path: PathBuf,
}

impl ReadmeRequest {
    pub fn new(
        module_name: impl Into<String>,
        variables_path: impl Into<PathBuf>,
        outputs_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            variables_path: variables_path.into(),
            outputs_path: outputs_path.into(),
        }
    }
}

/// Main README service.
pub struct ReadmeService {
    filesystem: Box<dyn Filesystem>,
    parser: Box<dyn DocumentParser>,
    renderer: Box<dyn ReadmeRenderer>,
}

impl ReadmeService {
    /// Create a new readme service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tfreadme_core::application::ReadmeService;
    ///
    /// let service = ReadmeService::new(
    ///     filesystem, // impl Filesystem
    ///     parser,     // impl DocumentParser
    ///     renderer,   // impl ReadmeRenderer
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        parser: Box<dyn DocumentParser>,
        renderer: Box<dyn ReadmeRenderer>,
    ) -> Self {
        Self {
            filesystem,
            parser,
            renderer,
        }
    }

    /// Read both source files and build the README model.
    #[instrument(
        skip_all,
        fields(
            module = %request.module_name,
            variables = %request.variables_path.display(),
            outputs = %request.outputs_path.display()
        )
    )]
    pub fn load(&self, request: &ReadmeRequest) -> TfReadmeResult<Readme> {
        let inputs = self.load_items(&request.variables_path, BlockKind::Variable)?;
        let outputs = self.load_items(&request.outputs_path, BlockKind::Output)?;

        info!(
            inputs = inputs.len(),
            outputs = outputs.len(),
            "Module metadata extracted"
        );

        Ok(Readme::new(request.module_name.as_str(), inputs, outputs))
    }

    /// Build the README and render it.
    pub fn generate(&self, request: &ReadmeRequest) -> TfReadmeResult<String> {
        let readme = self.load(request)?;
        self.renderer.render(&readme)
    }

    /// Build the README and write it to `destination`.
    ///
    /// An existing file is only replaced when `overwrite` is set; the check
    /// happens before any source file is read.
    #[instrument(skip_all, fields(destination = %destination.display()))]
    pub fn write(
        &self,
        request: &ReadmeRequest,
        destination: &Path,
        overwrite: bool,
    ) -> TfReadmeResult<()> {
        if !overwrite && self.filesystem.exists(destination) {
            return Err(ApplicationError::OutputExists {
                path: destination.to_path_buf(),
            }
            .into());
        }

        let markdown = self.generate(request)?;
        self.filesystem.write_file(destination, &markdown)?;

        info!(bytes = markdown.len(), "README written");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn load_items(&self, path: &Path, kind: BlockKind) -> TfReadmeResult<Vec<ModuleItem>> {
        let source = self.filesystem.read_to_string(path)?;
        let document = self.parser.parse(&source, path)?;
        let items = extract_items(&document, kind).in_file(path)?;

        if items.is_empty() {
            info!("No {} detected.", kind.plural());
        } else {
            debug!(count = items.len(), block = %kind, "Blocks extracted");
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockDocumentParser, MockFilesystem, MockReadmeRenderer};
    use crate::domain::Node;
    use crate::error::{ErrorCategory, TfReadmeError};

    fn request() -> ReadmeRequest {
        ReadmeRequest::new("network", "variables.tf", "outputs.tf")
    }

    fn variables_doc() -> Node {
        Node::object([(
            "variable",
            Node::object([("cidr", Node::object([("type", Node::string("string"))]))]),
        )])
    }

    fn outputs_doc() -> Node {
        Node::object([(
            "output",
            Node::object([("vpc_id", Node::object([("description", Node::string("VPC"))]))]),
        )])
    }

    fn parser_for_both() -> MockDocumentParser {
        let mut parser = MockDocumentParser::new();
        parser.expect_parse().returning(|source, _| match source {
            "vars" => Ok(variables_doc()),
            _ => Ok(outputs_doc()),
        });
        parser
    }

    fn fs_with_sources() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|path| {
            if path == Path::new("variables.tf") {
                Ok("vars".into())
            } else {
                Ok("outs".into())
            }
        });
        fs
    }

    #[test]
    fn load_builds_readme_from_both_files() {
        let service = ReadmeService::new(
            Box::new(fs_with_sources()),
            Box::new(parser_for_both()),
            Box::new(MockReadmeRenderer::new()),
        );

        let readme = service.load(&request()).unwrap();
        assert_eq!(readme.module_name, "network");
        assert_eq!(readme.inputs.len(), 1);
        assert_eq!(readme.inputs[0].name, "cidr");
        assert!(readme.inputs[0].required);
        assert_eq!(readme.outputs[0].description, "VPC");
    }

    #[test]
    fn generate_passes_readme_to_renderer() {
        let mut renderer = MockReadmeRenderer::new();
        renderer
            .expect_render()
            .withf(|readme| readme.inputs.len() == 1 && readme.outputs.len() == 1)
            .times(1)
            .returning(|readme| Ok(format!("# {}", readme.title())));

        let service = ReadmeService::new(
            Box::new(fs_with_sources()),
            Box::new(parser_for_both()),
            Box::new(renderer),
        );

        assert_eq!(
            service.generate(&request()).unwrap(),
            "# NETWORK Terraform Module"
        );
    }

    #[test]
    fn read_failure_aborts_before_parsing() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|path| {
            Err(ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into())
        });
        let mut parser = MockDocumentParser::new();
        parser.expect_parse().never();

        let service = ReadmeService::new(
            Box::new(fs),
            Box::new(parser),
            Box::new(MockReadmeRenderer::new()),
        );

        let err = service.load(&request()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn shape_error_names_the_file() {
        let mut parser = MockDocumentParser::new();
        parser
            .expect_parse()
            .returning(|_, _| Ok(Node::object([("variable", Node::Bool(true))])));

        let service = ReadmeService::new(
            Box::new(fs_with_sources()),
            Box::new(parser),
            Box::new(MockReadmeRenderer::new()),
        );

        let err = service.load(&request()).unwrap_err();
        assert!(matches!(err, TfReadmeError::InFile { ref path, .. } if path == Path::new("variables.tf")));
    }

    #[test]
    fn missing_blocks_yield_empty_tables() {
        let mut parser = MockDocumentParser::new();
        parser
            .expect_parse()
            .returning(|_, _| Ok(Node::Object(vec![])));

        let service = ReadmeService::new(
            Box::new(fs_with_sources()),
            Box::new(parser),
            Box::new(MockReadmeRenderer::new()),
        );

        let readme = service.load(&request()).unwrap();
        assert!(readme.inputs.is_empty());
        assert!(readme.outputs.is_empty());
    }

    #[test]
    fn write_refuses_to_overwrite() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        let service = ReadmeService::new(
            Box::new(fs),
            Box::new(MockDocumentParser::new()),
            Box::new(MockReadmeRenderer::new()),
        );

        let err = service
            .write(&request(), Path::new("README.md"), false)
            .unwrap_err();
        assert_eq!(
            err,
            TfReadmeError::Application(ApplicationError::OutputExists {
                path: PathBuf::from("README.md")
            })
        );
    }

    #[test]
    fn write_with_overwrite_writes_rendered_markdown() {
        let mut fs = fs_with_sources();
        fs.expect_exists().never();
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("README.md") && content == "rendered")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut renderer = MockReadmeRenderer::new();
        renderer
            .expect_render()
            .returning(|_| Ok("rendered".into()));

        let service = ReadmeService::new(
            Box::new(fs),
            Box::new(parser_for_both()),
            Box::new(renderer),
        );

        service
            .write(&request(), Path::new("README.md"), true)
            .unwrap();
    }
}
