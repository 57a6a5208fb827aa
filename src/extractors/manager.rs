//! ExtractorManager - Public API for declaration model extraction
//!
//! Turns Go files into syntax trees, drives the Go extractor over each
//! compilation unit and links the accumulated model. Single files and whole
//! directories go through the same unit pipeline; only directory scans group
//! units by package and honour the exclusion marker.

use crate::error::{ParseError, Result};
use crate::extractors::base::{BaseExtractor, ParseOptions, ParsedSources};
use crate::extractors::go::GoExtractor;
use crate::extractors::linker;
use crate::language::new_parser;
use crate::utils::build_constraints::carries_exclusion_marker;
use crate::utils::file_utils::{list_source_files, read_file_content};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tree_sitter::Tree;

/// One parsed source file, ready to be visited
struct CompilationUnit {
    path: PathBuf,
    content: String,
    tree: Tree,
    package_name: String,
}

/// Manager for Go declaration extraction
#[derive(Debug, Clone, Default)]
pub struct ExtractorManager {
    options: ParseOptions,
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse one Go file and link its declarations
    ///
    /// The exclusion marker is not consulted for single files.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedSources> {
        let content = read_file_content(path).inspect_err(|e| warn!("{}", e))?;
        self.parse_source(&path.to_string_lossy(), &content)
    }

    /// Parse Go source held in memory, stamping entities with `filename`
    pub fn parse_source(&self, filename: &str, source: &str) -> Result<ParsedSources> {
        let unit = self.parse_unit(PathBuf::from(filename), source.to_string())?;

        let mut sources = Self::visit_unit(&unit);
        linker::link(&mut sources);
        Ok(sources)
    }

    /// Parse every matching Go file directly inside `dir`
    ///
    /// `filename_pattern` is a regular expression tested against base names.
    /// All units are parsed before any is visited, so a single unparseable
    /// file fails the whole call. Packages are visited in name order and
    /// their files in path order; linking runs once at the end.
    pub fn parse_directory(&self, dir: &Path, filename_pattern: &str) -> Result<ParsedSources> {
        let pattern =
            Regex::new(filename_pattern).map_err(|source| ParseError::InvalidFilenamePattern {
                pattern: filename_pattern.to_string(),
                source,
            })?;

        let files = list_source_files(dir, &pattern).inspect_err(|e| warn!("{}", e))?;
        debug!("Found {} Go files in {}", files.len(), dir.display());

        let mut packages: BTreeMap<String, Vec<CompilationUnit>> = BTreeMap::new();
        for path in files {
            let content = read_file_content(&path).inspect_err(|e| warn!("{}", e))?;
            let unit = self.parse_unit(path, content)?;
            packages
                .entry(unit.package_name.clone())
                .or_default()
                .push(unit);
        }

        let mut sources = ParsedSources::default();
        for (package_name, mut units) in packages {
            units.sort_by(|a, b| a.path.cmp(&b.path));
            debug!("Visiting package {} ({} files)", package_name, units.len());

            for unit in &units {
                if carries_exclusion_marker(&unit.tree.root_node(), &unit.content) {
                    debug!("Skipping build-restricted file {}", unit.path.display());
                    continue;
                }
                sources.extend(Self::visit_unit(unit));
            }
        }

        linker::link(&mut sources);
        Ok(sources)
    }

    /// Build and validate the syntax tree of one unit
    fn parse_unit(&self, path: PathBuf, content: String) -> Result<CompilationUnit> {
        let mut parser = new_parser()?;
        let tree = parser
            .parse(&content, None)
            .ok_or_else(|| ParseError::TreeConstruction { path: path.clone() })
            .inspect_err(|e| warn!("{}", e))?;

        if self.options.dump_syntax_tree {
            debug!("Syntax tree of {}:\n{}", path.display(), tree.root_node().to_sexp());
        }

        let base = BaseExtractor::new(path.to_string_lossy().into_owned(), content);
        let root = tree.root_node();

        if let Some(error) = base.find_first_error(&root) {
            let position = error.start_position();
            let err = ParseError::Syntax {
                path,
                line: position.row + 1,
                column: position.column + 1,
            };
            warn!("{}", err);
            return Err(err);
        }

        let package_name = base
            .find_child_by_type(&root, "package_clause")
            .and_then(|clause| base.find_child_by_type(&clause, "package_identifier"))
            .map(|identifier| base.get_node_text(&identifier));

        let Some(package_name) = package_name else {
            let err = ParseError::MissingPackageClause { path };
            warn!("{}", err);
            return Err(err);
        };

        Ok(CompilationUnit {
            path,
            content: base.content,
            tree,
            package_name,
        })
    }

    fn visit_unit(unit: &CompilationUnit) -> ParsedSources {
        let mut extractor = GoExtractor::new(
            unit.path.to_string_lossy().into_owned(),
            unit.content.clone(),
        );
        extractor.extract(&unit.tree)
    }
}
