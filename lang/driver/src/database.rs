use std::path::Path;
use std::sync::Arc;

use url::Url;
use variant_lang_ast as ast;
use variant_lang_parser::cst;
use variant_lang_printer::PrintToString;

use crate::cache::Cache;
use crate::fs::{FileSource, FileSystemSource, InMemorySource};
use crate::result::{DriverError, Error};

/// A database tracking a set of source files and everything derived from
/// them. Each stage is cached per file; editing a file invalidates all of its
/// derived stages.
///
/// The whole pipeline is synchronous: every union declaration is lowered and
/// validated in one pass, every match block is compiled in one pass, and no
/// state is shared between files.
pub struct Database {
    /// The source provider of the files (file system or in-memory)
    source: Box<dyn FileSource>,
    /// The source code text of each file
    files: Cache<String>,
    /// The CST of each file (once parsed)
    cst: Cache<Result<Arc<cst::decls::Module>, Error>>,
    /// The lowered, but not yet checked, module with its union models
    ast: Cache<Result<Arc<ast::Module>, Error>>,
    /// The checked module
    checked: Cache<Result<Arc<ast::Module>, Error>>,
    /// The generated JavaScript
    js: Cache<Result<Arc<String>, Error>>,
}

impl Database {
    pub fn from_source(source: impl FileSource + 'static) -> Self {
        Database {
            source: Box::new(source),
            files: Cache::default(),
            cst: Cache::default(),
            ast: Cache::default(),
            checked: Cache::default(),
            js: Cache::default(),
        }
    }

    /// A database backed by the file system.
    pub fn from_filesystem() -> Self {
        Self::from_source(FileSystemSource)
    }

    /// A database backed by memory only, mostly useful for tests.
    pub fn in_memory() -> Self {
        Self::from_source(InMemorySource::new())
    }

    /// The URI for a file path on disk.
    pub fn resolve_path(&self, path: &Path) -> Result<Url, Error> {
        let absolute = std::fs::canonicalize(path)
            .map_err(|_| DriverError::InvalidPath(path.to_path_buf()))?;
        Url::from_file_path(&absolute)
            .map_err(|()| DriverError::InvalidPath(path.to_path_buf()).into())
    }

    pub fn write_source(&mut self, uri: &Url, source: &str) -> Result<(), Error> {
        self.invalidate(uri);
        self.source.write_string(uri, source).map_err(Error::Driver)
    }

    pub fn invalidate(&mut self, uri: &Url) {
        self.files.invalidate(uri);
        self.cst.invalidate(uri);
        self.ast.invalidate(uri);
        self.checked.invalidate(uri);
        self.js.invalidate(uri);
    }

    // Core API
    //
    // Each stage checks its cache first and otherwise recomputes from the
    // stage before it, caching the result (including errors, which are cheap
    // to clone).

    pub fn source(&mut self, uri: &Url) -> Result<String, Error> {
        if let Some(source) = self.files.get(uri) {
            return Ok(source.clone());
        }
        log::debug!("Reading source for: {uri}");
        let source = self.source.read_to_string(uri)?;
        self.files.insert(uri.clone(), source.clone());
        Ok(source)
    }

    pub fn cst(&mut self, uri: &Url) -> Result<Arc<cst::decls::Module>, Error> {
        if let Some(cst) = self.cst.get(uri) {
            return cst.clone();
        }
        log::debug!("Parsing module: {uri}");
        let source = self.source(uri)?;
        let module = variant_lang_parser::parse_module(uri.clone(), &source)
            .map_err(Error::Parser)
            .map(Arc::new);
        self.cst.insert(uri.clone(), module.clone());
        module
    }

    pub fn ast(&mut self, uri: &Url) -> Result<Arc<ast::Module>, Error> {
        if let Some(ast) = self.ast.get(uri) {
            return ast.clone();
        }
        log::debug!("Lowering module: {uri}");
        let module = match self.cst(uri) {
            Ok(cst) => variant_lang_lowering::lower_module(&cst)
                .map_err(Error::Lowering)
                .map(Arc::new),
            Err(err) => Err(err),
        };
        self.ast.insert(uri.clone(), module.clone());
        module
    }

    pub fn checked(&mut self, uri: &Url) -> Result<Arc<ast::Module>, Error> {
        if let Some(checked) = self.checked.get(uri) {
            return checked.clone();
        }
        log::debug!("Checking module: {uri}");
        let module = match self.ast(uri) {
            Ok(ast) => variant_lang_elaborator::check_module(&ast)
                .map_err(Error::Check)
                .map(Arc::new),
            Err(err) => Err(err),
        };
        self.checked.insert(uri.clone(), module.clone());
        module
    }

    pub fn js(&mut self, uri: &Url) -> Result<Arc<String>, Error> {
        if let Some(js) = self.js.get(uri) {
            return js.clone();
        }
        log::debug!("Emitting module: {uri}");
        let js = match self.checked(uri) {
            Ok(module) => variant_lang_backend::compile_module(&module)
                .map_err(Error::Backend)
                .map(Arc::new),
            Err(err) => Err(err),
        };
        self.js.insert(uri.clone(), js.clone());
        js
    }

    /// Prettyprint the lowered module in its canonical form.
    pub fn print_to_string(&mut self, uri: &Url) -> Result<String, Error> {
        let module = self.ast(uri)?;
        Ok(module.as_ref().print_to_string(None))
    }

    /// Attach the offending source to an error so miette can render a
    /// proper report.
    pub fn pretty_error(&self, uri: &Url, err: Error) -> miette::Report {
        let report: miette::Report = err.into();
        match self.files.get(uri) {
            Some(source) => {
                report.with_source_code(miette::NamedSource::new(uri, source.to_owned()))
            }
            None => report,
        }
    }
}

#[cfg(test)]
mod database_tests {
    use super::*;
    use crate::fs::InMemorySource;

    fn db_with(src: &str) -> (Database, Url) {
        let uri = Url::parse("inmemory:///scratch.vt").unwrap();
        let mut source = InMemorySource::new();
        source.insert(uri.clone(), src);
        (Database::from_source(source), uri)
    }

    #[test]
    fn pipeline_runs_end_to_end() {
        let (mut db, uri) = db_with(
            "union Shape := Circle in Float | Empty\n\
             def f(s) := match s as Shape { Circle(r) => r, Empty => zero() }",
        );
        let js = db.js(&uri).unwrap();
        assert!(js.contains("export const Shape"));
        assert!(js.contains("export function f"));
    }

    #[test]
    fn errors_are_cached_and_reported() {
        let (mut db, uri) = db_with("union Shape := Circle\ndef f(s) := Shape.from(Qqq)");
        let err = db.js(&uri).unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Qqq");
        // A second query hits the cache and reports the same error.
        let err = db.js(&uri).unwrap_err();
        assert_eq!(err.to_string(), "undefined union case: Qqq");
    }

    #[test]
    fn editing_a_file_invalidates_derived_stages() {
        let (mut db, uri) = db_with("union Shape := Circle\ndef f() := Shape.from(Qqq)");
        assert!(db.js(&uri).is_err());
        db.write_source(&uri, "union Shape := Circle\ndef f() := Shape.from(Circle)")
            .unwrap();
        assert!(db.js(&uri).is_ok());
    }

    #[test]
    fn fmt_prints_the_canonical_form() {
        let (mut db, uri) = db_with(
            "union Shape := Circle(Float) | {Rect, Float, Float} | Empty",
        );
        let printed = db.print_to_string(&uri).unwrap();
        assert!(printed.contains("Circle in Float"));
        assert!(printed.contains("Rect in Float * Float"));
    }
}
