use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use sitemark_core::{EmitError, compile_document, emit_html, emit_html_sanitized};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug)]
pub enum GenerateError {
    TitleNotFound,
    Emit(EmitError),
    Io(io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::TitleNotFound => write!(f, "no title found"),
            GenerateError::Emit(err) => write!(f, "failed to emit html: {}", err),
            GenerateError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::TitleNotFound => None,
            GenerateError::Emit(err) => Some(err),
            GenerateError::Io(err) => Some(err),
        }
    }
}

impl From<EmitError> for GenerateError {
    fn from(err: EmitError) -> Self {
        GenerateError::Emit(err)
    }
}

impl From<io::Error> for GenerateError {
    fn from(err: io::Error) -> Self {
        GenerateError::Io(err)
    }
}

/// Extracts the page title: the first line starting with `"# "`.
pub fn extract_title(source: &str) -> Result<&str, GenerateError> {
    source
        .lines()
        .find_map(|line| line.strip_prefix("# ").map(str::trim))
        .ok_or(GenerateError::TitleNotFound)
}

/// Renders markdown sources into pages of a fixed template and writes them
/// under a destination directory, mirroring the content directory's layout.
#[derive(Debug, Clone)]
pub struct Generator {
    template: String,
    sanitized: bool,
}

impl Generator {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            sanitized: false,
        }
    }

    /// Routes emission through the sanitizing allow-list.
    pub fn sanitized(mut self, sanitized: bool) -> Self {
        self.sanitized = sanitized;
        self
    }

    /// Substitutes the extracted title and the compiled document into the
    /// template's placeholders.
    pub fn render_page(&self, source: &str) -> Result<String, GenerateError> {
        let title = extract_title(source)?;
        let document = compile_document(source);
        let content = if self.sanitized {
            emit_html_sanitized(&document)?
        } else {
            emit_html(&document)?
        };
        Ok(self
            .template
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, &content))
    }

    pub fn generate_page(&self, from: &Path, dest: &Path) -> Result<(), GenerateError> {
        eprintln!("generating {} -> {}", from.display(), dest.display());
        let source = fs::read_to_string(from)?;
        let html = self.render_page(&source)?;
        fs::write(dest, html)?;
        Ok(())
    }

    /// Walks `content_dir` recursively; every `.md` file becomes an `.html`
    /// file at the mirrored path under `dest_dir`. Other files are ignored.
    pub fn generate_pages(&self, content_dir: &Path, dest_dir: &Path) -> Result<(), GenerateError> {
        fs::create_dir_all(dest_dir)?;
        for entry in fs::read_dir(content_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                self.generate_pages(&path, &dest_dir.join(entry.file_name()))?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("md") {
                if let Some(stem) = path.file_stem() {
                    let dest = dest_dir.join(stem).with_extension("html");
                    self.generate_page(&path, &dest)?;
                }
            }
        }
        Ok(())
    }
}

/// Replaces `to` with a fresh copy of the `from` tree. A pre-existing
/// destination is deleted first.
pub fn copy_static(from: &Path, to: &Path) -> io::Result<()> {
    if to.exists() {
        fs::remove_dir_all(to)?;
    }
    copy_tree(from, to)
}

fn copy_tree(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let path = entry.path();
        let dest = to.join(entry.file_name());
        if path.is_dir() {
            copy_tree(&path, &dest)?;
        } else {
            fs::copy(&path, &dest)?;
        }
    }
    Ok(())
}
