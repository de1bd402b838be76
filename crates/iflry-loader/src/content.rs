use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use iflry_config::{FileFormat, SiteConfig};
use iflry_core::Document;
use iflry_resolver::diagnostic;
use serde_json::Value;

/// Load every content document under the configured content directory,
/// skipping documents that fail to decode.
pub fn load_documents(config: &SiteConfig) -> Result<Vec<Document>> {
    load_documents_from_dir(config.content_dir())
}

/// Like [`load_documents`], but any undecodable document is an error.
pub fn load_documents_strict(config: &SiteConfig) -> Result<Vec<Document>> {
    load_documents_strict_from_dir(config.content_dir())
}

/// Load documents from `dir` recursively, in path order.
///
/// A file holds one document or an array of documents. A missing directory
/// means no content. Files or documents that fail to parse are skipped with a
/// diagnostic; only I/O failures are errors.
pub fn load_documents_from_dir(dir: &Path) -> Result<Vec<Document>> {
    load_dir(dir, |path, content| Ok(decode_documents(path, content)))
}

/// Load documents from `dir`, failing on the first file or document that does
/// not parse.
pub fn load_documents_strict_from_dir(dir: &Path) -> Result<Vec<Document>> {
    load_dir(dir, parse_documents)
}

fn load_dir<F>(dir: &Path, decode: F) -> Result<Vec<Document>>
where
    F: Fn(&Path, &str) -> Result<Vec<Document>>,
{
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    collect_files(dir, &mut files)?;
    files.sort();

    let mut documents = Vec::new();
    for path in files {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("read content file: {}", path.display()))?;
        documents.extend(decode(&path, &content)?);
    }
    Ok(documents)
}

/// Recursively walk directory and collect content files.
fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read content directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.context("read directory entry")?;
        let path = entry.path();

        if path.is_dir() {
            collect_files(&path, files)?;
        } else if path.is_file() && is_content_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn file_format(path: &Path) -> Option<FileFormat> {
    path.extension()
        .and_then(|s| s.to_str())
        .and_then(FileFormat::from_extension)
}

/// True for the file extensions the loader reads.
pub fn is_content_file(path: &Path) -> bool {
    file_format(path).is_some()
}

/// Parse JSON or YAML text into a generic value, picking the parser by extension.
pub fn parse_value(path: &Path, content: &str) -> Result<Value> {
    let value = match file_format(path) {
        Some(FileFormat::Json) => serde_json::from_str(content)
            .with_context(|| format!("parse JSON: {}", path.display()))?,
        Some(FileFormat::Yaml | FileFormat::Yml) => serde_yaml::from_str(content)
            .with_context(|| format!("parse YAML: {}", path.display()))?,
        None => anyhow::bail!("unsupported file extension: {}", path.display()),
    };
    Ok(value)
}

/// Documents held by one file's text.
pub fn parse_documents(path: &Path, content: &str) -> Result<Vec<Document>> {
    let values = match parse_value(path, content)? {
        Value::Array(items) => items,
        single => vec![single],
    };

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value)
                .with_context(|| format!("parse document #{index} in {}", path.display()))
        })
        .collect()
}

/// Documents held by one file's text, dropping whatever does not decode.
pub fn decode_documents(path: &Path, content: &str) -> Vec<Document> {
    let values = match parse_value(path, content) {
        Ok(Value::Array(items)) => items,
        Ok(single) => vec![single],
        Err(err) => {
            diagnostic!("skipping {}: {err:#}", path.display());
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(document) => Some(document),
            Err(err) => {
                diagnostic!("skipping document #{index} in {}: {err}", path.display());
                None
            }
        })
        .collect()
}

/// Write a document in the configured format, named after its id.
pub fn write_document(config: &SiteConfig, document: &Document) -> Result<PathBuf> {
    let format = config.content_format();
    let dir = config.content_dir().join(document.kind().name());
    fs::create_dir_all(&dir).with_context(|| format!("create directory: {}", dir.display()))?;

    let path = dir.join(format!("{}.{}", document.id(), format.extension()));
    let text = match format {
        FileFormat::Json => serde_json::to_string_pretty(document).context("serialize document")?,
        FileFormat::Yaml | FileFormat::Yml => {
            serde_yaml::to_string(document).context("serialize document")?
        }
    };
    fs::write(&path, text).with_context(|| format!("write document: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iflry_core::DocumentKind;
    use iflry_resolver::diagnostics;
    use tempfile::tempdir;

    fn config_in(root: &Path, format: FileFormat) -> SiteConfig {
        SiteConfig {
            content_dir: root.join("content"),
            content_format: format,
            ..Default::default()
        }
    }

    #[test]
    fn missing_directory_is_empty() {
        let tmp = tempdir().unwrap();
        let docs = load_documents_from_dir(&tmp.path().join("nope")).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn reads_json_yaml_and_arrays_recursively() {
        let tmp = tempdir().unwrap();
        let content = tmp.path().join("content");
        fs::create_dir_all(content.join("pages/nested")).unwrap();

        fs::write(
            content.join("a-settings.json"),
            r#"{"_type": "configuration", "_id": "cfg-en", "language": "en"}"#,
        )
        .unwrap();
        fs::write(
            content.join("pages/nested/about.yaml"),
            "_type: page\n_id: about\ntitle: About\nlanguage: fr\nslug:\n  current: a-propos\n",
        )
        .unwrap();
        fs::write(
            content.join("pages/people.json"),
            r#"[
                {"_type": "person", "_id": "p1", "name": "Ada", "picture": {}},
                {"_type": "contact", "_id": "c1", "name": "Bo", "picture": {}}
            ]"#,
        )
        .unwrap();
        fs::write(content.join("README.md"), "ignored").unwrap();

        let docs = load_documents(&config_in(tmp.path(), FileFormat::Json)).unwrap();
        let kinds: Vec<_> = docs.iter().map(|d| (d.kind(), d.id().to_string())).collect();
        assert_eq!(
            kinds,
            vec![
                (DocumentKind::Configuration, "cfg-en".to_string()),
                (DocumentKind::Page, "about".to_string()),
                (DocumentKind::Person, "p1".to_string()),
                (DocumentKind::Person, "c1".to_string()),
            ]
        );
    }

    #[test]
    fn parse_errors_name_the_file() {
        let tmp = tempdir().unwrap();
        let content = tmp.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("bad.json"), r#"{"_type": "gallery", "_id": "g"}"#).unwrap();

        let err = load_documents_strict_from_dir(&content).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("bad.json"), "{message}");
    }

    #[test]
    fn lenient_load_skips_undecodable_documents() {
        diagnostics::set_quiet(true);
        let tmp = tempdir().unwrap();
        let content = tmp.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("a-settings.json"),
            r#"{"_type": "configuration", "_id": "cfg-en", "language": "en"}"#,
        )
        .unwrap();
        fs::write(
            content.join("roles.json"),
            r#"[
                {"_type": "role", "_id": "r1", "type": "office", "person": {"_ref": "ada"}, "start": "2024-01-01"},
                {"_type": "partner", "_id": "pt", "title": "Partner", "logo": {}}
            ]"#,
        )
        .unwrap();
        fs::write(content.join("truncated.yaml"), "_type: [").unwrap();

        let before = diagnostics::raised_count();
        let docs = load_documents_from_dir(&content).unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec!["cfg-en", "pt"]);
        assert!(diagnostics::raised_count() >= before + 2);
    }

    #[test]
    fn write_then_load_document() {
        let tmp = tempdir().unwrap();
        let config = config_in(tmp.path(), FileFormat::Yaml);
        let doc: Document = serde_json::from_str(
            r#"{"_type": "vacancy", "_id": "v1", "title": "Intern", "language": "es"}"#,
        )
        .unwrap();

        let path = write_document(&config, &doc).unwrap();
        assert!(path.ends_with("vacancy/v1.yaml"));
        assert_eq!(load_documents(&config).unwrap(), vec![doc]);
    }
}
