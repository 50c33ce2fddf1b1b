//! Script namespaces for GUI documents
//!
//! Each loaded document gets a namespace in the embedded scripting runtime;
//! inline event handlers in the document resolve names against it. The
//! runtime itself is external and reached through [`ScriptRuntime`].

use std::collections::HashMap;
use std::fmt;

use crate::error::{GlueError, GlueResult};

/// Identifies a loaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Value stored in a document namespace
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    /// Absent value
    None,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// String
    Str(String),
    /// Ordered list
    List(Vec<ScriptValue>),
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ScriptValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Names visible to one document's scripts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentNamespace {
    names: HashMap<String, ScriptValue>,
}

impl DocumentNamespace {
    /// Create an empty namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, returning the previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ScriptValue>) -> Option<ScriptValue> {
        self.names.insert(name.into(), value.into())
    }

    /// Look up `name`
    pub fn get(&self, name: &str) -> Option<&ScriptValue> {
        self.names.get(name)
    }

    /// Unbind `name`
    pub fn remove(&mut self, name: &str) -> Option<ScriptValue> {
        self.names.remove(name)
    }

    /// Number of bound names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when nothing is bound
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over bindings in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScriptValue)> {
        self.names.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// The embedded scripting runtime, as seen by the glue
pub trait ScriptRuntime {
    /// Namespace of a document, if the runtime created one
    fn namespace(&self, document: DocumentId) -> Option<&DocumentNamespace>;
}

/// Fetch a document's namespace, failing when the runtime has none
pub fn document_namespace<R>(runtime: &R, document: DocumentId) -> GlueResult<&DocumentNamespace>
where
    R: ScriptRuntime + ?Sized,
{
    runtime
        .namespace(document)
        .ok_or(GlueError::NoNamespace(document.0))
}

/// In-process [`ScriptRuntime`] creating namespaces on demand
#[derive(Debug, Default)]
pub struct NamespaceRegistry {
    namespaces: HashMap<DocumentId, DocumentNamespace>,
}

impl NamespaceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespace of `document`, created empty on first use
    pub fn namespace_mut(&mut self, document: DocumentId) -> &mut DocumentNamespace {
        self.namespaces.entry(document).or_insert_with(|| {
            log::debug!("Created script namespace for document {}", document);
            DocumentNamespace::new()
        })
    }

    /// Drop a document's namespace when the document unloads
    pub fn remove(&mut self, document: DocumentId) -> Option<DocumentNamespace> {
        self.namespaces.remove(&document)
    }

    /// Number of documents with a namespace
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// True when no document has a namespace
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

impl ScriptRuntime for NamespaceRegistry {
    fn namespace(&self, document: DocumentId) -> Option<&DocumentNamespace> {
        self.namespaces.get(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_namespace_is_an_error() {
        let registry = NamespaceRegistry::new();
        let err = document_namespace(&registry, DocumentId(3)).unwrap_err();
        assert!(matches!(err, GlueError::NoNamespace(3)));
    }

    #[test]
    fn test_namespace_created_on_demand() {
        let mut registry = NamespaceRegistry::new();
        let menu = DocumentId(1);
        registry.namespace_mut(menu).set("score", 42i64);
        registry.namespace_mut(menu).set("title", "Main Menu");

        let namespace = document_namespace(&registry, menu).unwrap();
        assert_eq!(namespace.get("score"), Some(&ScriptValue::Int(42)));
        assert_eq!(namespace.get("title"), Some(&ScriptValue::Str("Main Menu".into())));
        assert_eq!(namespace.len(), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_namespaces_are_per_document() {
        let mut registry = NamespaceRegistry::new();
        registry.namespace_mut(DocumentId(1)).set("visible", true);
        registry.namespace_mut(DocumentId(2));

        assert!(document_namespace(&registry, DocumentId(2)).unwrap().is_empty());
        let previous = registry.namespace_mut(DocumentId(1)).set("visible", false);
        assert_eq!(previous, Some(ScriptValue::Bool(true)));

        registry.remove(DocumentId(1));
        assert!(document_namespace(&registry, DocumentId(1)).is_err());
    }
}
