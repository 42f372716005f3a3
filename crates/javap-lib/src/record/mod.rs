//! Structured records projected from transcript parse trees.
//!
//! The projector reads nodes by label. It expects a tree produced by the
//! [`crate::javap`] grammar and reports [`ProjectError`] for anything else.

mod unescape;

#[cfg(test)]
mod record_tests;

use javap_core::Span;
use javap_peg::{ParseNode, ParseTree};
use serde::Serialize;

use unescape::unescape;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error("parse tree has no `{label}` node")]
    MissingNode { label: &'static str },

    #[error("`{text}` at {span} is not a valid {what}")]
    InvalidNumber {
        text: String,
        span: Span,
        what: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    Constructor,
    StaticInitializer,
}

/// One disassembled class or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRecord {
    pub source_file: String,
    pub kind: TypeKind,
    pub modifiers: Vec<String>,
    /// Qualified name as printed, e.g. `java.util.Map$Entry`.
    pub name: String,
    /// Slash-separated form used in descriptors, e.g. `java/util/Map$Entry`.
    pub internal_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<String>,
    pub extends: Vec<String>,
    pub implements: Vec<String>,
    pub fields: Vec<FieldRecord>,
    pub members: Vec<MemberRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRecord {
    pub modifiers: Vec<String>,
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
}

/// A method, constructor or static initializer with its debug tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    pub kind: MemberKind,
    /// Signature line without the terminating `;`.
    pub signature: String,
    /// Method name, qualified class name for constructors, `<clinit>` for
    /// static initializers.
    pub name: String,
    pub modifiers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    pub parameters: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub throws: Vec<String>,
    pub line_numbers: Vec<LineNumber>,
    pub local_variables: Vec<LocalVariable>,
}

/// `line <line>: <offset>`: bytecode at `offset` starts source line `line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineNumber {
    pub line: u32,
    pub offset: u32,
}

/// Row of a local variable table. `descriptor` is the field descriptor as
/// printed (`I`, `Ljava/lang/String;`, `[J`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalVariable {
    pub start: u32,
    pub length: u32,
    pub slot: u32,
    pub name: String,
    pub descriptor: String,
}

impl ClassRecord {
    pub fn from_tree(tree: &ParseTree, source: &str) -> Result<Self, ProjectError> {
        Projector { source }.class(tree.root())
    }

    /// Descriptor of a reference to this class, e.g. `Ljava/lang/String;`.
    pub fn descriptor(&self) -> String {
        format!("L{};", self.internal_name)
    }
}

struct Projector<'s> {
    source: &'s str,
}

impl<'s> Projector<'s> {
    fn text(&self, node: &ParseNode) -> &'s str {
        node.text(self.source).trim()
    }

    fn texts<'a>(&self, nodes: impl Iterator<Item = &'a ParseNode>) -> Vec<String> {
        nodes.map(|n| self.text(n).to_owned()).collect()
    }

    fn number(&self, node: &ParseNode, what: &'static str) -> Result<u32, ProjectError> {
        let text = self.text(node);
        text.parse().map_err(|_| ProjectError::InvalidNumber {
            text: text.to_owned(),
            span: node.span(),
            what,
        })
    }

    /// Type names of a `JavapTypeList` under `clause`.
    fn type_list(&self, clause: Option<&ParseNode>) -> Vec<String> {
        clause
            .and_then(|c| c.child("JavapTypeList"))
            .map(|list| self.texts(list.children_labeled("JavapClassType")))
            .unwrap_or_default()
    }

    fn class(&self, root: &ParseNode) -> Result<ClassRecord, ProjectError> {
        let header = require(root, "SourceHeader")?;
        let literal = header
            .first("StringLiteral")
            .ok_or(ProjectError::MissingNode {
                label: "StringLiteral",
            })?;
        let quoted = self.text(literal);
        let source_file = unescape(
            quoted
                .strip_prefix('"')
                .and_then(|q| q.strip_suffix('"'))
                .unwrap_or(quoted),
        );

        let class = require(root, "ClassHeader")?;
        let kind = match self.text(require(class, "TypeKind")?) {
            "interface" => TypeKind::Interface,
            _ => TypeKind::Class,
        };
        let name = self.text(require(class, "JavapQualifiedIdentifier")?).to_owned();

        let fields = root
            .find_all("JavapField")
            .map(|f| self.field(f))
            .collect::<Result<_, _>>()?;
        let members = root
            .children_labeled("JavapMember")
            .map(|m| self.member(m))
            .collect::<Result<_, _>>()?;

        Ok(ClassRecord {
            source_file,
            kind,
            modifiers: self.texts(class.children_labeled("Modifier")),
            internal_name: name.replace('.', "/"),
            name,
            type_parameters: class.child("TypeParameters").map(|n| self.text(n).to_owned()),
            extends: self.type_list(class.child("ExtendsClause")),
            implements: self.type_list(class.child("ImplementsClause")),
            fields,
            members,
        })
    }

    fn field(&self, field: &ParseNode) -> Result<FieldRecord, ProjectError> {
        Ok(FieldRecord {
            modifiers: self.texts(field.children_labeled("Modifier")),
            type_name: self.text(require(field, "JavapType")?).to_owned(),
            name: self.text(require(field, "JavapIdentifier")?).to_owned(),
        })
    }

    fn member(&self, member: &ParseNode) -> Result<MemberRecord, ProjectError> {
        let sig = require(member, "MemberSignature")?;
        let signature = self.text(sig).trim_end_matches(';').trim_end().to_owned();

        let (kind, name, return_type, parameters, throws) =
            if let Some(method) = sig.child("MethodSignature") {
                (
                    MemberKind::Method,
                    self.text(require(method, "JavapIdentifier")?).to_owned(),
                    Some(self.text(require(method, "ResultType")?).to_owned()),
                    self.parameters(method)?,
                    self.type_list(method.child("ThrowsClause")),
                )
            } else if let Some(ctor) = sig.child("ConstructorSignature") {
                (
                    MemberKind::Constructor,
                    self.text(require(ctor, "JavapQualifiedIdentifier")?).to_owned(),
                    None,
                    self.parameters(ctor)?,
                    self.type_list(ctor.child("ThrowsClause")),
                )
            } else {
                require(sig, "StaticInitializer")?;
                (
                    MemberKind::StaticInitializer,
                    "<clinit>".to_owned(),
                    None,
                    Vec::new(),
                    Vec::new(),
                )
            };

        let line_numbers = require(member, "LineNumberTable")?
            .children_labeled("LineNumberRow")
            .map(|row| self.line_number(row))
            .collect::<Result<_, _>>()?;
        let local_variables = require(member, "LocalVariableTable")?
            .children_labeled("LocalVariableRow")
            .map(|row| self.local_variable(row))
            .collect::<Result<_, _>>()?;

        Ok(MemberRecord {
            kind,
            signature,
            name,
            modifiers: self.texts(sig.children_labeled("Modifier")),
            type_parameters: sig.child("TypeParameters").map(|n| self.text(n).to_owned()),
            return_type,
            parameters,
            throws,
            line_numbers,
            local_variables,
        })
    }

    fn parameters(&self, signature: &ParseNode) -> Result<Vec<String>, ProjectError> {
        let params = require(signature, "JavapParameters")?;
        Ok(self.texts(params.children_labeled("JavapParameter")))
    }

    fn line_number(&self, row: &ParseNode) -> Result<LineNumber, ProjectError> {
        let mut numbers = row.children_labeled("DecimalNumeral");
        Ok(LineNumber {
            line: self.number(next(&mut numbers)?, "line number")?,
            offset: self.number(next(&mut numbers)?, "bytecode offset")?,
        })
    }

    fn local_variable(&self, row: &ParseNode) -> Result<LocalVariable, ProjectError> {
        let mut numbers = row.children_labeled("DecimalNumeral");
        Ok(LocalVariable {
            start: self.number(next(&mut numbers)?, "start offset")?,
            length: self.number(next(&mut numbers)?, "length")?,
            slot: self.number(next(&mut numbers)?, "slot")?,
            name: self.text(require(row, "LocalName")?).to_owned(),
            descriptor: self.text(require(row, "FieldDescriptor")?).to_owned(),
        })
    }
}

fn require<'a>(node: &'a ParseNode, label: &'static str) -> Result<&'a ParseNode, ProjectError> {
    node.child(label).ok_or(ProjectError::MissingNode { label })
}

fn next<'a>(nodes: &mut impl Iterator<Item = &'a ParseNode>) -> Result<&'a ParseNode, ProjectError> {
    nodes.next().ok_or(ProjectError::MissingNode {
        label: "DecimalNumeral",
    })
}
