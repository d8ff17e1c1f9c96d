use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A full generation request: an ordered sequence of declarations.
///
/// The order of `declarations` is preserved in the rendered output. The
/// generator never reorders, deduplicates, or drops entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Description {
    /// Optional schema name, shown in the banner of the generated header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Declarations in render order
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

/// One named unit to be rendered into the output header
///
/// Descriptions tag each entry with a `kind` field; the closed set of kinds
/// gives the renderer an exhaustive match instead of duck-typed branching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Declaration {
    /// A wire struct; renders with an `operator~` field tie for the runtime
    Struct(StructDecl),
    /// A packed enum; renders `enum class` plus an `EnumCount` specialization
    Enum(EnumDecl),
    /// A free function prototype
    Function(FunctionDecl),
    /// A typed constant
    Constant(ConstantDecl),
}

impl Declaration {
    /// The declared name, independent of kind
    pub fn name(&self) -> &str {
        match self {
            Declaration::Struct(d) => &d.name,
            Declaration::Enum(d) => &d.name,
            Declaration::Function(d) => &d.name,
            Declaration::Constant(d) => &d.name,
        }
    }

    /// The `kind` tag as it appears in description files
    pub fn kind(&self) -> &'static str {
        match self {
            Declaration::Struct(_) => "struct",
            Declaration::Enum(_) => "enum",
            Declaration::Function(_) => "function",
            Declaration::Constant(_) => "constant",
        }
    }
}

/// A struct declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructDecl {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

/// A field of a struct, or an argument of a function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    /// Wire type in the compact type language (e.g. `u8`, `list<string>`,
    /// `scaled<u16, -1.0, 1.0>`, or the name of a declared struct/enum)
    #[serde(rename = "type")]
    pub ty: String,
    /// Optional default, rendered as a member initializer (structs) or a
    /// default argument (functions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// An enum declaration
///
/// The serialization runtime packs enums into `32 - clz(count - 1)` bits, so
/// the variant count is semantically significant, not just cosmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name: String,
    #[serde(default)]
    pub variants: Vec<String>,
}

/// A free function prototype declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    #[serde(default)]
    pub args: Vec<FieldDecl>,
    /// Return type; `None` renders `void`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

/// A typed constant declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: Value,
}
