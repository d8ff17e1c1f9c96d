use askama::Template;

/// A field as it appears in a rendered struct body or parameter list
///
/// `ty` and `init` are already in C++ spelling; lowering happens in
/// [`emit`](super::emit) before these are built.
#[derive(Debug, Clone)]
pub struct CppFieldData {
    /// C++ type spelling (e.g. `std::optional<std::string>`)
    pub ty: String,
    /// Member name
    pub name: String,
    /// Member initializer literal, empty when the field has no default
    pub init: String,
}

/// Template data for a wire struct
///
/// Renders the struct body plus the `operator~` tuple ties the serialization
/// runtime dispatches on.
#[derive(Template)]
#[template(path = "struct.hpp.txt", escape = "none")]
pub struct StructTemplateData {
    /// Struct name
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<CppFieldData>,
    /// Comma-joined field names for the `std::tie` argument list
    pub tie: String,
}

/// Template data for a packed enum
#[derive(Template)]
#[template(path = "enum.hpp.txt", escape = "none")]
pub struct EnumTemplateData {
    /// Enum name
    pub name: String,
    /// Underlying C++ type
    pub repr: String,
    /// Variants in declaration order
    pub variants: Vec<String>,
}

/// Template data for a free function prototype
#[derive(Template)]
#[template(path = "function.hpp.txt", escape = "none")]
pub struct FunctionTemplateData {
    /// C++ return type spelling (`void` when the description omits one)
    pub returns: String,
    /// Function name
    pub name: String,
    /// Fully rendered parameter list, without parentheses
    pub params: String,
}

/// Template data for a typed constant
#[derive(Template)]
#[template(path = "constant.hpp.txt", escape = "none")]
pub struct ConstantTemplateData {
    /// Storage class: `constexpr` or `inline const`
    pub storage: String,
    /// C++ type spelling
    pub ty: String,
    /// Constant name
    pub name: String,
    /// Rendered value literal
    pub value: String,
}
