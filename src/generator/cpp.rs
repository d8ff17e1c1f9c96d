use serde_json::Value;

/// C++ keywords that can never be used as declaration, field, or variant
/// names. Unlike Rust there is no raw-identifier escape hatch, so collisions
/// are rejected during validation instead of being rewritten.
const KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char", "class",
    "const", "constexpr", "continue", "decltype", "default", "delete", "do", "double", "else",
    "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if",
    "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "nullptr",
    "operator", "or", "private", "protected", "public", "register", "return", "short", "signed",
    "sizeof", "static", "struct", "switch", "template", "this", "throw", "true", "try", "typedef",
    "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "wchar_t",
    "while",
];

/// Check whether a string is a single valid C++ identifier
///
/// Does not consult the keyword table; see [`is_reserved`] for that.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check whether a string collides with a C++ keyword
pub fn is_reserved(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// Convert a snake_case string to CamelCase
///
/// Used by the linter to suggest conventional type names.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(to_camel_case("wire_point"), "WirePoint");
/// ```
pub fn to_camel_case(s: &str) -> String {
    s.split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Integer representation of a scaled float on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaledRepr {
    U8,
    U16,
    U32,
}

impl ScaledRepr {
    fn cpp(self) -> &'static str {
        match self {
            ScaledRepr::U8 => "uint8_t",
            ScaledRepr::U16 => "uint16_t",
            ScaledRepr::U32 => "uint32_t",
        }
    }
}

/// A parsed wire type from the compact type language
///
/// Descriptions spell types as compact strings (`u8`, `list<string>`,
/// `scaled<u16, -1.0, 1.0>`, `Point`); this is their structured form. The
/// closed set mirrors what the serialization runtime can pack.
#[derive(Debug, Clone, PartialEq)]
pub enum CppType {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
    /// `optional<T>` — one presence bit plus the payload when present
    Optional(Box<CppType>),
    /// `list<T>` — var-int length prefix plus elements
    List(Box<CppType>),
    /// `scaled<repr, min, max>` — a float packed into an integer range; the
    /// bounds are emitted as IEEE-754 bit patterns, which is how the
    /// runtime's `Scaled<U, Min, Max>` template takes them
    Scaled {
        repr: ScaledRepr,
        min: f32,
        max: f32,
    },
    /// A reference to a struct or enum declared elsewhere in the description
    Named(String),
}

impl CppType {
    /// Render the C++ spelling of this type
    ///
    /// `runtime_ns` qualifies runtime-provided templates (`Scaled`).
    pub fn cpp(&self, runtime_ns: &str) -> String {
        match self {
            CppType::Bool => "bool".to_string(),
            CppType::U8 => "uint8_t".to_string(),
            CppType::U16 => "uint16_t".to_string(),
            CppType::U32 => "uint32_t".to_string(),
            CppType::U64 => "uint64_t".to_string(),
            CppType::I8 => "int8_t".to_string(),
            CppType::I16 => "int16_t".to_string(),
            CppType::I32 => "int32_t".to_string(),
            CppType::I64 => "int64_t".to_string(),
            CppType::F32 => "float".to_string(),
            CppType::F64 => "double".to_string(),
            CppType::String => "std::string".to_string(),
            CppType::Optional(inner) => format!("std::optional<{}>", inner.cpp(runtime_ns)),
            CppType::List(inner) => format!("std::vector<{}>", inner.cpp(runtime_ns)),
            CppType::Scaled { repr, min, max } => format!(
                "{}::Scaled<{}, 0x{:08X}, 0x{:08X}>",
                runtime_ns,
                repr.cpp(),
                min.to_bits(),
                max.to_bits()
            ),
            CppType::Named(name) => name.clone(),
        }
    }

    /// Whether function arguments of this type pass by `const&`
    ///
    /// Small value types (numbers, bools, scaled floats) go by value;
    /// everything that may own heap storage goes by const reference. Named
    /// types pass by const reference too: a struct reference is an
    /// aggregate, and the enum case costs nothing.
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            CppType::String | CppType::Optional(_) | CppType::List(_) | CppType::Named(_)
        )
    }

    /// Collect the names of user-declared types this type refers to
    pub fn collect_named_refs<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            CppType::Named(name) => out.push(name),
            CppType::Optional(inner) | CppType::List(inner) => inner.collect_named_refs(out),
            _ => {}
        }
    }
}

/// Parse a compact type string into a [`CppType`]
///
/// # Errors
///
/// Returns a human-readable reason when the string is not part of the type
/// language; the caller attaches declaration position context.
pub fn parse_type(input: &str) -> Result<CppType, String> {
    let s = input.trim();
    if s.is_empty() {
        return Err("empty type".to_string());
    }
    if let Some(inner) = s.strip_prefix("optional<").and_then(|r| r.strip_suffix('>')) {
        return Ok(CppType::Optional(Box::new(parse_type(inner)?)));
    }
    if let Some(inner) = s.strip_prefix("list<").and_then(|r| r.strip_suffix('>')) {
        return Ok(CppType::List(Box::new(parse_type(inner)?)));
    }
    if let Some(inner) = s.strip_prefix("scaled<").and_then(|r| r.strip_suffix('>')) {
        return parse_scaled(inner);
    }
    match s {
        "bool" => Ok(CppType::Bool),
        "u8" => Ok(CppType::U8),
        "u16" => Ok(CppType::U16),
        "u32" => Ok(CppType::U32),
        "u64" => Ok(CppType::U64),
        "i8" => Ok(CppType::I8),
        "i16" => Ok(CppType::I16),
        "i32" => Ok(CppType::I32),
        "i64" => Ok(CppType::I64),
        "f32" => Ok(CppType::F32),
        "f64" => Ok(CppType::F64),
        "string" => Ok(CppType::String),
        other => {
            if is_valid_identifier(other) && !is_reserved(other) {
                Ok(CppType::Named(other.to_string()))
            } else {
                Err(format!("unrecognized type '{other}'"))
            }
        }
    }
}

fn parse_scaled(args: &str) -> Result<CppType, String> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!(
            "scaled takes three arguments (repr, min, max), got '{args}'"
        ));
    }
    let repr = match parts[0] {
        "u8" => ScaledRepr::U8,
        "u16" => ScaledRepr::U16,
        "u32" => ScaledRepr::U32,
        other => {
            return Err(format!(
                "scaled representation must be u8, u16 or u32, got '{other}'"
            ))
        }
    };
    let min: f32 = parts[1]
        .parse()
        .map_err(|_| format!("scaled minimum '{}' is not a number", parts[1]))?;
    let max: f32 = parts[2]
        .parse()
        .map_err(|_| format!("scaled maximum '{}' is not a number", parts[2]))?;
    if !min.is_finite() || !max.is_finite() {
        return Err("scaled bounds must be finite".to_string());
    }
    if min >= max {
        return Err(format!("scaled range is empty ({min} >= {max})"));
    }
    Ok(CppType::Scaled { repr, min, max })
}

/// Storage class for a rendered constant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantStorage {
    /// Scalar types: `constexpr T name = …;`
    Constexpr,
    /// Strings and lists: `inline const T name = …;`
    InlineConst,
}

impl ConstantStorage {
    pub fn cpp(self) -> &'static str {
        match self {
            ConstantStorage::Constexpr => "constexpr",
            ConstantStorage::InlineConst => "inline const",
        }
    }
}

/// Decide how a constant of the given type is stored, if it can be one
///
/// User-declared types, optionals, and scaled floats have no portable
/// constant spelling and return `None`.
pub fn constant_storage(ty: &CppType) -> Option<ConstantStorage> {
    match ty {
        CppType::Bool
        | CppType::U8
        | CppType::U16
        | CppType::U32
        | CppType::U64
        | CppType::I8
        | CppType::I16
        | CppType::I32
        | CppType::I64
        | CppType::F32
        | CppType::F64 => Some(ConstantStorage::Constexpr),
        CppType::String => Some(ConstantStorage::InlineConst),
        // Element literals must themselves be expressible
        CppType::List(inner) => constant_storage(inner).map(|_| ConstantStorage::InlineConst),
        CppType::Optional(_) | CppType::Scaled { .. } | CppType::Named(_) => None,
    }
}

/// Render a description value as a C++ literal of the given type
///
/// Used for constant values and for field/argument defaults. Strict: a value
/// that does not match the type is an error, not a best-effort coercion.
///
/// # Errors
///
/// Returns a human-readable reason on type/value mismatch or out-of-range
/// integers; the caller attaches declaration position context.
pub fn cpp_literal_for_value(ty: &CppType, value: &Value) -> Result<String, String> {
    match (ty, value) {
        (CppType::Bool, Value::Bool(b)) => Ok(b.to_string()),
        (
            CppType::U8
            | CppType::U16
            | CppType::U32
            | CppType::U64
            | CppType::I8
            | CppType::I16
            | CppType::I32
            | CppType::I64,
            Value::Number(n),
        ) => int_literal(ty, n),
        (CppType::F32 | CppType::Scaled { .. }, Value::Number(n)) => {
            let v = n
                .as_f64()
                .ok_or_else(|| format!("value {n} is not representable as a float"))?;
            Ok(format!("{:?}f", v as f32))
        }
        (CppType::F64, Value::Number(n)) => {
            let v = n
                .as_f64()
                .ok_or_else(|| format!("value {n} is not representable as a double"))?;
            Ok(format!("{v:?}"))
        }
        (CppType::String, Value::String(s)) => Ok(format!("{s:?}")),
        (CppType::Optional(_), Value::Null) => Ok("std::nullopt".to_string()),
        (CppType::Optional(inner), v) => cpp_literal_for_value(inner, v),
        (CppType::List(inner), Value::Array(items)) => {
            if items.is_empty() {
                return Ok("{}".to_string());
            }
            let rendered = items
                .iter()
                .map(|item| cpp_literal_for_value(inner, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("{{ {} }}", rendered.join(", ")))
        }
        (CppType::Named(name), _) => Err(format!(
            "cannot render a literal for user-defined type '{name}'"
        )),
        (ty, v) => Err(format!(
            "expected {} value, got {}",
            type_noun(ty),
            value_noun(v)
        )),
    }
}

fn int_literal(ty: &CppType, n: &serde_json::Number) -> Result<String, String> {
    fn unsigned(
        n: &serde_json::Number,
        max: u64,
        suffix: &str,
        name: &str,
    ) -> Result<String, String> {
        match n.as_u64() {
            Some(v) if v <= max => Ok(format!("{v}{suffix}")),
            _ => Err(format!("value {n} does not fit {name}")),
        }
    }
    fn signed(
        n: &serde_json::Number,
        min: i64,
        max: i64,
        suffix: &str,
        name: &str,
    ) -> Result<String, String> {
        match n.as_i64() {
            Some(v) if v >= min && v <= max => Ok(format!("{v}{suffix}")),
            _ => Err(format!("value {n} does not fit {name}")),
        }
    }
    match ty {
        CppType::U8 => unsigned(n, u8::MAX as u64, "", "uint8_t"),
        CppType::U16 => unsigned(n, u16::MAX as u64, "", "uint16_t"),
        CppType::U32 => unsigned(n, u32::MAX as u64, "", "uint32_t"),
        CppType::U64 => unsigned(n, u64::MAX, "ull", "uint64_t"),
        CppType::I8 => signed(n, i8::MIN as i64, i8::MAX as i64, "", "int8_t"),
        CppType::I16 => signed(n, i16::MIN as i64, i16::MAX as i64, "", "int16_t"),
        CppType::I32 => signed(n, i32::MIN as i64, i32::MAX as i64, "", "int32_t"),
        CppType::I64 => signed(n, i64::MIN, i64::MAX, "ll", "int64_t"),
        _ => Err(format!("value {n} is not an integer type")),
    }
}

fn type_noun(ty: &CppType) -> &'static str {
    match ty {
        CppType::Bool => "a boolean",
        CppType::U8 | CppType::U16 | CppType::U32 | CppType::U64 => "an unsigned integer",
        CppType::I8 | CppType::I16 | CppType::I32 | CppType::I64 => "an integer",
        CppType::F32 | CppType::F64 | CppType::Scaled { .. } => "a number",
        CppType::String => "a string",
        CppType::Optional(_) => "an optional",
        CppType::List(_) => "an array",
        CppType::Named(_) => "a user-defined",
    }
}

fn value_noun(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
