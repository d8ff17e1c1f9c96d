use askama::Template;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use crate::description::{
    ConstantDecl, Declaration, Description, EnumDecl, FunctionDecl, StructDecl,
};

use super::cpp::{self, CppType};
use super::error::GenerateError;
use super::options::EmitOptions;
use super::templates::{
    ConstantTemplateData, CppFieldData, EnumTemplateData, FunctionTemplateData, StructTemplateData,
};

static NAMESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("namespace pattern should be valid")
});

/// Generate a C++ header from a description with default emit options
///
/// Pure: holds no state, touches no files, and yields byte-identical output
/// for identical input. Safe to call from parallel threads.
///
/// # Errors
///
/// Returns [`GenerateError::MalformedDescription`] when a declaration fails
/// validation (the error names the declaration's position), or
/// [`GenerateError::InvalidNamespace`] for a namespace that is not a
/// `::`-separated sequence of C++ identifiers. On error nothing is returned;
/// there is never partial output.
pub fn generate(description: &Description, namespace: &str) -> Result<String, GenerateError> {
    generate_with_options(description, namespace, &EmitOptions::default())
}

/// Generate a C++ header with explicit emit options
///
/// See [`generate`] for the contract; options only affect the preamble and
/// the qualification of runtime templates, never validation semantics.
pub fn generate_with_options(
    description: &Description,
    namespace: &str,
    options: &EmitOptions,
) -> Result<String, GenerateError> {
    check_namespace(namespace)?;

    // Struct and enum names anywhere in the description resolve references;
    // C++ declaration order is the author's concern and the linter's topic.
    let declared: HashSet<&str> = description
        .declarations
        .iter()
        .filter_map(|decl| match decl {
            Declaration::Struct(s) => Some(s.name.as_str()),
            Declaration::Enum(e) => Some(e.name.as_str()),
            Declaration::Function(_) | Declaration::Constant(_) => None,
        })
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut body_parts: Vec<String> = Vec::with_capacity(description.declarations.len());
    let mut enum_counts: Vec<(String, usize)> = Vec::new();

    for (index, decl) in description.declarations.iter().enumerate() {
        check_decl_name(decl.name())
            .map_err(|reason| malformed(index, decl, reason))?;
        if !seen.insert(decl.name()) {
            return Err(malformed(
                index,
                decl,
                format!("duplicate declaration name '{}'", decl.name()),
            ));
        }

        let rendered = match decl {
            Declaration::Struct(s) => lower_struct(s, &declared, options)
                .and_then(|data| render(&data)),
            Declaration::Enum(e) => lower_enum(e).and_then(|data| {
                enum_counts.push((data.name.clone(), data.variants.len()));
                render(&data)
            }),
            Declaration::Function(f) => lower_function(f, &declared, options)
                .and_then(|data| render(&data)),
            Declaration::Constant(c) => lower_constant(c, &declared, options)
                .and_then(|data| render(&data)),
        }
        .map_err(|reason| malformed(index, decl, reason))?;
        body_parts.push(rendered.trim_end().to_string());
    }

    debug!(
        declarations = body_parts.len(),
        enums = enum_counts.len(),
        "rendered declaration bodies"
    );
    Ok(assemble_header(
        description,
        namespace,
        options,
        &body_parts,
        &enum_counts,
    ))
}

fn render<T: Template>(data: &T) -> Result<String, String> {
    data.render()
        .map_err(|e| format!("template rendering failed: {e}"))
}

fn malformed(index: usize, decl: &Declaration, reason: String) -> GenerateError {
    let name = decl.name();
    GenerateError::MalformedDescription {
        index,
        name: (!name.is_empty()).then(|| name.to_string()),
        reason,
    }
}

fn check_namespace(namespace: &str) -> Result<(), GenerateError> {
    if namespace.is_empty() {
        return Ok(());
    }
    if !NAMESPACE_RE.is_match(namespace) || namespace.split("::").any(cpp::is_reserved) {
        return Err(GenerateError::InvalidNamespace {
            namespace: namespace.to_string(),
        });
    }
    Ok(())
}

fn check_decl_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("declaration has an empty name".to_string());
    }
    if !cpp::is_valid_identifier(name) {
        return Err(format!("name '{name}' is not a valid identifier"));
    }
    if cpp::is_reserved(name) {
        return Err(format!("name '{name}' is a C++ keyword"));
    }
    Ok(())
}

fn check_member_name(name: &str, what: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err(format!("{what} has an empty name"));
    }
    if !cpp::is_valid_identifier(name) {
        return Err(format!("{what} name '{name}' is not a valid identifier"));
    }
    if cpp::is_reserved(name) {
        return Err(format!("{what} name '{name}' is a C++ keyword"));
    }
    Ok(())
}

fn parse_resolved_type(input: &str, declared: &HashSet<&str>) -> Result<CppType, String> {
    let ty = cpp::parse_type(input)?;
    let mut refs = Vec::new();
    ty.collect_named_refs(&mut refs);
    for name in refs {
        if !declared.contains(name) {
            return Err(format!("references undeclared type '{name}'"));
        }
    }
    Ok(ty)
}

fn lower_struct(
    decl: &StructDecl,
    declared: &HashSet<&str>,
    options: &EmitOptions,
) -> Result<StructTemplateData, String> {
    let mut field_names: HashSet<&str> = HashSet::new();
    let mut fields = Vec::with_capacity(decl.fields.len());
    for field in &decl.fields {
        check_member_name(&field.name, "field")?;
        if !field_names.insert(field.name.as_str()) {
            return Err(format!("duplicate field name '{}'", field.name));
        }
        let ty = parse_resolved_type(&field.ty, declared)
            .map_err(|r| format!("field '{}': {r}", field.name))?;
        let init = match &field.default {
            Some(value) => cpp::cpp_literal_for_value(&ty, value)
                .map_err(|r| format!("field '{}': default {r}", field.name))?,
            None => String::new(),
        };
        fields.push(CppFieldData {
            ty: ty.cpp(&options.runtime_namespace),
            name: field.name.clone(),
            init,
        });
    }
    let tie = decl
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(StructTemplateData {
        name: decl.name.clone(),
        fields,
        tie,
    })
}

fn lower_enum(decl: &EnumDecl) -> Result<EnumTemplateData, String> {
    // The runtime packs enums into 32 - clz(count - 1) bits; count < 2 makes
    // that expression undefined, so it is rejected here rather than at C++
    // compile time.
    if decl.variants.len() < 2 {
        return Err("enum needs at least two variants".to_string());
    }
    if decl.variants.len() > 256 {
        return Err(format!(
            "enum has {} variants, which does not fit the uint8_t representation",
            decl.variants.len()
        ));
    }
    let mut seen: HashSet<&str> = HashSet::new();
    for variant in &decl.variants {
        check_member_name(variant, "variant")?;
        if !seen.insert(variant.as_str()) {
            return Err(format!("duplicate variant '{variant}'"));
        }
    }
    Ok(EnumTemplateData {
        name: decl.name.clone(),
        repr: "uint8_t".to_string(),
        variants: decl.variants.clone(),
    })
}

fn lower_function(
    decl: &FunctionDecl,
    declared: &HashSet<&str>,
    options: &EmitOptions,
) -> Result<FunctionTemplateData, String> {
    let mut arg_names: HashSet<&str> = HashSet::new();
    let mut params = Vec::with_capacity(decl.args.len());
    for arg in &decl.args {
        check_member_name(&arg.name, "argument")?;
        if !arg_names.insert(arg.name.as_str()) {
            return Err(format!("duplicate argument name '{}'", arg.name));
        }
        let ty = parse_resolved_type(&arg.ty, declared)
            .map_err(|r| format!("argument '{}': {r}", arg.name))?;
        let spelled = ty.cpp(&options.runtime_namespace);
        let mut rendered = if ty.is_aggregate() {
            format!("const {spelled}& {}", arg.name)
        } else {
            format!("{spelled} {}", arg.name)
        };
        if let Some(value) = &arg.default {
            let literal = cpp::cpp_literal_for_value(&ty, value)
                .map_err(|r| format!("argument '{}': default {r}", arg.name))?;
            rendered.push_str(" = ");
            rendered.push_str(&literal);
        }
        params.push(rendered);
    }
    let returns = match &decl.returns {
        Some(ty) => parse_resolved_type(ty, declared)
            .map_err(|r| format!("return type: {r}"))?
            .cpp(&options.runtime_namespace),
        None => "void".to_string(),
    };
    Ok(FunctionTemplateData {
        returns,
        name: decl.name.clone(),
        params: params.join(", "),
    })
}

fn lower_constant(
    decl: &ConstantDecl,
    declared: &HashSet<&str>,
    options: &EmitOptions,
) -> Result<ConstantTemplateData, String> {
    let ty = parse_resolved_type(&decl.ty, declared)?;
    let storage = cpp::constant_storage(&ty)
        .ok_or_else(|| format!("type '{}' cannot be rendered as a constant", decl.ty))?;
    let value = cpp::cpp_literal_for_value(&ty, &decl.value)?;
    Ok(ConstantTemplateData {
        storage: storage.cpp().to_string(),
        ty: ty.cpp(&options.runtime_namespace),
        name: decl.name.clone(),
        value,
    })
}

fn assemble_header(
    description: &Description,
    namespace: &str,
    options: &EmitOptions,
    body_parts: &[String],
    enum_counts: &[(String, usize)],
) -> String {
    let mut out = String::new();
    match &description.name {
        Some(name) => {
            out.push_str(&format!(
                "// Generated by wheelwright from '{name}'. Do not edit.\n"
            ));
        }
        None => out.push_str("// Generated by wheelwright. Do not edit.\n"),
    }
    if options.pragma_once {
        out.push_str("#pragma once\n");
    }
    out.push_str(&format!("#include <{}>\n", options.runtime_include));
    for include in &options.includes {
        out.push_str(&format!("#include <{include}>\n"));
    }

    let body = body_parts.join("\n\n");
    if !namespace.is_empty() {
        out.push_str(&format!("\nnamespace {namespace}\n{{\n"));
        if !body.is_empty() {
            out.push('\n');
            out.push_str(&body);
            out.push('\n');
        }
        out.push_str(&format!("\n}} // namespace {namespace}\n"));
    } else if !body.is_empty() {
        out.push('\n');
        out.push_str(&body);
        out.push('\n');
    }

    if !enum_counts.is_empty() {
        out.push('\n');
        for (name, count) in enum_counts {
            let qualified = if namespace.is_empty() {
                name.clone()
            } else {
                format!("{namespace}::{name}")
            };
            out.push_str(&format!(
                "template<> constexpr int {}::EnumCount<{qualified}> = {count};\n",
                options.runtime_namespace
            ));
        }
    }
    out
}
