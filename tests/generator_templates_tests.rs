use serde_json::json;
use wheelwright::description::{
    ConstantDecl, Declaration, Description, EnumDecl, FieldDecl, FunctionDecl, StructDecl,
};
use wheelwright::generator::{generate, generate_with_options, EmitOptions};

fn field(name: &str, ty: &str) -> FieldDecl {
    FieldDecl {
        name: name.to_string(),
        ty: ty.to_string(),
        default: None,
    }
}

fn sample_description() -> Description {
    Description {
        name: None,
        declarations: vec![
            Declaration::Struct(StructDecl {
                name: "Point".to_string(),
                fields: vec![field("x", "f32"), field("y", "f32")],
            }),
            Declaration::Enum(EnumDecl {
                name: "Color".to_string(),
                variants: vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()],
            }),
            Declaration::Function(FunctionDecl {
                name: "describe".to_string(),
                args: vec![field("p", "Point")],
                returns: Some("string".to_string()),
            }),
            Declaration::Constant(ConstantDecl {
                name: "MaxPoints".to_string(),
                ty: "u32".to_string(),
                value: json!(64),
            }),
        ],
    }
}

#[test]
fn test_full_header() {
    let expected = "\
// Generated by wheelwright. Do not edit.
#pragma once
#include <binarywheel.hpp>

namespace geo
{

struct Point
{
\tfloat x;
\tfloat y;

\tauto operator~() const { return std::tie(x, y); }
\tauto operator~() { return std::tie(x, y); }
};

enum class Color : uint8_t
{
\tRed,
\tGreen,
\tBlue,
};

std::string describe(const Point& p);

constexpr uint32_t MaxPoints = 64;

} // namespace geo

template<> constexpr int bw::EnumCount<geo::Color> = 3;
";
    let output = generate(&sample_description(), "geo").unwrap();
    assert_eq!(output, expected);
}

#[test]
fn test_generation_is_deterministic() {
    let description = sample_description();
    let first = generate(&description, "geo").unwrap();
    let second = generate(&description, "geo").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_namespace_wraps_the_same_body() {
    let description = sample_description();
    let plain = generate(&description, "").unwrap();
    let namespaced = generate(&description, "geo").unwrap();

    assert_eq!(namespaced.matches("namespace geo").count(), 2); // opener + closing comment
    assert_eq!(namespaced.matches("\nnamespace geo\n{\n").count(), 1);
    assert_eq!(namespaced.matches("} // namespace geo").count(), 1);

    // The declaration body is identical with and without a namespace
    let body_start = plain.find("struct Point").unwrap();
    let body_end = plain.find("constexpr uint32_t MaxPoints = 64;").unwrap()
        + "constexpr uint32_t MaxPoints = 64;".len();
    let body = &plain[body_start..body_end];
    assert!(namespaced.contains(body));

    // The trailer qualifies enum names only when a namespace is present
    assert!(plain.contains("bw::EnumCount<Color> = 3"));
    assert!(namespaced.contains("bw::EnumCount<geo::Color> = 3"));
}

#[test]
fn test_order_is_preserved() {
    let output = generate(&sample_description(), "").unwrap();
    let point = output.find("struct Point").unwrap();
    let color = output.find("enum class Color").unwrap();
    let describe = output.find("std::string describe").unwrap();
    let constant = output.find("constexpr uint32_t MaxPoints").unwrap();
    assert!(point < color && color < describe && describe < constant);
}

#[test]
fn test_empty_description() {
    let empty = Description::default();
    let output = generate(&empty, "").unwrap();
    assert_eq!(
        output,
        "// Generated by wheelwright. Do not edit.\n#pragma once\n#include <binarywheel.hpp>\n"
    );

    let namespaced = generate(&empty, "geo").unwrap();
    assert!(namespaced.contains("namespace geo\n{\n\n} // namespace geo"));
}

#[test]
fn test_named_description_banner() {
    let description = Description {
        name: Some("testtypes".to_string()),
        declarations: vec![],
    };
    let output = generate(&description, "").unwrap();
    assert!(output.starts_with("// Generated by wheelwright from 'testtypes'. Do not edit.\n"));
}

#[test]
fn test_field_defaults_render_as_initializers() {
    let description = Description {
        name: None,
        declarations: vec![Declaration::Struct(StructDecl {
            name: "Packet".to_string(),
            fields: vec![
                FieldDecl {
                    name: "retries".to_string(),
                    ty: "u8".to_string(),
                    default: Some(json!(3)),
                },
                FieldDecl {
                    name: "tag".to_string(),
                    ty: "optional<string>".to_string(),
                    default: Some(json!(null)),
                },
                FieldDecl {
                    name: "ready".to_string(),
                    ty: "bool".to_string(),
                    default: Some(json!(false)),
                },
            ],
        })],
    };
    let output = generate(&description, "").unwrap();
    assert!(output.contains("\tuint8_t retries = 3;\n"));
    assert!(output.contains("\tstd::optional<std::string> tag = std::nullopt;\n"));
    assert!(output.contains("\tbool ready = false;\n"));
    assert!(output.contains("std::tie(retries, tag, ready)"));
}

#[test]
fn test_scaled_fields_use_float_bit_patterns() {
    let description = Description {
        name: None,
        declarations: vec![Declaration::Struct(StructDecl {
            name: "Reading".to_string(),
            fields: vec![field("level", "scaled<u16, 0.0, 1.0>")],
        })],
    };
    let output = generate(&description, "").unwrap();
    // 0.0f == 0x00000000, 1.0f == 0x3F800000
    assert!(output.contains("\tbw::Scaled<uint16_t, 0x00000000, 0x3F800000> level;\n"));
}

#[test]
fn test_function_defaults_and_passing() {
    let description = Description {
        name: None,
        declarations: vec![Declaration::Function(FunctionDecl {
            name: "connect".to_string(),
            args: vec![
                field("host", "string"),
                FieldDecl {
                    name: "retries".to_string(),
                    ty: "u8".to_string(),
                    default: Some(json!(3)),
                },
            ],
            returns: None,
        })],
    };
    let output = generate(&description, "").unwrap();
    assert!(output.contains("void connect(const std::string& host, uint8_t retries = 3);"));
}

#[test]
fn test_constants_pick_their_storage() {
    let description = Description {
        name: None,
        declarations: vec![
            Declaration::Constant(ConstantDecl {
                name: "Greeting".to_string(),
                ty: "string".to_string(),
                value: json!("hello"),
            }),
            Declaration::Constant(ConstantDecl {
                name: "Sizes".to_string(),
                ty: "list<u16>".to_string(),
                value: json!([1, 2, 3]),
            }),
            Declaration::Constant(ConstantDecl {
                name: "Epsilon".to_string(),
                ty: "f64".to_string(),
                value: json!(0.5),
            }),
        ],
    };
    let output = generate(&description, "").unwrap();
    assert!(output.contains("inline const std::string Greeting = \"hello\";"));
    assert!(output.contains("inline const std::vector<uint16_t> Sizes = { 1, 2, 3 };"));
    assert!(output.contains("constexpr double Epsilon = 0.5;"));
}

#[test]
fn test_emit_options_shape_the_preamble() {
    let options = EmitOptions {
        runtime_include: "wheel/binarywheel.hpp".to_string(),
        runtime_namespace: "wire".to_string(),
        pragma_once: false,
        includes: vec!["cstdint".to_string()],
    };
    let description = Description {
        name: None,
        declarations: vec![
            Declaration::Enum(EnumDecl {
                name: "Mode".to_string(),
                variants: vec!["Off".to_string(), "On".to_string()],
            }),
            Declaration::Struct(StructDecl {
                name: "Reading".to_string(),
                fields: vec![field("level", "scaled<u8, 0.0, 1.0>")],
            }),
        ],
    };
    let output = generate_with_options(&description, "", &options).unwrap();
    assert!(!output.contains("#pragma once"));
    assert!(output.contains("#include <wheel/binarywheel.hpp>\n#include <cstdint>\n"));
    assert!(output.contains("wire::Scaled<uint8_t,"));
    assert!(output.contains("template<> constexpr int wire::EnumCount<Mode> = 2;"));
}

#[test]
fn test_nested_namespace() {
    let output = generate(&sample_description(), "geo::wire").unwrap();
    assert!(output.contains("namespace geo::wire\n{\n"));
    assert!(output.contains("} // namespace geo::wire"));
    assert!(output.contains("bw::EnumCount<geo::wire::Color> = 3;"));
}
