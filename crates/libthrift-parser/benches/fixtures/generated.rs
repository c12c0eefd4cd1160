use std::fmt::Write;

/// Generates `count` structs, each with `fields_per_struct` numbered
/// fields of mixed types and a default value on every third field.
pub fn many_structs(count: usize, fields_per_struct: usize) -> String {
    let mut out = String::with_capacity(count * fields_per_struct * 40);
    for i in 0..count {
        writeln!(out, "struct Record{i} {{").unwrap();
        for f in 0..fields_per_struct {
            let field_type = match f % 4 {
                0 => "i64",
                1 => "string",
                2 => "list<i32>",
                _ => "map<string, double>",
            };
            if f % 3 == 0 {
                writeln!(out, "  {}: optional {field_type} field{f} = {f};", f + 1).unwrap();
            } else {
                writeln!(out, "  {}: required {field_type} field{f},", f + 1).unwrap();
            }
        }
        writeln!(out, "}}\n").unwrap();
    }
    out
}

/// Generates a service with `count` functions, each taking two arguments
/// and declaring one exception.
pub fn wide_service(count: usize) -> String {
    let mut out = String::with_capacity(count * 100);
    writeln!(out, "service Wide {{").unwrap();
    for i in 0..count {
        writeln!(
            out,
            "  Result{i} call{i}(1: string key, 2: i64 version) throws (1: Failure failure)",
        )
        .unwrap();
    }
    writeln!(out, "}}").unwrap();
    out
}

/// Generates one constant whose value is a list nested `depth` levels
/// deep.
pub fn nested_const_list(depth: usize) -> String {
    format!(
        "const list<i32> NESTED = {}0x1{}",
        "[".repeat(depth),
        "]".repeat(depth),
    )
}

/// Generates a document that is mostly comments, to measure whitespace
/// skipping.
pub fn comment_heavy(count: usize) -> String {
    let mut out = String::with_capacity(count * 120);
    for i in 0..count {
        writeln!(out, "/* Block comment number {i}\n * spanning lines\n */").unwrap();
        writeln!(out, "# hash comment {i}").unwrap();
        writeln!(out, "// slash comment {i}").unwrap();
        writeln!(out, "typedef i32 Alias{i}").unwrap();
    }
    out
}
