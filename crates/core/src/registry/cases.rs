use super::{FunctionName, TestCase, harness_name};

const VEC_MAP: &str = "VecMap";

fn vec_map(method: &str) -> FunctionName<'_> {
    FunctionName::new(VEC_MAP, method)
}

/// Contract checks for `VecMap`, in the order they are listed and indexed.
pub fn vec_map_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(vec_map("new").build(), harness_name("new_1")),
        TestCase::new(
            vec_map("new")
                .key("u64")
                .value("std::option::Option<i32>")
                .build(),
            harness_name("new_2"),
        ),
        TestCase::new(vec_map("with_capacity").build(), harness_name("with_capacity")),
        TestCase::new(vec_map("clear").build(), harness_name("clear")),
        TestCase::new(vec_map("insert").build(), harness_name("insert")),
        TestCase::new(
            vec_map("insert")
                .key("u64")
                .value("std::option::Option<i32>")
                .build(),
            harness_name("insert_2"),
        ),
        TestCase::new(vec_map("get").type_args(&["u8"]).build(), harness_name("get")),
        TestCase::new(
            vec_map("get_mut").type_args(&["u8"]).build(),
            harness_name("get_mut"),
        ),
        TestCase::new(
            vec_map("contains_key").type_args(&["u8"]).build(),
            harness_name("contains_key"),
        ),
        TestCase::new(vec_map("remove").type_args(&["u8"]).build(), harness_name("remove"))
            .skipped("shifting the backing vectors needs more unwinding than the default bound allows"),
        TestCase::new(vec_map("len").build(), harness_name("len")),
        TestCase::new(vec_map("is_empty").build(), harness_name("is_empty")),
        TestCase::new(vec_map("reserve").build(), harness_name("reserve"))
            .skipped("allocator growth cannot be modeled by the verifier yet"),
    ]
}
