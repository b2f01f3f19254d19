//! The `--list` table

use crate::registry::Registry;

const INDEX_HEADER: &str = "index";
const FUNCTION_HEADER: &str = "function";
const HARNESS_HEADER: &str = "harness";
const MIN_INDEX_WIDTH: usize = 5;
const MIN_TEXT_WIDTH: usize = 10;

fn column_width<'a>(min: usize, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.chars().count()).fold(min, usize::max)
}

/// Render every registry case as an index/function/harness table. Column
/// widths are computed over the whole registry; trailing padding is trimmed.
pub fn render_table(registry: &Registry) -> String {
    let indices: Vec<String> = (0..registry.len()).map(|i| i.to_string()).collect();
    let iw = column_width(MIN_INDEX_WIDTH, indices.iter().map(String::as_str));
    let fw = column_width(
        MIN_TEXT_WIDTH,
        registry.cases().iter().map(|c| c.function.as_str()),
    );
    let hw = column_width(
        MIN_TEXT_WIDTH,
        registry.cases().iter().map(|c| c.harness.as_str()),
    );

    let mut lines = Vec::with_capacity(registry.len() + 2);
    lines.push(format!(
        "{INDEX_HEADER:^iw$} | {FUNCTION_HEADER:^fw$} | {HARNESS_HEADER:^hw$}"
    ));
    lines.push(format!(
        "{}-+-{}-+-{}",
        "-".repeat(iw),
        "-".repeat(fw),
        "-".repeat(hw)
    ));
    for (index, case) in indices.iter().zip(registry.cases()) {
        lines.push(format!(
            "{index:>iw$} | {:<fw$} | {:<hw$}",
            case.function, case.harness
        ));
    }

    let mut table = String::new();
    for line in lines {
        table.push_str(line.trim_end());
        table.push('\n');
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TestCase;

    #[test]
    fn test_render_table() {
        let registry = Registry::new(vec![
            TestCase::new("VecMap::<u8, u8>::new", "contract_harnesses::new_1"),
            TestCase::new("VecMap::<u8, u8>::clear", "contract_harnesses::clear"),
        ]);

        insta::assert_snapshot!(render_table(&registry).trim_end(), @r"
        index |        function         |          harness
        ------+-------------------------+--------------------------
            0 | VecMap::<u8, u8>::new   | contract_harnesses::new_1
            1 | VecMap::<u8, u8>::clear | contract_harnesses::clear
        ");
    }

    #[test]
    fn test_minimum_widths_apply_to_short_values() {
        let registry = Registry::new(vec![TestCase::new("f", "h")]);
        let table = render_table(&registry);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[1], format!("{}-+-{}-+-{}", "-".repeat(5), "-".repeat(10), "-".repeat(10)));
        assert_eq!(lines[2], "    0 | f          | h");
    }

    #[test]
    fn test_columns_line_up_for_full_registry() {
        let table = render_table(&Registry::vec_map());
        let separators: Vec<Vec<usize>> = table
            .lines()
            .map(|line| line.match_indices(['|', '+']).map(|(i, _)| i).collect())
            .collect();
        assert_eq!(separators.len(), Registry::vec_map().len() + 2);
        assert!(separators.windows(2).all(|w| w[0] == w[1]));
    }
}
