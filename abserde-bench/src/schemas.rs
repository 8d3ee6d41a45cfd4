//! Synthetic schema builders for compiler benchmarks.

/// Builds a schema with `records` records of `fields` fields each.
///
/// Every record after the first references its predecessor, carries a list,
/// an optional and a two-member union so that all resolution paths run.
#[must_use]
pub fn synthetic_schema(records: usize, fields: usize) -> String {
    let mut output = String::new();
    for r in 0..records {
        output.push_str(&format!("record R{r} {{\n"));
        for f in 0..fields {
            let ty = match f % 4 {
                0 => "int",
                1 => "str",
                2 => "List[float]",
                _ => "Optional[bool]",
            };
            output.push_str(&format!("    f{f}: {ty}\n"));
        }
        output.push_str(&format!("    u: Union[int, str, List[R{r}]]\n"));
        if r > 0 {
            output.push_str(&format!("    prev: Optional[R{}]\n", r - 1));
        }
        output.push_str("}\n\n");
    }
    output
}
