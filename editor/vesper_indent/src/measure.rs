//! Visual width of existing leading whitespace.

/// Measure the visual width of `line`'s leading whitespace, with tabs
/// advancing to the next multiple of `tab_size` columns.
///
/// This is how a host turns the text of an already-indented line into
/// the `previous_indent` baseline for
/// [`resolve_indent`](crate::resolve_indent). A `tab_size` of zero is
/// treated as one column per tab.
pub fn line_indent_width(line: &str, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += tab_size - (width % tab_size),
            _ => break,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_count_directly() {
        assert_eq!(line_indent_width("    $a = 1;", 4), 4);
        assert_eq!(line_indent_width("$a = 1;", 4), 0);
        assert_eq!(line_indent_width("", 4), 0);
    }

    #[test]
    fn tabs_advance_to_the_next_stop() {
        assert_eq!(line_indent_width("\t$a", 4), 4);
        assert_eq!(line_indent_width("\t\t$a", 4), 8);
        // A space then a tab still lands on the stop, not past it.
        assert_eq!(line_indent_width(" \t$a", 4), 4);
        assert_eq!(line_indent_width("   \t$a", 4), 4);
    }

    #[test]
    fn mixed_tail_spaces_add_on() {
        assert_eq!(line_indent_width("\t  $a", 4), 6);
    }

    #[test]
    fn whitespace_only_line_measures_fully() {
        assert_eq!(line_indent_width("  \t", 4), 4);
    }

    #[test]
    fn zero_tab_size_counts_tabs_as_one_column() {
        assert_eq!(line_indent_width("\t\t$a", 0), 2);
    }
}
