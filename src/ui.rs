use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_result(version: &str) {
    println!("{}", version);
}

pub fn display_rollup(parent: &str, updated: &str, child_count: usize) {
    eprintln!(
        "{} {} -> {} ({} child pair{})",
        style("✓").green(),
        style(parent).dim(),
        style(updated).bold(),
        child_count,
        if child_count == 1 { "" } else { "s" }
    );
}
