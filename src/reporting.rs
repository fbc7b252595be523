use tracing::info;

/// Prints per-file token counts and the total through the logger. Purely
/// informational; never touches the document handed to the clipboard.
pub fn print_stats(token_counts: &[(String, usize)]) {
    let total: usize = token_counts.iter().map(|(_, count)| count).sum();
    info!("Overall ({} tokens)", total);

    let mut rows: Vec<&(String, usize)> = token_counts.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    for (label, count) in rows {
        info!("  {} ({} tokens)", label, count);
    }
}
