pub mod formatter;

pub use formatter::{
    format_preview_table, format_risk, format_summary, format_tsv, format_write_log,
    should_use_colors,
};
