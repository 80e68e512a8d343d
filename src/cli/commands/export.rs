use std::path::PathBuf;

use itex_core::{CsvExporter, ExportFile};

use crate::cli::commands::CommandEntry;
use crate::cli::core::{usage, CommandResult, ShellContext};
use crate::cli::output;
use crate::utils::export_file::save_export;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "export",
        "Write the filtered transactions to a CSV file",
        "export [directory]",
        cmd_export,
    )]
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let dir = match args {
        [] => context.config.resolve_export_dir(),
        [dir] => PathBuf::from(dir),
        _ => return Err(usage("export [directory]")),
    };

    let transactions = context.filtered_transactions();
    if transactions.is_empty() {
        output::warning("No transactions to export.");
        return Ok(());
    }

    let contents = CsvExporter::to_csv(&transactions, context.state.categories())?;
    let file = ExportFile::for_date(context.clock.today(), contents);
    let path = save_export(&file, &dir)?;
    output::success(format!(
        "Exported {} transaction(s) to {} ({}).",
        transactions.len(),
        path.display(),
        file.mime_type
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::cli::shell_context::test_support::{run_lines, seeded_context};

    #[test]
    fn export_writes_filtered_rows_with_dated_name() {
        let dir = tempdir().expect("tempdir");
        let mut context = seeded_context();
        let command = format!("export {}", dir.path().display());
        run_lines(&mut context, &["filter vendor adobe", command.as_str()]);

        let path = dir.path().join("it_expense_export_2024-09-15.csv");
        let text = fs::read_to_string(path).expect("export written");
        assert_eq!(
            text,
            "ID,Date,Category,Subcategory,Vendor,Amount,Status\n\
             2,2023-01-20,Software,Adobe Creative Cloud,Adobe,6000,Paid"
        );
    }

    #[test]
    fn empty_selection_writes_nothing() {
        let dir = tempdir().expect("tempdir");
        let mut context = seeded_context();
        let command = format!("export {}", dir.path().display());
        run_lines(&mut context, &["filter vendor nobody", command.as_str()]);

        assert_eq!(fs::read_dir(dir.path()).expect("dir").count(), 0);
    }
}
