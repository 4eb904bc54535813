use std::path::PathBuf;

use miette::IntoDiagnostic;
use variant_lang_driver::Database;

#[derive(clap::Args)]
pub struct Args {
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
    /// Where to write the generated module; defaults to the input path with
    /// a .js extension
    #[clap(short, long, value_name = "OUT")]
    output: Option<PathBuf>,
}

pub fn exec(cmd: Args) -> miette::Result<()> {
    let mut db = Database::from_filesystem();
    let uri = db.resolve_path(&cmd.filepath)?;
    let js = db.js(&uri).map_err(|err| db.pretty_error(&uri, err))?;
    let output = cmd.output.unwrap_or_else(|| cmd.filepath.with_extension("js"));
    std::fs::write(&output, js.as_bytes()).into_diagnostic()?;
    println!("Wrote {}", output.display());
    Ok(())
}
